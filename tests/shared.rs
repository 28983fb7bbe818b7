use filetable::*;

#[tokio::test]
async fn test_shared_table_operations() -> FileTableResult<()> {
    let shared = SharedFileTable::default();

    shared.create("a.txt", "/d", "v1").await?;
    assert_eq!(shared.save_version("a.txt", "/d", "v2").await?, 2);

    let report = shared.switch_version("a.txt", "/d", 2).await?;
    assert_eq!(report.contents, "v2");

    shared.copy("a.txt", "/d", "/b").await?;
    shared.move_file("a.txt", "/d", "/e").await?;
    assert!(shared.get("a.txt", "/d").await.is_none());
    assert_eq!(shared.len().await, 2);

    let removed = shared.delete("a.txt", "/e").await?;
    assert_eq!(removed.version, 2);

    let err = shared.delete("a.txt", "/e").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    Ok(())
}

#[tokio::test]
async fn test_clones_share_one_table() {
    let shared = SharedFileTable::new(FileTable::new());
    let other = shared.clone();

    other.create("a.txt", "/d", "v1").await.unwrap();
    assert_eq!(
        shared.get("a.txt", "/d").await.map(|r| r.contents),
        Some("v1".to_string())
    );

    // Still shared, so the table can't be taken out yet.
    let shared = shared.into_inner().unwrap_err();
    drop(other);
    let table = shared.into_inner().expect("last handle");
    assert_eq!(table.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_saves_are_serialized() {
    let shared = SharedFileTable::default();
    shared.create("a.txt", "/d", "v1").await.unwrap();

    let mut handles = Vec::new();
    for i in 0..32 {
        let table = shared.clone();
        handles.push(tokio::spawn(async move {
            table.save_version("a.txt", "/d", &format!("edit {i}")).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let record = shared.get("a.txt", "/d").await.unwrap();
    assert_eq!(record.version, 33);
}

#[tokio::test]
async fn test_backend_as_trait_object() {
    let backend: Box<dyn FileBackend> = Box::new(SharedFileTable::default());
    backend.create("a.txt", "/d", "v1").await.unwrap();
    let err = backend.copy("a.txt", "/d", "d").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
}

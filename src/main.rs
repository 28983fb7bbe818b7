// src/main.rs

use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use filetable::{FileTable, FileTableResult};

/// Walk one file through its whole lifecycle, stopping at the first failure.
fn run(table: &mut FileTable) -> FileTableResult<()> {
    table.create("example.txt", "/documents", "This is a sample file.")?;

    let version = table.save_version(
        "example.txt",
        "/documents",
        "This is an updated version of the file.",
    )?;
    info!(version, "saved new version");

    let report = table.switch_version("example.txt", "/documents", 1)?;
    println!("{report}");

    table.copy("example.txt", "/documents", "/backup")?;
    table.move_file("example.txt", "/documents", "/archive")?;
    table.delete("example.txt", "/archive")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut table = FileTable::new();
    if let Err(e) = run(&mut table) {
        println!("{e}");
        return Ok(());
    }

    for (key, record) in table.records() {
        info!(%key, version = record.version, "remaining file");
    }
    Ok(())
}

//! Composite record keys built from a directory label and a file name.
//!
//! Keys are normalized lexically, the same way for every operation, so that
//! `"/docs"`, `"/docs/"`, `"docs"`, `"//docs/."` and `"/tmp/../docs"` all
//! address the same record:
//!
//! 1. `\` is rewritten to `/` when [`TableConfig::backslash_separator`] is set.
//! 2. Path and name are joined with `/`.
//! 3. Empty and `.` components are dropped; `..` removes the previous
//!    component and is discarded at the root.
//! 4. The result is anchored at `/`.
//!
//! Nothing here touches a real filesystem.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::TableConfig;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileKey(String);

impl FileKey {
    pub fn new(path: &str, name: &str, config: &TableConfig) -> Self {
        let joined = format!("{}/{}", path, name);
        Self(normalize(&joined, config.backslash_separator))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonical, root-anchored form of `raw`.
pub(crate) fn normalize(raw: &str, backslash_separator: bool) -> String {
    let raw = if backslash_separator {
        raw.replace('\\', "/")
    } else {
        raw.to_string()
    };

    let mut parts: Vec<&str> = Vec::new();
    for component in raw.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }

    format!("/{}", parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(path: &str, name: &str) -> String {
        FileKey::new(path, name, &TableConfig::default()).to_string()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/", false), "/");
        assert_eq!(normalize("", false), "/");
        assert_eq!(normalize("/foo", false), "/foo");
        assert_eq!(normalize("foo", false), "/foo");
        assert_eq!(normalize("/foo/bar/", false), "/foo/bar");
        assert_eq!(normalize("//foo///bar", false), "/foo/bar");
        assert_eq!(normalize("/foo/./bar", false), "/foo/bar");
        assert_eq!(normalize("/foo/../bar", false), "/bar");
        assert_eq!(normalize("/../../etc", false), "/etc");
    }

    #[test]
    fn test_equivalent_spellings_share_a_key() {
        let canonical = key("/docs", "a.txt");
        assert_eq!(canonical, "/docs/a.txt");
        for path in ["/docs/", "docs", "//docs/.", "/tmp/../docs", "/docs//"] {
            assert_eq!(key(path, "a.txt"), canonical, "path {path:?}");
        }
    }

    #[test]
    fn test_name_with_separator_is_composed() {
        assert_eq!(key("/docs", "sub/a.txt"), key("/docs/sub", "a.txt"));
    }

    #[test]
    fn test_backslash_only_with_policy() {
        assert_eq!(key("\\docs", "a.txt"), "/\\docs/a.txt");

        let config = TableConfig {
            backslash_separator: true,
            ..TableConfig::default()
        };
        let k = FileKey::new("\\docs\\", "a.txt", &config);
        assert_eq!(k.as_str(), "/docs/a.txt");
    }
}

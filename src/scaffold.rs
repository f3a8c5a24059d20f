//! Install-root directory scaffolding

use std::path::Path;

use crate::error::{InstallError, Result};

/// Create each relative directory chain under `root`
///
/// Equivalent to `mkdir -p` per entry: missing parents are created and
/// already-existing directories are fine. The first failure aborts the
/// whole scaffold.
pub fn ensure_subdirs(root: &Path, relative: &[&str]) -> Result<()> {
    for rel in relative {
        let dir = root.join(rel);
        std::fs::create_dir_all(&dir).map_err(|e| InstallError::create_dir_failed(&dir, &e))?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::layout::INSTALL_SUBDIRS;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_subdirs_creates_full_chains() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().join("nps");

        ensure_subdirs(&root, INSTALL_SUBDIRS).expect("scaffold should succeed");

        assert!(root.join("conf").is_dir());
        assert!(root.join("web/static").is_dir());
        assert!(root.join("web/views").is_dir());
    }

    #[test]
    fn test_ensure_subdirs_is_idempotent() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().join("nps");

        ensure_subdirs(&root, INSTALL_SUBDIRS).expect("first scaffold should succeed");
        ensure_subdirs(&root, INSTALL_SUBDIRS).expect("second scaffold should succeed");

        let entries: Vec<_> = walkdir::WalkDir::new(&root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .map(|e| e.path().to_path_buf())
            .collect();
        // Root, conf, web, web/static, web/views and nothing else.
        assert_eq!(entries.len(), 5);
    }

    #[test]
    fn test_ensure_subdirs_fails_when_chain_is_blocked_by_file() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().join("root");
        std::fs::create_dir_all(&root).expect("Failed to create root");
        // A plain file where a directory is needed makes create_dir_all fail
        // regardless of privileges.
        std::fs::write(root.join("conf"), "in the way").expect("Failed to write blocker");

        let err = ensure_subdirs(&root, &["conf/sub"]).expect_err("scaffold should fail");
        assert!(matches!(err, InstallError::CreateDirFailed { .. }));
    }
}

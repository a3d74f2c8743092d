//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use mkwd_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{MkwdError, MkwdResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> MkwdResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, &e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> MkwdResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, &e, "write file"))
    }

    /// Anything at `path` counts, including a dangling symlink.
    fn exists(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path).is_ok()
    }
}

fn map_io_error(path: &Path, e: &io::Error, operation: &'static str) -> MkwdError {
    ApplicationError::io(path, operation, e).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_replaces_files() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("a").join("b");
        let file = nested.join("f.txt");

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();
        fs.write_file(&file, "first").unwrap();
        fs.write_file(&file, "second").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "second");
    }

    #[test]
    fn missing_parent_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let file = dir.path().join("missing").join("f.txt");

        let err = fs.write_file(&file, "x").unwrap_err();

        assert!(err.is_io());
        match err {
            MkwdError::Application(ApplicationError::FilesystemError { kind, path, .. }) => {
                assert_eq!(kind, io::ErrorKind::NotFound);
                assert_eq!(path, file);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn exists_reports_absent_paths() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        assert!(fs.exists(dir.path()));
        assert!(!fs.exists(&dir.path().join("nope")));
    }
}

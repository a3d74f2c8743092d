//! Structure builder against synthetic trees, through a recording filesystem.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use mkwd_core::application::ApplicationError;
use mkwd_core::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Exists(PathBuf),
    CreateDir(PathBuf),
    Write(PathBuf),
}

#[derive(Default)]
struct RecordingFs {
    calls: Mutex<Vec<Call>>,
    dirs: Mutex<Vec<PathBuf>>,
    files: Mutex<BTreeMap<PathBuf, String>>,
    fail_on: Option<PathBuf>,
}

impl RecordingFs {
    fn failing_on(path: impl Into<PathBuf>) -> Self {
        Self {
            fail_on: Some(path.into()),
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn mutations(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| !matches!(c, Call::Exists(_)))
            .count()
    }

    fn file(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    fn check_fault(&self, path: &Path, operation: &'static str) -> MkwdResult<()> {
        if self.fail_on.as_deref() == Some(path) {
            let err = io::Error::new(io::ErrorKind::PermissionDenied, "injected");
            return Err(ApplicationError::io(path, operation, &err).into());
        }
        Ok(())
    }
}

impl Filesystem for RecordingFs {
    fn create_dir_all(&self, path: &Path) -> MkwdResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::CreateDir(path.to_path_buf()));
        self.check_fault(path, "create directory")?;
        let mut dirs = self.dirs.lock().unwrap();
        if !dirs.iter().any(|d| d == path) {
            dirs.push(path.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> MkwdResult<()> {
        self.calls.lock().unwrap().push(Call::Write(path.to_path_buf()));
        self.check_fault(path, "write file")?;
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.calls.lock().unwrap().push(Call::Exists(path.to_path_buf()));
        self.dirs.lock().unwrap().iter().any(|d| d == path)
            || self.files.lock().unwrap().contains_key(path)
    }
}

fn deep_tree() -> TreeNode {
    TreeNode::dir()
        .with(
            "a",
            TreeNode::dir().with(
                "b",
                TreeNode::dir()
                    .with("c.txt", TreeNode::file("deep"))
                    .with("empty", TreeNode::dir()),
            ),
        )
        .with("top.txt", TreeNode::file("top"))
}

#[test]
fn exists_is_called_once_and_first() {
    let fs = RecordingFs::default();

    StructureBuilder::new(&fs)
        .materialize("/p", &deep_tree(), &NullReporter)
        .unwrap();

    let calls = fs.calls();
    assert_eq!(calls[0], Call::Exists(PathBuf::from("/p")));
    assert_eq!(
        calls.iter().filter(|c| matches!(c, Call::Exists(_))).count(),
        1
    );
    assert_eq!(calls[1], Call::CreateDir(PathBuf::from("/p")));
}

#[test]
fn every_node_is_created_with_its_content() {
    let fs = RecordingFs::default();

    let report = StructureBuilder::new(&fs)
        .materialize("/p", &deep_tree(), &NullReporter)
        .unwrap();

    assert_eq!(fs.file("/p/a/b/c.txt").as_deref(), Some("deep"));
    assert_eq!(fs.file("/p/top.txt").as_deref(), Some("top"));
    assert!(fs.exists(Path::new("/p/a/b/empty")));
    assert_eq!(report.file_count(), 2);
    assert_eq!(report.directory_count(), 3);
}

#[test]
fn reported_files_follow_walk_order() {
    let fs = RecordingFs::default();
    let tree = deep_tree();

    let report = StructureBuilder::new(&fs)
        .materialize("/p", &tree, &NullReporter)
        .unwrap();

    let walked: Vec<PathBuf> = tree
        .walk()
        .into_iter()
        .filter(|(_, node)| node.is_file())
        .map(|(p, _)| p)
        .collect();
    let reported: Vec<PathBuf> = report.paths().map(Path::to_path_buf).collect();
    assert_eq!(reported, walked);
    assert_eq!(reported, vec![PathBuf::from("a/b/c.txt"), PathBuf::from("top.txt")]);
}

#[test]
fn second_run_on_same_root_is_rejected_without_mutation() {
    let fs = RecordingFs::default();
    let builder = StructureBuilder::new(&fs);

    builder.materialize("/p", &deep_tree(), &NullReporter).unwrap();
    let before = fs.mutations();

    let err = builder
        .materialize("/p", &deep_tree(), &NullReporter)
        .unwrap_err();

    assert!(err.is_already_exists());
    assert_eq!(fs.mutations(), before);
}

#[test]
fn failure_leaves_earlier_entries_in_place() {
    let fs = RecordingFs::failing_on("/p/top.txt");

    let err = StructureBuilder::new(&fs)
        .materialize("/p", &deep_tree(), &NullReporter)
        .unwrap_err();

    assert!(err.is_io());
    // Everything under `a/` was created before the failing write.
    assert_eq!(fs.file("/p/a/b/c.txt").as_deref(), Some("deep"));
    assert_eq!(fs.file("/p/top.txt"), None);
}

#[test]
fn root_creation_failure_reports_nothing() {
    let fs = RecordingFs::failing_on("/p");
    let reported = Mutex::new(0usize);
    let reporter = |_: &CreatedEntry| *reported.lock().unwrap() += 1;

    let err = StructureBuilder::new(&fs)
        .materialize("/p", &deep_tree(), &reporter)
        .unwrap_err();

    assert!(err.is_io());
    assert_eq!(*reported.lock().unwrap(), 0);
}

#[test]
fn empty_directory_tree_creates_only_the_root() {
    let fs = RecordingFs::default();

    let report = StructureBuilder::new(&fs)
        .materialize("/p", &TreeNode::dir(), &NullReporter)
        .unwrap();

    assert_eq!(report.file_count(), 0);
    assert_eq!(report.directory_count(), 0);
    assert_eq!(
        fs.calls(),
        vec![
            Call::Exists(PathBuf::from("/p")),
            Call::CreateDir(PathBuf::from("/p"))
        ]
    );
}

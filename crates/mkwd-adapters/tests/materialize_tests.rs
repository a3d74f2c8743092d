//! Built-in templates materialized on a real filesystem.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use mkwd_adapters::{InMemoryCatalog, LocalFilesystem, MemoryFilesystem};
use mkwd_core::prelude::*;
use tempfile::TempDir;
use walkdir::WalkDir;

fn service() -> ScaffoldService {
    ScaffoldService::new(
        Box::new(InMemoryCatalog::with_builtin().unwrap()),
        Box::new(LocalFilesystem::new()),
    )
}

fn spec(name: &str, project_type: ProjectType) -> ProjectSpec {
    ProjectSpec::new(ProjectName::parse(name).unwrap(), project_type)
}

/// Every path under `root` (root excluded), relative, split by kind.
fn on_disk(root: &Path) -> (BTreeSet<PathBuf>, BTreeSet<PathBuf>) {
    let mut dirs = BTreeSet::new();
    let mut files = BTreeSet::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.unwrap();
        let rel = entry.path().strip_prefix(root).unwrap().to_path_buf();
        if entry.file_type().is_dir() {
            dirs.insert(rel);
        } else {
            files.insert(rel);
        }
    }
    (dirs, files)
}

fn expected(tree: &TreeNode) -> (BTreeSet<PathBuf>, BTreeSet<PathBuf>) {
    let mut dirs = BTreeSet::new();
    let mut files = BTreeSet::new();
    for (path, node) in tree.walk() {
        if node.is_dir() {
            dirs.insert(path);
        } else {
            files.insert(path);
        }
    }
    (dirs, files)
}

#[test]
fn disk_matches_tree_exactly_for_every_type() {
    let tmp = TempDir::new().unwrap();
    let service = service();

    for project_type in ProjectType::ALL {
        let spec = spec(&format!("proj_{project_type}"), project_type);
        let root = ProjectRoot::new(tmp.path(), &spec.name).unwrap();
        let tree = service.preview(&spec).unwrap();

        service.scaffold(&spec, &root, &NullReporter).unwrap();

        assert_eq!(on_disk(root.as_path()), expected(&tree), "{project_type}");

        for (path, node) in tree.walk() {
            if let Some(content) = node.content() {
                let written = fs::read_to_string(root.as_path().join(&path)).unwrap();
                assert_eq!(written, content, "{}", path.display());
            }
        }
    }
}

#[test]
fn existing_root_is_left_untouched() {
    let tmp = TempDir::new().unwrap();
    let spec = spec("taken", ProjectType::Api);
    let root = ProjectRoot::new(tmp.path(), &spec.name).unwrap();
    fs::create_dir(root.as_path()).unwrap();
    fs::write(root.as_path().join("keep.txt"), "mine").unwrap();

    let err = service().scaffold(&spec, &root, &NullReporter).unwrap_err();

    assert!(err.is_already_exists());
    let (dirs, files) = on_disk(root.as_path());
    assert!(dirs.is_empty());
    assert_eq!(files, BTreeSet::from([PathBuf::from("keep.txt")]));
}

#[test]
fn existing_file_at_root_path_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let spec = spec("file_in_the_way", ProjectType::Api);
    let root = ProjectRoot::new(tmp.path(), &spec.name).unwrap();
    fs::write(root.as_path(), "not a dir").unwrap();

    let err = service().scaffold(&spec, &root, &NullReporter).unwrap_err();

    assert!(err.is_already_exists());
    assert_eq!(fs::read_to_string(root.as_path()).unwrap(), "not a dir");
}

#[test]
fn second_scaffold_fails_and_preserves_bytes() {
    let tmp = TempDir::new().unwrap();
    let service = service();
    let spec = spec("twice", ProjectType::Api);
    let root = ProjectRoot::new(tmp.path(), &spec.name).unwrap();

    service.scaffold(&spec, &root, &NullReporter).unwrap();
    let main_py = root.as_path().join("app").join("main.py");
    fs::write(&main_py, "edited by hand").unwrap();
    let before = on_disk(root.as_path());

    let err = service.scaffold(&spec, &root, &NullReporter).unwrap_err();

    assert!(err.is_already_exists());
    assert_eq!(on_disk(root.as_path()), before);
    assert_eq!(fs::read_to_string(&main_py).unwrap(), "edited by hand");
}

#[test]
fn missing_parent_directories_are_created() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("nested").join("deeper");
    let spec = spec("demo", ProjectType::Api);
    let root = ProjectRoot::new(&base, &spec.name).unwrap();

    service().scaffold(&spec, &root, &NullReporter).unwrap();

    assert!(base.join("demo").join("README.md").is_file());
}

#[test]
fn readme_carries_unusual_names() {
    let tmp = TempDir::new().unwrap();
    let service = service();

    for name in ["My Portfolio", "café-δ", "snake_case_name"] {
        let spec = spec(name, ProjectType::Portfolio);
        let root = ProjectRoot::new(tmp.path(), &spec.name).unwrap();

        service.scaffold(&spec, &root, &NullReporter).unwrap();

        let readme = fs::read_to_string(root.as_path().join("README.md")).unwrap();
        assert!(readme.starts_with(&format!("# {name}\n")));
        assert!(readme.contains(&format!("\n{name}/\n")));
        assert!(tmp.path().join(name).is_dir());
    }
}

#[test]
fn portfolio_is_strictly_larger_than_api() {
    let service = service();
    let portfolio = service.preview(&spec("p", ProjectType::Portfolio)).unwrap();
    let api = service.preview(&spec("a", ProjectType::Api)).unwrap();

    assert!(portfolio.file_count() > api.file_count());
    assert!(portfolio.directory_count() > api.directory_count());
}

#[test]
fn progress_reports_each_file_once_in_walk_order() {
    let tmp = TempDir::new().unwrap();
    let service = service();
    let spec = spec("progress", ProjectType::Portfolio);
    let root = ProjectRoot::new(tmp.path(), &spec.name).unwrap();
    let tree = service.preview(&spec).unwrap();

    let seen = std::cell::RefCell::new(Vec::new());
    let reporter = |entry: &CreatedEntry| seen.borrow_mut().push(entry.path.clone());
    let report = service.scaffold(&spec, &root, &reporter).unwrap();

    let walked: Vec<PathBuf> = tree
        .walk()
        .into_iter()
        .filter(|(_, node)| node.is_file())
        .map(|(p, _)| p)
        .collect();
    assert_eq!(*seen.borrow(), walked);

    let (dirs, files) = on_disk(root.as_path());
    assert_eq!(seen.borrow().len(), files.len());
    assert_eq!(report.file_count(), files.len());
    assert_eq!(report.directory_count(), dirs.len());
}

#[test]
fn injected_failure_keeps_partial_tree() {
    let fs = MemoryFilesystem::new();
    let handle = fs.clone();
    let service = ScaffoldService::new(
        Box::new(InMemoryCatalog::with_builtin().unwrap()),
        Box::new(fs),
    );
    let spec = spec("partial", ProjectType::Api);
    let root = ProjectRoot::new("/work", &spec.name).unwrap();
    handle.fail_on("/work/partial/tests");

    let err = service.scaffold(&spec, &root, &NullReporter).unwrap_err();

    assert!(err.is_io());
    assert!(handle.read_file(Path::new("/work/partial/app/main.py")).is_some());
    assert!(!handle.exists(Path::new("/work/partial/tests")));
    assert!(!handle.exists(Path::new("/work/partial/README.md")));
}

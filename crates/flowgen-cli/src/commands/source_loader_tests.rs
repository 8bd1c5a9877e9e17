use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::SourceArgs;
use super::source_loader::{LoadError, discover, load_json, load_sources};

fn touch(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn relative(dir: &Path, files: Vec<PathBuf>) -> Vec<String> {
    files
        .iter()
        .map(|f| f.strip_prefix(dir).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

fn package() -> TempDir {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "b.go", "package m\n\ntype B int\n");
    touch(dir.path(), "a.go", "package m\n\ntype A int\n");
    touch(dir.path(), "a_test.go", "package m\n");
    touch(dir.path(), "README.md", "# models\n");
    touch(dir.path(), "sub/c.go", "package sub\n\ntype C int\n");
    touch(dir.path(), "testdata/x.go", "package x\n");
    touch(dir.path(), ".git/y.go", "package y\n");
    touch(dir.path(), "_old/z.go", "package z\n");
    dir
}

#[test]
fn discover_recursive() {
    let dir = package();
    let files = discover(dir.path(), true).unwrap();
    assert_eq!(relative(dir.path(), files), vec!["a.go", "b.go", "sub/c.go"]);
}

#[test]
fn discover_flat() {
    let dir = package();
    let files = discover(dir.path(), false).unwrap();
    assert_eq!(relative(dir.path(), files), vec!["a.go", "b.go"]);
}

#[test]
fn load_sources_keeps_argument_order() {
    let dir = package();
    let args = SourceArgs {
        paths: vec![dir.path().join("sub"), dir.path().join("b.go")],
        recursive: true,
    };
    let map = load_sources(&args).unwrap();
    let contents: Vec<_> = map.iter().map(|s| s.content).collect();
    assert_eq!(
        contents,
        vec!["package sub\n\ntype C int\n", "package m\n\ntype B int\n"]
    );
}

#[test]
fn explicit_test_file_is_loaded() {
    let dir = package();
    let args = SourceArgs {
        paths: vec![dir.path().join("a_test.go")],
        recursive: true,
    };
    assert_eq!(load_sources(&args).unwrap().len(), 1);
}

#[test]
fn load_errors() {
    let dir = TempDir::new().unwrap();
    let args = SourceArgs {
        paths: vec![dir.path().to_path_buf()],
        recursive: true,
    };
    assert!(matches!(load_sources(&args), Err(LoadError::NoSources(_))));

    let args = SourceArgs {
        paths: vec![dir.path().join("missing.go")],
        recursive: true,
    };
    let err = load_sources(&args).unwrap_err();
    assert!(matches!(err, LoadError::NotFound(_)));
    assert!(err.to_string().starts_with("no such file or directory: '"));
}

#[test]
fn unreadable_directory_is_an_error() {
    let dir = package();
    let file = dir.path().join("a.go");
    let err = discover(&file, false).unwrap_err();
    match &err {
        LoadError::Read { path, .. } => assert_eq!(path, &file.display().to_string()),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with("failed to read '"));
}

#[test]
fn json_declarations() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("decls.json");
    fs::write(&path, "[]").unwrap();
    assert!(load_json(&path).unwrap().is_empty());

    fs::write(&path, "{").unwrap();
    let err = load_json(&path).unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));
    assert!(err.to_string().contains("invalid declarations in"));
}

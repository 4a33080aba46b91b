//! Integration tests for error propagation

use super::test_utils::memory_engine;
use dirgest::{DigestEngine, DigestError, MemoryFileSystem};
use std::io::ErrorKind;
use std::path::PathBuf;

#[tokio::test]
async fn test_nonexistent_root_fails() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    let err = DigestEngine::new("sha1")
        .unwrap()
        .digest(&missing)
        .await
        .unwrap_err();
    assert_eq!(err.io_kind(), Some(ErrorKind::NotFound));
}

#[tokio::test]
async fn test_root_that_is_a_file_fails() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let file = temp_dir.path().join("plain.txt");
    std::fs::write(&file, "x").unwrap();

    let result = DigestEngine::new("sha1").unwrap().digest(&file).await;
    assert!(matches!(result, Err(DigestError::Io { .. })));
}

#[tokio::test]
async fn test_empty_root_path_is_argument_error() {
    let result = memory_engine(MemoryFileSystem::new(), "sha1").digest("").await;
    assert!(matches!(result, Err(DigestError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_unreadable_nested_file_fails_entire_call() {
    let memfs = MemoryFileSystem::new();
    for i in 0..20 {
        memfs.add_file(format!("/r/wide/f{}.txt", i), format!("{}", i));
    }
    memfs
        .add_file("/r/a/b/c/secret.txt", "hidden")
        .add_file("/r/z.txt", "z")
        .fail_on("/r/a/b/c/secret.txt");

    let err = memory_engine(memfs, "sha256").digest("/r").await.unwrap_err();
    match err {
        DigestError::Io { path, source } => {
            assert_eq!(path, PathBuf::from("/r/a/b/c/secret.txt"));
            assert_eq!(source.kind(), ErrorKind::PermissionDenied);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_unlistable_subdirectory_fails_entire_call() {
    let memfs = MemoryFileSystem::new();
    memfs
        .add_file("/r/ok.txt", "ok")
        .add_file("/r/locked/inner.txt", "x")
        .fail_on("/r/locked");

    let err = memory_engine(memfs, "blake3").digest("/r").await.unwrap_err();
    assert_eq!(err.io_kind(), Some(ErrorKind::PermissionDenied));
}

#[tokio::test]
async fn test_engine_is_reusable_after_failure() {
    let memfs = MemoryFileSystem::new();
    memfs
        .add_file("/bad/x.txt", "x")
        .fail_on("/bad/x.txt")
        .add_file("/good/y.txt", "y");
    let engine = memory_engine(memfs, "sha1");

    assert!(engine.digest("/bad").await.is_err());
    let node = engine.digest("/good").await.unwrap();
    assert_eq!(node.children.len(), 1);
}

#[test]
fn test_unknown_algorithm_fails_before_any_path() {
    let err = DigestEngine::new("md4").err().unwrap();
    let msg = err.to_string();
    assert!(msg.contains("'md4'"));
    for name in dirgest::Algorithm::supported() {
        assert!(msg.contains(name));
    }
}

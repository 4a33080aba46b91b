//! Integration tests for digest determinism and content sensitivity

use super::test_utils::{is_hex_digest, memory_engine, temp_tree, write_file};
use dirgest::{Algorithm, DigestEngine, DigestEntry, MemoryFileSystem};

/// Root with `1.js` = "foo" and `2.js` = "bar"
#[tokio::test]
async fn test_two_file_scenario() {
    let memfs = MemoryFileSystem::new();
    memfs.add_file("/a/1.js", "foo").add_file("/a/2.js", "bar");
    let engine = memory_engine(memfs, "sha1");

    let first = engine.digest("/a").await.unwrap();
    assert_eq!(first.children.len(), 2);
    for entry in first.children.values() {
        assert!(is_hex_digest(entry.digest(), 40));
    }
    assert!(is_hex_digest(&first.digest, 40));

    let second = engine.digest("/a").await.unwrap();
    assert_eq!(first, second);
}

/// Adding an empty file changes the top-level hash
#[tokio::test]
async fn test_adding_empty_file_changes_hash() {
    let temp_dir = temp_tree(&[("1.js", "foo")]);
    let engine = DigestEngine::new("sha1").unwrap();

    let before = engine.digest(temp_dir.path()).await.unwrap();
    write_file(temp_dir.path(), "2.js", "");
    let after = engine.digest(temp_dir.path()).await.unwrap();

    assert_ne!(before.digest, after.digest);
    assert_eq!(after.children.len(), 2);
}

/// Same content on disk produces the same tree regardless of creation order
#[tokio::test]
async fn test_creation_order_does_not_matter() {
    let forward = temp_tree(&[
        ("a.txt", "1"),
        ("b.txt", "2"),
        ("dir/c.txt", "3"),
        ("dir/nested/d.txt", "4"),
    ]);
    let backward = temp_tree(&[
        ("dir/nested/d.txt", "4"),
        ("dir/c.txt", "3"),
        ("b.txt", "2"),
        ("a.txt", "1"),
    ]);
    let engine = DigestEngine::new("sha256").unwrap();

    let first = engine.digest(forward.path()).await.unwrap();
    let second = engine.digest(backward.path()).await.unwrap();
    assert_eq!(first, second);
}

/// A change deep in the tree changes every ancestor but not unrelated siblings
#[tokio::test]
async fn test_nested_change_propagates_to_ancestors() {
    let temp_dir = temp_tree(&[
        ("top.txt", "top"),
        ("left/leaf.txt", "left"),
        ("right/inner/leaf.txt", "right"),
    ]);
    let engine = DigestEngine::new("blake3").unwrap();
    let before = engine.digest(temp_dir.path()).await.unwrap();

    write_file(temp_dir.path(), "right/inner/new.txt", "");
    let after = engine.digest(temp_dir.path()).await.unwrap();

    assert_ne!(before.digest, after.digest);
    assert_ne!(before.children["right"], after.children["right"]);
    assert_eq!(before.children["left"], after.children["left"]);
    assert_eq!(before.children["top.txt"], after.children["top.txt"]);

    match &after.children["right"] {
        DigestEntry::Directory(right) => assert!(right.children["inner"].is_directory()),
        other => panic!("expected directory, got {:?}", other),
    }
}

/// The real and in-memory filesystems agree on identical content
#[tokio::test]
async fn test_memory_and_os_filesystems_agree() {
    let temp_dir = temp_tree(&[("x/1.txt", "one"), ("2.txt", "two")]);
    let os_node = DigestEngine::new("sha512")
        .unwrap()
        .digest(temp_dir.path())
        .await
        .unwrap();

    let memfs = MemoryFileSystem::new();
    memfs.add_file("/m/2.txt", "two").add_file("/m/x/1.txt", "one");
    let mem_node = memory_engine(memfs, "sha512").digest("/m").await.unwrap();

    assert_eq!(os_node, mem_node);
    assert_eq!(os_node.digest.len(), Algorithm::Sha512.hex_len());
}

/// An empty directory yields the empty sentinel
#[tokio::test]
async fn test_empty_directory_sentinel_on_disk() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let node = DigestEngine::new("sha1")
        .unwrap()
        .digest(temp_dir.path())
        .await
        .unwrap();
    assert_eq!(node.digest, "");
    assert!(node.children.is_empty());
}

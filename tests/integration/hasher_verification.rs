//! Hasher Implementation Verification Tests
//!
//! Checks leaf and directory digests against the underlying hash crates.

use dirgest::tree::hasher::{self, Algorithm};
use dirgest::{DigestEntry, DigestNode};
use sha2::Digest;
use std::collections::BTreeMap;

#[test]
fn test_content_hash_matches_blake3() {
    let content = b"test content";
    let expected = hex::encode(blake3::hash(content).as_bytes());
    assert_eq!(hasher::hash_content(Algorithm::Blake3, content), expected);
}

#[test]
fn test_content_hash_matches_sha256() {
    let content = b"test content";
    let expected = hex::encode(sha2::Sha256::digest(content));
    assert_eq!(hasher::hash_content(Algorithm::Sha256, content), expected);
}

#[test]
fn test_empty_file_digest_is_empty_input_digest() {
    assert_eq!(
        hasher::hash_content(Algorithm::Sha1, b""),
        "da39a3ee5e6b4b0d3255bfef95601890afd80709"
    );
}

#[test]
fn test_directory_digest_ignores_insertion_order() {
    let mut forward = BTreeMap::new();
    forward.insert("a".to_string(), DigestEntry::File("01".to_string()));
    forward.insert("b".to_string(), DigestEntry::File("02".to_string()));

    let mut backward = BTreeMap::new();
    backward.insert("b".to_string(), DigestEntry::File("02".to_string()));
    backward.insert("a".to_string(), DigestEntry::File("01".to_string()));

    assert_eq!(
        hasher::summarize(Algorithm::Sha1, forward).digest,
        hasher::summarize(Algorithm::Sha1, backward).digest
    );
}

#[test]
fn test_directory_digest_matches_manual_fold() {
    let leaf_a = hasher::hash_content(Algorithm::Sha256, b"a");
    let leaf_b = hasher::hash_content(Algorithm::Sha256, b"b");

    let mut children = BTreeMap::new();
    children.insert("z.txt".to_string(), DigestEntry::File(leaf_a.clone()));
    children.insert(
        "dir".to_string(),
        DigestEntry::Directory(DigestNode {
            digest: leaf_b.clone(),
            children: BTreeMap::new(),
        }),
    );

    let mut manual = sha2::Sha256::new();
    manual.update(leaf_b.as_bytes());
    manual.update(leaf_a.as_bytes());

    assert_eq!(
        hasher::summarize(Algorithm::Sha256, children).digest,
        hex::encode(manual.finalize())
    );
}

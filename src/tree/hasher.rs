//! Hash computation for files and directories
//!
//! Files are hashed over their raw bytes. A directory hash is the hash of its
//! children's hex digests, fed in lexicographic name order.

use crate::error::DigestError;
use crate::tree::node::{DigestEntry, DigestNode};
use sha2::Digest;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Supported hash algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Blake3,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    const ALL: [Algorithm; 7] = [
        Algorithm::Blake3,
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
    ];

    /// Canonical names of every supported algorithm
    pub fn supported() -> Vec<&'static str> {
        Self::ALL.iter().map(|a| a.name()).collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Blake3 => "blake3",
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha224 => "sha224",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Length of a hex digest produced by this algorithm
    pub fn hex_len(&self) -> usize {
        match self {
            Algorithm::Blake3 => 64,
            Algorithm::Md5 => 32,
            Algorithm::Sha1 => 40,
            Algorithm::Sha224 => 56,
            Algorithm::Sha256 => 64,
            Algorithm::Sha384 => 96,
            Algorithm::Sha512 => 128,
        }
    }

    /// Create a fresh incremental hasher
    pub fn hasher(&self) -> ContentHasher {
        match self {
            Algorithm::Blake3 => ContentHasher::Blake3(Box::new(blake3::Hasher::new())),
            Algorithm::Md5 => ContentHasher::Md5(md5::Md5::new()),
            Algorithm::Sha1 => ContentHasher::Sha1(sha1::Sha1::new()),
            Algorithm::Sha224 => ContentHasher::Sha224(sha2::Sha224::new()),
            Algorithm::Sha256 => ContentHasher::Sha256(sha2::Sha256::new()),
            Algorithm::Sha384 => ContentHasher::Sha384(sha2::Sha384::new()),
            Algorithm::Sha512 => ContentHasher::Sha512(sha2::Sha512::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| DigestError::UnsupportedAlgorithm {
                name: s.to_string(),
                supported: Self::supported().join(", "),
            })
    }
}

/// Incremental hasher for one of the supported algorithms
pub enum ContentHasher {
    Blake3(Box<blake3::Hasher>),
    Md5(md5::Md5),
    Sha1(sha1::Sha1),
    Sha224(sha2::Sha224),
    Sha256(sha2::Sha256),
    Sha384(sha2::Sha384),
    Sha512(sha2::Sha512),
}

impl ContentHasher {
    pub fn update(&mut self, data: &[u8]) {
        match self {
            ContentHasher::Blake3(h) => {
                h.update(data);
            }
            ContentHasher::Md5(h) => h.update(data),
            ContentHasher::Sha1(h) => h.update(data),
            ContentHasher::Sha224(h) => h.update(data),
            ContentHasher::Sha256(h) => h.update(data),
            ContentHasher::Sha384(h) => h.update(data),
            ContentHasher::Sha512(h) => h.update(data),
        }
    }

    /// Consume the hasher and return the lowercase hex digest
    pub fn finalize_hex(self) -> String {
        match self {
            ContentHasher::Blake3(h) => hex::encode(h.finalize().as_bytes()),
            ContentHasher::Md5(h) => hex::encode(h.finalize()),
            ContentHasher::Sha1(h) => hex::encode(h.finalize()),
            ContentHasher::Sha224(h) => hex::encode(h.finalize()),
            ContentHasher::Sha256(h) => hex::encode(h.finalize()),
            ContentHasher::Sha384(h) => hex::encode(h.finalize()),
            ContentHasher::Sha512(h) => hex::encode(h.finalize()),
        }
    }
}

/// Compute the hex digest of file content
///
/// Empty content yields the algorithm's digest of the empty input, never `""`.
pub fn hash_content(algorithm: Algorithm, content: &[u8]) -> String {
    let mut hasher = algorithm.hasher();
    hasher.update(content);
    hasher.finalize_hex()
}

/// Fold a directory's children into that directory's digest
///
/// Children are visited in lexicographic name order (the `BTreeMap` order);
/// each child contributes only its hex digest string. A directory without
/// children gets the empty sentinel `""`.
pub fn summarize(algorithm: Algorithm, children: BTreeMap<String, DigestEntry>) -> DigestNode {
    if children.is_empty() {
        return DigestNode::empty();
    }

    let mut hasher = algorithm.hasher();
    for entry in children.values() {
        hasher.update(entry.digest().as_bytes());
    }

    DigestNode {
        digest: hasher.finalize_hex(),
        children,
    }
}

//! Dirgest: Deterministic Directory Digests
//!
//! Computes one content digest for an entire directory tree, so callers can
//! tell whether anything under a root changed without keeping a manifest.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tree;

pub use error::DigestError;
pub use tree::engine::DigestEngine;
pub use tree::fs::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use tree::hasher::Algorithm;
pub use tree::node::{DigestEntry, DigestNode};

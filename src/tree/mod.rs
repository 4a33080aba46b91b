//! Directory Digest Tree
//!
//! Reduces a directory tree to a single deterministic hash: every regular
//! file is hashed, and every directory's hash is derived from its children's.

pub mod engine;
pub mod fs;
pub mod hasher;
pub mod node;
pub mod walker;

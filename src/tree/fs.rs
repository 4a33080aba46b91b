//! Filesystem capability used by the digest engine
//!
//! The engine only needs two operations: list a directory with entry kinds,
//! and read a file's bytes. `OsFileSystem` is the real implementation;
//! `MemoryFileSystem` is an in-memory tree for tests and callers that want
//! to digest content that never touches disk.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Kind of a directory entry, classified without following symlinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    /// Sockets, devices, fifos
    Other,
}

/// One immediate entry of a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Name as stored on disk; child paths are built from this
    pub file_name: OsString,
    /// Display form of `file_name`, lossy for non-UTF-8 names
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(file_name: impl Into<OsString>, kind: EntryKind) -> Self {
        let file_name = file_name.into();
        let name = file_name.to_string_lossy().into_owned();
        Self {
            file_name,
            name,
            kind,
        }
    }
}

/// Read-only filesystem access
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// List the immediate entries of a directory
    async fn list_entries(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Read the full content of a regular file
    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// The operating system's filesystem, via `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

#[async_trait]
impl FileSystem for OsFileSystem {
    async fn list_entries(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut read_dir = tokio::fs::read_dir(path).await?;
        let mut entries = Vec::new();

        while let Some(entry) = read_dir.next_entry().await? {
            // DirEntry::file_type does not traverse symlinks
            let file_type = entry.file_type().await?;
            let kind = if file_type.is_symlink() {
                EntryKind::Symlink
            } else if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };
            entries.push(DirEntry::new(entry.file_name(), kind));
        }

        Ok(entries)
    }

    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}

#[derive(Debug, Clone)]
enum MemoryNode {
    File(Vec<u8>),
    /// Child names in insertion order; listing returns them in this order
    Directory(Vec<String>),
    Symlink,
    Other,
}

impl MemoryNode {
    fn kind(&self) -> EntryKind {
        match self {
            MemoryNode::File(_) => EntryKind::File,
            MemoryNode::Directory(_) => EntryKind::Directory,
            MemoryNode::Symlink => EntryKind::Symlink,
            MemoryNode::Other => EntryKind::Other,
        }
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    nodes: HashMap<PathBuf, MemoryNode>,
    failing: HashSet<PathBuf>,
}

/// In-memory filesystem
///
/// Paths are normalized lexically (`.` dropped, `..` popped) so
/// `/a/./b` and `/a/b` refer to the same node. Parent directories are
/// created on demand. Directory listings come back in insertion order,
/// which lets tests choose the enumeration order the engine sees.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    state: RwLock<MemoryState>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a regular file
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) -> &Self {
        self.insert(path.as_ref(), MemoryNode::File(content.into()));
        self
    }

    /// Add an empty directory
    pub fn add_dir(&self, path: impl AsRef<Path>) -> &Self {
        let path = normalize(path.as_ref());
        let mut state = self.state.write();
        ensure_dir(&mut state, &path);
        drop(state);
        self
    }

    /// Add a symlink entry; its target is irrelevant since links are never followed
    pub fn add_symlink(&self, path: impl AsRef<Path>) -> &Self {
        self.insert(path.as_ref(), MemoryNode::Symlink);
        self
    }

    /// Add a special entry (socket, device, fifo)
    pub fn add_special(&self, path: impl AsRef<Path>) -> &Self {
        self.insert(path.as_ref(), MemoryNode::Other);
        self
    }

    /// Make every read or listing of `path` fail with a permission error
    pub fn fail_on(&self, path: impl AsRef<Path>) -> &Self {
        self.state.write().failing.insert(normalize(path.as_ref()));
        self
    }

    fn insert(&self, path: &Path, node: MemoryNode) {
        let path = normalize(path);
        let mut state = self.state.write();
        if let Some(parent) = path.parent() {
            let parent = parent.to_path_buf();
            ensure_dir(&mut state, &parent);
            if let (Some(name), Some(MemoryNode::Directory(children))) =
                (file_name(&path), state.nodes.get_mut(&parent))
            {
                if !children.contains(&name) {
                    children.push(name);
                }
            }
        }
        state.nodes.insert(path, node);
    }

    fn check_failure(state: &MemoryState, path: &Path) -> io::Result<()> {
        if state.failing.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("injected failure for {}", path.display()),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl FileSystem for MemoryFileSystem {
    async fn list_entries(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let path = normalize(path);
        let state = self.state.read();
        Self::check_failure(&state, &path)?;

        match state.nodes.get(&path) {
            Some(MemoryNode::Directory(children)) => Ok(children
                .iter()
                .filter_map(|name| {
                    state
                        .nodes
                        .get(&path.join(name))
                        .map(|node| DirEntry::new(name.as_str(), node.kind()))
                })
                .collect()),
            Some(_) => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("not a directory: {}", path.display()),
            )),
            None => Err(not_found(&path)),
        }
    }

    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        let path = normalize(path);
        let state = self.state.read();
        Self::check_failure(&state, &path)?;

        match state.nodes.get(&path) {
            Some(MemoryNode::File(content)) => Ok(content.clone()),
            Some(_) => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("not a regular file: {}", path.display()),
            )),
            None => Err(not_found(&path)),
        }
    }
}

fn ensure_dir(state: &mut MemoryState, path: &Path) {
    if matches!(state.nodes.get(path), Some(MemoryNode::Directory(_))) {
        return;
    }
    if let Some(parent) = path.parent() {
        let parent = parent.to_path_buf();
        ensure_dir(state, &parent);
        if let (Some(name), Some(MemoryNode::Directory(children))) =
            (file_name(path), state.nodes.get_mut(&parent))
        {
            if !children.contains(&name) {
                children.push(name);
            }
        }
    }
    state
        .nodes
        .insert(path.to_path_buf(), MemoryNode::Directory(Vec::new()));
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such file or directory: {}", path.display()),
    )
}

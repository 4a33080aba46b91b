//! Directory digest engine
//!
//! Digests a directory by listing it, hashing every regular file and
//! recursing into every sub-directory concurrently, then folding the
//! children's digests into the directory's own digest once all of them
//! have resolved.

use crate::config::DirgestConfig;
use crate::error::DigestError;
use crate::tree::fs::{FileSystem, OsFileSystem};
use crate::tree::hasher::{self, Algorithm};
use crate::tree::node::{DigestEntry, DigestNode};
use crate::tree::walker::{Entry, Walker};
use futures::future::{BoxFuture, FutureExt};
use futures::stream::{FuturesUnordered, StreamExt};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Semaphore, SemaphorePermit};
use tracing::{debug, error, info, instrument, trace};

/// Default number of files and directory handles open at once
pub const DEFAULT_MAX_OPEN_FILES: usize = 256;

/// Files at least this large are hashed on the blocking pool
const BLOCKING_HASH_THRESHOLD: usize = 1024 * 1024;

/// Reusable digest engine bound to one algorithm and one filesystem
pub struct DigestEngine {
    algorithm: Algorithm,
    fs: Arc<dyn FileSystem>,
    open_files: Arc<Semaphore>,
}

impl DigestEngine {
    /// Create an engine over the real filesystem
    ///
    /// Fails if `algorithm` is not a supported algorithm name.
    pub fn new(algorithm: &str) -> Result<Self, DigestError> {
        Self::with_filesystem(algorithm, Arc::new(OsFileSystem))
    }

    /// Create an engine over a custom filesystem
    pub fn with_filesystem(algorithm: &str, fs: Arc<dyn FileSystem>) -> Result<Self, DigestError> {
        let algorithm = algorithm.parse::<Algorithm>()?;
        debug!(%algorithm, "Digest engine configured");
        Ok(Self {
            algorithm,
            fs,
            open_files: Arc::new(Semaphore::new(DEFAULT_MAX_OPEN_FILES)),
        })
    }

    /// Create an engine over the real filesystem from loaded configuration
    pub fn from_config(config: &DirgestConfig) -> Result<Self, DigestError> {
        Self::new(&config.algorithm)?.with_max_open_files(config.max_open_files)
    }

    /// Bound the number of concurrent file reads and directory listings
    pub fn with_max_open_files(mut self, limit: usize) -> Result<Self, DigestError> {
        if limit == 0 {
            return Err(DigestError::ConfigError(
                "max_open_files must be greater than zero".to_string(),
            ));
        }
        self.open_files = Arc::new(Semaphore::new(limit));
        Ok(self)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Digest the directory tree rooted at `root`
    ///
    /// Resolves to the complete tree or to the first error hit anywhere
    /// below `root`; there is no partial result.
    #[instrument(skip(self, root), fields(root = %root.as_ref().display(), algorithm = %self.algorithm))]
    pub async fn digest(&self, root: impl AsRef<Path>) -> Result<DigestNode, DigestError> {
        let root = root.as_ref();
        if root.as_os_str().is_empty() {
            return Err(DigestError::InvalidArgument(
                "root is required (non-empty path)".to_string(),
            ));
        }

        let start = Instant::now();
        info!("Starting digest");

        match self.digest_dir(root.to_path_buf()).await {
            Ok(node) => {
                info!(
                    file_count = node.file_count(),
                    hash = %node.digest,
                    duration_ms = start.elapsed().as_millis(),
                    "Digest completed"
                );
                Ok(node)
            }
            Err(e) => {
                error!("Digest failed: {}", e);
                Err(e)
            }
        }
    }

    /// Digest one directory
    ///
    /// Boxed because it recurses through `digest_entry`.
    fn digest_dir(&self, dir: PathBuf) -> BoxFuture<'_, Result<DigestNode, DigestError>> {
        async move {
            let entries = {
                let _permit = self.acquire(&dir).await?;
                Walker::new(self.fs.as_ref()).list(&dir).await?
            };
            if entries.is_empty() {
                return Ok(DigestNode::empty());
            }

            let mut pending: FuturesUnordered<_> = entries
                .into_iter()
                .map(|entry| self.digest_entry(entry))
                .collect();

            // Returning early drops `pending`, so siblings still in flight
            // are discarded and can never feed this directory's result.
            let mut children = BTreeMap::new();
            while let Some(outcome) = pending.next().await {
                let (name, child) = outcome?;
                children.insert(name, child);
            }

            let node = hasher::summarize(self.algorithm, children);
            trace!(path = %dir.display(), hash = %node.digest, "Directory digested");
            Ok(node)
        }
        .boxed()
    }

    async fn digest_entry(&self, entry: Entry) -> Result<(String, DigestEntry), DigestError> {
        match entry {
            Entry::File { name, path } => {
                let digest = self.hash_file(&path).await?;
                Ok((name, DigestEntry::File(digest)))
            }
            Entry::Directory { name, path } => {
                let node = self.digest_dir(path).await?;
                Ok((name, DigestEntry::Directory(node)))
            }
        }
    }

    async fn hash_file(&self, path: &Path) -> Result<String, DigestError> {
        let content = {
            let _permit = self.acquire(path).await?;
            self.fs
                .read_file(path)
                .await
                .map_err(|e| DigestError::io(path, e))?
        };

        let algorithm = self.algorithm;
        let digest = if content.len() >= BLOCKING_HASH_THRESHOLD {
            tokio::task::spawn_blocking(move || hasher::hash_content(algorithm, &content))
                .await
                .map_err(|e| {
                    DigestError::io(path, std::io::Error::new(std::io::ErrorKind::Other, e))
                })?
        } else {
            hasher::hash_content(algorithm, &content)
        };

        trace!(path = %path.display(), hash = %digest, "Hashed file");
        Ok(digest)
    }

    async fn acquire(&self, path: &Path) -> Result<SemaphorePermit<'_>, DigestError> {
        self.open_files.acquire().await.map_err(|_| {
            DigestError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::Other, "open file limiter closed"),
            )
        })
    }
}

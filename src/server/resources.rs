//! Loading of static resources and pages.

use std::collections::HashMap;
use std::future::Future;
use std::path::{Component, Path, PathBuf};
use std::pin::Pin;

use crate::server::error::Error;

/// Type alias for the future returned by [`ResourceLoader::read_resource`].
pub type ResourceFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<u8>, Error>> + Send + 'a>>;

/// Source of static content addressed by request path (e.g. `/index.html`).
pub trait ResourceLoader: Send + Sync {
    /// Read a resource, failing with [`Error::NotFound`] when it does not exist.
    fn read_resource<'a>(&'a self, path: &'a str) -> ResourceFuture<'a>;
}

/// Serves resources from a directory on disk.
#[derive(Debug, Clone)]
pub struct FileResourceLoader {
    root: PathBuf,
}

impl FileResourceLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a request path below the root, rejecting anything that could
    /// escape it.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let contained = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if relative.as_os_str().is_empty() || !contained {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl ResourceLoader for FileResourceLoader {
    fn read_resource<'a>(&'a self, path: &'a str) -> ResourceFuture<'a> {
        Box::pin(async move {
            let file = self
                .resolve(path)
                .ok_or_else(|| Error::NotFound(path.to_string()))?;
            match tokio::fs::metadata(&file).await {
                Ok(metadata) if metadata.is_file() => Ok(tokio::fs::read(&file).await?),
                // Directories are not servable
                Ok(_) => Err(Error::NotFound(path.to_string())),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    Err(Error::NotFound(path.to_string()))
                }
                Err(e) => Err(Error::IoError(e)),
            }
        })
    }
}

/// Resources held in memory, keyed by request path.
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl ResourceLoader for MemoryResources {
    fn read_resource<'a>(&'a self, path: &'a str) -> ResourceFuture<'a> {
        Box::pin(async move {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| Error::NotFound(path.to_string()))
        })
    }
}

mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::{EntryKind, FsEntry};

#[async_trait]
pub trait FileSystem: Send + Sync {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;

    /// Kind of whatever sits at `path`, without following symlinks.
    /// `None` when nothing exists there.
    async fn metadata_kind(&self, path: &Path) -> Result<Option<EntryKind>>;

    async fn rename(&self, from: &Path, to: &Path) -> Result<()>;
}

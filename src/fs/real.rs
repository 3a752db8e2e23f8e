use anyhow::Result;
use async_trait::async_trait;
use std::fs::FileType;
use std::io;
use std::path::Path;
use tokio::task;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

fn entry_kind(file_type: FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut entries = Vec::new();
            for entry in std::fs::read_dir(&dir)? {
                let entry = entry?;
                let kind = entry_kind(entry.file_type()?);

                entries.push(FsEntry {
                    path: entry.path(),
                    name: entry.file_name(),
                    kind,
                });
            }
            Ok(entries)
        })
        .await?
    }

    async fn metadata_kind(&self, path: &Path) -> Result<Option<EntryKind>> {
        let path = path.to_path_buf();
        task::spawn_blocking(move || match std::fs::symlink_metadata(&path) {
            Ok(metadata) => Ok(Some(entry_kind(metadata.file_type()))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        })
        .await?
    }

    async fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        let (from, to) = (from.to_path_buf(), to.to_path_buf());
        task::spawn_blocking(move || std::fs::rename(&from, &to))
            .await?
            .map_err(Into::into)
    }
}

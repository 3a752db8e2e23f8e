use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

/// In-memory tree keyed by absolute path. Renaming a directory moves every
/// key underneath it.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    nodes: BTreeMap<PathBuf, EntryKind>,
    read_dir_errors: HashMap<PathBuf, String>,
    rename_errors: HashMap<PathBuf, String>,
    calls: Vec<PathBuf>,
    renames: Vec<(PathBuf, PathBuf)>,
}

impl Inner {
    fn insert(&mut self, path: PathBuf, kind: EntryKind) {
        for ancestor in path.ancestors().skip(1) {
            self.nodes
                .entry(ancestor.to_path_buf())
                .or_insert(EntryKind::Directory);
        }
        self.nodes.insert(path, kind);
    }
}

impl MockFileSystem {
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.insert(path.into(), EntryKind::Directory);
    }

    pub fn add_file(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.insert(path.into(), EntryKind::File);
    }

    pub fn add_symlink(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.insert(path.into(), EntryKind::Symlink);
    }

    pub fn set_read_dir_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.read_dir_errors.insert(dir.into(), message.into());
    }

    pub fn set_rename_error(&self, from: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.rename_errors.insert(from.into(), message.into());
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.nodes.contains_key(path.as_ref())
    }

    /// Directories passed to `read_dir`, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }

    pub fn renames(&self) -> Vec<(PathBuf, PathBuf)> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.renames.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        if let Some(message) = inner.read_dir_errors.get(dir) {
            return Err(anyhow!("{message}"));
        }
        match inner.nodes.get(dir) {
            Some(EntryKind::Directory) => {}
            Some(_) => bail!("Not a directory"),
            None => bail!("No such file or directory"),
        }

        let entries = inner
            .nodes
            .iter()
            .filter(|(path, _)| path.parent() == Some(dir))
            .map(|(path, kind)| FsEntry {
                path: path.clone(),
                name: path
                    .file_name()
                    .map(|name| name.to_os_string())
                    .unwrap_or_default(),
                kind: *kind,
            })
            .collect();
        Ok(entries)
    }

    async fn metadata_kind(&self, path: &Path) -> Result<Option<EntryKind>> {
        let inner = self.inner.lock().expect("mock fs lock");
        Ok(inner.nodes.get(path).copied())
    }

    async fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        let mut inner = self.inner.lock().expect("mock fs lock");

        if let Some(message) = inner.rename_errors.get(from) {
            return Err(anyhow!("{message}"));
        }
        if !inner.nodes.contains_key(from) {
            bail!("No such file or directory");
        }
        if inner.nodes.contains_key(to) {
            bail!("File exists");
        }

        let moved: Vec<(PathBuf, EntryKind)> = inner
            .nodes
            .iter()
            .filter(|(path, _)| path.starts_with(from))
            .map(|(path, kind)| (path.clone(), *kind))
            .collect();
        for (path, kind) in moved {
            inner.nodes.remove(&path);
            let suffix = path.strip_prefix(from).expect("moved path under source");
            let target = if suffix.as_os_str().is_empty() {
                to.to_path_buf()
            } else {
                to.join(suffix)
            };
            inner.nodes.insert(target, kind);
        }
        inner.renames.push((from.to_path_buf(), to.to_path_buf()));
        Ok(())
    }
}

use std::ffi::OsStr;
use std::fmt;
use std::path::{MAIN_SEPARATOR, PathBuf};

use crate::error::RenameError;

/// A single path component used as a rename source or target.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FolderName(String);

impl FolderName {
    pub fn new(name: impl Into<String>) -> Result<Self, RenameError> {
        let name = name.into();
        let reason = if name.is_empty() {
            Some("must not be empty")
        } else if name == "." || name == ".." {
            Some("must not be a relative path marker")
        } else if name.contains('/') || name.contains(MAIN_SEPARATOR) {
            Some("must not contain a path separator")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(RenameError::InvalidFolderName { name, reason }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_os_str(&self) -> &OsStr {
        OsStr::new(&self.0)
    }
}

impl fmt::Display for FolderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug)]
pub struct RenameRequest {
    pub root: PathBuf,
    pub old_name: FolderName,
    pub new_name: FolderName,
}

impl RenameRequest {
    pub fn new(
        root: impl Into<PathBuf>,
        old_name: &str,
        new_name: &str,
    ) -> Result<Self, RenameError> {
        Ok(Self {
            root: root.into(),
            old_name: FolderName::new(old_name)?,
            new_name: FolderName::new(new_name)?,
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenamedFolder {
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RenameSummary {
    pub renamed: Vec<RenamedFolder>,
    pub dirs_visited: usize,
}

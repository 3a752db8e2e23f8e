use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum RenameError {
    #[error("invalid folder name {name:?}: {reason}")]
    InvalidFolderName { name: String, reason: &'static str },
    #[error("{}: No such file or directory", path.display())]
    RootNotFound { path: PathBuf },
    #[error("{}: Not a directory", path.display())]
    RootNotDirectory { path: PathBuf },
    #[error("cannot rename {} -> {}: destination already exists", from.display(), to.display())]
    DestinationExists { from: PathBuf, to: PathBuf },
}

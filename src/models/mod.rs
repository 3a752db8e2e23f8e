mod entry;
mod request;

pub use entry::{EntryKind, FsEntry};
pub use request::{FolderName, RenameRequest, RenameSummary, RenamedFolder};

mod rename;
mod report;

pub use rename::rename_folders;
pub use report::write_renamed;

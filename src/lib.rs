pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod models;

pub use crate::core::rename_folders;
pub use crate::error::RenameError;
pub use crate::models::{RenameRequest, RenameSummary};

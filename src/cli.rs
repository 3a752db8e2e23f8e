use clap::Parser;

// Exactly two arguments are accepted, so `--help` and `--version` count as
// a wrong argument count like any other single argument.
#[derive(Parser, Debug)]
#[command(name = "renamedirs")]
#[command(
    about = "Rename every folder with a given name below the current directory",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Exact (case-sensitive) name of the folders to rename
    #[arg(allow_hyphen_values = true)]
    pub old_folder_name: String,
    /// Name to give each matching folder
    #[arg(allow_hyphen_values = true)]
    pub new_folder_name: String,
}

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use renamedirs::cli::Cli;
use renamedirs::fs::RealFileSystem;
use renamedirs::{RenameRequest, rename_folders};

fn print_usage() {
    println!("{}", Cli::command().render_usage());
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            print_usage();
            return ExitCode::from(1);
        }
    };

    init_tracing();

    let request = match RenameRequest::new(".", &cli.old_folder_name, &cli.new_folder_name) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("renamedirs: {err}");
            print_usage();
            return ExitCode::from(1);
        }
    };

    let mut out = std::io::stdout();
    match rename_folders(&RealFileSystem, &request, &mut out).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("renamedirs: {err:#}");
            ExitCode::from(1)
        }
    }
}

use std::process;

use compscan::{
    cli::{exit_code, Args, Command},
    error::ScanError,
    logging::init_logger,
};

fn main() {
    let args = Args::parse_args();
    init_logger(args.verbose, args.quiet, args.no_colors);

    let command = Command::from_args(args);
    process::exit(run_command(&command));
}

/// Run the command, print a readable error and pick the exit code
fn run_command(command: &Command) -> i32 {
    match command.execute() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("\nError: {}", err.user_message());
            if let Some(suggestion) = suggestion_for(&err) {
                eprintln!("Suggestion: {}", suggestion);
            }
            exit_code(&err)
        }
    }
}

fn suggestion_for(err: &ScanError) -> Option<&'static str> {
    match err {
        ScanError::InvalidPath { .. } => Some("Check that the path exists and is accessible"),
        ScanError::ConfigNotFound { .. } => {
            Some("Create a .compscan.toml file with --init or pass an existing file with --config")
        }
        ScanError::ConfigParse { .. } => Some("Check the TOML syntax of the configuration file"),
        ScanError::NoSourceFiles { .. } => Some("Use --extension to pick up other file types or relax --exclude"),
        ScanError::GlobPattern { .. } => Some("Check the syntax of your --exclude patterns"),
        ScanError::OutputDirectoryNotFound { .. } => Some("Create the output directory first"),
        _ => None,
    }
}

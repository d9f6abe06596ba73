use clap::{Parser, Subcommand};
use cvs_scout::commands::*;
use cvs_scout::core::{error::Result, print_error, settings::Settings};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cvs-scout")]
#[command(about = "A repository status service and command front-end for CVS and CVSNT")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Path to the cvs client binary, overriding the settings file
    #[arg(long, global = true, value_name = "PATH")]
    binary: Option<PathBuf>,

    /// Load settings from this file instead of the per-user location
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the classified status label for one or more paths
    Check {
        /// Paths to classify (defaults to the current directory)
        paths: Vec<PathBuf>,
    },
    /// Show the client's raw status report
    Status {
        /// File or directory to report on (defaults to the current directory)
        path: Option<PathBuf>,
    },
    /// Show differences between working files and their base revisions
    Diff {
        /// Produce unified diff output
        #[arg(short, long)]
        unified: bool,
        /// File or directory to diff (defaults to the current directory)
        path: Option<PathBuf>,
    },
    /// Show commit history
    Log {
        /// Leave out the per-file tag lists
        #[arg(long)]
        no_tags: bool,
        /// File or directory to show history for (defaults to the current directory)
        path: Option<PathBuf>,
    },
    /// Show per-line authorship for a file
    Annotate {
        /// Annotate this literal revision or tag
        #[arg(short, long, value_name = "REVISION", conflicts_with_all = ["working", "repository"])]
        rev: Option<String>,
        /// Annotate the revision the working file is based on
        #[arg(long, conflicts_with = "repository")]
        working: bool,
        /// Annotate the newest revision in the repository
        #[arg(long)]
        repository: bool,
        /// File to annotate
        path: PathBuf,
    },
    /// Bring working files up to date with the repository
    Update {
        /// File or directory to update (defaults to the current directory)
        path: Option<PathBuf>,
    },
    /// Schedule a file for addition
    Add {
        /// File to add
        path: PathBuf,
    },
    /// Schedule a file for removal
    Remove {
        /// File to remove
        path: PathBuf,
    },
    /// Discard local changes and restore the repository revision
    Revert {
        /// File to revert
        path: PathBuf,
    },
    /// Commit local changes
    Commit {
        /// Commit message
        #[arg(short, long)]
        message: String,
        /// File or directory to commit (defaults to the current directory)
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(error) => {
            print_error(&error.to_string());
            std::process::exit(1);
        }
    };

    // Configure logging based on the --debug flag and the settings file
    if cli.debug || settings.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(error) = dispatch(cli.command, &settings) {
        print_error(&error.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load_or_default()?,
    };
    if let Some(binary) = &cli.binary {
        settings.binary_path = binary.clone();
    }
    Ok(settings)
}

fn dispatch(command: Commands, settings: &Settings) -> Result<()> {
    match command {
        Commands::Check { paths } => execute_check(settings, paths),
        Commands::Status { path } => execute_status(settings, path),
        Commands::Diff { unified, path } => execute_diff(settings, path, unified),
        Commands::Log { no_tags, path } => execute_log(settings, path, no_tags),
        Commands::Annotate {
            rev,
            working,
            repository,
            path,
        } => execute_annotate(settings, path, rev, working, repository),
        Commands::Update { path } => execute_update(settings, path),
        Commands::Add { path } => execute_add(settings, path),
        Commands::Remove { path } => execute_remove(settings, path),
        Commands::Revert { path } => execute_revert(settings, path),
        Commands::Commit { message, path } => execute_commit(settings, path, &message),
    }
}

//! Command-line interface implementation for adev.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::{
    BUNDLED_TEMPLATES_DIR, DEFAULT_AEA_CONFIG_FILE, DEFAULT_AUTHOR, DEFAULT_DESCRIPTION,
    DEFAULT_EMAIL, DEFAULT_VERSION, TEMPLATES_DIR_ENV,
};

/// Command-line arguments structure for adev.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "adev: repository scaffolding and agent config augmentation",
    long_about = None
)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new repo and scaffold necessary files
    Repo(RepoArgs),

    /// Augment an existing agent configuration
    Augment {
        /// Agent configuration file to modify
        #[arg(long, value_name = "FILE", default_value = DEFAULT_AEA_CONFIG_FILE)]
        config: PathBuf,

        #[command(subcommand)]
        target: AugmentCommand,
    },
}

#[derive(clap::Args, Debug)]
pub struct RepoArgs {
    /// Name of the new repo directory, also used as the project name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Type of repo to scaffold (a directory under the templates directory)
    #[arg(short, long)]
    pub type_of_repo: String,

    /// Directory holding one template directory per repo type
    #[arg(long, value_name = "DIR", env = TEMPLATES_DIR_ENV, default_value = BUNDLED_TEMPLATES_DIR)]
    pub templates_dir: PathBuf,

    /// Author written into the scaffolded files
    #[arg(long, default_value = DEFAULT_AUTHOR)]
    pub author: String,

    /// Author email written into the scaffolded files
    #[arg(long, default_value = DEFAULT_EMAIL)]
    pub email: String,

    /// Project description written into the scaffolded files
    #[arg(long, default_value = DEFAULT_DESCRIPTION)]
    pub description: String,

    /// Initial project version
    #[arg(long, default_value = DEFAULT_VERSION)]
    pub project_version: String,
}

#[derive(Subcommand, Debug)]
pub enum AugmentCommand {
    /// Add logging handlers (`all` adds every known handler)
    Logging {
        #[arg(value_name = "HANDLER", required = true)]
        handlers: Vec<String>,
    },

    /// Add connection override documents
    Connection {
        #[arg(value_name = "NAME", required = true)]
        connections: Vec<String>,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument | ErrorKind::MissingSubcommand
            ) {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}

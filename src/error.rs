//! Error handling for the adev application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for adev operations.
///
/// This enum represents all possible errors that can occur within adev.
/// It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while walking a template directory
    #[error("Failed to traverse template directory: {0}.")]
    WalkDirError(#[from] walkdir::Error),

    /// Represents errors raised while rendering a template file
    #[error("Template rendering error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors in parsing or serializing a YAML configuration
    #[error("YAML error: {0}.")]
    YamlError(#[from] serde_yaml::Error),

    /// Represents errors in building the JSON render context
    #[error("JSON error: {0}.")]
    JSONParseError(#[from] serde_json::Error),

    /// The requested repo type has no template directory
    #[error("Repo type '{repo_type}' not found (available: {available}).")]
    RepoTypeNotFound {
        repo_type: String,
        available: String,
    },

    /// The destination directory must not exist yet
    #[error("Directory '{output_dir}' already exists.")]
    OutputDirectoryExistsError { output_dir: String },

    /// A requested name is absent from a fixed catalog
    #[error("Unknown {kind} '{name}' (available: {available}).")]
    UnknownCatalogEntry {
        kind: &'static str,
        name: String,
        available: String,
    },

    /// An external command could not be started or exited unsuccessfully
    #[error("Command failed: '{command}' ({status}).")]
    CommandError { command: String, status: String },

    /// Represents errors in the shape or location of a configuration
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors that occur during template discovery
    #[error("Template error: {0}.")]
    TemplateError(String),
}

/// Convenience type alias for Results with adev's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}

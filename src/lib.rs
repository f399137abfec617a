//! adev is a developer-workflow tool.
//! It scaffolds new repositories from templates and augments existing
//! agent configuration files with logging handlers and connections.

/// Config augmentation: multi-document parsing, catalogs and merge flows
pub mod augment;

/// Command-line interface module for the adev application
pub mod cli;

/// Common constants
pub mod constants;

/// Per-invocation values substituted into templates
pub mod context;

/// Scoped working-directory changes
pub mod dir;

/// Error types and handling for the adev application
pub mod error;

/// External command execution
pub mod executor;

/// Logger setup
pub mod logger;

/// Template directory walking, rendering and copying
pub mod processor;

/// Template rendering engine
pub mod renderer;

/// New repository creation
pub mod repo;

/// Template discovery and file classification
pub mod template;

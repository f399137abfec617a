//! Common constants used throughout the adev application.

/// Extension marking a file as a template (`README.md.template` -> `README.md`)
pub const TEMPLATE_EXTENSION: &str = "template";

/// Templates bundled with the crate, one directory per repo type
pub const BUNDLED_TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// Environment variable overriding the templates directory
pub const TEMPLATES_DIR_ENV: &str = "ADEV_TEMPLATES_DIR";

/// Agent configuration file augmented by default
pub const DEFAULT_AEA_CONFIG_FILE: &str = "aea-config.yaml";

/// Sentinel handler name selecting every catalog handler
pub const ALL_HANDLERS: &str = "all";

/// Separator written between documents of a multi-document configuration
pub const DOCUMENT_SEPARATOR: &str = "---\n";

pub const DEFAULT_AUTHOR: &str = "8ball030";
pub const DEFAULT_EMAIL: &str = "8ball030@gmail.com";
pub const DEFAULT_DESCRIPTION: &str = "";
pub const DEFAULT_VERSION: &str = "0.1.0";

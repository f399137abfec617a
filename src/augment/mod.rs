//! Augmentation of existing agent configuration files.
//!
//! Both flows validate the requested names against a fixed catalog before
//! touching the file, merge in memory, then rewrite the whole file once.

pub mod catalog;
pub mod connection;
pub mod document;
pub mod logging;

pub use catalog::{Connection, LoggingHandler};
pub use connection::ConnectionAugmenter;
pub use document::{ConfigDocument, DocumentKind, MultiDocConfig};
pub use logging::LoggingAugmenter;

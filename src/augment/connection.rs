//! Appends connection override documents to the agent configuration.

use log::info;
use std::path::{Path, PathBuf};

use crate::augment::catalog::Connection;
use crate::augment::document::MultiDocConfig;
use crate::error::Result;

/// Resolves every requested connection name, keeping duplicates and order.
///
/// # Errors
/// * `Error::UnknownCatalogEntry` for the first unknown name
pub fn resolve_connections<S: AsRef<str>>(names: &[S]) -> Result<Vec<Connection>> {
    names
        .iter()
        .map(|name| Connection::from_name(name.as_ref()))
        .collect()
}

/// Appends one skeleton document per requested connection.
///
/// Repeated requests append repeated documents.
///
/// # Returns
/// * `Result<usize>` - Number of documents appended
pub fn append_connections(
    config: &mut MultiDocConfig,
    connections: &[Connection],
) -> Result<usize> {
    for connection in connections {
        config.push(connection.skeleton()?);
        info!("Added connection `{connection}`");
    }
    Ok(connections.len())
}

/// Adds connection overrides to an agent configuration file.
pub struct ConnectionAugmenter {
    config_path: PathBuf,
}

impl ConnectionAugmenter {
    pub fn new<P: AsRef<Path>>(config_path: P) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    /// Validates `names`, appends their skeletons and rewrites the file.
    ///
    /// The file must exist. Nothing is written if any name is unknown or
    /// no name is given.
    pub fn scaffold<S: AsRef<str>>(&self, names: &[S]) -> Result<usize> {
        let connections = resolve_connections(names)?;
        let mut config = MultiDocConfig::load(&self.config_path)?;

        if connections.is_empty() {
            info!("No connections requested.");
            return Ok(0);
        }

        let appended = append_connections(&mut config, &connections)?;
        config.save(&self.config_path)?;
        Ok(appended)
    }
}

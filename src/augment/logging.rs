//! Adds logging handlers to the agent's `logging_config`.

use indexmap::IndexSet;
use log::info;
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

use crate::augment::catalog::LoggingHandler;
use crate::augment::document::{ConfigDocument, MultiDocConfig};
use crate::constants::ALL_HANDLERS;
use crate::error::{Error, Result};

pub const LOGGING_CONFIG_KEY: &str = "logging_config";

const DEFAULT_LOGGING_CONFIG: &str = "
logging_config:
  version: 1
  disable_existing_loggers: false
  formatters:
    standard:
      format: '[%(asctime)s] [%(levelname)s] %(message)s'
  handlers: {}
  loggers:
    aea:
      handlers: []
      level: INFO
      propagate: false
";

fn default_logging_config() -> Result<Mapping> {
    match serde_yaml::from_str::<Value>(DEFAULT_LOGGING_CONFIG)? {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(Error::ConfigError("default logging config is not a mapping".to_string())),
    }
}

/// Fills every key of `defaults` that is absent or empty (`null`) in `target`,
/// recursing into nested mappings.
fn fill_missing(target: &mut Mapping, defaults: &Mapping) {
    for (key, default) in defaults {
        if matches!(target.get(key), None | Some(Value::Null)) {
            target.insert(key.clone(), default.clone());
            continue;
        }
        if let (Some(Value::Mapping(existing)), Value::Mapping(nested)) =
            (target.get_mut(key), default)
        {
            fill_missing(existing, nested);
        }
    }
}

fn mapping_entry<'m>(mapping: &'m mut Mapping, key: &str, path: &str) -> Result<&'m mut Mapping> {
    mapping
        .get_mut(key)
        .and_then(Value::as_mapping_mut)
        .ok_or_else(|| Error::ConfigError(format!("'{path}' is not a mapping")))
}

/// Resolves requested handler names, expanding the `all` sentinel.
///
/// Duplicates are collapsed while keeping first-seen order.
///
/// # Errors
/// * `Error::UnknownCatalogEntry` for the first name that is neither `all`
///   nor a catalog handler
pub fn resolve_handlers<S: AsRef<str>>(names: &[S]) -> Result<Vec<LoggingHandler>> {
    let mut handlers = IndexSet::new();
    for name in names {
        let name = name.as_ref();
        if name == ALL_HANDLERS {
            handlers.extend(LoggingHandler::ALL);
        } else {
            handlers.insert(LoggingHandler::from_name(name)?);
        }
    }
    Ok(handlers.into_iter().collect())
}

/// Merges `handlers` into the agent document's `logging_config`.
///
/// Creates the agent document and any missing or empty section of
/// `logging_config`. Each handler is registered under `handlers` and listed
/// once on the `aea` logger.
///
/// # Returns
/// * `Result<ConfigDocument>` - The updated agent document
pub fn merge_handlers(
    config: &mut MultiDocConfig,
    handlers: &[LoggingHandler],
) -> Result<ConfigDocument> {
    let defaults = default_logging_config()?;
    let agent = config.ensure_agent();
    fill_missing(agent.mapping_mut(), &defaults);

    let logging = mapping_entry(agent.mapping_mut(), LOGGING_CONFIG_KEY, LOGGING_CONFIG_KEY)?;
    for handler in handlers {
        let definitions = mapping_entry(logging, "handlers", "logging_config.handlers")?;
        definitions.insert(Value::from(handler.name()), handler.definition()?);

        let loggers = mapping_entry(logging, "loggers", "logging_config.loggers")?;
        let aea = mapping_entry(loggers, "aea", "logging_config.loggers.aea")?;
        let Some(listed) = aea.get_mut("handlers").and_then(Value::as_sequence_mut) else {
            let path = "logging_config.loggers.aea.handlers";
            return Err(Error::ConfigError(format!("'{path}' is not a list")));
        };
        let name = Value::from(handler.name());
        if !listed.contains(&name) {
            listed.push(name);
        }
        info!("Added logging handler `{handler}`");
    }

    Ok(agent.clone())
}

/// Adds logging handlers to an agent configuration file.
pub struct LoggingAugmenter {
    config_path: PathBuf,
}

impl LoggingAugmenter {
    pub fn new<P: AsRef<Path>>(config_path: P) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    /// Validates `names`, merges the handlers and rewrites the file.
    ///
    /// The file must exist. Nothing is written if any name is unknown or
    /// no name is given.
    ///
    /// # Returns
    /// * `Result<ConfigDocument>` - The agent document as written
    pub fn scaffold<S: AsRef<str>>(&self, names: &[S]) -> Result<ConfigDocument> {
        let handlers = resolve_handlers(names)?;
        let mut config = MultiDocConfig::load(&self.config_path)?;

        if handlers.is_empty() {
            info!("No logging handlers requested.");
            return Ok(config.agent().cloned().unwrap_or_default());
        }

        let agent = merge_handlers(&mut config, &handlers)?;
        config.save(&self.config_path)?;
        Ok(agent)
    }
}

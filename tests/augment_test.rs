use std::fs;
use std::path::{Path, PathBuf};

use adev::augment::document::{ConfigDocument, DocumentKind, MultiDocConfig};
use adev::augment::logging::LOGGING_CONFIG_KEY;
use adev::augment::{Connection, ConnectionAugmenter, LoggingAugmenter};
use adev::error::Error;
use serde_yaml::{Mapping, Value};
use tempfile::TempDir;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

const EMPTY_SECTIONS: &str = "
agent_name: tmp
logging_config:
  version: 1
  handlers:
  loggers:
    aea:
      handlers:
      level: INFO
";

/// Copies the sample agent config into a fresh directory.
fn agent_config() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("aea-config.yaml");
    let fixture = Path::new(FIXTURES_DIR).join("aea-config.yaml");
    fs::copy(fixture, &path).unwrap();
    (dir, path)
}

fn logging_of(agent: &ConfigDocument) -> &Value {
    agent.get(LOGGING_CONFIG_KEY).unwrap()
}

fn handlers_of(agent: &ConfigDocument) -> Mapping {
    let handlers = &logging_of(agent)["handlers"];
    handlers.as_mapping().unwrap().clone()
}

fn aea_logger_handlers(agent: &ConfigDocument) -> Vec<Value> {
    let listed = &logging_of(agent)["loggers"]["aea"]["handlers"];
    listed.as_sequence().unwrap().clone()
}

#[test_log::test]
fn test_logging_scaffold_all() {
    let (_dir, path) = agent_config();
    let augmenter = LoggingAugmenter::new(&path);
    let agent = augmenter.scaffold(&["all"]).unwrap();

    let handlers = handlers_of(&agent);
    assert_eq!(handlers.len(), 3);
    for name in ["console", "http", "logfile"] {
        assert!(handlers.contains_key(name), "missing handler {name}");
    }
}

#[test]
fn test_logging_scaffold_single_handler() {
    let (_dir, path) = agent_config();
    let augmenter = LoggingAugmenter::new(&path);
    let agent = augmenter.scaffold(&["console"]).unwrap();

    let handlers = handlers_of(&agent);
    assert!(handlers.contains_key("console"));
    assert!(!handlers.contains_key("http"));
    assert!(!handlers.contains_key("logfile"));
    assert_eq!(aea_logger_handlers(&agent), vec![Value::from("console")]);
}

#[test]
fn test_logging_scaffold_bad_handler_does_not_write() {
    let (_dir, path) = agent_config();
    let before = fs::read_to_string(&path).unwrap();

    let augmenter = LoggingAugmenter::new(&path);
    let err = augmenter.scaffold(&["console", "bad"]).unwrap_err();
    match err {
        Error::UnknownCatalogEntry { name, .. } => assert_eq!(name, "bad"),
        other => panic!("Expected UnknownCatalogEntry, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_logging_scaffold_is_idempotent() {
    let (_dir, path) = agent_config();
    let augmenter = LoggingAugmenter::new(&path);

    let first = augmenter.scaffold(&["console"]).unwrap();
    let second = augmenter.scaffold(&["console"]).unwrap();

    assert_eq!(handlers_of(&first).len(), 1);
    assert_eq!(handlers_of(&second).len(), 1);
    assert_eq!(aea_logger_handlers(&second).len(), 1);
}

#[test]
fn test_logging_scaffold_accumulates_handlers() {
    let (_dir, path) = agent_config();
    let augmenter = LoggingAugmenter::new(&path);

    augmenter.scaffold(&["console"]).unwrap();
    let agent = augmenter.scaffold(&["logfile"]).unwrap();

    let handlers = handlers_of(&agent);
    assert_eq!(handlers.len(), 2);
    assert!(handlers.contains_key("console"));
    assert!(handlers.contains_key("logfile"));
}

#[test]
fn test_logging_scaffold_keeps_existing_settings_and_documents() {
    let (_dir, path) = agent_config();
    LoggingAugmenter::new(&path).scaffold(&["http"]).unwrap();

    let config = MultiDocConfig::load(&path).unwrap();
    assert_eq!(config.len(), 1);
    let agent = config.agent().unwrap();
    assert_eq!(agent.get("agent_name"), Some(&Value::from("tmp")));

    let logging = logging_of(agent);
    assert_eq!(logging["version"], Value::from(1));
    assert_eq!(logging["disable_existing_loggers"], Value::from(false));
    assert!(logging["formatters"]["standard"]["format"].is_string());
}

#[test]
fn test_logging_scaffold_fills_empty_sections() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("aea-config.yaml");
    fs::write(&path, EMPTY_SECTIONS).unwrap();

    let augmenter = LoggingAugmenter::new(&path);
    let agent = augmenter.scaffold(&["console"]).unwrap();

    assert!(handlers_of(&agent).contains_key("console"));
    assert_eq!(aea_logger_handlers(&agent), vec![Value::from("console")]);
    let aea = &logging_of(&agent)["loggers"]["aea"];
    assert_eq!(aea["level"], Value::from("INFO"));

    let config = MultiDocConfig::load(&path).unwrap();
    assert_eq!(config.agent(), Some(&agent));
}

#[test]
fn test_logging_scaffold_creates_missing_agent_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("aea-config.yaml");
    fs::write(&path, "").unwrap();

    let agent = LoggingAugmenter::new(&path).scaffold(&["console"]).unwrap();
    assert!(handlers_of(&agent).contains_key("console"));
    assert_eq!(MultiDocConfig::load(&path).unwrap().len(), 1);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let augmenter = LoggingAugmenter::new(dir.path().join("aea-config.yaml"));
    let err = augmenter.scaffold(&["console"]).unwrap_err();
    assert!(matches!(err, Error::ConfigError(_)));
}

#[test]
fn test_empty_request_requires_existing_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("aea-config.yaml");
    let no_names: [&str; 0] = [];

    let logging = LoggingAugmenter::new(&path).scaffold(&no_names);
    assert!(matches!(logging, Err(Error::ConfigError(_))));

    let connection = ConnectionAugmenter::new(&path).scaffold(&no_names);
    assert!(matches!(connection, Err(Error::ConfigError(_))));
    assert!(!path.exists());
}

#[test]
fn test_empty_request_leaves_config_untouched() {
    let (_dir, path) = agent_config();
    let before = fs::read_to_string(&path).unwrap();
    let no_names: [&str; 0] = [];

    let appended = ConnectionAugmenter::new(&path).scaffold(&no_names).unwrap();
    assert_eq!(appended, 0);
    LoggingAugmenter::new(&path).scaffold(&no_names).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test_log::test]
fn test_connection_scaffold_appends_documents() {
    let (_dir, path) = agent_config();
    assert_eq!(MultiDocConfig::load(&path).unwrap().len(), 1);

    let augmenter = ConnectionAugmenter::new(&path);
    let appended = augmenter.scaffold(&["abci", "ledger"]).unwrap();
    assert_eq!(appended, 2);

    let config = MultiDocConfig::load(&path).unwrap();
    assert_eq!(config.len(), 3);
    assert_eq!(config.documents()[0].kind(), DocumentKind::Agent);
    assert_eq!(config.documents()[1], Connection::Abci.skeleton().unwrap());
    assert_eq!(config.documents()[2], Connection::Ledger.skeleton().unwrap());
}

#[test]
fn test_connection_scaffold_repeats_are_not_deduplicated() {
    let (_dir, path) = agent_config();
    let augmenter = ConnectionAugmenter::new(&path);
    augmenter.scaffold(&["abci", "abci"]).unwrap();
    assert_eq!(MultiDocConfig::load(&path).unwrap().len(), 3);
}

#[test]
fn test_connection_scaffold_bad_name_does_not_write() {
    let (_dir, path) = agent_config();
    let before = fs::read_to_string(&path).unwrap();

    let augmenter = ConnectionAugmenter::new(&path);
    let err = augmenter.scaffold(&["abci", "bad"]).unwrap_err();
    match err {
        Error::UnknownCatalogEntry { kind, name, .. } => {
            assert_eq!(kind, "connection");
            assert_eq!(name, "bad");
        }
        other => panic!("Expected UnknownCatalogEntry, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_augmented_config_round_trips() {
    let (_dir, path) = agent_config();
    LoggingAugmenter::new(&path).scaffold(&["all"]).unwrap();
    let connections = ConnectionAugmenter::new(&path);
    connections.scaffold(&["ledger", "http_server"]).unwrap();

    let config = MultiDocConfig::load(&path).unwrap();
    let yaml = config.to_yaml_string().unwrap();
    let reparsed = MultiDocConfig::parse(&yaml).unwrap();
    assert_eq!(reparsed.len(), 3);
    assert_eq!(reparsed, config);
}

//! Multi-document agent configuration.
//!
//! An `aea-config.yaml` holds the agent document first, optionally followed
//! by component override documents, separated by `---`.

use log::debug;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

use crate::constants::DOCUMENT_SEPARATOR;
use crate::error::{Error, Result};

/// What a configuration document describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    /// The agent definition itself
    Agent,
    /// An override for a component identified by `public_id`
    Component { component_type: String },
}

/// One document of a multi-document configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigDocument {
    mapping: Mapping,
}

impl ConfigDocument {
    pub fn new(mapping: Mapping) -> Self {
        Self { mapping }
    }

    /// Parses a single YAML mapping document.
    ///
    /// # Errors
    /// * `Error::YamlError` if the text is not valid YAML
    /// * `Error::ConfigError` if the document is not a mapping
    pub fn from_yaml(content: &str) -> Result<Self> {
        match serde_yaml::from_str::<Value>(content)? {
            Value::Mapping(mapping) => Ok(Self::new(mapping)),
            _ => Err(Error::ConfigError("document is not a mapping".to_string())),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        if !self.is_agent() {
            let component_type = match self.get("type") {
                Some(Value::String(component_type)) => component_type.clone(),
                _ => String::new(),
            };
            return DocumentKind::Component { component_type };
        }
        DocumentKind::Agent
    }

    /// Component overrides carry a `public_id`; the agent document does not.
    pub fn is_agent(&self) -> bool {
        !self.mapping.contains_key("public_id")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.mapping.get(key)
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn mapping_mut(&mut self) -> &mut Mapping {
        &mut self.mapping
    }
}

/// An ordered sequence of configuration documents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiDocConfig {
    documents: Vec<ConfigDocument>,
}

impl MultiDocConfig {
    /// Parses every `---`-separated document of `content`.
    ///
    /// Empty documents are skipped.
    ///
    /// # Errors
    /// * `Error::YamlError` if a document is not valid YAML
    /// * `Error::ConfigError` if a document is not a mapping
    pub fn parse(content: &str) -> Result<Self> {
        let mut documents = Vec::new();
        if content.trim().is_empty() {
            return Ok(Self { documents });
        }

        for (index, document) in serde_yaml::Deserializer::from_str(content).enumerate() {
            match Value::deserialize(document)? {
                Value::Mapping(mapping) => documents.push(ConfigDocument::new(mapping)),
                Value::Null => debug!("Skipping empty document {}", index + 1),
                _ => {
                    return Err(Error::ConfigError(format!(
                        "document {} is not a mapping",
                        index + 1
                    )));
                }
            }
        }
        Ok(Self { documents })
    }

    /// Reads and parses the configuration at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::ConfigError(format!(
                "configuration file '{}' does not exist",
                path.display()
            )));
        }
        debug!("Loading configuration from {}", path.display());
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Serializes all documents in order, separated by `---`.
    pub fn to_yaml_string(&self) -> Result<String> {
        let rendered = self
            .documents
            .iter()
            .map(|document| serde_yaml::to_string(document.mapping()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rendered.join(DOCUMENT_SEPARATOR))
    }

    /// Overwrites `path` with the serialized documents.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_yaml_string()?)?;
        debug!(
            "Wrote {} document(s) to {}",
            self.documents.len(),
            path.display()
        );
        Ok(())
    }

    pub fn documents(&self) -> &[ConfigDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Appends a document after all existing ones.
    pub fn push(&mut self, document: ConfigDocument) {
        self.documents.push(document);
    }

    /// Returns the first agent document, if any.
    pub fn agent(&self) -> Option<&ConfigDocument> {
        self.documents.iter().find(|document| document.is_agent())
    }

    /// Returns the agent document, appending an empty one if none exists.
    pub fn ensure_agent(&mut self) -> &mut ConfigDocument {
        let index = match self.documents.iter().position(ConfigDocument::is_agent) {
            Some(index) => index,
            None => {
                debug!("No agent document found, creating one");
                self.documents.push(ConfigDocument::default());
                self.documents.len() - 1
            }
        };
        &mut self.documents[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_DOCS: &str = "
agent_name: tmp
author: eightballer
---
public_id: valory/abci:0.1.0
type: connection
config:
  port: 26658
";

    #[test]
    fn test_parse_preserves_order_and_kinds() {
        let config = MultiDocConfig::parse(TWO_DOCS).unwrap();
        assert_eq!(config.len(), 2);
        assert_eq!(config.documents()[0].kind(), DocumentKind::Agent);
        assert_eq!(
            config.documents()[1].kind(),
            DocumentKind::Component {
                component_type: "connection".to_string()
            }
        );
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(MultiDocConfig::parse("").unwrap().is_empty());
        assert!(MultiDocConfig::parse("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_mapping_document() {
        let content = "agent_name: tmp\n---\n- a\n- b\n";
        let err = MultiDocConfig::parse(content).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_serialize_then_parse_is_identity() {
        let config = MultiDocConfig::parse(TWO_DOCS).unwrap();
        let yaml = config.to_yaml_string().unwrap();
        assert_eq!(config, MultiDocConfig::parse(&yaml).unwrap());
    }

    #[test]
    fn test_ensure_agent_creates_missing_document() {
        let mut config = MultiDocConfig::default();
        config.ensure_agent();
        assert_eq!(config.len(), 1);
        config.ensure_agent();
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn test_ensure_agent_skips_component_documents() {
        let mut config = MultiDocConfig::default();
        let ledger = "public_id: valory/ledger:0.19.0";
        config.push(ConfigDocument::from_yaml(ledger).unwrap());
        assert!(config.agent().is_none());

        config.ensure_agent();
        assert_eq!(config.len(), 2);
        assert!(config.documents()[1].is_agent());
    }
}

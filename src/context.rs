//! Render context for scaffolded templates.

use serde::Serialize;

use crate::constants::{DEFAULT_AUTHOR, DEFAULT_DESCRIPTION, DEFAULT_EMAIL, DEFAULT_VERSION};
use crate::error::Result;

/// Values substituted into `.template` files.
///
/// Built once per scaffold invocation and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub project_name: String,
    pub author: String,
    pub email: String,
    pub description: String,
    pub version: String,
}

impl RenderContext {
    /// Creates a context for `project_name` with the default author metadata.
    pub fn new<S: Into<String>>(project_name: S) -> Self {
        Self {
            project_name: project_name.into(),
            author: DEFAULT_AUTHOR.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }

    pub fn with_author<S: Into<String>>(mut self, author: S) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_version<S: Into<String>>(mut self, version: S) -> Self {
        self.version = version.into();
        self
    }

    /// Converts the context into the JSON value consumed by the renderer.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

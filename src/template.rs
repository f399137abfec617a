//! Template discovery for repo scaffolding.
//! A templates root holds one directory per repo type; every file below
//! such a directory is either rendered or copied into the new repo.

use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::TEMPLATE_EXTENSION;
use crate::error::{Error, Result};

/// How a template file reaches the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Rendered with the context, written without the `.template` extension
    Template,
    /// Copied verbatim
    Static,
}

impl FileKind {
    /// Classifies a file by its extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(TEMPLATE_EXTENSION) => FileKind::Template,
            _ => FileKind::Static,
        }
    }
}

/// A single file found while walking a template directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Absolute (or template-root-joined) source path
    pub source: PathBuf,
    /// Path relative to the template directory
    pub relative_path: PathBuf,
    pub kind: FileKind,
}

impl TemplateFile {
    pub fn new(source: PathBuf, relative_path: PathBuf) -> Self {
        let kind = FileKind::from_path(&relative_path);
        Self {
            source,
            relative_path,
            kind,
        }
    }

    /// Destination path relative to the target root.
    ///
    /// Template files lose their `.template` extension; static files keep their name.
    pub fn target_relative_path(&self) -> PathBuf {
        match self.kind {
            FileKind::Template => self.relative_path.with_extension(""),
            FileKind::Static => self.relative_path.clone(),
        }
    }
}

/// The repo types available for scaffolding, keyed by directory name.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: IndexMap<String, PathBuf>,
}

impl TemplateSet {
    /// Discovers every directory directly under `root`.
    ///
    /// # Errors
    /// * `Error::TemplateError` if `root` is not a directory
    pub fn discover<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::TemplateError(format!(
                "templates directory '{}' does not exist",
                root.display()
            )));
        }

        let mut templates = IndexMap::new();
        for entry in fs::read_dir(root)? {
            let path = entry?.path();
            if !path.is_dir() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                debug!("Discovered template '{}' at {}", name, path.display());
                templates.insert(name.to_string(), path.clone());
            }
        }
        templates.sort_keys();

        Ok(Self { templates })
    }

    /// Repo type names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn contains(&self, repo_type: &str) -> bool {
        self.templates.contains_key(repo_type)
    }

    /// Returns the template directory for `repo_type`.
    ///
    /// # Errors
    /// * `Error::RepoTypeNotFound` if no such directory was discovered
    pub fn get(&self, repo_type: &str) -> Result<&Path> {
        self.templates
            .get(repo_type)
            .map(PathBuf::as_path)
            .ok_or_else(|| Error::RepoTypeNotFound {
                repo_type: repo_type.to_string(),
                available: self.names().collect::<Vec<_>>().join(", "),
            })
    }
}

//! Core template processing.
//! Walks a template directory and turns every file into a write
//! (rendered `.template` files) or a copy (everything else).

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::template::{FileKind, TemplateFile};

/// What happens to a single template file.
#[derive(Debug, PartialEq, Eq)]
pub enum FileOperation {
    /// Copy the source verbatim to `target`
    Copy { target: PathBuf },
    /// Write rendered `content` to `target`
    Write { target: PathBuf, content: String },
}

impl FileOperation {
    pub fn target(&self) -> &Path {
        match self {
            FileOperation::Copy { target } | FileOperation::Write { target, .. } => target,
        }
    }
}

fn write_file(content: &str, dest_path: &Path) -> Result<()> {
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(dest_path, content).map_err(Error::IoError)
}

fn copy_file(source_path: &Path, dest_path: &Path) -> Result<()> {
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::copy(source_path, dest_path)
        .map(|_| ())
        .map_err(Error::IoError)
}

/// Resolves where a template-relative path lands under `output_root`.
///
/// # Returns
/// * `(PathBuf, FileKind)` - Target path and whether the file gets rendered
pub fn resolve_target_path<P: AsRef<Path>, Q: AsRef<Path>>(
    relative_path: P,
    output_root: Q,
) -> (PathBuf, FileKind) {
    let file = TemplateFile::new(PathBuf::new(), relative_path.as_ref().to_path_buf());
    let target = output_root.as_ref().join(file.target_relative_path());
    (target, file.kind)
}

/// Lists every file below `template_root` in a stable, name-sorted order.
///
/// # Errors
/// * `Error::WalkDirError` if the directory cannot be traversed
pub fn collect_template_files<P: AsRef<Path>>(template_root: P) -> Result<Vec<TemplateFile>> {
    let template_root = template_root.as_ref();
    let mut files = Vec::new();
    for entry in WalkDir::new(template_root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative_path = entry
            .path()
            .strip_prefix(template_root)
            .map_err(|e| Error::TemplateError(e.to_string()))?
            .to_path_buf();
        files.push(TemplateFile::new(entry.into_path(), relative_path));
    }
    Ok(files)
}

/// Renders or copies one template directory into an output directory.
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    template_root: &'a Path,
    output_root: &'a Path,
    context: serde_json::Value,
}

impl<'a> Processor<'a> {
    /// Creates a processor for a single scaffold invocation.
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        template_root: &'a Path,
        output_root: &'a Path,
        context: &RenderContext,
    ) -> Result<Self> {
        Ok(Self {
            engine,
            template_root,
            output_root,
            context: context.to_value()?,
        })
    }

    /// Decides the operation for `file` without touching the destination.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if a template references an unknown key
    /// * `Error::IoError` if a template cannot be read as UTF-8 text
    pub fn process(&self, file: &TemplateFile) -> Result<FileOperation> {
        let target = self.output_root.join(file.target_relative_path());
        debug!(
            "Processing '{}' as {:?}",
            file.relative_path.display(),
            file.kind
        );
        match file.kind {
            FileKind::Template => {
                let raw = fs::read_to_string(&file.source)?;
                let content = self.engine.render(&raw, &self.context)?;
                Ok(FileOperation::Write { target, content })
            }
            FileKind::Static => Ok(FileOperation::Copy { target }),
        }
    }

    /// Writes every file of the template directory, returning the written targets.
    ///
    /// Existing files are overwritten. A failure leaves earlier files in place.
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for file in collect_template_files(self.template_root)? {
            let operation = self.process(&file)?;
            match &operation {
                FileOperation::Copy { target } => copy_file(&file.source, target)?,
                FileOperation::Write { target, content } => write_file(content, target)?,
            }
            info!("Scaffolding `{}`", operation.target().display());
            written.push(operation.target().to_path_buf());
        }
        Ok(written)
    }
}

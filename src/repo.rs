//! New repository creation.
//!
//! `adev repo <name> -t <type>` creates `./<name>`, initializes git inside it,
//! scaffolds the matching template and then runs the post steps of the repo
//! type (toolchain install for `autonomy`, package directory for `python`).

use log::info;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::context::RenderContext;
use crate::dir::DirGuard;
use crate::error::{Error, Result};
use crate::executor::Executor;
use crate::processor::Processor;
use crate::renderer::TemplateRenderer;
use crate::template::TemplateSet;

const GIT_COMMANDS: [&str; 2] = ["git init", "git checkout -b main"];
const AUTONOMY_INSTALL_COMMAND: &str = "bash ./install.sh";
const AUTONOMY_INIT_COMMAND: &str = "autonomy packages init";

/// Scaffolds the files of one repo type into a destination directory.
pub struct RepoScaffolder<'a> {
    engine: &'a dyn TemplateRenderer,
    template_dir: &'a Path,
    context: RenderContext,
}

impl<'a> RepoScaffolder<'a> {
    /// Validates `repo_type` against the discovered templates.
    ///
    /// # Errors
    /// * `Error::RepoTypeNotFound` if `repo_type` is not in `templates`
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        templates: &'a TemplateSet,
        repo_type: &str,
        context: RenderContext,
    ) -> Result<Self> {
        let template_dir = templates.get(repo_type)?;
        Ok(Self {
            engine,
            template_dir,
            context,
        })
    }

    /// Renders and copies every template file into `output_root`.
    pub fn scaffold<P: AsRef<Path>>(&self, output_root: P) -> Result<Vec<PathBuf>> {
        let output = output_root.as_ref();
        let processor = Processor::new(self.engine, self.template_dir, output, &self.context)?;
        processor.run()
    }
}

/// Ensures the output directory does not exist yet.
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if the path already exists
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Creates `./<project_name>` as a new repo of type `repo_type`.
///
/// # Flow
/// 1. Validates the repo type and that the directory does not exist
/// 2. Initializes git on a `main` branch
/// 3. Scaffolds the template
/// 4. Runs the repo type's post steps
///
/// The working directory is restored before returning, on success or error.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the new repo
pub fn create_repo(
    engine: &dyn TemplateRenderer,
    executor: &dyn Executor,
    templates: &TemplateSet,
    repo_type: &str,
    context: RenderContext,
) -> Result<PathBuf> {
    let project_name = context.project_name.clone();
    let scaffolder = RepoScaffolder::new(engine, templates, repo_type, context)?;
    let repo_dir = ensure_output_dir(&project_name)?;

    info!("Creating a new {repo_type} repo.");
    fs::create_dir(&repo_dir)?;
    let repo_dir = repo_dir.canonicalize()?;

    let _guard = DirGuard::enter(&repo_dir)?;

    executor.execute_all(&GIT_COMMANDS)?;
    if !Path::new(".git").exists() {
        return Err(Error::ConfigError(format!(
            "git repository was not initialized in '{}'",
            repo_dir.display()
        )));
    }

    scaffolder.scaffold(env::current_dir()?)?;

    match repo_type {
        "autonomy" => {
            info!("Installing host deps. This may take a while!");
            executor.execute(AUTONOMY_INSTALL_COMMAND)?;
            info!("Initialising autonomy packages.");
            executor.execute(AUTONOMY_INIT_COMMAND)?;
        }
        "python" => {
            let src_dir = ensure_output_dir(&project_name)?;
            fs::create_dir(&src_dir)?;
            fs::write(src_dir.join("__init__.py"), "")?;
        }
        _ => {}
    }

    info!("{} successfully setup.", capitalize(repo_type));
    Ok(repo_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("python"), "Python");
        assert_eq!(capitalize(""), "");
    }
}

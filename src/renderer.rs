//! Template rendering for scaffolded files.
//! Substitutes `{{ key }}` placeholders with values from the render context.
use crate::error::Result;
use minijinja::{Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
///
/// Unknown placeholders are errors rather than empty strings, and the
/// trailing newline of the source is kept so files round-trip cleanly.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer with strict undefined handling.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template does not parse or
    ///   references a key absent from `context`
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

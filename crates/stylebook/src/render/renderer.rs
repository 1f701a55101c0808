//! Template renderer exposing the catalog to markup.

use std::path::Path;
use std::sync::Arc;

use minijinja::{path_loader, Environment, Error};
use serde::Serialize;

use super::functions::register_functions;
use crate::catalog::{global, Catalog};

/// A renderer whose templates can resolve component classes.
///
/// Templates call `variants(component, **options)` to obtain a class
/// string and use the `cx` filter to join class fragments.
///
/// # Example
///
/// ```rust
/// use stylebook::Renderer;
///
/// let mut renderer = Renderer::with_global();
/// renderer
///     .add_template(
///         "cta",
///         r#"<button class="{{ variants("button", size="lg") }}">{{ label }}</button>"#,
///     )
///     .unwrap();
///
/// let html = renderer
///     .render("cta", &serde_json::json!({ "label": "Sign up" }))
///     .unwrap();
/// assert!(html.contains("h-10"));
/// assert!(html.ends_with(">Sign up</button>"));
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer resolving against the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_shared(Arc::new(catalog))
    }

    /// Creates a renderer sharing an already reference-counted catalog.
    pub fn with_shared(catalog: Arc<Catalog>) -> Self {
        let mut env = Environment::new();
        register_functions(&mut env, catalog);
        Self { env }
    }

    /// Creates a renderer resolving against the process-wide catalog.
    pub fn with_global() -> Self {
        Self::new(global().clone())
    }

    /// Loads templates on demand from a directory.
    ///
    /// Templates are looked up by their path relative to `dir`, which also
    /// makes `{% include %}` and `{% extends %}` work across files.
    pub fn set_template_dir(&mut self, dir: impl AsRef<Path>) {
        self.env.set_loader(path_loader(dir.as_ref().to_path_buf()));
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is
    /// invalid. Names ending in `.html` get HTML auto-escaping.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found, or if a
    /// `variants` call names an unknown component, axis or option.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }

    /// Compiles and renders a one-off template.
    pub fn render_str<T: Serialize>(&self, source: &str, data: &T) -> Result<String, Error> {
        self.env.render_str(source, data)
    }
}

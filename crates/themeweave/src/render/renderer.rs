//! Pre-compiled stylesheet renderer.

use minijinja::{Environment, Error};
use serde::Serialize;
use std::sync::Arc;

use super::functions::register_functions;
use crate::registry::ThemeRegistry;

/// A renderer with pre-registered stylesheet templates.
///
/// The renderer takes ownership of a finished registry; templates see it as
/// it was when the renderer was built.
///
/// # Example
///
/// ```rust
/// use themeweave::{StylesheetRenderer, ThemeRegistry, Value};
///
/// let mut registry = ThemeRegistry::new();
/// registry.set_value("primary", Value::literal("amber"), None).unwrap();
/// registry.add_link("button-color", "primary").unwrap();
///
/// let mut renderer = StylesheetRenderer::new(registry).unwrap();
/// renderer
///     .add_template("button", r#".button { color: {{ var("button-color") }}; }"#)
///     .unwrap();
///
/// let css = renderer.render("button", &()).unwrap();
/// assert_eq!(css, ".button { color: var(--button-color, var(--primary, amber)); }");
/// ```
pub struct StylesheetRenderer {
    env: Environment<'static>,
}

impl StylesheetRenderer {
    /// Creates a renderer over `registry`.
    ///
    /// # Errors
    ///
    /// Returns an error if any value chain or link chain in the registry is
    /// cyclic.
    pub fn new(registry: ThemeRegistry) -> Result<Self, Error> {
        registry.validate().map_err(|e| {
            Error::new(minijinja::ErrorKind::InvalidOperation, e.to_string())
        })?;

        let mut env = Environment::new();
        register_functions(&mut env, Arc::new(registry));
        Ok(Self { env })
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template with the given data.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }

    /// Compiles and renders a one-off template.
    pub fn render_str<T: Serialize>(&self, source: &str, data: &T) -> Result<String, Error> {
        self.env.render_str(source, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegistryConfig;
    use crate::value::Value;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Selector {
        selector: String,
    }

    fn registry() -> ThemeRegistry {
        let mut registry = ThemeRegistry::new();
        registry
            .set_value("primary", Value::literal("amber"), None)
            .unwrap();
        registry
            .set_value("surface", Value::literal("white"), None)
            .unwrap();
        registry.add_link("button-color", "primary").unwrap();
        registry
    }

    #[test]
    fn test_var_function() {
        let renderer = StylesheetRenderer::new(registry()).unwrap();
        let css = renderer
            .render_str(r#"{{ var("button-color") }}"#, &())
            .unwrap();
        assert_eq!(css, "var(--button-color, var(--primary, amber))");
    }

    #[test]
    fn test_resolve_function() {
        let renderer = StylesheetRenderer::new(registry()).unwrap();
        let css = renderer
            .render_str(
                r#"{{ resolve("button-color") }}|{{ resolve("missing") is none }}"#,
                &(),
            )
            .unwrap();
        assert_eq!(css, "amber|true");
    }

    #[test]
    fn test_declare_filter_with_data() {
        let mut renderer = StylesheetRenderer::new(registry()).unwrap();
        renderer
            .add_template(
                "rule",
                r#"{{ selector }} { {{ "surface" | declare("background-color") }} }"#,
            )
            .unwrap();

        let css = renderer
            .render(
                "rule",
                &Selector {
                    selector: ".card".into(),
                },
            )
            .unwrap();
        assert_eq!(css, ".card { background-color: var(--surface, white); }");
    }

    #[test]
    fn test_declare_filter_emits_fallback_when_configured() {
        let config = RegistryConfig {
            emit_fallback_declarations: true,
            ..RegistryConfig::default()
        };
        let mut registry = ThemeRegistry::with_config(config);
        registry
            .set_value("primary", Value::literal("amber"), None)
            .unwrap();

        let renderer = StylesheetRenderer::new(registry).unwrap();
        let css = renderer
            .render_str(r#"{{ "primary" | declare("color") }}"#, &())
            .unwrap();
        assert_eq!(css, "color: amber; color: var(--primary, amber);");
    }

    #[test]
    fn test_custom_properties_function() {
        let renderer = StylesheetRenderer::new(registry()).unwrap();
        let css = renderer
            .render_str(r#"{{ custom_properties("button") }}"#, &())
            .unwrap();
        assert_eq!(css, "--button-color: var(--primary, amber);");

        let all = renderer
            .render_str(r#"{{ custom_properties() }}"#, &())
            .unwrap();
        assert_eq!(all.lines().count(), 3);
    }

    #[test]
    fn test_unknown_template_error() {
        let renderer = StylesheetRenderer::new(registry()).unwrap();
        assert!(renderer.render("nonexistent", &()).is_err());
    }

    #[test]
    fn test_new_fails_with_cyclic_registry() {
        let mut registry = ThemeRegistry::new();
        registry.set_value("a", Value::key("b"), None).unwrap();
        registry.set_value("b", Value::key("a"), None).unwrap();

        assert!(StylesheetRenderer::new(registry).is_err());
    }
}

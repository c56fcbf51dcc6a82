//! Subcommand implementations.
//!
//! Each command returns its output instead of printing it, so `main` owns
//! stdout and tests can inspect the text.

use anyhow::{Context, Result};
use std::path::Path;

use themeweave::{
    declare_custom_properties, render_block, StylesheetRenderer, ThemeDocument, ThemeRegistry,
};

use crate::cli::Command;

/// Runs a subcommand, returning text to print, if any.
pub fn run(command: &Command) -> Result<Option<String>> {
    match command {
        Command::Keys { theme, prefix } => {
            let registry = load_registry(theme)?;
            let keys = registry.keys(prefix.as_deref().unwrap_or(""));
            Ok(Some(keys.join("\n")))
        }
        Command::Resolve { theme, key } => {
            let registry = load_registry(theme)?;
            let literal = registry
                .resolve(key)
                .with_context(|| format!("failed to resolve '{}'", key))?;
            if literal.is_none() {
                tracing::info!(key = %key, "key is not registered");
            }
            Ok(literal.map(str::to_string))
        }
        Command::Properties {
            theme,
            overrides,
            prefix,
            selector,
        } => {
            let canonical = load_document(theme)?;
            let registry = register(&canonical, theme)?;

            let customization = match overrides {
                Some(path) => load_document(path)?,
                None => canonical,
            };
            let prefix = prefix.as_deref().or(customization.prefix.as_deref());

            let properties = registry
                .create_theme_properties(&customization.keys, prefix)
                .context("failed to build theme properties")?;
            let declarations = declare_custom_properties(&properties);
            Ok(Some(render_block(selector, &declarations)))
        }
        Command::Render { theme, template } => {
            let registry = load_registry(theme)?;
            let source = std::fs::read_to_string(template)
                .with_context(|| format!("failed to read template {}", template.display()))?;

            let renderer = StylesheetRenderer::new(registry)?;
            let css = renderer
                .render_str(&source, &())
                .with_context(|| format!("failed to render {}", template.display()))?;
            Ok(Some(css))
        }
    }
}

fn load_document(path: &Path) -> Result<ThemeDocument> {
    ThemeDocument::load(path).with_context(|| format!("failed to load {}", path.display()))
}

fn register(document: &ThemeDocument, path: &Path) -> Result<ThemeRegistry> {
    let mut registry = document.registry();
    document
        .register_into(&mut registry)
        .with_context(|| format!("failed to register {}", path.display()))?;
    Ok(registry)
}

fn load_registry(path: &Path) -> Result<ThemeRegistry> {
    let document = load_document(path)?;
    register(&document, path)
}

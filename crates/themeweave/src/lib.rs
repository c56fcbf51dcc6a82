//! # Themeweave - Linked Design Tokens for Stylesheets
//!
//! Themeweave resolves abstract design-token keys (`primary`,
//! `button-color`, ...) into CSS custom properties whose fallback chains
//! follow the keys' original links, so runtime theming overrides compose.
//!
//! ## Concepts
//!
//! - **Key**: a token name in one flat namespace, composed with [`combine`]
//! - **Value**: a [`Value::Literal`] or a [`Value::Key`] reference
//! - **Link**: the key a key was originally derived from, recorded once and
//!   kept even when the key's value is later overridden
//! - **Custom property**: a [`CustomProperty`], one `var(--name, fallback)`
//!   level whose fallback may be another property
//!
//! ## Quick Start
//!
//! ```rust
//! use themeweave::{declare_custom_properties, ThemeMap, ThemeRegistry, Value};
//!
//! // Canonical theme, registered once per build.
//! let mut canonical = ThemeMap::new();
//! canonical.insert("primary".into(), Some(Value::literal("amber")));
//! canonical.insert("button-color".into(), Some(Value::key("primary")));
//!
//! let mut registry = ThemeRegistry::new();
//! registry.register_theme(&canonical, None, None)?;
//!
//! // Overriding the value keeps the link to `primary`.
//! registry.set_value("button-color", Value::literal("teal"), None)?;
//!
//! // A component customization references the theme key.
//! let mut fab = ThemeMap::new();
//! fab.insert("container-color".into(), Some(Value::key("button-color")));
//! fab.insert("size".into(), Some(Value::literal("56px")));
//!
//! let props = registry.create_theme_properties(&fab, Some("fab"))?;
//! assert_eq!(
//!     props["container-color"].to_string(),
//!     "var(--fab-container-color, var(--button-color, var(--primary, amber)))"
//! );
//!
//! let declarations: Vec<String> = declare_custom_properties(&props)
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(
//!     declarations,
//!     [
//!         "--fab-container-color: var(--button-color, var(--primary, amber));",
//!         "--fab-size: 56px;",
//!     ]
//! );
//! # Ok::<(), themeweave::ThemeError>(())
//! ```
//!
//! ## Builds
//!
//! All state lives in a [`ThemeRegistry`] value. Create one per build, drop
//! it afterwards; nothing is global. Theme documents ([`ThemeDocument`]) load
//! registries from YAML or JSON, and [`StylesheetRenderer`] renders
//! stylesheet templates against a finished registry.
//!
//! ## Errors
//!
//! Relinking a key to a different target and cyclic key chains are
//! reported as [`ThemeError`]s. Resolving a key that was never registered
//! is not an error; it yields `None`.

pub mod custom_property;
mod config;
mod error;
mod key;
mod loader;
mod registry;
pub mod render;
pub mod sanitize;
mod theme;
mod value;

pub use config::RegistryConfig;
pub use custom_property::{create_varname, render_block, CustomProperty, Declaration, Fallback};
pub use error::ThemeError;
pub use key::{combine, KeyPart};
pub use loader::ThemeDocument;
pub use registry::{KeyOptions, KeyValues, ThemeRegistry};
pub use render::StylesheetRenderer;
pub use theme::{declare_custom_properties, ThemeMap, ThemeProperties};
pub use value::Value;

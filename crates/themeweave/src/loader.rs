//! Theme documents.
//!
//! A theme document bundles a theme map with the prefix, key options and
//! registry configuration it should be registered with. Documents are
//! written in YAML or JSON:
//!
//! ```yaml
//! config:
//!   varname_prefix: mdc
//! prefix: theme
//! options:
//!   custom_property_prefix: theme
//! keys:
//!   primary: "#6200ee"
//!   on-primary: white
//!   surface: ~
//!   accent: { key: theme-primary }
//! ```
//!
//! Key order is preserved, so references to keys declared earlier in the
//! same document are linked on registration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::RegistryConfig;
use crate::error::ThemeError;
use crate::registry::{KeyOptions, ThemeRegistry};
use crate::theme::ThemeMap;

/// A theme map plus the settings it is registered with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeDocument {
    pub config: Option<RegistryConfig>,
    pub prefix: Option<String>,
    pub options: Option<KeyOptions>,
    pub keys: ThemeMap,
}

impl ThemeDocument {
    /// Parses a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, ThemeError> {
        serde_yaml::from_str(source).map_err(|e| ThemeError::Parse {
            format: "YAML",
            message: e.to_string(),
        })
    }

    /// Parses a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(source).map_err(|e| ThemeError::Parse {
            format: "JSON",
            message: e.to_string(),
        })
    }

    /// Reads a document from disk, choosing the format by extension
    /// (`.yaml`, `.yml` or `.json`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ThemeError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(ThemeError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded theme document");
        parse(&source)
    }

    /// Creates a registry configured from this document's `config` section.
    pub fn registry(&self) -> ThemeRegistry {
        ThemeRegistry::with_config(self.config.clone().unwrap_or_default())
    }

    /// Registers this document's keys into `registry` as a canonical theme.
    pub fn register_into(&self, registry: &mut ThemeRegistry) -> Result<(), ThemeError> {
        registry.register_theme(&self.keys, self.prefix.as_deref(), self.options.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    const BASELINE: &str = r##"
config:
  varname_prefix: mdc
prefix: theme
options:
  custom_property_prefix: core
keys:
  primary: "#6200ee"
  elevation: 6
  surface: ~
  accent: { key: theme-primary }
"##;

    #[test]
    fn test_parse_yaml_document() {
        let doc = ThemeDocument::from_yaml_str(BASELINE).unwrap();

        assert_eq!(doc.prefix.as_deref(), Some("theme"));
        assert_eq!(
            doc.config.as_ref().and_then(|c| c.varname_prefix.as_deref()),
            Some("mdc")
        );
        let names: Vec<&str> = doc.keys.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["primary", "elevation", "surface", "accent"]);
        assert_eq!(doc.keys["elevation"], Some(Value::literal("6")));
        assert_eq!(doc.keys["surface"], None);
        assert_eq!(doc.keys["accent"], Some(Value::key("theme-primary")));
    }

    #[test]
    fn test_register_document() {
        let doc = ThemeDocument::from_yaml_str(BASELINE).unwrap();
        let mut registry = doc.registry();
        doc.register_into(&mut registry).unwrap();

        assert_eq!(registry.keys("theme"), vec!["theme-primary", "theme-elevation", "theme-accent"]);
        assert_eq!(registry.link("theme-accent"), Some("theme-primary"));
        assert_eq!(registry.create_varname("theme-primary"), "--mdc-core-theme-primary");
    }

    #[test]
    fn test_parse_json_document() {
        let doc = ThemeDocument::from_json_str(
            r#"{ "keys": { "primary": "amber", "button-color": { "key": "primary" } } }"#,
        )
        .unwrap();
        assert_eq!(doc.prefix, None);
        assert_eq!(doc.keys.len(), 2);
    }

    #[test]
    fn test_parse_error() {
        let err = ThemeDocument::from_yaml_str("keys: [unclosed").unwrap_err();
        assert!(matches!(err, ThemeError::Parse { format: "YAML", .. }));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = ThemeDocument::from_json_str(r#"{ "colors": {} }"#).unwrap_err();
        assert!(matches!(err, ThemeError::Parse { format: "JSON", .. }));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let err = ThemeDocument::load("theme.toml").unwrap_err();
        assert!(matches!(err, ThemeError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ThemeDocument::load("/nonexistent/theme.yaml").unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }
}

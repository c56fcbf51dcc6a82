//! Theme registration and custom-property synthesis.
//!
//! A canonical theme is registered once per build with
//! [`ThemeRegistry::register_theme`]. Customizations are then turned into
//! chained custom properties with [`ThemeRegistry::create_theme_properties`],
//! which reads the registry but never mutates it.

use indexmap::IndexMap;

use crate::custom_property::{CustomProperty, Declaration, Fallback};
use crate::error::ThemeError;
use crate::key::combine;
use crate::registry::{KeyOptions, ThemeRegistry};
use crate::value::Value;

/// An ordered theme: entry name to value. `None` entries are skipped.
pub type ThemeMap = IndexMap<String, Option<Value>>;

/// Custom properties built for a theme, keyed by entry name.
pub type ThemeProperties = IndexMap<String, CustomProperty>;

impl ThemeRegistry {
    /// Registers a canonical theme.
    ///
    /// Every non-`None` entry is stored under `prefix-name`. Entries whose
    /// value references a registered key are also linked to that key.
    ///
    /// Call once per canonical theme before any customization. Registering
    /// again is harmless while links agree, but relinking a key to a
    /// different target fails because links are write-once.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::DuplicateLink`] when an entry would relink a key,
    /// or [`ThemeError::InvalidLiteral`] when literal validation rejects an
    /// entry. Entries before the failing one stay registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use themeweave::{ThemeMap, ThemeRegistry, Value};
    ///
    /// let mut theme = ThemeMap::new();
    /// theme.insert("primary".into(), Some(Value::literal("#6200ee")));
    /// theme.insert("accent".into(), Some(Value::key("theme-primary")));
    ///
    /// let mut registry = ThemeRegistry::new();
    /// registry.register_theme(&theme, Some("theme"), None)?;
    ///
    /// assert!(registry.is_key("theme-primary"));
    /// assert_eq!(registry.link("theme-accent"), Some("theme-primary"));
    /// # Ok::<(), themeweave::ThemeError>(())
    /// ```
    pub fn register_theme(
        &mut self,
        theme: &ThemeMap,
        prefix: Option<&str>,
        options: Option<&KeyOptions>,
    ) -> Result<(), ThemeError> {
        tracing::debug!(prefix = prefix.unwrap_or(""), entries = theme.len(), "register theme");

        for (name, value) in theme {
            let value = match value {
                Some(value) => value,
                None => continue,
            };
            let key = combine([prefix, Some(name.as_str())]);

            if let Value::Key(target) = value {
                if self.is_key(target) {
                    self.add_link(key.as_str(), target.as_str())?;
                } else {
                    tracing::debug!(key = %key, target = %target, "reference to unregistered key left unlinked");
                }
            }
            self.set_value(key, value.clone(), options.cloned())?;
        }
        Ok(())
    }

    /// Builds custom properties for a customization theme.
    ///
    /// Every entry becomes a property named after `prefix-name`. A reference
    /// falls back to the referenced key's link chain
    /// (see [`create_custom_property`](Self::create_custom_property)), a
    /// literal falls back to itself. The registry is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::CyclicKeyReference`] if a referenced chain loops.
    ///
    /// # Example
    ///
    /// ```rust
    /// use themeweave::{ThemeMap, ThemeRegistry, Value};
    ///
    /// let mut registry = ThemeRegistry::new();
    /// registry.set_value("secondary", Value::literal("teal"), None)?;
    ///
    /// let mut fab = ThemeMap::new();
    /// fab.insert("container-color".into(), Some(Value::key("secondary")));
    ///
    /// let props = registry.create_theme_properties(&fab, Some("fab"))?;
    /// assert_eq!(
    ///     props["container-color"].to_string(),
    ///     "var(--fab-container-color, var(--secondary, teal))"
    /// );
    /// # Ok::<(), themeweave::ThemeError>(())
    /// ```
    pub fn create_theme_properties(
        &self,
        theme: &ThemeMap,
        prefix: Option<&str>,
    ) -> Result<ThemeProperties, ThemeError> {
        let mut properties = ThemeProperties::with_capacity(theme.len());

        for (name, value) in theme {
            let fallback = match value {
                None => continue,
                Some(Value::Key(target)) => {
                    Fallback::from(self.create_custom_property(target, false)?)
                }
                Some(Value::Literal(text)) => Fallback::Literal(text.clone()),
            };
            let key = combine([prefix, Some(name.as_str())]);
            let prop = CustomProperty::create(self.create_varname(&key), Some(fallback));
            properties.insert(name.clone(), prop);
        }
        Ok(properties)
    }

    /// Declares a regular stylesheet property that reads `key`'s custom property.
    ///
    /// Honors [`emit_fallback_declarations`](crate::RegistryConfig::emit_fallback_declarations).
    pub fn declare_property(
        &self,
        property: &str,
        key: &str,
    ) -> Result<Vec<Declaration>, ThemeError> {
        let prop = self.create_custom_property(key, false)?;
        Ok(Declaration::property(
            property,
            &prop,
            self.config().emit_fallback_declarations,
        ))
    }
}

/// Emits one `--name: value;` declaration per property that has a fallback.
///
/// Properties built by [`ThemeRegistry::create_theme_properties`] always
/// have one.
pub fn declare_custom_properties(properties: &ThemeProperties) -> Vec<Declaration> {
    properties
        .iter()
        .filter_map(|(name, prop)| {
            let declaration = Declaration::custom(prop);
            if declaration.is_none() {
                tracing::trace!(name = %name, "property has no fallback, nothing to declare");
            }
            declaration
        })
        .collect()
}

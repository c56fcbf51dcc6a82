//! Key store, link graph and key options.
//!
//! [`ThemeRegistry`] owns the three maps that make up a theming build:
//!
//! 1. **Key store**: key name to [`Value`], in insertion order
//! 2. **Link graph**: key name to the key it was originally derived from
//! 3. **Key options**: per-key settings such as a custom-property prefix
//!
//! The store and the link graph are mutated independently. A key's stored
//! value can be overridden to a literal while its link keeps pointing at the
//! key it was first derived from; custom-property synthesis follows links,
//! resolution follows values.
//!
//! A registry is created fresh for each build and dropped afterwards. There
//! is no process-wide state, so independent builds can coexist.
//!
//! # Example
//!
//! ```rust
//! use themeweave::{ThemeRegistry, Value};
//!
//! let mut registry = ThemeRegistry::new();
//! registry.set_value("primary", Value::literal("amber"), None)?;
//! registry.add_link("button-color", "primary")?;
//!
//! // The link seeded the stored value.
//! assert_eq!(registry.resolve("button-color")?, Some("amber"));
//!
//! // Overriding the value does not touch the link.
//! registry.set_value("button-color", Value::literal("teal"), None)?;
//! assert_eq!(registry.resolve("button-color")?, Some("teal"));
//! assert_eq!(registry.link("button-color"), Some("primary"));
//! # Ok::<(), themeweave::ThemeError>(())
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::RegistryConfig;
use crate::custom_property::{create_varname, CustomProperty, Fallback};
use crate::error::ThemeError;
use crate::key::combine;
use crate::sanitize::validate_literal;
use crate::value::Value;

/// Ordered key-to-value entries, as accepted by [`ThemeRegistry::set_values`].
pub type KeyValues = IndexMap<String, Value>;

/// Per-key settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyOptions {
    /// Segment placed between the global varname prefix and the key,
    /// e.g. `theme` turns `primary` into `--theme-primary`.
    pub custom_property_prefix: Option<String>,
}

impl KeyOptions {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            custom_property_prefix: Some(prefix.into()),
        }
    }
}

/// Registry of theme keys, their links and options.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    values: IndexMap<String, Value>,
    links: HashMap<String, String>,
    options: HashMap<String, KeyOptions>,
    config: RegistryConfig,
}

impl ThemeRegistry {
    /// Creates an empty registry with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with the given configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns true if `key` has a stored value.
    pub fn is_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns stored keys whose name starts with `prefix`, in insertion order.
    ///
    /// The match is on the literal string: `"typo"` matches
    /// `"typography-body"`. An empty prefix returns every key.
    pub fn keys(&self, prefix: &str) -> Vec<&str> {
        self.values
            .keys()
            .filter(|key| key.starts_with(prefix))
            .map(String::as_str)
            .collect()
    }

    /// Returns the stored value for `key` without dereferencing it.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns the key `key` was originally linked to.
    pub fn link(&self, key: &str) -> Option<&str> {
        self.links.get(key).map(String::as_str)
    }

    pub fn options(&self, key: &str) -> Option<&KeyOptions> {
        self.options.get(key)
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drops every key, link and option. Configuration is kept.
    pub fn clear(&mut self) {
        self.values.clear();
        self.links.clear();
        self.options.clear();
    }

    /// Stores `value` under `key`, overwriting any previous value.
    ///
    /// When `options` is given it replaces the key's options. Links are left
    /// untouched. Returns the key for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidLiteral`] if literal validation is
    /// enabled and the literal could break out of a declaration.
    pub fn set_value(
        &mut self,
        key: impl Into<String>,
        value: Value,
        options: Option<KeyOptions>,
    ) -> Result<String, ThemeError> {
        let key = key.into();
        self.check_literal(&key, &value)?;

        tracing::trace!(key = %key, value = %value, "set value");
        self.values.insert(key.clone(), value);
        if let Some(options) = options {
            self.options.insert(key.clone(), options);
        }
        Ok(key)
    }

    /// Stores every entry of `values`. No links are created.
    ///
    /// Returns `values` for chaining.
    pub fn set_values<'m>(
        &mut self,
        values: &'m KeyValues,
        options: Option<&KeyOptions>,
    ) -> Result<&'m KeyValues, ThemeError> {
        for (key, value) in values {
            self.set_value(key.as_str(), value.clone(), options.cloned())?;
        }
        Ok(values)
    }

    /// Records that `key` was derived from `link`.
    ///
    /// Links are write-once: linking a key again to the same target is a
    /// no-op, linking it to a different target fails. If `key` has no
    /// stored value yet, its value becomes a reference to `link`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::DuplicateLink`] if `key` is already linked to a
    /// different key.
    pub fn add_link(
        &mut self,
        key: impl Into<String>,
        link: impl Into<String>,
    ) -> Result<String, ThemeError> {
        let key = key.into();
        let link = link.into();

        if let Some(existing) = self.links.get(&key) {
            if *existing == link {
                return Ok(key);
            }
            tracing::warn!(key = %key, existing = %existing, attempted = %link, "duplicate link");
            return Err(ThemeError::DuplicateLink {
                key,
                existing: existing.clone(),
                attempted: link,
            });
        }

        if !self.values.contains_key(&key) {
            self.values.insert(key.clone(), Value::Key(link.clone()));
        }
        tracing::debug!(key = %key, link = %link, "add link");
        self.links.insert(key.clone(), link);
        Ok(key)
    }

    /// Resolves `key` to its literal value, following key references.
    ///
    /// Returns `Ok(None)` for an unregistered key, or when the chain ends at
    /// a reference to an unregistered key.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::CyclicKeyReference`] if the chain revisits a key.
    pub fn resolve(&self, key: &str) -> Result<Option<&str>, ThemeError> {
        let mut visited: Vec<&str> = Vec::new();
        let mut current = key;

        loop {
            if visited.contains(&current) {
                tracing::debug!(key, "cycle in value chain");
                return Err(ThemeError::cycle(visited, current));
            }
            visited.push(current);

            match self.values.get(current) {
                None => return Ok(None),
                Some(Value::Literal(text)) => return Ok(Some(text.as_str())),
                Some(Value::Key(next)) => current = next.as_str(),
            }
        }
    }

    /// Returns `key` followed by every key reached through its links.
    fn link_chain<'a>(&'a self, key: &'a str) -> Result<Vec<&'a str>, ThemeError> {
        let mut chain = vec![key];
        let mut current = key;

        while let Some(next) = self.links.get(current) {
            if chain.contains(&next.as_str()) {
                tracing::debug!(key, "cycle in link chain");
                return Err(ThemeError::cycle(chain, next));
            }
            chain.push(next.as_str());
            current = next.as_str();
        }
        Ok(chain)
    }

    /// Builds the custom-property varname for `key`.
    ///
    /// The key's `custom_property_prefix` option, if any, is combined in front
    /// of the key, then the configured global prefix.
    pub fn create_varname(&self, key: &str) -> String {
        let key_prefix = self
            .options
            .get(key)
            .and_then(|options| options.custom_property_prefix.as_deref());
        let name = combine([key_prefix, Some(key)]);
        create_varname(&name, self.config.varname_prefix.as_deref())
    }

    /// Builds the custom property for `key`.
    ///
    /// When `key` is linked, the fallback is the property built for the
    /// linked key, recursively, so the result mirrors the original link
    /// provenance: `var(--button-color, var(--primary, amber))`. The chain
    /// ends in the deep-resolved literal of the last key.
    ///
    /// With `deep`, links are ignored and the fallback is `key`'s own
    /// deep-resolved literal.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::CyclicKeyReference`] if the link chain or the
    /// final value chain loops.
    pub fn create_custom_property(
        &self,
        key: &str,
        deep: bool,
    ) -> Result<CustomProperty, ThemeError> {
        let chain = if deep {
            vec![key]
        } else {
            self.link_chain(key)?
        };

        // The chain always starts with `key`.
        let (rest, last) = chain.split_at(chain.len() - 1);
        let last = last[0];

        let literal = self.resolve(last)?;
        if literal.is_none() {
            tracing::debug!(key = last, "no literal for custom property fallback");
        }
        let mut prop = CustomProperty::create(
            self.create_varname(last),
            literal.map(|text| Fallback::Literal(text.to_string())),
        );

        for linked in rest.iter().rev() {
            prop = CustomProperty::new(self.create_varname(linked)).with_fallback(prop);
        }
        Ok(prop)
    }

    /// Checks every key's value chain and link chain for cycles.
    ///
    /// Resolution and synthesis detect cycles on their own; this reports them
    /// up front.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for key in self.values.keys().chain(self.links.keys()) {
            self.resolve(key)?;
            self.link_chain(key)?;
        }
        Ok(())
    }

    fn check_literal(&self, key: &str, value: &Value) -> Result<(), ThemeError> {
        if !self.config.validate_literals {
            return Ok(());
        }
        match value {
            Value::Literal(text) => {
                validate_literal(text).map_err(|reason| ThemeError::InvalidLiteral {
                    key: key.to_string(),
                    value: text.clone(),
                    reason,
                })
            }
            Value::Key(_) => Ok(()),
        }
    }
}

//! Registry configuration.

use serde::{Deserialize, Serialize};

/// Settings that shape custom-property names and declaration output.
///
/// # Example
///
/// ```rust
/// use themeweave::{RegistryConfig, ThemeRegistry};
///
/// let config = RegistryConfig {
///     varname_prefix: Some("mdc".into()),
///     ..RegistryConfig::default()
/// };
/// let registry = ThemeRegistry::with_config(config);
/// assert_eq!(registry.create_varname("primary"), "--mdc-primary");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Namespace placed in front of every custom-property name.
    pub varname_prefix: Option<String>,
    /// Reject literals that would break out of a declaration.
    pub validate_literals: bool,
    /// Emit a plain literal declaration ahead of each `var()` declaration.
    pub emit_fallback_declarations: bool,
}

//! The custom-property value object.

use std::fmt;

use crate::key::combine;

/// The fallback half of a `var()` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// Another custom property, producing `var(--a, var(--b, ...))`.
    Property(Box<CustomProperty>),
    /// Stylesheet text used when no property in the chain is set.
    Literal(String),
}

impl Fallback {
    /// Returns the nested property, if this fallback is one.
    pub fn as_property(&self) -> Option<&CustomProperty> {
        match self {
            Fallback::Property(prop) => Some(prop.as_ref()),
            Fallback::Literal(_) => None,
        }
    }

    /// Whether this fallback is itself a custom property.
    pub fn is_custom_prop(&self) -> bool {
        matches!(self, Fallback::Property(_))
    }

    /// Text used where the fallback appears inside `var()`.
    pub fn declaration_value(&self) -> String {
        match self {
            Fallback::Property(prop) => prop.declaration_value(),
            Fallback::Literal(text) => text.clone(),
        }
    }
}

impl From<CustomProperty> for Fallback {
    fn from(prop: CustomProperty) -> Self {
        Fallback::Property(Box::new(prop))
    }
}

/// One level of a `var(--name, fallback)` expression.
///
/// # Example
///
/// ```rust
/// use themeweave::CustomProperty;
///
/// let primary = CustomProperty::create("--primary", Some("amber".into()));
/// let button = CustomProperty::new("--button-color").with_fallback(primary);
///
/// assert_eq!(
///     button.declaration_value(),
///     "var(--button-color, var(--primary, amber))"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomProperty {
    varname: String,
    fallback: Option<Fallback>,
}

impl CustomProperty {
    /// Creates a property with no fallback.
    pub fn new(varname: impl Into<String>) -> Self {
        Self {
            varname: varname.into(),
            fallback: None,
        }
    }

    /// Creates a property with an optional fallback.
    pub fn create(varname: impl Into<String>, fallback: Option<Fallback>) -> Self {
        Self {
            varname: varname.into(),
            fallback,
        }
    }

    /// Returns the property with its fallback replaced.
    pub fn with_fallback(mut self, fallback: impl Into<Fallback>) -> Self {
        self.set_fallback(fallback);
        self
    }

    pub fn set_fallback(&mut self, fallback: impl Into<Fallback>) {
        self.fallback = Some(fallback.into());
    }

    pub fn varname(&self) -> &str {
        &self.varname
    }

    pub fn fallback(&self) -> Option<&Fallback> {
        self.fallback.as_ref()
    }

    /// The literal at the end of the fallback chain, if any.
    pub fn literal(&self) -> Option<&str> {
        let mut current = self;
        loop {
            match current.fallback.as_ref()? {
                Fallback::Property(next) => current = next.as_ref(),
                Fallback::Literal(text) => return Some(text.as_str()),
            }
        }
    }

    /// Number of properties in the chain, this one included.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self;
        while let Some(Fallback::Property(next)) = current.fallback.as_ref() {
            depth += 1;
            current = next.as_ref();
        }
        depth
    }

    /// Renders the `var()` expression for this property.
    pub fn declaration_value(&self) -> String {
        match &self.fallback {
            Some(fallback) => format!("var({}, {})", self.varname, fallback.declaration_value()),
            None => format!("var({})", self.varname),
        }
    }
}

impl From<&str> for Fallback {
    fn from(text: &str) -> Self {
        Fallback::Literal(text.to_string())
    }
}

impl From<String> for Fallback {
    fn from(text: String) -> Self {
        Fallback::Literal(text)
    }
}

impl fmt::Display for CustomProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.declaration_value())
    }
}

/// Builds a custom-property varname from a key and an optional namespace.
///
/// Characters that are not valid in a CSS name are escaped.
///
/// ```rust
/// use themeweave::create_varname;
///
/// assert_eq!(create_varname("primary", None), "--primary");
/// assert_eq!(create_varname("primary", Some("mdc")), "--mdc-primary");
/// ```
pub fn create_varname(name: &str, prefix: Option<&str>) -> String {
    let name = combine([prefix, Some(name)]);
    let mut varname = String::from("--");
    // Writing into a String cannot fail.
    let _ = cssparser::serialize_name(&name, &mut varname);
    varname
}

//! Declaration lines built from custom properties.

use std::fmt;

use super::property::CustomProperty;

/// A single `property: value;` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Declares the custom property itself: `--name: <fallback>;`.
    ///
    /// Returns `None` when the property has no fallback, since there is
    /// nothing to assign.
    pub fn custom(prop: &CustomProperty) -> Option<Self> {
        prop.fallback()
            .map(|fallback| Self::new(prop.varname(), fallback.declaration_value()))
    }

    /// Declares a regular property that reads the custom property:
    /// `color: var(--name, ...);`.
    ///
    /// With `emit_fallback`, a plain literal declaration is emitted first so
    /// user agents without custom-property support still get a value.
    pub fn property(name: &str, prop: &CustomProperty, emit_fallback: bool) -> Vec<Self> {
        let mut declarations = Vec::with_capacity(2);
        if emit_fallback {
            if let Some(literal) = prop.literal() {
                declarations.push(Self::new(name, literal));
            }
        }
        declarations.push(Self::new(name, prop.declaration_value()));
        declarations
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// Renders declarations inside a `selector { ... }` block.
pub fn render_block(selector: &str, declarations: &[Declaration]) -> String {
    let mut css = format!("{} {{\n", selector);
    for declaration in declarations {
        css.push_str(&format!("  {}\n", declaration));
    }
    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chained() -> CustomProperty {
        let primary = CustomProperty::create("--primary", Some("amber".into()));
        CustomProperty::new("--button-color").with_fallback(primary)
    }

    #[test]
    fn test_display() {
        let decl = Declaration::new("color", "red");
        assert_eq!(decl.to_string(), "color: red;");
    }

    #[test]
    fn test_custom_declaration() {
        let decl = Declaration::custom(&chained()).unwrap();
        assert_eq!(decl.property, "--button-color");
        assert_eq!(decl.value, "var(--primary, amber)");
    }

    #[test]
    fn test_custom_declaration_without_fallback() {
        assert_eq!(Declaration::custom(&CustomProperty::new("--x")), None);
    }

    #[test]
    fn test_property_declaration() {
        let decls = Declaration::property("background-color", &chained(), false);
        assert_eq!(decls.len(), 1);
        assert_eq!(
            decls[0].to_string(),
            "background-color: var(--button-color, var(--primary, amber));"
        );
    }

    #[test]
    fn test_property_declaration_with_fallback() {
        let decls = Declaration::property("color", &chained(), true);
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].to_string(), "color: amber;");
        assert!(decls[1].value.starts_with("var(--button-color"));
    }

    #[test]
    fn test_render_block() {
        let decls = vec![
            Declaration::new("--primary", "amber"),
            Declaration::new("--surface", "white"),
        ];
        let css = render_block(":root", &decls);
        assert_eq!(css, ":root {\n  --primary: amber;\n  --surface: white;\n}");
    }

    #[test]
    fn test_render_block_empty() {
        assert_eq!(render_block(":root", &[]), ":root {\n}");
    }
}

//! Stored key values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A value stored under a key: either a literal or a reference to another key.
///
/// The variant is explicit, so a literal that happens to spell a registered
/// key name is never mistaken for a reference.
///
/// In theme documents, scalars deserialize as literals and a mapping with a
/// single `key` field deserializes as a reference:
///
/// ```yaml
/// primary: "#6200ee"
/// button-color: { key: primary }
/// ```
///
/// Numbers and booleans are stored in their canonical form, so `1.0` becomes
/// `1` and `0.50` becomes `0.5`. Quote a literal to keep its exact text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Stylesheet text used as-is.
    Literal(String),
    /// The name of another key.
    Key(String),
}

impl Value {
    /// Creates a literal value.
    pub fn literal(text: impl Into<String>) -> Self {
        Value::Literal(text.into())
    }

    /// Creates a reference to another key.
    pub fn key(name: impl Into<String>) -> Self {
        Value::Key(name.into())
    }

    /// Returns the referenced key name, if this is a reference.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Value::Key(name) => Some(name.as_str()),
            Value::Literal(_) => None,
        }
    }

    /// Returns the literal text, if this is a literal.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Value::Literal(text) => Some(text.as_str()),
            Value::Key(_) => None,
        }
    }

    pub fn is_key(&self) -> bool {
        matches!(self, Value::Key(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(text) => f.write_str(text),
            Value::Key(name) => write!(f, "<{}>", name),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeyRef {
    key: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ValueRepr {
    Ref(KeyRef),
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match ValueRepr::deserialize(deserializer)? {
            ValueRepr::Ref(KeyRef { key }) => Value::Key(key),
            ValueRepr::Text(text) => Value::Literal(text),
            ValueRepr::Integer(n) => Value::Literal(n.to_string()),
            ValueRepr::Float(n) => Value::Literal(n.to_string()),
            ValueRepr::Bool(b) => Value::Literal(b.to_string()),
        })
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Literal(text) => serializer.serialize_str(text),
            Value::Key(name) => KeyRef { key: name.clone() }.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Value::literal("amber"), Value::Literal("amber".into()));
        assert_eq!(Value::key("primary"), Value::Key("primary".into()));
    }

    #[test]
    fn test_accessors() {
        let lit = Value::literal("amber");
        let key = Value::key("primary");

        assert_eq!(lit.as_literal(), Some("amber"));
        assert_eq!(lit.as_key(), None);
        assert!(!lit.is_key());

        assert_eq!(key.as_key(), Some("primary"));
        assert_eq!(key.as_literal(), None);
        assert!(key.is_key());
    }

    #[test]
    fn test_numbers_are_normalized_unless_quoted() {
        let values: Vec<Value> =
            serde_yaml::from_str("[1.0, 0.50, \"1.0\"]").unwrap();
        assert_eq!(
            values,
            vec![
                Value::literal("1"),
                Value::literal("0.5"),
                Value::literal("1.0"),
            ]
        );
    }

    #[test]
    fn test_deserialize_scalars_as_literals() {
        let values: Vec<Value> = serde_json::from_str(r#"["teal", 4, 1.5, true]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::literal("teal"),
                Value::literal("4"),
                Value::literal("1.5"),
                Value::literal("true"),
            ]
        );
    }

    #[test]
    fn test_deserialize_key_reference() {
        let value: Value = serde_yaml::from_str("{ key: primary }").unwrap();
        assert_eq!(value, Value::key("primary"));
    }

    #[test]
    fn test_literal_spelling_a_key_stays_literal() {
        let value: Value = serde_yaml::from_str("primary").unwrap();
        assert_eq!(value, Value::literal("primary"));
    }

    #[test]
    fn test_serialize_shapes() {
        let json = serde_json::to_string(&vec![Value::literal("amber"), Value::key("primary")])
            .unwrap();
        assert_eq!(json, r#"["amber",{"key":"primary"}]"#);
    }
}

//! Key composition.
//!
//! All keys live in one flat namespace. Namespacing is purely a naming
//! convention: parts are joined with `-`, so `combine(["body", "font-size"])`
//! yields `"body-font-size"`.

/// A value usable as one segment of a combined key.
///
/// Implemented for string types and their `Option` forms so that absent
/// prefixes can be passed straight through.
pub trait KeyPart {
    /// Returns the segment text, or `None` to skip it.
    fn as_part(&self) -> Option<&str>;
}

impl KeyPart for &str {
    fn as_part(&self) -> Option<&str> {
        Some(*self)
    }
}

impl KeyPart for String {
    fn as_part(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl KeyPart for &String {
    fn as_part(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: KeyPart> KeyPart for Option<T> {
    fn as_part(&self) -> Option<&str> {
        self.as_ref().and_then(KeyPart::as_part)
    }
}

/// Joins key parts with `-`, skipping absent and empty parts.
///
/// Parts are not validated as identifiers; concatenation is textual.
///
/// # Example
///
/// ```rust
/// use themeweave::combine;
///
/// assert_eq!(combine(["a", "b", "c"]), "a-b-c");
/// assert_eq!(combine([None, Some("a"), Some(""), Some("b")]), "a-b");
/// assert_eq!(combine(Vec::<&str>::new()), "");
/// ```
pub fn combine<I>(parts: I) -> String
where
    I: IntoIterator,
    I::Item: KeyPart,
{
    let mut key = String::new();
    for part in parts {
        match part.as_part() {
            Some(text) if !text.is_empty() => {
                if !key.is_empty() {
                    key.push('-');
                }
                key.push_str(text);
            }
            _ => {}
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_joins_with_hyphen() {
        assert_eq!(combine(["a", "b", "c"]), "a-b-c");
        assert_eq!(combine(["body", "font-size"]), "body-font-size");
    }

    #[test]
    fn test_combine_skips_none_and_empty() {
        assert_eq!(combine([None, Some("a"), Some(""), Some("b")]), "a-b");
        assert_eq!(combine([Some(""), None]), "");
    }

    #[test]
    fn test_combine_empty() {
        assert_eq!(combine(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_combine_owned_parts() {
        let prefix = Some(String::from("fab"));
        let name = String::from("container-color");
        assert_eq!(combine([prefix, Some(name)]), "fab-container-color");
    }

    #[test]
    fn test_combine_single() {
        assert_eq!(combine(["primary"]), "primary");
    }
}

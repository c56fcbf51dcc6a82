//! Registry errors.

use std::path::PathBuf;

/// Error returned by registry, synthesis and theme-document operations.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A key already carries a link to a different key.
    ///
    /// Links are write-once; this halts the build.
    #[error("key '{key}' is already linked to '{existing}', cannot relink to '{attempted}'")]
    DuplicateLink {
        key: String,
        existing: String,
        attempted: String,
    },

    /// A value chain or link chain revisits a key.
    #[error("cyclic key reference: {}", path.join(" -> "))]
    CyclicKeyReference { path: Vec<String> },

    /// A literal would break out of its declaration.
    #[error("invalid literal for key '{key}': {value:?} ({reason})")]
    InvalidLiteral {
        key: String,
        value: String,
        reason: String,
    },

    /// A theme document failed to deserialize.
    #[error("failed to parse {format} theme document: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// A theme document could not be read from disk.
    #[error("failed to read theme document \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not name a supported document format.
    #[error("unsupported theme document format: \"{}\"", path.display())]
    UnsupportedFormat { path: PathBuf },
}

impl ThemeError {
    pub(crate) fn cycle<'a, I>(visited: I, repeated: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut path: Vec<String> = visited.into_iter().map(str::to_string).collect();
        path.push(repeated.to_string());
        ThemeError::CyclicKeyReference { path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_link_display() {
        let err = ThemeError::DuplicateLink {
            key: "button-color".to_string(),
            existing: "primary".to_string(),
            attempted: "secondary".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("button-color"));
        assert!(msg.contains("primary"));
        assert!(msg.contains("secondary"));
    }

    #[test]
    fn test_cycle_display() {
        let err = ThemeError::cycle(["a", "b"], "a");
        let msg = err.to_string();
        assert!(msg.contains("cyclic"));
        assert!(msg.contains("a -> b -> a"));
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = ThemeError::UnsupportedFormat {
            path: PathBuf::from("/themes/base.toml"),
        };
        assert!(err.to_string().contains("/themes/base.toml"));
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error;

        let err = ThemeError::Io {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.yaml"));
    }
}

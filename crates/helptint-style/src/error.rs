//! Error types for style descriptor resolution and theme loading.

/// Error returned when a style descriptor cannot be resolved.
///
/// Descriptors are resolved lazily, at render time, so these errors surface
/// on the first help render that actually uses the offending descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleResolveError {
    /// A token in the descriptor is neither an attribute nor a color.
    UnknownToken {
        /// The full descriptor being resolved.
        descriptor: String,
        /// The offending token.
        token: String,
    },
    /// A token was recognized as a color form but failed to parse.
    InvalidColor {
        /// The offending token.
        token: String,
        /// What was wrong with it.
        message: String,
    },
    /// The descriptor contains no tokens at all.
    Empty {
        /// The original (whitespace-only or empty) descriptor.
        descriptor: String,
    },
}

impl std::fmt::Display for StyleResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleResolveError::UnknownToken { descriptor, token } => {
                write!(f, "unknown style token '{}' in '{}'", token, descriptor)
            }
            StyleResolveError::InvalidColor { token, message } => {
                write!(f, "invalid color '{}': {}", token, message)
            }
            StyleResolveError::Empty { descriptor } => {
                write!(f, "empty style descriptor '{}'", descriptor)
            }
        }
    }
}

impl std::error::Error for StyleResolveError {}

/// Error type for theme parsing and loading failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// YAML parse error.
    Parse {
        /// Error message from the YAML parser.
        message: String,
    },
    /// File loading error.
    Load {
        /// Error message from the file loader.
        message: String,
    },
    /// A role in the theme carries an unresolvable descriptor.
    Style(StyleResolveError),
}

impl std::fmt::Display for ThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::Parse { message } => {
                write!(f, "failed to parse theme: {}", message)
            }
            ThemeError::Load { message } => {
                write!(f, "failed to load theme: {}", message)
            }
            ThemeError::Style(err) => {
                write!(f, "theme style error: {}", err)
            }
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ThemeError::Style(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StyleResolveError> for ThemeError {
    fn from(err: StyleResolveError) -> Self {
        ThemeError::Style(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_token_display() {
        let err = StyleResolveError::UnknownToken {
            descriptor: "bold unknwnstyle".to_string(),
            token: "unknwnstyle".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unknwnstyle"));
        assert!(msg.contains("unknown style token"));
    }

    #[test]
    fn test_invalid_color_display() {
        let err = StyleResolveError::InvalidColor {
            token: "#zzz".to_string(),
            message: "not valid hex".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("#zzz"));
        assert!(msg.contains("not valid hex"));
    }

    #[test]
    fn test_theme_error_source() {
        let err = ThemeError::from(StyleResolveError::Empty {
            descriptor: String::new(),
        });
        assert!(std::error::Error::source(&err).is_some());
    }
}

//! Per-command style configuration.
//!
//! [`HelpStyles`] is the declarative surface command authors attach to each
//! command or group node: a descriptor per help-screen role, an optional
//! map of per-flag overrides, and an optional theme name. Configuration is
//! inert data until help is actually rendered; descriptors resolve lazily
//! so configuration errors surface at render time, and unset fields
//! inherit from the parent node per-field (see
//! [`StyledCommand`](crate::StyledCommand)).
//!
//! Resolution precedence for any piece of help text, most specific first:
//!
//! 1. per-flag entry in the custom map
//! 2. the node's own role descriptor
//! 3. the role descriptor inherited from the parent chain
//! 4. the role default from the configured theme
//! 5. nothing - text passes through unchanged

use std::collections::HashMap;

use console::Style;
use helptint_style::{resolve_descriptor, StyleResolveError, ThemeRegistry};

use crate::error::HelpError;

/// Style configuration for one command or group node.
///
/// All fields are optional; an unset field inherits from the parent node,
/// then falls back to the configured theme.
///
/// # Example
///
/// ```rust
/// use helptint::HelpStyles;
///
/// let styles = HelpStyles::new()
///     .headers("yellow bold")
///     .options("green")
///     .option_style("--force", "red")
///     .theme("dracula");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpStyles {
    headers: Option<String>,
    options: Option<String>,
    metavar: Option<String>,
    doc: Option<String>,
    option_custom: Option<HashMap<String, String>>,
    theme: Option<String>,
}

impl HelpStyles {
    /// Creates an empty configuration (everything inherits).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the descriptor for section headers and the usage prefix.
    pub fn headers(mut self, descriptor: impl Into<String>) -> Self {
        self.headers = Some(descriptor.into());
        self
    }

    /// Sets the descriptor for option and subcommand names.
    pub fn options(mut self, descriptor: impl Into<String>) -> Self {
        self.options = Some(descriptor.into());
        self
    }

    /// Sets the descriptor for metavars (value placeholders).
    pub fn metavar(mut self, descriptor: impl Into<String>) -> Self {
        self.metavar = Some(descriptor.into());
        self
    }

    /// Sets the descriptor for help and about text.
    pub fn doc(mut self, descriptor: impl Into<String>) -> Self {
        self.doc = Some(descriptor.into());
        self
    }

    /// Adds a per-flag override.
    ///
    /// The key is matched against every spelling of a flag (`-n`, `--name`)
    /// and against subcommand names in command listings.
    pub fn option_style(
        mut self,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> Self {
        self.option_custom
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), descriptor.into());
        self
    }

    /// Replaces the whole per-flag override map.
    pub fn option_custom(mut self, map: HashMap<String, String>) -> Self {
        self.option_custom = Some(map);
        self
    }

    /// Selects a theme by registry name to fill unset roles.
    pub fn theme(mut self, name: impl Into<String>) -> Self {
        self.theme = Some(name.into());
        self
    }

    /// Returns the `headers` descriptor, if set.
    pub fn headers_descriptor(&self) -> Option<&str> {
        self.headers.as_deref()
    }

    /// Returns the `options` descriptor, if set.
    pub fn options_descriptor(&self) -> Option<&str> {
        self.options.as_deref()
    }

    /// Returns the `metavar` descriptor, if set.
    pub fn metavar_descriptor(&self) -> Option<&str> {
        self.metavar.as_deref()
    }

    /// Returns the `doc` descriptor, if set.
    pub fn doc_descriptor(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Returns the configured theme name, if set.
    pub fn theme_name(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Fills unset fields from a parent configuration.
    ///
    /// Inheritance is per-field: each field is taken from the parent if and
    /// only if it is unset here. The custom map and the theme name each
    /// count as a single field.
    pub fn inherit(mut self, parent: &HelpStyles) -> Self {
        if self.headers.is_none() {
            self.headers = parent.headers.clone();
        }
        if self.options.is_none() {
            self.options = parent.options.clone();
        }
        if self.metavar.is_none() {
            self.metavar = parent.metavar.clone();
        }
        if self.doc.is_none() {
            self.doc = parent.doc.clone();
        }
        if self.option_custom.is_none() {
            self.option_custom = parent.option_custom.clone();
        }
        if self.theme.is_none() {
            self.theme = parent.theme.clone();
        }
        self
    }

    /// Resolves the configuration into concrete styles.
    ///
    /// Unset roles are filled from the configured theme first, then every
    /// descriptor (roles and per-flag overrides) is resolved. Errors
    /// identify the offending theme name or style token.
    pub fn resolve(&self, registry: &ThemeRegistry) -> Result<ResolvedStyles, HelpError> {
        let theme = match &self.theme {
            Some(name) => Some(
                registry
                    .get(name)
                    .ok_or_else(|| HelpError::UnknownTheme(name.clone()))?,
            ),
            None => None,
        };

        let headers = self
            .headers
            .as_deref()
            .or_else(|| theme.and_then(|t| t.headers_descriptor()));
        let options = self
            .options
            .as_deref()
            .or_else(|| theme.and_then(|t| t.options_descriptor()));
        let metavar = self
            .metavar
            .as_deref()
            .or_else(|| theme.and_then(|t| t.metavar_descriptor()));
        let doc = self
            .doc
            .as_deref()
            .or_else(|| theme.and_then(|t| t.doc_descriptor()));

        let mut option_custom = HashMap::new();
        if let Some(map) = &self.option_custom {
            for (name, descriptor) in map {
                option_custom.insert(name.clone(), resolve_forced(descriptor)?);
            }
        }

        Ok(ResolvedStyles {
            headers: headers.map(resolve_forced).transpose()?,
            options: options.map(resolve_forced).transpose()?,
            metavar: metavar.map(resolve_forced).transpose()?,
            doc: doc.map(resolve_forced).transpose()?,
            option_custom,
        })
    }
}

/// Resolves a descriptor with styling forced on.
///
/// The color on/off decision is made before resolution ever happens, so
/// resolved styles always emit their codes when applied.
fn resolve_forced(descriptor: &str) -> Result<Style, StyleResolveError> {
    resolve_descriptor(descriptor).map(|s| s.force_styling(true))
}

/// Concrete styles for one help render.
///
/// Transient: built lazily when help is rendered and dropped with the
/// formatter.
#[derive(Debug, Clone, Default)]
pub struct ResolvedStyles {
    pub(crate) headers: Option<Style>,
    pub(crate) options: Option<Style>,
    pub(crate) metavar: Option<Style>,
    pub(crate) doc: Option<Style>,
    pub(crate) option_custom: HashMap<String, Style>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let styles = HelpStyles::new().headers("yellow").theme("dracula");
        assert_eq!(styles.headers_descriptor(), Some("yellow"));
        assert_eq!(styles.theme_name(), Some("dracula"));
        assert!(styles.options_descriptor().is_none());
    }

    #[test]
    fn test_inherit_fills_only_unset_fields() {
        let parent = HelpStyles::new().headers("yellow").options("green");
        let child = HelpStyles::new().headers("red").inherit(&parent);

        assert_eq!(child.headers_descriptor(), Some("red"));
        assert_eq!(child.options_descriptor(), Some("green"));
    }

    #[test]
    fn test_inherit_custom_map_is_one_field() {
        let parent = HelpStyles::new().option_style("--name", "red");
        let child = HelpStyles::new()
            .option_style("--other", "blue")
            .inherit(&parent);

        // The child's own map wins wholesale; no per-entry merging.
        let resolved = child.resolve(ThemeRegistry::builtin()).unwrap();
        assert!(resolved.option_custom.contains_key("--other"));
        assert!(!resolved.option_custom.contains_key("--name"));
    }

    #[test]
    fn test_inherit_theme_name() {
        let parent = HelpStyles::new().theme("forest");
        let child = HelpStyles::new().inherit(&parent);
        assert_eq!(child.theme_name(), Some("forest"));
    }

    #[test]
    fn test_resolve_empty_is_all_none() {
        let resolved = HelpStyles::new().resolve(ThemeRegistry::builtin()).unwrap();
        assert!(resolved.headers.is_none());
        assert!(resolved.options.is_none());
        assert!(resolved.metavar.is_none());
        assert!(resolved.doc.is_none());
        assert!(resolved.option_custom.is_empty());
    }

    #[test]
    fn test_resolve_theme_fills_unset_roles() {
        let styles = HelpStyles::new().headers("red").theme("dracula");
        let resolved = styles.resolve(ThemeRegistry::builtin()).unwrap();

        // Explicit field kept, theme fills the rest.
        let headers = resolved.headers.unwrap().apply_to("x").to_string();
        assert_eq!(headers, "\x1b[31mx\x1b[0m");
        assert!(resolved.options.is_some());
        assert!(resolved.metavar.is_some());
    }

    #[test]
    fn test_resolve_unknown_theme() {
        let styles = HelpStyles::new().theme("nope");
        let err = styles.resolve(ThemeRegistry::builtin()).unwrap_err();
        assert!(matches!(err, HelpError::UnknownTheme(name) if name == "nope"));
    }

    #[test]
    fn test_resolve_unknown_descriptor() {
        let styles = HelpStyles::new().headers("unknwnstyle");
        let err = styles.resolve(ThemeRegistry::builtin()).unwrap_err();
        assert!(err.to_string().contains("unknwnstyle"));
    }

    #[test]
    fn test_resolve_unknown_custom_descriptor() {
        let styles = HelpStyles::new().option_style("--name", "unknwnstyle");
        assert!(styles.resolve(ThemeRegistry::builtin()).is_err());
    }
}

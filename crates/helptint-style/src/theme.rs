//! Theme presets for help rendering.
//!
//! A theme is a named bundle of style descriptors for the fixed semantic
//! roles of a help screen: section `headers`, `options` (flag names and
//! subcommand names), `metavar` (value placeholders), and `doc` (help and
//! about text). Themes fill in whichever roles a command's own style
//! configuration leaves unset; explicit configuration always wins.
//!
//! Themes can be constructed programmatically or loaded from YAML files:
//!
//! ```yaml
//! headers: "bold yellow"
//! options: "green"
//! metavar: "dim"
//! ```
//!
//! # Built-in presets
//!
//! [`ThemeRegistry::builtin`] exposes a process-wide, read-only table of
//! presets (`default`, `dracula`, `forest`, `mono`), constructed once at
//! first use and never mutated afterwards. Applications that want their own
//! presets build a registry with [`ThemeRegistry::with_builtins`] (or
//! [`ThemeRegistry::new`] for a clean slate) and pass it into rendering
//! configuration explicitly.
//!
//! # Example
//!
//! ```rust
//! use helptint_style::{HelpTheme, ThemeRegistry};
//!
//! let theme = HelpTheme::named("corporate")
//!     .headers("bold #1e66f5")
//!     .options("cyan")
//!     .doc("dim");
//! theme.validate().unwrap();
//!
//! let registry = ThemeRegistry::with_builtins().register(theme);
//! assert!(registry.get("corporate").is_some());
//! assert!(registry.get("dracula").is_some());
//! ```

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::descriptor::resolve_descriptor;
use crate::error::ThemeError;

/// A named bundle of style descriptors for the help-screen roles.
///
/// Every role is optional; unset roles leave the corresponding text
/// unstyled (or styled by more specific configuration).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HelpTheme {
    #[serde(skip)]
    name: Option<String>,
    headers: Option<String>,
    options: Option<String>,
    metavar: Option<String>,
    doc: Option<String>,
}

impl HelpTheme {
    /// Creates an empty, unnamed theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty theme with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the name, returning `self` for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the descriptor for section headers.
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

    /// Parses a theme from YAML content.
    ///
    /// Recognized keys are exactly the role names; anything else is a parse
    /// error, so typos fail loudly instead of being silently ignored.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        serde_yaml::from_str(yaml).map_err(|e| ThemeError::Parse {
            message: e.to_string(),
        })
    }

    /// Loads a theme from a YAML file.
    ///
    /// The theme name is derived from the filename (without extension).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ThemeError::Load {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string());

        let mut theme = Self::from_yaml(&content)?;
        theme.name = name;
        Ok(theme)
    }

    /// Returns the theme name, if set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the descriptor for the `headers` role.
    pub fn headers_descriptor(&self) -> Option<&str> {
        self.headers.as_deref()
    }

    /// Returns the descriptor for the `options` role.
    pub fn options_descriptor(&self) -> Option<&str> {
        self.options.as_deref()
    }

    /// Returns the descriptor for the `metavar` role.
    pub fn metavar_descriptor(&self) -> Option<&str> {
        self.metavar.as_deref()
    }

    /// Returns the descriptor for the `doc` role.
    pub fn doc_descriptor(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Returns true if no role is set.
    pub fn is_empty(&self) -> bool {
        self.headers.is_none()
            && self.options.is_none()
            && self.metavar.is_none()
            && self.doc.is_none()
    }

    /// Resolves every set descriptor eagerly.
    ///
    /// Rendering resolves descriptors lazily; call this for early error
    /// detection, e.g. from a `#[test]` over your shipped themes.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for descriptor in [&self.headers, &self.options, &self.metavar, &self.doc]
            .into_iter()
            .flatten()
        {
            resolve_descriptor(descriptor)?;
        }
        Ok(())
    }
}

/// A name → theme lookup table.
///
/// Registries are plain values passed explicitly into rendering
/// configuration. The built-in table is the only process-wide instance and
/// is read-only.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: HashMap<String, HelpTheme>,
}

static BUILTIN: Lazy<ThemeRegistry> = Lazy::new(|| {
    ThemeRegistry::new()
        .register(HelpTheme::named("default").headers("bold").options("bold"))
        .register(
            HelpTheme::named("dracula")
                .headers("#f1fa8c bold italic")
                .options("#50fa7b bold")
                .metavar("#ff79c6")
                .doc("#6272a4"),
        )
        .register(
            HelpTheme::named("forest")
                .headers("green bold")
                .options("bright_green")
                .metavar("yellow")
                .doc("dim"),
        )
        .register(
            HelpTheme::named("mono")
                .headers("bold")
                .options("underline")
                .metavar("dim")
                .doc("dim"),
        )
});

impl ThemeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide built-in presets.
    pub fn builtin() -> &'static ThemeRegistry {
        &BUILTIN
    }

    /// Creates a registry pre-populated with the built-in presets.
    pub fn with_builtins() -> Self {
        BUILTIN.clone()
    }

    /// Registers a theme under its own name, replacing any previous entry.
    ///
    /// Unnamed themes are registered under the empty string; give your
    /// themes names.
    pub fn register(mut self, theme: HelpTheme) -> Self {
        let name = theme.name().unwrap_or_default().to_string();
        self.themes.insert(name, theme);
        self
    }

    /// Looks up a theme by name.
    pub fn get(&self, name: &str) -> Option<&HelpTheme> {
        self.themes.get(name)
    }

    /// Returns the number of registered themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Returns true if no themes are registered.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

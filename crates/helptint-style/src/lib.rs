//! # Helptint Style - Style Descriptors and Themes
//!
//! `helptint-style` is the styling foundation for the `helptint` help
//! renderer: it turns plain-text style descriptors into [`console::Style`]
//! values, bundles descriptors into named theme presets, and decides when
//! color output is appropriate.
//!
//! ## Core Concepts
//!
//! - Style descriptors: space-separated strings like `"bold red"` or
//!   `"white on blue"`, resolved at render time by [`resolve_descriptor`]
//! - [`HelpTheme`]: a named bundle of descriptors for the help-screen roles
//!   (headers, options, metavar, doc)
//! - [`ThemeRegistry`]: name → theme lookup, with read-only built-in presets
//! - [`OutputMode`]: Auto/Term/Text color decision honoring `NO_COLOR`
//!
//! ## Quick Start
//!
//! ```rust
//! use helptint_style::{apply_style, HelpTheme, ThemeRegistry};
//!
//! // Resolve and apply a descriptor directly.
//! let styled = apply_style("Usage", "bold yellow").unwrap();
//! assert!(styled.contains("Usage"));
//!
//! // Bad descriptors fail loudly instead of degrading.
//! assert!(apply_style("Usage", "unknwnstyle").is_err());
//!
//! // Themes fill roles a command leaves unconfigured.
//! let theme = ThemeRegistry::builtin().get("dracula").unwrap();
//! assert!(theme.headers_descriptor().is_some());
//! ```

mod color;
mod descriptor;
mod error;
mod output;
mod theme;

pub use color::{rgb_to_ansi256, ColorKind};
pub use descriptor::{apply_style, resolve_descriptor};
pub use error::{StyleResolveError, ThemeError};
pub use output::{no_color_env, OutputMode};
pub use theme::{HelpTheme, ThemeRegistry};

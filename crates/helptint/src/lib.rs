//! # Helptint - Colorized Help for Clap Commands
//!
//! Helptint layers terminal styling over the help output of a clap command
//! tree. Clap stays in charge of parsing and dispatch; helptint re-renders
//! the help screen with styled usage prefixes, section headings, flag
//! names, metavars, and descriptions.
//!
//! ## Core Concepts
//!
//! - [`HelpStyles`]: declarative style configuration per command node,
//!   with per-field inheritance down the command tree
//! - [`StyledCommand`]: wraps a `clap::Command` and renders styled help
//! - Style descriptors: plain strings like `"bold red"`, resolved at
//!   render time; bad descriptors fail loudly
//! - Themes: named presets filling whatever a command leaves unset (see
//!   [`helptint_style::ThemeRegistry`])
//! - [`CommandGroup`] / [`OptionGroup`]: split subcommands or options into
//!   named help sections
//! - `NO_COLOR` (and `OutputMode::Text`) bypasses styling entirely
//!
//! ## Quick Start
//!
//! ```rust
//! use clap::{Arg, Command};
//! use helptint::{HelpStyles, StyledCommand};
//! use helptint_style::OutputMode;
//!
//! let cli = Command::new("greet")
//!     .about("Greet people")
//!     .arg(Arg::new("name").long("name").help("Who to greet"))
//!     .subcommand(Command::new("wave").about("Just wave"));
//!
//! let styled = StyledCommand::new(cli)
//!     .styles(
//!         HelpStyles::new()
//!             .headers("yellow bold")
//!             .options("green")
//!             .metavar("red")
//!             .option_style("--name", "cyan"),
//!     )
//!     .output_mode(OutputMode::Text);
//!
//! let help = styled.render_help().unwrap();
//! assert!(help.starts_with("Usage: greet"));
//! ```
//!
//! ## Style Resolution
//!
//! For any flag the effective style is the most specific of: its entry in
//! the per-flag custom map, the node's option style, the option style
//! inherited from the parent chain, the configured theme's role default,
//! or nothing at all - in which case the text passes through unchanged.
//!
//! Resolution happens lazily, when help is rendered: a subcommand with no
//! configuration picks up whatever its parent effectively has at that
//! moment, and configuration mistakes (unknown style tokens, unknown
//! themes, group entries naming nonexistent commands) surface as
//! [`HelpError`] values instead of degraded output.

mod command;
mod config;
mod error;
mod formatter;
mod groups;
mod segment;
mod version;

pub use command::StyledCommand;
pub use config::HelpStyles;
pub use error::HelpError;
pub use formatter::HelpFormatter;
pub use groups::{CommandGroup, OptionGroup};
pub use version::VersionMessage;

// Re-export the styling layer so most applications only need one import.
pub use helptint_style::{
    apply_style, no_color_env, resolve_descriptor, HelpTheme, OutputMode, StyleResolveError,
    ThemeError, ThemeRegistry,
};

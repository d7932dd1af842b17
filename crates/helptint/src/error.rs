//! Error types for help rendering.
//!
//! These are configuration errors meant to fail loudly during development:
//! rendering never degrades to partially-styled or silently-truncated
//! output. There is nothing to retry.

use helptint_style::StyleResolveError;
use thiserror::Error;

/// Error type for help rendering operations.
#[derive(Debug, Error)]
pub enum HelpError {
    /// A style descriptor could not be resolved.
    #[error(transparent)]
    Style(#[from] StyleResolveError),

    /// A style configuration references a theme that is not registered.
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    /// A command group references a subcommand that does not exist.
    #[error("command group \"{group}\": command \"{command}\" does not exist")]
    UnknownGroupCommand {
        /// Title of the offending group.
        group: String,
        /// The missing command name.
        command: String,
    },

    /// An option group references a flag that does not exist.
    #[error("option group \"{group}\": option \"{option}\" does not exist")]
    UnknownGroupOption {
        /// Title of the offending group.
        group: String,
        /// The missing option name.
        option: String,
    },

    /// Help was requested for a subcommand path that does not exist.
    #[error("unknown subcommand '{0}'")]
    UnknownSubcommand(String),
}

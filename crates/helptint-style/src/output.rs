//! Color-output decision.
//!
//! [`OutputMode`] controls whether help rendering emits ANSI codes. The
//! `NO_COLOR` environment variable (<https://no-color.org/>) always wins:
//! when it is set, styling is bypassed in every mode and renderers return
//! raw text without touching any style descriptor.

use console::Term;

/// Controls whether rendered output includes ANSI escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Auto-detect terminal capabilities.
    #[default]
    Auto,
    /// Always emit ANSI escape codes.
    Term,
    /// Never emit ANSI escape codes.
    Text,
}

impl OutputMode {
    /// Resolves the mode to a concrete decision about whether to use color.
    ///
    /// `NO_COLOR` disables color in every mode, including `Term`. Otherwise
    /// `Auto` checks the terminal's capabilities, `Term` forces color on,
    /// and `Text` forces it off.
    pub fn should_use_color(self) -> bool {
        if no_color_env() {
            return false;
        }
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}

/// Returns true when the `NO_COLOR` environment variable is set.
///
/// Any value counts, per the no-color.org convention.
pub fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

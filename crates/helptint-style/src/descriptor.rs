//! Style descriptor resolution.
//!
//! A descriptor is a space-separated list of attribute keywords and color
//! tokens, e.g. `"bold red"`, `"italic #50fa7b"`, or `"white on blue"`.
//! Descriptors are the unit of style configuration throughout the crate:
//! they live in configuration structs and theme files as plain strings and
//! are resolved to [`console::Style`] values at render time.
//!
//! # Grammar
//!
//! - Attribute keywords: `bold`, `dim`, `italic`, `underline`, `blink`,
//!   `reverse`, `hidden`, `strikethrough`.
//! - Color tokens: named colors, `bright_*` variants, `#hex`, or a bare
//!   palette index 0-255 (see [`ColorKind`](crate::ColorKind)). The first
//!   color token is the foreground.
//! - `on` marks the following color token as the background.
//!
//! Anything else fails with [`StyleResolveError::UnknownToken`] naming the
//! offending token. Resolution never degrades silently: a bad descriptor is
//! an error, not unstyled output.
//!
//! # Example
//!
//! ```rust
//! use helptint_style::resolve_descriptor;
//!
//! let style = resolve_descriptor("bold red").unwrap();
//! assert!(resolve_descriptor("unknwnstyle").is_err());
//! ```

use console::Style;

use crate::color::ColorKind;
use crate::error::StyleResolveError;

/// Resolves a style descriptor to a concrete [`console::Style`].
///
/// # Errors
///
/// - [`StyleResolveError::Empty`] for a blank descriptor
/// - [`StyleResolveError::UnknownToken`] for a token that is neither an
///   attribute keyword nor a color
/// - [`StyleResolveError::InvalidColor`] for malformed color literals,
///   duplicate foregrounds, or a dangling `on`
pub fn resolve_descriptor(descriptor: &str) -> Result<Style, StyleResolveError> {
    let mut style = Style::new();
    let mut have_fg = false;
    let mut expect_bg = false;
    let mut seen_any = false;

    for token in descriptor.split_whitespace() {
        seen_any = true;
        let lower = token.to_ascii_lowercase();

        if lower == "on" {
            if expect_bg {
                return Err(StyleResolveError::InvalidColor {
                    token: token.to_string(),
                    message: "expected a background color after 'on'".to_string(),
                });
            }
            expect_bg = true;
            continue;
        }

        if !expect_bg {
            if let Some(attr) = apply_attribute(&lower, style.clone()) {
                style = attr;
                continue;
            }
        }

        // Not an attribute keyword, so it must be a color token.
        let color = match ColorKind::parse(token) {
            Ok(color) => color,
            Err(message) if ColorKind::looks_like_literal(token) || expect_bg => {
                return Err(StyleResolveError::InvalidColor {
                    token: token.to_string(),
                    message,
                });
            }
            Err(_) => {
                return Err(StyleResolveError::UnknownToken {
                    descriptor: descriptor.to_string(),
                    token: token.to_string(),
                });
            }
        };

        if expect_bg {
            style = style.bg(color.to_console_color());
            expect_bg = false;
        } else {
            if have_fg {
                return Err(StyleResolveError::InvalidColor {
                    token: token.to_string(),
                    message: "descriptor already has a foreground color".to_string(),
                });
            }
            style = style.fg(color.to_console_color());
            have_fg = true;
        }
    }

    if !seen_any {
        return Err(StyleResolveError::Empty {
            descriptor: descriptor.to_string(),
        });
    }
    if expect_bg {
        return Err(StyleResolveError::InvalidColor {
            token: "on".to_string(),
            message: "expected a background color after 'on'".to_string(),
        });
    }

    Ok(style)
}

/// Resolves a descriptor and applies it to `text` with forced styling.
///
/// The forced styling makes the output independent of whether stdout is a
/// terminal; callers decide beforehand whether styling should happen at all
/// (see [`OutputMode`](crate::OutputMode)).
pub fn apply_style(text: &str, descriptor: &str) -> Result<String, StyleResolveError> {
    let style = resolve_descriptor(descriptor)?;
    Ok(style.force_styling(true).apply_to(text).to_string())
}

fn apply_attribute(token: &str, style: Style) -> Option<Style> {
    let styled = match token {
        "bold" => style.bold(),
        "dim" => style.dim(),
        "italic" => style.italic(),
        "underline" => style.underlined(),
        "blink" => style.blink(),
        "reverse" => style.reverse(),
        "hidden" => style.hidden(),
        "strikethrough" => style.strikethrough(),
        _ => return None,
    };
    Some(styled)
}

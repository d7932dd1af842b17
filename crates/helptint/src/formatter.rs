//! The help formatter: rendering hooks over a string buffer.
//!
//! [`HelpFormatter`] implements the hook contract the host framework's help
//! generation drives: usage line, section headings, free text, and
//! definition lists arrive through the `write_*` methods, and [`finish`]
//! hands the final string back. The hooks receive raw, pre-formatted text;
//! styling is layered on here and nowhere else.
//!
//! When color is off every hook appends its input unchanged and no style
//! descriptor is ever resolved or applied.
//!
//! # Example
//!
//! ```rust
//! use helptint::{HelpFormatter, HelpStyles};
//! use helptint_style::{OutputMode, ThemeRegistry};
//!
//! let styles = HelpStyles::new().headers("yellow").options("green");
//! let mut fmt =
//!     HelpFormatter::new(&styles, ThemeRegistry::builtin(), OutputMode::Text).unwrap();
//!
//! fmt.write_usage("cli", "[OPTIONS]");
//! fmt.write_paragraph();
//! fmt.write_heading("Options");
//! fmt.write_dl(&[("--name TEXT".into(), "Who to greet.".into())]);
//!
//! assert_eq!(
//!     fmt.finish(),
//!     "Usage: cli [OPTIONS]\n\nOptions:\n  --name TEXT  Who to greet."
//! );
//! ```

use console::Style;
use helptint_style::{OutputMode, ThemeRegistry};

use crate::config::{HelpStyles, ResolvedStyles};
use crate::error::HelpError;
use crate::segment::style_spec;

/// Writes styled help text into a buffer.
///
/// One formatter serves one help render; the resolved styles and the final
/// string live no longer than that.
#[derive(Debug)]
pub struct HelpFormatter {
    buf: String,
    styles: ResolvedStyles,
    use_color: bool,
}

impl HelpFormatter {
    /// Builds a formatter for one render.
    ///
    /// The color decision is made here, up front. When color is off the
    /// configuration is not resolved at all, so even invalid descriptors
    /// produce plain output instead of errors.
    pub fn new(
        styles: &HelpStyles,
        registry: &ThemeRegistry,
        mode: OutputMode,
    ) -> Result<Self, HelpError> {
        let use_color = mode.should_use_color();
        let styles = if use_color {
            styles.resolve(registry)?
        } else {
            ResolvedStyles::default()
        };
        Ok(Self {
            buf: String::new(),
            styles,
            use_color,
        })
    }

    /// Writes the usage line.
    ///
    /// The `Usage` prefix gets the headers style; program name and argument
    /// summary stay unstyled.
    pub fn write_usage(&mut self, prog: &str, args: &str) {
        let prefix = self.paint(self.styles.headers.as_ref(), "Usage");
        if args.is_empty() {
            self.buf.push_str(&format!("{}: {}\n", prefix, prog));
        } else {
            self.buf.push_str(&format!("{}: {} {}\n", prefix, prog, args));
        }
    }

    /// Writes a section heading; the trailing colon stays unstyled.
    pub fn write_heading(&mut self, heading: &str) {
        let styled = self.paint(self.styles.headers.as_ref(), heading);
        self.buf.push_str(&format!("{}:\n", styled));
    }

    /// Writes an indented text block with the doc style.
    pub fn write_text(&mut self, text: &str) {
        for line in text.lines() {
            if line.is_empty() {
                self.buf.push('\n');
            } else {
                let styled = self.paint(self.styles.doc.as_ref(), line);
                self.buf.push_str(&format!("  {}\n", styled));
            }
        }
    }

    /// Writes a blank separator line.
    pub fn write_paragraph(&mut self) {
        self.buf.push('\n');
    }

    /// Writes a definition list.
    ///
    /// Rows are raw `(term, description)` pairs; terms are segmented and
    /// styled, descriptions get the doc style. Column widths come from the
    /// raw term widths so alignment is identical with and without color.
    pub fn write_dl(&mut self, rows: &[(String, String)]) {
        let width = rows
            .iter()
            .map(|(term, _)| term.chars().count())
            .max()
            .unwrap_or(0);

        for (term, description) in rows {
            let styled_term = if self.use_color {
                style_spec(term, &self.styles)
            } else {
                term.clone()
            };

            if description.is_empty() {
                self.buf.push_str(&format!("  {}\n", styled_term));
            } else {
                let pad = width - term.chars().count() + 2;
                let styled_desc = self.paint(self.styles.doc.as_ref(), description);
                self.buf.push_str(&format!(
                    "  {}{}{}\n",
                    styled_term,
                    " ".repeat(pad),
                    styled_desc
                ));
            }
        }
    }

    /// Returns the rendered help with the trailing newline trimmed.
    pub fn finish(self) -> String {
        self.buf.trim_end_matches('\n').to_string()
    }

    fn paint(&self, style: Option<&Style>, text: &str) -> String {
        if !self.use_color {
            return text.to_string();
        }
        match style {
            Some(style) => style.apply_to(text).to_string(),
            None => text.to_string(),
        }
    }
}

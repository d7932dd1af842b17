//! Styled version messages.
//!
//! Complements the help renderer for the other early-exit output a CLI
//! prints: `--version`. The message template carries `{prog}` and
//! `{version}` placeholders; each placeholder can be styled independently,
//! falling back to the overall message style.
//!
//! # Example
//!
//! ```rust
//! use helptint::VersionMessage;
//! use helptint_style::OutputMode;
//!
//! let message = VersionMessage::new("cli", "1.2.0")
//!     .prog_style("green bold")
//!     .version_style("yellow")
//!     .output_mode(OutputMode::Text)
//!     .render()
//!     .unwrap();
//!
//! assert_eq!(message, "cli, version 1.2.0");
//! ```

use helptint_style::{apply_style, OutputMode};

use crate::error::HelpError;

const DEFAULT_TEMPLATE: &str = "{prog}, version {version}";

/// A styled `--version` message.
#[derive(Debug, Clone)]
pub struct VersionMessage {
    prog: String,
    version: String,
    template: String,
    message_style: Option<String>,
    prog_style: Option<String>,
    version_style: Option<String>,
    output: OutputMode,
}

impl VersionMessage {
    /// Creates a message with the default `{prog}, version {version}`
    /// template.
    pub fn new(prog: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            prog: prog.into(),
            version: version.into(),
            template: DEFAULT_TEMPLATE.to_string(),
            message_style: None,
            prog_style: None,
            version_style: None,
            output: OutputMode::default(),
        }
    }

    /// Replaces the message template.
    ///
    /// `{prog}` and `{version}` are substituted; everything else is
    /// literal text.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Sets the style for the literal parts of the template, and the
    /// fallback for both placeholders.
    pub fn message_style(mut self, descriptor: impl Into<String>) -> Self {
        self.message_style = Some(descriptor.into());
        self
    }

    /// Sets the style for `{prog}`.
    pub fn prog_style(mut self, descriptor: impl Into<String>) -> Self {
        self.prog_style = Some(descriptor.into());
        self
    }

    /// Sets the style for `{version}`.
    pub fn version_style(mut self, descriptor: impl Into<String>) -> Self {
        self.version_style = Some(descriptor.into());
        self
    }

    /// Sets the color output mode (default: auto-detect).
    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.output = mode;
        self
    }

    /// Renders the message.
    ///
    /// With color off the template is substituted verbatim and no
    /// descriptor is touched.
    pub fn render(&self) -> Result<String, HelpError> {
        let use_color = self.output.should_use_color();

        let mut out = String::new();
        for segment in split_template(&self.template) {
            let (text, style) = match segment {
                Segment::Prog => (
                    self.prog.as_str(),
                    self.prog_style.as_deref().or(self.message_style.as_deref()),
                ),
                Segment::Version => (
                    self.version.as_str(),
                    self.version_style
                        .as_deref()
                        .or(self.message_style.as_deref()),
                ),
                Segment::Text(text) => (text, self.message_style.as_deref()),
            };

            match style {
                Some(descriptor) if use_color => out.push_str(&apply_style(text, descriptor)?),
                _ => out.push_str(text),
            }
        }

        Ok(out)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Prog,
    Version,
}

fn split_template(template: &str) -> Vec<Segment<'_>> {
    const PROG: &str = "{prog}";
    const VERSION: &str = "{version}";

    let mut segments = Vec::new();
    let mut rest = template;

    loop {
        let prog = rest.find(PROG);
        let version = rest.find(VERSION);

        let (index, segment, len) = match (prog, version) {
            (Some(p), Some(v)) if p <= v => (p, Segment::Prog, PROG.len()),
            (Some(p), None) => (p, Segment::Prog, PROG.len()),
            (_, Some(v)) => (v, Segment::Version, VERSION.len()),
            (None, None) => break,
        };

        if index > 0 {
            segments.push(Segment::Text(&rest[..index]));
        }
        segments.push(segment);
        rest = &rest[index + len..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Text(rest));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_split_template_default() {
        assert_eq!(
            split_template(DEFAULT_TEMPLATE),
            vec![
                Segment::Prog,
                Segment::Text(", version "),
                Segment::Version
            ]
        );
    }

    #[test]
    fn test_split_template_literal_only() {
        assert_eq!(split_template("hello"), vec![Segment::Text("hello")]);
    }

    #[test]
    fn test_split_template_repeated_placeholders() {
        assert_eq!(
            split_template("{version}{version}"),
            vec![Segment::Version, Segment::Version]
        );
    }

    #[test]
    fn test_render_plain() {
        let message = VersionMessage::new("cli", "1.2.0")
            .output_mode(OutputMode::Text)
            .render()
            .unwrap();
        assert_eq!(message, "cli, version 1.2.0");
    }

    #[test]
    #[serial]
    fn test_render_styled_placeholders() {
        std::env::remove_var("NO_COLOR");
        let message = VersionMessage::new("cli", "1.2.0")
            .prog_style("green")
            .version_style("yellow")
            .output_mode(OutputMode::Term)
            .render()
            .unwrap();
        assert_eq!(
            message,
            "\x1b[32mcli\x1b[0m, version \x1b[33m1.2.0\x1b[0m"
        );
    }

    #[test]
    #[serial]
    fn test_render_message_style_fallback() {
        std::env::remove_var("NO_COLOR");
        let message = VersionMessage::new("cli", "1.2.0")
            .message_style("cyan")
            .output_mode(OutputMode::Term)
            .render()
            .unwrap();
        assert_eq!(
            message,
            "\x1b[36mcli\x1b[0m\x1b[36m, version \x1b[0m\x1b[36m1.2.0\x1b[0m"
        );
    }

    #[test]
    #[serial]
    fn test_render_unknown_style_errors() {
        std::env::remove_var("NO_COLOR");
        let result = VersionMessage::new("cli", "1.2.0")
            .message_style("unknwnstyle")
            .output_mode(OutputMode::Term)
            .render();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_render_no_color_bypasses_styles() {
        std::env::set_var("NO_COLOR", "1");
        let message = VersionMessage::new("cli", "1.2.0")
            .message_style("unknwnstyle")
            .output_mode(OutputMode::Term)
            .render()
            .unwrap();
        assert_eq!(message, "cli, version 1.2.0");
        std::env::remove_var("NO_COLOR");
    }

    #[test]
    fn test_custom_template() {
        let message = VersionMessage::new("cli", "1.2.0")
            .template("{prog} v{version}")
            .output_mode(OutputMode::Text)
            .render()
            .unwrap();
        assert_eq!(message, "cli v1.2.0");
    }
}

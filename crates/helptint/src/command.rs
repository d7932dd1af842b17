//! Styled command tree: declarative configuration over a clap `Command`.
//!
//! [`StyledCommand`] wraps an already-built clap command tree and attaches
//! style configuration to its nodes. The wrapper never mutates the clap
//! tree; it walks it at render time, which is also when inheritance is
//! applied: a node with unset style fields takes each missing field from
//! the effective styles of the node that dispatched it, not from whatever
//! was configured when the tree was declared.
//!
//! # Example
//!
//! ```rust
//! use clap::{Arg, Command};
//! use helptint::{HelpStyles, StyledCommand};
//! use helptint_style::OutputMode;
//!
//! let cli = Command::new("cli")
//!     .about("Greet people")
//!     .arg(Arg::new("name").long("name").help("Who to greet"))
//!     .subcommand(Command::new("shout").about("Greet loudly"));
//!
//! let styled = StyledCommand::new(cli)
//!     .styles(HelpStyles::new().headers("yellow bold").options("green"))
//!     .output_mode(OutputMode::Text);
//!
//! let help = styled.render_help().unwrap();
//! assert!(help.starts_with("Usage: cli"));
//!
//! // The subcommand has no configuration of its own, so it inherits the
//! // parent's styles when its help is rendered.
//! let sub_help = styled.render_subcommand_help(&["shout"]).unwrap();
//! assert!(sub_help.contains("Greet loudly"));
//! ```

use std::collections::HashMap;

use clap::Command;
use helptint_style::{OutputMode, ThemeRegistry};

use crate::config::HelpStyles;
use crate::error::HelpError;
use crate::formatter::HelpFormatter;
use crate::groups::{
    partition_commands, partition_options, CommandGroup, OptionGroup, Section,
};

/// Style configuration for one node of the command tree.
#[derive(Debug, Clone, Default)]
struct StyleNode {
    styles: HelpStyles,
    command_groups: Option<Vec<CommandGroup>>,
    option_groups: Option<Vec<OptionGroup>>,
    children: HashMap<String, StyleNode>,
}

impl StyleNode {
    fn descend(&mut self, path: &[String]) -> &mut StyleNode {
        let mut node = self;
        for name in path {
            node = node.children.entry(name.clone()).or_default();
        }
        node
    }
}

/// A clap command tree with help styling attached.
///
/// Configuration is declarative and inert; everything resolves lazily on
/// [`render_help`](Self::render_help) /
/// [`render_subcommand_help`](Self::render_subcommand_help), so
/// configuration errors (unknown styles, themes, or group references)
/// surface at render time.
#[derive(Debug)]
pub struct StyledCommand {
    cmd: Command,
    root: StyleNode,
    registry: Option<ThemeRegistry>,
    output: OutputMode,
}

impl StyledCommand {
    /// Wraps a clap command.
    pub fn new(cmd: Command) -> Self {
        Self {
            cmd,
            root: StyleNode::default(),
            registry: None,
            output: OutputMode::default(),
        }
    }

    /// Sets the root node's style configuration.
    pub fn styles(mut self, styles: HelpStyles) -> Self {
        self.root.styles = styles;
        self
    }

    /// Sets the style configuration for the subcommand at `path`.
    ///
    /// Intermediate nodes are created as unconfigured (fully inheriting)
    /// entries. The path is not checked against the clap tree until render
    /// time.
    pub fn subcommand_styles<I, S>(mut self, path: I, styles: HelpStyles) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let path: Vec<String> = path.into_iter().map(Into::into).collect();
        self.root.descend(&path).styles = styles;
        self
    }

    /// Groups the root command's subcommands into named help sections.
    pub fn command_groups(mut self, groups: Vec<CommandGroup>) -> Self {
        self.root.command_groups = Some(groups);
        self
    }

    /// Groups the subcommands of the node at `path` into named sections.
    pub fn subcommand_command_groups<I, S>(mut self, path: I, groups: Vec<CommandGroup>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let path: Vec<String> = path.into_iter().map(Into::into).collect();
        self.root.descend(&path).command_groups = Some(groups);
        self
    }

    /// Groups the root command's options into named help sections.
    pub fn option_groups(mut self, groups: Vec<OptionGroup>) -> Self {
        self.root.option_groups = Some(groups);
        self
    }

    /// Groups the options of the node at `path` into named sections.
    pub fn subcommand_option_groups<I, S>(mut self, path: I, groups: Vec<OptionGroup>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let path: Vec<String> = path.into_iter().map(Into::into).collect();
        self.root.descend(&path).option_groups = Some(groups);
        self
    }

    /// Uses a custom theme registry instead of the built-in presets.
    pub fn theme_registry(mut self, registry: ThemeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Sets the color output mode (default: auto-detect).
    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.output = mode;
        self
    }

    /// Returns the wrapped clap command, e.g. to parse arguments with it.
    pub fn command(&self) -> &Command {
        &self.cmd
    }

    /// Renders help for the root command.
    pub fn render_help(&self) -> Result<String, HelpError> {
        self.render_path(&[])
    }

    /// Renders help for the subcommand at `path`.
    ///
    /// Style configuration is folded along the walk: at every step the
    /// child's configuration inherits, per-field, the effective styles of
    /// its parent.
    pub fn render_subcommand_help(&self, path: &[&str]) -> Result<String, HelpError> {
        self.render_path(path)
    }

    fn render_path(&self, path: &[&str]) -> Result<String, HelpError> {
        let mut cmd = &self.cmd;
        let mut node = Some(&self.root);
        let mut effective = self.root.styles.clone();
        let mut prog = self.cmd.get_name().to_string();

        for name in path {
            cmd = cmd
                .find_subcommand(name)
                .ok_or_else(|| HelpError::UnknownSubcommand((*name).to_string()))?;
            node = node.and_then(|n| n.children.get(*name));
            let own = node.map(|n| n.styles.clone()).unwrap_or_default();
            effective = own.inherit(&effective);
            prog.push(' ');
            prog.push_str(cmd.get_name());
        }

        let registry = self
            .registry
            .as_ref()
            .unwrap_or_else(|| ThemeRegistry::builtin());
        let mut formatter = HelpFormatter::new(&effective, registry, self.output)?;

        let mut built = cmd.clone();
        built.build();

        let usage = built.render_usage().to_string();
        let body = usage.strip_prefix("Usage: ").unwrap_or(usage.as_str());
        let args = body
            .strip_prefix(built.get_name())
            .unwrap_or(body)
            .trim_start();
        formatter.write_usage(&prog, args);

        if let Some(about) = built.get_about() {
            formatter.write_paragraph();
            formatter.write_text(&about.to_string());
        }

        let option_sections = match node.and_then(|n| n.option_groups.as_deref()) {
            Some(groups) => partition_options(groups, option_rows(&built))?,
            None => Section::ungrouped("Options", option_rows(&built)),
        };
        write_sections(&mut formatter, &option_sections);

        let command_sections = match node.and_then(|n| n.command_groups.as_deref()) {
            Some(groups) => partition_commands(groups, subcommand_rows(&built))?,
            None => Section::ungrouped("Commands", subcommand_rows(&built)),
        };
        write_sections(&mut formatter, &command_sections);

        Ok(formatter.finish())
    }
}

fn write_sections(formatter: &mut HelpFormatter, sections: &[Section]) {
    for section in sections {
        formatter.write_paragraph();
        formatter.write_heading(&section.title);
        if let Some(help) = &section.help {
            formatter.write_text(help);
        }
        formatter.write_dl(&section.rows);
    }
}

/// Builds the raw `(term, description)` rows for a command's options.
fn option_rows(cmd: &Command) -> Vec<(String, String)> {
    let mut args: Vec<_> = cmd
        .get_arguments()
        .filter(|a| !a.is_hide_set())
        .filter(|a| a.get_short().is_some() || a.get_long().is_some())
        .collect();
    args.sort_by_key(|a| a.get_display_order());

    let mut rows = Vec::new();
    for arg in args {
        let mut term = String::new();
        if let Some(short) = arg.get_short() {
            term.push('-');
            term.push(short);
        }
        if let Some(long) = arg.get_long() {
            if !term.is_empty() {
                term.push_str(", ");
            }
            term.push_str("--");
            term.push_str(long);
        }

        if arg.get_action().takes_values() {
            term.push(' ');
            term.push_str(&metavar_for(arg));
        }

        let help = arg.get_help().map(|s| s.to_string()).unwrap_or_default();
        rows.push((term, help));
    }
    rows
}

/// The metavar text for an argument that takes values.
///
/// Enumerated values render as a pipe-delimited choice list; otherwise the
/// configured value names are used, falling back to the upper-cased id.
fn metavar_for(arg: &clap::Arg) -> String {
    if !arg.is_hide_possible_values_set() {
        let choices: Vec<_> = arg
            .get_possible_values()
            .iter()
            .filter(|v| !v.is_hide_set())
            .map(|v| v.get_name().to_string())
            .collect();
        if !choices.is_empty() {
            return format!("[{}]", choices.join("|"));
        }
    }

    match arg.get_value_names() {
        Some(names) if !names.is_empty() => names
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        _ => arg.get_id().to_string().to_uppercase(),
    }
}

/// Builds the raw `(name, about)` rows for a command's subcommands.
fn subcommand_rows(cmd: &Command) -> Vec<(String, String)> {
    let mut subs: Vec<_> = cmd.get_subcommands().filter(|s| !s.is_hide_set()).collect();
    subs.sort_by_key(|s| s.get_display_order());

    subs.iter()
        .map(|sub| {
            (
                sub.get_name().to_string(),
                sub.get_about().map(|s| s.to_string()).unwrap_or_default(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Arg;

    fn plain(cmd: Command) -> StyledCommand {
        StyledCommand::new(cmd).output_mode(OutputMode::Text)
    }

    #[test]
    fn test_option_rows_terms() {
        let cmd = Command::new("x")
            .arg(Arg::new("name").long("name").help("Who."))
            .arg(Arg::new("count").short('n').long("count"))
            .arg(
                Arg::new("quiet")
                    .long("quiet")
                    .action(clap::ArgAction::SetTrue),
            );

        let rows = option_rows(&cmd);
        assert_eq!(rows[0].0, "--name NAME");
        assert_eq!(rows[0].1, "Who.");
        assert_eq!(rows[1].0, "-n, --count COUNT");
        assert_eq!(rows[2].0, "--quiet");
    }

    #[test]
    fn test_option_rows_choices() {
        let cmd = Command::new("x").arg(
            Arg::new("mode")
                .long("mode")
                .value_parser(["fast", "slow"]),
        );

        let rows = option_rows(&cmd);
        assert_eq!(rows[0].0, "--mode [fast|slow]");
    }

    #[test]
    fn test_option_rows_value_name() {
        let cmd = Command::new("x").arg(Arg::new("first").long("first-name").value_name("name"));

        let rows = option_rows(&cmd);
        assert_eq!(rows[0].0, "--first-name name");
    }

    #[test]
    fn test_option_rows_skips_hidden_and_positionals() {
        let cmd = Command::new("x")
            .arg(Arg::new("file"))
            .arg(Arg::new("secret").long("secret").hide(true))
            .arg(Arg::new("name").long("name"));

        let rows = option_rows(&cmd);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, "--name NAME");
    }

    #[test]
    fn test_subcommand_rows() {
        let cmd = Command::new("x")
            .subcommand(Command::new("one").about("First."))
            .subcommand(Command::new("two"));

        let rows = subcommand_rows(&cmd);
        assert_eq!(rows[0], ("one".to_string(), "First.".to_string()));
        assert_eq!(rows[1], ("two".to_string(), String::new()));
    }

    #[test]
    fn test_render_help_plain_layout() {
        let cmd = Command::new("cli")
            .about("A tool.")
            .arg(Arg::new("name").long("name").help("Who."))
            .subcommand(Command::new("sub").about("Do it."));

        let help = plain(cmd).render_help().unwrap();
        let lines: Vec<&str> = help.lines().collect();

        assert!(lines[0].starts_with("Usage: cli"));
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "  A tool.");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Options:");
        assert!(lines.contains(&"Commands:"));
        assert!(help.contains("  sub  Do it."));
    }

    #[test]
    fn test_render_subcommand_help_prog_path() {
        let cmd = Command::new("cli").subcommand(
            Command::new("sub").arg(Arg::new("flag").long("flag")),
        );

        let help = plain(cmd).render_subcommand_help(&["sub"]).unwrap();
        assert!(help.starts_with("Usage: cli sub"));
    }

    #[test]
    fn test_render_unknown_subcommand() {
        let cmd = Command::new("cli").subcommand(Command::new("sub"));
        let err = plain(cmd).render_subcommand_help(&["nope"]).unwrap_err();
        assert!(matches!(err, HelpError::UnknownSubcommand(name) if name == "nope"));
    }

    #[test]
    fn test_render_with_command_groups_remainder() {
        let cmd = Command::new("cli")
            .subcommand(Command::new("init"))
            .subcommand(Command::new("list"))
            .subcommand(Command::new("other"));

        let help = plain(cmd)
            .command_groups(vec![CommandGroup::new("Main").commands(["init", "list"])])
            .render_help()
            .unwrap();

        let main_pos = help.find("Main:").unwrap();
        let commands_pos = help.find("Commands:").unwrap();
        assert!(main_pos < commands_pos);
        assert!(help.contains("  other"));
    }

    #[test]
    fn test_render_with_unknown_group_command() {
        let cmd = Command::new("cli").subcommand(Command::new("init"));
        let err = plain(cmd)
            .command_groups(vec![CommandGroup::new("Main")
                .commands(["init", "unknowncmd"])])
            .render_help()
            .unwrap_err();

        assert!(err.to_string().contains("unknowncmd"));
    }

    #[test]
    fn test_render_with_option_groups() {
        let cmd = Command::new("cli")
            .arg(Arg::new("config").long("config").help("Path."))
            .arg(Arg::new("name").long("name").help("Who."));

        let help = plain(cmd)
            .option_groups(vec![OptionGroup::new("Config").option("--config")])
            .render_help()
            .unwrap();

        let config_pos = help.find("Config:").unwrap();
        let options_pos = help.find("Options:").unwrap();
        assert!(config_pos < options_pos);
    }
}

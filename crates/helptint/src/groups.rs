//! Section grouping for help display.
//!
//! By default all subcommands render under a single `Commands` heading and
//! all options under `Options`. Grouping configuration splits either list
//! into named sections: groups render in declaration order, entries in
//! listed order, and whatever is left over renders under the default
//! heading at the end.
//!
//! A group entry that matches nothing fails the render with an error
//! naming the group and the missing entry; grouping typos never silently
//! drop rows.

use crate::error::HelpError;
use crate::segment::opt_names;

/// A named section of subcommands for help display.
#[derive(Debug, Clone, Default)]
pub struct CommandGroup {
    /// Section header (e.g. `"Main"`, `"Danger zone"`).
    pub title: String,
    /// Optional help text displayed below the title, before the list.
    pub help: Option<String>,
    /// Command names in display order.
    pub commands: Vec<String>,
}

impl CommandGroup {
    /// Creates an empty group with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the help text shown below the title.
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }

    /// Appends a command name.
    pub fn command(mut self, name: impl Into<String>) -> Self {
        self.commands.push(name.into());
        self
    }

    /// Replaces the command list.
    pub fn commands<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commands = names.into_iter().map(Into::into).collect();
        self
    }
}

/// A named section of options for help display.
#[derive(Debug, Clone, Default)]
pub struct OptionGroup {
    /// Section header (e.g. `"Config"`).
    pub title: String,
    /// Optional help text displayed below the title, before the list.
    pub help: Option<String>,
    /// Flag names in display order; any spelling of a flag matches.
    pub options: Vec<String>,
}

impl OptionGroup {
    /// Creates an empty group with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the help text shown below the title.
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }

    /// Appends a flag name.
    pub fn option(mut self, name: impl Into<String>) -> Self {
        self.options.push(name.into());
        self
    }

    /// Replaces the option list.
    pub fn options<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = names.into_iter().map(Into::into).collect();
        self
    }
}

/// One rendered help section: a heading plus its definition-list rows.
#[derive(Debug)]
pub(crate) struct Section {
    pub(crate) title: String,
    pub(crate) help: Option<String>,
    pub(crate) rows: Vec<(String, String)>,
}

impl Section {
    pub(crate) fn ungrouped(title: &str, rows: Vec<(String, String)>) -> Vec<Section> {
        if rows.is_empty() {
            return Vec::new();
        }
        vec![Section {
            title: title.to_string(),
            help: None,
            rows,
        }]
    }
}

/// Splits subcommand rows into the configured sections plus a trailing
/// `Commands` section for the remainder.
pub(crate) fn partition_commands(
    groups: &[CommandGroup],
    rows: Vec<(String, String)>,
) -> Result<Vec<Section>, HelpError> {
    let mut remaining = rows;
    let mut sections = Vec::new();

    for group in groups {
        let mut claimed = Vec::new();
        for name in &group.commands {
            let pos = remaining
                .iter()
                .position(|(term, _)| term == name)
                .ok_or_else(|| HelpError::UnknownGroupCommand {
                    group: group.title.clone(),
                    command: name.clone(),
                })?;
            claimed.push(remaining.remove(pos));
        }
        if !claimed.is_empty() {
            sections.push(Section {
                title: group.title.clone(),
                help: group.help.clone(),
                rows: claimed,
            });
        }
    }

    sections.extend(Section::ungrouped("Commands", remaining));
    Ok(sections)
}

/// Splits option rows into the configured sections plus a trailing
/// `Options` section for the remainder.
///
/// A group entry matches a row when it equals any spelling of the row's
/// flag (`-c`, `--config`).
pub(crate) fn partition_options(
    groups: &[OptionGroup],
    rows: Vec<(String, String)>,
) -> Result<Vec<Section>, HelpError> {
    let mut remaining = rows;
    let mut sections = Vec::new();

    for group in groups {
        let mut claimed = Vec::new();
        for name in &group.options {
            let pos = remaining
                .iter()
                .position(|(term, _)| opt_names(term).iter().any(|n| n == name))
                .ok_or_else(|| HelpError::UnknownGroupOption {
                    group: group.title.clone(),
                    option: name.clone(),
                })?;
            claimed.push(remaining.remove(pos));
        }
        if !claimed.is_empty() {
            sections.push(Section {
                title: group.title.clone(),
                help: group.help.clone(),
                rows: claimed,
            });
        }
    }

    sections.extend(Section::ungrouped("Options", remaining));
    Ok(sections)
}

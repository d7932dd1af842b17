//! Option-spec segmentation.
//!
//! The host framework hands the formatter pre-formatted definition-list
//! terms: `--name TEXT`, `-n, --name TEXT`, `--shout / --no-shout`,
//! `--choice [a|b|c]`, or a bare subcommand name. This module splits such
//! a term into its flag, metavar, and choice-list segments so each can be
//! styled independently, then rejoins them. Column alignment is not done
//! here; the formatter pads on the raw term widths.

use console::Style;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ResolvedStyles;

static OPTIONS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-{1,2}[\w\-]+").expect("valid option regex"));

/// All lookup keys for a spec's per-flag style override.
///
/// Every flag token counts, and when any flag matched, the spec's first
/// whitespace-separated token is included as well (so keys like `-n,` keep
/// working). A spec with no flag tokens - a subcommand row - is its own
/// single key.
pub(crate) fn opt_names(spec: &str) -> Vec<String> {
    let mut names: Vec<String> = OPTIONS_RE
        .find_iter(spec)
        .map(|m| m.as_str().to_string())
        .collect();

    if names.is_empty() {
        return vec![spec.to_string()];
    }
    if let Some(first) = spec.split_whitespace().next() {
        names.push(first.to_string());
    }
    names
}

/// Extracts the metavar portion of a spec.
///
/// The metavar is what remains after removing all flag tokens and commas,
/// trimmed. A remainder of exactly `/` marks a boolean flag pair; the
/// original spec is returned unchanged so the caller can take the
/// pair-splitting path.
pub(crate) fn extract_metavar(spec: &str) -> String {
    let stripped = OPTIONS_RE.replace_all(spec, "").replace(',', "");
    let metavar = stripped.trim();
    if metavar == "/" {
        spec.to_string()
    } else {
        metavar.to_string()
    }
}

/// Picks the style for a spec's flag portion.
///
/// Precedence: the first per-flag override matching any of the spec's
/// lookup keys, then the resolved option style, then nothing.
pub(crate) fn pick_style<'a>(spec: &str, styles: &'a ResolvedStyles) -> Option<&'a Style> {
    for name in opt_names(spec) {
        if let Some(style) = styles.option_custom.get(&name) {
            return Some(style);
        }
    }
    styles.options.as_ref()
}

/// Styles a definition-list term.
///
/// - Spec with a metavar: the flag portion and the metavar are styled
///   independently and concatenated with no separator. Choice lists style
///   each pipe-delimited choice and re-wrap in literal brackets. The
///   metavar style falls back to the option style.
/// - Boolean flag pair (`a / b`): both sides get the same resolved style,
///   rejoined with ` / `.
/// - Anything else (including subcommand rows): the whole spec styled via
///   the per-flag lookup.
///
/// With no style configured anywhere the output equals the input.
pub(crate) fn style_spec(spec: &str, styles: &ResolvedStyles) -> String {
    let metavar = extract_metavar(spec);

    if metavar != spec {
        let term = if metavar.is_empty() {
            spec.to_string()
        } else {
            spec.replace(&metavar, "")
        };
        let styled_term = paint(pick_style(&term, styles), &term);
        if metavar.is_empty() {
            return styled_term;
        }

        let meta_style = styles.metavar.as_ref().or(styles.options.as_ref());
        let styled_metavar = match choice_list(&metavar) {
            Some(choices) => {
                let styled: Vec<String> =
                    choices.iter().map(|c| paint(meta_style, c)).collect();
                format!("[{}]", styled.join("|"))
            }
            None => paint(meta_style, &metavar),
        };
        format!("{}{}", styled_term, styled_metavar)
    } else if spec.contains('/') {
        let style = pick_style(spec, styles);
        spec.split('/')
            .map(|side| paint(style, side.trim()))
            .collect::<Vec<_>>()
            .join(" / ")
    } else {
        paint(pick_style(spec, styles), spec)
    }
}

/// The pipe-delimited choices of a bracketed metavar, if it has one.
fn choice_list(metavar: &str) -> Option<Vec<&str>> {
    let open = metavar.find('[')?;
    let close = metavar.find(']')?;
    if close <= open {
        return None;
    }
    Some(metavar[open + 1..close].split('|').collect())
}

fn paint(style: Option<&Style>, text: &str) -> String {
    match style {
        Some(style) => style.apply_to(text).to_string(),
        None => text.to_string(),
    }
}

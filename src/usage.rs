//! `-help` and `-version` text.
//!
//! The flag list is generated from the clap definition of [`Opt`], one entry
//! per flag in name order:
//!
//! ```text
//!   -mx string
//!     	MX record lookup. Domain name required
//! ```


use clap::{Arg, ArgAction, CommandFactory};

use crate::config::{Opt, PROGRAM_NAME, VERSION};

/// Full usage text printed by `-help`.
pub fn render_usage() -> String {
    let mut text = String::new();
    text.push_str("\nNAME\n");
    text.push_str(&format!("    {PROGRAM_NAME} - succinct DNS record retrieval\n\n"));
    text.push_str("SYNOPSIS\n");
    text.push_str(&format!("    {PROGRAM_NAME} [OPTION]\n"));
    text.push_str(&format!("    {PROGRAM_NAME} HOST|IP\n\n"));
    text.push_str("DESCRIPTION\n");
    text.push_str("    Looks up one kind of DNS record and prints one tab-separated line\n");
    text.push_str("    per record. A bare IP address is looked up as PTR, a bare host name\n");
    text.push_str("    as A. Errors are printed on standard output.\n\n");
    text.push_str(&render_flags());
    text.push('\n');
    text
}

/// Version line printed by `-version`.
pub fn render_version() -> String {
    format!("{PROGRAM_NAME} v {VERSION}")
}

fn render_flags() -> String {
    let command = Opt::command();
    let mut flags: Vec<&Arg> = command
        .get_arguments()
        .filter(|arg| !arg.is_positional() && !arg.is_hide_set())
        .collect();
    flags.sort_by(|a, b| a.get_long().cmp(&b.get_long()));

    let mut text = String::new();
    for arg in flags {
        let Some(name) = arg.get_long() else {
            continue;
        };
        let takes_value = !matches!(arg.get_action(), ArgAction::SetTrue | ArgAction::SetFalse);

        let mut entry = format!("  -{name}");
        if takes_value {
            if let Some(value_name) = arg.get_value_names().and_then(|names| names.first()) {
                entry.push_str(&format!(" {value_name}"));
            }
        }
        // One-letter switches keep their description on the same line
        if entry.len() <= 4 {
            entry.push('\t');
        } else {
            entry.push_str("\n    \t");
        }
        if let Some(help) = arg.get_help() {
            entry.push_str(&help.to_string());
        }
        if takes_value {
            if let Some(default) = arg.get_default_values().first() {
                entry.push_str(&format!(" (default {})", default.to_string_lossy()));
            }
        }
        text.push_str(&entry);
        text.push('\n');
    }
    text
}

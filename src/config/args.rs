//! Single-dash option handling.
//!
//! `lookup` options are words written with one dash (`-cname`, `-timeout`),
//! which clap would read as bundled short flags. Before parsing, every
//! single-dash word is rewritten to its double-dash long form.

use std::ffi::OsString;

/// Rewrites `-name[=value]` tokens to `--name[=value]`.
///
/// Left untouched: the program name, tokens already starting with `--`, a lone
/// `-`, tokens whose first character after the dash is a digit (negative
/// numbers) and everything after a bare `--`. Tokens that are not valid UTF-8
/// are passed through.
pub fn normalize_args<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut options_done = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if index == 0 || options_done {
            normalized.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        if text == "--" {
            options_done = true;
            normalized.push(arg);
            continue;
        }

        match text.strip_prefix('-') {
            Some(rest)
                if !rest.is_empty()
                    && !rest.starts_with('-')
                    && !rest.starts_with(|c: char| c.is_ascii_digit()) =>
            {
                normalized.push(OsString::from(format!("--{rest}")));
            }
            _ => normalized.push(arg),
        }
    }

    normalized
}

// Author: Dustin Pilgrim
// License: MIT

use crate::CdclError;

mod patterns;

/// One classified source line. Captured fields borrow from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Blank line or whole-line `#` comment.
    Ignore,
    ConstDef { name: &'a str, value: &'a str },
    OpenAnonymous,
    Close,
    OpenNamed { key: &'a str },
    Entry { key: &'a str, value: &'a str },
    Unrecognized,
}

/// Classify a single line. `line_no` is 1-based and only used for errors.
pub fn classify(raw: &str, line_no: usize) -> Result<Line<'_>, CdclError> {
    let line = raw.trim();

    if line.is_empty() || line.starts_with('#') {
        return Ok(Line::Ignore);
    }

    if is_const_def(line) {
        let caps = patterns::CONST_DEF.captures(line).ok_or_else(|| {
            CdclError::syntax("Invalid constant definition", line_no, line, 101)
                .with_hint("Use `def NAME := VALUE` with an upper-case NAME")
        })?;
        return Ok(Line::ConstDef {
            name: caps.get(1).map_or("", |m| m.as_str()),
            value: caps.get(2).map_or("", |m| m.as_str().trim()),
        });
    }

    match line {
        "{" => return Ok(Line::OpenAnonymous),
        "}" => return Ok(Line::Close),
        _ => {}
    }

    if let Some(caps) = patterns::NAMED_OPEN.captures(line) {
        return Ok(Line::OpenNamed {
            key: caps.get(1).map_or("", |m| m.as_str()),
        });
    }

    if line.contains("->") {
        let caps = patterns::ENTRY.captures(line).ok_or_else(|| {
            CdclError::syntax("Invalid dictionary entry", line_no, line, 102)
                .with_hint("Entries look like `key -> value.` and end with a period")
        })?;
        return Ok(Line::Entry {
            key: caps.get(1).map_or("", |m| m.as_str()),
            value: caps.get(2).map_or("", |m| m.as_str()),
        });
    }

    Ok(Line::Unrecognized)
}

/// `def` followed by whitespace. `define -> x.` is an ordinary entry.
fn is_const_def(line: &str) -> bool {
    line.strip_prefix("def")
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_whitespace)
}

#[cfg(test)]
mod tests;

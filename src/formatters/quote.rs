//! Double-quoted string literals with backslash escapes
//!
//! `quote` wraps text in `"` and escapes quotes, backslashes and every
//! non-printable character, producing the same text as Go's `strconv.Quote`,
//! which the key-value and simple wire formats are defined by.

use std::fmt::Write as _;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Quote `s` as a double-quoted literal
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if is_printable(c) => out.push(c),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            c if (c as u32) < 0x20 || c == '\u{7F}' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if (c as u32) < 0x10000 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => {
                let _ = write!(out, "\\U{:08x}", c as u32);
            }
        }
    }
    out.push('"');
    out
}

/// Quote, then turn escaped quotes back into plain quotes and drop the rest.
///
/// The enclosing quotes disappear and `Hello "World"` comes back unchanged,
/// while control characters stay escaped.
pub fn quote_unquoted(s: &str) -> String {
    let quoted = quote(s);
    let mut out = String::with_capacity(quoted.len());
    let mut chars = quoted.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'"') => {
                chars.next();
                out.push('"');
            }
            '"' => {}
            c => out.push(c),
        }
    }
    out
}

/// Letters, marks, numbers, punctuation, symbols and the ASCII space
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

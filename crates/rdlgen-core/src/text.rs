//! Text helpers for source emission.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `word` | [`capitalize`] | `Word` |
//! | `Word` | [`uncapitalize`] | `word` |
//! | `ab`, 4 | [`left_justified`] | `ab  ` |
//! | `ContactList` | [`camel_snake_to_kebab`] | `contact-list` |
//! | `a,"b,c"` | [`split`] | `a`, `"b,c"` |
//!
//! [`format_block`] and [`format_comment`] word-wrap descriptions into prefixed,
//! margin-aligned comment blocks.

use serde_json::Value;

/// Uppercase the first character.
///
/// # Examples
///
/// ```
/// use rdlgen_core::text::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character.
///
/// # Examples
///
/// ```
/// use rdlgen_core::text::uncapitalize;
///
/// assert_eq!(uncapitalize("Hello"), "hello");
/// assert_eq!(uncapitalize("URL"), "uRL");
/// ```
pub fn uncapitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// A run of `count` spaces
pub fn spaces(count: usize) -> String {
    " ".repeat(count)
}

/// Pad `text` on the right with spaces up to `width` characters.
///
/// Text already at least `width` characters long is returned unchanged.
pub fn left_justified(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", spaces(width.saturating_sub(len)))
}

/// Word-wrap `text` into a block of prefixed lines.
///
/// Every content line is `left_col` spaces, then `prefix`, then as many words as fit within
/// `width` columns. A word longer than the space left after the margin and prefix gets a line
/// of its own. The block is framed above and below by a line holding just the margin and the
/// trimmed prefix, and every line ends in a newline. Empty text yields an empty string.
///
/// # Examples
///
/// ```
/// use rdlgen_core::text::format_block;
///
/// let block = format_block("one two three", 2, 14, "# ");
/// assert_eq!(block, "  #\n  # one two\n  # three\n  #\n");
/// ```
pub fn format_block(text: &str, left_col: usize, width: usize, prefix: &str) -> String {
    let mut words = text.split_whitespace().peekable();
    if words.peek().is_none() {
        return String::new();
    }

    let indent = spaces(left_col);
    let start = left_col + prefix.chars().count();
    let pad = format!("{indent}{}\n", prefix.trim());

    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut col = start;
    for word in words {
        let len = word.chars().count();
        if !line.is_empty() && col + 1 + len > width {
            lines.push(std::mem::take(&mut line));
            col = start;
        }
        if !line.is_empty() {
            line.push(' ');
            col += 1;
        }
        line.push_str(word);
        col += len;
    }
    lines.push(line);

    let mut block = pad.clone();
    for line in lines {
        block.push_str(&indent);
        block.push_str(prefix);
        block.push_str(&line);
        block.push('\n');
    }
    block.push_str(&pad);
    block
}

/// Word-wrap `text` into a `// ` line-comment block.
pub fn format_comment(text: &str, left_col: usize, width: usize) -> String {
    format_block(text, left_col, width, "// ")
}

/// Split `text` on `delim`, keeping quoted spans intact.
///
/// A `"` not preceded by `\` opens or closes a quoted span, and a delimiter inside a quoted
/// span is part of the current piece. Quotes are kept in the output. A trailing delimiter does
/// not produce a trailing empty piece, and empty input produces no pieces.
///
/// # Examples
///
/// ```
/// use rdlgen_core::text::split;
///
/// assert_eq!(split(r#"a,"b,c",d"#, ','), vec!["a", r#""b,c""#, "d"]);
/// assert_eq!(split("a,,b", ','), vec!["a", "", "b"]);
/// ```
pub fn split(text: &str, delim: char) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut quoted = false;
    let mut offset = 0;
    let mut prev = None;

    for (pos, c) in text.char_indices() {
        if c == '"' && prev != Some('\\') {
            quoted = !quoted;
        } else if c == delim && !quoted {
            pieces.push(text[offset..pos].to_string());
            offset = pos + c.len_utf8();
        }
        prev = Some(c);
    }
    if offset < text.len() {
        pieces.push(text[offset..].to_string());
    }

    pieces
}

/// Convert `camelCase`, `PascalCase` or `snake_case` to `kebab-case`.
///
/// # Examples
///
/// ```
/// use rdlgen_core::text::camel_snake_to_kebab;
///
/// assert_eq!(camel_snake_to_kebab("ContactList"), "contact-list");
/// assert_eq!(camel_snake_to_kebab("contact_list"), "contact-list");
/// assert_eq!(camel_snake_to_kebab("URL"), "url");
/// ```
pub fn camel_snake_to_kebab(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut was_lower = false;

    for c in name.chars() {
        if c == '_' {
            result.push('-');
            was_lower = false;
        } else if c.is_uppercase() {
            if was_lower {
                result.push('-');
            }
            result.extend(c.to_lowercase());
            was_lower = false;
        } else {
            result.push(c);
            was_lower = true;
        }
    }

    result
}

/// Render a declared default value as a source literal.
///
/// Absent and `null` defaults render as `null`. Strings are quoted and escaped. Arrays and
/// objects have no literal form and also render as `null`.
pub fn default_literal(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Array(_)) | Some(Value::Object(_)) => {
            "null".to_string()
        }
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(s @ Value::String(_)) => s.to_string(),
    }
}

#[cfg(test)]
#[path = "text/text_tests.rs"]
mod text_tests;

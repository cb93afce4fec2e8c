// src/utils.rs
use chrono::{DateTime, Utc};

/// Keep at most `max_chars` characters (not bytes)
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

/// Human-readable "last updated" value; unparseable timestamps are shown raw
pub fn format_timestamp(parsed: Option<DateTime<Utc>>, raw: &str) -> String {
    match parsed {
        Some(ts) => ts.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => raw.to_string(),
    }
}

/// Text for an optional answer field, with a fallback for missing or blank values
pub fn text_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => fallback,
    }
}

/// Parse a `KEY=VALUE` command-line pair; the value may be empty but the key may not
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected SUBJECT=ANSWER, got '{}'", raw))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing subject in '{}'", raw));
    }

    Ok((key.to_string(), value.trim().to_string()))
}

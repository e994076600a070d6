//! Display helpers for change fields
//!
//! Both helpers fail open: input they cannot make sense of is shown as is.

use chrono::{DateTime, FixedOffset, Local};
use std::fmt::Write;

/// Length identifiers are cut to in the change list
pub const DEFAULT_ID_LENGTH: usize = 12;

/// Format used when none is configured
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// jj's default rendering of `committer.timestamp()`
const JJ_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f %:z";

/// Render `raw` in local time with the default format
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_with(raw, DEFAULT_TIMESTAMP_FORMAT)
}

/// Render `raw` in local time using the chrono `format` string
///
/// Accepts RFC 3339 and jj's native timestamp rendering. Anything else, and
/// any `format` chrono cannot render, returns `raw` unchanged.
pub fn format_timestamp_with(raw: &str, format: &str) -> String {
    let Some(instant) = parse_instant(raw.trim()) else {
        log::trace!("Keeping unparseable timestamp {:?}", raw);
        return raw.to_string();
    };

    let mut rendered = String::new();
    match write!(rendered, "{}", instant.with_timezone(&Local).format(format)) {
        Ok(()) => rendered,
        Err(_) => {
            log::warn!("Invalid timestamp format {:?}, showing raw value", format);
            raw.to_string()
        }
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, JJ_TIMESTAMP_FORMAT))
        .ok()
}

/// Cut `id` to its first `max_length` characters, without an ellipsis
pub fn truncate_identifier(id: &str, max_length: usize) -> &str {
    match id.char_indices().nth(max_length) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_identifier() {
        assert_eq!(truncate_identifier("abcdefghijklmno", 12), "abcdefghijkl");
    }

    #[test]
    fn test_truncate_short_and_empty_identifiers() {
        assert_eq!(truncate_identifier("abc", 12), "abc");
        assert_eq!(truncate_identifier("", 12), "");
        assert_eq!(truncate_identifier("abcdefghijkl", DEFAULT_ID_LENGTH), "abcdefghijkl");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_identifier("ééééé", 2), "éé");
    }

    #[test]
    fn test_unparseable_timestamp_is_returned_verbatim() {
        assert_eq!(format_timestamp("not-a-date"), "not-a-date");
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn test_rfc3339_timestamp_is_rendered() {
        let raw = "2024-01-15T10:00:00Z";
        let formatted = format_timestamp(raw);
        assert_ne!(formatted, raw);

        let expected = DateTime::parse_from_rfc3339(raw)
            .unwrap()
            .with_timezone(&Local)
            .format(DEFAULT_TIMESTAMP_FORMAT)
            .to_string();
        assert_eq!(formatted, expected);
    }

    #[test]
    fn test_jj_native_timestamp_is_rendered() {
        let raw = "2024-01-15 10:00:00.000 +01:00";
        let formatted = format_timestamp(raw);
        assert_ne!(formatted, raw);

        let expected = DateTime::parse_from_rfc3339("2024-01-15T10:00:00+01:00")
            .unwrap()
            .with_timezone(&Local)
            .format(DEFAULT_TIMESTAMP_FORMAT)
            .to_string();
        assert_eq!(formatted, expected);
    }

    #[test]
    fn test_invalid_format_falls_back_to_raw() {
        let raw = "2024-01-15T10:00:00Z";
        assert_eq!(format_timestamp_with(raw, "%Q"), raw);
        assert_eq!(format_timestamp_with(raw, "%Y-%"), raw);
    }

    #[test]
    fn test_custom_format() {
        let formatted = format_timestamp_with("2024-01-15T10:00:00Z", "%Y");
        assert_eq!(formatted, "2024");
    }
}

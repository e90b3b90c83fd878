//! Pure presentation helpers shared by the section renderers.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Renders a backend timestamp as `YYYY-MM-DD HH:MM:SS`.
/// The backend emits both offset-bearing RFC 3339 strings and naive ISO 8601
/// ones; anything unparseable is shown verbatim rather than hidden.
pub fn format_datetime(raw: &str) -> String {
    let display = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        if let Ok(formatted) = parsed.format(&display) {
            return formatted;
        }
    }
    let naive = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    if let Ok(parsed) = PrimitiveDateTime::parse(raw, &naive) {
        if let Ok(formatted) = parsed.format(&display) {
            return formatted;
        }
    }
    raw.to_string()
}

/// Pretty-prints an opaque JSON document, falling back to the raw text when
/// it does not parse.
pub fn pretty_json(raw: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

/// Abbreviates a long event id for table display.
pub fn short_event_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// A 0.0-1.0 weight as a percent caption.
pub fn percent_label(value: f32) -> String {
    format!("{:.0}%", f64::from(value) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_naive_backend_timestamps() {
        assert_eq!(
            format_datetime("2024-03-05T09:30:00"),
            "2024-03-05 09:30:00"
        );
    }

    #[test]
    fn formats_rfc3339_timestamps() {
        assert_eq!(
            format_datetime("2024-03-05T09:30:00Z"),
            "2024-03-05 09:30:00"
        );
    }

    #[test]
    fn falls_back_to_the_raw_string() {
        assert_eq!(format_datetime("yesterday"), "yesterday");
        assert_eq!(format_datetime(""), "");
    }

    #[test]
    fn pretty_json_reflows_valid_documents() {
        let pretty = pretty_json(r#"{"a":1}"#);
        assert!(pretty.contains("\"a\": 1"));
    }

    #[test]
    fn pretty_json_passes_through_invalid_documents() {
        assert_eq!(pretty_json("{oops"), "{oops");
    }

    #[test]
    fn short_event_id_truncates_only_long_ids() {
        assert_eq!(short_event_id("0123456789abcdef"), "01234567");
        assert_eq!(short_event_id("abc"), "abc");
    }

    #[test]
    fn percent_label_rounds_to_whole_percent() {
        assert_eq!(percent_label(0.25), "25%");
        assert_eq!(percent_label(0.0), "0%");
        assert_eq!(percent_label(1.0), "100%");
    }
}

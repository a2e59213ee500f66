//! Date parsing at the document boundary.
//!
//! Comment-period closing dates arrive as loosely formatted values. Anything
//! that is not a parseable date string is treated as "not open for comment"
//! rather than a failure, so it only ever costs a document its urgency score.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// Parses `YYYY-MM-DD`, or the date part of an RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

/// Lenient variant of [`parse_date`] that records why a value was dropped.
pub fn parse_optional_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?;
    let parsed = parse_date(raw);
    if parsed.is_none() && !raw.trim().is_empty() {
        debug!(value = raw, "unparseable comment closing date; treating as closed");
    }
    parsed
}

/// Accepts any JSON value; only a parseable date string yields a date.
pub(crate) fn lenient_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => Ok(parse_optional_date(Some(&raw))),
        Some(other) => {
            debug!(value = %other, "non-string comment closing date; treating as closed");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_timestamp_dates() {
        let expected = NaiveDate::from_ymd_opt(2025, 4, 14).expect("valid date");
        assert_eq!(parse_date("2025-04-14"), Some(expected));
        assert_eq!(parse_date(" 2025-04-14 "), Some(expected));
        assert_eq!(parse_date("2025-04-14T23:59:59-04:00"), Some(expected));
    }

    #[test]
    fn malformed_dates_are_absent() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("04/14/2025"), None);
        assert_eq!(parse_date("2025-02-30"), None);
        assert_eq!(parse_optional_date(Some("soon")), None);
        assert_eq!(parse_optional_date(None), None);
    }

    #[derive(Deserialize)]
    struct Closing {
        #[serde(default, deserialize_with = "lenient_optional_date")]
        closes_on: Option<NaiveDate>,
    }

    fn closing(value: serde_json::Value) -> Option<NaiveDate> {
        serde_json::from_value::<Closing>(serde_json::json!({ "closes_on": value }))
            .expect("lenient field never fails")
            .closes_on
    }

    #[test]
    fn non_string_closing_dates_are_absent() {
        assert_eq!(closing(serde_json::json!(20250301)), None);
        assert_eq!(closing(serde_json::json!(true)), None);
        assert_eq!(closing(serde_json::json!(["2025-03-01"])), None);
        assert_eq!(closing(serde_json::Value::Null), None);
        assert_eq!(
            closing(serde_json::json!("2025-03-01")),
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
    }
}

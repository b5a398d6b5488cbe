//! Datetime helpers.
//!
//! - Serde: `DateTime<Utc>` <-> RFC3339 string (plus an `option` variant)
//! - Display: short `YYYY-MM-DD HH:MM` rendering used by list rows
//! - Parsing of the `YYYY-MM-DD` date typed into date filters

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{CoreError, CoreResult, FieldError};

/// Serializes `DateTime<Utc>` as an RFC3339 string.
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// Deserializes `DateTime<Utc>` from an RFC3339 string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let s = String::deserialize(deserializer)?;
    parse_rfc3339(&s).map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}")))
}

/// `Option<DateTime<Utc>>` serializer/deserializer helpers.
pub mod option {
    use super::{parse_rfc3339, DateTime, Deserialize, Deserializer, Serializer, Utc};

    /// Serializes `Option<DateTime<Utc>>` as RFC3339 or `null`.
    #[allow(clippy::ref_option)]
    pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes `Option<DateTime<Utc>>` from RFC3339 or `null`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        match Option::<String>::deserialize(deserializer)? {
            Some(s) => parse_rfc3339(&s)
                .map(Some)
                .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}"))),
            None => Ok(None),
        }
    }
}

fn parse_rfc3339(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

/// Parses a seed timestamp such as `2023-05-01T10:30:00Z`.
///
/// Only used for compile-time-known literals; an invalid literal falls back to the epoch.
pub(crate) fn ts(s: &str) -> DateTime<Utc> {
    parse_rfc3339(s).unwrap_or_default()
}

/// Short rendering for table cells.
#[must_use]
pub fn format_short(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Parses the `YYYY-MM-DD` value of a date filter input.
///
/// An empty (or whitespace) input means "no date filter".
pub fn parse_filter_date(input: &str) -> CoreResult<Option<NaiveDate>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| {
            CoreError::Validation(FieldError::new("date", format!("'{input}' is not YYYY-MM-DD")))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "crate::utils::datetime")]
        at: DateTime<Utc>,
        #[serde(with = "crate::utils::datetime::option")]
        seen: Option<DateTime<Utc>>,
    }

    #[test]
    fn rfc3339_round_trips_through_json() {
        let value = Stamped {
            at: ts("2023-05-01T10:30:00Z"),
            seen: None,
        };
        let json = serde_json::to_string(&value).unwrap();
        assert!(json.contains("2023-05-01T10:30:00+00:00"));
        assert!(json.contains("\"seen\":null"));

        let back: Stamped = serde_json::from_str(&json).unwrap();
        assert_eq!(back.at, value.at);
        assert!(back.seen.is_none());
    }

    #[test]
    fn rejects_garbage_timestamp() {
        let err = serde_json::from_str::<Stamped>(r#"{"at":"yesterday","seen":null}"#);
        assert!(err.is_err());
    }

    #[test]
    fn filter_date_input() {
        assert_eq!(parse_filter_date("  ").unwrap(), None);
        assert_eq!(
            parse_filter_date("2023-05-01").unwrap(),
            NaiveDate::from_ymd_opt(2023, 5, 1)
        );
        assert!(matches!(
            parse_filter_date("05/01/2023"),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn short_format() {
        assert_eq!(format_short(&ts("2023-04-15T10:30:00Z")), "2023-04-15 10:30");
    }
}

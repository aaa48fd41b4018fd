//! Database utility functions.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Deserializer};

/// Current UTC timestamp truncated to whole seconds.
pub fn current_timestamp() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Current UTC date.
pub fn current_date() -> NaiveDate {
    Utc::now().date_naive()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DateOrDateTime {
    DateTime(NaiveDateTime),
    Date(NaiveDate),
}

/// Deserialize an optional timestamp that may also be sent as a bare date.
///
/// `"2024-05-01"` is read as midnight of that day.
pub fn deserialize_date_or_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<DateOrDateTime>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        DateOrDateTime::DateTime(ts) => ts,
        DateOrDateTime::Date(date) => date.and_time(NaiveTime::MIN),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_timestamp_has_no_subsecond_part() {
        assert_eq!(current_timestamp().nanosecond(), 0);
    }

    #[test]
    fn current_date_matches_timestamp_date() {
        let date = current_date();
        let ts = current_timestamp();
        // Allow for a midnight rollover between the two calls
        assert!(ts.date() == date || ts.date() == date.succ_opt().unwrap());
    }

    #[derive(Deserialize)]
    struct Stamp {
        #[serde(default, deserialize_with = "deserialize_date_or_datetime")]
        at: Option<NaiveDateTime>,
    }

    #[test]
    fn date_or_datetime_accepts_bare_date_as_midnight() {
        let stamp: Stamp = serde_json::from_str(r#"{"at":"2024-05-01"}"#).unwrap();
        assert_eq!(
            stamp.at,
            NaiveDate::from_ymd_opt(2024, 5, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
    }

    #[test]
    fn date_or_datetime_accepts_full_timestamp() {
        let stamp: Stamp = serde_json::from_str(r#"{"at":"2024-05-01T10:30:00"}"#).unwrap();
        assert_eq!(
            stamp.at,
            NaiveDate::from_ymd_opt(2024, 5, 1).and_then(|d| d.and_hms_opt(10, 30, 0))
        );
    }

    #[test]
    fn date_or_datetime_handles_null_missing_and_garbage() {
        let stamp: Stamp = serde_json::from_str(r#"{"at":null}"#).unwrap();
        assert!(stamp.at.is_none());
        let stamp: Stamp = serde_json::from_str("{}").unwrap();
        assert!(stamp.at.is_none());
        assert!(serde_json::from_str::<Stamp>(r#"{"at":"yesterday"}"#).is_err());
    }
}

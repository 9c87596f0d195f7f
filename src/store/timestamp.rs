use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

/// Normalizes a timestamp field read from the store to a single `DateTime<Utc>`
/// representation.
///
/// Providers return timestamps in more than one shape: an RFC 3339 string, an
/// epoch value in seconds, or a map with a `_seconds` component. Every read
/// path funnels through here so callers only ever see `DateTime<Utc>`.
pub fn normalize_timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    match value? {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => {
            if let Some(secs) = n.as_i64() {
                Utc.timestamp_opt(secs, 0).single()
            } else {
                n.as_f64()
                    .and_then(|secs| Utc.timestamp_opt(secs as i64, 0).single())
            }
        }
        Value::Object(map) => {
            let secs = map.get("_seconds").and_then(Value::as_i64)?;
            let nanos = map
                .get("_nanoseconds")
                .and_then(Value::as_u64)
                .unwrap_or(0) as u32;
            Utc.timestamp_opt(secs, nanos).single()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_rfc3339_strings() {
        let value = json!("2024-05-01T12:30:00Z");

        let normalized = normalize_timestamp(Some(&value)).unwrap();

        assert_eq!(normalized.to_rfc3339(), "2024-05-01T12:30:00+00:00");
    }

    #[test]
    fn parses_epoch_seconds() {
        let value = json!(1_714_565_400);

        let normalized = normalize_timestamp(Some(&value)).unwrap();

        assert_eq!(normalized.timestamp(), 1_714_565_400);
    }

    #[test]
    fn parses_provider_seconds_maps() {
        let value = json!({ "_seconds": 1_714_565_400, "_nanoseconds": 500_000_000 });

        let normalized = normalize_timestamp(Some(&value)).unwrap();

        assert_eq!(normalized.timestamp(), 1_714_565_400);
        assert_eq!(normalized.timestamp_subsec_nanos(), 500_000_000);
    }

    #[test]
    fn missing_or_malformed_values_normalize_to_none() {
        assert!(normalize_timestamp(None).is_none());
        assert!(normalize_timestamp(Some(&json!(null))).is_none());
        assert!(normalize_timestamp(Some(&json!("not a date"))).is_none());
        assert!(normalize_timestamp(Some(&json!({ "seconds": 5 }))).is_none());
    }
}

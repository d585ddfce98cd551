use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};

/// A record that is parsed as part of a bigger response, named in parse errors
pub trait Entity {
    const NAME: &'static str;
}

fn from_value<T, E>(value: serde_json::Value) -> Result<T, E>
where
    T: DeserializeOwned + Entity,
    E: serde::de::Error,
{
    serde_json::from_value(value).map_err(|e| E::custom(format!("{}: {}", T::NAME, e)))
}

/// A nested record that has to be present
pub fn nested<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Entity,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    from_value(value)
}

/// A nested record where `null` is treated like an empty object. Combine with
/// `#[serde(default)]` to cover the key being absent.
pub fn nested_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Entity + Default,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(T::default()),
        Some(value) => from_value(value),
    }
}

/// A list of nested records, `null` being an empty list
pub fn nested_list_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Entity,
{
    Option::<Vec<serde_json::Value>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(from_value)
        .collect()
}

/// Lists that are sometimes sent as `null`
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn parse_timestamp(field: &str, raw: &str) -> Result<DateTime<Utc>, String> {
    let normalized = match raw.strip_suffix('Z') {
        Some(head) => format!("{head}+00:00"),
        None => raw.to_string(),
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(parsed.with_timezone(&Utc));
    }

    // Offset-less timestamps are in UTC
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|e| format!("invalid `{field}` timestamp {raw:?}: {e}"))
}

pub mod created_at {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp("created_at", &raw).map_err(serde::de::Error::custom)
    }
}

pub mod last_updated {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_timestamp("last_updated", &raw))
            .transpose()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_designator() {
        let parsed = parse_timestamp("created_at", "2024-01-02T03:04:05Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
    }

    #[test]
    fn explicit_offset() {
        let parsed = parse_timestamp("created_at", "2024-01-02T05:04:05.250+02:00").unwrap();
        assert_eq!(
            parsed,
            Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap() + chrono::Duration::milliseconds(250)
        );
    }

    #[test]
    fn without_offset() {
        let parsed = parse_timestamp("created_at", "2024-01-02T03:04:05.123456").unwrap();
        assert_eq!(parsed.timestamp(), 1704164645);
    }

    #[test]
    fn malformed() {
        let err = parse_timestamp("created_at", "yesterday").unwrap_err();
        assert!(err.contains("created_at"), "{err}");
        assert!(err.contains("yesterday"), "{err}");
    }
}

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Deserialize a numeric string that Gate.io may serve as `""` or omit.
///
/// Ticker fields like `lowest_ask` are empty strings on a one-sided book;
/// both the empty string and a missing field map to `None`. Use together
/// with `#[serde(default, deserialize_with = "...")]`.
pub fn de_opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => Decimal::from_str(s)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Milliseconds since the unix epoch.
pub fn epoch_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Seconds since the unix epoch, as Gate.io's `Timestamp` header expects.
pub fn epoch_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "de_opt_decimal")]
        value: Option<Decimal>,
    }

    #[test]
    fn test_de_opt_decimal_value() {
        let h: Holder = serde_json::from_str(r#"{"value": "0.31"}"#).unwrap();
        assert_eq!(h.value, Some(dec!(0.31)));
    }

    #[test]
    fn test_de_opt_decimal_empty_string() {
        let h: Holder = serde_json::from_str(r#"{"value": ""}"#).unwrap();
        assert_eq!(h.value, None);
    }

    #[test]
    fn test_de_opt_decimal_missing() {
        let h: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(h.value, None);
    }

    #[test]
    fn test_de_opt_decimal_null() {
        let h: Holder = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(h.value, None);
    }

    #[test]
    fn test_de_opt_decimal_garbage_is_err() {
        assert!(serde_json::from_str::<Holder>(r#"{"value": "abc"}"#).is_err());
    }
}

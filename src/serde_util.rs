//! Custom serde helpers for the API's loosely typed JSON.

use serde::Deserialize;

/// A JSON number, a string that should hold one, or `null`
#[derive(Deserialize)]
#[serde(untagged)]
enum Raw<T> {
    Number(T),
    Text(String),
    Null,
}

impl<T> Raw<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    /// `None` for `null` and blank strings
    fn into_value<E: serde::de::Error>(self) -> Result<Option<T>, E> {
        match self {
            Raw::Number(value) => Ok(Some(value)),
            Raw::Text(text) if text.trim().is_empty() => Ok(None),
            Raw::Text(text) => text
                .trim()
                .parse()
                .map(Some)
                .map_err(|e| E::custom(format!("invalid number {:?}: {}", text, e))),
            Raw::Null => Ok(None),
        }
    }
}

/// Accepts a number written either as a JSON number or as a numeric string.
///
/// The pool software returns e.g. `"amount": "0.0125"` on some endpoints and
/// `"amount": 0.0125` on others. `null` maps to the type's default.
pub mod number_or_string {
    use super::Raw;
    use serde::{Deserialize, Deserializer};
    use std::fmt;
    use std::str::FromStr;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + FromStr + Default,
        T::Err: fmt::Display,
    {
        Ok(Raw::<T>::deserialize(deserializer)?
            .into_value::<D::Error>()?
            .unwrap_or_default())
    }
}

/// Like [`number_or_string`], for fields the server may leave out or null.
pub mod option_number_or_string {
    use super::Raw;
    use serde::{Deserialize, Deserializer};
    use std::fmt;
    use std::str::FromStr;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + FromStr,
        T::Err: fmt::Display,
    {
        Raw::<T>::deserialize(deserializer)?.into_value()
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, with = "super::number_or_string")]
        value: f64,
        #[serde(default, with = "super::number_or_string")]
        count: u64,
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        let sample: Sample = serde_json::from_str(r#"{"value": "1.5", "count": 7}"#).unwrap();
        assert_eq!(sample.value, 1.5);
        assert_eq!(sample.count, 7);

        let sample: Sample = serde_json::from_str(r#"{"value": 2, "count": "12"}"#).unwrap();
        assert_eq!(sample.value, 2.0);
        assert_eq!(sample.count, 12);
    }

    #[test]
    fn test_null_and_missing_default() {
        let sample: Sample = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(sample.value, 0.0);
        assert_eq!(sample.count, 0);
    }

    #[derive(Deserialize)]
    struct Optional {
        #[serde(default, with = "super::option_number_or_string")]
        percent: Option<f64>,
        #[serde(default, with = "super::option_number_or_string")]
        flag: Option<i64>,
    }

    #[test]
    fn test_optional_numbers() {
        let sample: Optional = serde_json::from_str(r#"{"percent": "0.5", "flag": 1}"#).unwrap();
        assert_eq!(sample.percent, Some(0.5));
        assert_eq!(sample.flag, Some(1));

        let sample: Optional = serde_json::from_str(r#"{"percent": null, "flag": ""}"#).unwrap();
        assert_eq!(sample.percent, None);
        assert_eq!(sample.flag, None);

        let sample: Optional = serde_json::from_str("{}").unwrap();
        assert_eq!(sample.percent, None);
        assert!(serde_json::from_str::<Optional>(r#"{"flag": "yes"}"#).is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<Sample>(r#"{"value": "fast"}"#).is_err());
    }
}

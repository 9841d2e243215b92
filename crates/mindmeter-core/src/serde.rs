use serde::{Deserialize, Deserializer};

/// Deserializes an optional string, treating empty or whitespace-only
/// values as absent.
///
/// The backend (and legacy stored records) sometimes carry `""` where the
/// value is really missing; downstream normalization relies on those being
/// `None`.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        value: Option<String>,
    }

    #[test]
    fn test_optional_string_present() {
        let w: Wrapper = serde_json::from_str(r#"{"value":"hello"}"#).unwrap();
        assert_eq!(w.value, Some("hello".to_string()));
    }

    #[test]
    fn test_optional_string_empty_is_none() {
        let w: Wrapper = serde_json::from_str(r#"{"value":""}"#).unwrap();
        assert_eq!(w.value, None);
    }

    #[test]
    fn test_optional_string_whitespace_is_none() {
        let w: Wrapper = serde_json::from_str(r#"{"value":"   "}"#).unwrap();
        assert_eq!(w.value, None);
    }

    #[test]
    fn test_optional_string_null_is_none() {
        let w: Wrapper = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert_eq!(w.value, None);
    }
}

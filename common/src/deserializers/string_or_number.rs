use std::fmt;

use serde::de::Error;
use serde::{de::Visitor, Deserializer};

struct OptionalStringOrNumberVisitor;

impl<'de> Visitor<'de> for OptionalStringOrNumberVisitor {
    type Value = Option<String>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("string, number or null")
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(Some(s.to_owned()))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(Some(v.to_string()))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(Some(v.to_string()))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(None)
    }
}

pub fn from_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(OptionalStringOrNumberVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct TestDeserialize {
        #[serde(default, deserialize_with = "from_string_or_number")]
        pub value: Option<String>,
    }

    #[test]
    fn test_deserialize_str() {
        let value_deserialized: TestDeserialize =
            serde_json::from_str(r#"{"value": "10"}"#).unwrap();
        assert_eq!(Some("10".to_owned()), value_deserialized.value);
    }

    #[test]
    fn test_deserialize_numbers() {
        let value_deserialized: TestDeserialize =
            serde_json::from_str(&json!({ "value": i64::MIN }).to_string()).unwrap();
        assert_eq!(Some(i64::MIN.to_string()), value_deserialized.value);

        let value_deserialized: TestDeserialize =
            serde_json::from_str(&json!({ "value": 0 }).to_string()).unwrap();
        assert_eq!(Some("0".to_owned()), value_deserialized.value);

        let value_deserialized: TestDeserialize =
            serde_json::from_str(&json!({ "value": u64::MAX }).to_string()).unwrap();
        assert_eq!(Some(u64::MAX.to_string()), value_deserialized.value);
    }

    #[test]
    fn test_deserialize_null_and_missing() {
        let value_deserialized: TestDeserialize =
            serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(None, value_deserialized.value);

        let value_deserialized: TestDeserialize = serde_json::from_str("{}").unwrap();
        assert_eq!(None, value_deserialized.value);
    }
}

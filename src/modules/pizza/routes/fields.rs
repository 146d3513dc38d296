//! Body field helpers shared by the create and update routes.

#[cfg(not(feature = "strict-errors"))]
use serde::{Deserialize, Deserializer};
#[cfg(not(feature = "strict-errors"))]
use serde_json::Value;

use crate::modules::pizza::repository::Price;
use validator::ValidationError;

/// Takes whatever JSON the client sent for `name` and stores its text, the
/// way MySQL coerces a bound number or boolean into a text column.
#[cfg(not(feature = "strict-errors"))]
pub fn deserialize_lenient_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(name) => Some(name),
        other => Some(other.to_string()),
    })
}

/// Only consulted by `validate()`, which runs in strict mode.
pub fn validate_price(price: &Price) -> Result<(), ValidationError> {
    match price {
        Price::Raw(_) => Err(ValidationError::new("PRICE_NOT_A_NUMBER")
            .with_message("Price must be a number".into())),
        Price::Number(number) if number.as_f64().is_some_and(|value| value < 0.0) => Err(
            ValidationError::new("PRICE_NEGATIVE").with_message("Price must not be negative".into()),
        ),
        Price::Number(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "strict-errors"))]
    #[test]
    fn lenient_name_keeps_the_text_of_any_value() {
        #[derive(Deserialize)]
        struct Body {
            #[serde(default, deserialize_with = "deserialize_lenient_name")]
            name: Option<String>,
        }

        let name = |json: &str| serde_json::from_str::<Body>(json).unwrap().name;

        assert_eq!(name(r#"{"name":"Hawaii"}"#).as_deref(), Some("Hawaii"));
        assert_eq!(name(r#"{"name":42}"#).as_deref(), Some("42"));
        assert_eq!(name(r#"{"name":true}"#).as_deref(), Some("true"));
        assert_eq!(name(r#"{"name":null}"#), None);
        assert_eq!(name("{}"), None);
    }

    #[test]
    fn price_must_be_a_non_negative_number() {
        assert!(validate_price(&Price::from(serde_json::json!(12.5))).is_ok());
        assert!(validate_price(&Price::from(serde_json::json!("1500"))).is_ok());
        assert!(validate_price(&Price::from(serde_json::json!(-1))).is_err());
        assert!(validate_price(&Price::from(serde_json::json!("cheap"))).is_err());
    }
}

//! Lenient readers for loosely typed backend JSON.
//!
//! Stored documents keep whatever the submitting form sent, so numbers may
//! arrive as strings and flags as `"yes"`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use business::domain::errors::GatewayError;
use business::domain::shared::dates::parse_date;

/// A JSON object read by trying several spellings of each key.
pub(crate) struct Fields<'a>(&'a Map<String, Value>);

impl<'a> Fields<'a> {
    pub(crate) fn of(value: &'a Value) -> Result<Self, GatewayError> {
        value
            .as_object()
            .map(Fields)
            .ok_or_else(|| GatewayError::decode("expected a JSON object"))
    }

    /// First non-null value among `keys`.
    pub(crate) fn get(&self, keys: &[&str]) -> Option<&'a Value> {
        keys.iter()
            .find_map(|key| self.0.get(*key).filter(|v| !v.is_null()))
    }

    pub(crate) fn text(&self, keys: &[&str]) -> Option<String> {
        text(self.get(keys))
    }

    pub(crate) fn number(&self, keys: &[&str]) -> Option<f64> {
        number(self.get(keys))
    }

    pub(crate) fn date(&self, keys: &[&str]) -> Option<NaiveDate> {
        self.text(keys).as_deref().and_then(parse_date)
    }

    pub(crate) fn flag(&self, keys: &[&str]) -> bool {
        flag(self.get(keys))
    }

    pub(crate) fn count(&self, keys: &[&str]) -> u32 {
        count(self.get(keys))
    }
}

pub(crate) fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

pub(crate) fn integer(value: Option<&Value>) -> Option<i64> {
    number(value).map(|n| n.round() as i64)
}

pub(crate) fn count(value: Option<&Value>) -> u32 {
    integer(value)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

pub(crate) fn flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "yes" | "y" | "1"
        ),
        _ => false,
    }
}

pub(crate) fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
    .filter(|s| !s.is_empty())
}

/// Checks a `{"success": ..., "error": ...}` body; `success: false` becomes a rejection.
pub(crate) fn ensure_success(body: &Value) -> Result<(), GatewayError> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let message = text(body.get("error"))
            .or_else(|| text(body.get("message")))
            .unwrap_or_else(|| "Request failed".to_string());
        return Err(GatewayError::rejected(200, message));
    }
    Ok(())
}

/// Non-empty strings of a JSON array; anything else reads as empty.
pub(crate) fn strings(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|values| values.iter().filter_map(|v| text(Some(v))).collect())
        .unwrap_or_default()
}

/// RFC 3339, or a naive ISO timestamp taken as UTC.
pub(crate) fn timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    let raw = text(value)?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_pick_first_present_spelling() {
        let doc = json!({"purchaseDate": null, "purchase_date": "2024-06-01", "qty": "2"});
        let fields = Fields::of(&doc).unwrap();
        assert_eq!(
            fields.date(&["purchaseDate", "purchase_date"]),
            parse_date("2024-06-01")
        );
        assert_eq!(fields.number(&["quantity", "qty"]), Some(2.0));
        assert!(Fields::of(&json!([1, 2])).is_err());
    }

    #[test]
    fn should_read_numbers_from_strings() {
        assert_eq!(number(Some(&json!("2.5"))), Some(2.5));
        assert_eq!(number(Some(&json!(3))), Some(3.0));
        assert_eq!(number(Some(&json!("two"))), None);
        assert_eq!(number(None), None);
    }

    #[test]
    fn should_read_form_style_flags() {
        assert!(flag(Some(&json!("Yes"))));
        assert!(flag(Some(&json!(1))));
        assert!(!flag(Some(&json!("no"))));
        assert!(!flag(Some(&Value::Null)));
    }

    #[test]
    fn should_parse_utc_and_naive_timestamps() {
        let zulu = timestamp(Some(&json!("2024-06-01T08:00:00.123456Z"))).unwrap();
        let naive = timestamp(Some(&json!("2024-06-01T08:00:00.123456"))).unwrap();
        assert_eq!(zulu, naive);
        assert_eq!(timestamp(Some(&json!("yesterday"))), None);
    }

    #[test]
    fn should_reject_unsuccessful_bodies() {
        let err = ensure_success(&json!({"success": false, "error": "User not found"})).unwrap_err();
        assert_eq!(err, GatewayError::rejected(200, "User not found"));
        assert!(ensure_success(&json!({"success": true})).is_ok());
        assert!(ensure_success(&json!({"recipes": []})).is_ok());
    }

    #[test]
    fn should_keep_only_text_entries() {
        assert_eq!(
            strings(Some(&json!(["tomato", " ", 3, null, "garlic"]))),
            vec!["tomato".to_string(), "3".to_string(), "garlic".to_string()]
        );
        assert!(strings(Some(&json!("tomato"))).is_empty());
    }

    #[test]
    fn should_clamp_negative_counts_to_zero() {
        assert_eq!(count(Some(&json!(-2))), 0);
        assert_eq!(count(Some(&json!("4"))), 4);
    }
}

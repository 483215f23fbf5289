//! Accessors over the price endpoint's JSON body.

use serde_json::{json, Value};

/// Parsed body of a price request.
///
/// Only the fields the pane reads are interpreted: the top-level `Response`
/// error marker, `RAW[from][to].PRICE` and `DISPLAY[from][to][field]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePayload(Value);

impl PricePayload {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Synthetic error payload for requests that produced no JSON body.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self(json!({
            "Response": "Error",
            "Message": message.into(),
        }))
    }

    /// Whether the body carries the `Response` error marker.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.0.get("Response").is_some_and(|v| !v.is_null())
    }

    /// Error message attached to an error payload, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.0.get("Message").and_then(Value::as_str)
    }

    /// `RAW[from][to].PRICE` as a float.
    #[must_use]
    pub fn raw_price(&self, from: &str, to: &str) -> Option<f64> {
        self.0.get("RAW")?.get(from)?.get(to)?.get("PRICE")?.as_f64()
    }

    /// `DISPLAY[from][to][field]` as display text.
    ///
    /// Non-string values are rendered with their JSON text.
    #[must_use]
    pub fn display(&self, from: &str, to: &str, field: &str) -> Option<String> {
        let value = self.0.get("DISPLAY")?.get(from)?.get(to)?.get(field)?;
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for PricePayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PricePayload {
        PricePayload::new(json!({
            "RAW": { "BTC": { "USDT": { "PRICE": 20000.5 } } },
            "DISPLAY": { "BTC": { "USDT": { "PRICE": "$ 20,000.5", "CHANGE24HOUR": -3 } } }
        }))
    }

    #[test]
    fn success_payload() {
        let p = sample();
        assert!(!p.is_error());
        assert_eq!(p.raw_price("BTC", "USDT"), Some(20000.5));
        assert_eq!(p.display("BTC", "USDT", "PRICE").as_deref(), Some("$ 20,000.5"));
        assert_eq!(p.display("BTC", "USDT", "CHANGE24HOUR").as_deref(), Some("-3"));
    }

    #[test]
    fn missing_paths() {
        let p = sample();
        assert_eq!(p.raw_price("ETH", "USDT"), None);
        assert_eq!(p.display("BTC", "USDT", "LOW24HOUR"), None);
    }

    #[test]
    fn error_marker() {
        let p = PricePayload::new(json!({ "Response": "Error", "Message": "bad pair" }));
        assert!(p.is_error());
        assert_eq!(p.message(), Some("bad pair"));
    }

    #[test]
    fn synthetic_error() {
        let p = PricePayload::error("connection refused");
        assert!(p.is_error());
        assert_eq!(p.message(), Some("connection refused"));
    }

    #[test]
    fn null_response_is_not_error() {
        assert!(!PricePayload::new(json!({ "Response": null })).is_error());
    }
}

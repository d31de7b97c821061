//! Booking response envelope
//!
//! The booking endpoint has answered with three different success shapes
//! over time. They are decoded into [`BookingEnvelope`] in a fixed order and
//! then normalized into a single [`BookingResult`].

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ClientError, ClientResult};
use shared::models::BookingResult;

/// Booking fields as the service nests them
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub when: String,
    pub lanes: u32,
    pub people: u32,
    pub shoes: Vec<f64>,
    pub price: f64,
    #[serde(default)]
    pub booking_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    pub active: bool,
}

impl From<BookingDetails> for BookingResult {
    fn from(details: BookingDetails) -> Self {
        Self {
            when: details.when,
            lanes: details.lanes,
            people: details.people,
            shoes: details.shoes,
            price: details.price,
            id: details.booking_id.or(details.id).unwrap_or_default(),
            active: details.active,
        }
    }
}

/// Success body of the booking endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum BookingEnvelope {
    /// `{"bookingDetails": {...}}`
    Nested(BookingDetails),
    /// `{"body": "<json text>"}`
    Stringified(String),
    /// The booking object itself
    Flat(BookingResult),
}

impl BookingEnvelope {
    /// Parse a raw success body
    pub fn parse(body: &str) -> ClientResult<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))?;
        Self::decode(value)
    }

    /// Classify an already parsed body.
    ///
    /// Order: nested `bookingDetails` object, then string `body`, then flat.
    /// Top-level values that are not objects are rejected.
    pub fn decode(value: Value) -> ClientResult<Self> {
        let Value::Object(mut fields) = value else {
            return Err(ClientError::InvalidResponse(
                "top-level value is not an object".into(),
            ));
        };

        if let Some(Value::Object(details)) = fields.remove("bookingDetails") {
            return details_from(details).map(Self::Nested);
        }

        if let Some(Value::String(body)) = fields.get("body") {
            return Ok(Self::Stringified(body.clone()));
        }

        serde_json::from_value(Value::Object(fields))
            .map(Self::Flat)
            .map_err(|e| ClientError::InvalidResponse(format!("flat booking: {}", e)))
    }

    /// Normalize into the canonical result
    pub fn into_result(self) -> ClientResult<BookingResult> {
        match self {
            Self::Nested(details) => Ok(details.into()),
            Self::Stringified(body) => {
                let value: Value = serde_json::from_str(&body).map_err(|e| {
                    ClientError::InvalidResponse(format!("body field is not JSON: {}", e))
                })?;
                let Value::Object(details) = value else {
                    return Err(ClientError::InvalidResponse(
                        "body field is not an object".into(),
                    ));
                };
                details_from(details).map(Into::into)
            }
            Self::Flat(result) => Ok(result),
        }
    }
}

fn details_from(fields: Map<String, Value>) -> ClientResult<BookingDetails> {
    serde_json::from_value(Value::Object(fields))
        .map_err(|e| ClientError::InvalidResponse(format!("booking details: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize(body: &str) -> ClientResult<BookingResult> {
        BookingEnvelope::parse(body)?.into_result()
    }

    #[test]
    fn test_nested_booking_details() {
        let body = r#"{"bookingDetails":{"when":"2025-11-11T18:00","lanes":1,"people":2,"shoes":[42,43],"price":300,"bookingId":"B1","active":true}}"#;

        let envelope = BookingEnvelope::parse(body).unwrap();
        assert!(matches!(envelope, BookingEnvelope::Nested(_)));

        let result = envelope.into_result().unwrap();
        assert_eq!(
            result,
            BookingResult {
                when: "2025-11-11T18:00".into(),
                lanes: 1,
                people: 2,
                shoes: vec![42.0, 43.0],
                price: 300.0,
                id: "B1".into(),
                active: true,
            }
        );
    }

    #[test]
    fn test_stringified_body_matches_nested() {
        let inner = json!({
            "when": "2025-11-11T18:00",
            "lanes": 1,
            "people": 2,
            "shoes": [42, 43],
            "price": 300,
            "id": "B2",
            "active": true
        });
        let body = json!({ "statusCode": 200, "body": inner.to_string() }).to_string();

        let envelope = BookingEnvelope::parse(&body).unwrap();
        assert!(matches!(envelope, BookingEnvelope::Stringified(_)));

        let nested = json!({ "bookingDetails": inner }).to_string();
        let expected = normalize(&nested).unwrap();
        assert_eq!(expected.id, "B2");
        assert_eq!(envelope.into_result().unwrap(), expected);
    }

    #[test]
    fn test_booking_id_preferred_over_id() {
        let body = json!({"bookingDetails": {
            "when": "2025-11-11T18:00", "lanes": 1, "people": 1, "shoes": [40],
            "price": 220, "bookingId": "B9", "id": "other", "active": false
        }});
        assert_eq!(normalize(&body.to_string()).unwrap().id, "B9");
    }

    #[test]
    fn test_missing_ids_become_empty() {
        let body = json!({"bookingDetails": {
            "when": "2025-11-11T18:00", "lanes": 1, "people": 1, "shoes": [40],
            "price": 220, "active": true
        }});
        assert_eq!(normalize(&body.to_string()).unwrap().id, "");
    }

    #[test]
    fn test_flat_object() {
        let body = json!({
            "when": "2025-12-01T10:30", "lanes": 2, "people": 5,
            "shoes": [38, 39, 40, 41, 42], "price": 950, "id": "F1", "active": true
        });
        let envelope = BookingEnvelope::parse(&body.to_string()).unwrap();
        assert!(matches!(envelope, BookingEnvelope::Flat(_)));
        assert_eq!(envelope.into_result().unwrap().people, 5);
    }

    #[test]
    fn test_non_object_is_rejected() {
        for body in ["[]", "\"ok\"", "42", "null", "not json"] {
            assert!(
                matches!(normalize(body), Err(ClientError::InvalidResponse(_))),
                "body {body:?}"
            );
        }
    }

    #[test]
    fn test_stringified_body_must_be_json() {
        let body = json!({ "body": "<html>" }).to_string();
        assert!(matches!(
            normalize(&body),
            Err(ClientError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_unknown_object_shape_is_rejected() {
        let body = json!({ "status": "ok" }).to_string();
        assert!(matches!(
            normalize(&body),
            Err(ClientError::InvalidResponse(_))
        ));
    }
}

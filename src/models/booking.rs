use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::validation::{FieldIssue, ValidationError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Pickup,
    Visit,
}

impl ServiceType {
    pub const ALLOWED: &'static [&'static str] = &["pickup", "visit"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Pickup => "pickup",
            ServiceType::Visit => "visit",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pickup" => Some(ServiceType::Pickup),
            "visit" => Some(ServiceType::Visit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

/// Free-form booking fields, stored exactly as submitted. Text fields also
/// accept JSON numbers and booleans, kept in their string form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub centre_name: Option<String>,
    /// Usually one of `engine`, `battery`, `brakes`, `general`; not enforced.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obd_data: Option<serde_json::Value>,
    /// Estimate snapshot taken by the client at booking time. Any JSON shape
    /// is accepted and stored untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_estimate: Option<serde_json::Value>,
}

/// Reads a text field that may arrive as a string, number or boolean.
/// Objects and arrays are rejected.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(serde_json::Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::invalid_type(
            de::Unexpected::Other(if other.is_array() { "array" } else { "object" }),
            &"a string, number or boolean",
        )),
    }
}

/// Booking body as sent by the mobile client. Keys outside the declared
/// fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    #[serde(flatten)]
    pub details: BookingDetails,
    pub service_type: Option<String>,
}

impl BookingPayload {
    pub fn validate(self) -> Result<NewBooking, ValidationError> {
        let service_type = match self.service_type.as_deref() {
            None | Some("") => Err(FieldIssue::Required {
                path: "serviceType",
            }),
            Some(raw) => ServiceType::parse(raw).ok_or_else(|| FieldIssue::NotAllowed {
                path: "serviceType",
                value: raw.to_string(),
                allowed: ServiceType::ALLOWED,
            }),
        };

        match service_type {
            Ok(service_type) => Ok(NewBooking {
                details: self.details,
                service_type,
            }),
            Err(issue) => Err(ValidationError {
                entity: "Booking",
                issues: vec![issue],
            }),
        }
    }
}

/// A booking that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub details: BookingDetails,
    pub service_type: ServiceType,
}

impl NewBooking {
    pub fn into_booking(self, id: String, created_at: DateTime<Utc>) -> Booking {
        Booking {
            id,
            details: self.details,
            service_type: self.service_type,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub details: BookingDetails,
    pub service_type: ServiceType,
    pub created_at: DateTime<Utc>,
}

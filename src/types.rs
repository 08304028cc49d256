use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{PosFlowError, Result};

/// Response body of a resource helper, kept exactly as the backend sent it.
///
/// The backend wraps payloads as `{ success, data, message }`, but nothing
/// here enforces that shape: accessors read the fields when present and
/// [`Envelope::as_value`] / [`Envelope::into_value`] return the untouched body.
/// Envelopes come from 2xx responses, so a missing `success` flag (or an
/// empty body) reads as success.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Envelope(serde_json::Value);

impl Envelope {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn success(&self) -> bool {
        self.0
            .get("success")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(true)
    }

    pub fn data(&self) -> Option<&serde_json::Value> {
        self.0.get("data")
    }

    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(serde_json::Value::as_str)
    }

    /// Machine-readable error detail, if the body carries a well-formed one.
    pub fn error_info(&self) -> Option<ErrorInfo> {
        serde_json::from_value(self.0.get("error")?.clone()).ok()
    }

    /// Decodes `data` into a typed value.
    pub fn data_as<D: DeserializeOwned>(&self) -> Result<D> {
        let data = self.data().cloned().unwrap_or(serde_json::Value::Null);
        serde_json::from_value(data)
            .map_err(|err| PosFlowError::Decode(format!("unexpected envelope data: {err}")))
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for Envelope {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Machine-readable error detail attached to failed envelopes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub details: Option<String>,
}

/// Lifecycle state of an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

/// Stock delta for one product; `quantity` may be negative.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjustment {
    pub product_id: String,
    pub quantity: i64,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AvailabilityUpdate {
    pub available: bool,
}

#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

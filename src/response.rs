//! Decoding and classification of UPS track replies.
//!
//! UPS answers every inquiry with HTTP 200 and puts either a `TrackResponse`
//! or a `Fault` object in the body. The raw body is decoded with both keys
//! optional, then narrowed to a `ResponseEnvelope` holding exactly one of them.

use serde::Deserialize;

use crate::error::TrackingError;
use crate::models::{CodeDescr, TrackResponse, normalize_timestamps, null_as_default};

/// Response status codes treated as success.
///
/// Only "1" has been observed in successful replies.
pub const SUCCESS_STATUS_CODES: &[&str] = &["1"];

pub fn is_success_status(code: &str) -> bool {
    SUCCESS_STATUS_CODES.contains(&code)
}

/// UPS fault envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Fault {
    #[serde(rename = "faultcode", alias = "Faultcode")]
    #[serde(deserialize_with = "null_as_default")]
    pub fault_code: String,
    #[serde(rename = "faultstring", alias = "Faultstring")]
    #[serde(deserialize_with = "null_as_default")]
    pub fault_string: String,
    #[serde(alias = "Detail")]
    #[serde(deserialize_with = "null_as_default")]
    pub detail: FaultDetail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FaultDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub errors: FaultErrors,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FaultErrors {
    #[serde(deserialize_with = "null_as_default")]
    pub error_detail: ErrorDetail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ErrorDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub severity: String,
    #[serde(deserialize_with = "null_as_default")]
    pub primary_error_code: CodeDescr,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct RawEnvelope {
    track_response: Option<TrackResponse>,
    fault: Option<Fault>,
}

/// A decoded reply: either a track response or a fault, never both.
///
/// Only a fault with a non-empty code counts as a fault. Anything else is
/// narrowed to a track response (empty when absent), so it goes through the
/// status check.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawEnvelope")]
pub enum ResponseEnvelope {
    Track(TrackResponse),
    Fault(Fault),
}

impl From<RawEnvelope> for ResponseEnvelope {
    fn from(raw: RawEnvelope) -> Self {
        match (raw.track_response, raw.fault) {
            (_, Some(fault)) if !fault.fault_code.is_empty() => ResponseEnvelope::Fault(fault),
            (track, _) => ResponseEnvelope::Track(track.unwrap_or_default()),
        }
    }
}

impl ResponseEnvelope {
    /// Turn the envelope into the caller-facing result: faults and
    /// non-success statuses become errors.
    pub fn into_result(self) -> Result<TrackResponse, TrackingError> {
        match self {
            ResponseEnvelope::Fault(fault) => {
                let detail = fault.detail.errors.error_detail;
                tracing::warn!(
                    "UPS fault {}: {} ({})",
                    fault.fault_code,
                    detail.primary_error_code.description,
                    detail.primary_error_code.code
                );
                Err(TrackingError::CarrierFault {
                    code: fault.fault_code,
                    severity: detail.severity,
                    primary_code: detail.primary_error_code.code,
                    description: detail.primary_error_code.description,
                })
            }
            ResponseEnvelope::Track(track) => {
                let status = &track.response.response_status;
                if !is_success_status(&status.code) {
                    tracing::warn!("UPS status {}: {}", status.code, status.description);
                    return Err(TrackingError::CarrierStatus {
                        code: status.code.clone(),
                        description: status.description.clone(),
                    });
                }
                Ok(track)
            }
        }
    }
}

/// Decode a reply body, classify it, and normalize activity timestamps.
pub fn interpret_response(body: &str) -> Result<TrackResponse, TrackingError> {
    let envelope: ResponseEnvelope =
        serde_json::from_str(body).map_err(TrackingError::Deserialization)?;

    let mut track = envelope.into_result()?;
    normalize_timestamps(&mut track.shipment.package.activity);

    Ok(track)
}

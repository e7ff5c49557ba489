//! Client for the UPS package tracking service.
//!
//! `TrackingClient::track_activity` sends one activity inquiry and returns
//! the decoded `TrackResponse`, or a `TrackingError` when the request fails
//! or UPS answers with a fault or a non-success status.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod presenter;
pub mod request;
pub mod response;
pub mod transport;

pub use client::{TrackingClient, UPS_TEST_TRACKING_URL, UPS_TRACKING_URL};
pub use error::TrackingError;
pub use models::{Activity, CodeDescr, TrackResponse, Weight, parse_timestamp};
pub use request::{Credentials, TrackingRequest};
pub use response::{ResponseEnvelope, SUCCESS_STATUS_CODES, interpret_response, is_success_status};
pub use transport::{ReqwestTransport, Transport};

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by `TrackingClient::track_activity`.
#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("failed to serialize track request: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("failed to build track request: {0}")]
    RequestBuild(#[source] BoxError),

    #[error("failed to send track request: {0}")]
    Transport(#[source] BoxError),

    #[error("failed to read tracking response: {0}")]
    ResponseRead(#[source] BoxError),

    #[error("failed to parse tracking response: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The service answered with a fault envelope.
    #[error("UPS error, fault code: {code} severity: {severity} descr: {description}")]
    CarrierFault {
        code: String,
        severity: String,
        primary_code: String,
        description: String,
    },

    /// The service answered with a track response whose status is not a success code.
    #[error("UPS error, status code: {code} descr: {description}")]
    CarrierStatus { code: String, description: String },
}

impl TrackingError {
    /// True when the service itself rejected the inquiry, as opposed to a
    /// local or network failure.
    pub fn is_carrier_error(&self) -> bool {
        matches!(
            self,
            TrackingError::CarrierFault { .. } | TrackingError::CarrierStatus { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carrier_errors_are_classified() {
        let fault = TrackingError::CarrierFault {
            code: "Client".to_string(),
            severity: "Hard".to_string(),
            primary_code: "250003".to_string(),
            description: "Invalid Access License number".to_string(),
        };
        let status = TrackingError::CarrierStatus {
            code: "0".to_string(),
            description: "Failure".to_string(),
        };

        assert!(fault.is_carrier_error());
        assert!(status.is_carrier_error());
        assert!(!TrackingError::Transport("connection refused".into()).is_carrier_error());
    }

    #[test]
    fn transport_errors_keep_their_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = TrackingError::Transport(Box::new(io));

        assert_eq!(err.to_string(), "failed to send track request: connection refused");
        let source = err.source().unwrap();
        assert!(source.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn fault_message_names_code_and_description() {
        let fault = TrackingError::CarrierFault {
            code: "Client".to_string(),
            severity: "Hard".to_string(),
            primary_code: "250003".to_string(),
            description: "Invalid Access License number".to_string(),
        };

        assert_eq!(
            fault.to_string(),
            "UPS error, fault code: Client severity: Hard descr: Invalid Access License number"
        );
    }
}

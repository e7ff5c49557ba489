use serde::{Deserialize, Serialize};

pub const TRACK_ACTION: &str = "Track";
pub const ACTIVITY_OPTION: &str = "activity";

/// UPS account credentials, passed through to the service untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub access_key: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            access_key: access_key.into(),
        }
    }
}

/// JSON body of a UPS track request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackingRequest {
    pub security: Security,
    pub track_request: TrackRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Security {
    pub username_token: UsernameToken,
    #[serde(rename = "UPSServiceAccessToken")]
    pub service_access_token: ServiceAccessToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UsernameToken {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceAccessToken {
    pub access_license_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackRequest {
    pub request: RequestOptions,
    pub inquiry_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestOptions {
    pub request_action: String,
    pub request_option: String,
}

impl TrackingRequest {
    /// Activity inquiry for a single tracking number. The number is not
    /// validated here; UPS answers malformed ones with a fault.
    pub fn activity(credentials: &Credentials, tracking_number: &str) -> Self {
        Self {
            security: Security {
                username_token: UsernameToken {
                    username: credentials.username.clone(),
                    password: credentials.password.clone(),
                },
                service_access_token: ServiceAccessToken {
                    access_license_number: credentials.access_key.clone(),
                },
            },
            track_request: TrackRequest {
                request: RequestOptions {
                    request_action: TRACK_ACTION.to_string(),
                    request_option: ACTIVITY_OPTION.to_string(),
                },
                inquiry_number: tracking_number.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_ups_wire_layout() {
        let credentials = Credentials::new("user", "pwd", "access_key");
        let request = TrackingRequest::activity(&credentials, "1Z12345E0205271688");

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["Security"]["UsernameToken"]["Username"], "user");
        assert_eq!(value["Security"]["UsernameToken"]["Password"], "pwd");
        assert_eq!(
            value["Security"]["UPSServiceAccessToken"]["AccessLicenseNumber"],
            "access_key"
        );
        assert_eq!(value["TrackRequest"]["Request"]["RequestAction"], "Track");
        assert_eq!(value["TrackRequest"]["Request"]["RequestOption"], "activity");
        assert_eq!(value["TrackRequest"]["InquiryNumber"], "1Z12345E0205271688");
    }

    #[test]
    fn empty_tracking_number_is_passed_through() {
        let credentials = Credentials::new("user", "pwd", "access_key");
        let request = TrackingRequest::activity(&credentials, "");

        assert_eq!(request.track_request.inquiry_number, "");
    }
}

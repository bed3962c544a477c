// Error taxonomy shared by the clients and the polling service.
//
// The original tooling signalled shape mismatches with bare panics; here every
// failure mode is a distinct variant so call sites can match exhaustively.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatchError {
    /// Network-level failure talking to the review API (DNS, connect, timeout).
    #[error("review API request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The review API answered with something other than 200.
    #[error("review API endpoint unavailable: HTTP {status}")]
    EndpointUnavailable { status: StatusCode },

    /// The response body was not valid JSON.
    #[error("failed to decode review API response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// The decoded payload does not have the expected structure.
    #[error("unexpected response shape: {0}")]
    Shape(String),

    /// A homework record lacks a required field or carries an unknown status.
    #[error("bad homework record: {0}")]
    MissingField(String),

    /// The messaging backend rejected or failed the send.
    #[error("failed to deliver notification: {0}")]
    Delivery(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_unavailable_carries_status() {
        let err = WatchError::EndpointUnavailable {
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(
            err.to_string(),
            "review API endpoint unavailable: HTTP 503 Service Unavailable"
        );
    }

    #[test]
    fn test_shape_and_missing_field_messages() {
        let shape = WatchError::Shape("homeworks is not a list".to_string());
        assert!(shape.to_string().contains("homeworks is not a list"));

        let field = WatchError::MissingField("unknown status: done".to_string());
        assert!(field.to_string().contains("unknown status: done"));
    }
}

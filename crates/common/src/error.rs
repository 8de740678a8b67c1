//! Common error types shared across crates.

use thiserror::Error;

/// Top-level service error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::BadRequest`] → 400
/// - [`ServiceError::EncryptionFailure`] → 500
/// - [`ServiceError::DecryptionFailure`] → 400
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was malformed — missing field or invalid JSON.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Encryption failed in the cipher layer.
    #[error("encryption failure: {0}")]
    EncryptionFailure(String),

    /// Decryption failed — malformed envelope, bad padding, or wrong key.
    ///
    /// All decrypt failure causes share this variant at the service boundary;
    /// the envelope is client-supplied, so every cause is answered as a 400.
    #[error("decryption failure: {0}")]
    DecryptionFailure(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::BadRequest(_) => 400,
            ServiceError::EncryptionFailure(_) => 500,
            ServiceError::DecryptionFailure(_) => 400,
        }
    }

    /// Short machine-readable code used in the JSON error body.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::BadRequest(_) => "bad_request",
            ServiceError::EncryptionFailure(_) => "encryption_failed",
            ServiceError::DecryptionFailure(_) => "decryption_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_codes() {
        assert_eq!(ServiceError::BadRequest("x".into()).http_status(), 400);
        assert_eq!(
            ServiceError::EncryptionFailure("x".into()).http_status(),
            500
        );
        assert_eq!(
            ServiceError::DecryptionFailure("x".into()).http_status(),
            400
        );
    }

    #[test]
    fn machine_codes() {
        assert_eq!(ServiceError::BadRequest("x".into()).code(), "bad_request");
        assert_eq!(
            ServiceError::DecryptionFailure("x".into()).code(),
            "decryption_failed"
        );
    }

    #[test]
    fn display_includes_message() {
        let e = ServiceError::BadRequest("missing data field".into());
        assert!(e.to_string().contains("missing data field"));
    }
}

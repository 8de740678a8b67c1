//! Axum request handlers for all service endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::protocol::{
    DecryptRequest, DecryptResponse, EncryptRequest, EncryptResponse, ErrorResponse,
    HealthResponse,
};
use common::ServiceError;
use tracing::warn;

use crate::crypto::cipher::{decrypt_payload, encrypt_payload};
use super::state::AppState;

/// `POST /encrypt` — encrypt the `data` field of the request payload.
///
/// Responds with `{"encryptedData": "<envelope>"}`. A missing `data` field is
/// a 400; cipher failures are answered as errors rather than crashing the
/// handler.
pub async fn encrypt(State(state): State<AppState>, Json(req): Json<EncryptRequest>) -> Response {
    let Some(data) = req.data else {
        return error_response(ServiceError::BadRequest("missing data field".into()));
    };

    match encrypt_payload(&data, state.keys.key(), state.keys.iv()) {
        Ok(envelope) => (
            StatusCode::OK,
            Json(EncryptResponse {
                encrypted_data: envelope,
            }),
        )
            .into_response(),
        Err(e) => {
            warn!(error = %e, "encryption failed");
            error_response(ServiceError::EncryptionFailure(e.to_string()))
        }
    }
}

/// `POST /decrypt` — decrypt the `encryptedData` field of the request payload.
///
/// Responds with `{"data": "<plaintext>"}`. Every decrypt failure cause
/// (bad Base64, bad hex, bad padding, wrong key) is answered as a 400.
pub async fn decrypt(State(state): State<AppState>, Json(req): Json<DecryptRequest>) -> Response {
    let Some(envelope) = req.encrypted_data else {
        return error_response(ServiceError::BadRequest(
            "missing encryptedData field".into(),
        ));
    };

    match decrypt_payload(&envelope, state.keys.key(), state.keys.iv()) {
        Ok(data) => (StatusCode::OK, Json(DecryptResponse { data })).into_response(),
        Err(e) => {
            warn!(error = %e, "decryption failed");
            error_response(ServiceError::DecryptionFailure(e.to_string()))
        }
    }
}

/// `GET /health` — liveness check.
///
/// Key material is derived before the listener binds, so a serving process is
/// always ready; the body reports the configured cipher method.
pub async fn health(State(state): State<AppState>) -> Response {
    let body = HealthResponse {
        status: "ok".into(),
        cipher_method: state.cipher_method.to_string(),
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ErrorResponse::new("not_found", "the requested resource does not exist");
    (StatusCode::NOT_FOUND, Json(err))
}

/// Convert a [`ServiceError`] into its JSON error response.
fn error_response(err: ServiceError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = ErrorResponse::new(err.code(), err.to_string());
    (status, Json(body)).into_response()
}

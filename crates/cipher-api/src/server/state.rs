//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::crypto::{CipherMethod, KeyMaterial};

/// Application state shared across all request handlers.
///
/// The key material is derived exactly once before the router is built and is
/// never mutated afterwards, so handlers can run fully in parallel with no
/// locking. Cloning the state clones an `Arc`, not the material itself.
#[derive(Clone)]
pub struct AppState {
    /// Fixed key and IV for the process lifetime.
    pub keys: Arc<KeyMaterial>,
    /// Cipher method the service was configured with.
    pub cipher_method: CipherMethod,
}

impl AppState {
    /// Create a new [`AppState`] from derived key material.
    pub fn new(keys: Arc<KeyMaterial>, cipher_method: CipherMethod) -> Self {
        Self {
            keys,
            cipher_method,
        }
    }
}

impl Default for AppState {
    /// Creates an [`AppState`] with material derived from fixed test secrets,
    /// suitable for tests.
    fn default() -> Self {
        Self::new(
            Arc::new(KeyMaterial::derive("secretKey", "secretIV")),
            CipherMethod::Aes256Cbc,
        )
    }
}

//! AES-256-CBC payload encryption primitives.
//!
//! This module is intentionally free of HTTP dependencies. It provides key
//! derivation and the encrypt/decrypt operations used by the request handlers.
//!
//! # Ciphertext format
//!
//! ```text
//! base64(ascii-hex(ciphertext))
//! ```
//!
//! The raw CBC output is rendered as a lowercase hex string and that string's
//! ASCII bytes are then Base64-encoded. Existing stored ciphertext uses this
//! double encoding, so it must not change.

pub mod cipher;
pub mod derive;

pub use cipher::{IV_LEN, KEY_LEN};
pub use derive::KeyMaterial;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The configured cipher method names an algorithm this build cannot honour.
#[derive(Debug, Error)]
#[error("unsupported cipher method: {0} (expected aes-256-cbc)")]
pub struct UnsupportedMethod(pub String);

/// Identifier of the symmetric cipher and mode the service runs with.
///
/// Only AES-256 in CBC mode is implemented. The identifier is still
/// configuration-driven so that a deployment configured for anything else
/// refuses to start instead of silently producing incompatible ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMethod {
    Aes256Cbc,
}

impl FromStr for CipherMethod {
    type Err = UnsupportedMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aes-256-cbc" => Ok(CipherMethod::Aes256Cbc),
            _ => Err(UnsupportedMethod(s.to_owned())),
        }
    }
}

impl fmt::Display for CipherMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherMethod::Aes256Cbc => f.write_str("aes-256-cbc"),
        }
    }
}

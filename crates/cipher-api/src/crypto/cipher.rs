//! AES-256-CBC encryption and decryption of individual text payloads.
//!
//! **Determinism:** the key and IV are fixed for the process lifetime, so
//! identical plaintext always produces identical ciphertext. There is no
//! nonce freshness; callers must treat equal envelopes as equal plaintexts.
//! This is a documented property of the scheme, not something to "fix" here,
//! since existing ciphertext depends on it.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of a CBC initialisation vector (one AES block).
pub const IV_LEN: usize = 16;

/// AES block size in bytes; ciphertext length is always a multiple of this.
pub const BLOCK_LEN: usize = 16;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Errors produced when encrypting a payload.
#[derive(Debug, Error)]
pub enum EncryptError {
    /// The key or IV has the wrong length for AES-256-CBC.
    #[error("invalid key or IV length: expected {KEY_LEN}-byte key and {IV_LEN}-byte IV")]
    InvalidKeyIvLength,
}

/// Errors produced when decrypting an envelope.
///
/// The causes are kept distinct so tests (and logs) can tell malformed
/// envelopes apart from wrong-key failures, even though the HTTP layer
/// answers all of them with the same status.
#[derive(Debug, Error)]
pub enum DecryptError {
    /// The key or IV has the wrong length for AES-256-CBC.
    #[error("invalid key or IV length: expected {KEY_LEN}-byte key and {IV_LEN}-byte IV")]
    InvalidKeyIvLength,

    /// The envelope is not valid Base64.
    #[error("envelope is not valid base64")]
    Base64,

    /// The Base64 content does not decode to a hex-encoded ciphertext.
    #[error("envelope does not contain hex-encoded ciphertext")]
    Hex,

    /// The ciphertext is empty or not aligned to the cipher block size.
    #[error("ciphertext is empty or not a whole number of cipher blocks")]
    Truncated,

    /// PKCS#7 unpadding failed — wrong key/IV or corrupted ciphertext.
    #[error("bad padding: wrong key or corrupted ciphertext")]
    Padding,

    /// The decrypted bytes are not valid UTF-8 text.
    #[error("decrypted payload is not valid UTF-8")]
    Utf8,
}

/// Encrypt a plaintext payload using AES-256-CBC with PKCS#7 padding.
///
/// The raw ciphertext is rendered as a lowercase hex string, and the hex
/// string's ASCII bytes are Base64-encoded to form the envelope. The hex leg
/// is redundant with Base64 but is the format existing envelopes use, so both
/// encodings are applied in that exact order.
///
/// Empty plaintext is valid and encrypts to a single padding block.
///
/// # Errors
///
/// Returns [`EncryptError::InvalidKeyIvLength`] if `key` is not [`KEY_LEN`]
/// bytes or `iv` is not [`IV_LEN`] bytes.
pub fn encrypt_payload(plaintext: &str, key: &[u8], iv: &[u8]) -> Result<String, EncryptError> {
    let cipher = Aes256CbcEnc::new_from_slices(key, iv)
        .map_err(|_| EncryptError::InvalidKeyIvLength)?;
    let raw = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());
    Ok(STANDARD.encode(hex::encode(raw)))
}

/// Decrypt an envelope produced by [`encrypt_payload`] back to plaintext.
///
/// # Errors
///
/// Each decoding stage reports its own [`DecryptError`] variant; see the enum
/// docs. A wrong key or tampered ciphertext almost always surfaces as
/// [`DecryptError::Padding`].
pub fn decrypt_payload(envelope: &str, key: &[u8], iv: &[u8]) -> Result<String, DecryptError> {
    let hex_bytes = STANDARD
        .decode(envelope)
        .map_err(|_| DecryptError::Base64)?;

    // The decoded bytes are the ASCII hex rendering of the raw ciphertext.
    let raw = hex::decode(&hex_bytes).map_err(|_| DecryptError::Hex)?;
    if raw.is_empty() || raw.len() % BLOCK_LEN != 0 {
        return Err(DecryptError::Truncated);
    }

    let cipher = Aes256CbcDec::new_from_slices(key, iv)
        .map_err(|_| DecryptError::InvalidKeyIvLength)?;
    let plain = cipher
        .decrypt_padded_vec_mut::<Pkcs7>(&raw)
        .map_err(|_| DecryptError::Padding)?;

    String::from_utf8(plain).map_err(|_| DecryptError::Utf8)
}

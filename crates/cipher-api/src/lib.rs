//! `cipher-api` — a small HTTP service that encrypts and decrypts text
//! payloads with AES-256-CBC under a key and IV derived once at startup.
//!
//! Exposed as a library so integration tests can build the router without
//! spawning the binary.

pub mod config;
pub mod crypto;
pub mod server;
pub mod telemetry;

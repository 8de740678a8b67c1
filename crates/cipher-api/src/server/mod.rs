//! Axum HTTP server, routing, and middleware.
//!
//! # Responsibilities
//! - Define the Axum router with all routes and shared middleware.
//! - Inject shared application state (`AppState`) into handlers.
//! - Convert cipher-layer failures into JSON error responses.

pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

//! HTTP surface: axum router, session-backed handlers, and the caller page.

pub mod handler;
pub mod routes;
pub mod view;

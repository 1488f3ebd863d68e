//! Axum-based HTTP server for the promptlens API.
//!
//! This module wires up the two public routes — the image-analysis endpoint
//! and the diagnostics probe — along with CORS, request-id, body-limit and
//! trace layers.
//!
//! # Components
//!
//! - `handlers`: Implementation of the analyze and diagnostics endpoints.
//! - `middleware`: Request ID tracking layers.
//! - `routes`: The main router configuration that ties everything together.

mod handlers;
mod middleware;
mod routes;

pub use routes::{create_router, AppState};

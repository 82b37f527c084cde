//! HTTP interface (axum router + handlers).
//!
//! - `handlers.rs`: one handler per endpoint
//! - `dto.rs`: response bodies
//! - `errors.rs`: mapping of crate errors to JSON error responses

use crate::application::service::ReceiptService;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

pub mod dto;
pub mod errors;
pub mod handlers;

/// Builds the full HTTP router around a shared `ReceiptService`.
pub fn router(service: Arc<ReceiptService>) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/{id}/points", get(handlers::get_points))
        .with_state(service)
}

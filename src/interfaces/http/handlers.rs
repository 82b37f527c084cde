use super::dto::{PointsResponse, ProcessReceiptResponse};
use super::errors::json_rejection;
use crate::application::service::ReceiptService;
use crate::domain::receipt::ReceiptSubmission;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

pub async fn process_receipt(
    State(service): State<Arc<ReceiptService>>,
    body: Result<Json<ReceiptSubmission>, JsonRejection>,
) -> Response {
    let Json(submission) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection(rejection),
    };

    match service.process_receipt(submission).await {
        Ok(id) => Json(ProcessReceiptResponse { id: id.to_string() }).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_points(
    State(service): State<Arc<ReceiptService>>,
    Path(id): Path<String>,
) -> Response {
    match service.points(&id).await {
        Ok(points) => Json(PointsResponse { points }).into_response(),
        Err(e) => e.into_response(),
    }
}

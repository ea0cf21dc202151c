//! Response bodies for drink endpoints.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgment carrying a human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AveragePriceBody {
    /// Mean price, null when the catalog is empty.
    pub average_price: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MaxDurationBody {
    pub max_duration: i32,
    pub drink_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MinDurationBody {
    /// Shortest duration, null when the catalog is empty.
    pub min_duration: Option<i32>,
}

pub fn message(status: StatusCode, text: &str) -> (StatusCode, Json<MessageBody>) {
    (
        status,
        Json(MessageBody {
            message: text.to_string(),
        }),
    )
}

pub fn created(text: &str) -> (StatusCode, Json<MessageBody>) {
    message(StatusCode::CREATED, text)
}

pub fn ok(text: &str) -> (StatusCode, Json<MessageBody>) {
    message(StatusCode::OK, text)
}

//! Response body helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub const PROVIDER_UPDATED: &str = "Provider updated";
pub const PROVIDER_DELETED: &str = "Provider deleted";

#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn message(message: &'static str) -> (StatusCode, Json<MessageBody>) {
    ok(MessageBody { message })
}

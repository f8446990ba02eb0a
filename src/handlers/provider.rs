//! Provider handlers: list, create, update, delete.

use crate::error::AppError;
use crate::response::{created, message, ok, PROVIDER_DELETED, PROVIDER_UPDATED};
use crate::state::AppState;
use crate::validation::validate_provider;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}

/// A body that is missing or not JSON validates like an empty one. Failures
/// to read the body at all (too large, broken stream) keep their own status.
fn body_or_null(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    match body {
        Ok(Json(v)) => Ok(v),
        Err(
            rejection @ (JsonRejection::MissingJsonContentType(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::JsonDataError(_)),
        ) => {
            tracing::debug!(error = %rejection, "unparsable request body");
            Ok(Value::Null)
        }
        Err(rejection) => Err(rejection.into()),
    }
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.list().await?;
    Ok(ok(rows))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let input = validate_provider(&body_or_null(body)?)?;
    let row = state.store.insert(&input).await?;
    tracing::info!(id = row.id, service = %row.service, "provider created");
    Ok(created(row))
}

/// No existence check: an unknown id still answers 200.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let input = validate_provider(&body_or_null(body)?)?;
    let id = parse_id(&id_str)?;
    let affected = state.store.update(id, &input).await?;
    tracing::debug!(id, affected, "provider update");
    Ok(message(PROVIDER_UPDATED))
}

/// Idempotent: deleting an unknown id still answers 200.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let affected = state.store.delete(id).await?;
    tracing::debug!(id, affected, "provider delete");
    Ok(message(PROVIDER_DELETED))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(parse_id("abc").is_err());
        assert!(parse_id("4.2").is_err());
    }
}

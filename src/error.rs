use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Not found")]
    NotFound,

    #[error("No data provided.")]
    NoDataProvided,

    #[error("Course already exist.")]
    CourseAlreadyExist,

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        // The unique index on courses.name is the race backstop for the
        // read-then-write duplicate check in create/update.
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::CourseAlreadyExist,
            _ => AppError::Database(err),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            AppError::NoDataProvided => (StatusCode::BAD_REQUEST, "No data provided.".to_string()),
            AppError::CourseAlreadyExist => {
                (StatusCode::BAD_REQUEST, "Course already exist.".to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Database(e) => {
                error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query};
use axum::response::{IntoResponse, Response};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Deserialize;
use serde_json::Value;

use crate::db::repository;
use crate::error::AppError;
use crate::models::{CoursePage, validate_name};
use crate::state::AppState;

#[derive(Deserialize)]
struct PageParams {
    #[serde(default = "default_page")]
    page: i64,
    #[serde(default = "default_per_page")]
    per_page: i64,
}

fn default_page() -> i64 {
    1
}

fn default_per_page() -> i64 {
    10
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses).post(create_course))
        .route(
            "/courses/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<CoursePage>, AppError> {
    let page = params.page.max(1);
    let per_page = params.per_page.max(1);

    let (items, total) = repository::fetch_course_page(&state.db, page, per_page).await?;
    Ok(Json(CoursePage {
        page,
        per_page,
        total,
        items,
    }))
}

async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let course = repository::find_course_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(course).into_response())
}

async fn create_course(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let payload = parse_body(&body)?;

    // Schema failures are returned as a field -> messages map, never through
    // the AppError translator.
    let name = match validate_name(&payload) {
        Ok(name) => name,
        Err(errors) => return Ok((StatusCode::BAD_REQUEST, Json(errors)).into_response()),
    };

    if repository::find_course_by_name(&state.db, &name)
        .await?
        .is_some()
    {
        return Err(AppError::CourseAlreadyExist);
    }

    let course = repository::insert_course(&state.db, &name).await?;
    Ok((StatusCode::CREATED, Json(course)).into_response())
}

async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<Response, AppError> {
    let existing = repository::find_course_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound)?;

    let payload = parse_body(&body)?;
    let name = match validate_name(&payload) {
        Ok(name) => name,
        Err(errors) => return Ok((StatusCode::BAD_REQUEST, Json(errors)).into_response()),
    };

    // Renaming onto another course's name is rejected the same way create
    // rejects a duplicate; renaming onto the current name is a no-op update.
    if let Some(other) = repository::find_course_by_name(&state.db, &name).await? {
        if other.id != existing.id {
            return Err(AppError::CourseAlreadyExist);
        }
    }

    let course = repository::update_course_name(&state.db, id, &name).await?;
    Ok(Json(course).into_response())
}

async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    repository::delete_course(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// An absent body, or one that decodes to an empty value (`null`, `""`,
/// `{}`, `[]`), is "no data provided"; anything that is not JSON at all is
/// a plain bad request.
fn parse_body(body: &Bytes) -> Result<Value, AppError> {
    if body.is_empty() {
        return Err(AppError::NoDataProvided);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Failed to decode JSON object: {}", e)))?;

    match &value {
        Value::Null => Err(AppError::NoDataProvided),
        Value::String(s) if s.is_empty() => Err(AppError::NoDataProvided),
        Value::Object(map) if map.is_empty() => Err(AppError::NoDataProvided),
        Value::Array(items) if items.is_empty() => Err(AppError::NoDataProvided),
        _ => Ok(value),
    }
}

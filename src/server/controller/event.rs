use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        event::{CreateEventDto, EventDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::validation::ValidatedJson,
        model::event::RecordEventParam,
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Record an event.
///
/// # Returns
/// - `201 Created` - The stored event with its generated ID
/// - `400 Bad Request` - Missing or blank `type`/`name`, non-object payload, unknown fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Successfully recorded event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_event(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RecordEventParam::from_dto(payload);
    let event = EventService::new(&state.db).record(param).await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// List events in the order they were recorded.
#[utoipa::path(
    get,
    path = "/events",
    tag = EVENT_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Successfully retrieved events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db)
        .get_paginated(params.into_pagination())
        .await?;

    let events: Vec<EventDto> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(events)))
}

/// Get an event by ID.
#[utoipa::path(
    get,
    path = "/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        coffee::{CoffeeDto, CreateCoffeeDto, UpdateCoffeeDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::validation::ValidatedJson,
        model::coffee::{CreateCoffeeParam, UpdateCoffeeParam},
        service::coffee::CoffeeService,
        state::AppState,
    },
};

/// Tag for grouping coffee endpoints in OpenAPI documentation
pub static COFFEE_TAG: &str = "coffee";

/// Create a new coffee.
///
/// Flavors are given by name. Names that match an existing flavor reuse it,
/// unknown names create a new flavor in the same transaction as the coffee.
///
/// # Returns
/// - `201 Created` - The created coffee with its flavors
/// - `400 Bad Request` - Missing, blank, mistyped or unknown fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/coffees",
    tag = COFFEE_TAG,
    request_body = CreateCoffeeDto,
    responses(
        (status = 201, description = "Successfully created coffee", body = CoffeeDto),
        (status = 400, description = "Invalid coffee data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_coffee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCoffeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateCoffeeParam::from_dto(payload);
    let coffee = CoffeeService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(coffee.into_dto())))
}

/// List coffees.
///
/// Returns coffees ordered by ID. An offset past the last coffee returns an
/// empty array.
///
/// # Returns
/// - `200 OK` - Array of coffees with their flavors
/// - `400 Bad Request` - Non-numeric or negative `limit`/`offset`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/coffees",
    tag = COFFEE_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "Successfully retrieved coffees", body = Vec<CoffeeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_coffees(
    State(state): State<AppState>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let coffees = CoffeeService::new(&state.db)
        .get_paginated(params.into_pagination())
        .await?;

    let coffees: Vec<CoffeeDto> = coffees.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(coffees)))
}

/// Get a coffee by ID.
///
/// # Returns
/// - `200 OK` - The coffee with its flavors
/// - `404 Not Found` - No coffee with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/coffees/{id}",
    tag = COFFEE_TAG,
    params(
        ("id" = i32, Path, description = "Coffee ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved coffee", body = CoffeeDto),
        (status = 404, description = "Coffee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_coffee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let coffee = CoffeeService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(coffee.into_dto())))
}

/// Partially update a coffee.
///
/// Only fields present in the body change. A `flavors` array replaces the whole
/// flavor set, resolving names the same way as on creation.
///
/// # Returns
/// - `200 OK` - The updated coffee
/// - `400 Bad Request` - Blank, mistyped or unknown fields
/// - `404 Not Found` - No coffee with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/coffees/{id}",
    tag = COFFEE_TAG,
    params(
        ("id" = i32, Path, description = "Coffee ID")
    ),
    request_body = UpdateCoffeeDto,
    responses(
        (status = 200, description = "Successfully updated coffee", body = CoffeeDto),
        (status = 400, description = "Invalid coffee data", body = ValidationErrorDto),
        (status = 404, description = "Coffee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_coffee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateCoffeeDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateCoffeeParam::from_dto(id, payload);
    let coffee = CoffeeService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(coffee.into_dto())))
}

/// Delete a coffee.
///
/// Flavors linked to the coffee are kept.
///
/// # Returns
/// - `200 OK` - The removed coffee as it was before deletion
/// - `404 Not Found` - No coffee with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/coffees/{id}",
    tag = COFFEE_TAG,
    params(
        ("id" = i32, Path, description = "Coffee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted coffee", body = CoffeeDto),
        (status = 404, description = "Coffee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_coffee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let coffee = CoffeeService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(coffee.into_dto())))
}

/// Recommend a coffee.
///
/// Increments the recommendation count and records a `recommend_coffee` event.
///
/// # Returns
/// - `200 OK` - The coffee with its new recommendation count
/// - `404 Not Found` - No coffee with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/coffees/{id}/recommend",
    tag = COFFEE_TAG,
    params(
        ("id" = i32, Path, description = "Coffee ID")
    ),
    responses(
        (status = 200, description = "Successfully recommended coffee", body = CoffeeDto),
        (status = 404, description = "Coffee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recommend_coffee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let coffee = CoffeeService::new(&state.db).recommend(id).await?;

    Ok((StatusCode::OK, Json(coffee.into_dto())))
}

/// List the known coffee brands.
///
/// Informational only; `brand` on a coffee is not restricted to this list.
#[utoipa::path(
    get,
    path = "/coffees/brands",
    tag = COFFEE_TAG,
    responses(
        (status = 200, description = "Configured coffee brands", body = Vec<String>)
    ),
)]
pub async fn get_brands(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.coffee_brands.as_ref().clone()))
}

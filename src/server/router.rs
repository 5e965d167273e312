use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{coffee::*, event::*},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Coffee Catalog API",
    description = "Coffees, their flavors and recorded events"
))]
struct ApiDoc;

/// Builds the API routes together with their OpenAPI document.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_coffees, create_coffee))
        .routes(routes!(get_brands))
        .routes(routes!(get_coffee, update_coffee, delete_coffee))
        .routes(routes!(recommend_coffee))
        .routes(routes!(get_events, record_event))
        .routes(routes!(get_event))
        .split_for_parts()
}

/// Builds the complete application: API routes, Swagger UI and HTTP layers.
pub fn app(state: AppState) -> Router {
    let (router, api) = router();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

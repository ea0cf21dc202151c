//! Router assembly.

mod common;
mod drinks;

pub use common::common_routes_with_ready;
pub use drinks::drink_routes;

use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Path of the OpenAPI document.
pub const OPENAPI_PATH: &str = "/swagger";
/// Path of the Swagger UI.
pub const DOCS_PATH: &str = "/api/docs";

/// Full application router: drinks, common routes and API docs, with request tracing and a body size limit.
pub fn app_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(drink_routes(state))
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(body_limit)),
        )
}

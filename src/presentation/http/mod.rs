use std::sync::Arc;

use poem::Route;
use poem_openapi::OpenApiService;

use crate::presentation::http::endpoints::{
    health::HealthEndpoints, root::ApiState, users::UsersEndpoints,
};

pub mod endpoints;
pub mod mappers;
pub mod requests;
pub mod responses;

/// Builds the full application route. `main` and the integration tests go
/// through the same construction, differing only in the injected repository.
pub fn build_app(state: Arc<ApiState>) -> Route {
    let api_service = OpenApiService::new(
        (UsersEndpoints::new(state), HealthEndpoints),
        "User Directory API",
        "0.1.0",
    );
    let ui = api_service.swagger_ui();

    Route::new().nest("/docs", ui).nest("/", api_service)
}

//! HTTP surface: one router per resource kind, nested under the configured prefix.

pub mod energy;
pub mod extract;
pub mod fuel;
pub mod health;
pub mod oil;
pub mod records;
pub mod reports;
pub mod roadtrip;
pub mod students;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::MethodRouter;
use chrono::Utc;
use domain::period::validate_report_year;
use domain::{AppError, Energy, Fuel, Oil, Roadtrip, Student};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Report and message envelope, `{"data": ..}`
#[derive(Debug, Serialize)]
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: i32,
}

/// Route registration that also answers the trailing-slash form of a path
pub(crate) trait SlashRoutes {
    fn route_slashed(self, path: &str, method: MethodRouter<Arc<AppState>>) -> Self;
}

impl SlashRoutes for Router<Arc<AppState>> {
    fn route_slashed(self, path: &str, method: MethodRouter<Arc<AppState>>) -> Self {
        self.route(path, method.clone()).route(&format!("{path}/"), method)
    }
}

/// Reject years outside `[1900, current year]`
pub fn report_year(year: i32) -> ApiResult<i32> {
    Ok(validate_report_year(year, Utc::now().date_naive())?)
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(records::routes::<Energy>().merge(energy::routes()))
        .merge(records::routes::<Fuel>().merge(fuel::routes()))
        .merge(records::routes::<Oil>().merge(oil::routes()))
        .merge(records::routes::<Roadtrip>().merge(roadtrip::routes()))
        .merge(records::routes::<Student>().merge(students::routes()))
        .merge(reports::routes());

    let cors = cors_layer(&state.settings.cors_origins());
    Router::new()
        .nest(&state.settings.api_prefix, api)
        .merge(health::routes())
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> ApiError {
    ApiError(AppError::not_found("Not Found"))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

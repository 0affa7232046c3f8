use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use domain::EnergyLocation;
use domain::report::LocationAverage;
use serde::Deserialize;

use super::extract::ApiQuery;
use super::{Data, SlashRoutes, report_year};
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct LocationQuery {
    year: i32,
    #[serde(default = "default_location")]
    location: EnergyLocation,
}

fn default_location() -> EnergyLocation {
    EnergyLocation::PlantaDeEnvasado
}

async fn consumo_promedio_mensual(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<LocationQuery>,
) -> ApiResult<Json<Data<LocationAverage>>> {
    let year = report_year(query.year)?;
    let averages = state
        .services
        .energy
        .average_monthly_by_location_and_year(year, query.location)
        .await?;
    Ok(Json(Data::new(averages)))
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route_slashed(
        "/energy/consumo_promedio_mensual",
        get(consumo_promedio_mensual),
    )
}

//! Reports spanning several resource kinds

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use domain::report::EnergyFuelShare;

use super::extract::ApiQuery;
use super::{Data, SlashRoutes, YearQuery, report_year};
use crate::error::ApiResult;
use crate::state::AppState;

async fn comparativa_energia_combustible(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<YearQuery>,
) -> ApiResult<Json<Data<EnergyFuelShare>>> {
    let year = report_year(query.year)?;
    let share = state.services.reports.energy_fuel_share_by_year(year).await?;
    Ok(Json(Data::new(share)))
}

async fn promedio_mensual_petroleo(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<YearQuery>,
) -> ApiResult<Json<Data<BTreeMap<String, f64>>>> {
    let year = report_year(query.year)?;
    let summary = state
        .services
        .reports
        .average_consumption_by_year(year)
        .await?;
    Ok(Json(Data::new(summary)))
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route_slashed(
            "/comparativa_energia_combustible",
            get(comparativa_energia_combustible),
        )
        .route_slashed("/promedio_mensual_petroleo", get(promedio_mensual_petroleo))
}

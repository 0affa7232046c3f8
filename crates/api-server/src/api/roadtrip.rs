use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use domain::RoadtripGroup;

use super::extract::ApiQuery;
use super::{Data, SlashRoutes, YearQuery, report_year};
use crate::error::ApiResult;
use crate::state::AppState;

async fn comparativa_promedio_mensual(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<YearQuery>,
) -> ApiResult<Json<Data<BTreeMap<RoadtripGroup, i64>>>> {
    let year = report_year(query.year)?;
    let averages = state
        .services
        .roadtrip
        .monthly_average_by_group(year)
        .await?;
    Ok(Json(Data::new(averages)))
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route_slashed(
        "/roadtrip/comparativa_promedio_mensual",
        get(comparativa_promedio_mensual),
    )
}

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use domain::report::MonthExtremes;
use domain::{EmissionType, FuelType};

use super::extract::ApiQuery;
use super::{Data, SlashRoutes, YearQuery, report_year};
use crate::error::ApiResult;
use crate::state::AppState;

async fn consumo_anual_por_categoria(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<YearQuery>,
) -> ApiResult<Json<Data<BTreeMap<FuelType, f64>>>> {
    let year = report_year(query.year)?;
    let percentages = state.services.fuel.consumed_percentage_by_year(year).await?;
    Ok(Json(Data::new(percentages)))
}

async fn consumo_promedio_mensual(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<YearQuery>,
) -> ApiResult<Json<Data<f64>>> {
    let year = report_year(query.year)?;
    let average = state.services.fuel.average_monthly_consumption(year).await?;
    Ok(Json(Data::new(average)))
}

async fn porcentaje_por_segmento_anual(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<YearQuery>,
) -> ApiResult<Json<Data<BTreeMap<EmissionType, f64>>>> {
    let year = report_year(query.year)?;
    let percentages = state.services.fuel.emission_percentage_by_year(year).await?;
    Ok(Json(Data::new(percentages)))
}

async fn mes_mayor_menor_consumo(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<YearQuery>,
) -> ApiResult<Json<Data<Option<MonthExtremes>>>> {
    let year = report_year(query.year)?;
    let extremes = state.services.fuel.min_and_max_month_by_year(year).await?;
    Ok(Json(Data::new(extremes)))
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route_slashed(
            "/fuel/consumo_anual_por_categoria",
            get(consumo_anual_por_categoria),
        )
        .route_slashed("/fuel/consumo_promedio_mensual", get(consumo_promedio_mensual))
        .route_slashed(
            "/fuel/porcentaje_por_segmento_anual",
            get(porcentaje_por_segmento_anual),
        )
        .route_slashed("/fuel/mes_mayor_menor_consumo", get(mes_mayor_menor_consumo))
}

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use domain::OilType;
use domain::report::MonthlyValues;
use serde::Deserialize;

use super::extract::ApiQuery;
use super::{Data, SlashRoutes, report_year};
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct OilTypeQuery {
    year: i32,
    oil_type: Option<OilType>,
}

async fn consumo_mensual_aceite(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<OilTypeQuery>,
) -> ApiResult<Json<Data<MonthlyValues<f64>>>> {
    let year = report_year(query.year)?;
    let oil_type = query.oil_type.unwrap_or(OilType::Aceite);
    let monthly = state
        .services
        .oil
        .monthly_consumption_by_type_and_year(year, oil_type)
        .await?;
    Ok(Json(Data::new(monthly)))
}

async fn mes_menos_perdida_refrigerante(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<OilTypeQuery>,
) -> ApiResult<Json<Data<Option<String>>>> {
    let year = report_year(query.year)?;
    let oil_type = query.oil_type.unwrap_or(OilType::Refrigerante);
    let month = state
        .services
        .oil
        .min_loss_month_by_type_and_year(year, oil_type)
        .await?;
    Ok(Json(Data::new(month)))
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route_slashed("/oil/consumo_mensual_aceite", get(consumo_mensual_aceite))
        .route_slashed(
            "/oil/mes_menos_perdida_refrigerante",
            get(mes_menos_perdida_refrigerante),
        )
}

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use domain::AppError;
use domain::student::{
    Admission, Guardian, NewAdmission, NewGuardian, NewStudentFee, StudentDetails, StudentFee,
};

use super::extract::{ApiJson, ApiPath};
use crate::error::ApiResult;
use crate::state::AppState;

async fn details(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<StudentDetails>> {
    match state.services.students.details(id).await? {
        Some(details) => Ok(Json(details)),
        None => Err(AppError::not_found("Student not found").into()),
    }
}

async fn add_admission(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
    ApiJson(admission): ApiJson<NewAdmission>,
) -> ApiResult<(StatusCode, Json<Admission>)> {
    let admission = state.services.students.add_admission(id, admission).await?;
    Ok((StatusCode::CREATED, Json(admission)))
}

async fn add_guardian(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
    ApiJson(guardian): ApiJson<NewGuardian>,
) -> ApiResult<(StatusCode, Json<Guardian>)> {
    let guardian = state.services.students.add_guardian(id, guardian).await?;
    Ok((StatusCode::CREATED, Json(guardian)))
}

async fn add_fee(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
    ApiJson(fee): ApiJson<NewStudentFee>,
) -> ApiResult<(StatusCode, Json<StudentFee>)> {
    let fee = state.services.students.add_fee(id, fee).await?;
    Ok((StatusCode::CREATED, Json(fee)))
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/students/{id}/details", get(details))
        .route("/students/{id}/admissions", post(add_admission))
        .route("/students/{id}/guardians", post(add_guardian))
        .route("/students/{id}/fees", post(add_fee))
}

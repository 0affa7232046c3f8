//! List / get / create / bulk create / update / delete, shared by every kind.

use std::sync::Arc;

use application::record_service::{created_message, deleted_message};
use application::{RecordService, Services};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use domain::{
    AppError, CrudRepository, Energy, EnergyRepository, Fuel, FuelRepository, Oil, OilRepository,
    Record, Roadtrip, RoadtripRepository, Student, StudentRepository,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Data, SlashRoutes};
use super::extract::{ApiJson, ApiPath};
use crate::error::ApiResult;
use crate::state::AppState;

/// A record kind exposed under `/{PATH}`
pub trait Resource: Record<New: DeserializeOwned, Patch: DeserializeOwned> + Serialize {
    const PATH: &'static str;

    type Repo: CrudRepository<Self> + ?Sized + 'static;

    fn service(services: &Services) -> &RecordService<Self, Self::Repo>;
}

impl Resource for Energy {
    const PATH: &'static str = "energy";
    type Repo = dyn EnergyRepository;

    fn service(services: &Services) -> &RecordService<Self, Self::Repo> {
        &services.energy
    }
}

impl Resource for Fuel {
    const PATH: &'static str = "fuel";
    type Repo = dyn FuelRepository;

    fn service(services: &Services) -> &RecordService<Self, Self::Repo> {
        &services.fuel
    }
}

impl Resource for Oil {
    const PATH: &'static str = "oil";
    type Repo = dyn OilRepository;

    fn service(services: &Services) -> &RecordService<Self, Self::Repo> {
        &services.oil
    }
}

impl Resource for Roadtrip {
    const PATH: &'static str = "roadtrip";
    type Repo = dyn RoadtripRepository;

    fn service(services: &Services) -> &RecordService<Self, Self::Repo> {
        &services.roadtrip
    }
}

impl Resource for Student {
    const PATH: &'static str = "students";
    type Repo = dyn StudentRepository;

    fn service(services: &Services) -> &RecordService<Self, Self::Repo> {
        &services.students
    }
}

async fn list<R: Resource>(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<R>>> {
    let records = R::service(&state.services).get_all().await?;
    Ok(Json(records))
}

async fn retrieve<R: Resource>(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<R>> {
    match R::service(&state.services).get(id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(AppError::not_found(format!("{} not found", R::KIND)).into()),
    }
}

async fn create<R: Resource>(
    State(state): State<Arc<AppState>>,
    ApiJson(new): ApiJson<R::New>,
) -> ApiResult<Json<R>> {
    let record = R::service(&state.services).create(new).await?;
    Ok(Json(record))
}

async fn bulk_create<R: Resource>(
    State(state): State<Arc<AppState>>,
    ApiJson(records): ApiJson<Vec<R::New>>,
) -> ApiResult<(StatusCode, Json<Data<String>>)> {
    R::service(&state.services).bulk_create(records).await?;
    Ok((StatusCode::CREATED, Json(Data::new(created_message::<R>()))))
}

async fn update<R: Resource>(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
    ApiJson(patch): ApiJson<R::Patch>,
) -> ApiResult<Json<R>> {
    let record = R::service(&state.services).update(id, patch).await?;
    Ok(Json(record))
}

async fn remove<R: Resource>(
    ApiPath(id): ApiPath<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Data<String>>> {
    R::service(&state.services).delete(id).await?;
    Ok(Json(Data::new(deleted_message::<R>())))
}

pub fn routes<R: Resource>() -> Router<Arc<AppState>> {
    let base = format!("/{}", R::PATH);
    Router::new()
        .route_slashed(&base, get(list::<R>).post(create::<R>))
        .route(&format!("{base}/bulk_create"), post(bulk_create::<R>))
        .route(
            &format!("{base}/{{id}}"),
            get(retrieve::<R>).put(update::<R>).delete(remove::<R>),
        )
}

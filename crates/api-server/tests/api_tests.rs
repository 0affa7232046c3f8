//! Drives the router end to end against in-memory repositories.

use api_server::api::create_router;
use api_server::setup_app_state;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use chrono::{Datelike, Utc};
use infrastructure::Repositories;
use infrastructure::config::{
    CorsSettings, DatabaseSettings, RunEnvironment, ServerSettings, Settings,
};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_settings() -> Settings {
    Settings {
        environment: RunEnvironment::Dev,
        api_prefix: "/api".to_string(),
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            run_migrations: false,
        },
        cors: CorsSettings::default(),
        log_filter: "info".to_string(),
    }
}

fn app() -> Router {
    create_router(setup_app_state(&Repositories::in_memory(), test_settings()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

fn fuel_json(quantity: f64, month: u32, fuel_type: &str) -> Value {
    json!({
        "quantity": quantity,
        "description": null,
        "datetime": format!("2023-{month:02}-15T08:00:00Z"),
        "fuel_type": fuel_type,
        "emission_type": "EMISIONES_DIRECTAS",
    })
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(&app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_fuel_crud_flow() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/fuel/",
        Some(fuel_json(12.5, 3, "COMBUSTIBLE_DE_LOGISTICA")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = get(&app, &format!("/api/fuel/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/fuel/{id}"),
        Some(json!({"description": "Camion 2"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["description"], "Camion 2");
    assert_eq!(updated["quantity"], 12.5);
    assert_eq!(updated["fuel_type"], "COMBUSTIBLE_DE_LOGISTICA");

    let (status, list) = get(&app, "/api/fuel/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::DELETE, &format!("/api/fuel/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], "Fuel deleted successfully");

    let (status, body) = get(&app, &format!("/api/fuel/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Fuel not found");
}

#[tokio::test]
async fn test_unknown_enum_literal_rejected() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/fuel/",
        Some(fuel_json(1.0, 1, "GASOLINA")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_create_accepts_timestamp_without_offset() {
    let app = app();
    let mut payload = fuel_json(3.0, 5, "COMBUSTIBLE_ADMINISTRATIVO");
    payload["datetime"] = json!("2023-05-01T10:00:00.123456");

    let (status, created) = send(&app, Method::POST, "/api/fuel/", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        created["datetime"]
            .as_str()
            .unwrap()
            .starts_with("2023-05-01T10:00:00.123456")
    );

    let (status, body) = get(&app, "/api/fuel/consumo_anual_por_categoria?year=2023").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["COMBUSTIBLE_ADMINISTRATIVO"], 1.0);
}

#[tokio::test]
async fn test_fuel_average_is_scalar() {
    let app = app();
    let types = [
        "COMBUSTIBLE_ADMINISTRATIVO",
        "COMBUSTIBLE_INDIRECTO_DE_PROVEEDOR",
        "COMBUSTIBLE_DE_LOGISTICA",
    ];
    let rows: Vec<Value> = (1..=12u32)
        .map(|month| fuel_json(f64::from(month * 7 % 11) + 0.5, month, types[month as usize % 3]))
        .collect();

    let (status, body) = send(&app, Method::POST, "/api/fuel/bulk_create", Some(json!(rows))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"], "Fuels created successfully");

    let (status, body) = get(&app, "/api/fuel/consumo_promedio_mensual?year=2023").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].is_f64());
}

#[tokio::test]
async fn test_fuel_categories_zero_without_rows() {
    let (status, body) = get(&app(), "/api/fuel/consumo_anual_por_categoria?year=2000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({
            "COMBUSTIBLE_ADMINISTRATIVO": 0.0,
            "COMBUSTIBLE_INDIRECTO_DE_PROVEEDOR": 0.0,
            "COMBUSTIBLE_DE_LOGISTICA": 0.0,
        })
    );
}

#[tokio::test]
async fn test_report_routes_accept_trailing_slash() {
    let app = app();
    for uri in [
        "/api/fuel/consumo_anual_por_categoria/?year=2000",
        "/api/energy/consumo_promedio_mensual/?year=2000",
        "/api/oil/consumo_mensual_aceite/?year=2000",
        "/api/roadtrip/comparativa_promedio_mensual/?year=2000",
        "/api/promedio_mensual_petroleo/?year=2000",
    ] {
        let (status, _) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn test_unknown_route_has_detail() {
    let (status, body) = get(&app(), "/api/fuel/reports/unknown?year=2000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Not Found"}));

    let (status, body) = get(&app(), "/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Not Found");
}

#[tokio::test]
async fn test_roadtrip_comparative_is_integer_per_group() {
    let app = app();
    let rows: Vec<Value> = (0..36u32)
        .map(|i| {
            json!({
                "quantity": 3 + i % 4,
                "datetime": format!("2023-{:02}-01T10:00:00Z", i % 12 + 1),
                "group": if i % 2 == 0 { "EQUIPO_DE_VENTAS" } else { "EQUIPO_ADMINISTRATIVO" },
                "emission_type": "OTRAS_EMISIONES_INDIRECTAS",
            })
        })
        .collect();
    let (status, _) = send(&app, Method::POST, "/api/roadtrip/bulk_create", Some(json!(rows))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, "/api/roadtrip/comparativa_promedio_mensual?year=2023").await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_object().unwrap();
    assert_eq!(data.len(), 2);
    assert!(data["EQUIPO_DE_VENTAS"].is_i64());
    assert!(data["EQUIPO_ADMINISTRATIVO"].is_i64());
}

#[tokio::test]
async fn test_energy_fuel_comparison_without_data() {
    let (status, body) = get(&app(), "/api/comparativa_energia_combustible?year=2000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "No data found for requested year");
}

#[tokio::test]
async fn test_consumption_summary() {
    let app = app();
    for oil_type in ["ACEITE", "REFRIGERANTE"] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/oil/",
            Some(json!({
                "quantity": 4.0,
                "datetime": "2023-07-20T12:00:00Z",
                "oil_type": oil_type,
                "oil_category": "CONSUMO_LOGISTICO",
                "emission_type": "EMISIONES_DIRECTAS",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    send(
        &app,
        Method::POST,
        "/api/fuel/",
        Some(fuel_json(6.0, 7, "COMBUSTIBLE_ADMINISTRATIVO")),
    )
    .await;

    let (status, body) = get(&app, "/api/promedio_mensual_petroleo?year=2023").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["ACEITE"].as_f64().unwrap() > 0.0);
    assert!(body["data"]["REFRIGERANTE"].as_f64().unwrap() > 0.0);
    assert_eq!(body["data"]["COMBUSTIBLE"], 6.0);
}

#[tokio::test]
async fn test_energy_average_flat_zero_and_monthly() {
    let app = app();
    let (status, body) = get(&app, "/api/energy/consumo_promedio_mensual?year=2023").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!(0.0));

    send(
        &app,
        Method::POST,
        "/api/energy/",
        Some(json!({
            "quantity": 80.0,
            "datetime": "2023-02-10T00:00:00Z",
            "energy_category": "CONSUMO_DE_DISTRIBUCION",
            "emission_type": "EMISIONES_INDIRECTAS",
            "location": "LOCAL",
        })),
    )
    .await;

    let (_, body) = get(
        &app,
        "/api/energy/consumo_promedio_mensual?year=2023&location=LOCAL",
    )
    .await;
    let months = body["data"].as_object().unwrap();
    assert_eq!(months.len(), 12);
    assert_eq!(months["2"], 80.0);
    assert_eq!(months["1"], 0.0);
}

#[tokio::test]
async fn test_year_out_of_range() {
    let app = app();
    let current = Utc::now().year();

    let (status, body) = get(&app, "/api/fuel/consumo_promedio_mensual?year=1899").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        format!("Year must be between 1900 and {current}")
    );

    let uri = format!("/api/oil/consumo_mensual_aceite?year={}", current + 1);
    let (status, _) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/api/fuel/mes_mayor_menor_consumo").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_oil_min_loss_defaults_to_refrigerant() {
    let app = app();
    let (status, body) = get(&app, "/api/oil/mes_menos_perdida_refrigerante?year=2023").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn test_student_details() {
    let app = app();
    let (status, student) = send(
        &app,
        Method::POST,
        "/api/students/",
        Some(json!({
            "first_name": "Lucia",
            "last_name": "Mamani",
            "gender": "FEMALE",
            "date_of_birth": "2011-09-02T00:00:00Z",
            "email": "lucia@example.com",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(student["status"], "ACTIVE");
    let id = student["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/students/{id}/fees"),
        Some(json!({"total_amount": 420.5})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, details) = get(&app, &format!("/api/students/{id}/details")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details["first_name"], "Lucia");
    assert_eq!(details["fees"].as_array().unwrap().len(), 1);
    assert_eq!(details["admissions"], json!([]));

    let (status, body) = get(&app, "/api/students/999/details").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Student not found");
}

#[tokio::test]
async fn test_invalid_id_is_bad_request() {
    let (status, body) = get(&app(), "/api/energy/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use obs_api::config::ApiConfig;
use obs_api::{router, AppState};
use obs_db::Database;
use serde_json::Value;
use tower::ServiceExt;

const FIXTURES: &[(&str, &str)] = &[
    ("v_estaciones", include_str!("../../fixtures/v_estaciones.csv")),
    ("v_entidades_agua", include_str!("../../fixtures/v_entidades_agua.csv")),
    ("v_mar_mensual", include_str!("../../fixtures/v_mar_mensual.csv")),
    ("v_temperatura", include_str!("../../fixtures/v_temperatura.csv")),
    ("v_mp25_anual", include_str!("../../fixtures/v_mp25_anual.csv")),
    ("v_mp25_mensual", include_str!("../../fixtures/v_mp25_mensual.csv")),
    (
        "volumen_del_embalse_por_embalse",
        include_str!("../../fixtures/volumen_del_embalse_por_embalse.csv"),
    ),
    (
        "caudal_medio_de_aguas_corrientes",
        include_str!("../../fixtures/caudal_medio_de_aguas_corrientes.csv"),
    ),
    (
        "metales_disueltos_en_la_matriz_acuosa",
        include_str!("../../fixtures/metales_disueltos_en_la_matriz_acuosa.csv"),
    ),
    (
        "nivel_estatico_de_aguas_subterraneas",
        include_str!("../../fixtures/nivel_estatico_de_aguas_subterraneas.csv"),
    ),
    (
        "v_glaciares_anual_cuenca",
        include_str!("../../fixtures/v_glaciares_anual_cuenca.csv"),
    ),
];

fn app() -> Router {
    let db = Database::new().unwrap();
    for (table, csv) in FIXTURES {
        db.load_table(table, csv).unwrap();
    }
    router(AppState::new(db, ApiConfig::default()))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn root_points_at_info() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Observatorio Ambiental API");
    assert_eq!(body["version"], "0.1.0");
}

#[tokio::test]
async fn health_reports_connected_store() {
    let (status, body) = get("/api/public/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn info_lists_modules_and_sources() {
    let (status, body) = get("/api/public/info").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["api_name"], "Observatorio Ambiental Backend");
    assert_eq!(body["modules"], serde_json::json!(["agua", "aire"]));
    assert_eq!(body["data_sources"].as_array().unwrap().len(), 2);
    assert_eq!(body["contact"]["email"], "contacto@observatorio.cl");
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let req = Request::builder()
        .uri("/api/public/health")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    let headers = resp.headers();
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert!(headers.contains_key("content-security-policy"));
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let req = Request::builder()
        .uri("/api/private/estaciones")
        .header("origin", "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
}

// ───────────────────── Estaciones ─────────────────────

#[tokio::test]
async fn lists_stations_by_name() {
    let (status, body) = get("/api/private/estaciones").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["nombre"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ancud", "Coyhaique", "Quintero", "Valparaíso"]);

    let (status, _) = get("/api/private/estaciones/").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn station_by_id_and_name() {
    let (status, body) = get("/api/private/estaciones/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nombre"], "Quintero");
    assert_eq!(body["numero_region"], 5);

    let (status, body) = get("/api/private/estaciones/nombre/Coyhaique").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 3);

    let (status, body) = get("/api/private/estaciones/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].as_str().unwrap().contains("99"));
}

#[tokio::test]
async fn ancud_discovery_flow() {
    let (status, body) = get("/api/private/estaciones/metricas?nombre=Ancud").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    let metricas = body["metricas_disponibles"].as_array().unwrap();
    assert!(metricas.contains(&Value::from("Estación Oceanográfica")));
    assert!(metricas.contains(&Value::from("Temperatura")));

    let (status, body) = get(concat!(
        "/api/private/estaciones/submetricas",
        "?nombre=Ancud&metrica=Estaci%C3%B3n%20Oceanogr%C3%A1fica"
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metrica"], "Estación Oceanográfica");
    assert_eq!(
        body["submetricas_disponibles"],
        serde_json::json!(["Temp Superficial Del Mar", "Nivel Medio Del Mar"])
    );

    let (status, body) = get(concat!(
        "/api/private/estaciones/datos-submetrica",
        "?estacion_id=1&submetrica=Temp%20Superficial%20Del%20Mar"
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nombre"], "Ancud");
    let datos = body["datos"].as_array().unwrap();
    assert_eq!(datos.len(), 3);
    assert_eq!(datos[0]["periodo"], "2015-01");
    assert_eq!(datos[0]["valor"], 12.5);
    assert_eq!(datos[2]["periodo"], "2015-03");

    let (status, body) = get(concat!(
        "/api/private/estaciones/datos-submetrica",
        "?nombre=Ancud&submetrica=Nivel%20Medio%20Del%20Mar"
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["datos"],
        serde_json::json!([
            {"periodo": "2015-01", "valor": 12.3},
            {"periodo": "2015-02", "valor": 12.5},
        ])
    );
}

#[tokio::test]
async fn malformed_parameters_are_json_bad_requests() {
    let (status, body) = get("/api/private/estaciones/metricas?estacion_id=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("estacion_id"), "{}", detail);

    let (status, body) = get("/api/private/estaciones/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().starts_with("Ruta inválida"));
}

#[tokio::test]
async fn single_temperature_reading_is_not_a_series() {
    let (status, body) =
        get("/api/private/estaciones/submetricas?nombre=Ancud&metrica=temperatura").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["submetricas_disponibles"], serde_json::json!([]));
}

#[tokio::test]
async fn station_identifier_is_required() {
    let (status, body) = get("/api/private/estaciones/metricas").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());

    let (status, _) = get("/api/private/estaciones/metricas?estacion_id=1&nombre=Ancud").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_category_and_submetric_are_bad_requests() {
    let (status, body) =
        get("/api/private/estaciones/submetricas?nombre=Ancud&metrica=Oceano").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Métrica no válida: Oceano");

    let (status, body) =
        get("/api/private/estaciones/datos-submetrica?nombre=Ancud&submetrica=Salinidad").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Submétrica no válida: Salinidad");
}

#[tokio::test]
async fn unknown_station_is_not_found() {
    let (status, _) = get("/api/private/estaciones/metricas?nombre=Arica").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ───────────────────── Entidades de agua ─────────────────────

#[tokio::test]
async fn lists_water_entities_and_tipos() {
    let (status, body) = get("/api/private/entidades-agua").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);

    let (status, body) = get("/api/private/entidades-agua/tipos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!(["caudal", "embalse", "glaciares", "poal", "pozo"])
    );

    let (status, body) = get("/api/private/entidades-agua/tipo/embalse").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["nombre"], "Embalse Rapel");

    let (status, _) = get("/api/private/entidades-agua/tipo/laguna").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn water_entity_metrics_are_slugs() {
    let (status, body) = get("/api/private/entidades-agua/metricas/Bahia%20Quintero").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!(["metales_acuosa"]));

    let (status, _) = get("/api/private/entidades-agua/metricas/Lago%20Inexistente").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn parametric_submetrics_and_series() {
    let (status, body) =
        get("/api/private/entidades-agua/submetricas/metales_acuosa/Bahia%20Quintero").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tipo"], "metales_acuosa");
    assert_eq!(
        body["submetricas"],
        serde_json::json!(["Arsenico", "Cobre", "Zinc"])
    );

    let (status, body) = get(concat!(
        "/api/private/entidades-agua/datos-submetrica/metales_acuosa/Bahia%20Quintero",
        "?submetrica=Cobre"
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["submetrica"], "Cobre");
    let datos = body["datos"].as_array().unwrap();
    assert_eq!(datos.len(), 2);
    assert_eq!(datos[0]["periodo"], "2020-06-01");
}

#[tokio::test]
async fn reservoir_series_skips_missing_values() {
    let (status, body) = get(concat!(
        "/api/private/entidades-agua/datos-submetrica/embalse/Embalse%20Rapel",
        "?submetrica=Volumen%20Del%20Embalse%20Por%20Embalse"
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["datos"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn raw_category_records() {
    let (status, body) = get("/api/private/entidades-agua/datos/Pozo%20Lo%20Aguirre/pozo").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["estacion"], "Pozo Lo Aguirre");
    assert_eq!(rows[0]["periodo"], "2021-04-15");

    let (status, _) = get("/api/private/entidades-agua/datos/Pozo%20Lo%20Aguirre/caudal").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get("/api/private/entidades-agua/datos/Pozo%20Lo%20Aguirre/ozono").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ───────────────────── Listados aire / agua ─────────────────────

#[tokio::test]
async fn air_listing_returns_whole_table() {
    let (status, body) = get("/api/private/aire/mp25/anual").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["anio"], 2018);
    assert_eq!(rows[0]["estacion"], "Quintero");
    assert_eq!(rows[0]["mp25_perc98"], 41);
    assert_eq!(rows[1]["estacion"], "Coyhaique");
    assert!(rows[1]["mp25_perc98"].is_null());
}

#[tokio::test]
async fn water_listing_includes_label_columns() {
    let (status, body) = get("/api/private/agua/hidrologia/caudal").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["mes"], "2021-01");
    assert_eq!(rows[0]["aguas_corrientes"], "Rio Maipo");
    assert_eq!(rows[0]["value"], 152.3);
}

#[tokio::test]
async fn listing_without_rows_is_empty() {
    let (status, body) = get("/api/private/aire/nox/mensual").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));

    let (status, _) = get("/api/private/aire/mp25/semanal").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

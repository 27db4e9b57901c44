use std::{collections::BTreeMap, sync::Arc};

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::NaiveDate;
use fieldforce_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use fieldforce_core::{
    application::build_service,
    domain::common::{FieldForceConfig, SchemaCapabilities, generate_timestamp},
    entity::{ratings, salesman_attendance},
};
use sea_orm::{
    DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, Transaction,
};
use serde_json::{Value, json};

fn server_with(db: Arc<DatabaseConnection>, args: Args) -> TestServer {
    let config = FieldForceConfig::from(args.clone());
    let service = build_service(db, SchemaCapabilities::default(), &config);
    let state = AppState::new(Arc::new(args), service);

    TestServer::new(router(state).unwrap()).unwrap()
}

fn server(db: MockDatabase) -> TestServer {
    server_with(Arc::new(db.into_connection()), Args::default())
}

fn transaction_log(db: &DatabaseConnection) -> Vec<Transaction> {
    match db {
        DatabaseConnection::MockDatabaseConnection(conn) => {
            DatabaseConnection::MockDatabaseConnection(Arc::clone(conn)).into_transaction_log()
        }
        _ => panic!("not a mock connection"),
    }
}

fn empty() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

fn rating(id: i32, value: i32) -> ratings::Model {
    let now = generate_timestamp();
    ratings::Model {
        id,
        user_id: 3,
        area: "Guwahati".into(),
        region: "Kamrup".into(),
        rating: value,
        created_at: now,
        updated_at: now,
    }
}

fn attendance_record() -> salesman_attendance::Model {
    let now = generate_timestamp();
    salesman_attendance::Model {
        id: 11,
        user_id: 1,
        attendance_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
        location_name: "Guwahati depot".into(),
        in_time_timestamp: now,
        out_time_timestamp: None,
        in_time_image_captured: false,
        out_time_image_captured: false,
        in_time_image_url: None,
        out_time_image_url: None,
        in_time_latitude: 26.14,
        in_time_longitude: 91.73,
        in_time_accuracy: None,
        in_time_speed: None,
        in_time_heading: None,
        in_time_altitude: None,
        out_time_latitude: None,
        out_time_longitude: None,
        out_time_accuracy: None,
        created_at: now,
        updated_at: now,
    }
}

fn check_in_body() -> Value {
    json!({
        "userId": 1,
        "attendanceDate": "2024-05-02",
        "locationName": "Guwahati depot",
        "inTimeLatitude": 26.14,
        "inTimeLongitude": 91.73
    })
}

#[tokio::test]
async fn test_list_returns_page_envelope() {
    let server = server(empty().append_query_results([vec![rating(1, 4), rating(2, 5)]]));

    let response = server.get("/api/ratings?page=2&limit=2&unknown=x").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["page"], json!(2));
    assert_eq!(body["limit"], json!(2));
    assert_eq!(body["count"], json!(2));
    assert_eq!(body["data"][0]["userId"], json!(3));
}

#[tokio::test]
async fn test_unknown_relation_is_not_found() {
    let server = server(empty());

    let response = server.get("/api/ratings/dealer/4").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "success": false, "error": "Resource not found" }));
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let server = server(empty());

    let response = server.get("/api/ratings/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("Invalid path parameter"));
}

#[tokio::test]
async fn test_missing_record_uses_resource_label() {
    let server = server(empty().append_query_results([Vec::<ratings::Model>::new()]));

    let response = server.get("/api/ratings/42").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "success": false, "error": "Rating not found" }));
}

#[tokio::test]
async fn test_unmatched_route_gets_error_envelope() {
    let server = server(empty());

    let response = server.get("/api/nothing-here").await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({ "success": false, "error": "Resource not found" }));
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let server = server(empty());

    let response = server.put("/api/ratings").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = response.json();
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn test_create_validates_body() {
    let server = server(empty());

    let response = server
        .post("/api/ratings")
        .json(&json!({ "userId": 3, "area": "Guwahati", "region": "Kamrup", "rating": 9 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("Validation failed"));
    assert_eq!(body["details"][0]["path"], json!("rating"));
    assert_eq!(
        body["details"][0]["message"],
        json!("rating must be between 1 and 5")
    );
}

#[tokio::test]
async fn test_dealer_validation_reports_wire_keys() {
    let server = server(empty());

    let created = server
        .post("/api/dealers")
        .json(&json!({
            "type": "",
            "name": "Das Traders",
            "region": "Kamrup",
            "area": "Guwahati",
            "phoneNo": "9876543210",
            "address": "GS Road",
            "totalPotential": 100.0,
            "bestPotential": 80.0,
            "feedbacks": "Good",
        }))
        .await;
    let updated = server.patch("/api/dealers/7").json(&json!({ "type": "" })).await;

    for response in [created, updated] {
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["details"][0]["path"], json!("type"));
        assert_eq!(body["details"][0]["message"], json!("type is required"));
    }
}

#[tokio::test]
async fn test_create_returns_created_record() {
    let server = server(empty().append_query_results([vec![rating(5, 4)]]));

    let response = server
        .post("/api/ratings")
        .json(&json!({ "userId": 3, "area": "Guwahati", "region": "Kamrup", "rating": 4 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Rating created successfully"));
    assert_eq!(body["data"]["id"], json!(5));
    assert_eq!(body["data"]["rating"], json!(4));
}

#[tokio::test]
async fn test_bulk_delete_requires_confirmation() {
    let db = Arc::new(empty().into_connection());
    let server = server_with(db.clone(), Args::default());

    let response = server
        .delete("/api/ratings/bulk/date-range?startDate=2024-01-01&endDate=2024-01-31")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(transaction_log(&db).is_empty());
}

#[tokio::test]
async fn test_date_range_delete_needs_a_date_column() {
    let server = server(empty());

    let response = server
        .delete("/api/brands/bulk/date-range?startDate=2024-01-01&endDate=2024-01-31&confirm=true")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "success": false,
        "error": "brands cannot be deleted by date range"
    }));
}

#[tokio::test]
async fn test_second_check_in_for_the_day_is_rejected() {
    let server = server(
        empty()
            .append_query_results([Vec::<salesman_attendance::Model>::new()])
            .append_query_results([vec![attendance_record()]])
            .append_query_results([vec![attendance_record()]]),
    );

    let first = server
        .post("/api/attendance/check-in")
        .json(&check_in_body())
        .await;
    first.assert_status(StatusCode::CREATED);
    let body: Value = first.json();
    assert_eq!(body["message"], json!("Check-in recorded successfully"));
    assert_eq!(body["data"]["id"], json!(11));

    let second = server
        .post("/api/attendance/check-in")
        .json(&check_in_body())
        .await;
    second.assert_status(StatusCode::BAD_REQUEST);
    second.assert_json(&json!({
        "success": false,
        "error": "User has already checked in today"
    }));
}

#[tokio::test]
async fn test_dealer_bulk_delete_uses_dealer_cleanup() {
    let server = server(
        empty().append_query_results([Vec::<BTreeMap<&'static str, sea_orm::Value>>::new()]),
    );

    let response = server
        .delete("/api/dealers/bulk/all?confirm=DELETE_ALL_DEALERS")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({
        "success": false,
        "error": "No dealers found to delete"
    }));
}

#[tokio::test]
async fn test_attendance_create_goes_through_check_in() {
    let server = server(empty().append_query_results([vec![attendance_record()]]));

    let response = server.post("/api/attendance").json(&check_in_body()).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "success": false,
        "error": "User has already checked in today"
    }));
}

#[tokio::test]
async fn test_liveness_needs_no_database() {
    let db = Arc::new(empty().into_connection());
    let server = server_with(db.clone(), Args::default());

    let response = server.get("/api/health/live").await;

    response.assert_status(StatusCode::OK);
    response.assert_json(&json!({ "success": true, "status": "ok" }));
    assert!(transaction_log(&db).is_empty());
}

#[tokio::test]
async fn test_database_failure_exposes_details_when_enabled() {
    let server = server(empty().append_query_errors([DbErr::Custom("connection reset".into())]));

    let response = server.get("/api/ratings").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("Internal server error"));
    assert!(
        body["details"]
            .as_str()
            .is_some_and(|details| details.contains("connection reset")),
        "{body}"
    );
}

#[tokio::test]
async fn test_database_failure_details_can_be_hidden() {
    let db = Arc::new(
        empty()
            .append_query_errors([DbErr::Custom("connection reset".into())])
            .into_connection(),
    );
    let mut args = Args::default();
    args.server.expose_error_details = false;
    let server = server_with(db, args);

    let response = server.get("/api/ratings").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "success": false, "error": "Internal server error" }));
}

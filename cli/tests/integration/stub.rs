//! In-process stub of the legacy and versioned management endpoints.
//!
//! Catalog:
//! - `petclinic` → services `mongod`, `tomcat`
//! - `empty-app` → no services
//! - `ghost` → success without a description
//! - `broken` → server-side failure (`internal_error`)
//! - anything else → not found

#![allow(clippy::expect_used)]

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::{Value, json};

fn services_of(app: &str) -> Option<Vec<&'static str>> {
    match app {
        "petclinic" => Some(vec!["mongod", "tomcat"]),
        "empty-app" => Some(vec![]),
        _ => None,
    }
}

fn description(app: &str, services: &[&str]) -> Value {
    let services: Vec<Value> = services
        .iter()
        .map(|name| {
            json!({
                "applicationName": app,
                "serviceName": name,
                "instanceCount": 1,
                "plannedInstances": 1,
                "serviceState": "STARTED",
            })
        })
        .collect();
    json!({
        "applicationName": app,
        "applicationState": "STARTED",
        "servicesDescription": services,
    })
}

async fn legacy_description(Path(app): Path<String>) -> (StatusCode, Json<Value>) {
    if app == "ghost" {
        return (StatusCode::OK, Json(json!({"status": "success", "response": null})));
    }
    if app == "broken" {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"status": "error", "error": "internal_error", "error_args": ["disk full"]})),
        );
    }
    match services_of(&app) {
        Some(services) => (
            StatusCode::OK,
            Json(json!({"status": "success", "response": description(&app, &services)})),
        ),
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"status": "error", "error": "failed_to_locate_app", "error_args": [app]})),
        ),
    }
}

async fn rest_description(
    Path((_version, app)): Path<(String, String)>,
) -> (StatusCode, Json<Value>) {
    if app == "ghost" {
        return (StatusCode::OK, Json(json!({"status": "Success", "response": null})));
    }
    if app == "broken" {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"status": "Failed", "messageId": "internal_error", "message": "disk full"})),
        );
    }
    match services_of(&app) {
        Some(services) => (
            StatusCode::OK,
            Json(json!({"status": "Success", "response": description(&app, &services)})),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "status": "Failed",
                "messageId": "missing_resource",
                "message": format!("Missing resource: application {app}"),
            })),
        ),
    }
}

/// Start the stub on an ephemeral port and return its base URL.
///
/// The server runs on a background thread for the rest of the test process.
pub fn spawn() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    listener
        .set_nonblocking(true)
        .expect("non-blocking listener");
    let addr = listener.local_addr().expect("listener address");

    let router = Router::new()
        .route(
            "/service/applications/{app}/services/description",
            get(legacy_description),
        )
        .route(
            "/{version}/deployments/applications/{app}/description",
            get(rest_description),
        );

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("stub runtime");
        runtime.block_on(async move {
            let listener =
                tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            axum::serve(listener, router).await.expect("stub server");
        });
    });

    format!("http://{addr}")
}

/// A URL nothing is listening on.
pub fn dead_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);
    format!("http://{addr}")
}

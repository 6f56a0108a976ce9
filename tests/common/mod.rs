#![allow(dead_code)]

use actix_http::Request;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::header,
    test, Error,
};
use pickup::{
    app::AppState,
    config::{AuthSettings, CorsSettings, DatabaseSettings, ServerSettings, Settings},
};
use serde_json::{json, Value};

pub const DEMO_PASSWORD: &str = "demo123";

pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        auth: AuthSettings {
            jwt_secret: "integration-test-secret".to_string(),
            bcrypt_cost: 4,
        },
        cors: CorsSettings {
            allowed_origins: vec![],
        },
        seed_demo_users: true,
    }
}

/// A fresh in-memory store seeded with the demo accounts.
pub async fn test_state() -> AppState {
    AppState::build(test_settings())
        .await
        .expect("failed to build test state")
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

pub async fn login<S, B>(app: &S, email: &str, password: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success(), "login failed for {}", email);

    let body: Value = test::read_body_json(resp).await;
    body["tokens"]["accessToken"]
        .as_str()
        .expect("access token missing")
        .to_string()
}

pub async fn register<S, B>(app: &S, email: &str, role: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "email": email,
            "password": "pw-123",
            "firstName": "Test",
            "lastName": "User",
            "role": role,
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success(), "registration failed for {}", email);

    let body: Value = test::read_body_json(resp).await;
    body["tokens"]["accessToken"]
        .as_str()
        .expect("access token missing")
        .to_string()
}

pub async fn create_request<S, B>(app: &S, token: &str, description: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/requests")
        .insert_header(bearer(token))
        .set_json(json!({
            "description": description,
            "address": "12 Scrapyard Lane",
            "latitude": 40.7128,
            "longitude": -74.006,
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 201);

    test::read_body_json(resp).await
}

pub async fn list_requests<S, B>(app: &S, token: &str) -> Vec<Value>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::get()
        .uri("/api/requests")
        .insert_header(bearer(token))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = test::read_body_json(resp).await;
    body["data"].as_array().expect("data array missing").clone()
}

pub fn descriptions(requests: &[Value]) -> Vec<String> {
    requests
        .iter()
        .map(|r| r["description"].as_str().unwrap_or_default().to_string())
        .collect()
}

mod common;

use actix_web::{http::StatusCode, test, App};
use common::{
    bearer, create_request, descriptions, list_requests, login, register, test_state, DEMO_PASSWORD,
};
use serde_json::{json, Value};

#[actix_web::test]
async fn customer_sees_own_request_and_others_do_not() {
    let state = test_state().await;
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let alice = login(&app, "customer@demo.com", DEMO_PASSWORD).await;
    let bob = register(&app, "bob@demo.com", "customer").await;

    let created = create_request(&app, &alice, "Old washing machine").await;
    assert_eq!(created["status"], "new");
    assert_eq!(created["description"], "Old washing machine");
    assert_eq!(created["address"], "12 Scrapyard Lane");
    assert!(created["id"].as_i64().is_some());
    assert!(created["created_at"].as_str().is_some());

    assert_eq!(descriptions(&list_requests(&app, &alice).await), vec!["Old washing machine"]);
    assert!(list_requests(&app, &bob).await.is_empty());
}

#[actix_web::test]
async fn dealer_and_admin_see_everything_newest_first() {
    let state = test_state().await;
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let alice = login(&app, "customer@demo.com", DEMO_PASSWORD).await;
    let bob = register(&app, "bob@demo.com", "customer").await;

    create_request(&app, &alice, "first").await;
    create_request(&app, &bob, "second").await;
    create_request(&app, &alice, "third").await;

    for email in ["dealer@demo.com", "admin@demo.com"] {
        let token = login(&app, email, DEMO_PASSWORD).await;
        let all = list_requests(&app, &token).await;
        assert_eq!(descriptions(&all), vec!["third", "second", "first"]);
    }

    assert_eq!(descriptions(&list_requests(&app, &alice).await), vec!["third", "first"]);
}

#[actix_web::test]
async fn only_customers_can_create_requests() {
    let state = test_state().await;
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    for email in ["dealer@demo.com", "admin@demo.com"] {
        let token = login(&app, email, DEMO_PASSWORD).await;
        let req = test::TestRequest::post()
            .uri("/api/requests")
            .insert_header(bearer(&token))
            .set_json(json!({
                "description": "Scrap metal",
                "address": "1 Main St",
                "latitude": 1.0,
                "longitude": 2.0,
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{} must not create", email);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }

    let dealer = login(&app, "dealer@demo.com", DEMO_PASSWORD).await;
    assert!(list_requests(&app, &dealer).await.is_empty());
}

#[actix_web::test]
async fn create_rejects_invalid_bodies() {
    let state = test_state().await;
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;
    let token = login(&app, "customer@demo.com", DEMO_PASSWORD).await;

    let bad_bodies = [
        json!({ "description": "x", "address": "y", "latitude": 1.0 }),
        json!({ "description": " ", "address": "y", "latitude": 1.0, "longitude": 1.0 }),
        json!({ "description": "x", "address": "y", "latitude": 120.0, "longitude": 1.0 }),
        json!({ "description": "x", "address": "y", "latitude": "north", "longitude": 1.0 }),
    ];

    for body in bad_bodies {
        let req = test::TestRequest::post()
            .uri("/api/requests")
            .insert_header(bearer(&token))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "expected 400 for {}", body);
    }

    assert!(list_requests(&app, &token).await.is_empty());
}

#[actix_web::test]
async fn any_role_can_set_any_status() {
    let state = test_state().await;
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let customer = login(&app, "customer@demo.com", DEMO_PASSWORD).await;
    let dealer = login(&app, "dealer@demo.com", DEMO_PASSWORD).await;
    let admin = login(&app, "admin@demo.com", DEMO_PASSWORD).await;

    let created = create_request(&app, &customer, "Copper pipes").await;
    let id = created["id"].as_i64().unwrap();

    for (token, status) in [
        (&dealer, "assigned"),
        (&admin, "picked_up"),
        (&customer, "totally arbitrary (typo'd) statsu"),
    ] {
        let req = test::TestRequest::put()
            .uri(&format!("/api/requests/{}/status", id))
            .insert_header(bearer(token))
            .set_json(json!({ "status": status }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "success": true }));

        let listed = list_requests(&app, &dealer).await;
        assert_eq!(listed[0]["status"], status);
    }
}

#[actix_web::test]
async fn status_update_for_unknown_id_still_succeeds() {
    let state = test_state().await;
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;
    let dealer = login(&app, "dealer@demo.com", DEMO_PASSWORD).await;

    let req = test::TestRequest::put()
        .uri("/api/requests/9999/status")
        .insert_header(bearer(&dealer))
        .set_json(json!({ "status": "done" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
}

#[actix_web::test]
async fn status_update_rejects_bad_input() {
    let state = test_state().await;
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;
    let dealer = login(&app, "dealer@demo.com", DEMO_PASSWORD).await;

    let req = test::TestRequest::put()
        .uri("/api/requests/abc/status")
        .insert_header(bearer(&dealer))
        .set_json(json!({ "status": "done" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri("/api/requests/1/status")
        .insert_header(bearer(&dealer))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn create_responds_with_the_record_itself() {
    let state = test_state().await;
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;
    let token = login(&app, "customer@demo.com", DEMO_PASSWORD).await;

    let req = test::TestRequest::post()
        .uri("/api/requests")
        .insert_header(bearer(&token))
        .set_json(json!({
            "description": "Scrap copper",
            "address": "3 Foundry Rd",
            "latitude": 1.5,
            "longitude": 2.5,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("data").is_none());
    assert!(body.get("success").is_none());
    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["description"], "Scrap copper");
    assert_eq!(body["address"], "3 Foundry Rd");
    assert_eq!(body["status"], "new");
}

#[actix_web::test]
async fn status_is_stored_exactly_as_sent() {
    let state = test_state().await;
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;
    let customer = login(&app, "customer@demo.com", DEMO_PASSWORD).await;
    let dealer = login(&app, "dealer@demo.com", DEMO_PASSWORD).await;

    let id = create_request(&app, &customer, "Tin cans").await["id"].as_i64().unwrap();

    for status in ["", "  padded  "] {
        let req = test::TestRequest::put()
            .uri(&format!("/api/requests/{}/status", id))
            .insert_header(bearer(&dealer))
            .set_json(json!({ "status": status }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "status {:?} rejected", status);

        let listed = list_requests(&app, &customer).await;
        assert_eq!(listed[0]["status"], status);
    }
}

#[actix_web::test]
async fn non_customers_are_forbidden_even_with_malformed_bodies() {
    let state = test_state().await;
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    for email in ["dealer@demo.com", "admin@demo.com"] {
        let token = login(&app, email, DEMO_PASSWORD).await;
        let req = test::TestRequest::post()
            .uri("/api/requests")
            .insert_header(bearer(&token))
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{} must get 403", email);
    }

    let customer = login(&app, "customer@demo.com", DEMO_PASSWORD).await;
    let req = test::TestRequest::post()
        .uri("/api/requests")
        .insert_header(bearer(&customer))
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn head_on_request_collection_is_method_not_allowed() {
    let state = test_state().await;
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;
    let token = login(&app, "dealer@demo.com", DEMO_PASSWORD).await;

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::HEAD)
        .uri("/api/requests")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

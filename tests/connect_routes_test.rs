mod common;

use actix_web::test;
use serde_json::{json, Value};

use common::{FakeNotifier, FakeProcessor, TestApp, LIVE_ACCOUNT_ID};
use room_rental_api::{
    models::connect::ConnectedAccountType, services::payment::interface::PaymentError,
};

#[actix_rt::test]
async fn test_create_account_defaults_to_express() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/stripe/create-account")
        .set_json(&json!({}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["account"]["id"], LIVE_ACCOUNT_ID);
    assert_eq!(body["account"]["type"], "express");
    assert_eq!(body["account"]["country"], "US");
    assert_eq!(body["account"]["charges_enabled"], false);
    assert_eq!(body["account"]["created"], 1_700_000_000);
    assert!(body["account"].get("requirements").is_none());

    let created = test_app.state.payments.created_accounts.lock().unwrap().clone();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].0, ConnectedAccountType::Express);
    assert!(created[0].1.starts_with("test-"));
    assert!(created[0].1.ends_with("@example.com"));
}

#[actix_rt::test]
async fn test_create_account_with_type() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/stripe/create-account")
        .set_json(&json!({ "type": "standard" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["account"]["type"], "standard");

    let req = test::TestRequest::post()
        .uri("/api/stripe/create-account")
        .set_json(&json!({ "type": "platinum" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_create_account_processor_error() {
    let test_app = TestApp::with(
        FakeProcessor::failing(PaymentError::new("Invalid API Key provided")),
        Some(FakeNotifier::default()),
    );
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/stripe/create-account")
        .set_json(&json!({ "type": "express" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "success": false, "error": "Invalid API Key provided" })
    );
}

#[actix_rt::test]
async fn test_create_account_link() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/stripe/create-account-link")
        .set_json(&json!({ "accountId": LIVE_ACCOUNT_ID }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body["url"].as_str().unwrap().contains(LIVE_ACCOUNT_ID));

    let links = test_app.state.payments.links.lock().unwrap().clone();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].0, LIVE_ACCOUNT_ID);
    assert_eq!(links[0].1, "https://rooms.example.com/stripe/reauth");
    assert_eq!(links[0].2, "https://rooms.example.com/stripe/success");
}

#[actix_rt::test]
async fn test_create_account_link_requires_account_id() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/stripe/create-account-link")
        .set_json(&json!({}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Account ID is required");
}

#[actix_rt::test]
async fn test_account_status() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/stripe/account-status?accountId={}", LIVE_ACCOUNT_ID))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["account"]["id"], LIVE_ACCOUNT_ID);
    assert_eq!(body["account"]["details_submitted"], true);
    assert_eq!(body["account"]["requirements"]["currently_due"], json!([]));
    assert!(body["account"].get("created").is_none());
}

#[actix_rt::test]
async fn test_account_status_requires_account_id() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/stripe/account-status")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "success": false, "error": "Account ID is required" })
    );
}

#[actix_rt::test]
async fn test_account_status_processor_error() {
    let test_app = TestApp::with(
        FakeProcessor::failing(
            PaymentError::new("No such account: 'acct_missing'").with_code("resource_missing"),
        ),
        None,
    );
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/stripe/account-status?accountId=acct_missing")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No such account: 'acct_missing'");
}

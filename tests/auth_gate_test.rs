mod common;

use std::time::{Duration, SystemTime};

use actix_web::{test, App};
use assignments_api::{mint_token, routes};
use common::{test_security, test_state};

#[actix_web::test]
async fn test_missing_token_is_rejected() {
    let (data, _store) = test_state();
    let app = test::init_service(App::new().app_data(data).configure(routes::configure)).await;

    for uri in ["/", "/findById?id=1", "/findByTags?id=1"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 403, "uri: {uri}");
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Token is missing!");
    }
}

#[actix_web::test]
async fn test_garbage_token_is_rejected() {
    let (data, _store) = test_state();
    let app = test::init_service(App::new().app_data(data).configure(routes::configure)).await;

    let req = test::TestRequest::get()
        .uri("/findById?id=1&token=alshfjfjdklsfj89549834ur")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 403);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Token is invalid!");
}

#[actix_web::test]
async fn test_expired_token_is_rejected() {
    let (data, _store) = test_state();
    let app = test::init_service(App::new().app_data(data).configure(routes::configure)).await;

    let stale = SystemTime::now() - Duration::from_secs(60);
    let token = mint_token("alice", stale, &test_security()).unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/?token={token}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 403);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Token is invalid!");
}

#[actix_web::test]
async fn test_rejected_create_never_reaches_the_store() {
    let (data, store) = test_state();
    let app = test::init_service(App::new().app_data(data).configure(routes::configure)).await;

    // No token at all
    let req = test::TestRequest::post()
        .uri("/assignments")
        .insert_header(("id", "1"))
        .insert_header(("name", "n"))
        .insert_header(("title", "t"))
        .insert_header(("description", "d"))
        .insert_header(("type", "hw"))
        .insert_header(("duration", "1h"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 403);

    // Garbage token
    let req = test::TestRequest::post()
        .uri("/assignments?token=garbage")
        .insert_header(("id", "1"))
        .insert_header(("name", "n"))
        .insert_header(("title", "t"))
        .insert_header(("description", "d"))
        .insert_header(("type", "hw"))
        .insert_header(("duration", "1h"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 403);

    // The handler body never ran in either case
    assert!(store.is_empty());
}

#[actix_web::test]
async fn test_valid_token_reaches_the_handler() {
    let (data, _store) = test_state();
    let app = test::init_service(App::new().app_data(data).configure(routes::configure)).await;

    let token = mint_token("alice", SystemTime::now(), &test_security()).unwrap();
    let req = test::TestRequest::get()
        .uri(&format!("/?token={token}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body = test::read_body(resp).await;
    assert_eq!(body, "Hello, This is a Sample API");
}

#[actix_web::test]
async fn test_login_and_health_are_not_gated() {
    let (data, _store) = test_state();
    let app = test::init_service(App::new().app_data(data).configure(routes::configure)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status().as_u16(), 200);

    // /login without a token gets the basic-auth challenge, not the gate's 403
    let resp = test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
    assert_eq!(resp.status().as_u16(), 401);
}

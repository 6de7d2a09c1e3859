//! End-to-end API flow over the real router
//!
//! Builds the full application (routes + middleware) against an
//! in-memory catalog and a capturing notifier, then drives it with
//! oneshot requests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use storefront_server::api;
use storefront_server::catalog::{CatalogSeed, CatalogStore};
use storefront_server::core::{Config, QuoteCache, ServerState};
use storefront_server::leads::{LeadService, MemoryNotifier, Notifier};

fn seed() -> CatalogSeed {
    serde_json::from_value(json!({
        "categories": [
            { "id": "cat-cargo", "name": "Бортовые прицепы", "slug": "bortovye", "display_order": 1 },
            { "id": "cat-boats", "name": "Прицепы для лодок", "slug": "lodki", "display_order": 2 }
        ],
        "products": [
            {
                "product": {
                    "id": "mzsa-817710",
                    "name": "МЗСА 817710",
                    "base_price": 155000,
                    "category_id": "cat-cargo",
                    "display_order": 1
                },
                "wheel_options": { "default": "R13", "options": ["R13", "R14"] },
                "hub_options": { "default": "112x5", "options": ["112x5"] },
                "tents": [
                    { "tent_id": "t-flat", "name": "Плоский тент", "price": 0, "is_default": true },
                    { "tent_id": "t-18", "name": "Тент 1.8м", "price": 8500 }
                ],
                "accessories": [
                    { "accessory_id": "a-rack", "name": "Дуги и стойки", "price": 2800, "is_available": true },
                    { "accessory_id": "a-winch", "name": "Лебёдка", "price": 3500, "is_available": true }
                ]
            },
            {
                "product": {
                    "id": "bare",
                    "name": "Bare trailer",
                    "base_price": 90000,
                    "category_id": "cat-boats",
                    "display_order": 2
                }
            }
        ]
    }))
    .expect("valid seed")
}

fn test_state() -> (ServerState, Arc<MemoryNotifier>) {
    let catalog = Arc::new(CatalogStore::from_seed(seed()).expect("valid catalog"));
    let notifier = Arc::new(MemoryNotifier::new());
    let leads = Arc::new(LeadService::new(notifier.clone() as Arc<dyn Notifier>));
    let config = Config::with_overrides("unused.json", 0);
    let state = ServerState::new(config, catalog, leads, Arc::new(QuoteCache::new()));
    (state, notifier)
}

fn app() -> (Router, Arc<MemoryNotifier>) {
    let (state, notifier) = test_state();
    (api::build_app().with_state(state), notifier)
}

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request")
}

fn post_json(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app();
    let (status, body) = send(app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["products"], 2);
    assert_eq!(body["categories"], 2);
    assert_eq!(body["lead_sink"], "log");
}

#[tokio::test]
async fn test_list_categories_in_display_order() {
    let (app, _) = app();
    let (status, body) = send(app, get("/api/categories")).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Бортовые прицепы", "Прицепы для лодок"]);
}

#[tokio::test]
async fn test_list_products_with_category_filter() {
    let (app, _) = app();
    let (status, body) = send(app.clone(), get("/api/products")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send(app.clone(), get("/api/products?category=cat-boats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "bare");

    let (status, body) = send(app, get("/api/products?category=ghost")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1002);
}

#[tokio::test]
async fn test_product_detail_bundle() {
    let (app, _) = app();
    let (status, body) = send(app, get("/api/products/mzsa-817710")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["base_price"], 155000);
    assert_eq!(body["wheel_options"]["default"], "R13");
    assert_eq!(body["tents"].as_array().unwrap().len(), 2);
    assert_eq!(body["tents"][0]["is_default"], true);
    assert_eq!(body["accessories"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_product_is_404() {
    let (app, _) = app();
    let (status, body) = send(app, get("/api/products/ghost")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1001);
}

#[tokio::test]
async fn test_quote_defaults_only() {
    let (app, _) = app();
    let (status, body) = send(
        app,
        post_json("/api/products/mzsa-817710/quote", json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["base_price"], 155000);
    assert_eq!(body["wheel"], "R13");
    assert_eq!(body["hub"], "112x5");
    assert_eq!(body["tent"]["tent_id"], "t-flat");
    assert_eq!(body["total_price"], 155000);
}

#[tokio::test]
async fn test_quote_worked_example() {
    // 155 000 + 8 500 + 2 800 + 3 500 = 169 800
    let (app, _) = app();
    let request = json!({
        "tent_id": "t-18",
        "accessories": ["a-rack", "a-winch"]
    });
    let (status, body) = send(
        app,
        post_json("/api/products/mzsa-817710/quote", request),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tent"]["price"], 8500);
    assert_eq!(body["accessories"].as_array().unwrap().len(), 2);
    assert_eq!(body["total_price"], 169800);
}

#[tokio::test]
async fn test_quote_wheel_change_is_price_neutral() {
    let (app, _) = app();
    let (_, base) = send(
        app.clone(),
        post_json("/api/products/mzsa-817710/quote", json!({})),
    )
    .await;
    let (_, with_r14) = send(
        app,
        post_json("/api/products/mzsa-817710/quote", json!({ "wheel": "R14" })),
    )
    .await;

    assert_eq!(base["total_price"], with_r14["total_price"]);
    assert_eq!(with_r14["wheel"], "R14");
}

#[tokio::test]
async fn test_quote_rejects_invalid_selection() {
    let (app, _) = app();
    let (status, body) = send(
        app.clone(),
        post_json("/api/products/mzsa-817710/quote", json!({ "wheel": "R16" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2002);

    let (status, body) = send(
        app,
        post_json(
            "/api/products/mzsa-817710/quote",
            json!({ "accessories": ["a-anchor"] }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2005);
}

#[tokio::test]
async fn test_quote_repeats_identically() {
    // Second call is served from the quote cache and must match exactly
    let (app, _) = app();
    let request = json!({ "tent_id": "t-18", "accessories": ["a-winch", "a-rack"] });
    let (_, first) = send(
        app.clone(),
        post_json("/api/products/mzsa-817710/quote", request.clone()),
    )
    .await;
    let reordered = json!({ "tent_id": "t-18", "accessories": ["a-rack", "a-winch"] });
    let (_, second) = send(
        app,
        post_json("/api/products/mzsa-817710/quote", reordered),
    )
    .await;

    assert_eq!(first["total_price"], second["total_price"]);
    assert_eq!(first["accessories"], second["accessories"]);
}

#[tokio::test]
async fn test_order_lead_accepted_and_notified() {
    let (app, notifier) = app();
    let order = json!({
        "type": "order",
        "productName": "МЗСА 817710",
        "configuration": {
            "wheels": "R13",
            "hub": "112x5",
            "tent": "Тент 1.8м",
            "accessories": ["Дуги и стойки", "Лебёдка"]
        },
        "basePrice": 155000,
        "tentName": "Тент 1.8м",
        "tentPrice": 8500,
        "accessoriesPrices": [
            { "name": "Дуги и стойки", "price": 2800 },
            { "name": "Лебёдка", "price": 3500 }
        ],
        "totalPrice": 169800,
        "name": "Пётр",
        "phone": "+7 (921) 123-45-67"
    });
    let (status, body) = send(app, post_json("/api/leads", order)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "order");
    assert!(body["id"].is_string());

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Новый заказ: МЗСА 817710");
    assert!(sent[0].body.contains("169\u{a0}800\u{a0}₽"));
}

#[tokio::test]
async fn test_callback_lead_accepted() {
    let (app, notifier) = app();
    let (status, body) = send(
        app,
        post_json(
            "/api/leads",
            json!({ "type": "callback", "name": "Иван", "phone": "89211234567" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "callback");
    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test]
async fn test_lead_with_empty_name_is_rejected() {
    let (app, notifier) = app();
    let (status, body) = send(
        app,
        post_json(
            "/api/leads",
            json!({ "type": "callback", "name": "", "phone": "+7 900 000 00 00" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3001);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_lead_with_unknown_type_is_rejected() {
    let (app, notifier) = app();
    let (status, _) = send(
        app,
        post_json(
            "/api/leads",
            json!({ "type": "spam", "name": "x", "phone": "y" }),
        ),
    )
    .await;

    // Axum's Json extractor rejects the unknown tag before the handler runs
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let (app, _) = app();
    let response = app.oneshot(get("/health")).await.expect("response");
    assert!(response.headers().contains_key("x-request-id"));
}

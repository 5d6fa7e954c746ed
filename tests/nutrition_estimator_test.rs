// ABOUTME: Integration tests for the remote-first, catalog-fallback estimation flow
// ABOUTME: Simulates the nutrition API with wiremock: success, errors, bad bodies, timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::float_cmp)]

mod common;

use nutrition_estimator::{
    errors::EstimateError,
    models::EstimateSource,
    nutrition::NutritionEstimator,
};
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const NUTRITION_PATH: &str = "/v1/nutrition";

async fn start_api() -> (MockServer, String) {
    common::init_test_logging();
    let server = MockServer::start().await;
    let base_url = format!("{}{NUTRITION_PATH}", server.uri());
    (server, base_url)
}

#[tokio::test]
async fn test_remote_success_short_circuits_catalog() {
    let (server, base_url) = start_api().await;

    Mock::given(method("GET"))
        .and(path(NUTRITION_PATH))
        .and(query_param("query", "1 cup rice"))
        .and(header("X-Api-Key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"name": "rice", "calories": 206.4, "serving_size_g": 158.0}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let estimator = common::remote_estimator(&base_url, 5);
    let estimate = estimator.estimate("  1 cup rice  ").await.unwrap();

    assert_eq!(estimate.name, "rice");
    assert_eq!(estimate.calories_per_serving, 206.4);
    assert_eq!(estimate.serving_size_grams, Some(158.0));
    assert_eq!(estimate.source, EstimateSource::RemoteApi);
}

#[tokio::test]
async fn test_server_error_falls_back_to_catalog() {
    let (server, base_url) = start_api().await;

    Mock::given(method("GET"))
        .and(path(NUTRITION_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let estimator = common::remote_estimator(&base_url, 5);
    let estimate = estimator.estimate("banana").await.unwrap();

    assert_eq!(estimate.name, "Banana (1 medium)");
    assert_eq!(estimate.calories_per_serving, 105.0);
    assert_eq!(estimate.source, EstimateSource::LocalDb);
}

#[tokio::test]
async fn test_malformed_body_falls_back_to_catalog() {
    let (server, base_url) = start_api().await;

    Mock::given(method("GET"))
        .and(path(NUTRITION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let estimator = common::remote_estimator(&base_url, 5);
    let estimate = estimator.estimate("Red Apple").await.unwrap();

    assert_eq!(estimate.name, "Apple (1 medium)");
    assert_eq!(estimate.serving_size_grams, Some(182.0));
    assert_eq!(estimate.source, EstimateSource::LocalDb);
}

#[tokio::test]
async fn test_empty_result_list_falls_back_to_catalog() {
    let (server, base_url) = start_api().await;

    Mock::given(method("GET"))
        .and(path(NUTRITION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    let estimator = common::remote_estimator(&base_url, 5);
    let estimate = estimator.estimate("white rice").await.unwrap();

    assert_eq!(estimate.name, "Rice, cooked (1 cup)");
    assert_eq!(estimate.source, EstimateSource::LocalDb);
}

#[tokio::test]
async fn test_timeout_falls_back_to_catalog() {
    let (server, base_url) = start_api().await;

    Mock::given(method("GET"))
        .and(path(NUTRITION_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"items": [{"name": "chicken", "calories": 1}]}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let estimator = common::remote_estimator(&base_url, 1);
    let estimate = estimator.estimate("poultry").await.unwrap();

    assert_eq!(estimate.name, "Chicken breast, cooked (100g)");
    assert_eq!(estimate.source, EstimateSource::Local);
}

#[tokio::test]
async fn test_unreachable_api_falls_back_to_catalog() {
    common::init_test_logging();

    // Nothing listens on port 1
    let estimator = common::remote_estimator("http://127.0.0.1:1/v1/nutrition", 2);
    let estimate = estimator.estimate("banana").await.unwrap();

    assert_eq!(estimate.source, EstimateSource::LocalDb);
}

#[tokio::test]
async fn test_blank_query_never_reaches_api() {
    let (server, base_url) = start_api().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let estimator = common::remote_estimator(&base_url, 5);
    assert_eq!(estimator.estimate("").await, Err(EstimateError::EmptyQuery));
    assert_eq!(estimator.estimate(" \t ").await, Err(EstimateError::EmptyQuery));
}

#[tokio::test]
async fn test_remote_failure_without_local_match_is_not_found() {
    let (server, base_url) = start_api().await;

    Mock::given(method("GET"))
        .and(path(NUTRITION_PATH))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let estimator = common::remote_estimator(&base_url, 5);
    assert_eq!(
        estimator.estimate("xyz-nonexistent-food").await,
        Err(EstimateError::not_found("xyz-nonexistent-food"))
    );
}

#[tokio::test]
async fn test_partial_remote_item_is_coerced() {
    let (server, base_url) = start_api().await;

    Mock::given(method("GET"))
        .and(path(NUTRITION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"calories": "n/a"}]
        })))
        .mount(&server)
        .await;

    let estimator = common::remote_estimator(&base_url, 5);
    let estimate = estimator.estimate(" dragon fruit ").await.unwrap();

    assert_eq!(estimate.name, "dragon fruit");
    assert_eq!(estimate.calories_per_serving, 0.0);
    assert_eq!(estimate.serving_size_grams, None);
    assert_eq!(estimate.source, EstimateSource::RemoteApi);
}

#[tokio::test]
async fn test_catalog_only_estimator_never_calls_remote() {
    common::init_test_logging();

    let estimator = NutritionEstimator::new(common::sample_catalog());
    assert!(!estimator.remote_enabled());

    // "apple" is a keyword of the sample apple entry
    let estimate = estimator.estimate("APPLE").await.unwrap();
    assert_eq!(estimate.name, "Apple (1 medium)");
    assert_eq!(estimate.calories_per_serving, 95.0);

    // token overlap: "cooked" and "rice" both hit the rice entry
    let estimate = estimator.estimate("cooked rice bowl").await.unwrap();
    assert_eq!(estimate.name, "Rice, cooked (1 cup)");
}

//! API integration tests
//!
//! Run against a live server with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

fn preset_catalog() -> Value {
    json!([
        {"id": "recess", "code": "例", "name": "Recess Day", "kind": "recess"},
        {"id": "rest", "code": "休", "name": "Rest Day", "kind": "rest_day"},
        {"id": "evening", "code": "晚", "name": "Evening Flight", "kind": "flight",
         "start_time": "12:45", "end_time": "19:45"},
        {"id": "morning", "code": "早", "name": "Morning Flight", "kind": "flight",
         "start_time": "06:35", "end_time": "13:40"}
    ])
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_list_presets() {
    let client = Client::new();

    let response = client
        .get(format!("{}/duties/presets", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let presets = body.as_array().expect("Expected an array");
    assert_eq!(presets.len(), 8);
    assert!(presets.iter().any(|p| p["code"] == "例"));
    assert!(presets.iter().any(|p| p["code"] == "休"));
}

#[tokio::test]
#[ignore]
async fn test_duty_metrics() {
    let client = Client::new();

    let response = client
        .post(format!("{}/duties/metrics", BASE_URL))
        .json(&json!({
            "duties": [
                {"id": "evening", "code": "晚", "name": "Evening Flight", "kind": "flight",
                 "start_time": "12:45", "end_time": "19:45"}
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let entry = &body["metrics"][0];
    assert_eq!(entry["fdp_minutes"], 420);
    assert_eq!(entry["minimum_rest_minutes"], 660);
    assert_eq!(entry["effective_end_time"], "20:15");
}

#[tokio::test]
#[ignore]
async fn test_validate_roster_reports_insufficient_rest() {
    let client = Client::new();

    let response = client
        .post(format!("{}/roster/validate", BASE_URL))
        .json(&json!({
            "catalog": preset_catalog(),
            "roster": {
                "year": 2026,
                "month": 6,
                "assignments": {"16": "evening", "17": "morning"}
            }
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let violations = body["violations"].as_array().expect("Expected violations");
    assert!(violations.iter().any(|v| v
        == "Day 16-17: Insufficient rest time (10h 20m < required 11h 0m)"));
}

#[tokio::test]
#[ignore]
async fn test_roster_suggestions() {
    let client = Client::new();

    let response = client
        .post(format!("{}/roster/suggestions", BASE_URL))
        .json(&json!({
            "catalog": preset_catalog(),
            "roster": {"year": 2026, "month": 6, "assignments": {}}
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let suggestions = body["suggestions"].as_array().expect("Expected suggestions");
    assert!(!suggestions.is_empty());
    assert_eq!(suggestions[0]["kind"], "required");
    assert_eq!(suggestions[0]["text"], "例");
}

#[tokio::test]
#[ignore]
async fn test_day_status() {
    let client = Client::new();

    let response = client
        .post(format!("{}/roster/day-status", BASE_URL))
        .json(&json!({
            "catalog": preset_catalog(),
            "roster": {
                "year": 2026,
                "month": 6,
                "assignments": {"13": "rest", "14": "recess", "9": "evening", "10": "morning"}
            },
            "day": 10
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["day"], 10);
    assert_eq!(body["status"]["kind"], "rest-time");
    assert_eq!(body["status"]["text"], "earliest: 07:15");
}

#[tokio::test]
#[ignore]
async fn test_prefill_weekends() {
    let client = Client::new();

    let response = client
        .post(format!("{}/roster/prefill-weekends", BASE_URL))
        .json(&json!({"year": 2026, "month": 6}))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let assignments = body["assignments"].as_object().expect("Expected a map");
    assert_eq!(assignments.len(), 8);
    assert_eq!(assignments["6"], "rest");
    assert_eq!(assignments["7"], "recess");
}

#[tokio::test]
#[ignore]
async fn test_invalid_month_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/roster/validate", BASE_URL))
        .json(&json!({
            "catalog": [],
            "roster": {"year": 2026, "month": 13, "assignments": {}}
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_malformed_template_time_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/duties/metrics", BASE_URL))
        .json(&json!({
            "duties": [
                {"id": "x", "code": "X", "name": "Custom", "kind": "ground",
                 "start_time": "25:99", "end_time": "17:00"}
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

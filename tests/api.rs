mod common;

use std::sync::Arc;

use common::{PASSWORD, USERNAME, config_for, mock_portal};
use hac_api::api::router;
use hac_api::config::HacConfig;
use serde_json::{Value, json};

/// Serves the API on an ephemeral port and returns its base URL.
async fn spawn_api(config: Arc<HacConfig>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(config)).await.unwrap();
    });
    format!("http://{addr}")
}

async fn post(base: &str, endpoint: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{base}{endpoint}"))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

fn good_credentials() -> Value {
    json!({ "username": USERNAME, "password": PASSWORD })
}

const ENDPOINTS: [&str; 7] = [
    "/api/info",
    "/api/schedule",
    "/api/currentclasses",
    "/api/classes",
    "/api/transcript",
    "/api/gpa",
    "/api/all",
];

#[tokio::test]
async fn bad_credentials_are_401_everywhere() {
    let server = mock_portal().await;
    let base = spawn_api(config_for(&server)).await;

    for endpoint in ENDPOINTS {
        let body = json!({ "username": USERNAME, "password": "wrong", "quarter": "current" });
        let (status, json) = post(&base, endpoint, body).await;
        assert_eq!(status, 401, "{endpoint}");
        assert_eq!(json, json!({ "detail": "Invalid credentials" }), "{endpoint}");
    }
}

#[tokio::test]
async fn malformed_bodies_are_401() {
    let server = mock_portal().await;
    let base = spawn_api(config_for(&server)).await;

    for endpoint in ENDPOINTS {
        let (status, json) = post(&base, endpoint, json!({ "username": USERNAME })).await;
        assert_eq!(status, 401, "{endpoint}");
        assert_eq!(json["detail"], "Invalid credentials");

        let (status, _) = post(&base, endpoint, json!({ "username": "", "password": "" })).await;
        assert_eq!(status, 401, "{endpoint}");
    }
}

#[tokio::test]
async fn unreachable_portal_is_401() {
    let config = HacConfig::new("http://127.0.0.1:1/").unwrap();
    let base = spawn_api(Arc::new(config)).await;

    let (status, json) = post(&base, "/api/info", good_credentials()).await;
    assert_eq!(status, 401);
    assert_eq!(json["detail"], "Invalid credentials");
}

#[tokio::test]
async fn info_endpoint() {
    let server = mock_portal().await;
    let base = spawn_api(config_for(&server)).await;

    let (status, json) = post(&base, "/api/info", good_credentials()).await;
    assert_eq!(status, 200);
    assert_eq!(
        json,
        json!({
            "id": "123456",
            "name": "Doe, John",
            "birthdate": "01/01/2008",
            "campus": "Independence High School",
            "grade": "11",
            "counselor": "Smith, Jane"
        })
    );
}

#[tokio::test]
async fn schedule_endpoint() {
    let server = mock_portal().await;
    let base = spawn_api(config_for(&server)).await;

    let (status, json) = post(&base, "/api/schedule", good_credentials()).await;
    assert_eq!(status, 200);
    let rows = json["studentSchedule"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["courseCode"], "MTH45300A - 1");
    assert_eq!(rows[0]["markingPeriods"], "Q1, Q2");
    assert_eq!(rows[1]["teacherEmail"], "");
}

#[tokio::test]
async fn classes_current_matches_currentclasses() {
    let server = mock_portal().await;
    let base = spawn_api(config_for(&server)).await;

    let (status, current) = post(&base, "/api/currentclasses", good_credentials()).await;
    assert_eq!(status, 200);

    let mut body = good_credentials();
    body["quarter"] = json!("current");
    let (status, via_classes) = post(&base, "/api/classes", body).await;
    assert_eq!(status, 200);

    assert_eq!(current, via_classes);
    let names: Vec<_> = current["currentClasses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|course| course["name"].as_str().unwrap().to_string())
        .collect();
    assert!(names.iter().all(|name| !name.contains("Art I")));
}

#[tokio::test]
async fn classes_past_quarter() {
    let server = mock_portal().await;
    let base = spawn_api(config_for(&server)).await;

    let mut body = good_credentials();
    body["quarter"] = json!("1");
    let (status, json) = post(&base, "/api/classes", body).await;
    assert_eq!(status, 200);
    assert!(json.get("currentClasses").is_none());
    assert_eq!(
        json["pastClasses"][0]["assignments"][0]["name"],
        "Q1 Project"
    );
}

#[tokio::test]
async fn transcript_and_gpa_endpoints() {
    let server = mock_portal().await;
    let base = spawn_api(config_for(&server)).await;

    let (status, json) = post(&base, "/api/transcript", good_credentials()).await;
    assert_eq!(status, 200);
    let years = json["studentTranscript"].as_array().unwrap();
    assert_eq!(years[0]["yearsAttended"], "2022-2023");
    assert_eq!(years[0]["courses"][1]["courseName"], "Geometry Adv");

    let (status, json) = post(&base, "/api/gpa", good_credentials()).await;
    assert_eq!(status, 200);
    assert_eq!(
        json,
        json!({ "unweightedGPA": "3.9500", "weightedGPA": "4.5123", "rank": "25 / 750" })
    );
}

#[tokio::test]
async fn all_endpoint_combines_pages() {
    let server = mock_portal().await;
    let base = spawn_api(config_for(&server)).await;

    let (status, json) = post(&base, "/api/all", good_credentials()).await;
    assert_eq!(status, 200);
    assert_eq!(json["studentInfo"]["id"], "123456");
    assert_eq!(json["studentSchedule"].as_array().unwrap().len(), 3);
    assert_eq!(json["currentClasses"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn docs_page_is_served() {
    let server = mock_portal().await;
    let base = spawn_api(config_for(&server)).await;

    let response = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let page = response.text().await.unwrap();
    assert!(page.contains("/api/currentclasses"));
    assert!(page.contains("/api/gpa"));
}

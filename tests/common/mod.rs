#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use hac_api::config::HacConfig;
use wiremock::matchers::{body_string_contains, header, header_regex, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LOGON: &str = include_str!("../fixtures/logon.html");
pub const REGISTRATION: &str = include_str!("../fixtures/registration.html");
pub const CLASSES: &str = include_str!("../fixtures/classes.html");
pub const ASSIGNMENTS: &str = include_str!("../fixtures/assignments.html");
pub const TRANSCRIPT: &str = include_str!("../fixtures/transcript.html");

pub const USERNAME: &str = "student";
pub const PASSWORD: &str = "secret";
pub const TOKEN: &str = "CfDJ8-test-token-42";

const LOGON_PATH: &str = "/HomeAccess/Account/LogOn";
pub const ASSIGNMENTS_PATH: &str = "/HomeAccess/Content/Student/Assignments.aspx";
pub const AUTH_COOKIE: &str = r"\.AuthCookie=granted";

pub fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body)
}

/// Past report card run as served after the classwork postback.
pub fn past_assignments() -> String {
    ASSIGNMENTS
        .replace("Unit 1 Test", "Q1 Project")
        .replace("01/15/2025", "10/01/2024")
}

/// The classwork page as served with a different set of ASP.NET state tokens.
pub fn assignments_with_state(view_state: &str, generator: &str, validation: &str) -> String {
    ASSIGNMENTS
        .replace("dDwtMTA4NzY5MTQ3Nzs7Pg==", view_state)
        .replace("B0093F3C", generator)
        .replace("/wEdAAq7evValidation==", validation)
}

/// A fake portal that accepts `USERNAME`/`PASSWORD` and serves the fixtures.
///
/// Page GETs are mounted at priority 5 so tests can put single-use
/// overrides in front of them.
pub async fn mock_portal() -> MockServer {
    mock_portal_with(REGISTRATION).await
}

pub async fn mock_portal_with(registration: &str) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LOGON_PATH))
        .respond_with(html(LOGON).insert_header("set-cookie", "ASP.NET_SessionId=sess1; Path=/"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(LOGON_PATH))
        .and(header("__RequestVerificationToken", TOKEN))
        .and(header("x-requested-with", "XMLHttpRequest"))
        .and(body_string_contains(&format!("__RequestVerificationToken={TOKEN}")))
        .and(body_string_contains(&format!("LogOnDetails.UserName={USERNAME}")))
        .and(body_string_contains(&format!("LogOnDetails.Password={PASSWORD}")))
        .and(body_string_contains("Database=10"))
        .respond_with(
            html("<html><body>Welcome</body></html>")
                .insert_header("set-cookie", ".AuthCookie=granted; Path=/"),
        )
        .with_priority(1)
        .mount(&server)
        .await;

    // Rejected logons re-render the form without an auth cookie.
    Mock::given(method("POST"))
        .and(path(LOGON_PATH))
        .respond_with(html(LOGON))
        .with_priority(10)
        .mount(&server)
        .await;

    let pages = [
        ("/HomeAccess/Content/Student/Registration.aspx", registration.to_string()),
        ("/HomeAccess/Content/Student/Classes.aspx", CLASSES.to_string()),
        (ASSIGNMENTS_PATH, ASSIGNMENTS.to_string()),
        ("/HomeAccess/Content/Student/Transcript.aspx", TRANSCRIPT.to_string()),
    ];
    for (page, body) in pages {
        Mock::given(method("GET"))
            .and(path(page))
            .and(header_regex("cookie", AUTH_COOKIE))
            .respond_with(html(&body))
            .with_priority(5)
            .mount(&server)
            .await;
    }

    Mock::given(method("POST"))
        .and(path(ASSIGNMENTS_PATH))
        .and(header_regex("cookie", AUTH_COOKIE))
        .and(body_string_contains("__VIEWSTATE=dDwtMTA4NzY5MTQ3Nzs7Pg%3D%3D"))
        .and(body_string_contains("__VIEWSTATEGENERATOR=B0093F3C"))
        .and(body_string_contains("__EVENTVALIDATION="))
        .and(body_string_contains("ctl00%24plnMain%24ddlReportCardRuns=1-2025"))
        .respond_with(html(&past_assignments()))
        .with_priority(1)
        .mount(&server)
        .await;

    // Anything else without a session goes back to the logon page.
    Mock::given(path_regex(r"^/HomeAccess/Content/"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", "/HomeAccess/Account/LogOn?ReturnUrl=%2fHomeAccess%2f"),
        )
        .with_priority(10)
        .mount(&server)
        .await;

    server
}

pub fn config_for(server: &MockServer) -> Arc<HacConfig> {
    let config = HacConfig::default()
        .with_base_url(&server.uri())
        .expect("mock server uri is a valid base url")
        .with_database("10")
        .with_timeout(Duration::from_secs(5))
        .with_connect_timeout(Duration::from_secs(2));
    Arc::new(config)
}

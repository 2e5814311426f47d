use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Html;
use log::debug;

use crate::api::error::ApiError;
use crate::core::{Hac, HacSession};
use crate::model::responses::{
    AllDataResponse, ClassesResponse, CurrentClassesResponse, ScheduleResponse,
    TranscriptResponse,
};
use crate::model::{ClassesRequest, Credentials, GpaInfo, StudentInfo, Term};

type Body<T> = Result<Json<T>, JsonRejection>;

/// Fresh session for one API call; sessions are never shared or reused.
async fn login(hac: &Hac, credentials: &Credentials) -> Result<HacSession, ApiError> {
    if credentials.username.trim().is_empty() || credentials.password.is_empty() {
        return Err(ApiError::bad_request("empty username or password"));
    }
    Ok(hac.login(credentials).await?)
}

// Usernames identify students; keep them out of default-level logs.
fn log_request(endpoint: &str, username: &str) {
    debug!("{endpoint} for {username}");
}

pub async fn docs() -> Html<&'static str> {
    Html(include_str!("docs.html"))
}

pub async fn info(
    State(hac): State<Hac>,
    body: Body<Credentials>,
) -> Result<Json<StudentInfo>, ApiError> {
    let Json(credentials) = body?;
    log_request("/api/info", &credentials.username);
    let session = login(&hac, &credentials).await?;
    Ok(Json(session.student_info().await?))
}

pub async fn schedule(
    State(hac): State<Hac>,
    body: Body<Credentials>,
) -> Result<Json<ScheduleResponse>, ApiError> {
    let Json(credentials) = body?;
    log_request("/api/schedule", &credentials.username);
    let session = login(&hac, &credentials).await?;
    Ok(Json(ScheduleResponse {
        student_schedule: session.schedule().await?,
    }))
}

pub async fn current_classes(
    State(hac): State<Hac>,
    body: Body<Credentials>,
) -> Result<Json<CurrentClassesResponse>, ApiError> {
    let Json(credentials) = body?;
    log_request("/api/currentclasses", &credentials.username);
    let session = login(&hac, &credentials).await?;
    Ok(Json(CurrentClassesResponse {
        current_classes: session.current_classes().await?,
    }))
}

pub async fn classes(
    State(hac): State<Hac>,
    body: Body<ClassesRequest>,
) -> Result<Json<ClassesResponse>, ApiError> {
    let Json(request) = body?;
    let term = Term::parse(&request.quarter);
    log_request("/api/classes", &request.credentials.username);
    debug!("/api/classes term {:?}", term);

    let session = login(&hac, &request.credentials).await?;
    let courses = session.classes(&term).await?;
    Ok(Json(match term {
        Term::Current => ClassesResponse::Current {
            current_classes: courses,
        },
        Term::Past(_) => ClassesResponse::Past {
            past_classes: courses,
        },
    }))
}

pub async fn transcript(
    State(hac): State<Hac>,
    body: Body<Credentials>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let Json(credentials) = body?;
    log_request("/api/transcript", &credentials.username);
    let session = login(&hac, &credentials).await?;
    Ok(Json(TranscriptResponse {
        student_transcript: session.transcript().await?,
    }))
}

pub async fn gpa(
    State(hac): State<Hac>,
    body: Body<Credentials>,
) -> Result<Json<GpaInfo>, ApiError> {
    let Json(credentials) = body?;
    log_request("/api/gpa", &credentials.username);
    let session = login(&hac, &credentials).await?;
    Ok(Json(session.gpa().await?))
}

pub async fn all(
    State(hac): State<Hac>,
    body: Body<Credentials>,
) -> Result<Json<AllDataResponse>, ApiError> {
    let Json(credentials) = body?;
    log_request("/api/all", &credentials.username);
    let session = login(&hac, &credentials).await?;

    let student_info = session.student_info().await?;
    let student_schedule = session.schedule().await?;
    let current_classes = session.current_classes().await?;

    Ok(Json(AllDataResponse {
        student_info,
        student_schedule,
        current_classes,
    }))
}

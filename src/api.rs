//! HTTP seam to the activities backend.
//!
//! `ActivitiesApi` is what the board talks to; `HttpApi` is the browser
//! implementation over `gloo-net`. Status/body interpretation lives in plain
//! functions so it can be checked without a browser.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use urlencoding::encode;

use crate::error::ApiError;
use crate::model::{parse_snapshot, ActivitiesSnapshot};

/// `{"message": ...}` on success, `{"detail": ...}` on error.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ApiReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

pub fn activities_url(base: &str) -> String {
    format!("{base}/activities")
}

pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/signup?email={}",
        encode(activity),
        encode(email)
    )
}

pub fn unregister_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/participants?email={}",
        encode(activity),
        encode(email)
    )
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

pub fn interpret_snapshot(status: u16, body: &str) -> Result<ActivitiesSnapshot, ApiError> {
    if !is_success(status) {
        let detail = serde_json::from_str::<ApiReply>(body).ok().and_then(|r| r.detail);
        return Err(ApiError::Server { status, detail });
    }
    parse_snapshot(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Signup replies must parse whatever the status; a broken body is
/// `Malformed`, which the board reports like a dropped request.
pub fn interpret_signup(status: u16, body: &str) -> Result<ApiReply, ApiError> {
    let reply = serde_json::from_str::<ApiReply>(body)
        .map_err(|e| ApiError::Malformed(format!("HTTP {status}: {e}")))?;
    if is_success(status) {
        Ok(reply)
    } else {
        Err(ApiError::Server {
            status,
            detail: reply.detail,
        })
    }
}

/// Unregister replies are lenient: a missing or broken body is `{}`.
pub fn interpret_unregister(status: u16, body: &str) -> Result<ApiReply, ApiError> {
    let reply = serde_json::from_str::<ApiReply>(body).unwrap_or_default();
    if is_success(status) {
        Ok(reply)
    } else {
        Err(ApiError::Server {
            status,
            detail: reply.detail,
        })
    }
}

#[allow(async_fn_in_trait)]
pub trait ActivitiesApi {
    async fn fetch_activities(&self) -> Result<ActivitiesSnapshot, ApiError>;
    async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError>;
    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

async fn read_body(resp: Response) -> (u16, String) {
    let status = resp.status();
    // A body that can't be read is an empty body; the interpreters decide.
    let body = resp.text().await.unwrap_or_default();
    (status, body)
}

impl ActivitiesApi for HttpApi {
    async fn fetch_activities(&self) -> Result<ActivitiesSnapshot, ApiError> {
        let resp = Request::get(&activities_url(&self.base))
            .send()
            .await
            .map_err(transport)?;
        let (status, body) = read_body(resp).await;
        interpret_snapshot(status, &body)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError> {
        let resp = Request::post(&signup_url(&self.base, activity, email))
            .send()
            .await
            .map_err(transport)?;
        let (status, body) = read_body(resp).await;
        interpret_signup(status, &body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError> {
        let resp = Request::delete(&unregister_url(&self.base, activity, email))
            .send()
            .await
            .map_err(transport)?;
        let (status, body) = read_body(resp).await;
        interpret_unregister(status, &body)
    }
}

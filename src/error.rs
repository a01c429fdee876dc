use thiserror::Error;

/// Why a request against the activities API did not produce the expected value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-2xx status; `detail` is the server's `{"detail": ...}` when present.
    #[error("server returned HTTP {status}{}", fmt_detail(.detail))]
    Server { status: u16, detail: Option<String> },

    /// 2xx status whose body did not parse as the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

fn fmt_detail(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl ApiError {
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

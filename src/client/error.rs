use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("failed to reach task API")]
    #[diagnostic(
        code(taskdeck::client::transport),
        help(
            "Is the task API server running? Check TASKDECK_API_URL and that the host is reachable."
        )
    )]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    #[error("API error ({status} {reason}): {body}")]
    #[diagnostic(code(taskdeck::client::api))]
    Api {
        status: u16,
        reason: &'static str,
        /// Raw response body; callers must not assume it is JSON.
        body: String,
    },

    #[error("invalid {entity} response from API: {source}")]
    #[diagnostic(
        code(taskdeck::client::decode),
        help("The server returned data in an unexpected shape. This might indicate a version mismatch.")
    )]
    Decode {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status for API errors, `None` for transport/decode failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(source: reqwest::Error) -> Self {
        ApiError::Transport { source }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

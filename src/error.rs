use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("invalid priority '{0}', expected one of: Low, Medium, High, Critical")]
    InvalidPriority(String),

    #[error("invalid status '{0}', expected one of: Open, In-Progress, Closed")]
    InvalidStatus(String),

    #[error("unknown route '{0}', expected one of: submit, tickets")]
    UnknownRoute(String),

    #[error("invalid ticket: {0}")]
    Validation(String),

    // Backend transport errors
    #[error("backend returned HTTP {status}: {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid backend URL '{0}': {1}")]
    InvalidUrl(String, url::ParseError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl DeskError {
    /// Whether this error came from talking to the backend.
    ///
    /// Views collapse every one of these into a single user-facing message.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DeskError::Api { .. } | DeskError::Http(_) | DeskError::Json(_)
        )
    }

    /// HTTP status code of the failed request, if the backend answered at all.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            DeskError::Api { status, .. } => Some(*status),
            DeskError::Http(e) => e.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DeskError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarChartError {
    #[error("GitHub API returned {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Missing field `{field}` in repository {index}")]
    MissingFieldError { field: String, index: usize },

    #[error("Invalid field `{field}` in repository {index}: {reason}")]
    InvalidField {
        field: String,
        index: usize,
        reason: String,
    },

    #[error("No repositories to plot")]
    EmptyData,

    #[error("Invalid repository: {0}")]
    InvalidRepoSlug(String),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Chart rendering error: {0}")]
    RenderError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Environment error: {0}")]
    EnvError(String),
}

impl From<url::ParseError> for StarChartError {
    fn from(err: url::ParseError) -> Self {
        StarChartError::InvalidBaseUrl(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StarChartError>;

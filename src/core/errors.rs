use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request error: {0}")]
    Http(Box<reqwest::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Http(Box::new(error))
    }
}

impl ApiError {
    /// True when the request never produced an HTTP status (connection
    /// refused, DNS failure, a dropped socket mid-body).
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Http(_))
    }
}

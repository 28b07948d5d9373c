use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordbookError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("WordbookError: {0}")]
    Custom(String),
}

impl WordbookError {
    pub fn status(&self) -> Option<u16> {
        match self {
            WordbookError::Status { status, .. } => Some(*status),
            WordbookError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for WordbookError {
    fn from(error: std::io::Error) -> Self {
        WordbookError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for WordbookError {
    fn from(error: reqwest::Error) -> Self {
        WordbookError::Reqwest(Box::new(error))
    }
}

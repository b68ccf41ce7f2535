use thiserror::Error;

fn format_detail(detail: &Option<String>) -> String {
    if let Some(detail) = detail {
        return format!(": {detail}");
    }

    return "".to_string();
}

/// Failure of a request to the document service. The UI collapses every
/// variant into one fixed message per flow; the variants only feed logs.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("service answered with status {status}{}", format_detail(.detail))]
    Status { status: u16, detail: Option<String> },

    #[error("malformed response body: {0}")]
    MalformedBody(String),

    #[error("unable to read document: {0}")]
    File(#[from] std::io::Error),
}

impl ServiceError {
    /// Short tag used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Network(_) => return "network",
            ServiceError::Status { .. } => return "status",
            ServiceError::MalformedBody(_) => return "malformed-body",
            ServiceError::File(_) => return "file",
        }
    }
}

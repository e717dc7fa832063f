use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),
    #[error("OpenAI error: {status} - {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Parse error: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("OpenAI returned no choices")]
    EmptyResponse,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid catalog format (expected JSON): {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Empty keyword in catalog entry '{entry}'")]
    EmptyKeyword { entry: String },
}

use thiserror::Error;

/// Everything that can go wrong during one relay cycle. Validation and
/// configuration problems are surfaced directly; once the upstream call is
/// in scope, errors are caught and downgraded to a 200 response whose body
/// carries `kind()` as the error marker.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("DeepSeek API key missing or placeholder")]
    Configuration,
    #[error("Upstream returned {status}: {detail}")]
    UpstreamHttp { status: u16, detail: String },
    #[error("Upstream payload missing choices[0].message.content")]
    UpstreamFormat,
    #[error("Upstream call timed out")]
    Timeout,
    #[error("Network error: {0}")]
    Network(String),
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Stable tag for the `error` field of the response body. Upstream HTTP
    /// failures are sub-classified by status.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::Configuration => "configuration",
            AppError::UpstreamHttp { status, .. } => match *status {
                401 => "upstream_auth",
                429 => "rate_limited",
                s if s >= 500 => "upstream_unavailable",
                _ => "upstream_error",
            },
            AppError::UpstreamFormat => "bad_payload",
            AppError::Timeout => "timeout",
            AppError::Network(_) => "network",
            AppError::Unknown(_) => "unknown",
        }
    }
}

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum PosFlowError {
    /// Every attempt exceeded the configured timeout.
    #[error(
        "request timed out after {timeout_ms} ms ({attempts} attempt(s)); check your connection and try again"
    )]
    Timeout { timeout_ms: u64, attempts: u32 },
    /// The server could not be reached on any attempt.
    #[error("cannot connect to server at {url} ({attempts} attempt(s)); ensure the backend is running")]
    Connection {
        url: String,
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },
    /// Non-success HTTP status with the server-provided message when present.
    #[error("http error {status}: {message}")]
    Http { status: u16, message: String },
    /// Any other request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    /// Response body or payload could not be (de)serialized.
    #[error("decode error: {0}")]
    Decode(String),
    /// Endpoint path rejected before any network call.
    #[error("invalid endpoint '{0}'")]
    InvalidEndpoint(String),
    /// Client configuration could not be built.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Coarse error class consumed by UI callers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    Timeout,
    ConnectionFailure,
    Http,
    Unknown,
}

impl PosFlowError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Connection { .. } => ErrorKind::ConnectionFailure,
            Self::Http { .. } => ErrorKind::Http,
            Self::Transport(_) | Self::Decode(_) | Self::InvalidEndpoint(_) | Self::Config(_) => {
                ErrorKind::Unknown
            }
        }
    }

    /// Returns `true` for network-level failures that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self.kind(), ErrorKind::Timeout | ErrorKind::ConnectionFailure)
    }

    /// HTTP status code, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

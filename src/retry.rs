//! Error classification for the retry loop.

use crate::PosFlowError;

/// Maps a `reqwest` failure onto the error taxonomy.
///
/// Priority: timeout, then connection failure, then passed through unchanged.
pub(crate) fn classify_transport(
    err: reqwest::Error,
    url: &str,
    timeout_ms: u64,
    attempts: u32,
) -> PosFlowError {
    if err.is_timeout() {
        PosFlowError::Timeout {
            timeout_ms,
            attempts,
        }
    } else if err.is_connect() {
        PosFlowError::Connection {
            url: url.to_owned(),
            attempts,
            source: err,
        }
    } else {
        PosFlowError::Transport(err)
    }
}

/// Decides whether a failed attempt (1-based) is followed by another one.
pub(crate) fn should_retry(err: &PosFlowError, attempt: u32, max_attempts: u32) -> bool {
    err.is_transient() && attempt < max_attempts
}

use std::io;

use thiserror::Error;

/// Failure while decoding a shared QR payload. Any variant means the link is
/// invalid or corrupted; callers must not use a partially decoded payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure in the key-value store backing the gallery. The in-memory view may
/// already reflect the attempted change; durability is best-effort.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage read failed: {0}")]
    Read(#[source] io::Error),
    #[error("storage write failed: {0}")]
    Write(#[source] io::Error),
    #[error("failed to encode gallery state: {0}")]
    Encode(#[from] serde_json::Error),
}

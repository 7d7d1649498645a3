use thiserror::Error;

/// Why a link could not be turned into a node.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JSON payload is not an object")]
    NotAnObject,

    #[error("Malformed URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Link has no host")]
    MissingHost,

    #[error("Link is missing field: {0}")]
    MissingField(&'static str),
}

//! Frontend Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors from talking to the CivicPulse API or building requests
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ApiError {
    /// Wrap a rejected JS promise or thrown exception
    pub fn network(err: JsValue) -> Self {
        Self::Network(js_message(&err))
    }

    pub fn decode(err: impl ToString) -> Self {
        Self::Decode(err.to_string())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err.to_string())
    }
}

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

pub type ApiResult<T> = Result<T, ApiError>;

//! CivicPulse API Bindings
//!
//! Fetch wrappers for the REST backend, organized by domain. Each domain
//! module pairs pure URL builders with the async calls that use them.

mod items;
mod marketplace;
mod events;
mod directory;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::{ApiError, ApiResult};

// Re-export all public items
pub use items::*;
pub use marketplace::*;
pub use events::*;
pub use directory::*;

/// Unreserved characters stay literal; everything else is percent-encoded
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

// ========================
// Query Strings
// ========================

/// Ordered query-string builder
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always include `key`
    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Include `key` only when the value is present and not blank
    pub fn opt(self, key: &'static str, value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Append the encoded query to `base`
    pub fn to_url(&self, base: &str) -> String {
        if self.pairs.is_empty() {
            return base.to_string();
        }
        let encoded: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, QUERY_VALUE)))
            .collect();
        format!("{}?{}", base, encoded.join("&"))
    }
}

// ========================
// Fetch Plumbing
// ========================

fn build_request(url: &str, method: &str, body: Option<String>) -> ApiResult<Request> {
    let init = RequestInit::new();
    init.set_method(method);
    init.set_mode(RequestMode::Cors);
    if let Some(body) = &body {
        init.set_body(&JsValue::from_str(body));
    }
    let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::network)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(ApiError::network)?;
    }
    Ok(request)
}

/// Run a request and return the parsed JSON body
async fn send(request: Request) -> ApiResult<JsValue> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::network)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::decode("fetch did not resolve to a Response"))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let json = response.json().map_err(ApiError::network)?;
    JsFuture::from(json)
        .await
        .map_err(|e| ApiError::decode(format!("{:?}", e)))
}

pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> ApiResult<T> {
    log::debug!("GET {}", url);
    let result = send(build_request(url, "GET", None)?).await?;
    serde_wasm_bindgen::from_value(result).map_err(ApiError::decode)
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> ApiResult<T> {
    let body = serde_json::to_string(body)?;
    log::debug!("POST {} ({} bytes)", url, body.len());
    let result = send(build_request(url, "POST", Some(body))?).await?;
    serde_wasm_bindgen::from_value(result).map_err(ApiError::decode)
}

pub(crate) async fn post_empty<T: DeserializeOwned>(url: &str) -> ApiResult<T> {
    log::debug!("POST {}", url);
    let result = send(build_request(url, "POST", None)?).await?;
    serde_wasm_bindgen::from_value(result).map_err(ApiError::decode)
}

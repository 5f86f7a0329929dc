use crate::{
    client::{browser, constant::TOO_MANY_REQUESTS, model::error::ApiError},
    model::api::ErrorDto,
};
use dioxus_logger::tracing;
use gloo_timers::future::TimeoutFuture;
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Status used for requests that never reached the server.
pub const TRANSPORT_ERROR: u64 = 0;

/// Helper function to parse API responses with consistent error handling
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response.json::<T>().await.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        Err(error_from_response(response).await)
    }
}

/// Non-2xx bodies carry `{ error }`; anything else is reported verbatim.
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status() as u64;
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    let message = match serde_json::from_str::<ErrorDto>(&text) {
        Ok(error_dto) => error_dto.error,
        Err(_) if text.is_empty() => format!("HTTP error {}", status),
        Err(_) => text,
    };

    ApiError { status, message }
}

/// Create a GET request
pub fn get(url: &str) -> Request {
    Request::get(url)
}

/// Create a POST request with JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url).header("Content-Type", "application/json")
}

/// Create a DELETE request
pub fn delete(url: &str) -> Request {
    Request::delete(url)
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: TRANSPORT_ERROR,
        message: format!("Failed to send request: {}", e),
    })
}

/// Sends a request carrying the stored bearer token.
///
/// A 401 drops the stored token and sends the browser to the login page.
pub async fn fetch_with_auth(request: Request) -> Result<Response, ApiError> {
    let request = match browser::load_token().await {
        Some(token) => request.header("Authorization", &token.authorization_header()),
        None => request,
    };

    let response = send_request(request).await?;

    match response.status() {
        401 => {
            tracing::warn!("Request rejected as unauthenticated, redirecting to login");
            browser::clear_token();
            browser::redirect_to_login().await;
            Err(ApiError {
                status: 401,
                message: "Session expired, please log in again.".to_string(),
            })
        }
        429 => Err(ApiError {
            status: 429,
            message: TOO_MANY_REQUESTS.to_string(),
        }),
        _ => Ok(response),
    }
}

/// GET with retries on transport failures and 5xx answers, waiting 1 s, 2 s, ... in between.
pub async fn get_with_retry(url: &str, attempts: u32) -> Result<Response, ApiError> {
    let attempts = attempts.max(1);
    let mut attempt = 1;

    loop {
        let result = fetch_with_auth(get(url)).await;

        let retryable = match &result {
            Ok(response) => response.status() >= 500,
            Err(error) => error.status == TRANSPORT_ERROR,
        };
        if !retryable || attempt >= attempts {
            return result;
        }

        tracing::warn!("GET {} failed (attempt {}/{}), retrying", url, attempt, attempts);
        TimeoutFuture::new(1000 * attempt).await;
        attempt += 1;
    }
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}

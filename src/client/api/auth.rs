use crate::{
    client::{constant::TOO_MANY_REQUESTS, model::error::ApiError},
    model::{
        auth::{LoginDto, LogoutDto, RefreshDto, TokenDto, UserDto},
        server::OperationDto,
    },
};

use super::helper::{fetch_with_auth, get, parse_response, post, send_request, serialize_json};

/// Login goes out without a token, so a 401 here means bad credentials rather than
/// an expired session.
pub async fn login(username: String, password: String) -> Result<TokenDto, ApiError> {
    let body = serialize_json(&LoginDto { username, password })?;
    let request = post("/api/auth/login").body(body);
    let response = send_request(request).await?;

    if response.status() == 429 {
        return Err(ApiError {
            status: 429,
            message: TOO_MANY_REQUESTS.to_string(),
        });
    }
    parse_response(response).await
}

pub async fn refresh(refresh_token: String) -> Result<TokenDto, ApiError> {
    let body = serialize_json(&RefreshDto { refresh_token })?;
    let request = post("/api/auth/refresh").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_user() -> Result<UserDto, ApiError> {
    let request = get("/api/auth/user");
    let response = fetch_with_auth(request).await?;
    parse_response(response).await
}

/// Revokes the given refresh token on the server.
pub async fn logout(refresh_token: Option<String>) -> Result<OperationDto, ApiError> {
    let body = serialize_json(&LogoutDto { refresh_token })?;
    let request = post("/api/auth/logout").body(body);
    let response = fetch_with_auth(request).await?;
    parse_response(response).await
}

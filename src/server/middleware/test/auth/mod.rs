use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Utc;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{bearer_token, AuthGuard, Permission},
    service::auth::token::TokenKeys,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn extracts_bearer_token() {
    assert_eq!(bearer_token(&headers_with("Bearer abc.def")), Some("abc.def"));
    assert_eq!(bearer_token(&headers_with("bearer abc")), Some("abc"));
}

#[test]
fn ignores_other_schemes_and_empty_tokens() {
    assert_eq!(bearer_token(&headers_with("Basic dXNlcjpwYXNz")), None);
    assert_eq!(bearer_token(&headers_with("Bearer ")), None);
    assert_eq!(bearer_token(&HeaderMap::new()), None);
}

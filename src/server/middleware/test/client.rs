use std::net::SocketAddr;

use axum::http::{HeaderMap, HeaderValue};

use crate::server::middleware::client::client_address;

fn peer() -> Option<SocketAddr> {
    Some("192.0.2.10:51000".parse().unwrap())
}

#[test]
fn prefers_first_forwarded_hop() {
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-forwarded-for",
        HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
    );
    headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.1"));

    assert_eq!(client_address(&headers, peer()), "203.0.113.7");
}

#[test]
fn falls_back_to_real_ip_then_peer() {
    let mut headers = HeaderMap::new();
    headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.1"));
    assert_eq!(client_address(&headers, peer()), "198.51.100.1");

    assert_eq!(client_address(&HeaderMap::new(), peer()), "192.0.2.10");
    assert_eq!(client_address(&HeaderMap::new(), None), "unknown");
}

#[test]
fn ignores_empty_forwarded_header() {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_static(" "));

    assert_eq!(client_address(&headers, peer()), "192.0.2.10");
}

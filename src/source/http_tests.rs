//! Tests for the HTTP catalog client

use super::*;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

/// Read one HTTP request (headers plus Content-Length body) from `stream`
fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
            let body_len = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= pos + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Serve a single canned response; the join handle yields the raw request
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        request
    });

    (format!("http://{}/languages", addr), handle)
}

fn client(endpoint: &str) -> HttpCatalogSource {
    HttpCatalogSource::new(endpoint, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_posts_name_and_parses_list() {
    let (endpoint, server) = serve_once("200 OK", r#"["Java","JavaScript"]"#);

    let names = client(&endpoint).fetch("ja").await.unwrap();
    assert_eq!(names, vec!["Java", "JavaScript"]);

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /languages "), "got: {}", request);
    assert!(request.to_lowercase().contains("content-type: application/json"));
    assert!(request.ends_with(r#"{"name":"ja"}"#), "got: {}", request);
}

#[tokio::test]
async fn test_fetch_empty_list_is_success() {
    let (endpoint, server) = serve_once("200 OK", "[]");

    let names = client(&endpoint).fetch("zz").await.unwrap();
    assert!(names.is_empty());
    server.join().unwrap();
}

#[tokio::test]
async fn test_fetch_forbidden_is_api_error() {
    let (endpoint, server) = serve_once("403 Forbidden", r#""origin not allowed""#);

    let err = client(&endpoint).fetch("go").await.unwrap_err();
    match err {
        SuggestError::Api { code, message } => {
            assert_eq!(code, 403);
            assert!(message.contains("origin not allowed"));
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
    server.join().unwrap();
}

#[tokio::test]
async fn test_fetch_server_error_is_api_error() {
    let (endpoint, server) = serve_once("500 Internal Server Error", "{}");

    let err = client(&endpoint).fetch("go").await.unwrap_err();
    assert!(matches!(err, SuggestError::Api { code: 500, .. }));
    server.join().unwrap();
}

#[tokio::test]
async fn test_fetch_non_list_body_is_parse_error() {
    let (endpoint, server) = serve_once("200 OK", r#"{"names":["Go"]}"#);

    let err = client(&endpoint).fetch("go").await.unwrap_err();
    assert!(matches!(err, SuggestError::Parse(_)), "got {:?}", err);
    server.join().unwrap();
}

#[tokio::test]
async fn test_fetch_connection_refused_is_network_error() {
    // Grab a free port, then close it so nothing is listening
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}/languages", addr))
        .fetch("go")
        .await
        .unwrap_err();
    assert!(matches!(err, SuggestError::Network(_)), "got {:?}", err);
}

#[test]
fn test_from_config_rejects_blank_endpoint() {
    let config = RemoteConfig {
        endpoint: "   ".to_string(),
        ..RemoteConfig::default()
    };

    let err = HttpCatalogSource::from_config(&config).unwrap_err();
    assert!(matches!(err, SuggestError::Config(_)));
    assert!(err.to_string().contains("Missing endpoint"));
}

#[test]
fn test_from_config_trims_endpoint() {
    let config = RemoteConfig {
        endpoint: "  http://localhost:9000/names ".to_string(),
        timeout_ms: 500,
    };

    let source = HttpCatalogSource::from_config(&config).unwrap();
    assert_eq!(source.endpoint(), "http://localhost:9000/names");
}

#[test]
fn test_lookup_request_body() {
    let body = serde_json::to_string(&LookupRequest { name: "C#" }).unwrap();
    assert_eq!(body, r#"{"name":"C#"}"#);
}

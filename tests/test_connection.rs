use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream};

use doorman::config::ResponseConfig;
use doorman::http::connection::{Connection, LOGIN_BODY, NOT_FOUND_BODY, Verdict};
use doorman::http::response::ResponseFormatter;
use doorman::site::MemorySite;

fn formatter() -> ResponseFormatter {
    ResponseFormatter::from_config(&ResponseConfig::default())
}

fn demo_site() -> MemorySite {
    MemorySite::new()
        .with_page("index.html", "<html><body><h1>Welcome</h1></body></html>")
        .with_page("about.html", "<html><body><h1>About</h1></body></html>")
        .with_page("blog/index.html", "<html><body><h1>Blog</h1></body></html>")
}

fn connection(server: DuplexStream) -> Connection<DuplexStream> {
    Connection::new(server, Arc::new(demo_site()), formatter())
}

/// Runs one request through a connection over an in-memory pipe and
/// returns the verdict plus everything written back to the client.
async fn exchange(request: &[u8]) -> (Verdict, Vec<u8>) {
    let (mut client, server) = tokio::io::duplex(64 * 1024);

    client.write_all(request).await.unwrap();

    let mut conn = connection(server);
    let verdict = conn.run().await.unwrap();
    drop(conn);

    let mut wire = Vec::new();
    client.read_to_end(&mut wire).await.unwrap();
    (verdict, wire)
}

fn split_wire(wire: &[u8]) -> (String, Vec<u8>) {
    let sep = wire
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header/body separator");
    let head = String::from_utf8(wire[..sep].to_vec()).unwrap();
    (head, wire[sep + 4..].to_vec())
}

#[tokio::test]
async fn test_serves_index_for_root_path() {
    let (verdict, wire) = exchange(b"GET / HTTP/1.1\r\n\r\n").await;
    let (head, body) = split_wire(&wire);

    assert_eq!(verdict, Verdict::KeepServing);
    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(body, b"<html><body><h1>Welcome</h1></body></html>");
    assert!(head.contains(&format!("Content-Length: {}", body.len())));
}

#[tokio::test]
async fn test_serves_named_html_page() {
    let (verdict, wire) = exchange(b"GET /about.html HTTP/1.1\r\nHost: example.com\r\n\r\n").await;
    let (_, body) = split_wire(&wire);

    assert_eq!(verdict, Verdict::KeepServing);
    assert_eq!(body, b"<html><body><h1>About</h1></body></html>");
}

#[tokio::test]
async fn test_serves_default_document_for_bare_path() {
    let (_, wire) = exchange(b"GET /blog HTTP/1.1\r\n\r\n").await;
    let (_, body) = split_wire(&wire);

    assert_eq!(body, b"<html><body><h1>Blog</h1></body></html>");
}

#[tokio::test]
async fn test_missing_page_gets_404_body_in_200_envelope() {
    let (verdict, wire) = exchange(b"GET /missing HTTP/1.1\r\n\r\n").await;
    let (head, body) = split_wire(&wire);

    assert_eq!(verdict, Verdict::KeepServing);
    // The envelope stays 200 OK; only the body says 404
    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(body, NOT_FOUND_BODY.as_bytes());
}

#[tokio::test]
async fn test_login_path_requests_shutdown() {
    let (verdict, wire) = exchange(b"GET /login HTTP/1.1\r\n\r\n").await;
    let (head, body) = split_wire(&wire);

    assert_eq!(verdict, Verdict::Shutdown);
    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert_eq!(body, LOGIN_BODY.as_bytes());
}

#[tokio::test]
async fn test_post_with_form_body_still_serves_page() {
    let req = b"POST /about.html HTTP/1.1\r\nContent-Length: 7\r\n\r\na=1&b=2";
    let (verdict, wire) = exchange(req).await;
    let (_, body) = split_wire(&wire);

    assert_eq!(verdict, Verdict::KeepServing);
    assert_eq!(body, b"<html><body><h1>About</h1></body></html>");
}

#[tokio::test]
async fn test_request_line_only_client_half_close() {
    let (mut client, server) = tokio::io::duplex(64 * 1024);

    client.write_all(b"GET /about.html HTTP/1.1\r\n").await.unwrap();
    client.shutdown().await.unwrap();

    let mut conn = connection(server);
    let verdict = conn.run().await.unwrap();
    drop(conn);

    let mut wire = Vec::new();
    client.read_to_end(&mut wire).await.unwrap();
    let (_, body) = split_wire(&wire);

    assert_eq!(verdict, Verdict::KeepServing);
    assert_eq!(body, b"<html><body><h1>About</h1></body></html>");
}

#[tokio::test]
async fn test_client_closing_without_sending_writes_nothing() {
    let (mut client, server) = tokio::io::duplex(64 * 1024);

    client.shutdown().await.unwrap();

    let mut conn = connection(server);
    let verdict = conn.run().await.unwrap();
    drop(conn);

    let mut wire = Vec::new();
    client.read_to_end(&mut wire).await.unwrap();

    assert_eq!(verdict, Verdict::KeepServing);
    assert!(wire.is_empty());
}

#[tokio::test]
async fn test_malformed_request_aborts_without_response() {
    let (mut client, server) = tokio::io::duplex(64 * 1024);

    client.write_all(b"GET / HTTP/1.1\r\nBrokenHeader\r\n\r\n").await.unwrap();

    let mut conn = connection(server);
    let result = conn.run().await;
    drop(conn);

    assert!(result.is_err());

    let mut wire = Vec::new();
    client.read_to_end(&mut wire).await.unwrap();
    assert!(wire.is_empty());
}

#[tokio::test]
async fn test_blank_request_line_aborts() {
    let (mut client, server) = tokio::io::duplex(64 * 1024);

    client.write_all(b"\r\n\r\n").await.unwrap();

    let mut conn = connection(server);
    let result = conn.run().await;

    assert!(result.is_err());
}

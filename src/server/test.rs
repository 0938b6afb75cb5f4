use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};

use crate::error::Error;
use crate::headers::Headers;
use crate::http::StatusCode;
use crate::request::{DecodeConfig, Request};
use crate::response::{ResponseWriter, default_headers};
use crate::server::{Server, Shutdown};

fn echo(w: &mut ResponseWriter<TcpStream>, req: &mut Request) -> Result<(), Error> {
    let body = req.body().clone();
    let status = match req.request_line().target.as_str() {
        "/yourproblem" => StatusCode::BAD_REQUEST,
        _ => StatusCode::OK,
    };

    w.write_status_line(status)?;
    let mut headers = default_headers();
    headers.replace("Content-Length", body.len().to_string());
    w.write_headers(&headers)?;
    w.write_body(&body)?;
    Ok(())
}

fn chunked(w: &mut ResponseWriter<TcpStream>, _: &mut Request) -> Result<(), Error> {
    w.write_status_line(StatusCode::OK)?;
    let mut headers = default_headers();
    headers.remove("Content-Length");
    headers.replace("Transfer-Encoding", "chunked");
    headers.set("Trailer", "X-Content-Length");
    w.write_headers(&headers)?;
    w.write_chunked_body(b"hello ")?;
    w.write_chunked_body(b"world")?;
    w.write_chunked_body_done()?;

    let mut trailers = Headers::new();
    trailers.set("X-Content-Length", "11");
    w.write_trailers(&trailers)?;
    Ok(())
}

async fn roundtrip(addr: SocketAddr, request: &'static [u8]) -> Vec<u8> {
    tokio::task::spawn_blocking(move || {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream.write_all(request).unwrap();
        let mut response = Vec::new();
        stream.read_to_end(&mut response).unwrap();
        response
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_serve_fixed_length() {
    let server = Server::bind("127.0.0.1:0", echo).await.unwrap();
    let addr = server.local_addr().unwrap();
    let shutdown = server.shutdown_handle();
    let serve = tokio::spawn(server.serve());

    let response = roundtrip(
        addr,
        b"POST /coffee HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello",
    )
    .await;
    assert_eq!(
        response,
        b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\nContent-Type: text/plain\r\n\r\nhello"
    );

    let response = roundtrip(addr, b"GET /yourproblem HTTP/1.1\r\n\r\n").await;
    assert!(response.starts_with(b"HTTP/1.1 400 Bad Request\r\n"));

    shutdown.trigger();
    serve.await.unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_serve_chunked() {
    let server = Server::bind("127.0.0.1:0", chunked).await.unwrap();
    let addr = server.local_addr().unwrap();
    let shutdown = server.shutdown_handle();
    let serve = tokio::spawn(server.serve());

    let response = roundtrip(addr, b"GET /stream HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
    let expected: &[u8] = b"HTTP/1.1 200 OK\r\n\
        Connection: close\r\n\
        Content-Type: text/plain\r\n\
        Transfer-Encoding: chunked\r\n\
        Trailer: X-Content-Length\r\n\
        \r\n\
        6\r\nhello \r\n\
        5\r\nworld\r\n\
        0\r\n\
        X-Content-Length: 11\r\n\
        \r\n";
    assert_eq!(response, expected);

    shutdown.trigger();
    serve.await.unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_serve_malformed_request() {
    let server = Server::bind("127.0.0.1:0", echo).await.unwrap();
    let addr = server.local_addr().unwrap();
    let shutdown = server.shutdown_handle();
    let serve = tokio::spawn(server.serve());

    // connection is closed without a response
    let response = roundtrip(addr, b"GET /coffee\r\n").await;
    assert!(response.is_empty());

    shutdown.trigger();
    serve.await.unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_serve_decode_config() {
    let config = DecodeConfig {
        initial_read_size: 1,
        max_read_size: 4,
    };
    let server = Server::bind("127.0.0.1:0", echo).await.unwrap().decode_config(config);
    let addr = server.local_addr().unwrap();
    let shutdown = server.shutdown_handle();
    let serve = tokio::spawn(server.serve());

    let response = roundtrip(
        addr,
        b"POST /small/reads HTTP/1.1\r\nHost: localhost\r\nContent-Length: 3\r\n\r\nabc",
    )
    .await;
    assert_eq!(
        response,
        b"HTTP/1.1 200 OK\r\nContent-Length: 3\r\nConnection: close\r\nContent-Type: text/plain\r\n\r\nabc"
    );

    shutdown.trigger();
    serve.await.unwrap();
}

#[tokio::test]
async fn test_serve_after_shutdown() {
    let server = Server::bind("127.0.0.1:0", echo).await.unwrap();
    let shutdown = server.shutdown_handle();
    shutdown.trigger();

    // returns without accepting
    server.serve().await;
    assert!(shutdown.is_triggered());
}

#[tokio::test]
async fn test_shutdown() {
    let shutdown = Shutdown::new();
    assert!(!shutdown.is_triggered());

    let handle = shutdown.clone();
    let wait = tokio::spawn(async move { handle.wait().await });

    shutdown.trigger();
    wait.await.unwrap();
    assert!(shutdown.is_triggered());

    // already triggered
    shutdown.wait().await;
}

//! Test support utilities for code that loads configuration over HTTP.
//! These helpers are public so downstream crates can reuse them in their own tests.

use std::io;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

/// Serve a single HTTP response on a loopback port and return its URL.
///
/// The responder answers the first connection with `status` and `body`, then exits.
/// Must be called from within a tokio runtime.
pub async fn serve_once(status: u16, body: &str) -> io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let response = format!(
        "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );
    tokio::spawn(async move {
        let Ok((mut stream, _)) = listener.accept().await else {
            return;
        };
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        // Read the request head; GET requests carry no body.
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
            }
        }
        let _ignored = stream.write_all(response.as_bytes()).await;
        let _ignored = stream.shutdown().await;
    });
    Ok(format!("http://{}/hero/config.json", addr))
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

/// HTTP client that ignores proxy settings from the environment, for loopback tests.
pub fn local_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

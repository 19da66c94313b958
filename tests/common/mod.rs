//! Shared test helpers: sample cards and a mocked agent.

#![allow(dead_code)]

use std::time::Duration;

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use a2a_courier::config::CourierConfig;

pub const CARD_PATH: &str = "/.well-known/agent.json";
pub const EXTENDED_PATH: &str = "/agent/authenticatedExtendedCard";

/// A public card JSON for an agent served at `url`.
pub fn card_json(name: &str, url: &str, supports_extended: Option<bool>) -> Value {
    let mut card = json!({
        "name": name,
        "description": "Helps with exchange rates",
        "url": url,
        "version": "1.0.0",
        "capabilities": {"streaming": true},
        "defaultInputModes": ["text"],
        "defaultOutputModes": ["text"],
        "skills": [{
            "id": "convert_currency",
            "name": "Currency Exchange Rates Tool",
            "description": "Helps with exchange values between various currencies",
            "tags": ["currency conversion", "currency exchange"],
            "examples": ["What is exchange rate between USD and GBP?"]
        }]
    });
    if let Some(flag) = supports_extended {
        card["supportsAuthenticatedExtendedCard"] = json!(flag);
    }
    card
}

/// A completed task answering `text`.
pub fn task_json(task_id: &str, text: &str) -> Value {
    json!({
        "kind": "task",
        "id": task_id,
        "contextId": "ctx-1",
        "status": {"state": "completed", "timestamp": "2025-05-01T10:00:00+00:00"},
        "artifacts": [{
            "artifactId": "a-1",
            "name": "conversion_result",
            "parts": [{"kind": "text", "text": text}]
        }]
    })
}

pub fn rpc_result(id: &str, result: Value) -> Value {
    json!({"jsonrpc": "2.0", "id": id, "result": result})
}

/// Encode JSON values as an SSE body, one `data:` event per value.
pub fn sse_body(events: &[Value]) -> String {
    events
        .iter()
        .map(|e| format!("data: {e}\n\n"))
        .collect()
}

pub fn sse_response(events: &[Value]) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(sse_body(events), "text/event-stream")
}

/// Serve the public card at the well-known path.
pub async fn mount_public_card(server: &MockServer, card: Value) {
    Mock::given(method("GET"))
        .and(path(CARD_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(card))
        .mount(server)
        .await;
}

/// Config pointed at a mock server.
pub fn config_for(server: &MockServer) -> CourierConfig {
    CourierConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        ..Default::default()
    }
}

pub fn http() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

/// Serve one SSE response by hand, sleeping `gap` before each event.
///
/// Returns the endpoint URL. The connection is closed after the last event.
pub async fn serve_sse_slowly(events: Vec<Value>, gap: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        read_request(&mut socket).await;
        socket
            .write_all(
                b"HTTP/1.1 200 OK\r\ncontent-type: text/event-stream\r\nconnection: close\r\n\r\n",
            )
            .await
            .unwrap();
        for event in events {
            tokio::time::sleep(gap).await;
            if socket
                .write_all(format!("data: {event}\n\n").as_bytes())
                .await
                .is_err()
            {
                return;
            }
            let _ = socket.flush().await;
        }
        let _ = socket.shutdown().await;
    });
    format!("http://{addr}/")
}

/// Consume request headers and a `content-length` body.
async fn read_request(socket: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let len = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + len {
                return;
            }
        }
    }
}

// crates/console-client/tests/http_backend.rs
//
// HttpBackend against a one-shot HTTP/1.1 responder on loopback.
use std::time::Duration;

use console_client::api::{ApiError, Backend, HttpBackend};
use console_client::runtime;
use console_core::{Command, Event, OrderOutcome, OrderRequest, OrderSide, OrderType};
use reqwest::StatusCode;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Accept one connection, answer it, and hand back the raw request.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{}/api", addr), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn backend(api_root: &str) -> HttpBackend {
    HttpBackend::new(api_root, None).unwrap()
}

fn market_buy() -> OrderRequest {
    OrderRequest {
        account_id: Some(1),
        symbol: "AAPL".to_string(),
        order_type: OrderType::Market,
        side: OrderSide::Buy,
        quantity: Some(10),
        limit_price: None,
    }
}

#[test]
fn api_root_gets_trailing_slash() {
    let with = backend("http://localhost:8080/api/");
    let without = backend("http://localhost:8080/api");
    assert_eq!(with.base().as_str(), "http://localhost:8080/api/");
    assert_eq!(without.base().as_str(), "http://localhost:8080/api/");
}

#[tokio::test]
async fn fetches_orders_from_orders_endpoint() {
    let body = r#"[{"id":3,"orderNumber":"ORD-3","accountId":1,"symbol":"MSFT","type":"LIMIT","side":"SELL","quantity":5,"limitPrice":310.5,"status":"PENDING","createdAt":"2024-01-15T10:30:00"}]"#;
    let (root, server) = serve_once("200 OK", body).await;

    let orders = backend(&root).fetch_orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_number, "ORD-3");
    assert_eq!(orders[0].order_type, "LIMIT");
    assert_eq!(orders[0].limit_price, Some(310.5));

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/orders HTTP/1.1"));
}

#[tokio::test]
async fn execution_logs_use_hyphenated_path() {
    let (root, server) = serve_once("200 OK", "[]").await;

    let logs = backend(&root).fetch_execution_logs().await.unwrap();
    assert!(logs.is_empty());

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/execution-logs HTTP/1.1"));
}

#[tokio::test]
async fn non_success_fetch_is_a_status_error() {
    let (root, server) = serve_once("500 Internal Server Error", "{}").await;

    let err = backend(&root).fetch_accounts().await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Status { status } if status == StatusCode::INTERNAL_SERVER_ERROR
    ));
    server.await.unwrap();
}

#[tokio::test]
async fn submit_posts_json_without_limit_price_for_market() {
    let (root, server) = serve_once("201 Created", r#"{"orderNumber":"X1","status":"FILLED"}"#).await;

    let order = backend(&root).submit_order(&market_buy()).await.unwrap();
    assert_eq!(order.order_number, "X1");
    assert_eq!(order.status, "FILLED");

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/orders HTTP/1.1"));
    assert!(request.contains(r#""symbol":"AAPL""#));
    assert!(request.contains(r#""type":"MARKET""#));
    assert!(request.contains(r#""accountId":1"#));
    assert!(!request.contains("limitPrice"));
}

#[tokio::test]
async fn rejected_submit_carries_server_message() {
    let (root, server) = serve_once("400 Bad Request", r#"{"message":"Insufficient balance"}"#).await;

    let err = backend(&root).submit_order(&market_buy()).await.unwrap_err();
    assert_eq!(err.rejection(), Some(Some("Insufficient balance")));
    assert!(matches!(
        err,
        ApiError::Rejected { status, .. } if status == StatusCode::BAD_REQUEST
    ));
    server.await.unwrap();
}

#[tokio::test]
async fn rejection_with_unreadable_body_has_no_message() {
    let (root, server) = serve_once("500 Internal Server Error", "oops").await;

    let err = backend(&root).submit_order(&market_buy()).await.unwrap_err();
    assert_eq!(err.rejection(), Some(None));
    server.await.unwrap();
}

#[tokio::test]
async fn cancel_puts_to_order_cancel_path() {
    let (root, server) = serve_once("200 OK", r#"{"id":7,"orderNumber":"ORD-7","status":"CANCELLED"}"#).await;

    let order = backend(&root).cancel_order(7).await.unwrap();
    assert_eq!(order.status, "CANCELLED");

    let request = server.await.unwrap();
    assert!(request.starts_with("PUT /api/orders/7/cancel HTTP/1.1"));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_failure() {
    // grab a free port, then close it
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let http = backend(&format!("http://{}/api", addr));
    let event = runtime::execute(Command::Submit(market_buy()), &http).await;

    assert!(matches!(
        event,
        Event::Submitted(OrderOutcome::TransportFailure(_))
    ));
}

#[tokio::test]
async fn configured_timeout_turns_a_stalled_backend_into_an_error() {
    // accepts the connection but never answers
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(socket);
    });

    let http = HttpBackend::new(&format!("http://{}/api", addr), Some(Duration::from_millis(200)))
        .unwrap();
    let err = http.fetch_orders().await.unwrap_err();
    assert!(matches!(err, ApiError::Reqwest(ref e) if e.is_timeout()));

    server.abort();
}

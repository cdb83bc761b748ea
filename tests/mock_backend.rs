//! Runs the `mock-backend` binary and queries its routes.

use std::net::SocketAddr;
use std::time::Duration;

use serde_json::Value;
use tokio::net::TcpListener;
use tokio::process::{Child, Command};

async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

fn spawn_mock(addr: SocketAddr, extra: &[&str]) -> Child {
    Command::new(env!("CARGO_BIN_EXE_mock-backend"))
        .arg("--bind")
        .arg(addr.to_string())
        .args(extra)
        .kill_on_drop(true)
        .spawn()
        .expect("failed to spawn mock-backend")
}

async fn get_json(addr: SocketAddr, path: &str) -> Value {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let url = format!("http://{addr}{path}");

    for _ in 0..50 {
        if let Ok(res) = client.get(&url).send().await {
            assert!(res.status().is_success(), "{path} returned {}", res.status());
            return serde_json::from_str(&res.text().await.unwrap()).unwrap();
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!("mock-backend never answered on {addr}");
}

#[tokio::test]
async fn test_default_hello_message() {
    let addr = unused_addr().await;
    let _child = spawn_mock(addr, &[]);

    let body = get_json(addr, "/api/hello").await;
    assert_eq!(body["message"], "Hola desde el backend de Flask!");
}

#[tokio::test]
async fn test_custom_message_and_health() {
    let addr = unused_addr().await;
    let _child = spawn_mock(addr, &["--message", "Hola Mundo"]);

    assert_eq!(get_json(addr, "/api/hello").await["message"], "Hola Mundo");
    assert_eq!(get_json(addr, "/api/health").await["status"], "healthy");
}

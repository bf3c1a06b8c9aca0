#![allow(dead_code)]

//! Test infrastructure for ab-server integration tests

use ab_server::{AppState, ConnectionRegistry, Metrics, ShutdownCoordinator, build_router};

use ab_core::AuthProvider;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

pub type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Server bound to an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub state: AppState,
}

impl TestServer {
    pub async fn start(provider: Arc<dyn AuthProvider>, max_connections: usize) -> Self {
        let state = AppState {
            provider,
            registry: ConnectionRegistry::new(max_connections),
            metrics: Metrics::new(),
            shutdown: ShutdownCoordinator::new(),
            send_buffer_size: 16,
        };

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = build_router(state.clone());
        let mut shutdown = state.shutdown.signal();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move { shutdown.wait().await })
                .await
                .unwrap();
        });

        Self { addr, state }
    }

    pub fn channel_url(&self) -> String {
        format!("ws://{}/channel", self.addr)
    }

    pub async fn connect(&self) -> Client {
        let (client, _) = tokio_tungstenite::connect_async(self.channel_url())
            .await
            .expect("channel handshake failed");
        client
    }
}

pub async fn send(client: &mut Client, frame: Value) {
    client
        .send(Message::text(frame.to_string()))
        .await
        .expect("send failed");
}

/// Next text frame as JSON, skipping control frames.
pub async fn next_frame(client: &mut Client) -> Value {
    loop {
        let msg = tokio::time::timeout(Duration::from_secs(5), client.next())
            .await
            .expect("no frame within 5s")
            .expect("stream ended")
            .expect("socket error");
        if let Message::Text(_) = msg {
            return serde_json::from_str(msg.to_text().unwrap()).unwrap();
        }
    }
}

/// Read `count` frames in arrival order.
pub async fn next_frames(client: &mut Client, count: usize) -> Vec<Value> {
    let mut frames = Vec::with_capacity(count);
    for _ in 0..count {
        frames.push(next_frame(client).await);
    }
    frames
}

pub fn response_with_id(frames: &[Value], id: u64) -> &Value {
    frames
        .iter()
        .find(|frame| frame["type"] == "response" && frame["id"] == id)
        .expect("response frame missing")
}

pub fn events(frames: &[Value]) -> Vec<&Value> {
    frames
        .iter()
        .filter(|frame| frame["type"] == "event")
        .map(|frame| &frame["event"])
        .collect()
}

use crate::{ChannelConnection, ConnectionId, ConnectionRegistry, Metrics, ShutdownCoordinator};

use ab_core::AuthProvider;

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::Response,
};
use chrono::Utc;
use log::{error, info};

/// Shared application state for the channel and health handlers
#[derive(Clone)]
pub struct AppState {
    /// Provider shared by every connection's bridge
    pub provider: Arc<dyn AuthProvider>,
    pub registry: ConnectionRegistry,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    /// Capacity of each connection's outgoing frame queue
    pub send_buffer_size: usize,
}

/// GET /channel - WebSocket upgrade into an auth bridge session
pub async fn handler(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    if state.shutdown.is_triggered() {
        state.metrics.connection_rejected();
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    let connection_id = state.registry.register().await.map_err(|e| {
        error!("Failed to register connection: {e}");
        state.metrics.connection_rejected();
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, connection_id, state)))
}

async fn handle_socket(socket: WebSocket, connection_id: ConnectionId, state: AppState) {
    let shutdown = state.shutdown.signal();

    let connection = ChannelConnection::new(
        connection_id,
        Arc::clone(&state.provider),
        state.send_buffer_size,
        state.metrics.clone(),
    );

    let result = connection.handle(socket, shutdown).await;

    if let Some(info) = state.registry.get(connection_id).await
        && let Ok(duration) = (Utc::now() - info.connected_at).to_std()
    {
        state.metrics.connection_duration(duration);
    }
    state.registry.unregister(connection_id).await;

    match result {
        Ok(()) => info!("Connection {connection_id} finished"),
        Err(e) => error!("Connection {connection_id} error: {e}"),
    }
}

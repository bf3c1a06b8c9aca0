use crate::{ConnectionId, Result as ServerErrorResult, ServerError};

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{info, warn};
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub connection_id: ConnectionId,
    pub connected_at: DateTime<Utc>,
}

/// Tracks open channel connections and enforces the connection cap.
#[derive(Clone)]
pub struct ConnectionRegistry {
    inner: Arc<RwLock<HashMap<ConnectionId, ConnectionInfo>>>,
    max_total: usize,
}

impl ConnectionRegistry {
    pub fn new(max_total: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            max_total,
        }
    }

    /// Reserve a slot for a new connection.
    pub async fn register(&self) -> ServerErrorResult<ConnectionId> {
        let mut connections = self.inner.write().await;

        if connections.len() >= self.max_total {
            warn!(
                "Total connection limit reached: {}/{}",
                connections.len(),
                self.max_total
            );
            return Err(ServerError::connection_limit_exceeded(
                connections.len(),
                self.max_total,
            ));
        }

        let connection_id = ConnectionId::new();
        connections.insert(
            connection_id,
            ConnectionInfo {
                connection_id,
                connected_at: Utc::now(),
            },
        );
        info!(
            "Registered connection {connection_id} ({} total)",
            connections.len()
        );

        Ok(connection_id)
    }

    pub async fn unregister(&self, connection_id: ConnectionId) {
        let mut connections = self.inner.write().await;

        if connections.remove(&connection_id).is_some() {
            info!(
                "Unregistered connection {connection_id} ({} total remaining)",
                connections.len()
            );
        }
    }

    pub async fn get(&self, connection_id: ConnectionId) -> Option<ConnectionInfo> {
        self.inner.read().await.get(&connection_id).cloned()
    }

    pub async fn total_count(&self) -> usize {
        self.inner.read().await.len()
    }

    pub fn max_total(&self) -> usize {
        self.max_total
    }
}

mod shutdown;

use crate::{AppState, ConnectionRegistry, Metrics, ShutdownCoordinator};

use ab_core::MemoryProvider;

use std::sync::Arc;

fn test_state(max_connections: usize) -> AppState {
    AppState {
        provider: Arc::new(MemoryProvider::new()),
        registry: ConnectionRegistry::new(max_connections),
        metrics: Metrics::new(),
        shutdown: ShutdownCoordinator::new(),
        send_buffer_size: 8,
    }
}

#![allow(dead_code)]

//! Test infrastructure for ab-channel integration tests

pub(crate) mod scripted_provider;

pub use scripted_provider::*;

use ab_channel::{Arguments, AuthBridge, BridgeEvent, BridgeResponse, MethodCall};

use ab_core::AuthProvider;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

/// A bridge plus the receiving end of its events.
pub struct TestBridge {
    pub bridge: AuthBridge,
    pub events: mpsc::UnboundedReceiver<BridgeEvent>,
}

impl TestBridge {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        let (bridge, events) = AuthBridge::channel(provider);
        Self { bridge, events }
    }

    pub async fn call(&self, method: &str, arguments: Arguments) -> BridgeResponse {
        tokio::time::timeout(
            Duration::from_secs(5),
            self.bridge.call(MethodCall::new(method, arguments)),
        )
        .await
        .expect("response was never delivered")
    }

    /// Events already emitted, in order.
    pub fn drain_events(&mut self) -> Vec<BridgeEvent> {
        let mut drained = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            drained.push(event);
        }
        drained
    }
}

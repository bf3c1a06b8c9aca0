use crate::{BridgeError, BridgeEvent, Metrics, Result, SubscriptionHandle};

use ab_core::{AuthProvider, AuthStateListener, ListenerId, SessionUser, UserRecord, serialize_user};

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{RwLock, mpsc};

/// Destination of the events produced by live subscriptions.
pub type EventSink = mpsc::UnboundedSender<BridgeEvent>;

/// Handle-indexed registry of auth-state subscriptions.
///
/// Handles start at 0, grow by one per `start` and are never reissued. A
/// handle is live exactly while it is in the map; each live handle owns one
/// provider listener.
pub struct SubscriptionRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    provider: Arc<dyn AuthProvider>,
    events: EventSink,
    metrics: Metrics,
}

struct RegistryInner {
    next_handle: i64,
    listeners: HashMap<SubscriptionHandle, ListenerId>,
    disposed: bool,
}

impl SubscriptionRegistry {
    pub fn new(provider: Arc<dyn AuthProvider>, events: EventSink, metrics: Metrics) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                next_handle: 0,
                listeners: HashMap::new(),
                disposed: false,
            })),
            provider,
            events,
            metrics,
        }
    }

    /// Start a subscription that emits `onAuthStateChanged` on every
    /// provider state change, including the one fired on registration.
    pub async fn start(&self) -> Result<SubscriptionHandle> {
        // Held across registration so a concurrent stop or dispose never
        // observes a handle without its listener.
        let mut inner = self.inner.write().await;
        if inner.disposed {
            return Err(BridgeError::internal("Bridge has been disposed."));
        }

        let handle = SubscriptionHandle(inner.next_handle);
        inner.next_handle += 1;

        let listener_id = self.attach(self.event_listener(handle)).await;
        inner.listeners.insert(handle, listener_id);
        self.metrics.subscription_started();

        info!(
            "Started auth state subscription {handle} ({} active)",
            inner.listeners.len()
        );

        Ok(handle)
    }

    /// Stop a subscription; an unknown or already stopped handle is an error.
    pub async fn stop(&self, handle: SubscriptionHandle) -> Result<()> {
        let mut inner = self.inner.write().await;

        let Some(listener_id) = inner.listeners.remove(&handle) else {
            warn!("Stop requested for unknown subscription {handle}");
            return Err(BridgeError::listener_not_found(handle));
        };

        self.detach(listener_id).await;
        self.metrics.subscription_stopped();

        info!(
            "Stopped auth state subscription {handle} ({} active)",
            inner.listeners.len()
        );

        Ok(())
    }

    /// Fetch the current user through a single-fire subscription: the
    /// listener is removed after its first invocation.
    pub async fn current_user_once(&self) -> Result<Option<UserRecord>> {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let listener: AuthStateListener = Arc::new(move |user: Option<SessionUser>| {
            let _ = sender.send(serialize_user(user.as_deref()));
        });

        let listener_id = self.attach(listener).await;
        let first = receiver.recv().await;
        self.detach(listener_id).await;

        first.ok_or_else(|| BridgeError::internal("Provider dropped the listener before it fired."))
    }

    /// Stop every live subscription and refuse new ones.
    ///
    /// Returns the number of subscriptions that were still live.
    pub async fn dispose(&self) -> usize {
        let mut inner = self.inner.write().await;
        inner.disposed = true;

        let live: Vec<(SubscriptionHandle, ListenerId)> = inner.listeners.drain().collect();
        for (handle, listener_id) in &live {
            self.detach(*listener_id).await;
            self.metrics.subscription_stopped();
            debug!("Disposed auth state subscription {handle}");
        }

        if !live.is_empty() {
            info!("Registry disposed, {} subscriptions stopped", live.len());
        }
        live.len()
    }

    pub async fn active_count(&self) -> usize {
        self.inner.read().await.listeners.len()
    }

    pub async fn is_live(&self, handle: SubscriptionHandle) -> bool {
        self.inner.read().await.listeners.contains_key(&handle)
    }

    async fn attach(&self, listener: AuthStateListener) -> ListenerId {
        self.provider.add_auth_state_listener(listener).await
    }

    async fn detach(&self, listener_id: ListenerId) {
        if !self.provider.remove_auth_state_listener(listener_id).await {
            warn!("Provider listener {listener_id} was already gone");
        }
    }

    fn event_listener(&self, handle: SubscriptionHandle) -> AuthStateListener {
        let events = self.events.clone();
        let metrics = self.metrics.clone();

        Arc::new(move |user: Option<SessionUser>| {
            let event = BridgeEvent::AuthStateChanged {
                id: handle,
                user: serialize_user(user.as_deref()),
            };
            if events.send(event).is_ok() {
                metrics.event_emitted();
            } else {
                debug!("Event receiver closed, dropping event for subscription {handle}");
            }
        })
    }
}

impl Clone for SubscriptionRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            provider: Arc::clone(&self.provider),
            events: self.events.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

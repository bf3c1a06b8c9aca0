use std::sync::Arc;

use log::info;
use tokio::sync::watch;

/// Server-wide stop flag shared by `main` and every channel connection.
///
/// The flag only ever goes from running to stopped. A [`ShutdownSignal`]
/// taken after the trigger resolves immediately.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    stopped: Arc<watch::Sender<bool>>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (stopped, _) = watch::channel(false);
        Self {
            stopped: Arc::new(stopped),
        }
    }

    /// Flip the flag; repeated calls are no-ops.
    pub fn trigger(&self) {
        if !self.stopped.send_replace(true) {
            info!("Shutdown triggered, closing channel connections");
        }
    }

    pub fn is_triggered(&self) -> bool {
        *self.stopped.borrow()
    }

    pub fn signal(&self) -> ShutdownSignal {
        ShutdownSignal {
            stopped: self.stopped.subscribe(),
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-task view of the stop flag.
pub struct ShutdownSignal {
    stopped: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Resolve once shutdown has been triggered.
    pub async fn wait(&mut self) {
        // Err means the coordinator is gone, which also ends the wait
        let _ = self.stopped.wait_for(|stopped| *stopped).await;
    }
}

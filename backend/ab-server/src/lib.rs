pub mod app_state;
pub mod channel_connection;
pub mod connection_id;
pub mod connection_registry;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;
pub mod shutdown;

pub use app_state::AppState;
pub use channel_connection::ChannelConnection;
pub use connection_id::ConnectionId;
pub use connection_registry::{ConnectionInfo, ConnectionRegistry};
pub use error::{Result, ServerError};
pub use metrics::Metrics;
pub use routes::build_router;
pub use shutdown::{ShutdownCoordinator, ShutdownSignal};

#[cfg(test)]
mod tests;

use crate::{ConnectionId, Metrics, Result as ServerErrorResult, ServerError, ShutdownSignal};

use ab_channel::{AuthBridge, BridgeEvent, InboundFrame, OutboundFrame};
use ab_core::AuthProvider;

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures::{SinkExt, StreamExt};
use log::{debug, error, info, warn};
use tokio::sync::mpsc;

/// One WebSocket client driving its own [`AuthBridge`].
///
/// Responses are written as soon as their operation settles, so their
/// order follows completion rather than submission. Event frames share the
/// same outgoing queue.
pub struct ChannelConnection {
    connection_id: ConnectionId,
    bridge: AuthBridge,
    events: mpsc::UnboundedReceiver<BridgeEvent>,
    send_buffer_size: usize,
    metrics: Metrics,
}

impl ChannelConnection {
    pub fn new(
        connection_id: ConnectionId,
        provider: Arc<dyn AuthProvider>,
        send_buffer_size: usize,
        metrics: Metrics,
    ) -> Self {
        let (bridge, events) = AuthBridge::channel(provider);
        Self {
            connection_id,
            bridge,
            events,
            send_buffer_size,
            metrics,
        }
    }

    /// Run the connection until the client leaves or the server shuts down.
    ///
    /// The bridge is disposed on every exit path, detaching all provider
    /// listeners this client registered.
    pub async fn handle(
        mut self,
        socket: WebSocket,
        mut shutdown: ShutdownSignal,
    ) -> ServerErrorResult<()> {
        info!(
            "Channel connection {} established (bridge {})",
            self.connection_id,
            self.bridge.id()
        );
        self.metrics.connection_established();

        let (mut ws_sender, mut ws_receiver) = socket.split();

        // Bounded so a slow client applies backpressure
        let (tx, mut rx) = mpsc::channel::<Message>(self.send_buffer_size);

        let send_task = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                if ws_sender.send(msg).await.is_err() {
                    break;
                }
            }
        });

        let result = loop {
            tokio::select! {
                msg = ws_receiver.next() => {
                    match msg {
                        Some(Ok(msg)) => {
                            if let Err(e) = self.handle_client_message(msg, &tx).await {
                                error!(
                                    "Error handling message from connection {}: {e}",
                                    self.connection_id
                                );
                                self.metrics.error_occurred("message_handling");
                                break Err(e);
                            }
                        }
                        Some(Err(e)) => {
                            error!("WebSocket error on connection {}: {e}", self.connection_id);
                            break Err(ServerError::connection_closed(format!("WebSocket error: {e}")));
                        }
                        None => {
                            info!("Connection {} closed by client", self.connection_id);
                            break Ok(());
                        }
                    }
                }

                event = self.events.recv() => {
                    let Some(event) = event else {
                        break Ok(());
                    };
                    debug!(
                        "Forwarding auth state event for subscription {} to connection {}",
                        event.handle(),
                        self.connection_id
                    );
                    if let Err(e) = self.send_frame(&tx, OutboundFrame::Event { event }).await {
                        break Err(e);
                    }
                }

                _ = shutdown.wait() => {
                    info!("Shutting down connection {} gracefully", self.connection_id);
                    break Ok(());
                }
            }
        };

        self.bridge.dispose().await;
        drop(tx);
        let _ = send_task.await;

        self.metrics
            .connection_closed(if result.is_ok() { "normal" } else { "error" });
        info!("Channel connection {} closed", self.connection_id);

        result
    }

    async fn handle_client_message(
        &self,
        msg: Message,
        tx: &mpsc::Sender<Message>,
    ) -> ServerErrorResult<()> {
        match msg {
            Message::Text(text) => self.handle_text_frame(text.as_str(), tx).await,
            Message::Binary(data) => {
                debug!(
                    "Rejecting binary frame ({} bytes) from connection {}",
                    data.len(),
                    self.connection_id
                );
                self.metrics.frame_received("binary");
                self.send_frame(
                    tx,
                    OutboundFrame::InvalidFrame {
                        message: "Binary frames are not supported.".to_string(),
                    },
                )
                .await
            }
            Message::Ping(data) => tx
                .send(Message::Pong(data))
                .await
                .map_err(|_| ServerError::send_buffer_closed()),
            Message::Pong(_) => Ok(()),
            Message::Close(_) => {
                info!("Received close frame from connection {}", self.connection_id);
                Ok(())
            }
        }
    }

    async fn handle_text_frame(
        &self,
        text: &str,
        tx: &mpsc::Sender<Message>,
    ) -> ServerErrorResult<()> {
        let frame = match InboundFrame::parse(text) {
            Ok(frame) => frame,
            Err(e) => {
                warn!(
                    "Invalid frame from connection {}: {}",
                    self.connection_id,
                    e.boundary_message()
                );
                self.metrics.frame_received("invalid");
                return self
                    .send_frame(
                        tx,
                        OutboundFrame::InvalidFrame {
                            message: e.boundary_message(),
                        },
                    )
                    .await;
            }
        };

        self.metrics.frame_received("call");
        let (id, call) = frame.into_call();
        let pending = self.bridge.dispatch(call);

        let tx = tx.clone();
        let metrics = self.metrics.clone();
        let connection_id = self.connection_id;
        tokio::spawn(async move {
            let response = pending.await;
            let frame = OutboundFrame::Response { id, response };
            if let Err(e) = forward(&tx, &metrics, frame).await {
                debug!("Dropping response {id} for connection {connection_id}: {e}");
            }
        });

        Ok(())
    }

    async fn send_frame(
        &self,
        tx: &mpsc::Sender<Message>,
        frame: OutboundFrame,
    ) -> ServerErrorResult<()> {
        forward(tx, &self.metrics, frame).await
    }
}

async fn forward(
    tx: &mpsc::Sender<Message>,
    metrics: &Metrics,
    frame: OutboundFrame,
) -> ServerErrorResult<()> {
    let json = frame.to_json()?;
    tx.send(Message::Text(json.into()))
        .await
        .map_err(|_| ServerError::send_buffer_closed())?;
    metrics.frame_sent(frame.kind());
    Ok(())
}

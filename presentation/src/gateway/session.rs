//! Per-connection session
//!
//! Each accepted socket gets its own [`Session`]. A single writer task owns
//! the socket's send half and drains the outbound channel; every inbound
//! request runs as its own task and replies through that channel in
//! completion order. Closing the socket cancels the session's token, which
//! abandons any request still in flight.

use super::protocol::{ClientEvent, ProtocolError, ServerEvent};
use super::server::AppState;
use axum::extract::ws::{Message, WebSocket};
use chrono::{DateTime, Utc};
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use mentor_application::RunMentorUseCase;
use mentor_domain::{ExecutionError, ExecutionOutcome, Query};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

pub struct Session {
    id: Uuid,
    connected_at: DateTime<Utc>,
    state: AppState,
    outbound: mpsc::UnboundedSender<ServerEvent>,
    cancel: CancellationToken,
}

impl Session {
    /// Serve one socket until the client disconnects or the server shuts down.
    pub async fn run(socket: WebSocket, state: AppState) {
        let id = Uuid::new_v4();
        let span = info_span!("connection", connection_id = %id);
        Self::serve(socket, state, id).instrument(span).await
    }

    async fn serve(socket: WebSocket, state: AppState, id: Uuid) {
        let (sink, stream) = socket.split();
        let (outbound, rx) = mpsc::unbounded_channel();
        let cancel = state.shutdown.child_token();

        let session = Session {
            id,
            connected_at: Utc::now(),
            state,
            outbound,
            cancel,
        };
        info!(connected_at = %session.connected_at, "Client connected");

        let writer = tokio::spawn(write_loop(sink, rx).in_current_span());
        session.read_loop(stream).await;
        session.close();

        drop(session);
        if let Err(e) = writer.await {
            warn!(error = %e, "Writer task failed");
        }
    }

    async fn read_loop(&self, mut stream: SplitStream<WebSocket>) {
        loop {
            let message = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    debug!("Session cancelled");
                    return;
                }
                message = stream.next() => message,
            };

            match message {
                Some(Ok(Message::Text(text))) => self.dispatch(&text),
                Some(Ok(Message::Binary(_))) => self.send(ProtocolError::BinaryFrame.into()),
                Some(Ok(Message::Close(_))) | None => return,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    debug!(error = %e, "Socket read failed");
                    return;
                }
            }
        }
    }

    fn dispatch(&self, text: &str) {
        match ClientEvent::parse(text) {
            Ok(event) => self.spawn_request(event),
            Err(e) => {
                debug!(error = %e, "Rejected inbound frame");
                self.send(e.into());
            }
        }
    }

    /// Run one request on its own task.
    ///
    /// The work itself runs in a nested task so that a panic surfaces as a
    /// `JoinError` here and still produces a reply.
    fn spawn_request(&self, event: ClientEvent) {
        let state = self.state.clone();
        let outbound = self.outbound.clone();
        let cancel = self.cancel.clone();

        tokio::spawn(
            async move {
                let fallback = fallback_reply(&event);
                let work = tokio::spawn(handle_event(state, event).in_current_span());
                let abort = work.abort_handle();

                let reply = tokio::select! {
                    _ = cancel.cancelled() => {
                        abort.abort();
                        debug!("Request abandoned after disconnect");
                        return;
                    }
                    result = work => match result {
                        Ok(reply) => reply,
                        Err(e) => {
                            warn!(error = %e, "Request task failed");
                            fallback
                        }
                    },
                };

                if outbound.send(reply).is_err() {
                    debug!("Client gone, reply dropped");
                }
            }
            .in_current_span(),
        );
    }

    fn send(&self, event: ServerEvent) {
        if self.outbound.send(event).is_err() {
            debug!("Client gone, reply dropped");
        }
    }

    fn close(&self) {
        self.cancel.cancel();
        let elapsed = Utc::now() - self.connected_at;
        info!(
            connection_id = %self.id,
            duration_ms = elapsed.num_milliseconds(),
            "Client disconnected"
        );
    }
}

async fn handle_event(state: AppState, event: ClientEvent) -> ServerEvent {
    match event {
        ClientEvent::MentorQuery { query } => {
            state.mentor.execute(&Query::new(query)).await.into()
        }
        ClientEvent::ExecuteCode { code } => {
            debug!(bytes = code.len(), "Execution request received");
            ServerEvent::ExecutionResult {
                result: state.executor.execute_for_display(code).await,
            }
        }
    }
}

/// Reply used when the request task dies before producing one.
fn fallback_reply(event: &ClientEvent) -> ServerEvent {
    match event {
        ClientEvent::MentorQuery { query } => {
            RunMentorUseCase::internal_error_response(&Query::new(query.as_str())).into()
        }
        ClientEvent::ExecuteCode { .. } => {
            let outcome: ExecutionOutcome =
                ExecutionError::internal("the execution task stopped unexpectedly").into();
            ServerEvent::ExecutionResult {
                result: outcome.display_text(),
            }
        }
    }
}

async fn write_loop(
    mut sink: SplitSink<WebSocket, Message>,
    mut rx: mpsc::UnboundedReceiver<ServerEvent>,
) {
    while let Some(event) = rx.recv().await {
        let text = match event.to_json() {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, event = event.name(), "Failed to encode reply");
                continue;
            }
        };
        if sink.send(Message::Text(text)).await.is_err() {
            debug!("Socket closed while sending");
            break;
        }
    }
    let _ = sink.close().await;
}

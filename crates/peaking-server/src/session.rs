use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use peaking_core::pipeline::{process_encoded, EncodedFrame};
use tokio::sync::{mpsc, Notify};
use tracing::{debug, info, warn};

use crate::context::ServerContext;
use crate::error::ServerError;
use crate::protocol::{
    decode_frame_payload, encode_frame_payload, ClientEnvelope, ProcessFramePayload, ServerEvent,
    MISSING_FRAME_MESSAGE, PROCESS_FRAME,
};

// ---------------------------------------------------------------------------
// Request handling
// ---------------------------------------------------------------------------

/// Handle one text message. Returns the event to send back, or `None` when
/// the request asked for no work.
pub async fn handle_message(ctx: &Arc<ServerContext>, text: &str) -> Option<ServerEvent> {
    prepare_reply(ctx, text).await.map(|reply| reply.into_event(ctx))
}

/// Result of one request before it is given a frame number.
enum Reply {
    Frame(EncodedFrame),
    Error(ServerError),
}

impl Reply {
    /// Frame numbers are claimed here, so only call this once the event is
    /// certain to be handed on.
    fn into_event(self, ctx: &ServerContext) -> ServerEvent {
        match self {
            Self::Frame(encoded) => {
                let frame_number = ctx.frames.advance();
                debug!(
                    frame_number,
                    width = encoded.width,
                    height = encoded.height,
                    highlighted = encoded.highlighted_pixels,
                    "frame done"
                );
                ServerEvent::ProcessedFrame {
                    frame: encode_frame_payload(&encoded.bytes),
                    frame_number,
                }
            }
            Self::Error(e) => ServerEvent::error(&e),
        }
    }
}

async fn prepare_reply(ctx: &Arc<ServerContext>, text: &str) -> Option<Reply> {
    match process_message(ctx, text).await {
        Ok(encoded) => encoded.map(Reply::Frame),
        Err(e) => {
            warn!(error = %e, "request failed");
            Some(Reply::Error(e))
        }
    }
}

async fn process_message(
    ctx: &Arc<ServerContext>,
    text: &str,
) -> Result<Option<EncodedFrame>, ServerError> {
    let envelope = ClientEnvelope::parse(text)?;
    if envelope.event != PROCESS_FRAME {
        return Err(ServerError::Protocol(format!(
            "Unknown event '{}'",
            envelope.event
        )));
    }

    let payload = ProcessFramePayload::from_value(envelope.data)?;
    let encoded = payload
        .frame
        .as_deref()
        .ok_or_else(|| ServerError::Protocol(MISSING_FRAME_MESSAGE.into()))?;
    if !payload.enabled() {
        debug!("peaking disabled, skipping frame");
        return Ok(None);
    }

    let params = payload.to_params();
    let bytes = decode_frame_payload(encoded)?;
    let config = ctx.peaking().clone();

    let result = tokio::task::spawn_blocking(move || process_encoded(&bytes, &params, &config))
        .await
        .map_err(|e| ServerError::Processing(format!("worker task failed: {e}")))??;
    Ok(Some(result))
}

// ---------------------------------------------------------------------------
// Per-session queue
// ---------------------------------------------------------------------------

/// Bounded single-consumer queue that discards the oldest entry when full.
#[derive(Debug)]
pub struct FrameQueue {
    state: Mutex<QueueState>,
    ready: Notify,
    capacity: usize,
}

#[derive(Debug, Default)]
struct QueueState {
    items: VecDeque<String>,
    closed: bool,
}

impl FrameQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(QueueState::default()),
            ready: Notify::new(),
            capacity: capacity.max(1),
        }
    }

    /// Enqueue `item`, returning the entry evicted to make room, if any.
    /// Pushing onto a closed queue drops `item`.
    pub fn push(&self, item: String) -> Option<String> {
        let evicted = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.closed {
                return Some(item);
            }
            let evicted = if state.items.len() >= self.capacity {
                state.items.pop_front()
            } else {
                None
            };
            state.items.push_back(item);
            evicted
        };
        self.ready.notify_one();
        evicted
    }

    /// Wait for the next entry. Returns `None` once the queue is closed.
    pub async fn pop(&self) -> Option<String> {
        loop {
            let notified = self.ready.notified();
            {
                let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
                if state.closed {
                    return None;
                }
                if let Some(item) = state.items.pop_front() {
                    return Some(item);
                }
            }
            notified.await;
        }
    }

    /// Close the queue and discard pending entries.
    pub fn close(&self) {
        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            state.closed = true;
            state.items.clear();
        }
        self.ready.notify_one();
    }

    pub fn len(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .items
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Session loop
// ---------------------------------------------------------------------------

/// Drive one WebSocket connection until the client goes away.
///
/// The reader pushes text frames into a [`FrameQueue`], a single worker
/// processes them in order and a writer task sends the resulting events.
pub async fn run_session(socket: WebSocket, ctx: Arc<ServerContext>) {
    let session_id = ctx.sessions.advance();
    info!(session_id, "client connected");

    let (mut sink, mut stream) = socket.split();
    let queue = Arc::new(FrameQueue::new(ctx.queue_capacity()));
    let (tx, mut rx) = mpsc::channel::<ServerEvent>(8);

    let worker = tokio::spawn({
        let queue = Arc::clone(&queue);
        let ctx = Arc::clone(&ctx);
        async move {
            while let Some(text) = queue.pop().await {
                let Some(reply) = prepare_reply(&ctx, &text).await else {
                    continue;
                };
                // Number the frame only once the writer has room for it.
                let Ok(permit) = tx.reserve().await else {
                    break;
                };
                permit.send(reply.into_event(&ctx));
            }
        }
    });

    let writer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            if sink.send(Message::Text(event.to_json())).await.is_err() {
                break;
            }
        }
    });

    while let Some(message) = stream.next().await {
        match message {
            Ok(Message::Text(text)) => {
                if queue.push(text).is_some() {
                    warn!(session_id, "session queue full, dropped oldest frame");
                }
            }
            Ok(Message::Binary(_)) => debug!(session_id, "ignoring binary message"),
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                debug!(session_id, error = %e, "socket error");
                break;
            }
        }
    }

    queue.close();
    worker.abort();
    writer.abort();
    info!(session_id, "client disconnected");
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use serde_json::json;

    use super::*;
    use crate::ServerConfig;

    fn frame_message() -> String {
        let img = image::RgbImage::from_fn(40, 40, |x, y| {
            let v = if (x / 20 + y / 20) % 2 == 0 { 100 } else { 200 };
            image::Rgb([v, v, v])
        });
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        json!({
            "event": PROCESS_FRAME,
            "data": { "frame": encode_frame_payload(&buf.into_inner()) },
        })
        .to_string()
    }

    #[tokio::test]
    async fn abandoned_reply_claims_no_frame_number() {
        let ctx = Arc::new(ServerContext::new(ServerConfig::default()));
        let msg = frame_message();

        let reply = prepare_reply(&ctx, &msg).await;
        assert!(matches!(reply, Some(Reply::Frame(_))));
        assert_eq!(ctx.frames.current(), 0);
        drop(reply);

        let reply = prepare_reply(&ctx, &msg).await.unwrap();
        match reply.into_event(&ctx) {
            ServerEvent::ProcessedFrame { frame_number, .. } => assert_eq!(frame_number, 1),
            other => panic!("unexpected event {other:?}"),
        }
    }
}

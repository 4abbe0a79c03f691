//! Channel-backed [`EventCallback`] implementation.
//!
//! [`ChannelCallback`] turns every suspension into a [`PresentationRequest`]
//! carrying a oneshot [`Responder`]. The UI side drains requests through a
//! [`PresentationPort`] and answers them; effects travel on a separate
//! broadcast channel because they never wait for an answer.
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use game_core::{EffectEvent, Encounter};
use tokio::sync::{broadcast, mpsc, oneshot};

use super::callback::EventCallback;
use super::errors::{CancelReason, RequestKind, Result, RuntimeError};
use crate::config::RuntimeConfig;

/// One-shot answer slot handed to the presentation layer.
///
/// Dropping a responder without calling [`Responder::respond`] cancels the
/// waiting request.
#[derive(Debug)]
pub struct Responder<T> {
    reply: oneshot::Sender<T>,
}

impl<T> Responder<T> {
    fn new(reply: oneshot::Sender<T>) -> Self {
        Self { reply }
    }

    /// Sends the answer. Returns `false` if the requester already gave up.
    pub fn respond(self, value: T) -> bool {
        self.reply.send(value).is_ok()
    }

    /// True once the waiting side has timed out or been dropped.
    pub fn is_abandoned(&self) -> bool {
        self.reply.is_closed()
    }

    /// Completes once the waiting side has timed out or been dropped.
    pub async fn closed(&mut self) {
        self.reply.closed().await
    }
}

/// A suspension waiting for the presentation layer.
#[derive(Debug)]
pub enum PresentationRequest {
    Continue(Responder<()>),
    Choice {
        choices: Vec<String>,
        responder: Responder<usize>,
    },
    Movement(Responder<()>),
    Combat {
        encounter: Box<Encounter>,
        responder: Responder<bool>,
    },
}

impl PresentationRequest {
    pub fn kind(&self) -> RequestKind {
        match self {
            PresentationRequest::Continue(_) => RequestKind::Continue,
            PresentationRequest::Choice { .. } => RequestKind::Choice,
            PresentationRequest::Movement(_) => RequestKind::Movement,
            PresentationRequest::Combat { .. } => RequestKind::Combat,
        }
    }
}

/// UI-side end of a [`ChannelCallback`].
pub struct PresentationPort {
    requests: mpsc::Receiver<PresentationRequest>,
    effects: broadcast::Receiver<EffectEvent>,
}

impl PresentationPort {
    /// Next pending request, or `None` once the callback is dropped.
    pub async fn next_request(&mut self) -> Option<PresentationRequest> {
        self.requests.recv().await
    }

    /// Effects delivered since the port was created.
    ///
    /// The receiver exists from construction, so effects emitted before the
    /// UI starts polling are buffered up to `request_buffer * 8` entries.
    pub fn effects(&mut self) -> &mut broadcast::Receiver<EffectEvent> {
        &mut self.effects
    }

    /// Additional effect subscriber that only sees future effects.
    pub fn subscribe_effects(&self) -> broadcast::Receiver<EffectEvent> {
        self.effects.resubscribe()
    }

    /// Splits the port so requests and effects can be polled concurrently.
    pub fn into_parts(
        self,
    ) -> (
        mpsc::Receiver<PresentationRequest>,
        broadcast::Receiver<EffectEvent>,
    ) {
        (self.requests, self.effects)
    }
}

/// Callback that forwards suspensions over tokio channels.
pub struct ChannelCallback {
    requests: mpsc::Sender<PresentationRequest>,
    effects: broadcast::Sender<EffectEvent>,
    response_timeout: Option<Duration>,
    pending: AtomicBool,
}

impl ChannelCallback {
    pub fn new(config: &RuntimeConfig) -> (Self, PresentationPort) {
        let buffer = config.request_buffer.max(1);
        let (request_tx, request_rx) = mpsc::channel(buffer);
        let (effect_tx, effect_rx) = broadcast::channel(buffer * 8);

        let callback = Self {
            requests: request_tx,
            effects: effect_tx,
            response_timeout: config.response_timeout,
            pending: AtomicBool::new(false),
        };
        let port = PresentationPort {
            requests: request_rx,
            effects: effect_rx,
        };
        (callback, port)
    }

    async fn request<T, F>(&self, kind: RequestKind, build: F) -> Result<T>
    where
        T: Send,
        F: FnOnce(Responder<T>) -> PresentationRequest + Send,
    {
        let _pending = PendingGuard::acquire(&self.pending)?;

        let (reply_tx, reply_rx) = oneshot::channel();
        let exchange = async {
            self.requests
                .send(build(Responder::new(reply_tx)))
                .await
                .map_err(|_| CancelReason::Disconnected)?;
            reply_rx.await.map_err(|_| CancelReason::Dismissed)
        };

        tracing::debug!(request = %kind, "suspending for presentation");
        match with_deadline(self.response_timeout, exchange).await {
            Ok(value) => {
                tracing::debug!(request = %kind, "presentation answered");
                Ok(value)
            }
            Err(reason) => {
                tracing::warn!(request = %kind, %reason, "presentation request cancelled");
                Err(RuntimeError::Cancelled {
                    request: kind,
                    reason,
                })
            }
        }
    }
}

async fn with_deadline<T>(
    limit: Option<Duration>,
    exchange: impl Future<Output = std::result::Result<T, CancelReason>>,
) -> std::result::Result<T, CancelReason> {
    match limit {
        Some(limit) => tokio::time::timeout(limit, exchange)
            .await
            .unwrap_or(Err(CancelReason::Timeout)),
        None => exchange.await,
    }
}

/// Marks a suspension as outstanding until dropped, including when the
/// waiting future itself is dropped mid-flight.
struct PendingGuard<'a>(&'a AtomicBool);

impl<'a> PendingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| RuntimeError::SuspensionPending)?;
        Ok(Self(flag))
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[async_trait]
impl EventCallback for ChannelCallback {
    async fn wait_for_continue(&self) -> Result<()> {
        self.request(RequestKind::Continue, PresentationRequest::Continue)
            .await
    }

    async fn wait_for_choice(&self, choices: Vec<String>) -> Result<usize> {
        if choices.is_empty() {
            return Err(RuntimeError::NoChoices);
        }
        let count = choices.len();
        let index = self
            .request(RequestKind::Choice, |responder| {
                PresentationRequest::Choice { choices, responder }
            })
            .await?;
        if index >= count {
            return Err(RuntimeError::InvalidChoice { index, count });
        }
        Ok(index)
    }

    async fn wait_for_movement(&self) -> Result<()> {
        self.request(RequestKind::Movement, PresentationRequest::Movement)
            .await
    }

    async fn wait_for_combat(&self, encounter: Encounter) -> Result<bool> {
        self.request(RequestKind::Combat, |responder| PresentationRequest::Combat {
            encounter: Box::new(encounter),
            responder,
        })
        .await
    }

    fn deliver_effect(&self, effect: EffectEvent) {
        if self.effects.send(effect).is_err() {
            tracing::debug!("effect dropped: no presentation subscribers");
        }
    }
}

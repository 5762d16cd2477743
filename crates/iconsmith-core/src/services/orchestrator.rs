//! Generation request lifecycle.
//!
//! The orchestrator owns the only [`GenerationSnapshot`] and drives it
//! through `Idle -> Loading -> {Succeeded | Failed}`. Observers read it via
//! a `watch` channel; nothing else writes to it.
//!
//! # Submission
//!
//! Submitting is split in two so callers can react to the Loading
//! transition before the network call finishes:
//!
//! 1. [`RequestOrchestrator::begin`] validates the request and atomically
//!    enters Loading, or refuses without touching state.
//! 2. [`PendingGeneration::resolve`] performs the single network call and
//!    publishes the terminal state.
//!
//! [`RequestOrchestrator::submit`] does both. Every failure is absorbed
//! into state; nothing is returned as an error.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::domain::{
    GeneratedIcon, GenerationPayload, GenerationRequest, GenerationSnapshot, RequestState,
    StyleCatalog, StyleId,
};
use crate::ports::{GenerationFailure, IconGenerationPort};

/// Why a submission was refused before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error("topic is blank")]
    BlankTopic,

    #[error("style {0} is not in the catalog")]
    UnknownStyle(StyleId),

    #[error("a generation request is already in flight")]
    Busy,

    #[error("the generation owner has been torn down")]
    TornDown,
}

/// What a submission ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Refused locally; state untouched, no network call.
    Rejected(SubmitRejection),
    /// Icon collection replaced.
    Succeeded { count: usize },
    /// Error notification set; icon collection kept.
    Failed { message: String },
    /// The response arrived after teardown and was dropped.
    Discarded,
}

/// Drives generation requests against an [`IconGenerationPort`].
pub struct RequestOrchestrator {
    generator: Arc<dyn IconGenerationPort>,
    state: watch::Sender<GenerationSnapshot>,
    lifetime: CancellationToken,
}

impl RequestOrchestrator {
    pub fn new(generator: Arc<dyn IconGenerationPort>) -> Self {
        let (state, _) = watch::channel(GenerationSnapshot::default());
        Self {
            generator,
            state,
            lifetime: CancellationToken::new(),
        }
    }

    /// Receive every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<GenerationSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> GenerationSnapshot {
        self.state.borrow().clone()
    }

    pub fn current_state(&self) -> RequestState {
        self.state.borrow().state.clone()
    }

    pub fn icons(&self) -> Vec<GeneratedIcon> {
        self.state.borrow().icons.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn is_torn_down(&self) -> bool {
        self.lifetime.is_cancelled()
    }

    /// Validate `request` and enter Loading.
    ///
    /// Entering Loading clears any previous error. A refusal leaves state
    /// exactly as it was.
    pub fn begin(
        &self,
        request: &GenerationRequest,
    ) -> Result<PendingGeneration<'_>, SubmitRejection> {
        if self.is_torn_down() {
            return Err(SubmitRejection::TornDown);
        }
        if !request.has_topic() {
            return Err(SubmitRejection::BlankTopic);
        }
        if !StyleCatalog::contains(request.style) {
            return Err(SubmitRejection::UnknownStyle(request.style));
        }

        let mut previous = None;
        let entered = self.state.send_if_modified(|snapshot| {
            if snapshot.is_loading() {
                return false;
            }
            previous = Some(Replaced {
                state: std::mem::replace(&mut snapshot.state, RequestState::Loading),
                error: snapshot.error.take(),
            });
            true
        });
        if !entered {
            debug!("Ignoring submission while a request is in flight");
            return Err(SubmitRejection::Busy);
        }

        let payload = request.to_payload();
        info!(topic = %payload.topic, style = payload.style, "Generating icons");

        Ok(PendingGeneration {
            orchestrator: self,
            payload,
            previous,
        })
    }

    /// Run a full submission.
    pub async fn submit(&self, request: &GenerationRequest) -> SubmitOutcome {
        match self.begin(request) {
            Ok(pending) => pending.resolve().await,
            Err(rejection) => SubmitOutcome::Rejected(rejection),
        }
    }

    /// The error notification went away.
    ///
    /// Clears the error and returns a `Failed` state to `Idle`. The icon
    /// collection is untouched.
    pub fn clear_error(&self) {
        self.clear_error_matching(None);
    }

    /// Like [`clear_error`](Self::clear_error), but only while `message` is
    /// still the published error. A newer failure is left alone.
    pub fn clear_error_if(&self, message: &str) {
        self.clear_error_matching(Some(message));
    }

    fn clear_error_matching(&self, expected: Option<&str>) {
        if self.is_torn_down() {
            return;
        }
        self.state.send_if_modified(|snapshot| {
            if expected.is_some_and(|message| snapshot.error.as_deref() != Some(message)) {
                return false;
            }
            let failed = matches!(snapshot.state, RequestState::Failed(_));
            if snapshot.error.is_none() && !failed {
                return false;
            }
            snapshot.error = None;
            if failed {
                snapshot.state = RequestState::Idle;
            }
            true
        });
    }

    /// The owner is gone. In-flight results are dropped on arrival and
    /// later submissions are refused.
    pub fn teardown(&self) {
        if !self.lifetime.is_cancelled() {
            debug!("Tearing down request orchestrator");
            self.lifetime.cancel();
        }
    }

    fn settle(&self, result: Result<Vec<GeneratedIcon>, GenerationFailure>) -> SubmitOutcome {
        if self.is_torn_down() {
            debug!("Discarding generation result delivered after teardown");
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(icons) => {
                let count = icons.len();
                self.state.send_modify(|snapshot| {
                    snapshot.state = RequestState::Succeeded(icons.clone());
                    snapshot.icons = icons;
                    snapshot.error = None;
                });
                info!(count, "Icon generation succeeded");
                SubmitOutcome::Succeeded { count }
            }
            Err(failure) => {
                let message = failure.notification_message().to_string();
                warn!(status = ?failure.status(), %message, "Icon generation failed");
                self.state.send_modify(|snapshot| {
                    snapshot.state = RequestState::Failed(message.clone());
                    snapshot.error = Some(message.clone());
                });
                SubmitOutcome::Failed { message }
            }
        }
    }

    fn abandon(&self, previous: Replaced) {
        if self.is_torn_down() {
            return;
        }
        warn!("Generation abandoned before completion; leaving loading state");
        self.state.send_if_modified(|snapshot| {
            if !snapshot.is_loading() {
                return false;
            }
            snapshot.state = previous.state;
            snapshot.error = previous.error;
            true
        });
    }
}

/// What `begin` swapped out when entering Loading.
struct Replaced {
    state: RequestState,
    error: Option<String>,
}

/// A submission that has entered Loading but not yet called the service.
///
/// Dropping it unresolved restores the state it replaced, so Loading is
/// never left asserted by an abandoned future.
#[must_use = "a pending generation does nothing until resolved"]
pub struct PendingGeneration<'a> {
    orchestrator: &'a RequestOrchestrator,
    payload: GenerationPayload,
    /// `Some` until the generation settles.
    previous: Option<Replaced>,
}

impl PendingGeneration<'_> {
    pub const fn payload(&self) -> &GenerationPayload {
        &self.payload
    }

    /// Call the service once and publish the terminal state.
    pub async fn resolve(mut self) -> SubmitOutcome {
        let result = self.orchestrator.generator.generate(&self.payload).await;
        self.previous = None;
        self.orchestrator.settle(result)
    }
}

impl Drop for PendingGeneration<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.orchestrator.abandon(previous);
        }
    }
}

//! Auto-expiring error notification.
//!
//! At most one message is visible. Showing a message starts a countdown;
//! when it elapses the dismissal callback runs once with the message that
//! went away. Manual dismissal runs the same callback immediately and
//! cancels the countdown. Teardown
//! cancels the countdown without running the callback.
//!
//! The countdown is a spawned tokio task raced against a
//! [`CancellationToken`]. Firing and manual dismissal both claim the
//! notification under the same lock, so only one of them can win.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// How long a notification stays up when nobody dismisses it.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(5);

type DismissCallback = Arc<dyn Fn(&str) + Send + Sync>;

struct Countdown {
    id: u64,
    token: CancellationToken,
}

#[derive(Default)]
struct Slot {
    message: Option<String>,
    countdown: Option<Countdown>,
    next_id: u64,
    torn_down: bool,
}

impl Slot {
    fn cancel_countdown(&mut self) {
        if let Some(countdown) = self.countdown.take() {
            countdown.token.cancel();
        }
    }

    /// Claim the visible notification for countdown `id`, returning the
    /// message it was showing.
    fn expire(&mut self, id: u64) -> Option<String> {
        let current = self
            .countdown
            .as_ref()
            .is_some_and(|c| c.id == id && !c.token.is_cancelled());
        if !current {
            return None;
        }
        self.countdown = None;
        self.message.take()
    }
}

/// A single dismissible, auto-expiring notification.
pub struct NotificationTimer {
    ttl: Duration,
    on_dismiss: DismissCallback,
    slot: Arc<Mutex<Slot>>,
}

impl NotificationTimer {
    /// `on_dismiss` receives the message being dismissed.
    pub fn new(ttl: Duration, on_dismiss: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            ttl,
            on_dismiss: Arc::new(on_dismiss),
            slot: Arc::new(Mutex::new(Slot::default())),
        }
    }

    pub fn with_default_ttl(on_dismiss: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL, on_dismiss)
    }

    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Currently visible message.
    pub fn message(&self) -> Option<String> {
        self.lock().message.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.lock().message.is_some()
    }

    /// Set the message to display.
    ///
    /// `None` or an empty message hides the notification without running
    /// the callback. A different message restarts the countdown; the same
    /// message leaves the running countdown alone.
    pub fn show(&self, message: Option<String>) {
        let message = message.filter(|m| !m.is_empty());
        let mut slot = self.lock();
        if slot.torn_down || slot.message == message {
            return;
        }

        slot.cancel_countdown();
        slot.message.clone_from(&message);
        if message.is_none() {
            return;
        }

        let Ok(runtime) = Handle::try_current() else {
            warn!("No async runtime; notification will not expire on its own");
            return;
        };

        let id = slot.next_id;
        slot.next_id += 1;
        let token = CancellationToken::new();
        slot.countdown = Some(Countdown {
            id,
            token: token.clone(),
        });
        drop(slot);

        let expiry = tokio::time::sleep(self.ttl);
        let slot = Arc::clone(&self.slot);
        let on_dismiss = Arc::clone(&self.on_dismiss);
        runtime.spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = expiry => {
                    let expired = slot.lock().unwrap_or_else(PoisonError::into_inner).expire(id);
                    if let Some(message) = expired {
                        debug!("Notification expired");
                        on_dismiss(&message);
                    }
                }
            }
        });
    }

    /// Close the notification now.
    ///
    /// Does nothing when no notification is visible, so a dismissal racing
    /// an expiry cannot run the callback twice.
    pub fn dismiss(&self) {
        let message = {
            let mut slot = self.lock();
            let Some(message) = slot.message.take() else {
                return;
            };
            slot.cancel_countdown();
            message
        };
        debug!("Notification dismissed");
        (self.on_dismiss)(&message);
    }

    /// Stop for good. No callback runs after this.
    pub fn teardown(&self) {
        let mut slot = self.lock();
        slot.torn_down = true;
        slot.cancel_countdown();
        slot.message = None;
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for NotificationTimer {
    fn drop(&mut self) {
        self.teardown();
    }
}

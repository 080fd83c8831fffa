//! Toast notifications.
//!
//! Commands push onto [`NotificationQueue`]; the UI draws [`VisibleToasts`],
//! which drops anything past its deadline according to [`Time`].

use std::any::{Any, TypeId};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use log::{info, warn};
use roster_states::{Command, Compute, ComputeDeps, Dep, State, Time, Updater};

use crate::config::DEFAULT_TOAST_SECONDS;

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Toast {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Every toast raised and not yet pruned, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationQueue {
    toasts: Vec<Toast>,
    next_id: ToastId,
    lifetime: TimeDelta,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TOAST_SECONDS))
    }
}

impl NotificationQueue {
    pub fn new(lifetime: Duration) -> Self {
        let lifetime = TimeDelta::from_std(lifetime).unwrap_or_else(|err| {
            warn!("NotificationQueue: toast lifetime out of range ({err}), using default");
            TimeDelta::seconds(DEFAULT_TOAST_SECONDS as i64)
        });
        Self {
            toasts: Vec::new(),
            next_id: 0,
            lifetime,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Enqueues a toast. No deduplication: the same message twice shows twice.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        now: DateTime<Utc>,
    ) -> ToastId {
        self.prune(now);

        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        info!("NotificationQueue: {kind:?} toast #{id}: {message}");

        self.toasts.push(Toast {
            id,
            message,
            kind,
            created_at: now,
            expires_at: now
                .checked_add_signed(self.lifetime)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        });
        id
    }

    /// Same queue with one more toast.
    pub fn with_toast(&self, message: impl Into<String>, kind: ToastKind, now: DateTime<Utc>) -> Self {
        let mut next = self.clone();
        next.notify(message, kind, now);
        next
    }

    /// Returns whether `id` was still queued.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        before != self.toasts.len()
    }

    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.toasts.retain(|toast| !toast.is_expired(now));
    }

    pub fn visible(&self, now: DateTime<Utc>) -> Vec<Toast> {
        self.toasts
            .iter()
            .filter(|toast| !toast.is_expired(now))
            .cloned()
            .collect()
    }
}

impl State for NotificationQueue {}

/// Toasts that should be on screen right now.
#[derive(Debug, Clone, Default)]
pub struct VisibleToasts {
    pub toasts: Vec<Toast>,
}

impl Compute for VisibleToasts {
    fn deps(&self) -> ComputeDeps {
        const STATE_IDS: [TypeId; 2] = [TypeId::of::<Time>(), TypeId::of::<NotificationQueue>()];
        (&STATE_IDS, &[])
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let now = deps.get_state_ref::<Time>().now();
        let queue = deps.get_state_ref::<NotificationQueue>();
        let toasts = queue.visible(now);

        // Time is dirty every frame; only publish on change
        if toasts != self.toasts {
            updater.set(VisibleToasts { toasts });
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Which toast `DismissToastCommand` closes.
#[derive(Debug, Clone, Default)]
pub struct DismissToastInput {
    pub id: Option<ToastId>,
}

impl State for DismissToastInput {}

#[derive(Debug, Default)]
pub struct DismissToastCommand;

impl Command for DismissToastCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let Some(id) = deps.get_state_ref::<DismissToastInput>().id else {
            warn!("DismissToastCommand: no toast selected");
            return;
        };

        let mut queue = deps.get_state_ref::<NotificationQueue>().clone();
        if queue.dismiss(id) {
            info!("DismissToastCommand: dismissed toast #{id}");
            updater.set(queue);
        }
    }
}

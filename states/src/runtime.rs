use std::any::{Any, TypeId, type_name};

use flume::{Receiver, Sender};
use log::warn;

/// Replaces the value stored under a `TypeId` once the update is applied.
pub(crate) type Assign = Box<dyn FnOnce(&mut dyn Any) + Send>;

pub(crate) type Update = (TypeId, &'static str, Assign);

/// Write handle for states and computes.
///
/// Cheap to clone and `Send`, so async work can carry one and report back
/// later. Updates are queued in order and applied by
/// [`StateCtx::sync_computes`](crate::StateCtx::sync_computes).
#[derive(Clone, Debug)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    pub fn set<T: Any + Send>(&self, value: T) {
        let assign: Assign = Box::new(move |slot: &mut dyn Any| {
            if let Some(target) = slot.downcast_mut::<T>() {
                *target = value;
            }
        });

        if self
            .send
            .send((TypeId::of::<T>(), type_name::<T>(), assign))
            .is_err()
        {
            warn!(
                "Updater: state context dropped, discarding update for {}",
                type_name::<T>()
            );
        }
    }
}

#[derive(Debug)]
pub struct StateRuntime {
    send: Sender<Update>,
    recv: Receiver<Update>,
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRuntime {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self { send, recv }
    }

    pub fn updater(&self) -> Updater {
        Updater {
            send: self.send.clone(),
        }
    }

    pub(crate) fn drain(&self) -> impl Iterator<Item = Update> + '_ {
        self.recv.try_iter()
    }
}

use std::any::Any;

use crate::{Dep, Updater};

/// A manual-only action, run when the UI calls
/// [`StateCtx::dispatch`](crate::StateCtx::dispatch).
///
/// Commands read through [`Dep`] and write through [`Updater`]. Unlike
/// computes they are allowed to have side effects, including spawning async
/// work that reports back through a cloned `Updater`.
pub trait Command: Any + Send {
    fn run(&self, deps: Dep<'_>, updater: Updater);
}

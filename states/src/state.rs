use std::any::Any;

/// A plain value stored in [`StateCtx`](crate::StateCtx).
///
/// States are written by the UI (through `state_mut` / `update`) or by
/// commands (through [`Updater::set`](crate::Updater::set)). Any write marks
/// the state dirty so that computes depending on it re-run.
pub trait State: Any + Send {}

//! Minimal reactive state container used by the roster app.
//!
//! - [`State`]: plain values, written by the UI or through an [`Updater`]
//! - [`Compute`]: cached values derived from states/computes, re-run when a
//!   dependency is dirty
//! - [`Command`]: manual-only actions, free to perform side effects
//!
//! Everything lives in a [`StateCtx`], which is driven once per frame.

mod basic_state;
mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod graph;
mod runtime;
mod state;

pub use basic_state::Time;
pub use command::Command;
pub use compute::{Compute, ComputeDeps};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use graph::{DepRoute, Graph, TopologyError};
pub use runtime::{StateRuntime, Updater};
pub use state::State;

use std::any::{Any, TypeId};

use crate::{Dep, Updater};

/// `(state dependencies, compute dependencies)`
pub type ComputeDeps = (&'static [TypeId], &'static [TypeId]);

/// A cached value derived from states and other computes.
///
/// `compute` never mutates in place: it publishes the next value through the
/// [`Updater`], which is applied before any dependent compute runs.
pub trait Compute: Any + Send {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

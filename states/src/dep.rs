use std::{
    any::{Any, TypeId, type_name},
    collections::BTreeMap,
};

use crate::{Compute, Error, State};

pub(crate) type StateSlots = BTreeMap<TypeId, Box<dyn Any + Send>>;
pub(crate) type ComputeSlots = BTreeMap<TypeId, Box<dyn Compute>>;

/// Read-only view over every registered state and compute.
///
/// Handed to [`Compute::compute`] and [`Command::run`](crate::Command::run).
/// Borrowing the whole context keeps reads consistent for the duration of a
/// run: nothing can be written until the `Dep` is dropped.
#[derive(Clone, Copy)]
pub struct Dep<'a> {
    states: &'a StateSlots,
    computes: &'a ComputeSlots,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(states: &'a StateSlots, computes: &'a ComputeSlots) -> Self {
        Self { states, computes }
    }

    pub fn try_state_ref<T: State>(&self) -> Result<&'a T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "Dep::try_state_ref"))
    }

    pub fn try_compute_ref<T: Compute>(&self) -> Result<&'a T, Error> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::compute_not_found(type_name::<T>(), "Dep::try_compute_ref"))
    }

    /// # Panics
    /// Panics if `T` was never registered with `add_state`.
    pub fn get_state_ref<T: State>(&self) -> &'a T {
        match self.try_state_ref::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// # Panics
    /// Panics if `T` was never registered with `record_compute`.
    pub fn get_compute_ref<T: Compute>(&self) -> &'a T {
        match self.try_compute_ref::<T>() {
            Ok(compute) => compute,
            Err(err) => panic!("{err}"),
        }
    }
}

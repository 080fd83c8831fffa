use std::{
    any::{TypeId, type_name},
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use log::{debug, error, warn};

use crate::{
    Command, Compute, Error, Graph, State, StateRuntime, Updater,
    dep::{ComputeSlots, Dep, StateSlots},
    runtime::Update,
};

/// Owner of every state, compute and command in the app.
///
/// The frame loop is:
/// 1. UI writes states (`update` / `state_mut`) and dispatches commands.
/// 2. `sync_computes` applies everything sent through an [`Updater`].
/// 3. `run_computed` re-derives computes whose dependencies changed, in
///    dependency order.
#[derive(Default)]
pub struct StateCtx {
    runtime: StateRuntime,

    states: StateSlots,
    computes: ComputeSlots,
    commands: BTreeMap<TypeId, Box<dyn Command>>,

    graph: Graph<TypeId>,
    order: Vec<TypeId>,

    // written since the last `run_computed`
    dirty: BTreeSet<TypeId>,
    // computes that have never run
    pending: BTreeSet<TypeId>,
}

impl fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("dirty", &self.dirty.len())
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        if self.states.insert(id, Box::new(state)).is_some() {
            debug!("StateCtx: replaced state {}", type_name::<T>());
        }
        self.graph.add_node(id);
        self.dirty.insert(id);
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        let (state_deps, compute_deps) = compute.deps();

        self.graph.add_node(id);
        for dep in state_deps.iter().chain(compute_deps) {
            self.graph.route_to(*dep, id);
        }

        match self.graph.topology_sort() {
            Ok(order) => self.order = order,
            Err(err) => {
                error!("StateCtx: {} creates a dependency cycle: {err}", type_name::<T>());
                self.order.retain(|known| *known != id);
                self.order.push(id);
            }
        }

        self.computes.insert(id, Box::new(compute));
        self.pending.insert(id);
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    /// Re-checks the compute graph for cycles.
    pub fn verify_deps(&self) -> Result<(), Error> {
        self.graph.topology_sort()?;
        Ok(())
    }

    pub fn updater(&self) -> Updater {
        self.runtime.updater()
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        Dep::new(&self.states, &self.computes).try_state_ref::<T>()
    }

    /// # Panics
    /// Panics if `T` was never registered.
    pub fn state<T: State>(&self) -> &T {
        Dep::new(&self.states, &self.computes).get_state_ref::<T>()
    }

    /// Mutable access, marks `T` dirty.
    ///
    /// # Panics
    /// Panics if `T` was never registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let id = TypeId::of::<T>();
        self.dirty.insert(id);
        match self
            .states
            .get_mut(&id)
            .and_then(|boxed| boxed.downcast_mut::<T>())
        {
            Some(state) => state,
            None => panic!(
                "{}",
                Error::state_not_found(type_name::<T>(), "StateCtx::state_mut")
            ),
        }
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// The last value published by compute `T`, if registered.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.as_any().downcast_ref::<T>())
    }

    /// # Panics
    /// Panics if `T` was never registered.
    pub fn compute<T: Compute>(&self) -> &T {
        Dep::new(&self.states, &self.computes).get_compute_ref::<T>()
    }

    pub fn try_dispatch<T: Command>(&mut self) -> Result<(), Error> {
        let command = self
            .commands
            .get(&TypeId::of::<T>())
            .ok_or(Error::CommandNotFound {
                name: type_name::<T>(),
            })?;

        command.run(
            Dep::new(&self.states, &self.computes),
            self.runtime.updater(),
        );

        self.sync_computes();
        Ok(())
    }

    /// Runs command `T` now and applies its synchronous updates.
    ///
    /// Updates are applied in the order the command sent them.
    pub fn dispatch<T: Command>(&mut self) {
        if let Err(err) = self.try_dispatch::<T>() {
            error!("StateCtx: {err}");
        }
    }

    fn apply_updates(&mut self) -> Vec<TypeId> {
        let updates: Vec<Update> = self.runtime.drain().collect();
        let mut applied = Vec::with_capacity(updates.len());

        for (id, name, assign) in updates {
            if let Some(slot) = self.states.get_mut(&id) {
                let slot: &mut dyn std::any::Any = &mut **slot;
                assign(slot);
            } else if let Some(compute) = self.computes.get_mut(&id) {
                assign(compute.as_any_mut());
            } else {
                warn!("StateCtx: dropping update for unregistered {name}");
                continue;
            }
            applied.push(id);
        }

        applied
    }

    /// Applies every pending update sent through an [`Updater`].
    pub fn sync_computes(&mut self) {
        for id in self.apply_updates() {
            self.dirty.insert(id);
        }
    }

    /// Re-runs every compute with a dirty dependency, dependencies first.
    pub fn run_computed(&mut self) {
        self.sync_computes();

        let mut dirty = std::mem::take(&mut self.dirty);
        let order = self.order.clone();

        for id in order {
            let should_run = match self.computes.get(&id) {
                Some(compute) => {
                    let (state_deps, compute_deps) = compute.deps();
                    self.pending.remove(&id)
                        || state_deps
                            .iter()
                            .chain(compute_deps)
                            .any(|dep| dirty.contains(dep))
                }
                None => false,
            };
            if !should_run {
                continue;
            }

            if let Some(compute) = self.computes.get(&id) {
                compute.compute(
                    Dep::new(&self.states, &self.computes),
                    self.runtime.updater(),
                );
            }

            for applied in self.apply_updates() {
                // anything other than the compute's own output arrived from
                // elsewhere and may have missed dependents earlier in order
                if applied != id {
                    self.dirty.insert(applied);
                }
                dirty.insert(applied);
            }
        }
    }

    pub fn is_dirty<T: 'static>(&self) -> bool {
        self.dirty.contains(&TypeId::of::<T>())
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use super::*;

    #[derive(Default)]
    struct Counter(u32);
    impl State for Counter {}

    #[derive(Default)]
    struct Doubled(u32);

    impl Compute for Doubled {
        fn deps(&self) -> crate::ComputeDeps {
            const IDS: [TypeId; 1] = [TypeId::of::<Counter>()];
            (&IDS, &[])
        }

        fn compute(&self, deps: Dep<'_>, updater: Updater) {
            updater.set(Doubled(deps.get_state_ref::<Counter>().0 * 2));
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[derive(Default)]
    struct PlusOne(u32);

    impl Compute for PlusOne {
        fn deps(&self) -> crate::ComputeDeps {
            const IDS: [TypeId; 1] = [TypeId::of::<Doubled>()];
            (&[], &IDS)
        }

        fn compute(&self, deps: Dep<'_>, updater: Updater) {
            updater.set(PlusOne(deps.get_compute_ref::<Doubled>().0 + 1));
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    struct Increment;

    impl Command for Increment {
        fn run(&self, deps: Dep<'_>, updater: Updater) {
            updater.set(Counter(deps.get_state_ref::<Counter>().0 + 1));
        }
    }

    fn ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter(1));
        // registered out of order on purpose
        ctx.record_compute(PlusOne::default());
        ctx.record_compute(Doubled::default());
        ctx.record_command(Increment);
        ctx
    }

    #[test]
    fn computes_run_in_dependency_order() {
        let mut ctx = ctx();
        ctx.run_computed();

        assert_eq!(ctx.compute::<Doubled>().0, 2);
        assert_eq!(ctx.compute::<PlusOne>().0, 3);
    }

    #[test]
    fn dispatch_applies_updates_immediately() {
        let mut ctx = ctx();
        ctx.dispatch::<Increment>();

        assert_eq!(ctx.state::<Counter>().0, 2);
        assert!(ctx.is_dirty::<Counter>());
    }

    #[test]
    fn state_write_reruns_dependents() {
        let mut ctx = ctx();
        ctx.run_computed();

        ctx.update::<Counter>(|c| c.0 = 10);
        ctx.run_computed();

        assert_eq!(ctx.compute::<Doubled>().0, 20);
        assert_eq!(ctx.compute::<PlusOne>().0, 21);
        assert!(!ctx.is_dirty::<Counter>());
    }

    #[test]
    fn updates_from_another_thread_are_synced() {
        let mut ctx = ctx();
        let updater = ctx.updater();

        std::thread::spawn(move || updater.set(Counter(7)))
            .join()
            .expect("updater thread should not panic");

        assert_eq!(ctx.state::<Counter>().0, 1);
        ctx.sync_computes();
        assert_eq!(ctx.state::<Counter>().0, 7);
    }

    #[test]
    fn unregistered_command_is_an_error() {
        struct Missing;
        impl Command for Missing {
            fn run(&self, _deps: Dep<'_>, _updater: Updater) {}
        }

        let mut ctx = ctx();
        assert!(matches!(
            ctx.try_dispatch::<Missing>(),
            Err(Error::CommandNotFound { .. })
        ));
    }

    #[test]
    fn missing_state_is_reported() {
        struct Unknown;
        impl State for Unknown {}

        let ctx = ctx();
        assert!(matches!(
            ctx.try_state::<Unknown>(),
            Err(Error::StateNotFound { .. })
        ));
    }

    #[test]
    fn deps_graph_is_acyclic() {
        assert!(ctx().verify_deps().is_ok());
    }
}

//! State registries: the mapping from identifier to live state instance.

use std::sync::OnceLock;

use crate::StateId;
use crate::machine::Fsm;

/// Immutable table of state instances for one machine kind.
///
/// Built once, fully populated, then only ever queried. States are stored
/// in a dense slice indexed by [`StateId::index`], so lookup is a bounds
/// check away from an array read.
pub struct Registry<F: Fsm> {
    states: Box<[Box<F::State>]>,
}

impl<F: Fsm> std::fmt::Debug for Registry<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("states", &self.states.len())
            .finish()
    }
}

impl<F: Fsm> Registry<F> {
    /// Builds a registry by asking `make` for the instance of every
    /// identifier in the domain.
    ///
    /// Total by construction: an exhaustive `match` inside `make` lets the
    /// compiler verify that no state was forgotten.
    pub fn from_fn(mut make: impl FnMut(F::Id) -> Box<F::State>) -> Self {
        Self {
            states: F::Id::ALL.iter().map(|&id| make(id)).collect(),
        }
    }

    /// Resolves an identifier to its state instance.
    ///
    /// Total over the domain the registry was built for. An identifier
    /// whose `index` falls outside that domain is a wiring bug, not a
    /// runtime condition, and panics rather than substituting a default
    /// state.
    pub fn resolve(&self, id: F::Id) -> &F::State {
        &*self.states[id.index()]
    }
}

/// Piecemeal registry construction, for callers wiring states up one at a
/// time. Prefer [`Registry::from_fn`] where an exhaustive match is
/// possible.
pub struct RegistryBuilder<F: Fsm> {
    slots: Vec<Option<Box<F::State>>>,
    duplicate: Option<F::Id>,
}

impl<F: Fsm> RegistryBuilder<F> {
    pub fn new() -> Self {
        Self {
            slots: (0..F::Id::COUNT).map(|_| None).collect(),
            duplicate: None,
        }
    }

    /// Registers the instance for `id`. Registering the same identifier
    /// twice is reported by [`build`](Self::build).
    pub fn register(mut self, id: F::Id, state: Box<F::State>) -> Self {
        let slot = &mut self.slots[id.index()];
        if slot.is_some() {
            self.duplicate.get_or_insert(id);
        } else {
            *slot = Some(state);
        }
        self
    }

    /// Finishes construction.
    ///
    /// Fails if any identifier in the domain is missing or was registered
    /// twice; a partially populated registry is never observable.
    pub fn build(self) -> Result<Registry<F>, BuildError<F::Id>> {
        if let Some(id) = self.duplicate {
            return Err(BuildError::DuplicateState(id));
        }

        let mut states = Vec::with_capacity(F::Id::COUNT);
        for (&id, slot) in F::Id::ALL.iter().zip(self.slots) {
            states.push(slot.ok_or(BuildError::MissingState(id))?);
        }

        Ok(Registry {
            states: states.into_boxed_slice(),
        })
    }
}

impl<F: Fsm> Default for RegistryBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration errors detected while building a [`Registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BuildError<I: StateId> {
    /// No state instance was registered for this identifier.
    #[error("no state registered for {0:?}")]
    MissingState(I),
    /// Two state instances were registered for the same identifier.
    #[error("duplicate state registered for {0:?}")]
    DuplicateState(I),
}

/// Process-wide state cache for one machine kind.
///
/// This is the shared strategy of the singleton variant: every machine
/// built through [`Machine::with_shared`](crate::Machine::with_shared)
/// dispatches through the same state instances for the whole process
/// lifetime. Sound only for stateless states; the `F::State: Sync` bound
/// is the opt-in gate.
pub struct SharedRegistry<F: Fsm> {
    cell: OnceLock<Registry<F>>,
}

impl<F: Fsm> SharedRegistry<F>
where
    F::State: Sync,
{
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Returns the cached registry, building it on first use.
    pub fn get_or_init(&'static self, make: impl FnOnce() -> Registry<F>) -> &'static Registry<F> {
        self.cell.get_or_init(make)
    }
}

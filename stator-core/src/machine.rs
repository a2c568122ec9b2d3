//! The context and its dispatch contract.

use std::sync::Arc;

use crate::StateId;
use crate::registry::Registry;

/// Describes one machine kind: its identifier domain, state trait, session
/// data, and designated start/terminal states.
///
/// Implementors are usually uninhabited marker enums; the trait exists to
/// tie the pieces of one machine definition together, the way a context
/// class and its state hierarchy belong together in the classic pattern.
pub trait Fsm: 'static {
    /// Closed identifier domain.
    type Id: StateId;

    /// The state trait object requests are dispatched to.
    type State: ?Sized + 'static;

    /// Context-owned session data.
    type Session;

    /// State every machine of this kind starts in.
    const START: Self::Id;

    /// Terminal state, if the machine has one. [`Machine::running`]
    /// reports `false` exactly when the current state equals it.
    const TERMINAL: Option<Self::Id>;
}

enum States<F: Fsm> {
    Owned(Arc<Registry<F>>),
    Shared(&'static Registry<F>),
}

/// The context: owns the session data and the current-state field, and
/// forwards every request to whichever state is active.
///
/// The current state is resolved eagerly at construction and is valid from
/// then on; only the [`Cx`] chokepoint handed out by [`dispatch`] can
/// reassign it.
///
/// [`dispatch`]: Machine::dispatch
pub struct Machine<F: Fsm> {
    states: States<F>,
    current: F::Id,
    session: F::Session,
}

impl<F: Fsm> Machine<F> {
    /// Builds a machine that exclusively owns its registry.
    ///
    /// The default strategy: every machine gets its own state instances,
    /// so independent machines share no mutable state and can run on
    /// separate threads without synchronization.
    pub fn new(registry: Registry<F>, session: F::Session) -> Self {
        Self::with_arc(Arc::new(registry), session)
    }

    /// Builds a machine over a registry shared by a pool of machines. The
    /// registry is dropped with the last machine referencing it.
    pub fn with_arc(registry: Arc<Registry<F>>, session: F::Session) -> Self {
        let _ = registry.resolve(F::START);
        Self {
            states: States::Owned(registry),
            current: F::START,
            session,
        }
    }

    /// Builds a machine over a process-wide registry, typically one cached
    /// in a [`SharedRegistry`](crate::SharedRegistry).
    pub fn with_shared(registry: &'static Registry<F>, session: F::Session) -> Self {
        let _ = registry.resolve(F::START);
        Self {
            states: States::Shared(registry),
            current: F::START,
            session,
        }
    }

    /// Overrides the default start state.
    ///
    /// Resolves `id` immediately, so a misconfigured start state fails at
    /// construction rather than at first dispatch.
    pub fn start_at(mut self, id: F::Id) -> Self {
        let _ = self.registry().resolve(id);
        self.current = id;
        self
    }

    /// Identifier of the active state.
    pub fn state(&self) -> F::Id {
        self.current
    }

    /// `false` exactly when the machine has reached its terminal state.
    /// Machines without a terminal state are always running.
    pub fn running(&self) -> bool {
        F::TERMINAL != Some(self.current)
    }

    /// Read-only view of the session data, for drivers inspecting results.
    pub fn session(&self) -> &F::Session {
        &self.session
    }

    /// Consumes the machine and returns the session data.
    pub fn into_session(self) -> F::Session {
        self.session
    }

    /// Forwards one request to the active state.
    ///
    /// Resolves the current state and invokes `request` with it and a
    /// [`Cx`] scoped to this call. A `Cx` is the only way to reach the
    /// transition chokepoint and the session mutators, so nothing outside
    /// a state handler can alter the machine.
    pub fn dispatch<R>(&mut self, request: impl FnOnce(&F::State, &mut Cx<'_, F>) -> R) -> R {
        let registry = match &self.states {
            States::Owned(registry) => &**registry,
            States::Shared(registry) => *registry,
        };
        let state = registry.resolve(self.current);
        let mut cx = Cx {
            registry,
            current: &mut self.current,
            session: &mut self.session,
        };
        request(state, &mut cx)
    }

    fn registry(&self) -> &Registry<F> {
        match &self.states {
            States::Owned(registry) => registry,
            States::Shared(registry) => registry,
        }
    }
}

/// Capability handed to state handlers for the duration of one dispatch.
///
/// This replaces the friend-class boundary of the classic pattern: only
/// code holding a `Cx` can transition the machine or mutate session data,
/// and only [`Machine::dispatch`] can mint one.
pub struct Cx<'m, F: Fsm> {
    registry: &'m Registry<F>,
    current: &'m mut F::Id,
    session: &'m mut F::Session,
}

impl<F: Fsm> Cx<'_, F> {
    /// The transition chokepoint: the only code path that writes the
    /// current-state field.
    ///
    /// Resolves `to` before reassigning, so an identifier outside the
    /// registry's domain aborts instead of corrupting the machine.
    /// Transitioning to the current state is legal.
    pub fn transition(&mut self, to: F::Id) {
        let _ = self.registry.resolve(to);
        tracing::debug!(from = ?*self.current, ?to, "transition");
        *self.current = to;
    }

    /// Identifier of the current state.
    pub fn state(&self) -> F::Id {
        *self.current
    }

    /// Session data, read-only.
    pub fn session(&self) -> &F::Session {
        self.session
    }

    /// Session data, for the mutations a handler is entitled to make.
    pub fn session_mut(&mut self) -> &mut F::Session {
        self.session
    }

    /// Default-handler diagnostic: the active state does not implement the
    /// named request. Non-fatal and side-effect free; the machine stays
    /// usable.
    pub fn unhandled(&self, request: &str) {
        tracing::warn!(state = ?*self.current, request, "request not handled in current state");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::testfsm::{LampFsm, LampId, Tally, lamp_states};

    #[test]
    fn starts_in_the_designated_state() {
        let lamp = Machine::<LampFsm>::new(lamp_states(), Tally::default());
        assert_eq!(lamp.state(), LampId::Off);
        assert!(lamp.running());
    }

    #[test]
    fn start_at_overrides_the_default() {
        let lamp = Machine::<LampFsm>::new(lamp_states(), Tally::default()).start_at(LampId::On);
        assert_eq!(lamp.state(), LampId::On);
    }

    #[test]
    fn chokepoint_updates_state_exactly_once() {
        let mut lamp = Machine::<LampFsm>::new(lamp_states(), Tally::default());
        lamp.dispatch(|state, cx| state.toggle(cx));
        assert_eq!(lamp.state(), LampId::On);
        assert_eq!(lamp.session().toggles, 1);
    }

    #[test]
    fn unhandled_request_has_no_side_effects() {
        let mut lamp =
            Machine::<LampFsm>::new(lamp_states(), Tally::default()).start_at(LampId::Burnt);
        lamp.dispatch(|state, cx| state.toggle(cx));
        assert_eq!(lamp.state(), LampId::Burnt);
        assert_eq!(lamp.session().toggles, 0);
    }

    #[test]
    fn running_flips_only_at_terminal() {
        let mut lamp = Machine::<LampFsm>::new(lamp_states(), Tally::default());
        lamp.dispatch(|state, cx| state.toggle(cx));
        assert!(lamp.running());
        lamp.dispatch(|state, cx| state.burn_out(cx));
        assert_eq!(lamp.state(), LampId::Burnt);
        assert!(!lamp.running());
    }

    #[test]
    fn self_transition_is_legal() {
        let mut lamp = Machine::<LampFsm>::new(lamp_states(), Tally::default());
        lamp.dispatch(|_state, cx| cx.transition(LampId::Off));
        assert_eq!(lamp.state(), LampId::Off);
        assert!(lamp.running());
    }

    #[test]
    fn machines_in_a_pool_share_one_registry_but_nothing_else() {
        let registry = Arc::new(lamp_states());
        let mut left = Machine::<LampFsm>::with_arc(Arc::clone(&registry), Tally::default());
        let right = Machine::<LampFsm>::with_arc(registry, Tally::default());

        left.dispatch(|state, cx| state.toggle(cx));
        assert_eq!(left.state(), LampId::On);
        assert_eq!(right.state(), LampId::Off);
        assert_eq!(right.session().toggles, 0);
    }

    #[test]
    #[should_panic]
    fn chokepoint_aborts_on_an_unresolvable_id() {
        use crate::testfsm::{RawFsm, RawId, raw_states};

        let mut machine = Machine::<RawFsm>::new(raw_states(), ());
        machine.dispatch(|_state, cx| cx.transition(RawId(9)));
    }

    #[test]
    fn into_session_returns_the_collected_data() {
        let mut lamp = Machine::<LampFsm>::new(lamp_states(), Tally::default());
        lamp.dispatch(|state, cx| state.toggle(cx));
        lamp.dispatch(|state, cx| state.toggle(cx));
        assert_eq!(lamp.into_session().toggles, 2);
    }
}

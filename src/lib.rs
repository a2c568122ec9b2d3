//! # stator
//!
//! Synchronous state-pattern finite state machines with per-machine state
//! registries.
//!
//! A machine kind is an [`Fsm`] definition: a closed identifier enum
//! (declared with [`state_id!`]), a state trait whose methods are the
//! machine's request vocabulary (defaulted to an unhandled-request
//! diagnostic), session data, and start/terminal states. A [`Registry`]
//! owns one state instance per identifier; a [`Machine`] forwards requests
//! to the active state, handing it a [`Cx`], the only capability able to
//! transition the machine or mutate its session.
//!
//! By default every machine owns its registry, so independent machines
//! share no mutable state and run on separate threads without locking.
//! A process-wide [`SharedRegistry`] cache is available as an opt-in for
//! machines whose states are stateless.
//!
//! Two worked machines ship with the crate: an interactive intake
//! [`dialogue`] and a TCP-style connection skeleton in [`tcp`].
//!
//! ## Example
//!
//! ```rust
//! use stator::{Cx, Fsm, Machine, Registry, state_id};
//!
//! state_id! {
//!     enum DoorId {
//!         Shut,
//!         Open,
//!     }
//! }
//!
//! trait DoorState {
//!     fn push(&self, cx: &mut Cx<'_, DoorFsm>) {
//!         cx.unhandled("push");
//!     }
//! }
//!
//! enum DoorFsm {}
//!
//! impl Fsm for DoorFsm {
//!     type Id = DoorId;
//!     type State = dyn DoorState;
//!     type Session = u32; // pushes observed
//!
//!     const START: DoorId = DoorId::Shut;
//!     const TERMINAL: Option<DoorId> = None;
//! }
//!
//! struct Shut;
//! struct Open;
//!
//! impl DoorState for Shut {
//!     fn push(&self, cx: &mut Cx<'_, DoorFsm>) {
//!         *cx.session_mut() += 1;
//!         cx.transition(DoorId::Open);
//!     }
//! }
//!
//! impl DoorState for Open {
//!     fn push(&self, cx: &mut Cx<'_, DoorFsm>) {
//!         *cx.session_mut() += 1;
//!         cx.transition(DoorId::Shut);
//!     }
//! }
//!
//! let registry = Registry::from_fn(|id| -> Box<dyn DoorState> {
//!     match id {
//!         DoorId::Shut => Box::new(Shut),
//!         DoorId::Open => Box::new(Open),
//!     }
//! });
//!
//! let mut door = Machine::<DoorFsm>::new(registry, 0);
//! door.dispatch(|state, cx| state.push(cx));
//! assert_eq!(door.state(), DoorId::Open);
//! assert_eq!(*door.session(), 1);
//! ```

pub mod dialogue;
pub mod tcp;

#[doc(inline)]
pub use stator_core::{
    BuildError, Cx, Fsm, Machine, Registry, RegistryBuilder, SharedRegistry, StateId, state_id,
};

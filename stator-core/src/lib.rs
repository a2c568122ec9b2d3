//! Core dispatch types for stator.
//!
//! A machine kind is described by an [`Fsm`] implementation: a closed
//! [`StateId`] domain, a state trait object, session data, and designated
//! start/terminal states. A [`Registry`] owns one state instance per
//! identifier, a [`Machine`] holds the current state and the session data,
//! and every request is forwarded through [`Machine::dispatch`], which hands
//! the active state a [`Cx`], the only capability that can transition the
//! machine or mutate its session.

mod id;
mod machine;
mod registry;

pub use id::StateId;
pub use machine::{Cx, Fsm, Machine};
pub use registry::{BuildError, Registry, RegistryBuilder, SharedRegistry};

#[cfg(test)]
pub(crate) mod testfsm;

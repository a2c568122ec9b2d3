//! A minimal lamp machine used by the unit tests.

use crate::{Cx, Fsm, Registry};

crate::state_id! {
    pub(crate) enum LampId {
        Off,
        On,
        Burnt,
    }
}

pub(crate) trait LampState: Send + Sync {
    fn toggle(&self, cx: &mut Cx<'_, LampFsm>) {
        cx.unhandled("toggle");
    }

    fn burn_out(&self, cx: &mut Cx<'_, LampFsm>) {
        cx.unhandled("burn_out");
    }
}

#[derive(Debug, Default)]
pub(crate) struct Tally {
    pub(crate) toggles: u32,
}

pub(crate) enum LampFsm {}

impl Fsm for LampFsm {
    type Id = LampId;
    type State = dyn LampState;
    type Session = Tally;

    const START: LampId = LampId::Off;
    const TERMINAL: Option<LampId> = Some(LampId::Burnt);
}

pub(crate) struct Off;
pub(crate) struct On;
pub(crate) struct Burnt;

impl LampState for Off {
    fn toggle(&self, cx: &mut Cx<'_, LampFsm>) {
        cx.session_mut().toggles += 1;
        cx.transition(LampId::On);
    }

    fn burn_out(&self, cx: &mut Cx<'_, LampFsm>) {
        cx.transition(LampId::Burnt);
    }
}

impl LampState for On {
    fn toggle(&self, cx: &mut Cx<'_, LampFsm>) {
        cx.session_mut().toggles += 1;
        cx.transition(LampId::Off);
    }

    fn burn_out(&self, cx: &mut Cx<'_, LampFsm>) {
        cx.transition(LampId::Burnt);
    }
}

// Terminal; ignores every request.
impl LampState for Burnt {}

// An identifier type whose values are not confined to the registry's
// domain, to exercise the fatal lookup path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawId(pub(crate) usize);

impl crate::StateId for RawId {
    const COUNT: usize = 2;
    const ALL: &'static [Self] = &[RawId(0), RawId(1)];

    fn index(self) -> usize {
        self.0
    }
}

pub(crate) enum RawFsm {}

impl Fsm for RawFsm {
    type Id = RawId;
    type State = dyn std::fmt::Debug;
    type Session = ();

    const START: RawId = RawId(0);
    const TERMINAL: Option<RawId> = None;
}

pub(crate) fn raw_states() -> Registry<RawFsm> {
    Registry::from_fn(|id: RawId| -> Box<dyn std::fmt::Debug> { Box::new(id.0) })
}

pub(crate) fn lamp_states() -> Registry<LampFsm> {
    Registry::from_fn(|id| -> Box<dyn LampState> {
        match id {
            LampId::Off => Box::new(Off),
            LampId::On => Box::new(On),
            LampId::Burnt => Box::new(Burnt),
        }
    })
}

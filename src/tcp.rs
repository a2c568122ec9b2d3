//! A TCP-style connection skeleton.
//!
//! The state diagram of a well-known protocol, used here to exercise the
//! dispatch engine with a wider request vocabulary. Only a handful of
//! transitions are implemented; the rest of the states are registered
//! stubs that ignore every request with the unhandled diagnostic. This is
//! deliberately not a protocol implementation: no handshakes, timers,
//! sequence numbers, or wire format.

use std::io::Write;

use stator_core::{Cx, Fsm, Machine, Registry, SharedRegistry};

crate::state_id! {
    /// Connection states, named after the protocol's state diagram.
    pub enum TcpId {
        Closed,
        Listen,
        Established,
        SynSent,
        SynReceived,
        FinWait1,
        FinWait2,
        CloseWait,
        Closing,
        LastAck,
        TimeWait,
    }
}

/// Marker for the connection machine kind.
pub enum TcpFsm {}

impl Fsm for TcpFsm {
    type Id = TcpId;
    type State = dyn TcpState;
    type Session = ConnectionInfo;

    // The skeleton defines no terminal state; a Connection is always
    // running.
    const START: TcpId = TcpId::Closed;
    const TERMINAL: Option<TcpId> = None;
}

/// Request vocabulary of the connection machine.
///
/// Every handler defaults to the unhandled-request diagnostic; most states
/// legitimately ignore most requests.
pub trait TcpState: Send + Sync {
    fn open_active(&self, cx: &mut Cx<'_, TcpFsm>) {
        cx.unhandled("open_active");
    }

    fn open_passive(&self, cx: &mut Cx<'_, TcpFsm>) {
        cx.unhandled("open_passive");
    }

    fn close(&self, cx: &mut Cx<'_, TcpFsm>) {
        cx.unhandled("close");
    }

    fn synchronize(&self, cx: &mut Cx<'_, TcpFsm>) {
        cx.unhandled("synchronize");
    }

    fn acknowledge(&self, cx: &mut Cx<'_, TcpFsm>) {
        cx.unhandled("acknowledge");
    }

    fn send(&self, cx: &mut Cx<'_, TcpFsm>) {
        cx.unhandled("send");
    }

    fn transmit(&self, cx: &mut Cx<'_, TcpFsm>, _out: &mut dyn Write) {
        cx.unhandled("transmit");
    }
}

/// Context-owned connection data.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionInfo {
    server: bool,
}

impl ConnectionInfo {
    pub fn server(&self) -> bool {
        self.server
    }
}

struct Closed;

impl TcpState for Closed {
    // The skeleton jumps straight to the target state; the handshake steps
    // in between are out of scope.
    fn open_active(&self, cx: &mut Cx<'_, TcpFsm>) {
        cx.transition(TcpId::Established);
    }

    fn open_passive(&self, cx: &mut Cx<'_, TcpFsm>) {
        cx.transition(TcpId::Listen);
    }
}

struct Listen;

impl TcpState for Listen {
    fn send(&self, cx: &mut Cx<'_, TcpFsm>) {
        cx.transition(TcpId::Established);
    }
}

struct Established;

impl TcpState for Established {
    fn close(&self, cx: &mut Cx<'_, TcpFsm>) {
        cx.transition(TcpId::Listen);
    }

    fn transmit(&self, _cx: &mut Cx<'_, TcpFsm>, out: &mut dyn Write) {
        if let Err(err) = out.write_all(b"octet stream\n") {
            tracing::error!(%err, "transmit sink failed");
        }
    }
}

// The remaining diagram states are stubs with no overridden handlers and
// no defined transitions.
struct Stub;

impl TcpState for Stub {}

fn connection_states() -> Registry<TcpFsm> {
    Registry::from_fn(|id| -> Box<dyn TcpState> {
        match id {
            TcpId::Closed => Box::new(Closed),
            TcpId::Listen => Box::new(Listen),
            TcpId::Established => Box::new(Established),
            TcpId::SynSent
            | TcpId::SynReceived
            | TcpId::FinWait1
            | TcpId::FinWait2
            | TcpId::CloseWait
            | TcpId::Closing
            | TcpId::LastAck
            | TcpId::TimeWait => Box::new(Stub),
        }
    })
}

static SHARED_STATES: SharedRegistry<TcpFsm> = SharedRegistry::new();

/// The connection context. One public operation per request in the
/// vocabulary, each forwarded verbatim to the active state.
pub struct Connection {
    machine: Machine<TcpFsm>,
}

impl Connection {
    /// Builds a connection with its own private set of state instances.
    pub fn new(server: bool) -> Self {
        Self {
            machine: Machine::new(connection_states(), ConnectionInfo { server }),
        }
    }

    /// Builds a connection over the process-wide state cache (all
    /// connection states are stateless unit structs).
    pub fn with_shared_states(server: bool) -> Self {
        Self {
            machine: Machine::with_shared(
                SHARED_STATES.get_or_init(connection_states),
                ConnectionInfo { server },
            ),
        }
    }

    pub fn open_active(&mut self) {
        self.machine.dispatch(|state, cx| state.open_active(cx));
    }

    pub fn open_passive(&mut self) {
        self.machine.dispatch(|state, cx| state.open_passive(cx));
    }

    pub fn close(&mut self) {
        self.machine.dispatch(|state, cx| state.close(cx));
    }

    pub fn synchronize(&mut self) {
        self.machine.dispatch(|state, cx| state.synchronize(cx));
    }

    pub fn acknowledge(&mut self) {
        self.machine.dispatch(|state, cx| state.acknowledge(cx));
    }

    pub fn send(&mut self) {
        self.machine.dispatch(|state, cx| state.send(cx));
    }

    pub fn transmit(&mut self, out: &mut dyn Write) {
        self.machine.dispatch(|state, cx| state.transmit(cx, out));
    }

    pub fn state(&self) -> TcpId {
        self.machine.state()
    }

    pub fn server(&self) -> bool {
        self.machine.session().server()
    }
}

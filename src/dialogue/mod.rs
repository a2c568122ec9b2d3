//! The intake dialogue: an interactive machine that collects a structured
//! record from a user across states.
//!
//! The driver loop (see `demos/intake.rs`) alternates
//! [`Dialogue::render_prompt`] and [`Dialogue::handle_input`] while
//! [`Dialogue::running`] holds. The machine never owns any I/O: it reads
//! from an injected input source and writes to an injected output sink,
//! both supplied through [`DialogueIo`].

use std::io::{self, BufRead, BufReader, Write};

use stator_core::{Cx, Fsm, Machine, Registry, SharedRegistry};

mod states;

crate::state_id! {
    /// Identifier domain of the intake dialogue.
    pub enum DialogueId {
        Start,
        MainMenu,
        CollectName,
        CollectAddress,
        CollectAge,
        CollectHeight,
        EditName,
        EditAddress,
        EditAge,
        EditHeight,
        ConfirmInfo,
        EditOptions,
        Finished,
    }
}

/// Marker for the intake dialogue machine kind.
pub enum DialogueFsm {}

impl Fsm for DialogueFsm {
    type Id = DialogueId;
    type State = dyn DialogueState;
    type Session = Session;

    const START: DialogueId = DialogueId::Start;
    const TERMINAL: Option<DialogueId> = Some(DialogueId::Finished);
}

/// Request vocabulary of the dialogue machine.
///
/// Both handlers default to the unhandled-request diagnostic, so a state
/// implements only the requests meaningful to it.
pub trait DialogueState: Send + Sync {
    /// Writes this state's prompt to the output sink.
    fn render_prompt(&self, cx: &mut Cx<'_, DialogueFsm>) {
        cx.unhandled("render_prompt");
    }

    /// Reads one input from the input source, stores what it learned in
    /// the session, and usually transitions.
    fn handle_input(&self, cx: &mut Cx<'_, DialogueFsm>) {
        cx.unhandled("handle_input");
    }
}

/// Record collected by the dialogue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patient {
    pub name: String,
    pub address: String,
    pub age: u32,
    pub height: u32,
}

/// Injected input source and output sink (the dialogue's only window on
/// the outside world).
pub struct DialogueIo {
    input: Box<dyn BufRead + Send>,
    output: Box<dyn Write + Send>,
}

impl DialogueIo {
    pub fn new(input: impl BufRead + Send + 'static, output: impl Write + Send + 'static) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Convenience wiring for an interactive session on the terminal.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

/// Context-owned dialogue data: the record being collected plus the
/// injected I/O capabilities. States reach it only through the [`Cx`]
/// handed to them during dispatch.
pub struct Session {
    io: DialogueIo,
    patient: Patient,
}

impl Session {
    fn new(io: DialogueIo) -> Self {
        Self {
            io,
            patient: Patient::default(),
        }
    }

    /// The record collected so far.
    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    /// Reads one line, stripped of its trailing newline. I/O failure is
    /// logged and degrades to an empty line; there is no retry.
    pub(crate) fn read_line(&mut self) -> String {
        let mut line = String::new();
        if let Err(err) = self.io.input.read_line(&mut line) {
            tracing::error!(%err, "input source failed");
        }
        line.truncate(line.trim_end_matches(['\r', '\n']).len());
        line
    }

    /// Reads one line as a number. Malformed input parses as 0; input
    /// validation is deliberately out of scope.
    pub(crate) fn read_number(&mut self) -> u32 {
        self.read_line().trim().parse().unwrap_or(0)
    }

    /// Writes to the output sink. I/O failure is logged and the text is
    /// dropped.
    pub(crate) fn say(&mut self, text: &str) {
        let outcome = self
            .io
            .output
            .write_all(text.as_bytes())
            .and_then(|()| self.io.output.flush());
        if let Err(err) = outcome {
            tracing::error!(%err, "output sink failed");
        }
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.patient.name = name;
    }

    pub(crate) fn set_address(&mut self, address: String) {
        self.patient.address = address;
    }

    pub(crate) fn set_age(&mut self, age: u32) {
        self.patient.age = age;
    }

    pub(crate) fn set_height(&mut self, height: u32) {
        self.patient.height = height;
    }
}

fn dialogue_states() -> Registry<DialogueFsm> {
    Registry::from_fn(|id| -> Box<dyn DialogueState> {
        match id {
            DialogueId::Start => Box::new(states::Start),
            DialogueId::MainMenu => Box::new(states::MainMenu),
            DialogueId::CollectName => Box::new(states::CollectName),
            DialogueId::CollectAddress => Box::new(states::CollectAddress),
            DialogueId::CollectAge => Box::new(states::CollectAge),
            DialogueId::CollectHeight => Box::new(states::CollectHeight),
            DialogueId::EditName => Box::new(states::EditName),
            DialogueId::EditAddress => Box::new(states::EditAddress),
            DialogueId::EditAge => Box::new(states::EditAge),
            DialogueId::EditHeight => Box::new(states::EditHeight),
            DialogueId::ConfirmInfo => Box::new(states::ConfirmInfo),
            DialogueId::EditOptions => Box::new(states::EditOptions),
            DialogueId::Finished => Box::new(states::Finished),
        }
    })
}

static SHARED_STATES: SharedRegistry<DialogueFsm> = SharedRegistry::new();

/// The dialogue context. Forwards the request vocabulary to the active
/// state and owns the collected record.
pub struct Dialogue {
    machine: Machine<DialogueFsm>,
}

impl Dialogue {
    /// Builds a dialogue with its own private set of state instances.
    pub fn new(io: DialogueIo) -> Self {
        Self {
            machine: Machine::new(dialogue_states(), Session::new(io)),
        }
    }

    /// Builds a dialogue over the process-wide state cache.
    ///
    /// Every dialogue built this way dispatches through the same state
    /// instances. Sound here because dialogue states are stateless unit
    /// structs; all per-session data lives in the [`Session`].
    pub fn with_shared_states(io: DialogueIo) -> Self {
        Self {
            machine: Machine::with_shared(SHARED_STATES.get_or_init(dialogue_states), Session::new(io)),
        }
    }

    pub fn render_prompt(&mut self) {
        self.machine.dispatch(|state, cx| state.render_prompt(cx));
    }

    pub fn handle_input(&mut self) {
        self.machine.dispatch(|state, cx| state.handle_input(cx));
    }

    /// `true` until the dialogue reaches [`DialogueId::Finished`].
    pub fn running(&self) -> bool {
        self.machine.running()
    }

    pub fn state(&self) -> DialogueId {
        self.machine.state()
    }

    /// The record collected so far; read-only, for confirmation screens
    /// and final results.
    pub fn patient(&self) -> &Patient {
        self.machine.session().patient()
    }

    /// Consumes the dialogue and returns the collected record.
    pub fn into_patient(self) -> Patient {
        self.machine.into_session().patient
    }
}

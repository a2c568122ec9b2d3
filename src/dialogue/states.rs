//! Concrete dialogue states.
//!
//! Each state is a stateless unit struct; everything it learns goes into
//! the session through the [`Cx`] it is handed. Transitions name the next
//! state by identifier only, so no state depends on another state's type.

use stator_core::Cx;

use super::{DialogueFsm, DialogueId, DialogueState};

const SELECT_HINT: &str = "Type a number according to your selection and press enter\n";

pub(super) struct Start;

impl DialogueState for Start {
    fn render_prompt(&self, cx: &mut Cx<'_, DialogueFsm>) {
        cx.session_mut().say("Welcome\n\nPress enter to start\n");
    }

    fn handle_input(&self, cx: &mut Cx<'_, DialogueFsm>) {
        let _ = cx.session_mut().read_line();
        cx.transition(DialogueId::MainMenu);
    }
}

pub(super) struct MainMenu;

impl DialogueState for MainMenu {
    fn render_prompt(&self, cx: &mut Cx<'_, DialogueFsm>) {
        cx.session_mut()
            .say(&format!("Main Menu\n\n1. Add Patient\n2. Exit\n\n{SELECT_HINT}"));
    }

    fn handle_input(&self, cx: &mut Cx<'_, DialogueFsm>) {
        match cx.session_mut().read_number() {
            1 => cx.transition(DialogueId::CollectName),
            2 => cx.transition(DialogueId::Finished),
            _ => {}
        }
    }
}

pub(super) struct CollectName;

impl DialogueState for CollectName {
    fn render_prompt(&self, cx: &mut Cx<'_, DialogueFsm>) {
        cx.session_mut()
            .say("Add Patient Name\n\nType your name and press enter\n");
    }

    fn handle_input(&self, cx: &mut Cx<'_, DialogueFsm>) {
        let name = cx.session_mut().read_line();
        cx.session_mut().set_name(name);
        cx.transition(DialogueId::CollectAddress);
    }
}

pub(super) struct CollectAddress;

impl DialogueState for CollectAddress {
    fn render_prompt(&self, cx: &mut Cx<'_, DialogueFsm>) {
        cx.session_mut()
            .say("Add Patient Address\n\nType your address and press enter\n");
    }

    fn handle_input(&self, cx: &mut Cx<'_, DialogueFsm>) {
        let address = cx.session_mut().read_line();
        cx.session_mut().set_address(address);
        cx.transition(DialogueId::CollectAge);
    }
}

pub(super) struct CollectAge;

impl DialogueState for CollectAge {
    fn render_prompt(&self, cx: &mut Cx<'_, DialogueFsm>) {
        cx.session_mut()
            .say("Add Patient Age\n\nType your age and press enter\n");
    }

    fn handle_input(&self, cx: &mut Cx<'_, DialogueFsm>) {
        let age = cx.session_mut().read_number();
        cx.session_mut().set_age(age);
        cx.transition(DialogueId::CollectHeight);
    }
}

pub(super) struct CollectHeight;

impl DialogueState for CollectHeight {
    fn render_prompt(&self, cx: &mut Cx<'_, DialogueFsm>) {
        cx.session_mut()
            .say("Add Patient Height\n\nType your height and press enter\n");
    }

    fn handle_input(&self, cx: &mut Cx<'_, DialogueFsm>) {
        let height = cx.session_mut().read_number();
        cx.session_mut().set_height(height);
        cx.transition(DialogueId::ConfirmInfo);
    }
}

pub(super) struct EditName;

impl DialogueState for EditName {
    fn render_prompt(&self, cx: &mut Cx<'_, DialogueFsm>) {
        cx.session_mut()
            .say("Edit Patient Name\n\nType your name and press enter\n");
    }

    fn handle_input(&self, cx: &mut Cx<'_, DialogueFsm>) {
        let name = cx.session_mut().read_line();
        cx.session_mut().set_name(name);
        cx.transition(DialogueId::EditOptions);
    }
}

pub(super) struct EditAddress;

impl DialogueState for EditAddress {
    fn render_prompt(&self, cx: &mut Cx<'_, DialogueFsm>) {
        cx.session_mut()
            .say("Edit Patient Address\n\nType your address and press enter\n");
    }

    fn handle_input(&self, cx: &mut Cx<'_, DialogueFsm>) {
        let address = cx.session_mut().read_line();
        cx.session_mut().set_address(address);
        cx.transition(DialogueId::EditOptions);
    }
}

pub(super) struct EditAge;

impl DialogueState for EditAge {
    fn render_prompt(&self, cx: &mut Cx<'_, DialogueFsm>) {
        cx.session_mut()
            .say("Edit Patient Age\n\nType your age and press enter\n");
    }

    fn handle_input(&self, cx: &mut Cx<'_, DialogueFsm>) {
        let age = cx.session_mut().read_number();
        cx.session_mut().set_age(age);
        cx.transition(DialogueId::EditOptions);
    }
}

pub(super) struct EditHeight;

impl DialogueState for EditHeight {
    fn render_prompt(&self, cx: &mut Cx<'_, DialogueFsm>) {
        cx.session_mut()
            .say("Edit Patient Height\n\nType your height and press enter\n");
    }

    fn handle_input(&self, cx: &mut Cx<'_, DialogueFsm>) {
        let height = cx.session_mut().read_number();
        cx.session_mut().set_height(height);
        cx.transition(DialogueId::EditOptions);
    }
}

pub(super) struct ConfirmInfo;

impl DialogueState for ConfirmInfo {
    fn render_prompt(&self, cx: &mut Cx<'_, DialogueFsm>) {
        let session = cx.session_mut();
        let text = {
            let patient = session.patient();
            format!(
                "Confirm Info is Correct\n\n\
                 Patient Name: {}\n\
                 Patient Address: {}\n\
                 Patient Age: {}\n\
                 Patient Height: {}\n\n\
                 1. Edit Patient Info\n2. Save and Return to Menu\n\n{SELECT_HINT}",
                patient.name, patient.address, patient.age, patient.height,
            )
        };
        session.say(&text);
    }

    fn handle_input(&self, cx: &mut Cx<'_, DialogueFsm>) {
        match cx.session_mut().read_number() {
            1 => cx.transition(DialogueId::EditOptions),
            2 => cx.transition(DialogueId::MainMenu),
            _ => {}
        }
    }
}

pub(super) struct EditOptions;

impl DialogueState for EditOptions {
    fn render_prompt(&self, cx: &mut Cx<'_, DialogueFsm>) {
        cx.session_mut().say(&format!(
            "Edit Patient Info\n\n\
             1. Edit Name\n2. Edit Address\n3. Edit Age\n4. Edit Height\n\
             5. Save and Continue\n\n{SELECT_HINT}"
        ));
    }

    fn handle_input(&self, cx: &mut Cx<'_, DialogueFsm>) {
        match cx.session_mut().read_number() {
            1 => cx.transition(DialogueId::EditName),
            2 => cx.transition(DialogueId::EditAddress),
            3 => cx.transition(DialogueId::EditAge),
            4 => cx.transition(DialogueId::EditHeight),
            5 => cx.transition(DialogueId::ConfirmInfo),
            _ => {}
        }
    }
}

// Terminal. Requests are still dispatched here if the driver keeps going,
// so both handlers are explicit no-ops rather than unhandled diagnostics.
pub(super) struct Finished;

impl DialogueState for Finished {
    fn render_prompt(&self, _cx: &mut Cx<'_, DialogueFsm>) {}

    fn handle_input(&self, _cx: &mut Cx<'_, DialogueFsm>) {}
}

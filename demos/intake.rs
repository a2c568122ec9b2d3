//! Interactive patient-intake dialogue on stdin/stdout.
//!
//! The driver loop here is the external collaborator: it keeps issuing the
//! render/handle pair until the dialogue reaches its terminal state, then
//! reads the collected record back out.

use stator::dialogue::{Dialogue, DialogueIo};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut dialogue = Dialogue::new(DialogueIo::stdio());
    while dialogue.running() {
        dialogue.render_prompt();
        dialogue.handle_input();
    }

    println!("Last record entered: {:?}", dialogue.into_patient());
}

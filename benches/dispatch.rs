use std::io::{self, Cursor};

use criterion::{Criterion, criterion_group, criterion_main};

use stator::dialogue::{Dialogue, DialogueIo};
use stator::tcp::Connection;

const INTAKE_SCRIPT: &[u8] = b"\n1\nAlice\n1 Main St\n30\n170\n2\n2";

fn benchmark_dialogue_intake(c: &mut Criterion) {
    c.bench_function("dialogue_full_intake", |b| {
        b.iter(|| {
            let mut dialogue =
                Dialogue::new(DialogueIo::new(Cursor::new(INTAKE_SCRIPT), io::sink()));
            while dialogue.running() {
                dialogue.render_prompt();
                dialogue.handle_input();
            }
            dialogue.into_patient()
        })
    });
}

fn benchmark_tcp_transitions(c: &mut Criterion) {
    c.bench_function("tcp_transition_cycle_1000", |b| {
        b.iter(|| {
            let mut conn = Connection::new(false);
            conn.open_active();
            for _ in 0..1000 {
                conn.close();
                conn.send();
            }
            conn.state()
        })
    });
}

criterion_group!(benches, benchmark_dialogue_intake, benchmark_tcp_transitions);
criterion_main!(benches);

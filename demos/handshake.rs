//! Walks the connection skeleton through its implemented transitions.
//!
//! Run with `RUST_LOG=warn` to see the unhandled-request diagnostics the
//! stub states produce.

use std::io;

use stator::tcp::Connection;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut client = Connection::new(false);
    client.open_active();
    client.transmit(&mut io::stdout());
    client.close();
    client.send();
    println!("client ended in {:?}", client.state());

    let mut server = Connection::new(true);
    server.open_passive();
    server.acknowledge(); // not meaningful in Listen; reported, ignored
    server.send();
    println!("server ended in {:?}", server.state());
}

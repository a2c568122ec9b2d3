use stator::tcp::{Connection, TcpId};

#[test]
fn active_open_path() {
    let mut conn = Connection::new(false);
    assert_eq!(conn.state(), TcpId::Closed);

    conn.open_active();
    assert_eq!(conn.state(), TcpId::Established);

    conn.close();
    assert_eq!(conn.state(), TcpId::Listen);

    conn.send();
    assert_eq!(conn.state(), TcpId::Established);
}

#[test]
fn passive_open_path() {
    let mut conn = Connection::new(true);
    conn.open_passive();
    assert_eq!(conn.state(), TcpId::Listen);
    assert!(conn.server());
}

#[test]
fn unhandled_requests_leave_the_connection_untouched() {
    let mut conn = Connection::new(false);

    // None of these are meaningful in Closed.
    conn.synchronize();
    conn.acknowledge();
    conn.send();
    conn.close();
    assert_eq!(conn.state(), TcpId::Closed);
    assert!(!conn.server());
}

#[test]
fn transmit_writes_to_the_injected_sink_only_when_established() {
    let mut conn = Connection::new(false);
    let mut wire = Vec::new();

    conn.transmit(&mut wire);
    assert!(wire.is_empty());

    conn.open_active();
    conn.transmit(&mut wire);
    assert_eq!(wire, b"octet stream\n");
}

#[test]
fn stub_states_define_no_transitions() {
    // Listen implements only `send`; everything else is ignored.
    let mut conn = Connection::new(true);
    conn.open_passive();
    conn.open_active();
    conn.synchronize();
    conn.acknowledge();
    assert_eq!(conn.state(), TcpId::Listen);
}

#[test]
fn shared_state_cache_matches_owned_behavior() {
    let mut conn = Connection::with_shared_states(true);
    conn.open_passive();
    conn.send();
    assert_eq!(conn.state(), TcpId::Established);
}

use std::io::Read;
use std::net::TcpListener;
use std::time::Duration;

use nfcgate::{DoorState, Notifier, NotifierConfig};

fn notifier_for(endpoint: String) -> Notifier {
    Notifier::new(&NotifierConfig {
        endpoint,
        connect_timeout: Some(Duration::from_millis(500)),
    })
}

#[test]
fn announcement_connects_and_sends_nothing() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let notifier = notifier_for(listener.local_addr()?.to_string());

    for state in [DoorState::Open, DoorState::Closed] {
        notifier.announce(state);
        let (mut stream, _) = listener.accept()?;
        stream.set_read_timeout(Some(Duration::from_secs(2)))?;
        let mut received = Vec::new();
        stream.read_to_end(&mut received)?;
        assert!(received.is_empty(), "{state}: got {received:?}");
    }
    Ok(())
}

#[test]
fn refused_endpoint_is_absorbed() -> anyhow::Result<()> {
    let endpoint = {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?.to_string()
    };
    notifier_for(endpoint).announce(DoorState::Open);
    Ok(())
}

#[test]
fn unresolvable_endpoint_is_absorbed() {
    notifier_for("no port here".into()).announce(DoorState::Closed);
}

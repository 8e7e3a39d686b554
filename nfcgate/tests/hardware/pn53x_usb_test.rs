#![cfg(feature = "usb")]

#[path = "common.rs"]
mod common;

use nfcgate::{PollOutcome, PollSettings, ProbeTable, Result, extract};

// Requires a PN53x USB reader. Marked `#[ignore]` so CI does not attempt
// to run it. Run manually with:
//
// cargo test -p nfcgate --test hardware --features usb -- --ignored --nocapture
//

#[test]
#[ignore]
fn poll_once_on_attached_reader() -> Result<()> {
    let outcome = common::with_session(|session| {
        println!("reader: {} ({})", session.device().connstring(), session.device().chip());
        Ok(session.poll(&ProbeTable::default(), PollSettings::new(2, 2)?))
    })?;

    match outcome {
        Some(PollOutcome::Found(target)) => {
            println!("{}: {:?}", target.modulation(), extract(&target));
        }
        Some(PollOutcome::NotFound) => println!("no card in range"),
        Some(PollOutcome::Error(e)) => return Err(e),
        None => println!("no reader attached"),
    }
    Ok(())
}

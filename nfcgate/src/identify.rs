// nfcgate/src/identify.rs

use crate::target::Target;
use crate::types::Uid;

/// The identifier of a target, for the families that have a decodable one.
///
/// Only ISO/IEC 14443-A targets are identified. The other families answer
/// with data this crate does not turn into an identifier.
pub fn identify(target: &Target) -> Option<&Uid> {
    match target {
        Target::Iso14443a(a) => Some(&a.uid),
        Target::Iso14443b(_) => None,
        Target::Felica212(_) | Target::Felica424(_) => None,
        Target::Jewel(_) => None,
    }
}

/// Output line for a target: lowercase hex identifier, newline terminated.
pub fn extract(target: &Target) -> Option<String> {
    identify(target).map(|uid| format!("{}\n", uid.to_hex()))
}

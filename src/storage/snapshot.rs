use crate::models::Record;
use serde::{Deserialize, Serialize};

/// Snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized state of a whole address book.
///
/// Contacts are an ordered list so insertion order survives a round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    pub version: u32,
    pub contacts: Vec<Record>,
}

impl Snapshot {
    /// Create a snapshot of the current format version.
    pub fn new(contacts: Vec<Record>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            contacts,
        }
    }
}

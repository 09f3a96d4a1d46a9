use crate::identity::EntityIdentity;
use crate::topk::Ranked;
use serde::Serialize;

/// One spatial-relation check from the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub function: String,
    pub part: String,
    pub check: String,
    pub outer: EntityIdentity,
    pub inner: EntityIdentity,
    pub duration_ns: u64,
    pub result: bool,
}

impl Ranked for Event {
    type Key = u64;

    fn rank_key(&self) -> u64 {
        self.duration_ns
    }
}

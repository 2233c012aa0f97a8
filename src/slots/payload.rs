//! Serialized forms the synchronizer derives for external callers

use serde::{Deserialize, Serialize};

/// One non-empty slot, in ascending index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotEntry {
    pub index: usize,
    pub value: String,
}

/// Request body for the external generation endpoint. This crate only
/// builds the body; the network call belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub template: String,
    pub entries: Vec<SlotEntry>,
}

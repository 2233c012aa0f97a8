mod payload;
mod sync;

pub use payload::{GenerateRequest, SlotEntry};
pub use sync::{SlotDef, SlotSync};

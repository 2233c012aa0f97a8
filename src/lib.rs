pub mod guard;
pub mod query;
pub mod session;
pub mod share;
pub mod slots;

pub use guard::{AuthState, FavoriteGuard, FavoriteState, GuardDecision};
pub use query::{Location, QueryParams};
pub use session::{EditorSession, Template};
pub use share::{
    CollectibleRef, ShareError, SharePayload, TokenError, MAX_ENCODED_LEN, SHARE_VERSION,
};
pub use slots::{GenerateRequest, SlotDef, SlotEntry, SlotSync};

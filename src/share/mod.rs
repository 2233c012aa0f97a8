mod link;
mod token;

pub use link::{ShareError, SharePayload, MAX_ENCODED_LEN, SHARE_VERSION};
pub use token::{CollectibleRef, TokenError};

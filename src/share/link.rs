//! Base64url share-link payload codec
//!
//! Shareable state rides in a deep-link start parameter whose charset the
//! host restricts to `[A-Za-z0-9_-]` and whose length it caps. The payload
//! is versioned JSON, base64url-encoded without padding (`=` is outside
//! the allowed charset).

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::query::{Location, QueryParams};

/// Highest payload version this build understands.
pub const SHARE_VERSION: u8 = 1;

/// Host cap on the encoded start-parameter length.
pub const MAX_ENCODED_LEN: usize = 512;

/// Failure to encode or decode a share link.
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    /// Encoded form exceeds the start-parameter cap. Raised on encode as
    /// well, so the share affordance can be disabled instead of minting a
    /// link the host would truncate.
    #[error("encoded share payload is {0} chars, over the deep-link limit")]
    PayloadTooLarge(usize),

    /// Token is not valid unpadded base64url.
    #[error("share token is not valid base64url: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    /// Decoded bytes are not the expected JSON document.
    #[error("share payload is malformed: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// Payload was produced by a newer format revision.
    #[error("unsupported share payload version {0}")]
    UnsupportedVersion(u8),
}

/// Versioned state payload carried inside a share link: the route the link
/// lands on plus the query parameters to install there. Params serialize
/// with sorted keys, so equal state always encodes to the identical token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    /// Payload format version.
    pub v: u8,
    /// Route the link lands on.
    pub route: String,
    /// Query parameters to install at that route.
    pub params: QueryParams,
}

impl SharePayload {
    pub fn new(route: impl Into<String>, params: QueryParams) -> Self {
        Self {
            v: SHARE_VERSION,
            route: route.into(),
            params,
        }
    }

    /// Snapshot the current location as a shareable payload.
    pub fn capture(location: &Location) -> Self {
        Self::new(location.path(), location.query().clone())
    }

    /// Install this payload into `location`. Applying a share link is real
    /// navigation: it pushes a history entry rather than replacing one.
    pub fn apply(&self, location: &mut Location) {
        location.push(self.route.clone(), self.params.clone());
    }

    /// Encode for embedding in a deep-link start parameter.
    pub fn encode(&self) -> Result<String, ShareError> {
        let json = serde_json::to_vec(self)?;
        let token = URL_SAFE_NO_PAD.encode(json);
        if token.len() > MAX_ENCODED_LEN {
            return Err(ShareError::PayloadTooLarge(token.len()));
        }
        Ok(token)
    }

    /// Decode a start parameter back into a payload.
    pub fn decode(token: &str) -> Result<Self, ShareError> {
        if token.len() > MAX_ENCODED_LEN {
            return Err(ShareError::PayloadTooLarge(token.len()));
        }
        let bytes = URL_SAFE_NO_PAD.decode(token)?;
        let payload: Self = serde_json::from_slice(&bytes)?;
        if payload.v > SHARE_VERSION {
            return Err(ShareError::UnsupportedVersion(payload.v));
        }
        Ok(payload)
    }
}

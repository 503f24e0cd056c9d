//! Admin capability derivation.
//!
//! A room's admin token is `base64(HMAC-SHA256(server_secret, room_id))`.
//! Nothing is stored: anyone holding the server secret can recompute the
//! token for any room, and a token stays valid for the lifetime of the key.

use std::{fmt, sync::Arc};

use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::value_object::{AdminToken, RoomId};

type HmacSha256 = Hmac<Sha256>;

/// Derives admin tokens from the server-wide secret.
#[derive(Clone)]
pub struct AdminTokenIssuer {
    key: Arc<[u8]>,
}

impl AdminTokenIssuer {
    pub fn new(key: impl AsRef<[u8]>) -> Self {
        Self {
            key: Arc::from(key.as_ref()),
        }
    }

    /// Compute the admin token for `room_id`.
    pub fn issue(&self, room_id: &RoomId) -> AdminToken {
        let Ok(mut mac) = HmacSha256::new_from_slice(&self.key) else {
            unreachable!("HMAC-SHA256 accepts keys of any length");
        };
        mac.update(room_id.as_str().as_bytes());
        AdminToken::new(STANDARD.encode(mac.finalize().into_bytes()))
    }
}

impl fmt::Debug for AdminTokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminTokenIssuer")
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Opaque public identifiers
///
/// Internal numeric ids never leave the service in raw form. Every id is
/// permuted with a salted Feistel network, tagged with a short keyed checksum
/// bound to the id kind, and rendered as URL-safe base64.
use crate::error::{StratusError, StratusResult};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use sha2::{Digest, Sha256};

const ROUNDS: u8 = 4;
const CHECK_LEN: usize = 2;
const ENCODED_LEN: usize = 8 + CHECK_LEN;

/// Kind of object an identifier refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Share,
    User,
    File,
    Folder,
    Tag,
    Policy,
}

impl IdKind {
    fn tag(self) -> u8 {
        match self {
            IdKind::Share => 0,
            IdKind::User => 1,
            IdKind::File => 2,
            IdKind::Folder => 3,
            IdKind::Tag => 4,
            IdKind::Policy => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IdKind::Share => "share",
            IdKind::User => "user",
            IdKind::File => "file",
            IdKind::Folder => "folder",
            IdKind::Tag => "tag",
            IdKind::Policy => "policy",
        }
    }
}

/// Maps internal ids to public strings and back
pub trait IdentifierEncoder: Send + Sync {
    fn encode(&self, id: u64, kind: IdKind) -> String;

    fn decode(&self, raw: &str, kind: IdKind) -> StratusResult<u64>;
}

/// Salted, reversible identifier encoder
#[derive(Clone)]
pub struct HashIdEncoder {
    salt: Vec<u8>,
}

impl HashIdEncoder {
    pub fn new(salt: impl Into<String>) -> Self {
        Self {
            salt: salt.into().into_bytes(),
        }
    }

    fn round_key(&self, kind: IdKind, round: u8, half: u32) -> u32 {
        let mut hasher = Sha256::new();
        hasher.update(&self.salt);
        hasher.update([kind.tag(), round]);
        hasher.update(half.to_be_bytes());
        let digest = hasher.finalize();
        u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
    }

    fn check_tag(&self, kind: IdKind, permuted: &[u8; 8]) -> [u8; CHECK_LEN] {
        let mut hasher = Sha256::new();
        hasher.update(&self.salt);
        hasher.update(b"check");
        hasher.update([kind.tag()]);
        hasher.update(permuted);
        let digest = hasher.finalize();
        [digest[0], digest[1]]
    }

    fn permute(&self, id: u64, kind: IdKind) -> u64 {
        let (mut left, mut right) = ((id >> 32) as u32, id as u32);
        for round in 0..ROUNDS {
            let next = left ^ self.round_key(kind, round, right);
            left = right;
            right = next;
        }
        (u64::from(left) << 32) | u64::from(right)
    }

    fn unpermute(&self, value: u64, kind: IdKind) -> u64 {
        let (mut left, mut right) = ((value >> 32) as u32, value as u32);
        for round in (0..ROUNDS).rev() {
            let prev_left = right ^ self.round_key(kind, round, left);
            right = left;
            left = prev_left;
        }
        (u64::from(left) << 32) | u64::from(right)
    }
}

impl IdentifierEncoder for HashIdEncoder {
    fn encode(&self, id: u64, kind: IdKind) -> String {
        let permuted = self.permute(id, kind).to_be_bytes();
        let mut raw = [0u8; ENCODED_LEN];
        raw[..8].copy_from_slice(&permuted);
        raw[8..].copy_from_slice(&self.check_tag(kind, &permuted));
        URL_SAFE_NO_PAD.encode(raw)
    }

    fn decode(&self, raw: &str, kind: IdKind) -> StratusResult<u64> {
        let bytes = URL_SAFE_NO_PAD
            .decode(raw)
            .map_err(|_| StratusError::InvalidId(format!("malformed {} id", kind.as_str())))?;
        if bytes.len() != ENCODED_LEN {
            return Err(StratusError::InvalidId(format!(
                "malformed {} id",
                kind.as_str()
            )));
        }

        let mut permuted = [0u8; 8];
        permuted.copy_from_slice(&bytes[..8]);
        if bytes[8..] != self.check_tag(kind, &permuted) {
            return Err(StratusError::InvalidId(format!(
                "not a {} id",
                kind.as_str()
            )));
        }

        Ok(self.unpermute(u64::from_be_bytes(permuted), kind))
    }
}

/// Account records
use super::{Group, Policy, StoragePack};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A loaded account with its relations resolved
///
/// Policy and group are held by value: an account whose relations could not
/// be loaded is rejected by the loader instead of reaching the views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub nick: String,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub avatar: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub score: i32,
    /// Used storage in bytes
    #[serde(default)]
    pub storage: u64,
    #[serde(default)]
    pub options: UserOptions,
    pub policy: Policy,
    pub group: Group,
    #[serde(default)]
    pub packs: Vec<StoragePack>,
}

/// Per-user preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserOptions {
    pub preferred_theme: String,
}

impl User {
    /// Add-on storage currently available to the account
    pub fn available_pack_size(&self) -> u64 {
        self.available_pack_size_at(Utc::now())
    }

    /// Add-on storage available at `now`, ignoring expired packs
    pub fn available_pack_size_at(&self, now: DateTime<Utc>) -> u64 {
        self.packs
            .iter()
            .filter(|pack| pack.is_valid_at(now))
            .fold(0u64, |total, pack| total.saturating_add(pack.size))
    }
}

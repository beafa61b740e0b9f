/// Access group records
use serde::{Deserialize, Serialize};

/// Named bundle of feature entitlements applied to an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: u64,
    pub name: String,
    /// Base storage quota in bytes
    pub max_storage: u64,
    pub share_enabled: bool,
    #[serde(default)]
    pub options: GroupOptions,
}

/// Optional group capabilities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupOptions {
    /// Offline download through aria2
    pub aria2: bool,
    pub archive_download: bool,
    pub share_free: bool,
    pub share_download: bool,
    /// Server-side compression tasks
    pub archive_task: bool,
}

/// Purchased or granted add-on storage
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoragePack {
    pub id: u64,
    pub user_id: u64,
    pub name: String,
    /// Capacity in bytes
    pub size: u64,
    pub active_time: DateTime<Utc>,
    pub expired_time: DateTime<Utc>,
}

impl StoragePack {
    /// Whether the pack still counts towards the quota at `now`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expired_time > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_pack_validity() {
        let now = Utc::now();
        let pack = StoragePack {
            id: 1,
            user_id: 1,
            name: "1GB".to_string(),
            size: 1 << 30,
            active_time: now - Duration::days(1),
            expired_time: now + Duration::days(30),
        };

        assert!(pack.is_valid_at(now));
        assert!(!pack.is_valid_at(now + Duration::days(30)));
        assert!(!pack.is_valid_at(now + Duration::days(31)));
    }
}

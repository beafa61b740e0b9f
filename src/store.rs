/// Record source for the HTTP surface
///
/// Stands in for the persistence layer: hands out fully loaded accounts and
/// their tags. The in-memory implementation is seeded from JSON.
use crate::{
    error::{StratusError, StratusResult},
    models::{Tag, User},
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::RwLock;

/// Loads accounts and tags by id
pub trait UserStore: Send + Sync {
    /// Fetch an account with its policy, group and packs resolved
    fn get_user(&self, id: u64) -> StratusResult<Option<User>>;

    /// Tags owned by `uid`, ordered by id
    fn tags_by_uid(&self, uid: u64) -> StratusResult<Vec<Tag>>;
}

/// Seed file layout
#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Default)]
struct Tables {
    users: BTreeMap<u64, User>,
    tags: BTreeMap<u64, Tag>,
}

/// In-memory store
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let store = Self::new();
        {
            let mut tables = store.tables.write().unwrap_or_else(|e| e.into_inner());
            for user in seed.users {
                tables.users.insert(user.id, user);
            }
            for tag in seed.tags {
                tables.tags.insert(tag.id, tag);
            }
        }
        store
    }

    /// Load a seed file of `{ "users": [...], "tags": [...] }`
    pub fn from_json_file(path: &Path) -> StratusResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let seed: SeedData = serde_json::from_str(&raw)?;
        tracing::info!(
            "Loaded {} user(s) and {} tag(s) from {}",
            seed.users.len(),
            seed.tags.len(),
            path.display()
        );
        Ok(Self::from_seed(seed))
    }

    pub fn insert_user(&self, user: User) -> StratusResult<()> {
        self.write()?.users.insert(user.id, user);
        Ok(())
    }

    pub fn insert_tag(&self, tag: Tag) -> StratusResult<()> {
        self.write()?.tags.insert(tag.id, tag);
        Ok(())
    }

    fn read(&self) -> StratusResult<std::sync::RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StratusError::Store("store lock poisoned".to_string()))
    }

    fn write(&self) -> StratusResult<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StratusError::Store("store lock poisoned".to_string()))
    }
}

impl UserStore for MemoryStore {
    fn get_user(&self, id: u64) -> StratusResult<Option<User>> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    fn tags_by_uid(&self, uid: u64) -> StratusResult<Vec<Tag>> {
        Ok(self
            .read()?
            .tags
            .values()
            .filter(|tag| tag.user_id == uid)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SEED: &str = r#"{
        "users": [{
            "id": 1,
            "email": "alice@example.com",
            "nick": "alice",
            "created_at": "2024-01-01T00:00:00Z",
            "storage": 500,
            "policy": { "id": 1, "name": "Default", "type": "local", "max_size": 10485760 },
            "group": { "id": 2, "name": "User", "max_storage": 1000, "share_enabled": true }
        }],
        "tags": [
            { "id": 9, "user_id": 1, "name": "Videos", "type": 1, "expression": "*.mp4" },
            { "id": 3, "user_id": 1, "name": "Work" },
            { "id": 4, "user_id": 2, "name": "Other" }
        ]
    }"#;

    #[test]
    fn test_load_seed_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SEED.as_bytes()).unwrap();

        let store = MemoryStore::from_json_file(file.path()).unwrap();
        let user = store.get_user(1).unwrap().unwrap();
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.group.max_storage, 1000);
        assert!(store.get_user(2).unwrap().is_none());
    }

    #[test]
    fn test_tags_filtered_and_ordered() {
        let seed: SeedData = serde_json::from_str(SEED).unwrap();
        let store = MemoryStore::from_seed(seed);

        let ids: Vec<u64> = store.tags_by_uid(1).unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 9]);
        assert!(store.tags_by_uid(42).unwrap().is_empty());
    }

    #[test]
    fn test_missing_seed_file() {
        let result = MemoryStore::from_json_file(Path::new("/nonexistent/seed.json"));
        assert!(matches!(result, Err(StratusError::Io(_))));
    }

    #[test]
    fn test_insert_tag() {
        let store = MemoryStore::new();
        store
            .insert_tag(Tag {
                id: 1,
                user_id: 5,
                name: "Docs".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(store.tags_by_uid(5).unwrap().len(), 1);
    }
}

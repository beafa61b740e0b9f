/// Storage quota summary payload
use super::Response;
use crate::models::User;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StorageView {
    pub used: u64,
    pub free: u64,
    pub total: u64,
}

/// Used, free and total bytes for an account
///
/// An account can end up over quota once add-on packs expire. `free` is
/// clamped to zero in that case while `total` keeps its nominal value.
pub fn build_user_storage(user: &User) -> StorageView {
    let total = user
        .group
        .max_storage
        .saturating_add(user.available_pack_size());

    StorageView {
        used: user.storage,
        free: total.saturating_sub(user.storage),
        total,
    }
}

pub fn build_user_storage_response(user: &User) -> Response<StorageView> {
    Response::success(build_user_storage(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Group, Policy, StoragePack, UserOptions};
    use chrono::{Duration, Utc};

    fn account(used: u64, max_storage: u64, packs: &[(u64, i64)]) -> User {
        let now = Utc::now();
        User {
            id: 1,
            email: "alice@example.com".to_string(),
            nick: "alice".to_string(),
            status: 0,
            avatar: String::new(),
            created_at: now,
            score: 0,
            storage: used,
            options: UserOptions::default(),
            policy: Policy::default(),
            group: Group {
                max_storage,
                ..Default::default()
            },
            packs: packs
                .iter()
                .enumerate()
                .map(|(i, (size, days))| StoragePack {
                    id: i as u64 + 1,
                    user_id: 1,
                    name: "pack".to_string(),
                    size: *size,
                    active_time: now - Duration::days(1),
                    expired_time: now + Duration::days(*days),
                })
                .collect(),
        }
    }

    #[test]
    fn test_group_quota_plus_packs() {
        let view = build_user_storage(&account(500, 1000, &[(200, 30)]));
        assert_eq!(
            view,
            StorageView {
                used: 500,
                free: 700,
                total: 1200
            }
        );
    }

    #[test]
    fn test_over_quota_clamps_free_only() {
        let view = build_user_storage(&account(1500, 1000, &[]));
        assert_eq!(
            view,
            StorageView {
                used: 1500,
                free: 0,
                total: 1000
            }
        );
    }

    #[test]
    fn test_expired_pack_leaves_account_over_quota() {
        let view = build_user_storage(&account(1100, 1000, &[(500, -2)]));
        assert_eq!(view.total, 1000);
        assert_eq!(view.free, 0);
        assert_eq!(view.used, 1100);
    }

    #[test]
    fn test_total_saturates_at_max() {
        let view = build_user_storage(&account(50, u64::MAX - 10, &[(100, 30)]));
        assert_eq!(view.total, u64::MAX);
        assert_eq!(view.used, 50);
        assert_eq!(view.free, u64::MAX - 50);
    }

    #[test]
    fn test_exactly_full() {
        let view = build_user_storage(&account(1000, 1000, &[]));
        assert_eq!(view.free, 0);
        assert_eq!(view.total, 1000);
    }

    #[test]
    fn test_free_matches_clamp_rule() {
        for (used, quota) in [(0, 0), (0, 10), (10, 0), (7, 7), (3, 9), (9, 3)] {
            let view = build_user_storage(&account(used, quota, &[]));
            let expected = if quota >= used { quota - used } else { 0 };
            assert_eq!(view.free, expected);
        }
    }

    #[test]
    fn test_storage_response_json() {
        let value =
            serde_json::to_value(build_user_storage_response(&account(500, 1000, &[(200, 30)])))
                .unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "code": 0,
                "data": { "used": 500, "free": 700, "total": 1200 },
                "msg": ""
            })
        );
    }
}

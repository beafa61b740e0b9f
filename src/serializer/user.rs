/// Profile payload
use super::{build_tag_res, Response, TagView};
use crate::{
    hashid::IdentifierEncoder,
    models::{Group, Policy, Tag, User},
    store::UserStore,
};
use serde::Serialize;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserView {
    pub id: u64,
    #[serde(rename = "user_name")]
    pub email: String,
    pub nickname: String,
    pub status: i32,
    pub avatar: String,
    /// Unix seconds
    pub created_at: i64,
    pub preferred_theme: String,
    pub score: i32,
    pub policy: PolicyView,
    pub group: GroupView,
    pub tags: Vec<TagView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyView {
    pub save_type: String,
    pub max_size: String,
    pub allowed_type: Vec<String>,
    #[serde(rename = "upUrl")]
    pub upload_url: String,
    #[serde(rename = "allowSource")]
    pub allow_get_source: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
    pub id: u64,
    pub name: String,
    pub allow_share: bool,
    pub allow_remote_download: bool,
    pub allow_archive_download: bool,
    #[serde(rename = "shareFree")]
    pub share_free_enabled: bool,
    pub share_download: bool,
    #[serde(rename = "compress")]
    pub compress_enabled: bool,
}

/// Human-readable size limit, e.g. `10.00mb`
pub fn format_max_size(bytes: u64) -> String {
    format!("{:.2}mb", bytes as f64 / BYTES_PER_MB)
}

fn build_policy(policy: &Policy) -> PolicyView {
    PolicyView {
        save_type: policy.policy_type.as_str().to_string(),
        max_size: format_max_size(policy.max_size),
        allowed_type: policy.options.file_type.clone(),
        upload_url: policy.upload_url(),
        allow_get_source: policy.is_origin_link_enable,
    }
}

fn build_group(group: &Group) -> GroupView {
    GroupView {
        id: group.id,
        name: group.name.clone(),
        allow_share: group.share_enabled,
        allow_remote_download: group.options.aria2,
        allow_archive_download: group.options.archive_download,
        share_free_enabled: group.options.share_free,
        share_download: group.options.share_download,
        compress_enabled: group.options.archive_task,
    }
}

/// Assemble the full profile from an account and its tags
pub fn build_user(user: &User, tags: &[Tag], hashid: &dyn IdentifierEncoder) -> UserView {
    UserView {
        id: user.id,
        email: user.email.clone(),
        nickname: user.nick.clone(),
        status: user.status,
        avatar: user.avatar.clone(),
        created_at: user.created_at.timestamp(),
        preferred_theme: user.options.preferred_theme.clone(),
        score: user.score,
        policy: build_policy(&user.policy),
        group: build_group(&user.group),
        tags: build_tag_res(tags, hashid),
    }
}

/// Profile with tags fetched from `store`
///
/// A failed tag lookup is not fatal; the profile is served without tags.
pub fn load_user_view(
    user: &User,
    store: &dyn UserStore,
    hashid: &dyn IdentifierEncoder,
) -> UserView {
    let tags = store.tags_by_uid(user.id).unwrap_or_else(|e| {
        tracing::warn!("Failed to load tags for user {}: {}", user.id, e);
        Vec::new()
    });
    tracing::debug!("Building profile for user {} with {} tag(s)", user.id, tags.len());

    build_user(user, &tags, hashid)
}

pub fn build_user_response(
    user: &User,
    store: &dyn UserStore,
    hashid: &dyn IdentifierEncoder,
) -> Response<UserView> {
    Response::success(load_user_view(user, store, hashid))
}

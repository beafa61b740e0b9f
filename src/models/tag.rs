/// File tag records
use serde::{Deserialize, Serialize};

/// Tag assigned by hand
pub const TAG_TYPE_PLAIN: i32 = 0;

/// A user's tag; any non-plain type is a smart tag driven by `expression`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub user_id: u64,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(rename = "type", default)]
    pub tag_type: i32,
    #[serde(default)]
    pub expression: String,
}

impl Tag {
    pub fn is_smart(&self) -> bool {
        self.tag_type != TAG_TYPE_PLAIN
    }
}

/// Tag list payload
use crate::{
    hashid::{IdKind, IdentifierEncoder},
    models::Tag,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagView {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    #[serde(rename = "type")]
    pub tag_type: i32,
    pub expression: String,
}

/// Project tags in order; only smart tags expose their expression
pub fn build_tag_res(tags: &[Tag], hashid: &dyn IdentifierEncoder) -> Vec<TagView> {
    tags.iter()
        .map(|tag| TagView {
            id: hashid.encode(tag.id, IdKind::Tag),
            name: tag.name.clone(),
            icon: tag.icon.clone(),
            color: tag.color.clone(),
            tag_type: tag.tag_type,
            expression: if tag.is_smart() {
                tag.expression.clone()
            } else {
                String::new()
            },
        })
        .collect()
}

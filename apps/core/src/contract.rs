use serde::{Deserialize, Serialize};

use crate::action_executor::link_target;
use crate::model::{ItemId, ItemKind, MediaKind, ResultItem, StatusColor};
use crate::state::PaletteEvent;
use crate::view::PaletteView;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResultItemDto {
    pub id: ItemId,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_color: Option<StatusColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<MediaKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemRequest {
    pub item_id: ItemId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CopyRequest {
    pub item_id: ItemId,
    pub now_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CopyResponse {
    pub copied: bool,
    pub view: PaletteView,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenResponse {
    pub requested: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "payload")]
pub enum PaletteRequest {
    Snapshot,
    Event(PaletteEvent),
    CopyLink(CopyRequest),
    Open(ItemRequest),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "payload")]
pub enum PaletteResponse {
    View(PaletteView),
    CopyLink(CopyResponse),
    Open(OpenResponse),
}

impl From<&ResultItem> for ResultItemDto {
    fn from(value: &ResultItem) -> Self {
        let mut dto = Self {
            id: value.id,
            kind: value.kind.type_tag().to_string(),
            name: value.name.clone(),
            details: value.details.clone(),
            subtitle: None,
            status: None,
            status_color: None,
            avatar: None,
            icon: None,
            file_path: None,
            file_type: None,
            link: link_target(value),
        };

        match &value.kind {
            ItemKind::Person {
                status,
                status_color,
                avatar,
            } => {
                dto.status = Some(status.clone());
                dto.status_color = Some(*status_color);
                dto.avatar = Some(avatar.clone());
            }
            ItemKind::File(meta) | ItemKind::Folder(meta) | ItemKind::Unknown { meta, .. } => {
                dto.icon = Some(meta.icon.clone());
                dto.file_path = meta.path.clone();
                dto.file_type = Some(meta.media_kind);
                dto.subtitle = meta.subtitle.clone();
            }
            ItemKind::Chat { icon } | ItemKind::List { icon } => {
                dto.icon = Some(icon.clone());
            }
        }

        dto
    }
}

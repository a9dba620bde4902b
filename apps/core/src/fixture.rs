use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::{FileMeta, ItemId, ItemKind, MediaKind, ResultItem, StatusColor};

#[derive(Debug)]
pub enum FixtureError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, message: String },
    DuplicateId(ItemId),
}

impl Display for FixtureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read fixture {}: {source}", path.display())
            }
            Self::Parse { path, message } => {
                write!(f, "invalid fixture {}: {message}", path.display())
            }
            Self::DuplicateId(id) => write!(f, "duplicate item id {id}"),
        }
    }
}

impl std::error::Error for FixtureError {}

/// One record of a fixture file. Field names follow the camelCase layout the
/// web front end ships its mock data in.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureRecord {
    pub id: ItemId,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub status_color: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
}

impl From<FixtureRecord> for ResultItem {
    fn from(value: FixtureRecord) -> Self {
        let icon = value.icon.unwrap_or_default();
        let media_kind = value
            .file_type
            .as_deref()
            .map(MediaKind::parse)
            .unwrap_or(MediaKind::Other);
        // Tags match exactly: "File" is an unknown type.
        let kind = match value.kind.as_str() {
            "person" => ItemKind::Person {
                status: value.status.unwrap_or_default(),
                status_color: value
                    .status_color
                    .as_deref()
                    .map(StatusColor::parse)
                    .unwrap_or(StatusColor::Gray),
                avatar: value.avatar.unwrap_or_default(),
            },
            "file" => ItemKind::File(FileMeta {
                icon,
                path: value.file_path,
                media_kind,
                subtitle: value.subtitle,
            }),
            "folder" => ItemKind::Folder(FileMeta {
                icon,
                path: value.file_path,
                media_kind: MediaKind::Folder,
                subtitle: value.subtitle,
            }),
            "chat" => ItemKind::Chat { icon },
            "list" => ItemKind::List { icon },
            other => ItemKind::Unknown {
                type_tag: other.to_string(),
                meta: FileMeta {
                    icon,
                    path: value.file_path,
                    media_kind,
                    subtitle: value.subtitle,
                },
            },
        };

        ResultItem::from_owned(value.id, value.name, value.details, kind)
    }
}

/// Compiled-in result set used when no fixture file is configured.
pub fn default_items() -> Vec<ResultItem> {
    vec![
        ResultItem::person(
            1,
            "Caroline Dribsson",
            "Unactivated",
            StatusColor::Red,
            "/assets/images/avatar1.jpg",
        ),
        ResultItem::person(
            2,
            "Adam Cadribean",
            "Active 1w ago",
            StatusColor::Yellow,
            "/assets/images/avatar2.jpg",
        ),
        ResultItem::person(
            3,
            "Margareth Cendribgssen",
            "Active 1w ago",
            StatusColor::Yellow,
            "/assets/images/avatar3.jpg",
        ),
        ResultItem::file(
            4,
            "final_dribbble_presentation.jpg",
            "in Presentations • Edited 1w ago",
            "🖼️",
            "/assets/images/final_dribbble_presentation.jpg",
            MediaKind::Image,
        ),
        ResultItem::file(
            5,
            "dribbble_animation.avi",
            "in Videos • Added 1y ago",
            "🎥",
            "/assets/videos/dribbble_animation.avi",
            MediaKind::Video,
        ),
        ResultItem::file(
            6,
            "design_system_v2.pdf",
            "in Documents • Added 3d ago",
            "📄",
            "/assets/documents/design_system_v2.pdf",
            MediaKind::Document,
        ),
        ResultItem::chat(
            7,
            "Design Team Discussion",
            "Last message 2h ago • 5 participants",
            "💬",
        ),
        ResultItem::chat(
            8,
            "Project Updates",
            "Last message 1d ago • 3 participants",
            "💬",
        ),
        ResultItem::file(
            9,
            "dribbble_logo.svg",
            "in Assets • Added 2d ago",
            "🎨",
            "/assets/images/dribbble_logo.svg",
            MediaKind::Image,
        ),
        ResultItem::folder(
            10,
            "Dribbble Resources",
            "8 Files",
            "in Design • Updated 3h ago",
            "📁",
            "/assets/folders/dribbble_resources",
        ),
        ResultItem::list(11, "Design Inspiration", "12 items • Updated 2h ago", "📋"),
        ResultItem::list(12, "Project Tasks", "8 items • Updated 1d ago", "✅"),
    ]
}

/// Parses a JSON or JSON5 array of fixture records.
pub fn parse_items(raw: &str) -> Result<Vec<ResultItem>, String> {
    let records: Vec<FixtureRecord> = json5::from_str(raw).map_err(|e| e.to_string())?;
    Ok(records.into_iter().map(ResultItem::from).collect())
}

pub fn load_items(path: &Path) -> Result<Vec<ResultItem>, FixtureError> {
    let raw = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse_items(&raw).map_err(|message| FixtureError::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    ensure_unique_ids(&items)?;
    Ok(items)
}

pub fn ensure_unique_ids(items: &[ResultItem]) -> Result<(), FixtureError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id) {
            return Err(FixtureError::DuplicateId(item.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{default_items, ensure_unique_ids};

    #[test]
    fn default_items_have_unique_ids() {
        let items = default_items();
        assert_eq!(items.len(), 12);
        assert!(ensure_unique_ids(&items).is_ok());
    }
}

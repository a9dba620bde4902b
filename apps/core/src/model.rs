use serde::{Deserialize, Serialize};

pub type ItemId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Files,
    People,
    Chats,
    Lists,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Files,
        Category::People,
        Category::Chats,
        Category::Lists,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Files => "Files",
            Self::People => "People",
            Self::Chats => "Chats",
            Self::Lists => "Lists",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(input.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActiveFilter {
    #[default]
    All,
    Files,
    People,
    Chats,
    Lists,
}

impl ActiveFilter {
    pub fn category(self) -> Option<Category> {
        match self {
            Self::All => None,
            Self::Files => Some(Category::Files),
            Self::People => Some(Category::People),
            Self::Chats => Some(Category::Chats),
            Self::Lists => Some(Category::Lists),
        }
    }

    pub fn label(self) -> &'static str {
        match self.category() {
            Some(category) => category.label(),
            None => "All",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        if input.trim().eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        Category::parse(input).map(Self::from)
    }
}

impl From<Category> for ActiveFilter {
    fn from(value: Category) -> Self {
        match value {
            Category::Files => Self::Files,
            Category::People => Self::People,
            Category::Chats => Self::Chats,
            Category::Lists => Self::Lists,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilitySettings {
    pub files: bool,
    pub people: bool,
    pub chats: bool,
    pub lists: bool,
}

impl Default for VisibilitySettings {
    fn default() -> Self {
        Self {
            files: true,
            people: true,
            chats: true,
            lists: false,
        }
    }
}

impl VisibilitySettings {
    pub fn all_visible() -> Self {
        Self {
            files: true,
            people: true,
            chats: true,
            lists: true,
        }
    }

    pub fn is_visible(&self, category: Category) -> bool {
        match category {
            Category::Files => self.files,
            Category::People => self.people,
            Category::Chats => self.chats,
            Category::Lists => self.lists,
        }
    }

    pub fn with(mut self, category: Category, visible: bool) -> Self {
        let slot = match category {
            Category::Files => &mut self.files,
            Category::People => &mut self.people,
            Category::Chats => &mut self.chats,
            Category::Lists => &mut self.lists,
        };
        *slot = visible;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    Red,
    Yellow,
    Green,
    Gray,
}

impl StatusColor {
    /// Accepts bare color names as well as utility classes like `bg-red-500`.
    pub fn parse(input: &str) -> Self {
        let lowered = input.trim().to_ascii_lowercase();
        let name = lowered
            .strip_prefix("bg-")
            .and_then(|rest| rest.split('-').next())
            .unwrap_or(lowered.as_str());
        match name {
            "red" => Self::Red,
            "yellow" | "amber" => Self::Yellow,
            "green" | "emerald" => Self::Green,
            _ => Self::Gray,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
    Document,
    Folder,
    Other,
}

impl MediaKind {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "image" => Self::Image,
            "video" => Self::Video,
            "document" => Self::Document,
            "folder" => Self::Folder,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub icon: String,
    pub path: Option<String>,
    pub media_kind: MediaKind,
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Person {
        status: String,
        status_color: StatusColor,
        avatar: String,
    },
    File(FileMeta),
    Folder(FileMeta),
    Chat {
        icon: String,
    },
    List {
        icon: String,
    },
    /// Fixture record whose type tag was not recognised. It keeps the
    /// file-style fields so it still renders and links like a file.
    Unknown {
        type_tag: String,
        meta: FileMeta,
    },
}

impl ItemKind {
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::Person { .. } => Some(Category::People),
            Self::File(_) | Self::Folder(_) => Some(Category::Files),
            Self::Chat { .. } => Some(Category::Chats),
            Self::List { .. } => Some(Category::Lists),
            Self::Unknown { .. } => None,
        }
    }

    pub fn type_tag(&self) -> &str {
        match self {
            Self::Person { .. } => "person",
            Self::File(_) => "file",
            Self::Folder(_) => "folder",
            Self::Chat { .. } => "chat",
            Self::List { .. } => "list",
            Self::Unknown { type_tag, .. } => type_tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub id: ItemId,
    pub name: String,
    pub details: Option<String>,
    pub kind: ItemKind,
    normalized_name: String,
    normalized_details: Option<String>,
}

impl ResultItem {
    pub fn new(id: ItemId, name: &str, details: Option<&str>, kind: ItemKind) -> Self {
        Self::from_owned(id, name.to_string(), details.map(str::to_string), kind)
    }

    pub fn from_owned(id: ItemId, name: String, details: Option<String>, kind: ItemKind) -> Self {
        let normalized_name = normalize_for_match(&name);
        let normalized_details = details.as_deref().map(normalize_for_match);
        Self {
            id,
            name,
            details,
            kind,
            normalized_name,
            normalized_details,
        }
    }

    pub fn person(
        id: ItemId,
        name: &str,
        status: &str,
        status_color: StatusColor,
        avatar: &str,
    ) -> Self {
        Self::new(
            id,
            name,
            None,
            ItemKind::Person {
                status: status.to_string(),
                status_color,
                avatar: avatar.to_string(),
            },
        )
    }

    pub fn file(
        id: ItemId,
        name: &str,
        details: &str,
        icon: &str,
        path: &str,
        media_kind: MediaKind,
    ) -> Self {
        Self::new(
            id,
            name,
            Some(details),
            ItemKind::File(FileMeta {
                icon: icon.to_string(),
                path: Some(path.to_string()),
                media_kind,
                subtitle: None,
            }),
        )
    }

    pub fn folder(
        id: ItemId,
        name: &str,
        subtitle: &str,
        details: &str,
        icon: &str,
        path: &str,
    ) -> Self {
        Self::new(
            id,
            name,
            Some(details),
            ItemKind::Folder(FileMeta {
                icon: icon.to_string(),
                path: Some(path.to_string()),
                media_kind: MediaKind::Folder,
                subtitle: Some(subtitle.to_string()),
            }),
        )
    }

    pub fn chat(id: ItemId, name: &str, details: &str, icon: &str) -> Self {
        Self::new(
            id,
            name,
            Some(details),
            ItemKind::Chat {
                icon: icon.to_string(),
            },
        )
    }

    pub fn list(id: ItemId, name: &str, details: &str, icon: &str) -> Self {
        Self::new(
            id,
            name,
            Some(details),
            ItemKind::List {
                icon: icon.to_string(),
            },
        )
    }

    pub fn category(&self) -> Option<Category> {
        self.kind.category()
    }

    pub fn normalized_name(&self) -> &str {
        &self.normalized_name
    }

    pub fn normalized_details(&self) -> Option<&str> {
        self.normalized_details.as_deref()
    }
}

/// Case folding shared by items and queries. Unlike a search index, nothing is
/// stripped: separators such as `_` and `.` must still match literally.
pub fn normalize_for_match(input: &str) -> String {
    input.to_lowercase()
}

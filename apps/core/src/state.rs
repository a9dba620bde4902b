use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_COPY_ACK_WINDOW_MS;
use crate::filter::{toggle_category_visibility, FilterDirective};
use crate::model::{ActiveFilter, Category, ItemId, VisibilitySettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyAck {
    pub item_id: ItemId,
    pub expires_at_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaletteEvent {
    QueryChanged { query: String },
    Clear,
    SelectFilter { filter: ActiveFilter },
    ToggleVisibility { category: Category },
    ToggleSettingsMenu,
    DismissSettingsMenu,
    CopySucceeded { item_id: ItemId, now_ms: u64 },
    Tick { now_ms: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteState {
    query: String,
    active_filter: ActiveFilter,
    settings: VisibilitySettings,
    recently_cleared: bool,
    settings_open: bool,
    copied: Option<CopyAck>,
    copy_ack_window_ms: u64,
}

impl Default for PaletteState {
    fn default() -> Self {
        Self::new(VisibilitySettings::default(), DEFAULT_COPY_ACK_WINDOW_MS)
    }
}

impl PaletteState {
    pub fn new(settings: VisibilitySettings, copy_ack_window_ms: u64) -> Self {
        Self {
            query: String::new(),
            active_filter: ActiveFilter::All,
            settings,
            recently_cleared: false,
            settings_open: false,
            copied: None,
            copy_ack_window_ms,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn active_filter(&self) -> ActiveFilter {
        self.active_filter
    }

    pub fn settings(&self) -> VisibilitySettings {
        self.settings
    }

    pub fn recently_cleared(&self) -> bool {
        self.recently_cleared
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn copied(&self) -> Option<CopyAck> {
        self.copied
    }

    pub fn apply(&mut self, event: &PaletteEvent) {
        match event {
            PaletteEvent::QueryChanged { query } => {
                self.query = query.clone();
                if !query.is_empty() {
                    self.recently_cleared = false;
                }
            }
            PaletteEvent::Clear => {
                self.query.clear();
                self.recently_cleared = true;
            }
            PaletteEvent::SelectFilter { filter } => self.select_filter(*filter),
            PaletteEvent::ToggleVisibility { category } => self.toggle_visibility(*category),
            PaletteEvent::ToggleSettingsMenu => self.settings_open = !self.settings_open,
            PaletteEvent::DismissSettingsMenu => self.settings_open = false,
            PaletteEvent::CopySucceeded { item_id, now_ms } => {
                self.copied = Some(CopyAck {
                    item_id: *item_id,
                    expires_at_ms: now_ms.saturating_add(self.copy_ack_window_ms),
                });
            }
            PaletteEvent::Tick { now_ms } => {
                if self.copied.is_some_and(|ack| *now_ms >= ack.expires_at_ms) {
                    self.copied = None;
                }
            }
        }
    }

    fn select_filter(&mut self, filter: ActiveFilter) {
        let selectable = match filter.category() {
            Some(category) => self.settings.is_visible(category),
            None => true,
        };
        if selectable {
            self.active_filter = filter;
        }
    }

    fn toggle_visibility(&mut self, category: Category) {
        let toggle = toggle_category_visibility(&self.settings, category, self.active_filter);
        self.settings = toggle.settings;

        // Runs after the settings write so it sees the new visibility.
        if let Some(FilterDirective::ResetToAll) = toggle.directive {
            self.active_filter = ActiveFilter::All;
        }
    }
}

pub fn reduce(mut state: PaletteState, event: &PaletteEvent) -> PaletteState {
    state.apply(event);
    state
}

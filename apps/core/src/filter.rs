use serde::{Deserialize, Serialize};

use crate::model::{normalize_for_match, ActiveFilter, Category, ResultItem, VisibilitySettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub total: usize,
    pub files: usize,
    pub people: usize,
    pub chats: usize,
    pub lists: usize,
}

impl CategoryCounts {
    pub fn for_category(&self, category: Category) -> usize {
        match category {
            Category::Files => self.files,
            Category::People => self.people,
            Category::Chats => self.chats,
            Category::Lists => self.lists,
        }
    }

    pub fn for_filter(&self, filter: ActiveFilter) -> usize {
        match filter.category() {
            Some(category) => self.for_category(category),
            None => self.total,
        }
    }

    fn bump(&mut self, category: Category) {
        let slot = match category {
            Category::Files => &mut self.files,
            Category::People => &mut self.people,
            Category::Chats => &mut self.chats,
            Category::Lists => &mut self.lists,
        };
        *slot += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterDirective {
    ResetToAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityToggle {
    pub settings: VisibilitySettings,
    pub directive: Option<FilterDirective>,
}

/// Items without a recognised category stay visible.
pub fn is_category_visible(item: &ResultItem, settings: &VisibilitySettings) -> bool {
    match item.category() {
        Some(category) => settings.is_visible(category),
        None => true,
    }
}

pub fn matches_query(item: &ResultItem, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    matches_normalized_query(item, &normalize_for_match(query))
}

fn matches_normalized_query(item: &ResultItem, normalized_query: &str) -> bool {
    if normalized_query.is_empty() {
        return true;
    }
    item.normalized_name().contains(normalized_query)
        || item
            .normalized_details()
            .is_some_and(|details| details.contains(normalized_query))
}

pub fn category_matches_active_filter(item: &ResultItem, filter: ActiveFilter) -> bool {
    match filter.category() {
        None => true,
        Some(wanted) => item.category() == Some(wanted),
    }
}

pub fn compute_filtered_results<'a>(
    items: &'a [ResultItem],
    query: &str,
    filter: ActiveFilter,
    settings: &VisibilitySettings,
) -> Vec<&'a ResultItem> {
    let normalized_query = normalize_for_match(query);
    items
        .iter()
        .filter(|item| {
            is_category_visible(item, settings)
                && matches_normalized_query(item, &normalized_query)
                && category_matches_active_filter(item, filter)
        })
        .collect()
}

/// Counts ignore the active filter: each badge reports what its tab would hold.
pub fn compute_category_counts(
    items: &[ResultItem],
    query: &str,
    settings: &VisibilitySettings,
) -> CategoryCounts {
    let normalized_query = normalize_for_match(query);
    let mut counts = CategoryCounts::default();

    for item in items {
        if !is_category_visible(item, settings) || !matches_normalized_query(item, &normalized_query)
        {
            continue;
        }
        counts.total += 1;
        if let Some(category) = item.category() {
            counts.bump(category);
        }
    }

    counts
}

pub fn toggle_category_visibility(
    settings: &VisibilitySettings,
    key: Category,
    active: ActiveFilter,
) -> VisibilityToggle {
    let visible = !settings.is_visible(key);
    let directive = if !visible && active.category() == Some(key) {
        Some(FilterDirective::ResetToAll)
    } else {
        None
    };

    VisibilityToggle {
        settings: settings.with(key, visible),
        directive,
    }
}

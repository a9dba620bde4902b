use serde::{Deserialize, Serialize};

use crate::contract::ResultItemDto;
use crate::filter::{compute_category_counts, compute_filtered_results, CategoryCounts};
use crate::model::{ActiveFilter, Category, ItemId, ResultItem, VisibilitySettings};
use crate::state::PaletteState;

pub const PLACEHOLDER_DEFAULT: &str = "Search...";
pub const PLACEHOLDER_AFTER_CLEAR: &str = "Searching is easier";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultsBody {
    /// Results panel collapsed right after a clear.
    Hidden,
    Results,
    NoResults,
    TypeSomething,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabView {
    pub filter: ActiveFilter,
    pub label: String,
    pub count: usize,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteView {
    pub query: String,
    pub placeholder: String,
    pub active_filter: ActiveFilter,
    pub settings: VisibilitySettings,
    pub settings_open: bool,
    pub tabs: Vec<TabView>,
    pub counts: CategoryCounts,
    pub body: ResultsBody,
    pub results: Vec<ResultItemDto>,
    pub copied_item_id: Option<ItemId>,
}

pub fn build_view(items: &[ResultItem], state: &PaletteState) -> PaletteView {
    let settings = state.settings();
    let active_filter = state.active_filter();
    let filtered = compute_filtered_results(items, state.query(), active_filter, &settings);
    let counts = compute_category_counts(items, state.query(), &settings);

    PaletteView {
        query: state.query().to_string(),
        placeholder: placeholder(state).to_string(),
        active_filter,
        settings,
        settings_open: state.settings_open(),
        tabs: build_tabs(&counts, &settings, active_filter),
        counts,
        body: results_body(state, filtered.len()),
        results: filtered.into_iter().map(ResultItemDto::from).collect(),
        copied_item_id: state.copied().map(|ack| ack.item_id),
    }
}

pub fn results_body(state: &PaletteState, result_count: usize) -> ResultsBody {
    if state.recently_cleared() {
        ResultsBody::Hidden
    } else if result_count > 0 {
        ResultsBody::Results
    } else if state.query().is_empty() {
        ResultsBody::TypeSomething
    } else {
        ResultsBody::NoResults
    }
}

fn placeholder(state: &PaletteState) -> &'static str {
    if state.recently_cleared() {
        PLACEHOLDER_AFTER_CLEAR
    } else {
        PLACEHOLDER_DEFAULT
    }
}

fn build_tabs(
    counts: &CategoryCounts,
    settings: &VisibilitySettings,
    active_filter: ActiveFilter,
) -> Vec<TabView> {
    let categories = Category::ALL
        .into_iter()
        .filter(|category| settings.is_visible(*category))
        .map(ActiveFilter::from);

    std::iter::once(ActiveFilter::All)
        .chain(categories)
        .map(|filter| TabView {
            filter,
            label: filter.label().to_string(),
            count: counts.for_filter(filter),
            selected: filter == active_filter,
        })
        .collect()
}

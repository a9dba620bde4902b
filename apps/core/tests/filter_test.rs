use quickfind_core::filter::{
    category_matches_active_filter, compute_category_counts, compute_filtered_results,
    is_category_visible, matches_query, toggle_category_visibility, FilterDirective,
};
use quickfind_core::fixture::default_items;
use quickfind_core::model::{
    ActiveFilter, Category, FileMeta, ItemKind, MediaKind, ResultItem, StatusColor,
    VisibilitySettings,
};

fn ids(results: &[&ResultItem]) -> Vec<u32> {
    results.iter().map(|item| item.id).collect()
}

fn scenario_items() -> Vec<ResultItem> {
    vec![
        ResultItem::person(
            1,
            "Caroline Dribsson",
            "Unactivated",
            StatusColor::Red,
            "/assets/images/avatar1.jpg",
        ),
        ResultItem::file(
            6,
            "design_system_v2.pdf",
            "in Documents • Added 3d ago",
            "📄",
            "/assets/documents/design_system_v2.pdf",
            MediaKind::Document,
        ),
    ]
}

#[test]
fn empty_query_with_all_filter_returns_every_item_in_order() {
    let items = default_items();
    let results = compute_filtered_results(
        &items,
        "",
        ActiveFilter::All,
        &VisibilitySettings::all_visible(),
    );
    assert_eq!(ids(&results), (1..=12).collect::<Vec<u32>>());
}

#[test]
fn query_matches_name_or_details_case_insensitively() {
    let items = default_items();
    let chat = items.iter().find(|item| item.id == 7).unwrap();

    assert!(matches_query(chat, ""));
    assert!(matches_query(chat, "DESIGN team"));
    assert!(matches_query(chat, "5 PARTICIPANTS"));
    assert!(!matches_query(chat, "6 participants"));

    let person = items.iter().find(|item| item.id == 1).unwrap();
    assert!(person.details.is_none());
    assert!(matches_query(person, "dribs"));
    assert!(!matches_query(person, "unactivated"));
}

#[test]
fn query_is_not_trimmed_or_tokenized() {
    let items = default_items();
    let file = items.iter().find(|item| item.id == 6).unwrap();
    assert!(matches_query(file, "system_v2"));
    assert!(!matches_query(file, "system v2"));
    assert!(!matches_query(file, " design_system"));
}

#[test]
fn scenario_dribsson_returns_the_person_only() {
    let items = scenario_items();
    let settings = VisibilitySettings::default();

    let results = compute_filtered_results(&items, "dribsson", ActiveFilter::All, &settings);
    assert_eq!(ids(&results), vec![1]);

    let counts = compute_category_counts(&items, "dribsson", &settings);
    assert_eq!(counts.people, 1);
    assert_eq!(counts.files, 0);
    assert_eq!(counts.total, 1);
}

#[test]
fn files_filter_with_empty_query_keeps_files_and_folders_in_order() {
    let items = default_items();
    let results =
        compute_filtered_results(&items, "", ActiveFilter::Files, &VisibilitySettings::default());
    assert_eq!(ids(&results), vec![4, 5, 6, 9, 10]);
}

#[test]
fn hidden_category_is_excluded_even_under_its_own_filter() {
    let items = default_items();
    let settings = VisibilitySettings::default();
    let results = compute_filtered_results(&items, "", ActiveFilter::Lists, &settings);
    assert!(results.is_empty());

    let lists_on = settings.with(Category::Lists, true);
    let results = compute_filtered_results(&items, "", ActiveFilter::Lists, &lists_on);
    assert_eq!(ids(&results), vec![11, 12]);
}

#[test]
fn counts_ignore_active_filter_and_respect_settings() {
    let items = default_items();
    let settings = VisibilitySettings::default();
    let counts = compute_category_counts(&items, "dribb", &settings);

    assert_eq!(counts.files, 4);
    assert_eq!(counts.people, 0);
    assert_eq!(counts.chats, 0);
    assert_eq!(counts.lists, 0);
    assert_eq!(counts.total, 4);

    let filtered = compute_filtered_results(&items, "dribb", ActiveFilter::People, &settings);
    assert!(filtered.is_empty());
    assert_eq!(counts.for_filter(ActiveFilter::Files), 4);
}

#[test]
fn total_is_the_sum_of_category_counts() {
    let items = default_items();
    let settings_grid = [
        VisibilitySettings::default(),
        VisibilitySettings::all_visible(),
        VisibilitySettings::default().with(Category::Files, false),
        VisibilitySettings::all_visible().with(Category::People, false),
    ];

    for settings in settings_grid {
        for query in ["", "d", "dribb", "ago", "project", "nothing-matches"] {
            let counts = compute_category_counts(&items, query, &settings);
            assert_eq!(
                counts.total,
                counts.files + counts.people + counts.chats + counts.lists,
                "query={query:?} settings={settings:?}"
            );
        }
    }
}

#[test]
fn unknown_variant_is_visible_and_only_matches_all() {
    let item = ResultItem::new(
        99,
        "Roadmap board",
        None,
        ItemKind::Unknown {
            type_tag: "board".into(),
            meta: FileMeta {
                icon: "B".into(),
                path: None,
                media_kind: MediaKind::Other,
                subtitle: None,
            },
        },
    );
    let hidden = VisibilitySettings {
        files: false,
        people: false,
        chats: false,
        lists: false,
    };

    assert!(is_category_visible(&item, &hidden));
    assert!(category_matches_active_filter(&item, ActiveFilter::All));
    assert!(!category_matches_active_filter(&item, ActiveFilter::Files));

    let items = vec![item];
    let counts = compute_category_counts(&items, "road", &hidden);
    assert_eq!(counts.total, 1);
    assert_eq!(counts.files + counts.people + counts.chats + counts.lists, 0);
}

#[test]
fn folder_items_belong_to_files() {
    let items = default_items();
    let folder = items.iter().find(|item| item.id == 10).unwrap();
    assert_eq!(folder.category(), Some(Category::Files));
    assert!(category_matches_active_filter(folder, ActiveFilter::Files));
    assert!(!is_category_visible(
        folder,
        &VisibilitySettings::default().with(Category::Files, false)
    ));
}

#[test]
fn toggling_the_active_category_off_requests_reset() {
    let settings = VisibilitySettings::default();
    let toggle = toggle_category_visibility(&settings, Category::People, ActiveFilter::People);
    assert!(!toggle.settings.people);
    assert_eq!(toggle.directive, Some(FilterDirective::ResetToAll));
}

#[test]
fn toggling_an_unrelated_category_leaves_filter_alone() {
    let settings = VisibilitySettings::default();
    let toggle = toggle_category_visibility(&settings, Category::Chats, ActiveFilter::People);
    assert!(!toggle.settings.chats);
    assert_eq!(toggle.directive, None);

    let toggle = toggle_category_visibility(&settings, Category::Lists, ActiveFilter::Lists);
    assert!(toggle.settings.lists);
    assert_eq!(toggle.directive, None);
}

#[test]
fn toggling_twice_restores_settings() {
    let original = VisibilitySettings::default();
    for category in Category::ALL {
        let once = toggle_category_visibility(&original, category, ActiveFilter::All);
        let twice = toggle_category_visibility(&once.settings, category, ActiveFilter::All);
        assert_eq!(twice.settings, original);
        assert_eq!(once.directive, None);
        assert_eq!(twice.directive, None);
    }
}

use quickfind_core::action_executor::{
    link_target, BridgeError, LoggingBridge, PlatformBridge, RecordingBridge,
};
use quickfind_core::fixture::default_items;
use quickfind_core::model::{FileMeta, ItemKind, MediaKind, ResultItem};

#[test]
fn files_and_folders_link_to_their_path() {
    let items = default_items();
    let file = items.iter().find(|item| item.id == 6).unwrap();
    let folder = items.iter().find(|item| item.id == 10).unwrap();

    assert_eq!(
        link_target(file).as_deref(),
        Some("/assets/documents/design_system_v2.pdf")
    );
    assert_eq!(
        link_target(folder).as_deref(),
        Some("/assets/folders/dribbble_resources")
    );
}

#[test]
fn blank_path_falls_back_to_asset_link() {
    let item = ResultItem::new(
        20,
        "brief.docx",
        None,
        ItemKind::File(FileMeta {
            icon: "📄".into(),
            path: Some("   ".into()),
            media_kind: MediaKind::Document,
            subtitle: None,
        }),
    );
    assert_eq!(link_target(&item).as_deref(), Some("/assets/files/brief.docx"));
}

#[test]
fn people_chats_and_lists_have_no_link() {
    let items = default_items();
    for id in [1, 7, 11] {
        let item = items.iter().find(|item| item.id == id).unwrap();
        assert_eq!(link_target(item), None, "item {id}");
    }
}

#[test]
fn logging_bridge_accepts_non_empty_targets() {
    let bridge = LoggingBridge;
    assert!(bridge.write_clipboard("/assets/images/dribbble_logo.svg").is_ok());
    assert!(bridge.open_target("/assets/images/dribbble_logo.svg").is_ok());
    assert_eq!(bridge.open_target("  "), Err(BridgeError::EmptyTarget));
}

#[test]
fn recording_bridge_shares_records_between_clones() {
    let bridge = RecordingBridge::new();
    let handle = bridge.clone();

    bridge.write_clipboard("/a/b.txt").unwrap();
    bridge.open_target("/a/c.txt").unwrap();

    assert_eq!(handle.clipboard_writes(), vec!["/a/b.txt".to_string()]);
    assert_eq!(handle.opened_targets(), vec!["/a/c.txt".to_string()]);
}

#[test]
fn clipboard_text_is_written_exactly_as_given() {
    let bridge = RecordingBridge::new();
    bridge.write_clipboard(" /assets/files/My Notes.txt ").unwrap();
    assert_eq!(
        bridge.clipboard_writes(),
        vec![" /assets/files/My Notes.txt ".to_string()]
    );
    assert_eq!(bridge.write_clipboard(" \t "), Err(BridgeError::EmptyTarget));
    assert_eq!(bridge.clipboard_writes().len(), 1);
}

#[test]
fn recording_bridge_reports_configured_failures() {
    let bridge = RecordingBridge::new();
    bridge.set_fail_clipboard(true);
    bridge.set_fail_open(true);

    assert!(matches!(
        bridge.write_clipboard("/a/b.txt"),
        Err(BridgeError::Clipboard(_))
    ));
    assert!(matches!(bridge.open_target("/a/b.txt"), Err(BridgeError::Open(_))));
    assert!(bridge.clipboard_writes().is_empty());
    assert!(bridge.opened_targets().is_empty());
}

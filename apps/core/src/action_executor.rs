use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

use crate::logging;
use crate::model::{ItemKind, ResultItem};

const FALLBACK_LINK_PREFIX: &str = "/assets/files/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    EmptyTarget,
    Clipboard(String),
    Open(String),
}

impl Display for BridgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTarget => write!(f, "empty target"),
            Self::Clipboard(error) => write!(f, "clipboard write failed: {error}"),
            Self::Open(error) => write!(f, "open failed: {error}"),
        }
    }
}

impl std::error::Error for BridgeError {}

/// Platform calls the core delegates and never retries.
pub trait PlatformBridge {
    fn write_clipboard(&self, text: &str) -> Result<(), BridgeError>;
    fn open_target(&self, target: &str) -> Result<(), BridgeError>;
}

/// Link copied or opened for an item. People, chats and lists carry none.
pub fn link_target(item: &ResultItem) -> Option<String> {
    match &item.kind {
        ItemKind::File(meta) | ItemKind::Folder(meta) | ItemKind::Unknown { meta, .. } => Some(
            meta.path
                .as_deref()
                .map(str::trim)
                .filter(|path| !path.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| fallback_link(&item.name)),
        ),
        ItemKind::Person { .. } | ItemKind::Chat { .. } | ItemKind::List { .. } => None,
    }
}

fn fallback_link(name: &str) -> String {
    format!("{FALLBACK_LINK_PREFIX}{name}")
}

/// Rejects blank text; anything else passes through untouched.
fn require_target(target: &str) -> Result<&str, BridgeError> {
    if target.trim().is_empty() {
        return Err(BridgeError::EmptyTarget);
    }
    Ok(target)
}

/// Bridge for hosts without clipboard or browser access: records the request
/// in the log and reports success.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingBridge;

impl PlatformBridge for LoggingBridge {
    fn write_clipboard(&self, text: &str) -> Result<(), BridgeError> {
        let text = require_target(text)?;
        logging::info(&format!("clipboard write requested: {text}"));
        Ok(())
    }

    fn open_target(&self, target: &str) -> Result<(), BridgeError> {
        let target = require_target(target)?;
        logging::info(&format!("open requested: {target}"));
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Recorded {
    clipboard: Vec<String>,
    opened: Vec<String>,
    fail_clipboard: bool,
    fail_open: bool,
}

/// In-memory bridge. Clones share one record, so a host can keep a handle
/// after giving the bridge to a service.
#[derive(Debug, Clone, Default)]
pub struct RecordingBridge {
    inner: Rc<RefCell<Recorded>>,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_clipboard(&self, fail: bool) {
        self.inner.borrow_mut().fail_clipboard = fail;
    }

    pub fn set_fail_open(&self, fail: bool) {
        self.inner.borrow_mut().fail_open = fail;
    }

    pub fn clipboard_writes(&self) -> Vec<String> {
        self.inner.borrow().clipboard.clone()
    }

    pub fn opened_targets(&self) -> Vec<String> {
        self.inner.borrow().opened.clone()
    }
}

impl PlatformBridge for RecordingBridge {
    fn write_clipboard(&self, text: &str) -> Result<(), BridgeError> {
        let text = require_target(text)?;
        let mut recorded = self.inner.borrow_mut();
        if recorded.fail_clipboard {
            return Err(BridgeError::Clipboard("clipboard unavailable".to_string()));
        }
        recorded.clipboard.push(text.to_string());
        Ok(())
    }

    fn open_target(&self, target: &str) -> Result<(), BridgeError> {
        let target = require_target(target)?;
        let mut recorded = self.inner.borrow_mut();
        if recorded.fail_open {
            return Err(BridgeError::Open("no handler for target".to_string()));
        }
        recorded.opened.push(target.to_string());
        Ok(())
    }
}

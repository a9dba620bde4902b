use crate::action_executor::{link_target, LoggingBridge, PlatformBridge};
use crate::config::{validate, Config};
use crate::contract::{CopyResponse, OpenResponse, PaletteRequest, PaletteResponse};
use crate::fixture::{self, FixtureError};
use crate::logging;
use crate::model::{ItemId, ResultItem};
use crate::state::{PaletteEvent, PaletteState};
use crate::view::{build_view, PaletteView};

#[derive(Debug)]
pub enum ServiceError {
    Config(String),
    Fixture(FixtureError),
    ItemNotFound(ItemId),
    NotActionable(ItemId),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Fixture(error) => write!(f, "fixture error: {error}"),
            Self::ItemNotFound(id) => write!(f, "item not found: {id}"),
            Self::NotActionable(id) => write!(f, "item has no link target: {id}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<FixtureError> for ServiceError {
    fn from(value: FixtureError) -> Self {
        Self::Fixture(value)
    }
}

pub struct PaletteService {
    config: Config,
    items: Vec<ResultItem>,
    state: PaletteState,
    bridge: Box<dyn PlatformBridge>,
}

impl PaletteService {
    /// Loads items from the configured fixture file, or the compiled-in set.
    pub fn new(config: Config) -> Result<Self, ServiceError> {
        validate(&config).map_err(ServiceError::Config)?;
        let items = match &config.fixture_path {
            Some(path) => fixture::load_items(path)?,
            None => fixture::default_items(),
        };
        Self::with_items(config, items)
    }

    pub fn with_items(config: Config, items: Vec<ResultItem>) -> Result<Self, ServiceError> {
        validate(&config).map_err(ServiceError::Config)?;
        fixture::ensure_unique_ids(&items)?;
        let state = PaletteState::new(config.default_visibility, config.copy_ack_window_ms);
        Ok(Self {
            config,
            items,
            state,
            bridge: Box::new(LoggingBridge),
        })
    }

    pub fn with_bridge(mut self, bridge: impl PlatformBridge + 'static) -> Self {
        self.bridge = Box::new(bridge);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn items(&self) -> &[ResultItem] {
        &self.items
    }

    pub fn state(&self) -> &PaletteState {
        &self.state
    }

    pub fn dispatch(&mut self, event: &PaletteEvent) -> PaletteView {
        let before = self.state.active_filter();
        self.state.apply(event);
        if let PaletteEvent::ToggleVisibility { category } = event {
            if before != self.state.active_filter() {
                logging::info(&format!(
                    "filter reset to All after hiding {}",
                    category.label()
                ));
            }
        }
        self.view()
    }

    pub fn view(&self) -> PaletteView {
        build_view(&self.items, &self.state)
    }

    /// Returns whether the link reached the clipboard. A bridge failure is
    /// logged and leaves the state untouched.
    pub fn copy_link(&mut self, item_id: ItemId, now_ms: u64) -> Result<bool, ServiceError> {
        let target = self.target_for(item_id)?;
        match self.bridge.write_clipboard(&target) {
            Ok(()) => {
                self.state.apply(&PaletteEvent::CopySucceeded { item_id, now_ms });
                Ok(true)
            }
            Err(error) => {
                logging::warn(&format!("copy link failed item_id={item_id}: {error}"));
                Ok(false)
            }
        }
    }

    /// Fire-and-forget: a bridge failure is logged, not returned.
    pub fn open(&self, item_id: ItemId) -> Result<bool, ServiceError> {
        let target = self.target_for(item_id)?;
        if let Err(error) = self.bridge.open_target(&target) {
            logging::warn(&format!("open failed item_id={item_id}: {error}"));
            return Ok(false);
        }
        Ok(true)
    }

    pub fn handle_command(
        &mut self,
        request: PaletteRequest,
    ) -> Result<PaletteResponse, ServiceError> {
        match request {
            PaletteRequest::Snapshot => Ok(PaletteResponse::View(self.view())),
            PaletteRequest::Event(event) => Ok(PaletteResponse::View(self.dispatch(&event))),
            PaletteRequest::CopyLink(request) => {
                let copied = self.copy_link(request.item_id, request.now_ms)?;
                Ok(PaletteResponse::CopyLink(CopyResponse {
                    copied,
                    view: self.view(),
                }))
            }
            PaletteRequest::Open(request) => {
                let requested = self.open(request.item_id)?;
                Ok(PaletteResponse::Open(OpenResponse { requested }))
            }
        }
    }

    fn find_item(&self, item_id: ItemId) -> Result<&ResultItem, ServiceError> {
        self.items
            .iter()
            .find(|item| item.id == item_id)
            .ok_or(ServiceError::ItemNotFound(item_id))
    }

    fn target_for(&self, item_id: ItemId) -> Result<String, ServiceError> {
        let item = self.find_item(item_id)?;
        link_target(item).ok_or(ServiceError::NotActionable(item_id))
    }
}

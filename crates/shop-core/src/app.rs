//! Storefront application setup.

use shop_commerce::catalog::Catalog;
use shop_commerce::state::{StoreAction, StoreState};
use shop_commerce::view::StoreView;
use shop_observability::{SessionId, StructuredLogger};

use crate::{CoreError, StoreConfig, StoreContent};

/// Storefront application: configuration plus the catalog it sells.
///
/// One `StoreApp` serves any number of sessions; each session owns its
/// own [`StoreState`].
///
/// # Example
///
/// ```
/// use shop_core::{StoreApp, StoreConfig};
///
/// let mut config = StoreConfig::default();
/// config.store.featured_count = 2;
///
/// let app = StoreApp::new(config);
/// let view = app.view(&app.initial_state());
/// assert_eq!(view.featured.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct StoreApp {
    config: StoreConfig,
    catalog: Catalog,
}

impl StoreApp {
    /// Create an app selling the seed catalog in the configured currency.
    pub fn new(config: StoreConfig) -> Self {
        let catalog = Catalog::seed_in(config.store.currency);
        Self { config, catalog }
    }

    /// Create an app from the compiled-in `store.toml`.
    pub fn bundled() -> Result<Self, CoreError> {
        Ok(Self::new(StoreConfig::bundled()?))
    }

    /// Replace the catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Get the page texts.
    pub fn content(&self) -> &StoreContent {
        &self.config.content
    }

    /// Get the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// State for a new session.
    pub fn initial_state(&self) -> StoreState {
        StoreState::new(self.catalog.currency())
    }

    /// Render-ready projection of `state`.
    pub fn view(&self, state: &StoreState) -> StoreView {
        StoreView::build(state, &self.catalog, self.config.store.featured_count)
    }

    /// Logger for a session, honoring the `[logging]` section.
    pub fn logger(&self, session_id: SessionId) -> StructuredLogger {
        StructuredLogger::new(session_id)
            .with_min_level(self.config.logging.level)
            .with_format(self.config.logging.format)
    }

    /// Apply `action` to `state` and log the outcome at debug level.
    pub fn dispatch(&self, state: &mut StoreState, action: StoreAction, log: &StructuredLogger) {
        let name = action.name();
        state.apply(action);

        log.debug_builder("action applied")
            .field("action", name)
            .field("page", state.page.as_str())
            .field_bool("cart_open", state.cart_open)
            .field_i64("cart_items", state.cart.total_item_count())
            .field_i64("cart_total", state.cart.total_price().amount)
            .emit();
    }
}

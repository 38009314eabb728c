//! Reactive handle on the session state.

use leptos::prelude::*;
use shop_commerce::prelude::*;
use shop_core::{StoreApp, StoreConfig, StoreContent, StoreSection};
use shop_observability::{LogLevel, SessionId, StructuredLogger};

/// The session: app, logger and the one mutable `StoreState`.
///
/// `Copy`, so components capture it freely in event handlers.
#[derive(Clone, Copy)]
pub struct Store {
    app: StoredValue<StoreApp>,
    log: StoredValue<StructuredLogger>,
    state: RwSignal<StoreState>,
}

impl Store {
    /// Start a session for `app`.
    pub fn new(app: StoreApp, log: StructuredLogger) -> Self {
        let state = RwSignal::new(app.initial_state());
        Self {
            app: StoredValue::new(app),
            log: StoredValue::new(log),
            state,
        }
    }

    /// Start a session from the compiled-in config, logging to the browser
    /// console. A broken bundled config falls back to the defaults.
    pub fn bundled() -> Self {
        let (app, load_error) = match StoreApp::bundled() {
            Ok(app) => (app, None),
            Err(e) => (StoreApp::new(StoreConfig::default()), Some(e.to_string())),
        };

        let log = app
            .logger(SessionId::from_seed(0))
            .with_component("storefront")
            .with_sink(console_sink);

        if let Some(error) = load_error {
            log.warn_builder("bundled config rejected, using defaults")
                .field("error", error)
                .emit();
        }
        log.info_builder("session started")
            .field_i64("products", app.catalog().len() as i64)
            .field("currency", app.catalog().currency().code())
            .emit();

        Self::new(app, log)
    }

    /// Apply a user gesture.
    pub fn dispatch(&self, action: StoreAction) {
        let app = self.app;
        let log = self.log;
        self.state.update(|state| {
            app.with_value(|app| log.with_value(|log| app.dispatch(state, action, log)))
        });
    }

    /// Render-ready projection of the current state. Tracks the state.
    pub fn view(&self) -> StoreView {
        self.state
            .with(|state| self.app.with_value(|app| app.view(state)))
    }

    /// Order summary for the checkout page. Tracks the state.
    pub fn summary(&self) -> OrderSummary {
        self.state.with(|state| OrderSummary::from_cart(&state.cart))
    }

    /// Whether the cart overlay is open. Tracks the state.
    pub fn cart_open(&self) -> bool {
        self.state.with(|state| state.cart_open)
    }

    /// Current page. Tracks the state.
    pub fn page(&self) -> Page {
        self.state.with(|state| state.page)
    }

    /// Page texts.
    pub fn content(&self) -> StoreContent {
        self.app.with_value(|app| app.content().clone())
    }

    /// `[store]` settings.
    pub fn settings(&self) -> StoreSection {
        self.app.with_value(|app| app.config().store.clone())
    }
}

/// Forward log lines to the browser console.
pub fn console_sink(level: LogLevel, line: &str) {
    match level {
        LogLevel::Error => leptos::logging::error!("{}", line),
        LogLevel::Warn => leptos::logging::warn!("{}", line),
        _ => leptos::logging::log!("{}", line),
    }
}

/// Glyph for an icon name from the page content.
pub fn icon_glyph(name: &str) -> &'static str {
    match name {
        "Truck" => "\u{1f69a}",
        "CreditCard" => "\u{1f4b3}",
        "RefreshCw" => "\u{1f504}",
        "Phone" => "\u{1f4de}",
        "Mail" => "\u{2709}\u{fe0f}",
        "MapPin" => "\u{1f4cd}",
        "Clock" => "\u{1f552}",
        "Instagram" => "\u{1f4f7}",
        "Facebook" => "\u{1f465}",
        "ShoppingBag" => "\u{1f6cd}\u{fe0f}",
        _ => "\u{2022}",
    }
}

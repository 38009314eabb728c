//! Storefront core.
//!
//! Ties the pure domain in `shop-commerce` to what a running storefront
//! needs around it:
//!
//! - `StoreConfig` - store settings and page texts, loaded from TOML or JSON
//! - `StoreContent` - hero, delivery, contacts, footer and checkout texts
//! - `StoreApp` - config + catalog, building sessions and dispatching actions
//!
//! # Quick Start
//!
//! ```
//! use shop_core::StoreApp;
//! use shop_commerce::prelude::*;
//!
//! let app = StoreApp::bundled().unwrap();
//! let mut state = app.initial_state();
//! let log = app.logger(shop_observability::SessionId::new("doc"));
//!
//! app.dispatch(&mut state, StoreAction::Navigate(Page::Catalog), &log);
//! assert_eq!(app.view(&state).products.len(), 6);
//! ```

mod app;
mod config;
mod content;
mod error;

pub use app::*;
pub use config::*;
pub use content::*;
pub use error::*;

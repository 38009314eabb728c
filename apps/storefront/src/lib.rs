//! Online store web app.
//!
//! A client-rendered single page: header with the cart badge, one of five
//! pages, footer, and the cart overlay. All state lives in one
//! `StoreState` signal owned by [`store::Store`].
//!
//! Build with `trunk serve --features csr`.

mod app;
pub mod store;

pub use app::App;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}

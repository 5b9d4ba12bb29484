#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod api;
#[cfg(target_arch = "wasm32")]
pub mod bindings;
pub mod components;
pub mod dom;
pub mod notify;
pub mod session;
pub mod widget;

pub use api::{ApiClient, BasketEmitter, SubmitError};
pub use widget::{BasketHook, GroupBuyWidget, RefreshHandle};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // A second module instance on the page already owns the logger.
    let _ = console_log::init_with_level(level);
}

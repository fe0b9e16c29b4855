//! Taigi Daily core crate.
//!
//! One Taiwanese reduplicated adjective (疊字) per day, picked from a fixed
//! catalog by day of year, with random browsing, an explanatory note, a share
//! snippet and text-to-speech. The state machine lives in
//! [`ViewController`] and is host-independent; `web` is the browser glue
//! exposed through `start_widget()`.

use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod config;
pub mod controller;
pub mod daily;
pub mod error;
pub mod host;
mod logger;
pub mod random;
pub mod view;
pub mod web;

pub use catalog::{Catalog, WORDS, WordContext, WordEntry};
pub use config::WidgetConfig;
pub use controller::{Mode, Notice, NoticeLevel, ViewController, ViewState, share_text};
pub use daily::{daily_index, day_of_year};
pub use error::WidgetError;
pub use host::{ClipboardWriter, SpeechOptions, SpeechOutcome, SpeechSynthesizer, SpeechTicket};
pub use random::{IndexSource, OsRandom, Scripted};
pub use view::{CardView, Foreground};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

fn launch(config: WidgetConfig) -> Result<(), JsValue> {
    logger::init(config.log_level());
    web::mount(config)
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Mount the widget with default settings.
#[wasm_bindgen]
pub fn start_widget() -> Result<(), JsValue> {
    launch(WidgetConfig::default())
}

/// Mount the widget with a JSON config, e.g. `{"mount_id": "word", "verbose": true}`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_widget_with_config(json: &str) -> Result<(), JsValue> {
    let config = WidgetConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    launch(config)
}

/// The built-in catalog as a JSON array.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn catalog_json() -> Result<String, JsValue> {
    Catalog::builtin()
        .to_json()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Today's catalog index in the host timezone, or `undefined` for an empty catalog.
#[wasm_bindgen]
pub fn todays_index() -> Option<u32> {
    daily_index(&Catalog::builtin(), &daily::local_today())
        .ok()
        .map(|i| i as u32)
}

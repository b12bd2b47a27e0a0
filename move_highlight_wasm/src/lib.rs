// JS-facing surface for drawing move suggestions on a board rendered by the host page.
//
// All exported functions are meant to be called from the page's main thread. Squares that are not
// on the page are not an error: the call does nothing and leaves a debug record in the console.

#![cfg_attr(feature = "strict", deny(warnings))]

pub mod web_document;
pub mod web_element_ext;
pub mod web_error_handling;
pub mod web_iterators;
pub mod web_target;

use std::cell::RefCell;

use log::{debug, info};
use move_highlight::{
    BoardOrientation, DisplayMode, HighlightConfig, HighlightState, Highlighter, MoveSuggestion,
    SquareId,
};
use wasm_bindgen::prelude::*;

use web_document::web_document;
use web_error_handling::{JsResult, set_panic_hook};
use web_target::WebTarget;


struct HighlightContext {
    config: HighlightConfig,
    highlighter: Option<Highlighter<WebTarget>>,
}

thread_local! {
    static CONTEXT: RefCell<HighlightContext> = RefCell::new(HighlightContext {
        config: HighlightConfig::default(),
        highlighter: None,
    });
}

// The document is looked up on first use rather than at module load, so that the module can be
// imported before the page is ready.
fn with_highlighter<R>(f: impl FnOnce(&mut Highlighter<WebTarget>) -> JsResult<R>) -> JsResult<R> {
    CONTEXT.with(|cell| -> JsResult<R> {
        let mut context = cell.borrow_mut();
        let context = &mut *context;
        if context.highlighter.is_none() {
            let target = WebTarget::new(web_document()?, &context.config);
            context.highlighter = Some(Highlighter::new(target, &context.config));
        }
        let highlighter = context
            .highlighter
            .as_mut()
            .ok_or_else(|| rust_error!("Highlighter is not initialized"))?;
        f(highlighter)
    })
}

#[wasm_bindgen]
pub fn init_logging(level: &str) {
    set_panic_hook();
    let level = level.parse().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        debug!("Logger is already initialized");
    }
}

// Replaces the configuration. Any highlight drawn with the old configuration is removed first,
// since its marker class and overlay id may no longer be recognized afterwards.
#[wasm_bindgen]
pub fn configure(config_json: &str) -> JsResult<()> {
    let config = HighlightConfig::from_json(config_json).map_err(|err| rust_error!("{err}"))?;
    CONTEXT.with(|cell| -> JsResult<()> {
        let mut context = cell.borrow_mut();
        if let Some(highlighter) = context.highlighter.as_mut() {
            highlighter.clear()?;
        }
        info!("Highlight config: {config:?}");
        *context = HighlightContext { config, highlighter: None };
        Ok(())
    })
}

#[wasm_bindgen]
pub fn draw_suggestion(from: &str, to: &str, style: Option<String>) -> JsResult<()> {
    let mode = DisplayMode::from_name_lenient(style.as_deref());
    with_highlighter(|h| {
        h.render(&SquareId::new(from), &SquareId::new(to), mode)?;
        Ok(())
    })
}

#[wasm_bindgen]
pub fn draw_move_suggestion(uci_move: &str, style: Option<String>, flipped: bool) -> JsResult<()> {
    let suggestion = MoveSuggestion::from_uci(uci_move).map_err(|err| rust_error!("{err}"))?;
    let mode = DisplayMode::from_name_lenient(style.as_deref());
    with_highlighter(|h| {
        h.render_move(suggestion, BoardOrientation::from_flipped(flipped), mode)?;
        Ok(())
    })
}

#[wasm_bindgen]
pub fn clear_suggestion() -> JsResult<()> {
    with_highlighter(|h| {
        h.clear()?;
        Ok(())
    })
}

#[wasm_bindgen]
pub fn is_suggestion_shown() -> JsResult<bool> {
    with_highlighter(|h| Ok(h.state() == HighlightState::Highlighted))
}

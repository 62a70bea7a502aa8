//! JavaScript-facing console class.

use hud_console_common::{Console, ConsoleError, OverlayStyle};
use wasm_bindgen::prelude::*;

use crate::overlay::DomOverlay;

fn to_js(err: ConsoleError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A buffered console bound to its own overlay node.
///
/// Changes are collected until `update()` is called, typically once per
/// animation frame.
#[wasm_bindgen]
pub struct ConsoleOverlay {
    console: Console<DomOverlay>,
}

#[wasm_bindgen]
impl ConsoleOverlay {
    /// Mount a new overlay. `style_json` may override any `OverlayStyle` field.
    #[wasm_bindgen(constructor)]
    pub fn new(style_json: Option<String>) -> Result<ConsoleOverlay, JsValue> {
        let style = match style_json {
            Some(json) => OverlayStyle::from_json(&json).map_err(to_js)?,
            None => OverlayStyle::default(),
        };
        let overlay = DomOverlay::mount(&style).map_err(to_js)?;
        Ok(ConsoleOverlay {
            console: Console::new(overlay),
        })
    }

    pub fn set_text(&mut self, text: &str) {
        self.console.set_text(text);
    }

    /// Show trusted HTML on the next `update`.
    pub fn set_markup(&mut self, markup: &str) {
        self.console.set_markup(markup);
    }

    pub fn set_section(&mut self, name: &str, value: &str) {
        self.console.set_section(name, value);
    }

    pub fn remove_section(&mut self, name: &str) -> bool {
        self.console.remove_section(name)
    }

    pub fn clear(&mut self) {
        self.console.clear();
    }

    pub fn set_color(&mut self, color: &str) -> Result<(), JsValue> {
        self.console.set_color(color).map_err(to_js)
    }

    /// Push buffered changes to the page.
    pub fn update(&mut self) -> Result<(), JsValue> {
        self.console.update().map_err(to_js)
    }

    /// The text currently displayed, without markup.
    pub fn text(&self) -> String {
        self.console.surface().text()
    }

    /// Remove the overlay node from the page.
    pub fn unmount(self) {
        self.console.into_surface().unmount();
    }
}

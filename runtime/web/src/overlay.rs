//! The overlay node itself.

use hud_console_common::{Content, ConsoleError, CssColor, OverlayStyle, OverlaySurface};
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

/// Attribute set on every overlay node so it can be found in the document.
pub const OVERLAY_ATTRIBUTE: &str = "data-hud-console";

fn dom_err(err: JsValue) -> ConsoleError {
    ConsoleError::Dom(format!("{err:?}"))
}

/// Handle to one mounted overlay `div`.
///
/// Dropping the handle leaves the node in place; call [`DomOverlay::unmount`]
/// to remove it.
#[derive(Debug, Clone)]
pub struct DomOverlay {
    element: HtmlElement,
}

impl DomOverlay {
    /// Mounts a new overlay into the current window's document body.
    pub fn mount(style: &OverlayStyle) -> Result<Self, ConsoleError> {
        let window = web_sys::window().ok_or(ConsoleError::MissingGlobal("window"))?;
        let document = window.document().ok_or(ConsoleError::MissingGlobal("document"))?;
        Self::mount_in(&document, style)
    }

    pub fn mount_in(document: &Document, style: &OverlayStyle) -> Result<Self, ConsoleError> {
        style.validate()?;
        let body = document.body().ok_or(ConsoleError::MissingGlobal("body"))?;

        let element = document
            .create_element("div")
            .map_err(dom_err)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ConsoleError::Dom("created div is not an HtmlElement".to_string()))?;

        let css = element.style();
        for (property, value) in style.css_declarations() {
            css.set_property(property, &value).map_err(dom_err)?;
        }
        element.set_attribute(OVERLAY_ATTRIBUTE, "").map_err(dom_err)?;
        body.append_child(&element).map_err(dom_err)?;

        debug!("overlay mounted ({} position)", style.position.as_css());
        Ok(DomOverlay { element })
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    /// Shows `text` verbatim.
    pub fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    /// Shows trusted HTML.
    pub fn set_markup(&self, markup: &str) {
        self.element.set_inner_html(markup);
    }

    /// The text currently displayed, without markup.
    pub fn text(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    pub fn set_text_color(&self, color: &CssColor) -> Result<(), ConsoleError> {
        self.element
            .style()
            .set_property("color", &color.to_string())
            .map_err(dom_err)
    }

    /// Detaches the node from the document.
    pub fn unmount(self) {
        self.element.remove();
        debug!("overlay unmounted");
    }
}

impl OverlaySurface for DomOverlay {
    fn show(&mut self, content: &Content) -> Result<(), ConsoleError> {
        match content {
            Content::Text(text) => self.set_text(text),
            Content::Markup(markup) => self.set_markup(markup),
        }
        Ok(())
    }

    fn set_color(&mut self, color: &CssColor) -> Result<(), ConsoleError> {
        self.set_text_color(color)
    }
}

//! `extern "C"` entry points, symbol-compatible with the web runtime.
//!
//! The status block goes to stderr so it never mixes with the program's own
//! stdout output.

use std::cell::RefCell;
use std::ffi::c_char;
use std::io::Stderr;

use colored::Color;
use hud_console_common::ffi::read_cstr;
use hud_console_common::{Content, CssColor, OverlayStyle, OverlaySurface};
use log::{debug, warn};

use crate::terminal::TerminalSurface;

thread_local! {
    static OVERLAY: RefCell<Option<TerminalSurface<Stderr>>> = const { RefCell::new(None) };
}

fn with_mounted(call: &str, f: impl FnOnce(&mut TerminalSurface<Stderr>)) {
    OVERLAY.with(|slot| match slot.borrow_mut().as_mut() {
        Some(surface) => f(surface),
        None => warn!("{call} called before init_console; ignored"),
    });
}

fn init_with(style: &OverlayStyle) {
    OVERLAY.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            debug!("init_console: status block already active");
            return;
        }
        let mut surface = TerminalSurface::stderr();
        if let Err(e) = surface.set_color(&style.color) {
            // Not every CSS colour has a terminal equivalent.
            debug!("init_console: {e}; using the terminal default");
        }
        *slot = Some(surface);
    });
}

fn show(call: &str, content: Content) {
    with_mounted(call, |surface| {
        if let Err(e) = surface.show(&content) {
            warn!("{call}: {e}");
        }
    });
}

#[unsafe(no_mangle)]
pub extern "C" fn init_console() {
    init_with(&OverlayStyle::default());
}

#[unsafe(no_mangle)]
pub extern "C" fn init_console_with_style(json: *const c_char) {
    let style = unsafe { read_cstr(json) }
        .map(|json| OverlayStyle::from_json(&json))
        .transpose()
        .unwrap_or_else(|e| {
            warn!("init_console_with_style: {e}; using defaults");
            None
        })
        .unwrap_or_default();
    init_with(&style);
}

#[unsafe(no_mangle)]
pub extern "C" fn set_console_text(s: *const c_char) {
    if let Some(text) = unsafe { read_cstr(s) } {
        show("set_console_text", Content::Text(text.into_owned()));
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn set_console_markup(s: *const c_char) {
    if let Some(markup) = unsafe { read_cstr(s) } {
        show("set_console_markup", Content::Markup(markup.into_owned()));
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn set_console_color(s: *const c_char) {
    let Some(color) = (unsafe { read_cstr(s) }) else {
        return;
    };
    with_mounted("set_console_color", |surface| {
        if let Err(e) = CssColor::parse(&color).and_then(|c| surface.set_color(&c)) {
            warn!("set_console_color: {e}");
        }
    });
}

/// Drops the status block, leaving the cursor below it.
#[unsafe(no_mangle)]
pub extern "C" fn shutdown_console() {
    OVERLAY.with(|slot| {
        slot.borrow_mut().take();
    });
}

/// Whether `init_console` has run on this thread.
pub fn is_initialized() -> bool {
    OVERLAY.with(|slot| slot.borrow().is_some())
}

/// Lines of the most recent draw, if the console is active.
pub fn current_lines() -> Option<Vec<String>> {
    OVERLAY.with(|slot| slot.borrow().as_ref().map(|s| s.lines().to_vec()))
}

/// Terminal colour of the status block, if the console is active and coloured.
pub fn current_color() -> Option<Color> {
    OVERLAY.with(|slot| slot.borrow().as_ref().and_then(|s| s.color()))
}

//! `extern "C"` entry points for programs compiled into the same module.
//!
//! The C signatures carry no handle, so the bridge keeps the single overlay
//! in a thread-local slot. `init_console` is idempotent; every other call
//! made before it is ignored with a warning.

use std::cell::RefCell;
use std::ffi::c_char;

use hud_console_common::ffi::read_cstr;
use hud_console_common::{CssColor, OverlayStyle};
use log::{debug, warn};

use crate::overlay::DomOverlay;

thread_local! {
    static OVERLAY: RefCell<Option<DomOverlay>> = const { RefCell::new(None) };
}

/// Runs `f` on the bridge overlay, returning None if it is not mounted.
pub fn with_overlay<R>(f: impl FnOnce(&DomOverlay) -> R) -> Option<R> {
    OVERLAY.with(|slot| slot.borrow().as_ref().map(f))
}

fn with_mounted(call: &str, f: impl FnOnce(&DomOverlay)) {
    if with_overlay(f).is_none() {
        warn!("{call} called before init_console; ignored");
    }
}

fn init_with(style: &OverlayStyle) {
    OVERLAY.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            debug!("init_console: overlay already mounted");
            return;
        }
        match DomOverlay::mount(style) {
            Ok(overlay) => *slot = Some(overlay),
            Err(e) => warn!("init_console: {e}"),
        }
    });
}

#[unsafe(no_mangle)]
pub extern "C" fn init_console() {
    init_with(&OverlayStyle::default());
}

#[unsafe(no_mangle)]
pub extern "C" fn init_console_with_style(json: *const c_char) {
    let style = match unsafe { read_cstr(json) } {
        Some(json) => match OverlayStyle::from_json(&json) {
            Ok(style) => style,
            Err(e) => {
                warn!("init_console_with_style: {e}; using defaults");
                OverlayStyle::default()
            }
        },
        None => OverlayStyle::default(),
    };
    init_with(&style);
}

#[unsafe(no_mangle)]
pub extern "C" fn set_console_text(s: *const c_char) {
    let Some(text) = (unsafe { read_cstr(s) }) else {
        return;
    };
    with_mounted("set_console_text", |overlay| overlay.set_text(&text));
}

#[unsafe(no_mangle)]
pub extern "C" fn set_console_markup(s: *const c_char) {
    let Some(markup) = (unsafe { read_cstr(s) }) else {
        return;
    };
    with_mounted("set_console_markup", |overlay| overlay.set_markup(&markup));
}

#[unsafe(no_mangle)]
pub extern "C" fn set_console_color(s: *const c_char) {
    let Some(color) = (unsafe { read_cstr(s) }) else {
        return;
    };
    let color = match CssColor::parse(&color) {
        Ok(color) => color,
        Err(e) => {
            warn!("set_console_color: {e}");
            return;
        }
    };
    with_mounted("set_console_color", |overlay| {
        if let Err(e) = overlay.set_text_color(&color) {
            warn!("set_console_color: {e}");
        }
    });
}

/// Removes the overlay node; a later `init_console` mounts a fresh one.
#[unsafe(no_mangle)]
pub extern "C" fn shutdown_console() {
    let overlay = OVERLAY.with(|slot| slot.borrow_mut().take());
    if let Some(overlay) = overlay {
        overlay.unmount();
    }
}

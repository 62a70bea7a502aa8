//! hud-console desktop runtime — the native-call ABI of the web runtime,
//! drawing the status block on the terminal instead of the page.

pub mod bridge;
pub mod terminal;

pub use terminal::TerminalSurface;

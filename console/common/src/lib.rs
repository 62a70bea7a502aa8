//! Shared console model for the hud-console runtimes.
//!
//! The runtimes own the actual display node (a DOM `div` on the web, a
//! terminal status block on desktop); this crate owns everything that does
//! not depend on where the text ends up.

pub mod console;
pub mod content;
pub mod error;
pub mod ffi;
pub mod style;
pub mod surface;

pub use console::Console;
pub use content::Content;
pub use error::ConsoleError;
pub use style::{CssColor, CssLength, OverlayStyle, Position};
pub use surface::{MemorySurface, OverlaySurface};

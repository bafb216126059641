//! User Interface module for the portfolio viewer.
//!
//! Contains components for rendering and managing the terminal UI,
//! including event handling, application state, navigation and the
//! page renderers.
mod app;
mod event;
mod navbar;
mod pages;
mod guard;

pub mod logging;

pub use app::{App, AppMode};
pub use event::{Event, EventHandler};
pub use guard::{TerminalGuard, init_panic_hook, init_tui};
pub use navbar::Page;

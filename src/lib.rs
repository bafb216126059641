//! Termfolio Library
//!
//! A terminal rendition of a personal portfolio site: the same pages, the
//! same typewriter headline, drawn with ratatui instead of a browser.
//!
//! # Features
//!
//! - Typewriter animation cycling through the intro phrases, with a
//!   blinking cursor
//! - Seven content pages backed by an immutable content table
//! - Keyboard navigation with vim-style scrolling
//!
//! # Modules
//!
//! - `animation`: the typewriter and cursor-blink state machines
//! - `content`: the static portfolio records
//! - `ui`: terminal user interface components and event handling
pub mod animation;
pub mod content;
pub mod ui;

pub use animation::{AnimationError, CursorBlink, TypingAnimator, TypingConfig};
pub use ui::logging;
pub use ui::{App, AppMode, Event, EventHandler, Page};
pub use ui::{TerminalGuard, init_panic_hook, init_tui};

//! # cardgen-tui
//!
//! Interactive card generator using ratatui with Elm architecture.

pub mod bridge;
pub mod cards;
pub mod chart;
pub mod clipboard;
pub mod footer;
pub mod form;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod scroll;
pub mod styles;
pub mod worker;

pub use bridge::{PacingObserver, TuiBridgeObserver};
pub use clipboard::{default_clipboard, ClipboardError, ClipboardSink, Osc52Clipboard};
pub use messages::TuiMessage;
pub use model::{TuiApp, TuiSettings};
pub use scroll::ScrollState;

//! Input handling: event types, the input processor that turns raw window
//! events into per-frame snapshots, and edge scrolling.

/// Cursor-at-window-edge camera scrolling.
pub mod edge_scroll;
/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into per-frame input snapshots and commands.
pub mod processor;

pub use edge_scroll::{EdgeDirections, EdgeScrollController};
pub use event::{InputEvent, MouseButton};
pub use processor::{InputProcessor, KeyBindings, KeyCommandTag};

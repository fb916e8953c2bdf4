//! Input handling: event types, cursor tracking, and the input processor
//! that turns a frame's worth of window events into camera commands.

/// Platform-agnostic input events.
pub mod event;
/// Key-to-movement bindings.
pub mod keyboard;
/// Cursor position tracking and delta accumulation.
pub(crate) mod mouse;
/// Collects events and emits per-frame camera commands.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::KeyBindings;
pub use processor::InputProcessor;

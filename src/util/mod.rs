//! Shared utilities.

/// Per-frame elapsed time and smoothed FPS.
pub mod frame_clock;

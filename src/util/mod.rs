//! Shared utilities for driving a camera from a render loop.

/// Per-frame delta time for input integration.
pub mod frame_clock;

//! Utility Module
//!
//! - [`easing`]: interpolation curves for camera tweens
//! - [`time`]: frame timing with a deterministic injected-timestamp variant

pub mod easing;
pub mod time;

pub use time::Timer;

//! Animation Playback
//!
//! Named-clip playback state for the viewer: the clip table delivered by
//! the loader, the per-clip clock, and the pause-on-focus coupling. The
//! host's animation system does the actual track sampling.

pub mod clip;
pub mod playback;

pub use clip::Clip;
pub use playback::{AnimationPlaybackController, PlaybackStatus};

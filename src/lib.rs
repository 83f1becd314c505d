#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod config;
pub mod errors;
pub mod interactions;
pub mod scene;
pub mod utils;
pub mod viewer;

pub use animation::{AnimationPlaybackController, Clip, PlaybackStatus};
pub use config::ViewerConfig;
pub use errors::{Result, ViewerError};
pub use interactions::{
    CameraFocusController, ClickDisambiguator, ClickOutcome, HighlightStyle, HighlightTracker,
};
pub use scene::{
    BoundingVolume, EmissiveState, LeafId, OrbitCamera, PartId, PartMetadata, Scene,
};
pub use utils::Timer;
pub use viewer::{Viewer, ViewerEvent};

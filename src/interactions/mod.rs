//! Interaction Components
//!
//! The pointer-driven half of the viewer:
//! - [`HighlightTracker`]: hover/selection tinting with exact restoration
//! - [`ClickDisambiguator`]: single- vs double-click semantics
//! - [`CameraFocusController`]: eased camera framing and follow mode

pub mod click;
pub mod focus;
pub mod highlight;

pub use click::{ClickDisambiguator, ClickOutcome, DOUBLE_CLICK_WINDOW};
pub use focus::{CameraFocusController, FOCUS_TWEEN};
pub use highlight::{HighlightStyle, HighlightTracker};

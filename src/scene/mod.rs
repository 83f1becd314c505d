//! Scene Collaboration Surface
//!
//! The scene graph and renderer are owned by the host; the interaction
//! core consumes them through the [`Scene`] trait:
//! - hit-testing pointer positions into part handles
//! - querying bounding volumes for camera framing
//! - traversing drawable leaves and reading/writing their emissive state
//!
//! Only the highlight tracker ever writes leaf emissive state, which keeps
//! the original-material snapshots authoritative.

pub mod camera;
pub mod part;

pub use camera::OrbitCamera;
pub use part::{Dimensions, LeafId, PartId, PartMetadata};

use glam::{Vec2, Vec3};

/// Axis-aligned bounding volume of a part in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingVolume {
    pub center: Vec3,
    pub size: Vec3,
}

impl BoundingVolume {
    #[must_use]
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    /// Largest extent along any axis.
    #[must_use]
    pub fn max_extent(&self) -> f32 {
        self.size.max_element()
    }
}

/// Emissive portion of a leaf's material, both as live state and as the
/// restoration snapshot captured before the first highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissiveState {
    pub color: Vec3,
    pub intensity: f32,
}

/// The externally-owned scene graph as seen by the interaction core.
///
/// Implementations wrap whatever renderer the host embeds. All queries are
/// by opaque handle; a handle that no longer resolves (e.g. after a scene
/// rebuild) simply answers `None`, which every caller treats as a
/// recoverable condition.
pub trait Scene {
    /// Ray-casts a pointer position (normalized device coordinates) into
    /// the frontmost part, if any.
    fn hit_test(&self, pointer: Vec2) -> Option<PartId>;

    fn part_name(&self, part: PartId) -> Option<&str>;

    fn part_metadata(&self, part: PartId) -> Option<PartMetadata>;

    /// Group identifier used by visibility isolation, if the part has one.
    fn part_group(&self, part: PartId) -> Option<&str>;

    /// Every part currently in the scene, in traversal order.
    fn all_parts(&self) -> Vec<PartId>;

    fn set_part_visible(&mut self, part: PartId, visible: bool);

    /// World-space bounding volume of the part's current pose.
    fn bounding_volume(&self, part: PartId) -> Option<BoundingVolume>;

    /// All drawable leaves in the subtree rooted at `part`.
    fn drawable_leaves(&self, part: PartId) -> Vec<LeafId>;

    /// Current emissive state of a leaf, or `None` for a leaf with no
    /// tintable material.
    fn leaf_material(&self, leaf: LeafId) -> Option<EmissiveState>;

    fn set_leaf_emissive(&mut self, leaf: LeafId, color: Vec3, intensity: f32);
}

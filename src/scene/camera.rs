use glam::Vec3;

use crate::config::CameraConfig;
use crate::scene::BoundingVolume;

/// Minimum extent substituted for degenerate bounding volumes so framing
/// distances stay finite and positive.
pub(crate) const MIN_EXTENT: f32 = 1e-4;

/// Orbit-style camera rig: a position, a look-at target, and a vertical
/// field of view.
///
/// The rig is the single camera state shared between the host's free-orbit
/// controls and the focus controller. The interaction core writes
/// `position` and `target`; the host renderer reads them every frame to
/// build its view matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub position: Vec3,
    /// Look-at point the view is oriented toward.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl OrbitCamera {
    #[must_use]
    pub fn new(position: Vec3, fov_degrees: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::ZERO,
            fov_degrees,
            near,
            far,
        }
    }

    #[must_use]
    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(
            Vec3::from_array(config.position),
            config.fov,
            config.near,
            config.far,
        )
    }

    /// Snaps the rig so the given volume fills the frame, looking straight
    /// down the +Z axis with a 2x margin. Used once per asset load; the
    /// focus controller does its own, offset framing for individual parts.
    pub fn frame(&mut self, volume: &BoundingVolume) {
        let max_dim = volume.size.max_element().max(MIN_EXTENT);
        let tan_half_fov = (self.fov_degrees.to_radians() / 2.0).tan();
        let distance = (max_dim / 2.0 / tan_half_fov).abs() * 2.0;

        self.position = volume.center + Vec3::new(0.0, 0.0, distance);
        self.target = volume.center;
    }

    /// Unit vector from the camera toward its look-at target.
    #[must_use]
    pub fn look_dir(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

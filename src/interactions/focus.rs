use glam::Vec3;

use crate::scene::camera::MIN_EXTENT;
use crate::scene::{BoundingVolume, OrbitCamera, PartId, Scene};
use crate::utils::easing::ease_in_out_cubic;
use crate::utils::time::{Duration, Instant};

/// Length of the camera focus tween.
pub const FOCUS_TWEEN: Duration = Duration::from_millis(1000);

/// Framing margin: how much further back than the minimum fitting distance
/// the camera settles.
const FRAME_MARGIN: f32 = 2.5;

#[derive(Debug, Clone, Copy)]
struct FocusTween {
    start_position: Vec3,
    start_target: Vec3,
    end_position: Vec3,
    end_target: Vec3,
    started: Instant,
    token: u64,
}

/// Animates the camera rig toward a focused part and can track it
/// continuously while it animates.
///
/// Focus is fire-and-forget: `focus_on` returns immediately and the tween
/// completes over subsequent [`CameraFocusController::update`] calls. A
/// newer `focus_on` supersedes any tween still in flight; the token keeps
/// a stale tween from ever stepping the camera again.
#[derive(Debug)]
pub struct CameraFocusController {
    focused: Option<PartId>,
    following: bool,
    tween: Option<FocusTween>,
    token: u64,
}

impl Default for CameraFocusController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraFocusController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            focused: None,
            following: false,
            tween: None,
            token: 0,
        }
    }

    /// Frames the camera on `part`. With `animate` the rig interpolates
    /// over [`FOCUS_TWEEN`] with a cubic ease; otherwise it snaps. Either
    /// way the part becomes the follow target.
    pub fn focus_on(
        &mut self,
        scene: &dyn Scene,
        camera: &mut OrbitCamera,
        part: PartId,
        animate: bool,
        now: Instant,
    ) {
        let Some(volume) = scene.bounding_volume(part) else {
            log::warn!("focus target {part:?} has no bounding volume");
            return;
        };
        let (end_position, end_target) = Self::framing(camera.fov_degrees, &volume);

        self.focused = Some(part);
        self.following = true;
        self.token = self.token.wrapping_add(1);

        if animate {
            self.tween = Some(FocusTween {
                start_position: camera.position,
                start_target: camera.target,
                end_position,
                end_target,
                started: now,
                token: self.token,
            });
        } else {
            self.tween = None;
            camera.position = end_position;
            camera.target = end_target;
        }
    }

    /// Per-frame step. While a tween is active it owns both camera
    /// position and look-at; afterwards, while following, only the look-at
    /// is re-derived from the target's current bounding volume so an
    /// animating part stays centered without changing camera distance.
    pub fn update(&mut self, scene: &dyn Scene, camera: &mut OrbitCamera, now: Instant) {
        if let Some(tween) = self.tween {
            if tween.token != self.token {
                self.tween = None;
            } else {
                let elapsed = now.saturating_duration_since(tween.started).as_secs_f32();
                let progress = (elapsed / FOCUS_TWEEN.as_secs_f32()).clamp(0.0, 1.0);
                let eased = ease_in_out_cubic(progress);

                camera.position = tween.start_position.lerp(tween.end_position, eased);
                camera.target = tween.start_target.lerp(tween.end_target, eased);

                if progress >= 1.0 {
                    self.tween = None;
                }
                return;
            }
        }

        if self.following {
            if let Some(part) = self.focused {
                if let Some(volume) = scene.bounding_volume(part) {
                    camera.target = volume.center;
                }
            }
        }
    }

    /// Clears the focus target and stops following. The camera is left
    /// where it is; the host's free-orbit controls take over from there.
    pub fn reset(&mut self) {
        self.focused = None;
        self.following = false;
        self.tween = None;
        self.token = self.token.wrapping_add(1);
    }

    #[must_use]
    pub fn focused(&self) -> Option<PartId> {
        self.focused
    }

    #[must_use]
    pub fn is_following(&self) -> bool {
        self.following
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Derives the rest position and look-at for a volume: back off far
    /// enough that the largest extent fits the vertical fov with a 2.5x
    /// margin, offset above and to the side for a three-quarter view.
    /// Degenerate volumes are clamped so the distance stays finite.
    fn framing(fov_degrees: f32, volume: &BoundingVolume) -> (Vec3, Vec3) {
        let max_dim = volume.max_extent().max(MIN_EXTENT);
        let tan_half_fov = (fov_degrees.to_radians() / 2.0).tan();
        let distance = (max_dim / 2.0 / tan_half_fov).abs() * FRAME_MARGIN;

        let position = volume.center + Vec3::new(distance * 0.5, distance * 0.3, distance);
        (position, volume.center)
    }
}

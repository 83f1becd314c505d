//! Interaction Coordinator
//!
//! [`Viewer`] wires pointer events from the host's scene into the
//! highlight tracker, click disambiguator, focus controller, and playback
//! controller, and surfaces the resulting state to the UI views through a
//! single-subscriber event sink.
//!
//! Everything is injected: the scene comes in on every call, timestamps
//! come from the host's frame loop, and the view layer registers a
//! listener. The coordinator holds no ambient state of its own.
//!
//! Call order per frame: deliver pointer/UI events first, then
//! [`Viewer::update`], then render — highlight changes are always applied
//! before the frame they belong to.

use glam::Vec2;

use crate::animation::{AnimationPlaybackController, Clip, PlaybackStatus};
use crate::config::ViewerConfig;
use crate::interactions::{
    CameraFocusController, ClickDisambiguator, ClickOutcome, HighlightTracker,
};
use crate::scene::{OrbitCamera, PartId, PartMetadata, Scene};
use crate::utils::Timer;
use crate::utils::time::Instant;

/// Display command published to the UI views.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    HoverChanged(Option<PartId>),
    SelectionChanged(Option<PartId>),
    /// Open the detail view with this part's metadata.
    ShowDetails(PartMetadata),
    HideDetails,
    PlaybackChanged(PlaybackStatus),
}

type EventSink = Box<dyn FnMut(ViewerEvent)>;

/// The viewer's interaction logic for one loaded asset session.
pub struct Viewer {
    config: ViewerConfig,
    camera: OrbitCamera,
    highlight: HighlightTracker,
    clicks: ClickDisambiguator,
    focus: CameraFocusController,
    playback: AnimationPlaybackController,
    root: Option<PartId>,
    hovered: Option<PartId>,
    selected: Option<PartId>,
    sink: Option<EventSink>,
    timer: Timer,
    last_status: Option<PlaybackStatus>,
}

impl Viewer {
    #[must_use]
    pub fn new(config: ViewerConfig) -> Self {
        let camera = OrbitCamera::from_config(&config.camera);
        let highlight = HighlightTracker::from_config(&config.highlight);
        let playback = AnimationPlaybackController::new(config.animations.pause_on_focus);
        Self {
            config,
            camera,
            highlight,
            clicks: ClickDisambiguator::new(),
            focus: CameraFocusController::new(),
            playback,
            root: None,
            hovered: None,
            selected: None,
            sink: None,
            timer: Timer::new(),
            last_status: None,
        }
    }

    /// Registers the UI event listener. Single-subscriber: a later call
    /// replaces the earlier listener.
    pub fn set_listener(&mut self, listener: impl FnMut(ViewerEvent) + 'static) {
        self.sink = Some(Box::new(listener));
    }

    // ========================================================================
    // Asset lifecycle
    // ========================================================================

    /// Loader callback: a new asset subtree and its clips are ready.
    ///
    /// Rebuilds the tracked root, drops all highlight state (the old
    /// leaves no longer exist), resets focus, rebuilds the clip table with
    /// the configured default, frames the camera on the new root, and
    /// honors the autoplay flag.
    pub fn on_asset_ready(&mut self, scene: &mut dyn Scene, root: PartId, clips: Vec<Clip>) {
        self.root = Some(root);
        self.hovered = None;
        self.selected = None;
        self.highlight.reset();
        self.focus.reset();

        self.playback
            .set_clips(clips, self.config.animations.default_clip.as_deref());

        if let Some(volume) = scene.bounding_volume(root) {
            self.camera.frame(&volume);
        } else {
            log::warn!("loaded asset root {root:?} has no bounding volume");
        }

        if self.config.animations.auto_play {
            self.playback.play(None);
        }
        self.publish_playback(true);
    }

    // ========================================================================
    // Pointer events
    // ========================================================================

    /// Pointer moved: hit-test and update the hover highlight. Fires only
    /// on actual hover changes.
    pub fn pointer_move(&mut self, scene: &mut dyn Scene, pointer: Vec2) {
        if !self.config.enable_selection {
            return;
        }
        let hit = scene.hit_test(pointer);
        if hit == self.hovered {
            return;
        }
        self.hovered = hit;
        self.highlight.set_hover(scene, hit);
        self.emit(ViewerEvent::HoverChanged(hit));
    }

    /// Pointer clicked. A miss clears the selection; a hit selects
    /// immediately (visual feedback never waits out the click window) and
    /// feeds the disambiguator.
    pub fn pointer_click(&mut self, scene: &mut dyn Scene, pointer: Vec2, now: Instant) {
        if !self.config.enable_selection {
            return;
        }
        match scene.hit_test(pointer) {
            None => {
                self.clear_selection(scene);
                let _cleared = self.clicks.pointer_miss();
            }
            Some(part) => {
                self.selected = Some(part);
                self.highlight.set_selection(scene, Some(part));
                self.emit(ViewerEvent::SelectionChanged(Some(part)));

                if let Some(flushed) = self.clicks.pointer_hit(part, now) {
                    self.handle_click_outcome(scene, flushed, now);
                }
            }
        }
    }

    /// External clear command (e.g. the escape key): hides the detail
    /// view, releases the camera, and restores all selected materials.
    pub fn clear_selection(&mut self, scene: &mut dyn Scene) {
        self.emit(ViewerEvent::HideDetails);
        self.focus.reset();
        self.selected = None;
        self.highlight.set_selection(scene, None);
        self.emit(ViewerEvent::SelectionChanged(None));
    }

    // ========================================================================
    // Frame loop
    // ========================================================================

    /// Per-frame step, called once before rendering: resolves the click
    /// window, advances the focus tween/follow, and ticks playback.
    pub fn update(&mut self, scene: &mut dyn Scene, now: Instant) {
        let dt = self.timer.tick_at(now);

        if let Some(outcome) = self.clicks.poll(now) {
            self.handle_click_outcome(scene, outcome, now);
        }

        self.focus.update(scene, &mut self.camera, now);

        self.playback.tick(dt.as_secs_f32());
        self.publish_playback(false);
    }

    fn handle_click_outcome(&mut self, scene: &mut dyn Scene, outcome: ClickOutcome, now: Instant) {
        match outcome {
            ClickOutcome::Single(part) => {
                self.focus.focus_on(scene, &mut self.camera, part, true, now);
                self.playback.on_focus_enter();
                self.publish_playback(false);
            }
            ClickOutcome::Double(part) => {
                let metadata = self.metadata_of(scene, part);
                self.emit(ViewerEvent::ShowDetails(metadata));
            }
            // The miss that produced this already cleared the selection.
            ClickOutcome::Cleared => {}
        }
    }

    // ========================================================================
    // UI commands
    // ========================================================================

    /// Starts the named clip, or the current one.
    pub fn request_play(&mut self, name: Option<&str>) {
        self.playback.play(name);
        self.publish_playback(false);
    }

    pub fn request_pause(&mut self) {
        self.playback.pause();
        self.publish_playback(false);
    }

    /// The play button: resumes after a focus pause when one is pending,
    /// otherwise toggles play/pause.
    pub fn request_toggle(&mut self) {
        if self.playback.was_playing_before_focus() && !self.playback.is_playing() {
            self.playback.on_focus_resume();
        } else {
            self.playback.toggle();
        }
        self.publish_playback(false);
    }

    /// Explicit resume of a clip the focus gesture paused.
    pub fn request_resume(&mut self) {
        self.playback.on_focus_resume();
        self.publish_playback(false);
    }

    pub fn request_reset(&mut self) {
        self.playback.reset();
        self.publish_playback(false);
    }

    /// Scrubber seek with a normalized position in `[0, 1]`.
    pub fn request_seek(&mut self, normalized: f32) {
        self.playback.seek_normalized(normalized);
        self.publish_playback(false);
    }

    pub fn request_set_speed(&mut self, multiplier: f32) {
        self.playback.set_speed(multiplier);
    }

    /// Shows only the parts belonging to `group_id`; parts in other groups
    /// are hidden, parts without a group are untouched.
    pub fn request_isolate_group(&mut self, scene: &mut dyn Scene, group_id: &str) {
        for part in scene.all_parts() {
            let shown = scene.part_group(part).map(|group| group == group_id);
            if let Some(visible) = shown {
                scene.set_part_visible(part, visible);
            }
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Metadata for the detail view, falling back to a constructed record
    /// when the part carries none.
    #[must_use]
    pub fn metadata_of(&self, scene: &dyn Scene, part: PartId) -> PartMetadata {
        scene
            .part_metadata(part)
            .unwrap_or_else(|| PartMetadata::fallback(scene.part_name(part)))
    }

    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Mutable rig access for the host's free-orbit controls.
    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    #[must_use]
    pub fn selected_part(&self) -> Option<PartId> {
        self.selected
    }

    #[must_use]
    pub fn hovered_part(&self) -> Option<PartId> {
        self.hovered
    }

    #[must_use]
    pub fn root(&self) -> Option<PartId> {
        self.root
    }

    #[must_use]
    pub fn playback(&self) -> &AnimationPlaybackController {
        &self.playback
    }

    #[must_use]
    pub fn focus(&self) -> &CameraFocusController {
        &self.focus
    }

    #[must_use]
    pub fn highlight(&self) -> &HighlightTracker {
        &self.highlight
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    // ========================================================================
    // Event plumbing
    // ========================================================================

    fn emit(&mut self, event: ViewerEvent) {
        if let Some(sink) = self.sink.as_mut() {
            sink(event);
        }
    }

    /// Publishes playback state when the reported tuple actually changed,
    /// so the timeline view is not spammed with identical frames.
    fn publish_playback(&mut self, force: bool) {
        let status = self.playback.status();
        if force || self.last_status.as_ref() != Some(&status) {
            self.last_status = Some(status.clone());
            self.emit(ViewerEvent::PlaybackChanged(status));
        }
    }
}

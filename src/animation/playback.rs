use crate::animation::clip::Clip;
use crate::errors::{Result, ViewerError};

/// Snapshot of playback state published to the timeline view.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackStatus {
    pub clip: Option<String>,
    pub playing: bool,
    /// Current position in seconds within the clip.
    pub time: f32,
    pub duration: f32,
}

/// Owns named-clip playback state: which clip is current, whether time is
/// advancing, the local clock, and the pause-on-focus coupling.
///
/// The controller never drives itself; the render loop calls
/// [`AnimationPlaybackController::tick`] with the frame delta, and the
/// host's animation system samples whatever `current_time` reports.
#[derive(Debug)]
pub struct AnimationPlaybackController {
    clips: Vec<Clip>,
    current: Option<usize>,
    time: f32,
    speed: f32,
    playing: bool,
    was_playing_before_focus: bool,
    pause_on_focus: bool,
}

impl AnimationPlaybackController {
    #[must_use]
    pub fn new(pause_on_focus: bool) -> Self {
        Self {
            clips: Vec::new(),
            current: None,
            time: 0.0,
            speed: 1.0,
            playing: false,
            was_playing_before_focus: false,
            pause_on_focus,
        }
    }

    /// Replaces the clip table at asset-load time. The current clip becomes
    /// `default_clip` when that name exists, otherwise the first loaded
    /// clip; playback starts out paused at time 0.
    pub fn set_clips(&mut self, clips: Vec<Clip>, default_clip: Option<&str>) {
        self.clips = clips;
        self.time = 0.0;
        self.playing = false;
        self.was_playing_before_focus = false;

        self.current = match default_clip {
            Some(name) => {
                let found = self.index_of(name);
                if found.is_none() {
                    log::warn!("default clip {name:?} not in loaded clips, using first");
                }
                found.or_else(|| (!self.clips.is_empty()).then_some(0))
            }
            None => (!self.clips.is_empty()).then_some(0),
        };
    }

    /// Starts the named clip (or the current one) looping indefinitely.
    /// Replaying the current clip resumes from its position; switching
    /// clips starts the new clip's clock at 0. An unknown name or an empty
    /// clip table is a warning, not a failure.
    pub fn play(&mut self, name: Option<&str>) {
        if self.clips.is_empty() {
            log::warn!("play requested before any animation clips were loaded");
            return;
        }
        let target = match name {
            Some(requested) => match self.index_of(requested) {
                Some(index) => index,
                None => {
                    log::warn!("animation clip {requested:?} not found");
                    return;
                }
            },
            None => match self.current {
                Some(index) => index,
                None => return,
            },
        };

        if self.current != Some(target) {
            self.current = Some(target);
            self.time = 0.0;
        }
        self.playing = true;
    }

    /// Stops advancing time without losing position.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Flips between playing and paused, keeping position.
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Rewinds to time 0 and pauses.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.playing = false;
    }

    /// Repositions the clock, clamped into `[0, duration]`, without
    /// changing play state.
    pub fn seek(&mut self, seconds: f32) {
        if let Some(duration) = self.current_duration() {
            self.time = seconds.clamp(0.0, duration);
        }
    }

    /// Scrubber entry point: a normalized position in `[0, 1]` mapped onto
    /// the current clip's duration.
    pub fn seek_normalized(&mut self, normalized: f32) {
        if let Some(duration) = self.current_duration() {
            self.time = normalized.clamp(0.0, 1.0) * duration;
        }
    }

    /// Playback rate multiplier applied to every tick.
    pub fn set_speed(&mut self, multiplier: f32) {
        self.speed = multiplier;
    }

    /// Focus-gesture hook: pauses and remembers that playback was running,
    /// so a later resume restores it. A clip the user had already paused is
    /// left alone.
    pub fn on_focus_enter(&mut self) {
        if self.pause_on_focus && self.playing {
            self.was_playing_before_focus = true;
            self.pause();
        }
    }

    /// Resumes only if [`AnimationPlaybackController::on_focus_enter`]
    /// paused a running clip, then clears the flag.
    pub fn on_focus_resume(&mut self) {
        if self.was_playing_before_focus {
            self.playing = true;
            self.was_playing_before_focus = false;
        }
    }

    /// Advances the clock by a frame delta (seconds) while playing. Clips
    /// loop indefinitely: time wraps modulo duration in both directions.
    pub fn tick(&mut self, dt: f32) {
        if !self.playing {
            return;
        }
        let Some(duration) = self.current_duration() else {
            return;
        };
        if duration <= 0.0 {
            return;
        }

        self.time += dt * self.speed;
        if self.time >= duration {
            self.time %= duration;
        } else if self.time < 0.0 {
            self.time = duration + (self.time % duration);
        }
    }

    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus {
            clip: self.current_clip().map(str::to_string),
            playing: self.playing,
            time: self.time,
            duration: self.current_duration().unwrap_or(0.0),
        }
    }

    /// Looks up a clip by name.
    pub fn clip(&self, name: &str) -> Result<&Clip> {
        self.index_of(name)
            .map(|index| &self.clips[index])
            .ok_or_else(|| ViewerError::ClipNotFound(name.to_string()))
    }

    #[must_use]
    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    #[must_use]
    pub fn current_clip(&self) -> Option<&str> {
        self.current.map(|index| self.clips[index].name.as_str())
    }

    #[must_use]
    pub fn current_time(&self) -> f32 {
        self.time
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn was_playing_before_focus(&self) -> bool {
        self.was_playing_before_focus
    }

    #[must_use]
    pub fn pause_on_focus(&self) -> bool {
        self.pause_on_focus
    }

    fn current_duration(&self) -> Option<f32> {
        self.current.map(|index| self.clips[index].duration)
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.clips.iter().position(|clip| clip.name == name)
    }
}

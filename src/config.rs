//! Viewer Configuration
//!
//! Value-only configuration records for the embeddable viewer. Cascading
//! works through `#[serde(default)]`: any field a host omits falls back to
//! the crate default, so partial configs merge without bespoke logic.
//!
//! The lighting and UI sections are consumed by the host's renderer and
//! view layer; the interaction core itself only reads the camera,
//! highlight, and animation sections.

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Top-level viewer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Master switch for hover/click part interaction.
    pub enable_selection: bool,
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
    pub highlight: HighlightConfig,
    pub animations: AnimationSettings,
    pub ui: UiConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            enable_selection: true,
            camera: CameraConfig::default(),
            lighting: LightingConfig::default(),
            highlight: HighlightConfig::default(),
            animations: AnimationSettings::default(),
            ui: UiConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Parses a configuration from JSON text. Omitted fields cascade to
    /// their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Perspective camera parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Initial camera position before any asset is framed.
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            position: [5.0, 5.0, 5.0],
        }
    }
}

/// Lighting values handed through to the host renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient: AmbientLightConfig,
    pub directional: DirectionalLightConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientLightConfig {
    pub enabled: bool,
    pub color: [f32; 3],
    pub intensity: f32,
}

impl Default for AmbientLightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: [1.0, 1.0, 1.0],
            intensity: 0.6,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionalLightConfig {
    pub enabled: bool,
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: [f32; 3],
    pub cast_shadow: bool,
}

impl Default for DirectionalLightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: [1.0, 1.0, 1.0],
            intensity: 0.8,
            position: [10.0, 10.0, 10.0],
            cast_shadow: true,
        }
    }
}

/// Hover and selection tint styling.
///
/// Selection intensity is kept strictly above hover intensity so the two
/// states stay visually distinguishable on the same surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub hover_color: [f32; 3],
    pub hover_intensity: f32,
    pub selection_color: [f32; 3],
    pub selection_intensity: f32,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            // #667eea
            hover_color: [0.4, 0.494, 0.918],
            hover_intensity: 0.30,
            // #3cb371
            selection_color: [0.235, 0.702, 0.443],
            selection_intensity: 0.35,
        }
    }
}

/// Playback behavior flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Pause a running clip when a single-click focus gesture lands.
    pub pause_on_focus: bool,
    /// Start the default clip as soon as an asset is loaded.
    pub auto_play: bool,
    /// Clip selected at load time; falls back to the first loaded clip.
    pub default_clip: Option<String>,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            pause_on_focus: true,
            auto_play: false,
            default_clip: None,
        }
    }
}

/// UI layout values for the host's view layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub panel: PanelKind,
    /// Extra CSS class applied by web hosts when `panel` is [`PanelKind::Changed`].
    pub custom_css_class: Option<String>,
}

/// Which control panel the host renders around the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    /// Built-in panel layout.
    #[default]
    Standard,
    /// Built-in layout with host styling applied.
    Changed,
    /// Host provides its own panel and drives the viewer through commands.
    Custom,
}

use serde::{Deserialize, Serialize};

/// Opaque handle to a named node in the externally-owned scene graph.
///
/// The host renderer mints these when it builds its scene; the interaction
/// core never dereferences them except through the [`Scene`] trait.
///
/// [`Scene`]: crate::scene::Scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartId(pub u64);

/// Opaque handle to a drawable leaf (a renderable surface under a part
/// whose emissive state can be tinted for highlighting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LeafId(pub u64);

/// Descriptive record attached to a part, surfaced by the detail view on
/// a double-click. Validated at the loader boundary; inside the
/// interaction core every field is already well-typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartMetadata {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub weight: Option<f32>,
    #[serde(default)]
    pub documentation: Vec<String>,
    #[serde(default)]
    pub group_id: Option<String>,
}

impl PartMetadata {
    /// Default record shown for a part that carries no explicit metadata.
    #[must_use]
    pub fn fallback(name: Option<&str>) -> Self {
        Self {
            name: name.unwrap_or("Unnamed part").to_string(),
            description: "none".to_string(),
            material: None,
            dimensions: None,
            weight: None,
            documentation: Vec::new(),
            group_id: None,
        }
    }
}

/// Physical extents recorded in part metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

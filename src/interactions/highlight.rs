use glam::Vec3;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::HighlightConfig;
use crate::scene::{EmissiveState, LeafId, PartId, Scene};

/// Tint applied to one highlight axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightStyle {
    pub color: Vec3,
    pub intensity: f32,
}

impl HighlightStyle {
    #[must_use]
    pub fn new(color: Vec3, intensity: f32) -> Self {
        Self { color, intensity }
    }
}

/// Owns the hovered/selected leaf sets and the original-material snapshots.
///
/// Two axes of highlight exist per leaf: hover and selection. Selection
/// always wins visually. A leaf's original emissive values are captured at
/// most once, before its first tint; every later restore reads that
/// snapshot, never a previously-tinted value. No other component writes
/// leaf emissive state.
#[derive(Debug)]
pub struct HighlightTracker {
    hovered: FxHashSet<LeafId>,
    selected: FxHashSet<LeafId>,
    snapshots: FxHashMap<LeafId, EmissiveState>,
    hover_style: HighlightStyle,
    selection_style: HighlightStyle,
}

impl HighlightTracker {
    #[must_use]
    pub fn new(hover_style: HighlightStyle, selection_style: HighlightStyle) -> Self {
        Self {
            hovered: FxHashSet::default(),
            selected: FxHashSet::default(),
            snapshots: FxHashMap::default(),
            hover_style,
            selection_style,
        }
    }

    #[must_use]
    pub fn from_config(config: &HighlightConfig) -> Self {
        Self::new(
            HighlightStyle::new(Vec3::from_array(config.hover_color), config.hover_intensity),
            HighlightStyle::new(
                Vec3::from_array(config.selection_color),
                config.selection_intensity,
            ),
        )
    }

    /// Replaces the hover axis with the leaves under `part` (empty for
    /// `None`). Idempotent for repeated identical input.
    pub fn set_hover(&mut self, scene: &mut dyn Scene, part: Option<PartId>) {
        let next = Self::collect_leaves(scene, part);

        let released: Vec<LeafId> = self.hovered.difference(&next).copied().collect();
        for leaf in released {
            if self.selected.contains(&leaf) {
                // Still selected: the selection tint stays in charge.
                self.tint(scene, leaf, self.selection_style);
            } else {
                self.restore(scene, leaf);
            }
        }

        for &leaf in &next {
            if !self.selected.contains(&leaf) {
                self.tint(scene, leaf, self.hover_style);
            }
        }
        self.hovered = next;
    }

    /// Replaces the selection axis with the leaves under `part`. Selected
    /// leaves render with the selection tint regardless of hover state.
    pub fn set_selection(&mut self, scene: &mut dyn Scene, part: Option<PartId>) {
        let next = Self::collect_leaves(scene, part);

        let released: Vec<LeafId> = self.selected.difference(&next).copied().collect();
        for leaf in released {
            if self.hovered.contains(&leaf) {
                self.tint(scene, leaf, self.hover_style);
            } else {
                self.restore(scene, leaf);
            }
        }

        for &leaf in &next {
            self.tint(scene, leaf, self.selection_style);
        }
        self.selected = next;
    }

    /// Drops all tracked leaves and snapshots without touching the scene.
    /// Called when an asset is replaced and the old leaves no longer exist.
    pub fn reset(&mut self) {
        self.hovered.clear();
        self.selected.clear();
        self.snapshots.clear();
    }

    #[must_use]
    pub fn hovered(&self) -> &FxHashSet<LeafId> {
        &self.hovered
    }

    #[must_use]
    pub fn selected(&self) -> &FxHashSet<LeafId> {
        &self.selected
    }

    fn collect_leaves(scene: &dyn Scene, part: Option<PartId>) -> FxHashSet<LeafId> {
        part.map(|p| scene.drawable_leaves(p).into_iter().collect())
            .unwrap_or_default()
    }

    /// Tints a leaf, capturing its original emissive values first if this
    /// is the leaf's first highlight. A leaf with no tintable material is
    /// skipped.
    fn tint(&mut self, scene: &mut dyn Scene, leaf: LeafId, style: HighlightStyle) {
        let Some(current) = scene.leaf_material(leaf) else {
            return;
        };
        self.snapshots.entry(leaf).or_insert(current);
        scene.set_leaf_emissive(leaf, style.color, style.intensity);
    }

    /// Restores a leaf to its captured snapshot. The snapshot entry is
    /// kept, so later highlight cycles keep reading the true original.
    fn restore(&mut self, scene: &mut dyn Scene, leaf: LeafId) {
        if let Some(snapshot) = self.snapshots.get(&leaf) {
            scene.set_leaf_emissive(leaf, snapshot.color, snapshot.intensity);
        }
    }
}

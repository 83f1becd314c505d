//! Shared test fixture: an in-memory [`Scene`] implementation that records
//! emissive writes and lets tests script hit-test results.
#![allow(dead_code)]

use std::collections::HashMap;

use glam::{Vec2, Vec3};

use vitrine::scene::{BoundingVolume, EmissiveState, LeafId, PartId, PartMetadata, Scene};

struct PartEntry {
    id: PartId,
    name: String,
    group: Option<String>,
    metadata: Option<PartMetadata>,
    leaves: Vec<LeafId>,
    volume: BoundingVolume,
    visible: bool,
}

pub struct MockScene {
    parts: Vec<PartEntry>,
    materials: HashMap<LeafId, EmissiveState>,
    /// What `hit_test` answers, regardless of pointer position.
    pub hit: Option<PartId>,
}

impl MockScene {
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            materials: HashMap::new(),
            hit: None,
        }
    }

    pub fn add_part(&mut self, id: u64, name: &str) -> PartId {
        let part = PartId(id);
        self.parts.push(PartEntry {
            id: part,
            name: name.to_string(),
            group: None,
            metadata: None,
            leaves: Vec::new(),
            volume: BoundingVolume::new(Vec3::ZERO, Vec3::ONE),
            visible: true,
        });
        part
    }

    /// Adds a drawable leaf with a tintable material.
    pub fn add_leaf(&mut self, part: PartId, id: u64, original: EmissiveState) -> LeafId {
        let leaf = LeafId(id);
        self.entry_mut(part).leaves.push(leaf);
        self.materials.insert(leaf, original);
        leaf
    }

    /// Adds a drawable leaf with no material (nothing to tint).
    pub fn add_bare_leaf(&mut self, part: PartId, id: u64) -> LeafId {
        let leaf = LeafId(id);
        self.entry_mut(part).leaves.push(leaf);
        leaf
    }

    pub fn set_volume(&mut self, part: PartId, center: Vec3, size: Vec3) {
        self.entry_mut(part).volume = BoundingVolume::new(center, size);
    }

    pub fn set_metadata(&mut self, part: PartId, metadata: PartMetadata) {
        self.entry_mut(part).metadata = Some(metadata);
    }

    pub fn set_group(&mut self, part: PartId, group: &str) {
        self.entry_mut(part).group = Some(group.to_string());
    }

    /// Current emissive state of a leaf, as the renderer would see it.
    pub fn emissive(&self, leaf: LeafId) -> Option<EmissiveState> {
        self.materials.get(&leaf).copied()
    }

    pub fn is_visible(&self, part: PartId) -> bool {
        self.entry(part).visible
    }

    fn entry(&self, part: PartId) -> &PartEntry {
        self.parts
            .iter()
            .find(|entry| entry.id == part)
            .expect("unknown part in fixture")
    }

    fn entry_mut(&mut self, part: PartId) -> &mut PartEntry {
        self.parts
            .iter_mut()
            .find(|entry| entry.id == part)
            .expect("unknown part in fixture")
    }
}

impl Scene for MockScene {
    fn hit_test(&self, _pointer: Vec2) -> Option<PartId> {
        self.hit
    }

    fn part_name(&self, part: PartId) -> Option<&str> {
        self.parts
            .iter()
            .find(|entry| entry.id == part)
            .map(|entry| entry.name.as_str())
    }

    fn part_metadata(&self, part: PartId) -> Option<PartMetadata> {
        self.parts
            .iter()
            .find(|entry| entry.id == part)
            .and_then(|entry| entry.metadata.clone())
    }

    fn part_group(&self, part: PartId) -> Option<&str> {
        self.parts
            .iter()
            .find(|entry| entry.id == part)
            .and_then(|entry| entry.group.as_deref())
    }

    fn all_parts(&self) -> Vec<PartId> {
        self.parts.iter().map(|entry| entry.id).collect()
    }

    fn set_part_visible(&mut self, part: PartId, visible: bool) {
        if let Some(entry) = self.parts.iter_mut().find(|entry| entry.id == part) {
            entry.visible = visible;
        }
    }

    fn bounding_volume(&self, part: PartId) -> Option<BoundingVolume> {
        self.parts
            .iter()
            .find(|entry| entry.id == part)
            .map(|entry| entry.volume)
    }

    fn drawable_leaves(&self, part: PartId) -> Vec<LeafId> {
        self.parts
            .iter()
            .find(|entry| entry.id == part)
            .map(|entry| entry.leaves.clone())
            .unwrap_or_default()
    }

    fn leaf_material(&self, leaf: LeafId) -> Option<EmissiveState> {
        self.materials.get(&leaf).copied()
    }

    fn set_leaf_emissive(&mut self, leaf: LeafId, color: Vec3, intensity: f32) {
        if let Some(state) = self.materials.get_mut(&leaf) {
            *state = EmissiveState { color, intensity };
        }
    }
}

//! Server-side radar blip bookkeeping. Blips stay on the server because the
//! client should only ever see the assembled snapshot, not the entities
//! behind it.

use ahash::AHashMap;
use glam::DVec2;

use crate::models::{FloatType, GridId};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BlipId(pub u32);

#[derive(Clone, Debug)]
pub struct Blip {
    pub pos: DVec2,
    pub scale: FloatType,
    pub color: [u8; 3],
    /// Suppress this blip while the source is parented to a grid; grid hulls
    /// already show up on radar by themselves.
    pub require_no_grid: bool,
    pub grid: Option<GridId>,
}

impl Blip {
    pub fn new(pos: DVec2) -> Self {
        Self {
            pos,
            scale: 1.0,
            color: [255, 0, 0],
            require_no_grid: true,
            grid: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct BlipRegistry {
    blips: AHashMap<BlipId, Blip>,
}

impl BlipRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: BlipId, blip: Blip) {
        self.blips.insert(id, blip);
    }

    pub fn remove(&mut self, id: BlipId) {
        self.blips.remove(&id);
    }

    pub fn get(&self, id: BlipId) -> Option<&Blip> {
        self.blips.get(&id)
    }

    pub fn get_mut(&mut self, id: BlipId) -> Option<&mut Blip> {
        self.blips.get_mut(&id)
    }

    /// Assemble the payload answering one radar request: position, scale and
    /// color per visible blip.
    pub fn snapshot(&self) -> Vec<(DVec2, FloatType, [u8; 3])> {
        self.blips
            .values()
            .filter(|blip| !(blip.require_no_grid && blip.grid.is_some()))
            .map(|blip| (blip.pos, blip.scale, blip.color))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_filters_grid_parented_blips() {
        let mut registry = BlipRegistry::new();
        registry.insert(BlipId(1), Blip::new(DVec2::new(10.0, 0.0)));

        let mut parented = Blip::new(DVec2::new(20.0, 0.0));
        parented.grid = Some(GridId(3));
        registry.insert(BlipId(2), parented);

        let mut shown_anyway = Blip::new(DVec2::new(30.0, 0.0));
        shown_anyway.grid = Some(GridId(3));
        shown_anyway.require_no_grid = false;
        registry.insert(BlipId(3), shown_anyway);

        let mut snapshot = registry.snapshot();
        snapshot.sort_by(|a, b| a.0.x.partial_cmp(&b.0.x).unwrap());
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].0, DVec2::new(10.0, 0.0));
        assert_eq!(snapshot[1].0, DVec2::new(30.0, 0.0));
    }

    #[test]
    fn remove_drops_blip() {
        let mut registry = BlipRegistry::new();
        registry.insert(BlipId(1), Blip::new(DVec2::ZERO));
        registry.remove(BlipId(1));
        assert!(registry.get(BlipId(1)).is_none());
        assert!(registry.snapshot().is_empty());
    }

    #[test]
    fn defaults_match_component_fields() {
        let blip = Blip::new(DVec2::ZERO);
        assert_eq!(blip.scale, 1.0);
        assert_eq!(blip.color, [255, 0, 0]);
        assert!(blip.require_no_grid);
    }
}

//! World-zone placement: a square grid of zones centered on the map origin,
//! one zone per world chunk. A zone packages a biome id plus aesthetics; the
//! host engine applies the biome, this module only answers "which zone is
//! this chunk in".

use anyhow::{bail, Result};
use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use crate::constants::CHUNK_SIZE;

/// Convert world coordinates to chunk coordinates.
pub fn world_to_chunk(pos: DVec2) -> IVec2 {
    (pos / CHUNK_SIZE as f64).floor().as_ivec2()
}

/// Convert chunk coordinates to the world position of the chunk's corner.
pub fn chunk_to_world(chunk: IVec2) -> DVec2 {
    chunk.as_dvec2() * CHUNK_SIZE as f64
}

/// Convert chunk coordinates to the world position of the chunk's center.
pub fn chunk_to_world_centered(chunk: IVec2) -> DVec2 {
    chunk_to_world(chunk) + DVec2::splat(CHUNK_SIZE as f64 * 0.5)
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ZoneSpec {
    pub id: String,
    /// Biome the engine applies to chunks in this zone.
    pub biome: String,
    #[serde(default)]
    pub aesthetics: Option<String>,
    /// Chunk coordinates this zone paints over the default fill.
    #[serde(default)]
    pub tiles: Vec<IVec2>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ZoneSetupSpec {
    /// Inradius of the zone square: the grid covers chunk coordinates in
    /// `[-inradius, inradius)` on both axes.
    pub inradius: i32,
    pub default_zone: String,
    /// Zone for chunks outside the square; falls back to the default zone.
    #[serde(default)]
    pub oob_zone: Option<String>,
    pub zones: Vec<ZoneSpec>,
}

/// Built zone table: a flat row-major array of indices into the zone list,
/// filled with the default zone and painted over with each zone's tiles.
#[derive(Debug)]
pub struct ZoneSetup {
    inradius: i32,
    zones: Vec<ZoneSpec>,
    default_index: usize,
    oob_index: usize,
    cells: Vec<usize>,
}

impl ZoneSetup {
    pub fn build(spec: &ZoneSetupSpec) -> Result<Self> {
        if spec.inradius < 1 {
            bail!("Zone setup covers an empty or negative area (inradius {})", spec.inradius);
        }

        let zone_index = |id: &str| spec.zones.iter().position(|zone| zone.id == id);
        let default_index = match zone_index(&spec.default_zone) {
            Some(index) => index,
            None => bail!("Unknown default zone {}", spec.default_zone),
        };
        let oob_index = match spec.oob_zone.as_deref() {
            Some(id) => match zone_index(id) {
                Some(index) => index,
                None => bail!("Unknown out-of-bounds zone {}", id),
            },
            None => default_index,
        };

        let side = (spec.inradius * 2) as usize;
        let mut setup = Self {
            inradius: spec.inradius,
            zones: spec.zones.clone(),
            default_index,
            oob_index,
            cells: vec![default_index; side * side],
        };

        // Paint each zone's tiles over the default fill.
        for (index, zone) in setup.zones.iter().enumerate() {
            for &tile in zone.tiles.iter() {
                match setup.cell_index(tile) {
                    Some(cell) => setup.cells[cell] = index,
                    None => log::warn!("zone {} tile {:?} is outside the zone square", zone.id, tile),
                }
            }
        }
        Ok(setup)
    }

    pub fn side(&self) -> i32 {
        self.inradius * 2
    }

    fn cell_index(&self, chunk: IVec2) -> Option<usize> {
        let x = chunk.x + self.inradius;
        let y = chunk.y + self.inradius;
        if x < 0 || y < 0 || x >= self.side() || y >= self.side() {
            None
        } else {
            Some((y * self.side() + x) as usize)
        }
    }

    /// Zone occupying the given chunk; chunks outside the square get the
    /// out-of-bounds zone.
    pub fn zone_at(&self, chunk: IVec2) -> &ZoneSpec {
        match self.cell_index(chunk) {
            Some(cell) => &self.zones[self.cells[cell]],
            None => &self.zones[self.oob_index],
        }
    }

    pub fn default_zone(&self) -> &ZoneSpec {
        &self.zones[self.default_index]
    }
}

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::models::FloatType;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TurretId(pub u32);

/// One object anchored to a ship grid, as reported by the host engine.
/// Only the position and the two collision flags matter here; no identity is
/// kept beyond a single range computation.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct GridObject {
    /// Position in the grid's local frame.
    pub pos: DVec2,
    /// Fixed in place.
    pub anchored: bool,
    /// Participates in solid collision.
    pub hard: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Turret {
    pub id: TurretId,
    /// Position in the grid's local frame.
    pub pos: DVec2,
    /// Maximum projectile dispersion of the mounted gun, radians.
    pub max_spread: FloatType,
    /// Extra clearance configured per turret, radians. Projectiles vary in
    /// size and large ones need more room than the tile grid suggests, so
    /// this is set by hand on the turret.
    #[serde(default)]
    pub clearance: FloatType,
}

/// Snapshot of everything on one ship grid that matters for range
/// computation. The caller assembles this from the engine's entity state;
/// each refresh recomputes from the snapshot it is handed.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ShipLayout {
    #[serde(default)]
    pub objects: Vec<GridObject>,
    #[serde(default)]
    pub turrets: Vec<Turret>,
}

impl ShipLayout {
    pub fn turret(&self, id: TurretId) -> Option<&Turret> {
        self.turrets.iter().find(|turret| turret.id == id)
    }
}

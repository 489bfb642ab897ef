use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One placeable map and where it goes in the world.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MapPlacement {
    pub id: String,
    /// Map the engine should load.
    pub map: String,
    #[serde(default)]
    pub pos: DVec2,
}

/// A placement spec names the map placements to apply at world setup.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PlacementSpec {
    pub maps: Vec<String>,
}

/// A resolved load order: load `map` offset onto the existing world map,
/// never replacing it.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadOrder {
    pub map: String,
    pub offset: DVec2,
}

#[derive(Debug, Default)]
pub struct PlacementPlan {
    pub orders: Vec<LoadOrder>,
}

impl PlacementPlan {
    /// Resolve a placement spec against the placement table. Unknown ids are
    /// logged and skipped rather than failing the whole setup.
    pub fn resolve(spec: &PlacementSpec, table: &[MapPlacement]) -> Self {
        let mut orders = Vec::with_capacity(spec.maps.len());
        for id in spec.maps.iter() {
            match table.iter().find(|placement| &placement.id == id) {
                Some(placement) => orders.push(LoadOrder {
                    map: placement.map.clone(),
                    offset: placement.pos,
                }),
                None => log::error!("failed to index map placement {}", id),
            }
        }
        Self { orders }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<MapPlacement> {
        vec![
            MapPlacement {
                id: "station".to_owned(),
                map: "maps/station.yml".to_owned(),
                pos: DVec2::new(2000.0, -500.0),
            },
            MapPlacement {
                id: "derelict".to_owned(),
                map: "maps/derelict.yml".to_owned(),
                pos: DVec2::ZERO,
            },
        ]
    }

    #[test]
    fn resolves_in_spec_order() {
        let spec = PlacementSpec {
            maps: vec!["derelict".to_owned(), "station".to_owned()],
        };
        let plan = PlacementPlan::resolve(&spec, &table());
        assert_eq!(plan.orders.len(), 2);
        assert_eq!(plan.orders[0].map, "maps/derelict.yml");
        assert_eq!(plan.orders[1].offset, DVec2::new(2000.0, -500.0));
    }

    #[test]
    fn unknown_ids_are_skipped() {
        let spec = PlacementSpec {
            maps: vec!["station".to_owned(), "missing".to_owned()],
        };
        let plan = PlacementPlan::resolve(&spec, &table());
        assert_eq!(plan.orders.len(), 1);
        assert_eq!(plan.orders[0].map, "maps/station.yml");
    }
}

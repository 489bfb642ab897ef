use ahash::AHashMap;

use crate::config::Config;
use crate::models::{FloatType, Sector, ShipLayout, TurretId};
use crate::safety::compute_firing_ranges;

/// Last-computed obstructed sectors, one record per turret. Each refresh
/// replaces a turret's record wholesale; between refreshes the stored data
/// may go stale, which is accepted — refresh is explicit and on demand.
#[derive(Debug, Default)]
pub struct RangeStore {
    ranges: AHashMap<TurretId, Vec<Sector>>,
}

impl RangeStore {
    pub fn new() -> Self {
        Self {
            ranges: AHashMap::new(),
        }
    }

    /// Recompute and store the sector list for one turret. A turret that
    /// cannot be resolved in the layout is a no-op; previously stored data is
    /// left untouched. Returns the number of stored sectors.
    pub fn refresh_firing_ranges(
        &mut self,
        id: TurretId,
        layout: &ShipLayout,
        config: &Config,
    ) -> usize {
        let turret = match layout.turret(id) {
            Some(turret) => turret,
            None => {
                log::debug!("range refresh for unresolved turret {:?}", id);
                return 0;
            }
        };

        let sectors = compute_firing_ranges(turret, layout, config);
        let count = sectors.len();
        self.ranges.insert(id, sectors);
        count
    }

    /// Administrative fan-out: refresh every turret on the grid. Returns the
    /// number of turrets refreshed.
    pub fn refresh_all(&mut self, layout: &ShipLayout, config: &Config) -> usize {
        let mut count = 0;
        for turret in layout.turrets.iter() {
            self.refresh_firing_ranges(turret.id, layout, config);
            count += 1;
        }
        count
    }

    /// True when nothing blocks firing in the given direction. A turret with
    /// no stored record has nothing marking it blocked.
    pub fn safety_check(&self, id: TurretId, angle: FloatType) -> bool {
        match self.ranges.get(&id) {
            Some(sectors) => !sectors.iter().any(|sector| sector.contains(angle)),
            None => true,
        }
    }

    pub fn ranges(&self, id: TurretId) -> Option<&[Sector]> {
        self.ranges.get(&id).map(|sectors| sectors.as_slice())
    }

    /// Drop the record for a destroyed turret.
    pub fn remove_turret(&mut self, id: TurretId) {
        self.ranges.remove(&id);
    }

    pub fn iter(&self) -> impl Iterator<Item = (TurretId, &[Sector])> {
        self.ranges.iter().map(|(id, sectors)| (*id, sectors.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::models::{GridObject, Turret};

    fn deg(d: FloatType) -> FloatType {
        d.to_radians()
    }

    fn layout_with_north_wall() -> ShipLayout {
        ShipLayout {
            objects: vec![GridObject {
                pos: DVec2::new(0.0, 5.0),
                anchored: true,
                hard: true,
            }],
            turrets: vec![Turret {
                id: TurretId(1),
                pos: DVec2::ZERO,
                max_spread: 0.0,
                clearance: 0.0,
            }],
        }
    }

    #[test]
    fn refresh_replaces_wholesale() {
        let config = Config::default();
        let mut store = RangeStore::new();
        let layout = layout_with_north_wall();

        assert_eq!(store.refresh_firing_ranges(TurretId(1), &layout, &config), 1);
        assert_eq!(store.ranges(TurretId(1)).unwrap().len(), 1);

        // Obstacle gone: the next refresh replaces, not merges.
        let empty = ShipLayout {
            objects: vec![],
            turrets: layout.turrets.clone(),
        };
        assert_eq!(store.refresh_firing_ranges(TurretId(1), &empty, &config), 0);
        assert!(store.ranges(TurretId(1)).unwrap().is_empty());
    }

    #[test]
    fn unresolved_turret_is_a_noop() {
        let config = Config::default();
        let mut store = RangeStore::new();
        let layout = layout_with_north_wall();

        store.refresh_firing_ranges(TurretId(1), &layout, &config);
        let before = store.ranges(TurretId(1)).unwrap().to_vec();

        assert_eq!(store.refresh_firing_ranges(TurretId(99), &layout, &config), 0);
        assert!(store.ranges(TurretId(99)).is_none());
        assert_eq!(store.ranges(TurretId(1)).unwrap().len(), before.len());
    }

    #[test]
    fn safety_check_negates_membership() {
        let config = Config::default();
        let mut store = RangeStore::new();
        let layout = layout_with_north_wall();
        store.refresh_firing_ranges(TurretId(1), &layout, &config);

        let sector = store.ranges(TurretId(1)).unwrap()[0];
        let eps = deg(0.1);

        // Blocked toward the wall, free away from it, and consistent with
        // the stored sector at its boundaries.
        assert!(!store.safety_check(TurretId(1), deg(90.0)));
        assert!(store.safety_check(TurretId(1), deg(270.0)));
        assert!(!store.safety_check(TurretId(1), sector.start + eps));
        assert!(store.safety_check(TurretId(1), sector.start - eps));
        assert!(!store.safety_check(TurretId(1), sector.end() - eps));
        assert!(store.safety_check(TurretId(1), sector.end() + eps));
    }

    #[test]
    fn unrefreshed_turret_is_safe_everywhere() {
        let store = RangeStore::new();
        for i in 0..360 {
            assert!(store.safety_check(TurretId(5), deg(i as FloatType)));
        }
    }

    #[test]
    fn remove_turret_drops_record() {
        let config = Config::default();
        let mut store = RangeStore::new();
        let layout = layout_with_north_wall();
        store.refresh_firing_ranges(TurretId(1), &layout, &config);

        store.remove_turret(TurretId(1));
        assert!(store.ranges(TurretId(1)).is_none());
        assert!(store.safety_check(TurretId(1), deg(90.0)));
    }

    #[test]
    fn refresh_all_covers_every_turret() {
        let config = Config::default();
        let mut store = RangeStore::new();
        let mut layout = layout_with_north_wall();
        layout.turrets.push(Turret {
            id: TurretId(2),
            pos: DVec2::new(0.0, 10.0),
            max_spread: 0.0,
            clearance: 0.0,
        });

        assert_eq!(store.refresh_all(&layout, &config), 2);
        assert_eq!(store.len(), 2);
    }
}

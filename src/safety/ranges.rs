//! Obstruction sector computation for a single cannon.
//!
//! Every solid, anchored object within collision range of a cannon throws an
//! angular "shadow" over the firing circle. This module computes those
//! shadows, merges the ones that overlap, and pads the result so projectile
//! spread cannot clip the obstacle edges.

use glam::DVec2;

use crate::config::Config;
use crate::constants::{ANGLE_EPSILON, QUARTER_TURN};
use crate::models::{angle, FloatType, Sector, ShipLayout, Turret};

const HALF_TILE: DVec2 = DVec2::new(0.5, 0.5);

/// Angular silhouette of one grid tile centered at `delta`, as seen from the
/// origin. The tile is an axis-aligned unit square, so the silhouette is
/// bounded by two of its corners; which two depends on the direction.
///
/// Returns `None` only when the computed sector is non-finite, which would
/// poison every later overlap test if it got stored.
pub fn obstacle_sector(delta: DVec2) -> Option<Sector> {
    let dir = angle::normalize(delta.y.atan2(delta.x));

    let (a, b) = if let Some(cardinal) = cardinal_index(dir) {
        // Looking straight along an axis the generic diagonal pick below
        // degenerates, so take the two corners of the edge facing the origin.
        match cardinal {
            // +X: the near edge is at delta.x - 0.5.
            0 => (delta - HALF_TILE, delta + DVec2::new(-0.5, 0.5)),
            // +Y: near edge at delta.y - 0.5.
            1 => (delta - HALF_TILE, delta + DVec2::new(0.5, -0.5)),
            // -X: near edge at delta.x + 0.5.
            2 => (delta + HALF_TILE, delta + DVec2::new(0.5, -0.5)),
            // -Y: near edge at delta.y + 0.5.
            _ => (delta + HALF_TILE, delta + DVec2::new(-0.5, 0.5)),
        }
    } else if (dir > 0.0 && dir < QUARTER_TURN) || (dir > QUARTER_TURN * 2.0 && dir < QUARTER_TURN * 3.0)
    {
        // First or third quadrant: the anti-diagonal corners bound the
        // silhouette.
        (delta + DVec2::new(-0.5, 0.5), delta + DVec2::new(0.5, -0.5))
    } else {
        // Second or fourth quadrant: the main-diagonal corners.
        (delta + HALF_TILE, delta - HALF_TILE)
    };

    let sector = Sector::from_endpoints(a.y.atan2(a.x), b.y.atan2(b.x));
    if !sector.is_finite() {
        debug_assert!(false, "non-finite obstacle sector for delta {:?}", delta);
        log::warn!("skipping obstacle at {:?}: non-finite sector", delta);
        return None;
    }
    Some(sector)
}

/// Snap `dir` to the nearest cardinal direction if within tolerance,
/// returning 0..4 for +X, +Y, -X, -Y. `dir` must already be normalized.
fn cardinal_index(dir: FloatType) -> Option<usize> {
    let quarters = dir / QUARTER_TURN;
    let nearest = quarters.round();
    if (dir - nearest * QUARTER_TURN).abs() < ANGLE_EPSILON {
        // A direction just under a full turn rounds to 4, which is +X again.
        Some(nearest as usize % 4)
    } else {
        None
    }
}

/// Compute the full obstructed sector list for one turret from a grid
/// snapshot. Obstacles outside the collision check band are ignored, raw
/// sectors are merged as they are found, and the survivors are padded by the
/// turret's clearance.
pub fn compute_firing_ranges(turret: &Turret, layout: &ShipLayout, config: &Config) -> Vec<Sector> {
    let mut ranges: Vec<Sector> = Vec::new();

    for object in layout.objects.iter() {
        if !object.anchored || !object.hard {
            continue;
        }

        let delta = object.pos - turret.pos;
        let dist = delta.length();
        if dist > config.max_obstacle_distance || dist < config.min_obstacle_distance {
            continue;
        }

        if let Some(sector) = obstacle_sector(delta) {
            insert_merged(&mut ranges, sector);
        }
    }

    let clearance = turret.max_spread + config.extra_spread_margin() + turret.clearance;
    for sector in ranges.iter_mut() {
        *sector = sector.pad(clearance);
    }

    // Padding may reintroduce overlap between neighbouring sectors; that is
    // accepted, since the safety check only needs any-match.
    ranges
}

/// Insert `sector` into the working list, absorbing every stored sector it
/// overlaps. Overlapping entries are removed by index, never by value
/// equality, so floating-point drift cannot leave a stale sector behind.
fn insert_merged(ranges: &mut Vec<Sector>, sector: Sector) {
    let mut merged = sector;
    loop {
        // Absorbing one sector can grow the union into range of another that
        // was already scanned past, so rescan until a pass absorbs nothing.
        let mut absorbed = false;
        let mut index = 0;
        while index < ranges.len() {
            if merged.overlaps(&ranges[index]) {
                merged = merged.combine(&ranges[index]);
                ranges.swap_remove(index);
                absorbed = true;
            } else {
                index += 1;
            }
        }
        if !absorbed {
            break;
        }
    }
    ranges.push(merged);
}

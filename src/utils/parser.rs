use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;

use anyhow::{bail, Context, Result};

use crate::models::ShipLayout;

/// Load a ship layout snapshot from a YAML file.
pub fn load_layout(path: &str) -> Result<ShipLayout> {
    let file = File::open(path).with_context(|| format!("Cannot open layout file {}", path))?;
    let reader = BufReader::new(file);
    let layout: ShipLayout =
        serde_yaml::from_reader(reader).with_context(|| format!("Failed to parse layout file {}", path))?;
    validate_layout(&layout)?;
    Ok(layout)
}

pub fn validate_layout(layout: &ShipLayout) -> Result<()> {
    let mut seen = HashSet::new();
    for turret in layout.turrets.iter() {
        if !seen.insert(turret.id) {
            bail!("Duplicate turret id {:?} in layout", turret.id);
        }
        if !turret.pos.is_finite() || !turret.max_spread.is_finite() || !turret.clearance.is_finite()
        {
            bail!("Turret {:?} has non-finite data", turret.id);
        }
    }
    for (index, object) in layout.objects.iter().enumerate() {
        if !object.pos.is_finite() {
            bail!("Object #{} has a non-finite position", index);
        }
    }
    Ok(())
}

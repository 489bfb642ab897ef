use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::models::Sector;
use crate::safety::RangeStore;

/// Write every stored range list to a JSON file, keyed by turret id. Keys are
/// sorted so repeated runs produce identical files.
pub fn write_ranges_file(path: &str, store: &RangeStore, config: &Config) -> Result<()> {
    let ranges: BTreeMap<u32, Vec<Sector>> = store
        .iter()
        .map(|(id, sectors)| (id.0, sectors.to_vec()))
        .collect();

    let json = if config.output_pretty {
        serde_json::to_string_pretty(&ranges)
    } else {
        serde_json::to_string(&ranges)
    }
    .context("Failed to serialize ranges")?;

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("Cannot open output file {}", path))?;
    writeln!(file, "{}", json).with_context(|| format!("Failed to write output file {}", path))?;
    Ok(())
}

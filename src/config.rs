use std::fs::File;
use std::io::BufReader;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{EXTRA_SPREAD_MARGIN_DEG, MAX_OBSTACLE_DISTANCE, MIN_OBSTACLE_DISTANCE};
use crate::models::FloatType;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    // Obstruction scan
    pub max_obstacle_distance: FloatType,
    pub min_obstacle_distance: FloatType,
    pub extra_spread_margin_deg: FloatType,

    // Output
    pub output_pretty: bool,
}

impl Config {
    pub fn default() -> Self {
        Self {
            // Obstruction scan
            max_obstacle_distance: MAX_OBSTACLE_DISTANCE,
            min_obstacle_distance: MIN_OBSTACLE_DISTANCE,
            extra_spread_margin_deg: EXTRA_SPREAD_MARGIN_DEG,

            // Output
            output_pretty: true,
        }
    }

    /// Fixed spread margin in radians.
    pub fn extra_spread_margin(&self) -> FloatType {
        self.extra_spread_margin_deg.to_radians()
    }

    fn read_yaml_file(filepath: &str) -> Value {
        let file = File::open(filepath).expect(&format!("Cannot open file {}", filepath));
        let reader = BufReader::new(file);
        serde_yaml::from_reader(reader).expect(&format!("Failed to read file {}", filepath))
    }

    pub fn load_yaml_file(filepath: &str) -> Self {
        // Load default
        let mut config = Self::default();

        // Patch default with loaded values
        config.patch(&Self::read_yaml_file(filepath));
        config
    }

    pub fn patch_from_yaml_file(&mut self, filepath: &str) {
        self.patch(&Self::read_yaml_file(filepath));
    }

    pub fn patch(&mut self, values: &Value) {
        let mut config: Value = serde_json::to_value(&self).expect("Failed to serialize config");
        match values {
            Value::Object(values_map) => {
                // Iterate over all key-value pairs in the provided values and update the config
                for (key, value) in values_map.iter() {
                    // The key is like a file path. A key at top level starts with /
                    let root_key = format!("/{}", key);
                    if let Some(config_value) = config.pointer_mut(&root_key) {
                        *config_value = value.clone();
                    }
                }
            }
            _ => panic!("Cannot patch Config as JSON is not an Object"),
        }
        // Update the config object
        *self = serde_json::from_value(config).expect("Failed to deserialize patched config");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_overrides_only_known_keys() {
        let mut config = Config::default();
        let values: Value = serde_json::json!({
            "max_obstacle_distance": 12.0,
            "unknown_key": true,
        });
        config.patch(&values);
        assert_eq!(config.max_obstacle_distance, 12.0);
        assert_eq!(config.min_obstacle_distance, MIN_OBSTACLE_DISTANCE);
    }

    #[test]
    fn spread_margin_converts_to_radians() {
        let config = Config::default();
        assert!((config.extra_spread_margin() - 10f64.to_radians()).abs() < 1e-12);
    }
}

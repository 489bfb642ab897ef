use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use pointcannon::cli::Args;
use pointcannon::config::Config;
use pointcannon::safety::RangeStore;
use pointcannon::utils;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .format_module_path(false)
        .init();
    let args = Args::parse();
    let start_time = Instant::now();

    let mut config = Config::default();
    let config_path = args.config_path.as_deref().unwrap_or("config.yml");
    if Path::new(config_path).exists() {
        config.patch_from_yaml_file(config_path);
    }

    let layout = utils::load_layout(&args.layout_path)?;
    log::info!(
        "Loaded layout {} ({} objects, {} turrets)",
        args.layout_path,
        layout.objects.len(),
        layout.turrets.len()
    );

    let mut store = RangeStore::new();
    let count = store.refresh_all(&layout, &config);
    println!(
        "Generated ranges for {} cannons in {} seconds.",
        count,
        start_time.elapsed().as_secs_f64()
    );

    if let Some(output_path) = args.output_path.as_deref() {
        utils::write_ranges_file(output_path, &store, &config)?;
        log::info!("Ranges written to {}", output_path);
    }
    Ok(())
}

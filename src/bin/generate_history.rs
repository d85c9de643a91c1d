//! Synthetic Data Generator - One-Shot Offline Utility
//!
//! Writes `historical_telemetry_data.csv` to the current working directory.
//! I/O failures propagate and terminate; there is nothing to retry.

use machine_sentinel::constants::{self, OUTPUT_CSV_NAME};
use machine_sentinel::logic::generator::{self, GeneratorConfig};
use machine_sentinel::logic::telemetry::writer;
use machine_sentinel::SentinelError;

const PREVIEW_ROWS: usize = 5;

fn main() -> Result<(), SentinelError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting synthetic historical telemetry generation...");

    let config = GeneratorConfig {
        seed: constants::get_generator_seed(),
        ..Default::default()
    };
    if let Some(seed) = config.seed {
        log::info!("Using fixed seed {} for reproducible output", seed);
    }

    let records = generator::generate(&config)?;

    let path = std::env::current_dir()?.join(OUTPUT_CSV_NAME);
    let written = writer::write_csv(&path, &records)?;

    log::info!("Finished. Generated {} rows.", written);
    log::info!("Saved CSV to: {}", path.display());
    log::info!("Sample rows:\n{}", writer::preview(&records, PREVIEW_ROWS));

    Ok(())
}

//! Synthetic Historical Telemetry Generator
//!
//! Produces the labeled dataset used to train the classifier offline. Labels
//! are assigned first by sampling row indices without replacement; each row's
//! values are then drawn from one of two disjoint distributions selected
//! solely by its label.

use chrono::{DateTime, Duration, DurationRound, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::constants::{
    ANOMALY_FRACTION, ANOMALY_TEMP_RANGE, ANOMALY_VIBRATION_RANGE, GENERATOR_ROWS, MACHINE_ID,
    SAMPLE_INTERVAL_MINUTES, TEMP_MEAN, TEMP_STD_DEV, VIBRATION_MEAN, VIBRATION_STD_DEV,
};
use crate::logic::error::SentinelError;
use crate::logic::telemetry::TelemetryRecord;

/// Generator parameters. Distribution shapes live in `constants`; this struct
/// carries only what varies between runs.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Total rows to generate
    pub rows: usize,
    /// Fraction of rows labeled anomalous
    pub anomaly_fraction: f64,
    /// Machine identifier stamped on every row
    pub machine_id: String,
    /// Fixed seed for reproducible output; entropy-seeded when `None`
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: GENERATOR_ROWS,
            anomaly_fraction: ANOMALY_FRACTION,
            machine_id: MACHINE_ID.to_string(),
            seed: None,
        }
    }
}

/// Generate a dataset anchored at the current minute.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<TelemetryRecord>, SentinelError> {
    let anchor = Utc::now().duration_trunc(Duration::minutes(1))?;
    generate_at(config, anchor)
}

/// Generate a dataset whose last timestamp equals `anchor`, with earlier rows
/// spaced backwards at the fixed sampling interval.
pub fn generate_at(
    config: &GeneratorConfig,
    anchor: DateTime<Utc>,
) -> Result<Vec<TelemetryRecord>, SentinelError> {
    let rows = config.rows;
    if rows == 0 {
        return Ok(Vec::new());
    }

    let anomaly_count = (rows as f64 * config.anomaly_fraction).round() as usize;
    if anomaly_count > rows {
        return Err(SentinelError::Generator(format!(
            "anomaly fraction {} yields {} anomalies for {} rows",
            config.anomaly_fraction, anomaly_count, rows
        )));
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Labels first: uniform sample of row indices, without replacement.
    let mut labels = vec![0u8; rows];
    for idx in rand::seq::index::sample(&mut rng, rows, anomaly_count) {
        labels[idx] = 1;
    }

    let temp_normal = Normal::new(TEMP_MEAN, TEMP_STD_DEV)
        .map_err(|e| SentinelError::Generator(e.to_string()))?;
    let vibration_normal = Normal::new(VIBRATION_MEAN, VIBRATION_STD_DEV)
        .map_err(|e| SentinelError::Generator(e.to_string()))?;

    let start = anchor - Duration::minutes(SAMPLE_INTERVAL_MINUTES * (rows as i64 - 1));

    let mut records = Vec::with_capacity(rows);
    for (i, &label) in labels.iter().enumerate() {
        let (temperature, vibration) = if label == 1 {
            (
                rng.gen_range(ANOMALY_TEMP_RANGE.0..=ANOMALY_TEMP_RANGE.1),
                rng.gen_range(ANOMALY_VIBRATION_RANGE.0..=ANOMALY_VIBRATION_RANGE.1),
            )
        } else {
            (
                temp_normal.sample(&mut rng),
                vibration_normal.sample(&mut rng),
            )
        };

        records.push(TelemetryRecord {
            timestamp: start + Duration::minutes(SAMPLE_INTERVAL_MINUTES * i as i64),
            machine_id: config.machine_id.clone(),
            temperature,
            // Guardrail for both classes: vibration is a magnitude.
            vibration: vibration.max(0.0),
            is_anomaly: label,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn seeded_config(rows: usize) -> GeneratorConfig {
        GeneratorConfig {
            rows,
            seed: Some(42),
            ..Default::default()
        }
    }

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_row_and_label_counts() {
        let records = generate_at(&seeded_config(10_000), anchor()).unwrap();
        assert_eq!(records.len(), 10_000);

        let anomalies = records.iter().filter(|r| r.is_anomaly == 1).count();
        assert_eq!(anomalies, 500); // round(10_000 * 0.05)
    }

    #[test]
    fn test_vibration_never_negative() {
        let records = generate_at(&seeded_config(10_000), anchor()).unwrap();
        assert!(records.iter().all(|r| r.vibration >= 0.0));
    }

    #[test]
    fn test_anomalous_rows_in_spike_ranges() {
        let records = generate_at(&seeded_config(10_000), anchor()).unwrap();
        for record in records.iter().filter(|r| r.is_anomaly == 1) {
            assert!(
                (80.0..=100.0).contains(&record.temperature),
                "temperature {} out of anomaly range",
                record.temperature
            );
            assert!(
                (3.0..=5.0).contains(&record.vibration),
                "vibration {} out of anomaly range",
                record.vibration
            );
        }
    }

    #[test]
    fn test_normal_rows_within_distribution_bounds() {
        // 6 sigma either side; a seeded run stays comfortably inside.
        let records = generate_at(&seeded_config(10_000), anchor()).unwrap();
        for record in records.iter().filter(|r| r.is_anomaly == 0) {
            assert!((TEMP_MEAN - 6.0 * TEMP_STD_DEV..=TEMP_MEAN + 6.0 * TEMP_STD_DEV)
                .contains(&record.temperature));
            assert!(record.vibration <= VIBRATION_MEAN + 6.0 * VIBRATION_STD_DEV);
        }
    }

    #[test]
    fn test_timestamps_increase_at_fixed_spacing() {
        let records = generate_at(&seeded_config(1_000), anchor()).unwrap();

        for pair in records.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::minutes(1));
        }
        assert_eq!(records.last().unwrap().timestamp, anchor());
    }

    #[test]
    fn test_machine_id_constant_across_rows() {
        let records = generate_at(&seeded_config(100), anchor()).unwrap();
        assert!(records.iter().all(|r| r.machine_id == MACHINE_ID));
    }

    #[test]
    fn test_seed_makes_output_reproducible() {
        let a = generate_at(&seeded_config(500), anchor()).unwrap();
        let b = generate_at(&seeded_config(500), anchor()).unwrap();

        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.temperature, y.temperature);
            assert_eq!(x.vibration, y.vibration);
            assert_eq!(x.is_anomaly, y.is_anomaly);
        }
    }

    #[test]
    fn test_zero_rows_is_empty() {
        let records = generate_at(&seeded_config(0), anchor()).unwrap();
        assert!(records.is_empty());
    }
}

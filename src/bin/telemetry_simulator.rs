//! Telemetry Simulator
//!
//! Simulates one factory machine publishing a JSON reading every second over
//! mutual TLS, with roughly one in ten readings elevated to pre-failure
//! levels. Feeds the same topic the inference client subscribes to.

use std::time::Duration;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rumqttc::{AsyncClient, QoS};

use machine_sentinel::constants::{
    MACHINE_ID, SIMULATOR_ANOMALY_PROBABILITY, SIMULATOR_ANOMALY_TEMP_DELTA,
    SIMULATOR_ANOMALY_VIBRATION_DELTA, SIMULATOR_PUBLISH_INTERVAL_SECS, SIMULATOR_TEMP_RANGE,
    SIMULATOR_VIBRATION_RANGE, TOPIC_TELEMETRY,
};
use machine_sentinel::logic::net::{self, BrokerSettings};
use machine_sentinel::logic::telemetry::TelemetryPayload;
use machine_sentinel::SentinelError;

/// Draw one reading; anomalies add uniform spikes on top of the normal band.
fn sample_reading(rng: &mut StdRng) -> TelemetryPayload {
    let mut temperature = rng.gen_range(SIMULATOR_TEMP_RANGE.0..=SIMULATOR_TEMP_RANGE.1);
    let mut vibration = rng.gen_range(SIMULATOR_VIBRATION_RANGE.0..=SIMULATOR_VIBRATION_RANGE.1);

    if rng.gen_bool(SIMULATOR_ANOMALY_PROBABILITY) {
        temperature += rng.gen_range(0.0..=SIMULATOR_ANOMALY_TEMP_DELTA);
        vibration += rng.gen_range(0.0..=SIMULATOR_ANOMALY_VIBRATION_DELTA);
    }

    TelemetryPayload {
        temperature,
        vibration,
        machine_id: Some(MACHINE_ID.to_string()),
        timestamp: Some(Utc::now().timestamp()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), SentinelError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let client_id = format!("{}_sim_{}", MACHINE_ID, Utc::now().timestamp_millis());
    let settings = BrokerSettings::from_env(client_id);

    log::info!(
        "Starting telemetry simulator for '{}' -> {}:{}",
        MACHINE_ID,
        settings.endpoint,
        settings.port
    );

    let options = net::mqtt_options(&settings)?;
    let (client, mut eventloop) = AsyncClient::new(options, 10);

    // Drive the network loop in the background; the publish loop below only
    // hands messages to the client's request queue.
    tokio::spawn(async move {
        loop {
            if let Err(e) = eventloop.poll().await {
                log::error!("Connection lost: {}", e);
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }
    });

    let mut rng = StdRng::from_entropy();
    let mut interval =
        tokio::time::interval(Duration::from_secs(SIMULATOR_PUBLISH_INTERVAL_SECS));
    let mut published = 0u64;

    log::info!("Publishing to '{}' every {}s. Press Ctrl+C to stop.",
        TOPIC_TELEMETRY, SIMULATOR_PUBLISH_INTERVAL_SECS);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                log::info!("Interrupted by user, disconnecting...");
                break;
            }
            _ = interval.tick() => {
                let reading = sample_reading(&mut rng);
                let payload = match serde_json::to_string(&reading) {
                    Ok(payload) => payload,
                    Err(e) => {
                        log::error!("Failed to serialize reading: {}", e);
                        continue;
                    }
                };

                match client.publish(TOPIC_TELEMETRY, QoS::AtLeastOnce, false, payload.clone()).await {
                    Ok(()) => {
                        published += 1;
                        log::info!("Published [{}]: {}", published, payload);
                    }
                    Err(e) => log::warn!("Failed to publish: {}", e),
                }
            }
        }
    }

    let _ = client.disconnect().await;
    log::info!("Disconnected. Published {} readings.", published);

    Ok(())
}

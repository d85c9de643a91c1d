//! Realtime Inference Client
//!
//! Loads the trained classifier, opens one mutual-TLS connection to the
//! broker, subscribes to the telemetry topic at QoS 1 and prints one alert
//! line per message. One connection attempt, no reconnect, no retry; Ctrl+C
//! disconnects best-effort and exits.

use rumqttc::{AsyncClient, ConnectReturnCode, Event, Packet, QoS};

use machine_sentinel::constants::{self, DEFAULT_CLIENT_ID, TOPIC_TELEMETRY};
use machine_sentinel::logic::model::OnnxClassifier;
use machine_sentinel::logic::net::{self, BrokerSettings};
use machine_sentinel::logic::session::InferenceSession;
use machine_sentinel::SentinelError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), SentinelError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("=== Real-Time Predictive Maintenance Inference ===");

    // Model load is fatal on failure; there is no degraded mode.
    let classifier = OnnxClassifier::load(&constants::get_model_path())?;
    let mut session = InferenceSession::new(Box::new(classifier));

    let settings = BrokerSettings::from_env(DEFAULT_CLIENT_ID);
    log::info!(
        "Connecting to {}:{} with client ID '{}'...",
        settings.endpoint,
        settings.port,
        settings.client_id
    );

    let options = net::mqtt_options(&settings)?;
    let (client, mut eventloop) = AsyncClient::new(options, 10);

    log::info!("Press Ctrl+C to stop.");

    let result = loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                log::info!("Interrupted by user, disconnecting...");
                break Ok(());
            }
            event = eventloop.poll() => match event {
                Ok(Event::Incoming(Packet::ConnAck(ack))) => {
                    if ack.code == ConnectReturnCode::Success {
                        log::info!(
                            "Connected as '{}'. Subscribing to '{}'...",
                            settings.client_id,
                            TOPIC_TELEMETRY
                        );
                        if let Err(e) = client.subscribe(TOPIC_TELEMETRY, QoS::AtLeastOnce).await {
                            log::error!("Subscribe failed: {}", e);
                            break Err(e.into());
                        }
                    } else {
                        log::error!("Connection failed with result code {:?}", ack.code);
                    }
                }
                Ok(Event::Incoming(Packet::SubAck(_))) => {
                    log::info!("Subscribed. Waiting for telemetry messages...");
                }
                Ok(Event::Incoming(Packet::Publish(publish))) => {
                    if let Some(line) = session.handle_message(&publish.topic, &publish.payload) {
                        println!("{}", line);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::error!("Failed to connect to broker: {}", e);
                    break Err(e.into());
                }
            }
        }
    };

    // Best-effort cleanup; disconnect failures are swallowed.
    let _ = client.disconnect().await;
    log::info!("Disconnected from broker.");

    result
}

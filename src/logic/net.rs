//! Broker Connection Setup
//!
//! Mutual-TLS MQTT options from three PEM artifacts: root CA (server
//! verification), client certificate and private key (client identity).
//! Certificate verification is never relaxed.

use std::time::Duration;

use rumqttc::{MqttOptions, TlsConfiguration, Transport};

use crate::constants;
use crate::logic::error::SentinelError;

const KEEP_ALIVE_SECS: u64 = 60;

/// Everything needed to reach the broker.
#[derive(Debug, Clone)]
pub struct BrokerSettings {
    pub endpoint: String,
    pub port: u16,
    pub client_id: String,
    pub root_ca_path: String,
    pub cert_path: String,
    pub key_path: String,
}

impl BrokerSettings {
    /// Settings from environment with compile-time fallbacks.
    pub fn from_env(client_id: impl Into<String>) -> Self {
        Self {
            endpoint: constants::get_endpoint(),
            port: constants::MQTT_PORT,
            client_id: client_id.into(),
            root_ca_path: constants::get_root_ca_path(),
            cert_path: constants::get_cert_path(),
            key_path: constants::get_key_path(),
        }
    }
}

/// Build client options with mutual TLS. Reads all three PEM files up front;
/// a missing file is a startup failure, not a per-message one.
pub fn mqtt_options(settings: &BrokerSettings) -> Result<MqttOptions, SentinelError> {
    let ca = std::fs::read(&settings.root_ca_path)?;
    let client_cert = std::fs::read(&settings.cert_path)?;
    let client_key = std::fs::read(&settings.key_path)?;

    let mut options = MqttOptions::new(&settings.client_id, &settings.endpoint, settings.port);
    options.set_keep_alive(Duration::from_secs(KEEP_ALIVE_SECS));
    options.set_clean_session(true);
    options.set_transport(Transport::Tls(TlsConfiguration::Simple {
        ca,
        alpn: None,
        client_auth: Some((client_cert, client_key)),
    }));

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings_with_paths(dir: &std::path::Path) -> BrokerSettings {
        BrokerSettings {
            endpoint: "broker.example.com".to_string(),
            port: 8883,
            client_id: "test_client".to_string(),
            root_ca_path: dir.join("ca.pem").display().to_string(),
            cert_path: dir.join("cert.pem").display().to_string(),
            key_path: dir.join("key.pem").display().to_string(),
        }
    }

    #[test]
    fn test_missing_pem_is_startup_failure() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_with_paths(dir.path());
        assert!(matches!(
            mqtt_options(&settings),
            Err(SentinelError::Io(_))
        ));
    }

    #[test]
    fn test_options_carry_endpoint_and_client_id() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["ca.pem", "cert.pem", "key.pem"] {
            let mut f = std::fs::File::create(dir.path().join(name)).unwrap();
            writeln!(f, "-----BEGIN PLACEHOLDER-----").unwrap();
        }

        let settings = settings_with_paths(dir.path());
        let options = mqtt_options(&settings).unwrap();
        assert_eq!(options.client_id(), "test_client");
        assert_eq!(options.broker_address(), ("broker.example.com".to_string(), 8883));
    }
}

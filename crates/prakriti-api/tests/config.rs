use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use prakriti_api::config::{ApiConfig, ConfigError, LogFormat};

fn config_from(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ApiConfig::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn defaults_apply_when_unset() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.port, 8080);
    assert_eq!(config.data_dir, None);
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
}

#[test]
fn values_are_read_from_the_environment() {
    let config = config_from(&[
        ("PRAKRITI_HOST", "127.0.0.1"),
        ("PRAKRITI_PORT", "9000"),
        ("PRAKRITI_DATA_DIR", "/var/lib/prakriti"),
        ("PRAKRITI_LOG_FORMAT", "Pretty"),
    ])
    .unwrap();
    assert_eq!(config.addr().to_string(), "127.0.0.1:9000");
    assert_eq!(config.data_dir, Some(PathBuf::from("/var/lib/prakriti")));
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn empty_values_count_as_unset() {
    let config = config_from(&[("PRAKRITI_PORT", ""), ("PRAKRITI_DATA_DIR", "  ")]).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.data_dir, None);
}

#[test]
fn invalid_values_are_rejected() {
    assert_eq!(
        config_from(&[("PRAKRITI_PORT", "eighty")]),
        Err(ConfigError::InvalidPort("eighty".to_string()))
    );
    assert_eq!(
        config_from(&[("PRAKRITI_PORT", "70000")]),
        Err(ConfigError::InvalidPort("70000".to_string()))
    );
    assert_eq!(
        config_from(&[("PRAKRITI_HOST", "localhost")]),
        Err(ConfigError::InvalidHost("localhost".to_string()))
    );
    assert_eq!(
        config_from(&[("PRAKRITI_LOG_FORMAT", "xml")]),
        Err(ConfigError::InvalidLogFormat("xml".to_string()))
    );
}

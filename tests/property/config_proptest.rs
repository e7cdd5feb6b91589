//! Property-based tests for configuration loading

use std::collections::HashMap;

use proptest::prelude::*;
use taskmanager::backend::server::{ConfigError, ServerConfig};

fn lookup(vars: HashMap<&'static str, String>) -> impl Fn(&str) -> Option<String> {
    move |key| vars.get(key).cloned()
}

proptest! {
    #[test]
    fn test_any_port_parses(port in any::<u16>()) {
        let vars = HashMap::from([
            ("JWT_SECRET", "secret".to_string()),
            ("SERVER_PORT", port.to_string()),
        ]);
        let config = ServerConfig::from_lookup(lookup(vars)).unwrap();
        prop_assert_eq!(config.port, port);
    }

    #[test]
    fn test_non_numeric_port_rejected(port in "[a-z]{1,8}") {
        let vars = HashMap::from([
            ("JWT_SECRET", "secret".to_string()),
            ("SERVER_PORT", port),
        ]);
        let result = ServerConfig::from_lookup(lookup(vars));
        let is_invalid_port = matches!(result, Err(ConfigError::InvalidValue { key: "SERVER_PORT", .. }));
        prop_assert!(is_invalid_port);
    }

    #[test]
    fn test_bcrypt_cost_bounds(cost in 0u32..64) {
        let vars = HashMap::from([
            ("JWT_SECRET", "secret".to_string()),
            ("BCRYPT_COST", cost.to_string()),
        ]);
        let result = ServerConfig::from_lookup(lookup(vars));
        prop_assert_eq!(result.is_ok(), (4..=31).contains(&cost));
    }
}

#[test]
fn test_secret_is_required() {
    let result = ServerConfig::from_lookup(|_| None);
    assert_eq!(result.unwrap_err(), ConfigError::MissingValue("JWT_SECRET"));
}

use serde::Deserialize;

/// Settings shared by the wallet provider and its components.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Characters kept on each side of a shortened public key.
    pub display_chars: usize,
    pub log_level: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            display_chars: 4,
            log_level: "info".to_owned(),
        }
    }
}

impl WalletConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Routes `log` output to the browser console.
pub fn init_logging(config: &WalletConfig) {
    wasm_logger::init(wasm_logger::Config::new(config.level()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = WalletConfig::from_json(r#"{ "display_chars": 6 }"#).unwrap();
        assert_eq!(config.display_chars, 6);
        assert_eq!(config.level(), log::Level::Info);
    }

    #[test]
    fn unknown_level_is_info() {
        let config = WalletConfig {
            log_level: "loud".into(),
            ..WalletConfig::default()
        };
        assert_eq!(config.level(), log::Level::Info);

        let config = WalletConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
        assert_eq!(config.level(), log::Level::Debug);
    }
}

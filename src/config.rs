use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub vpn_enabled: bool,
}

impl Config {
    /// Read configuration from the environment. `ARGUS_VPN_ENABLED` set to
    /// "0" or "false" marks the device as one that should not be running a
    /// VPN; anything else (including absence) keeps the default.
    pub fn from_env() -> Self {
        let vpn_enabled = std::env::var("ARGUS_VPN_ENABLED")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false"))
            .unwrap_or(true);

        Self { vpn_enabled }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { vpn_enabled: true }
    }
}

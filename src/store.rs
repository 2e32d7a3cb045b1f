use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Config;
use crate::types::{HeartbeatStatus, VpnStatus};

/// Current value of the four device signals. Mutated by the input handler,
/// read by the evaluator through `snapshot`. One mutation per event; the
/// signal enums make out-of-domain values unrepresentable, so `set_*` does
/// not validate.
#[derive(Debug, Clone)]
pub struct SignalStore {
    vpn_status: VpnStatus,
    heartbeat_status: HeartbeatStatus,
    vpn_enabled: bool,
    safe_shutdown: Option<DateTime<Utc>>,
}

/// Immutable copy of the store handed to the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignalSnapshot {
    pub vpn_status: VpnStatus,
    pub heartbeat_status: HeartbeatStatus,
    pub vpn_enabled: bool,
    pub safe_shutdown: Option<DateTime<Utc>>,
}

impl SignalSnapshot {
    pub fn shutdown_in_effect(&self) -> bool {
        self.safe_shutdown.is_some()
    }
}

impl SignalStore {
    pub fn new() -> Self {
        Self {
            vpn_status: VpnStatus::Offline,
            heartbeat_status: HeartbeatStatus::Unknown,
            vpn_enabled: true,
            safe_shutdown: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            vpn_enabled: config.vpn_enabled,
            ..Self::new()
        }
    }

    pub fn set_vpn_status(&mut self, status: VpnStatus) {
        self.vpn_status = status;
    }

    pub fn set_heartbeat_status(&mut self, status: HeartbeatStatus) {
        self.heartbeat_status = status;
    }

    pub fn set_vpn_enabled(&mut self, enabled: bool) {
        self.vpn_enabled = enabled;
    }

    pub fn set_safe_shutdown(&mut self, requested_at: Option<DateTime<Utc>>) {
        self.safe_shutdown = requested_at;
    }

    pub fn toggle_vpn_status(&mut self) {
        self.vpn_status = self.vpn_status.toggled();
    }

    pub fn toggle_vpn_enabled(&mut self) {
        self.vpn_enabled = !self.vpn_enabled;
    }

    pub fn cycle_heartbeat(&mut self) {
        self.heartbeat_status = self.heartbeat_status.cycled();
    }

    /// Flip the safe-shutdown marker, recording the request time when it
    /// enters effect. Presence is a toggle; the timestamp carries no
    /// duration semantics.
    pub fn toggle_safe_shutdown(&mut self) {
        self.safe_shutdown = match self.safe_shutdown {
            None => Some(Utc::now()),
            Some(_) => None,
        };
    }

    pub fn snapshot(&self) -> SignalSnapshot {
        SignalSnapshot {
            vpn_status: self.vpn_status,
            heartbeat_status: self.heartbeat_status,
            vpn_enabled: self.vpn_enabled,
            safe_shutdown: self.safe_shutdown,
        }
    }
}

impl Default for SignalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_device_defaults() {
        let snapshot = SignalStore::new().snapshot();

        assert_eq!(snapshot.vpn_status, VpnStatus::Offline);
        assert_eq!(snapshot.heartbeat_status, HeartbeatStatus::Unknown);
        assert!(snapshot.vpn_enabled);
        assert!(snapshot.safe_shutdown.is_none());
    }

    #[test]
    fn test_from_config_seeds_vpn_enabled() {
        let store = SignalStore::from_config(&Config { vpn_enabled: false });
        assert!(!store.snapshot().vpn_enabled);
    }

    #[test]
    fn test_set_overwrites_one_signal() {
        let mut store = SignalStore::new();
        let before = store.snapshot();

        store.set_heartbeat_status(HeartbeatStatus::Online);
        let after = store.snapshot();

        assert_eq!(after.heartbeat_status, HeartbeatStatus::Online);
        assert_eq!(after.vpn_status, before.vpn_status);
        assert_eq!(after.vpn_enabled, before.vpn_enabled);
        assert_eq!(after.safe_shutdown, before.safe_shutdown);
    }

    #[test]
    fn test_safe_shutdown_toggle_records_and_clears() {
        let mut store = SignalStore::new();

        store.toggle_safe_shutdown();
        assert!(store.snapshot().shutdown_in_effect());

        store.toggle_safe_shutdown();
        assert!(!store.snapshot().shutdown_in_effect());
    }

    #[test]
    fn test_heartbeat_cycles_through_store() {
        let mut store = SignalStore::new();

        store.cycle_heartbeat();
        assert_eq!(store.snapshot().heartbeat_status, HeartbeatStatus::Online);

        store.cycle_heartbeat();
        assert_eq!(store.snapshot().heartbeat_status, HeartbeatStatus::Timeout);

        store.cycle_heartbeat();
        assert_eq!(store.snapshot().heartbeat_status, HeartbeatStatus::Offline);
    }
}

pub mod warning;

pub use warning::{Warning, WarningLevel};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceStatus {
    Offline,
    Online,
}

impl DeviceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DeviceStatus::Offline => "Offline",
            DeviceStatus::Online => "Online",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VpnStatus {
    Offline,
    Online,
}

impl VpnStatus {
    pub fn toggled(self) -> Self {
        match self {
            VpnStatus::Offline => VpnStatus::Online,
            VpnStatus::Online => VpnStatus::Offline,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            VpnStatus::Offline => "Offline",
            VpnStatus::Online => "Online",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeartbeatStatus {
    Offline,
    Online,
    Timeout, // previously Online, then lapsed
    Unknown, // nothing observed yet
}

impl HeartbeatStatus {
    /// Next value on a repeated heartbeat trigger: Online -> Timeout ->
    /// Offline -> Online. An unobserved channel cycles straight to Online.
    pub fn cycled(self) -> Self {
        match self {
            HeartbeatStatus::Online => HeartbeatStatus::Timeout,
            HeartbeatStatus::Timeout => HeartbeatStatus::Offline,
            HeartbeatStatus::Offline | HeartbeatStatus::Unknown => HeartbeatStatus::Online,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HeartbeatStatus::Offline => "Offline",
            HeartbeatStatus::Online => "Online",
            HeartbeatStatus::Timeout => "Timeout",
            HeartbeatStatus::Unknown => "Unknown",
        }
    }
}

/// Overall verdict for one snapshot of the device signals. A warning is
/// only ever attached when the status is Online.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub status: DeviceStatus,
    pub warning: Option<Warning>,
}

impl EvaluationResult {
    pub fn is_healthy(&self) -> bool {
        self.status == DeviceStatus::Online && self.warning.is_none()
    }
}

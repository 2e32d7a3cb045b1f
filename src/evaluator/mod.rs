pub mod rules;

pub use rules::{WarningRule, WARNING_RULES};

use crate::store::SignalSnapshot;
use crate::types::{DeviceStatus, EvaluationResult, HeartbeatStatus, VpnStatus, Warning};

pub struct StateEvaluator;

impl StateEvaluator {
    /// Combine the four device signals into an overall verdict. Pure and
    /// total: every combination of signal values produces a result.
    pub fn evaluate(snapshot: &SignalSnapshot) -> EvaluationResult {
        let status = Self::overall_status(snapshot);
        let warning = match status {
            DeviceStatus::Online => Self::online_warning(snapshot),
            DeviceStatus::Offline => None,
        };

        EvaluationResult { status, warning }
    }

    fn overall_status(snapshot: &SignalSnapshot) -> DeviceStatus {
        let online = if snapshot.shutdown_in_effect() {
            // the heartbeat channel is expected to go silent as part of a
            // planned shutdown, so only the tunnel state is trusted here
            snapshot.vpn_status == VpnStatus::Online
        } else {
            match snapshot.heartbeat_status {
                HeartbeatStatus::Online | HeartbeatStatus::Timeout => true,
                HeartbeatStatus::Offline | HeartbeatStatus::Unknown => {
                    snapshot.vpn_status == VpnStatus::Online
                }
            }
        };

        if online {
            DeviceStatus::Online
        } else {
            DeviceStatus::Offline
        }
    }

    fn online_warning(snapshot: &SignalSnapshot) -> Option<Warning> {
        WARNING_RULES
            .iter()
            .find(|rule| (rule.applies)(snapshot))
            .map(WarningRule::warning)
    }
}

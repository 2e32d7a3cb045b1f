use crate::store::SignalSnapshot;
use crate::types::{HeartbeatStatus, VpnStatus, Warning, WarningLevel};

/// One entry in the warning table. Rules are checked against an Online
/// snapshot in table order; the first match wins, so a misconfigured VPN
/// always outranks heartbeat-quality warnings.
pub struct WarningRule {
    pub id: &'static str,
    pub level: WarningLevel,
    pub message: &'static str,
    pub applies: fn(&SignalSnapshot) -> bool,
}

impl WarningRule {
    pub fn warning(&self) -> Warning {
        Warning {
            level: self.level,
            message: self.message.to_string(),
        }
    }
}

pub const WARNING_RULES: &[WarningRule] = &[
    WarningRule {
        id: "vpn-policy-violation",
        level: WarningLevel::Heavy,
        message: "vpn is on when it shouldn't be",
        applies: |s| !s.vpn_enabled && s.vpn_status == VpnStatus::Online,
    },
    WarningRule {
        // heartbeat reaches the device through a path other than VPN;
        // a persistent match points at the cloud link
        id: "vpn-connectivity",
        level: WarningLevel::Light,
        message: "VPN connectivity issue",
        applies: |s| {
            s.vpn_enabled
                && s.vpn_status == VpnStatus::Offline
                && s.heartbeat_status == HeartbeatStatus::Online
        },
    },
    WarningRule {
        id: "heartbeat-timeout",
        level: WarningLevel::Light,
        message: "possible supervisor/network problem",
        applies: |s| {
            s.vpn_status == VpnStatus::Online && s.heartbeat_status == HeartbeatStatus::Timeout
        },
    },
    WarningRule {
        // no prior evidence of life on the supervisor channel, so this
        // ranks above a plain timeout
        id: "supervisor-down",
        level: WarningLevel::Medium,
        message: "supervisor problem",
        applies: |s| {
            s.vpn_status == VpnStatus::Online
                && matches!(
                    s.heartbeat_status,
                    HeartbeatStatus::Offline | HeartbeatStatus::Unknown
                )
        },
    },
    WarningRule {
        // without VPN, a lapsed heartbeat is indistinguishable from an
        // unannounced shutdown
        id: "ambiguous-shutdown",
        level: WarningLevel::Light,
        message: "supervisor problem or unsafe shutdown",
        applies: |s| {
            !s.shutdown_in_effect()
                && s.vpn_status == VpnStatus::Offline
                && s.heartbeat_status == HeartbeatStatus::Timeout
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn snapshot(
        vpn_enabled: bool,
        vpn_status: VpnStatus,
        heartbeat_status: HeartbeatStatus,
        shutdown: bool,
    ) -> SignalSnapshot {
        SignalSnapshot {
            vpn_status,
            heartbeat_status,
            vpn_enabled,
            safe_shutdown: shutdown.then(chrono::Utc::now),
        }
    }

    #[test]
    fn test_rule_ids_are_unique() {
        let ids: HashSet<_> = WARNING_RULES.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), WARNING_RULES.len());
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let ids: Vec<_> = WARNING_RULES.iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                "vpn-policy-violation",
                "vpn-connectivity",
                "heartbeat-timeout",
                "supervisor-down",
                "ambiguous-shutdown",
            ]
        );
    }

    #[test]
    fn test_first_match_wins_over_later_rules() {
        // matches both vpn-policy-violation and supervisor-down
        let s = snapshot(false, VpnStatus::Online, HeartbeatStatus::Unknown, false);

        let hit = WARNING_RULES
            .iter()
            .find(|r| (r.applies)(&s))
            .expect("a rule should match");
        assert_eq!(hit.id, "vpn-policy-violation");
        assert_eq!(hit.level, WarningLevel::Heavy);
    }

    #[test]
    fn test_clean_state_matches_no_rule() {
        let s = snapshot(true, VpnStatus::Online, HeartbeatStatus::Online, false);
        assert!(WARNING_RULES.iter().all(|r| !(r.applies)(&s)));
    }
}

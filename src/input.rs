use thiserror::Error;

use crate::evaluator::StateEvaluator;
use crate::store::{SignalSnapshot, SignalStore};
use crate::types::EvaluationResult;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown option '{0}', expects v, V, h, s or q")]
    UnknownKey(char),
}

/// One raw operator keypress mapped to a signal change. Unmapped keys are
/// rejected before any signal is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    ToggleVpnStatus,
    ToggleVpnEnabled,
    CycleHeartbeat,
    ToggleSafeShutdown,
    Quit,
}

impl KeyCommand {
    pub fn parse(key: char) -> Result<Self, InputError> {
        match key {
            'v' => Ok(KeyCommand::ToggleVpnStatus),
            'V' => Ok(KeyCommand::ToggleVpnEnabled),
            'h' => Ok(KeyCommand::CycleHeartbeat),
            's' => Ok(KeyCommand::ToggleSafeShutdown),
            'q' => Ok(KeyCommand::Quit),
            other => Err(InputError::UnknownKey(other)),
        }
    }

    /// Apply the command to the store: exactly one signal mutation, then
    /// exactly one evaluation against the fresh snapshot. Quit changes
    /// nothing and simply reports the current state.
    pub fn apply(self, store: &mut SignalStore) -> (SignalSnapshot, EvaluationResult) {
        match self {
            KeyCommand::ToggleVpnStatus => store.toggle_vpn_status(),
            KeyCommand::ToggleVpnEnabled => store.toggle_vpn_enabled(),
            KeyCommand::CycleHeartbeat => store.cycle_heartbeat(),
            KeyCommand::ToggleSafeShutdown => store.toggle_safe_shutdown(),
            KeyCommand::Quit => {}
        }

        let snapshot = store.snapshot();
        let result = StateEvaluator::evaluate(&snapshot);
        (snapshot, result)
    }
}

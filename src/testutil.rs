//! Shared test utilities
//!
//! Common fixture builders used across test modules. Only compiled in test
//! builds.

use crate::outcome::{DeployedContract, FailedExecution, HeldExecution, TimedOutExecution};

/// Build a `(key, contract)` pair for an `IndexMap` of deployed contracts.
///
/// The contract name is derived from the part of `id` after the `#`.
#[must_use]
pub fn make_contract(id: &str, address: &str) -> (String, DeployedContract) {
    let contract_name = id.split_once('#').map_or(id, |(_, name)| name);
    (
        id.to_string(),
        DeployedContract {
            id: id.to_string(),
            address: address.to_string(),
            contract_name: contract_name.to_string(),
        },
    )
}

/// Build a timed-out execution entry.
#[must_use]
pub fn make_timed_out(future_id: &str, network_interaction_id: u64) -> TimedOutExecution {
    TimedOutExecution {
        future_id: future_id.to_string(),
        network_interaction_id,
    }
}

/// Build a held execution entry.
#[must_use]
pub fn make_held(future_id: &str, held_id: u64, reason: &str) -> HeldExecution {
    HeldExecution {
        future_id: future_id.to_string(),
        held_id,
        reason: reason.to_string(),
    }
}

/// Build a failed execution entry.
#[must_use]
pub fn make_failed(future_id: &str, network_interaction_id: u64, error: &str) -> FailedExecution {
    FailedExecution {
        future_id: future_id.to_string(),
        network_interaction_id,
        error: error.to_string(),
    }
}

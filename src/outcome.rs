//! Deployment outcome data model
//!
//! The deployment engine hands over a single tagged outcome value once a run
//! finishes. Exactly one variant is active per run; the reporting layer
//! dispatches on it exhaustively.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A contract that was deployed during a successful run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeployedContract {
    /// Stable entity identifier, `"<ModuleName>#<ContractName>"`
    pub id: String,
    /// On-chain address the contract landed at
    pub address: String,
    /// Bare contract name without the module prefix
    pub contract_name: String,
}

/// A future whose network interaction never confirmed, even after fee bumps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimedOutExecution {
    /// Future identifier, `"<ModuleName>:<FutureName>"`
    pub future_id: String,
    /// Index of the unconfirmed network interaction within the future
    pub network_interaction_id: u64,
}

/// A future paused awaiting an external condition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeldExecution {
    /// Future identifier, `"<ModuleName>:<FutureName>"`
    pub future_id: String,
    /// Index of the hold within the future
    pub held_id: u64,
    /// Why the future is being held
    pub reason: String,
}

/// A future that reverted or errored during execution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FailedExecution {
    /// Future identifier, `"<ModuleName>:<FutureName>"`
    pub future_id: String,
    /// Index of the failed network interaction within the future
    pub network_interaction_id: u64,
    /// The revert reason or error message
    pub error: String,
}

/// Final outcome of a deployment run
///
/// Mappings are keyed in the engine's insertion order and reported in that
/// order, hence `IndexMap` rather than a hash map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DeploymentResult {
    /// Every future executed; deployed contracts keyed by entity id
    Success {
        /// Deployed contracts, keyed `"<ModuleName>#<ContractName>"`
        contracts: IndexMap<String, DeployedContract>,
    },
    /// The module failed validation before anything ran
    ValidationFailure {
        /// Non-empty error messages per future id
        errors: IndexMap<String, Vec<String>>,
    },
    /// The module no longer matches the state of a prior run
    ReconciliationFailure {
        /// Non-empty error messages per future id
        errors: IndexMap<String, Vec<String>>,
    },
    /// A prior run left futures in a failed or timed-out state
    PreviousRunFailure {
        /// Reasons per future id; the default report shows only the ids
        errors: IndexMap<String, Vec<String>>,
    },
    /// The run executed but at least one future did not complete
    #[serde(rename_all = "camelCase")]
    ExecutionFailure {
        /// Futures still in flight when the run stopped (not reported)
        started: Vec<String>,
        /// Futures whose transaction stayed unconfirmed after fee bumps
        timed_out: Vec<TimedOutExecution>,
        /// Futures paused awaiting an external condition
        held: Vec<HeldExecution>,
        /// Futures that reverted or errored
        failed: Vec<FailedExecution>,
        /// Futures that completed before the run stopped (not reported)
        successful: Vec<String>,
    },
}

/// Discriminant of a `DeploymentResult`, used for log records
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ResultKind {
    /// Deployment completed successfully
    Success,
    /// Validation failed before execution
    ValidationFailure,
    /// Reconciliation against a prior run failed
    ReconciliationFailure,
    /// Cancelled because a prior run left failed or timed-out futures
    PreviousRunFailure,
    /// Execution ran but did not complete
    ExecutionFailure,
}

impl DeploymentResult {
    /// The discriminant of this outcome.
    #[must_use]
    pub const fn kind(&self) -> ResultKind {
        match self {
            Self::Success { .. } => ResultKind::Success,
            Self::ValidationFailure { .. } => ResultKind::ValidationFailure,
            Self::ReconciliationFailure { .. } => ResultKind::ReconciliationFailure,
            Self::PreviousRunFailure { .. } => ResultKind::PreviousRunFailure,
            Self::ExecutionFailure { .. } => ResultKind::ExecutionFailure,
        }
    }

    /// Whether this outcome represents a completed deployment.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Rendering context supplied by the caller, never derived from the outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    /// Display name used in report headers
    pub module_name: String,
}

impl ReportContext {
    /// Create a context for the given module display name.
    #[must_use]
    pub fn new(module_name: &str) -> Self {
        Self {
            module_name: module_name.to_string(),
        }
    }
}

//! The seam between the marketplace client and whatever holds the keys.
//!
//! A [`WalletApi`] can run read-only contract invocations, sign and submit
//! contract updates on behalf of an account, and report the finalized
//! outcome of a submitted transaction. Signing, nonce sequencing and
//! broadcasting are entirely the wallet's business.

use async_trait::async_trait;
use concordium_rust_sdk::{
    smart_contracts::common::AccountAddress,
    types::{
        hashes::{BlockHash, TransactionHash},
        transactions::UpdateContractPayload,
        Energy,
    },
};
use std::collections::BTreeMap;

/// A read-only invocation of a contract entrypoint.
#[derive(Debug, Clone)]
pub struct InvokeRequest {
    /// The account to invoke as. `None` lets the wallet pick.
    pub invoker: Option<AccountAddress>,
    pub payload: UpdateContractPayload,
}

/// A state-changing update to be signed by `sender`.
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub sender:  AccountAddress,
    pub payload: UpdateContractPayload,
    /// Maximum energy for executing the contract. The wallet adds the cost
    /// of the transaction header and signatures on top.
    pub energy:  Energy,
}

/// Result of a read-only invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeOutcome {
    Success {
        return_value: Option<Vec<u8>>,
        used_energy:  Energy,
    },
    Failure {
        reason:      String,
        used_energy: Energy,
    },
}

/// What happened to a finalized transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionOutcome {
    Success,
    Rejected { reason: String },
}

/// The outcome of one finalized transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSummary {
    pub hash:        TransactionHash,
    pub energy_cost: Energy,
    pub outcome:     TransactionOutcome,
}

impl TransactionSummary {
    pub fn is_success(&self) -> bool { self.outcome == TransactionOutcome::Success }
}

/// Outcomes of a submitted transaction, keyed by the block it is finalized
/// in.
pub type Outcomes = BTreeMap<BlockHash, TransactionSummary>;

/// Capability of a wallet provider.
#[async_trait]
pub trait WalletApi: Send {
    /// Invoke a contract entrypoint without creating a transaction.
    async fn invoke_contract(&mut self, request: InvokeRequest) -> anyhow::Result<InvokeOutcome>;

    /// Sign and submit a contract update. Returns once the transaction is
    /// accepted for processing.
    async fn send_update(&mut self, request: UpdateRequest) -> anyhow::Result<TransactionHash>;

    /// Wait until the transaction is finalized.
    async fn wait_for_finalization(&mut self, hash: &TransactionHash) -> anyhow::Result<Outcomes>;
}

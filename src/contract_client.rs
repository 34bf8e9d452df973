//! Generic read and write helpers on top of a [`WalletApi`].
//!
//! - `invoke_contract` runs a read-only entrypoint and returns its raw return
//!   value.
//! - `update_contract` signs and submits an update through the wallet and
//!   waits for its finalized outcome.

use crate::{
    constants::{DEFAULT_ADD_ENERGY, DEFAULT_TRANSFER_ENERGY, MARKETPLACE_CONTRACT_NAME},
    error::{ClientError, ClientResult},
    wallet::{InvokeOutcome, InvokeRequest, Outcomes, TransactionOutcome, UpdateRequest, WalletApi},
};
use concordium_rust_sdk::{
    smart_contracts::common::{
        AccountAddress, Amount, ContractAddress, OwnedParameter, OwnedReceiveName,
    },
    types::{transactions::UpdateContractPayload, Energy},
};

/// Description of a deployed contract: its name and the energy budgets used
/// when a caller does not supply one.
///
/// Built once and handed to the client, rather than read from globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractInfo {
    pub contract_name:   String,
    pub add_energy:      Energy,
    pub transfer_energy: Energy,
}

impl Default for ContractInfo {
    fn default() -> Self {
        ContractInfo {
            contract_name:   MARKETPLACE_CONTRACT_NAME.to_string(),
            add_energy:      DEFAULT_ADD_ENERGY,
            transfer_energy: DEFAULT_TRANSFER_ENERGY,
        }
    }
}

impl ContractInfo {
    /// The receive name `<contract>.<method>`.
    pub fn receive_name(&self, method: &str) -> ClientResult<OwnedReceiveName> {
        OwnedReceiveName::new(format!("{}.{}", self.contract_name, method))
            .map_err(|e| ClientError::InvalidReceiveName(format!("{e:?}")))
    }
}

/// Invoke `method` read-only and return the bytes it returned.
pub async fn invoke_contract<W: WalletApi + ?Sized>(
    wallet: &mut W,
    info: &ContractInfo,
    address: ContractAddress,
    method: &str,
    parameter: OwnedParameter,
) -> ClientResult<Vec<u8>> {
    let payload = UpdateContractPayload {
        amount: Amount::zero(),
        address,
        receive_name: info.receive_name(method)?,
        message: parameter,
    };
    tracing::debug!("Invoking {} on {}", payload.receive_name, address);

    let request = InvokeRequest {
        invoker: None,
        payload,
    };
    match wallet.invoke_contract(request).await? {
        InvokeOutcome::Success {
            return_value,
            used_energy,
        } => {
            tracing::debug!("Invoke of {method} used {used_energy} energy");
            return_value.ok_or_else(|| ClientError::MissingReturnValue {
                method: method.to_string(),
            })
        }
        InvokeOutcome::Failure {
            reason,
            ..
        } => Err(ClientError::InvokeFailed {
            method: method.to_string(),
            reason,
        }),
    }
}

/// Sign and submit an update of `method` as `sender`, attaching `amount`, and
/// wait for it to be finalized.
///
/// A finalized rejection is returned as [`ClientError::Rejected`].
#[allow(clippy::too_many_arguments)]
pub async fn update_contract<W: WalletApi + ?Sized>(
    wallet: &mut W,
    info: &ContractInfo,
    sender: AccountAddress,
    address: ContractAddress,
    method: &str,
    parameter: OwnedParameter,
    energy: Energy,
    amount: Amount,
) -> ClientResult<Outcomes> {
    let payload = UpdateContractPayload {
        amount,
        address,
        receive_name: info.receive_name(method)?,
        message: parameter,
    };
    tracing::debug!(
        "Updating {} on {} with {} energy and {} attached",
        payload.receive_name,
        address,
        energy,
        amount
    );

    let tx_hash = wallet
        .send_update(UpdateRequest {
            sender,
            payload,
            energy,
        })
        .await?;
    tracing::debug!("Sent transaction with hash: {tx_hash}");

    let outcomes = wallet.wait_for_finalization(&tx_hash).await?;
    for (block, summary) in &outcomes {
        if let TransactionOutcome::Rejected {
            reason,
        } = &summary.outcome
        {
            return Err(ClientError::Rejected {
                hash:   summary.hash,
                reason: reason.clone(),
            });
        }
        tracing::info!("Transaction finalized: tx_hash={} block={}", summary.hash, block);
    }
    Ok(outcomes)
}

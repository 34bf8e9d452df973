//! A [`WalletApi`] backed by a Concordium node and keys exported from a
//! wallet.

use crate::{
    constants::TRANSACTION_EXPIRY_SECONDS,
    wallet::{
        InvokeOutcome, InvokeRequest, Outcomes, TransactionOutcome, TransactionSummary,
        UpdateRequest, WalletApi,
    },
};
use anyhow::{bail, Context, Error};
use async_trait::async_trait;
use concordium_rust_sdk::{
    common::types::TransactionTime,
    smart_contracts::types::DEFAULT_INVOKE_ENERGY,
    types::{
        hashes::TransactionHash,
        smart_contracts::{ContractContext, InvokeContractResult},
        transactions::{self, send::GivenEnergy},
        AccountTransactionEffects, BlockItemSummary, BlockItemSummaryDetails, WalletAccount,
    },
    v2::{self, BlockIdentifier},
};
use std::{path::Path, sync::Arc};

/// Connection to a node (V2 API) together with the keys of one account.
#[derive(Debug, Clone)]
pub struct NodeWallet {
    /// The client to establish a connection to a Concordium node.
    pub client: v2::Client,
    /// The account keys used for signing transactions.
    pub key:    Arc<WalletAccount>,
}

impl NodeWallet {
    /// Create a wallet from a node client and a key file exported from a
    /// Concordium wallet.
    pub fn new(client: v2::Client, wallet_account_file: &Path) -> Result<NodeWallet, Error> {
        let key_data = WalletAccount::from_json_file(wallet_account_file)
            .context("Unable to read wallet file.")?;

        Ok(NodeWallet {
            client,
            key: key_data.into(),
        })
    }

    /// Summarize a finalized block item.
    /// It returns an error if the `block_item` is not a contract update.
    fn summarize_update(block_item: &BlockItemSummary) -> Result<TransactionSummary, Error> {
        let outcome = match &block_item.details {
            BlockItemSummaryDetails::AccountTransaction(a) => match &a.effects {
                AccountTransactionEffects::None {
                    reject_reason,
                    ..
                } => TransactionOutcome::Rejected {
                    reason: format!("{reject_reason:?}"),
                },
                AccountTransactionEffects::ContractUpdateIssued {
                    ..
                } => TransactionOutcome::Success,
                _ => bail!(
                    "The parsed account transaction effect should be of type \
                     `ContractUpdateIssued` or `None` (in case the transaction reverted)"
                ),
            },
            _ => bail!(
                "Can only parse an account transaction (no account creation transaction or chain \
                 update transaction)"
            ),
        };

        Ok(TransactionSummary {
            hash: block_item.hash,
            energy_cost: block_item.energy_cost,
            outcome,
        })
    }
}

#[async_trait]
impl WalletApi for NodeWallet {
    async fn invoke_contract(&mut self, request: InvokeRequest) -> anyhow::Result<InvokeOutcome> {
        let invoker = request.invoker.unwrap_or(self.key.address);
        let context = ContractContext::new_from_payload(invoker, DEFAULT_INVOKE_ENERGY, request.payload);

        let result = self.client.invoke_instance(&BlockIdentifier::LastFinal, &context).await?;

        let outcome = match result.response {
            InvokeContractResult::Failure {
                reason,
                used_energy,
                ..
            } => InvokeOutcome::Failure {
                reason: format!("{reason:?}"),
                used_energy,
            },
            InvokeContractResult::Success {
                return_value,
                used_energy,
                ..
            } => InvokeOutcome::Success {
                return_value: return_value.map(|r| r.value),
                used_energy,
            },
        };
        Ok(outcome)
    }

    async fn send_update(&mut self, request: UpdateRequest) -> anyhow::Result<TransactionHash> {
        if request.sender != self.key.address {
            bail!("No keys for account {}", request.sender);
        }

        let nonce = self.client.get_next_account_sequence_number(&self.key.address).await?;

        if !nonce.all_final {
            bail!("Nonce not final")
        }

        let expiry = TransactionTime::from_seconds(
            (chrono::Utc::now().timestamp() + TRANSACTION_EXPIRY_SECONDS) as u64,
        );

        let payload = transactions::Payload::Update {
            payload: request.payload,
        };

        let tx = transactions::send::make_and_sign_transaction(
            &*self.key,
            self.key.address,
            nonce.nonce,
            expiry,
            GivenEnergy::Add(request.energy),
            payload,
        );
        let bi = transactions::BlockItem::AccountTransaction(tx);

        let tx_hash = self.client.send_block_item(&bi).await?;
        Ok(tx_hash)
    }

    async fn wait_for_finalization(&mut self, hash: &TransactionHash) -> anyhow::Result<Outcomes> {
        let (block_hash, block_item) = self.client.wait_until_finalized(hash).await?;
        let summary = Self::summarize_update(&block_item)?;
        Ok(Outcomes::from([(block_hash, summary)]))
    }
}

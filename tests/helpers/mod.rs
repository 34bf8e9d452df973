//! Some helpers and constants that are used in most or all of the tests in this
//! folder.
use async_trait::async_trait;
use concordium_marketplace_client::*;
use concordium_rust_sdk::{
    smart_contracts::common::{to_bytes, AccountAddress, Amount, ContractAddress},
    types::{
        hashes::{BlockHash, TransactionHash},
        Energy,
    },
};

/// Test account 0.
pub(crate) const ACC_0: AccountAddress = AccountAddress([0; 32]);

/// Test account 1.
/// Dead code is allowed to avoid a warning when running `cargo test`.
/// `cargo test` compiles each test module independently and for the ones that
/// do not use `ACC_1` a warning is produced.
#[allow(dead_code)]
pub(crate) const ACC_1: AccountAddress = AccountAddress([1; 32]);

/// Address of the marketplace instance.
pub(crate) const MARKET_CONTRACT_ADDRESS: ContractAddress = ContractAddress {
    index:    2,
    subindex: 0,
};

/// Address of a CIS-2 contract holding the listed tokens.
#[allow(dead_code)]
pub(crate) const NFT_CONTRACT_ADDRESS: ContractAddress = ContractAddress {
    index:    1,
    subindex: 0,
};

pub(crate) fn tx_hash() -> TransactionHash {
    "0101010101010101010101010101010101010101010101010101010101010101"
        .parse()
        .expect("valid transaction hash")
}

pub(crate) fn block_hash() -> BlockHash {
    "0202020202020202020202020202020202020202020202020202020202020202"
        .parse()
        .expect("valid block hash")
}

pub(crate) fn market() -> MarketplaceClient {
    MarketplaceClient::new(ContractInfo::default(), MARKET_CONTRACT_ADDRESS)
}

/// A wallet which records every request and answers with canned outcomes.
#[derive(Debug, Default)]
pub(crate) struct MockWallet {
    /// Returned by every invoke. Invoking without one fails.
    pub(crate) invoke_outcome: Option<InvokeOutcome>,
    /// When set, every update is refused with this message.
    pub(crate) refuse_updates: Option<String>,
    /// The reason to reject finalized updates with.
    pub(crate) reject_reason:  Option<String>,
    pub(crate) invokes:        Vec<InvokeRequest>,
    pub(crate) updates:        Vec<UpdateRequest>,
}

#[allow(dead_code)]
impl MockWallet {
    pub(crate) fn returning(return_value: Vec<u8>) -> Self {
        MockWallet {
            invoke_outcome: Some(InvokeOutcome::Success {
                return_value: Some(return_value),
                used_energy:  Energy::from(100),
            }),
            ..Default::default()
        }
    }
}

#[async_trait]
impl WalletApi for MockWallet {
    async fn invoke_contract(&mut self, request: InvokeRequest) -> anyhow::Result<InvokeOutcome> {
        self.invokes.push(request);
        self.invoke_outcome.clone().ok_or_else(|| anyhow::anyhow!("node unreachable"))
    }

    async fn send_update(&mut self, request: UpdateRequest) -> anyhow::Result<TransactionHash> {
        if let Some(message) = &self.refuse_updates {
            anyhow::bail!("{message}");
        }
        self.updates.push(request);
        Ok(tx_hash())
    }

    async fn wait_for_finalization(&mut self, hash: &TransactionHash) -> anyhow::Result<Outcomes> {
        let outcome = match &self.reject_reason {
            Some(reason) => TransactionOutcome::Rejected {
                reason: reason.clone(),
            },
            None => TransactionOutcome::Success,
        };
        Ok(Outcomes::from([(block_hash(), TransactionSummary {
            hash: *hash,
            energy_cost: Energy::from(1234),
            outcome,
        })]))
    }
}

/// Encode one listing the way the `list` entrypoint lays it out.
#[allow(dead_code)]
#[allow(clippy::too_many_arguments)]
pub(crate) fn encode_listing(
    out: &mut Vec<u8>,
    token_id: &TokenId,
    contract: ContractAddress,
    price: Amount,
    owner: AccountAddress,
    royalty: u16,
    primary_owner: AccountAddress,
    quantity: &TokenAmount,
) {
    out.extend(to_bytes(token_id));
    out.extend(to_bytes(&contract));
    out.extend(to_bytes(&price));
    out.extend(to_bytes(&owner));
    out.extend(to_bytes(&royalty));
    out.extend(to_bytes(&primary_owner));
    out.extend(to_bytes(quantity));
}

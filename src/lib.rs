//! An off-chain client for the `Market-NFT` marketplace contract.
//!
//! The marketplace contract holds all listing, pricing and escrow rules. This
//! crate only knows how to call its three entrypoints:
//! - `list` : a read-only query returning the buyable tokens.
//! - `add` : an update listing a token (or updating its listing).
//! - `transfer` : an update paying `price * quantity` for a listed token and
//!   transferring it to the buyer.
//!
//! Calls go through a [`WalletApi`], which holds the keys and talks to the
//! chain. [`NodeWallet`] implements it against a node using keys exported
//! from a wallet.
//!
//! # Example
//!
//! ```no_run
//! # async fn example() -> anyhow::Result<()> {
//! use concordium_marketplace_client::{ContractInfo, MarketplaceClient, NodeWallet};
//! use concordium_rust_sdk::{smart_contracts::common::ContractAddress, v2};
//!
//! let client = v2::Client::new(v2::Endpoint::from_static(
//!     "http://node.testnet.concordium.com:20000",
//! ))
//! .await?;
//! let mut wallet = NodeWallet::new(client, "./account.export".as_ref())?;
//! let market = MarketplaceClient::new(ContractInfo::default(), ContractAddress::new(4005, 0));
//! for token in market.list(&mut wallet).await? {
//!     println!("{} x {} at {}", token.token_id, token.quantity, token.price);
//! }
//! # Ok(())
//! # }
//! ```
mod constants;
mod contract_client;
mod error;
mod marketplace;
mod node;
mod types;
mod wallet;

pub use concordium_rust_sdk::cis2::{TokenAmount, TokenId};
pub use constants::*;
pub use contract_client::{invoke_contract, update_contract, ContractInfo};
pub use error::{ClientError, ClientResult};
pub use marketplace::{transfer_amount, MarketplaceClient, Purchase};
pub use node::NodeWallet;
pub use types::{
    decode_token_list, AddParams, ParamContractAddress, TokenList, TokenListItem, TransferParams,
};
pub use wallet::{
    InvokeOutcome, InvokeRequest, Outcomes, TransactionOutcome, TransactionSummary,
    UpdateRequest, WalletApi,
};

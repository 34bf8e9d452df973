//! Client of a `Market-NFT` contract instance.
//!
//! # Description
//! It abstracts away calling the marketplace contract for the following
//! entrypoints
//! - `list` : returns the tokens which can be bought.
//! - `add` : lists a token, or updates its listing, at a price.
//! - `transfer` : pays for a quantity of a listed token and transfers it to
//!   the buyer.

use crate::{
    constants::{ADD_ENTRYPOINT_NAME, LIST_ENTRYPOINT_NAME, TRANSFER_ENTRYPOINT_NAME},
    contract_client::{invoke_contract, update_contract, ContractInfo},
    error::{ClientError, ClientResult},
    types::{decode_token_list, AddParams, TokenList, TransferParams},
    wallet::{Outcomes, WalletApi},
};
use concordium_rust_sdk::{
    cis2::{TokenAmount, TokenId},
    smart_contracts::common::{AccountAddress, Amount, ContractAddress, OwnedParameter},
    types::Energy,
};
use num_bigint::BigUint;

/// What a buyer asks `transfer` for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    /// The CIS-2 contract the token originates from.
    pub nft_contract_address: ContractAddress,
    pub token_id:             TokenId,
    /// Listed price per unit in micro CCD.
    pub price:                BigUint,
    /// The account currently owning the listed tokens.
    pub owner:                AccountAddress,
    pub quantity:             BigUint,
}

/// Client for interacting with a marketplace contract instance.
///
/// ## Examples
/// ```rust
/// use concordium_marketplace_client::{ContractInfo, MarketplaceClient};
/// use concordium_rust_sdk::smart_contracts::common::ContractAddress;
/// MarketplaceClient::new(ContractInfo::default(), ContractAddress::new(0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct MarketplaceClient {
    info:     ContractInfo,
    contract: ContractAddress,
}

impl MarketplaceClient {
    pub fn new(info: ContractInfo, contract: ContractAddress) -> Self {
        MarketplaceClient {
            info,
            contract,
        }
    }

    pub fn contract(&self) -> ContractAddress { self.contract }

    pub fn info(&self) -> &ContractInfo { &self.info }

    /// Get the tokens available to buy.
    pub async fn list<W: WalletApi + ?Sized>(&self, wallet: &mut W) -> ClientResult<TokenList> {
        let return_value = invoke_contract(
            wallet,
            &self.info,
            self.contract,
            LIST_ENTRYPOINT_NAME,
            OwnedParameter::empty(),
        )
        .await?;

        decode_token_list(&return_value).map_err(|_| ClientError::ParseResult {
            method: LIST_ENTRYPOINT_NAME.to_string(),
        })
    }

    /// Add a token to the list of buyable tokens as `account`.
    ///
    /// `energy` defaults to the `add` budget of the [`ContractInfo`].
    pub async fn add<W: WalletApi + ?Sized>(
        &self,
        wallet: &mut W,
        account: AccountAddress,
        params: &AddParams,
        energy: Option<Energy>,
    ) -> ClientResult<Outcomes> {
        update_contract(
            wallet,
            &self.info,
            account,
            self.contract,
            ADD_ENTRYPOINT_NAME,
            OwnedParameter::from_serial(params)?,
            energy.unwrap_or(self.info.add_energy),
            Amount::zero(),
        )
        .await
    }

    /// Buy `purchase.quantity` units of a listed token for `account`, paying
    /// `price * quantity`.
    ///
    /// `energy` defaults to the `transfer` budget of the [`ContractInfo`].
    pub async fn transfer<W: WalletApi + ?Sized>(
        &self,
        wallet: &mut W,
        account: AccountAddress,
        purchase: Purchase,
        energy: Option<Energy>,
    ) -> ClientResult<Outcomes> {
        let amount = transfer_amount(&purchase.price, &purchase.quantity)?;
        let params = TransferParams {
            nft_contract_address: purchase.nft_contract_address.into(),
            token_id:             purchase.token_id,
            to:                   account,
            owner:                purchase.owner,
            quantity:             TokenAmount(purchase.quantity),
        };

        update_contract(
            wallet,
            &self.info,
            account,
            self.contract,
            TRANSFER_ENTRYPOINT_NAME,
            OwnedParameter::from_serial(&params)?,
            energy.unwrap_or(self.info.transfer_energy),
            amount,
        )
        .await
    }
}

/// The amount to attach when buying `quantity` units at `price` micro CCD
/// each.
///
/// The product is exact; it is an error if it exceeds what a transaction can
/// carry.
pub fn transfer_amount(price: &BigUint, quantity: &BigUint) -> ClientResult<Amount> {
    let total = price * quantity;
    let micro_ccd = u64::try_from(&total).map_err(|_| ClientError::AmountOutOfRange(total.clone()))?;
    Ok(Amount::from_micro_ccd(micro_ccd))
}

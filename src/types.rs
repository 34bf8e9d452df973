//! Parameter and return value types of the marketplace contract.
//!
//! The binary encodings follow the field order of the contract's own
//! parameter types. Token ids and amounts use the CIS-2 types of the SDK; the
//! JSON views use the client-facing field names.

use crate::constants::MAX_TOKEN_AMOUNT_BITS;
use concordium_rust_sdk::{
    cis2::{TokenAmount, TokenId},
    smart_contracts::common::{
        AccountAddress, Amount, ContractAddress, Cursor, Deserial, ParseError, ParseResult, Read,
        Serial, Write,
    },
};
use num_bigint::BigUint;
use serde::{Serialize, Serializer};
use std::fmt;

/// Read a CIS-2 token amount, refusing values of 2^256 or more.
///
/// The 37th LEB128 byte may only carry the top 4 of the 256 bits.
fn deserial_token_amount<R: Read>(source: &mut R) -> ParseResult<TokenAmount> {
    let amount = TokenAmount::deserial(source)?;
    if amount.0.bits() > MAX_TOKEN_AMOUNT_BITS {
        return Err(ParseError::default());
    }
    Ok(amount)
}

/// The `{index, subindex}` pair encoding of a contract address used in
/// parameters.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct ParamContractAddress {
    pub index:    u64,
    pub subindex: u64,
}

impl From<ContractAddress> for ParamContractAddress {
    fn from(address: ContractAddress) -> Self {
        ParamContractAddress {
            index:    address.index,
            subindex: address.subindex,
        }
    }
}

impl From<ParamContractAddress> for ContractAddress {
    fn from(address: ParamContractAddress) -> Self {
        ContractAddress::new(address.index, address.subindex)
    }
}

impl Serial for ParamContractAddress {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        ContractAddress::from(*self).serial(out)
    }
}

impl Deserial for ParamContractAddress {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        Ok(ContractAddress::deserial(source)?.into())
    }
}

fn serialize_display<T: fmt::Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn serialize_micro_ccd<S: Serializer>(amount: &Amount, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&amount.micro_ccd())
}

/// Parameter of the `add` entrypoint.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct AddParams {
    pub nft_contract_address: ParamContractAddress,
    pub token_id:             TokenId,

    /// Price per unit of the token, including the marketplace commission.
    #[serde(serialize_with = "serialize_micro_ccd")]
    pub price: Amount,

    /// Royalty basis points, i.e. royalty percentage * 100.
    pub royalty: u16,

    /// Quantity of the token to list. For an NFT this is always one.
    pub quantity: TokenAmount,
}

impl Serial for AddParams {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        self.nft_contract_address.serial(out)?;
        self.token_id.serial(out)?;
        self.price.serial(out)?;
        self.royalty.serial(out)?;
        self.quantity.serial(out)
    }
}

/// Parameter of the `transfer` entrypoint.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TransferParams {
    pub nft_contract_address: ParamContractAddress,
    pub token_id:             TokenId,
    #[serde(serialize_with = "serialize_display")]
    pub to:                   AccountAddress,
    #[serde(serialize_with = "serialize_display")]
    pub owner:                AccountAddress,
    pub quantity:             TokenAmount,
}

impl Serial for TransferParams {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        self.nft_contract_address.serial(out)?;
        self.token_id.serial(out)?;
        self.to.serial(out)?;
        self.owner.serial(out)?;
        self.quantity.serial(out)
    }
}

/// A listing as laid out in the return value of the `list` entrypoint.
#[derive(Debug)]
struct ListedToken {
    token_id:      TokenId,
    contract:      ContractAddress,
    price:         Amount,
    owner:         AccountAddress,
    royalty:       u16,
    primary_owner: AccountAddress,
    quantity:      TokenAmount,
}

impl Deserial for ListedToken {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        Ok(ListedToken {
            token_id:      TokenId::deserial(source)?,
            contract:      ContractAddress::deserial(source)?,
            price:         Amount::deserial(source)?,
            owner:         AccountAddress::deserial(source)?,
            royalty:       u16::deserial(source)?,
            primary_owner: AccountAddress::deserial(source)?,
            quantity:      deserial_token_amount(source)?,
        })
    }
}

/// A buyable token as returned by [`list`](crate::MarketplaceClient::list).
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenListItem {
    /// The CIS-2 contract the token originates from.
    #[serde(serialize_with = "serialize_contract_address")]
    pub contract:      ContractAddress,
    #[serde(serialize_with = "serialize_display")]
    pub owner:         AccountAddress,
    /// Price per unit in micro CCD.
    #[serde(serialize_with = "serialize_display")]
    pub price:         BigUint,
    /// The account which listed the token first and receives royalties.
    #[serde(serialize_with = "serialize_display")]
    pub primary_owner: AccountAddress,
    #[serde(serialize_with = "serialize_display")]
    pub quantity:      BigUint,
    pub royalty:       u16,
    pub token_id:      TokenId,
}

fn serialize_contract_address<S: Serializer>(
    address: &ContractAddress,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    ParamContractAddress::from(*address).serialize(serializer)
}

impl From<ListedToken> for TokenListItem {
    fn from(token: ListedToken) -> Self {
        TokenListItem {
            contract:      token.contract,
            owner:         token.owner,
            price:         BigUint::from(token.price.micro_ccd()),
            primary_owner: token.primary_owner,
            quantity:      token.quantity.into(),
            royalty:       token.royalty,
            token_id:      token.token_id,
        }
    }
}

/// Buyable tokens in the order the contract returns them.
pub type TokenList = Vec<TokenListItem>;

/// Decode the return value of the `list` entrypoint: a `u16` count followed by
/// that many listings.
///
/// All of `bytes` must be consumed.
pub fn decode_token_list(bytes: &[u8]) -> ParseResult<TokenList> {
    let mut cursor = Cursor::new(bytes);
    let len = u16::deserial(&mut cursor)?;
    let mut tokens = Vec::with_capacity(usize::from(len));
    for _ in 0..len {
        tokens.push(ListedToken::deserial(&mut cursor)?.into());
    }
    if cursor.offset != bytes.len() {
        return Err(ParseError::default());
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use concordium_rust_sdk::smart_contracts::common::to_bytes;

    fn max_amount() -> TokenAmount { TokenAmount((BigUint::from(1u8) << 256u32) - 1u8) }

    fn read_amount(bytes: &[u8]) -> ParseResult<TokenAmount> {
        deserial_token_amount(&mut Cursor::new(bytes))
    }

    #[test]
    fn deserial_token_amount_max_test() {
        let bytes = to_bytes(&max_amount());
        assert_eq!(bytes.len(), 37);
        assert_eq!(read_amount(&bytes), Ok(max_amount()));
    }

    #[test]
    fn deserial_token_amount_small_values() {
        assert_eq!(read_amount(&[0]), Ok(TokenAmount::from(0u64)));
        assert_eq!(read_amount(&[0b1000_0000, 0b0000_0001]), Ok(TokenAmount::from(128u64)));
    }

    #[test]
    fn deserial_token_amount_overflow() {
        let mut bytes = to_bytes(&max_amount());
        for extra in [0b0001_0000, 0b0100_0000, 0b0111_1111] {
            bytes[36] |= extra;
            assert_eq!(read_amount(&bytes), Err(ParseError::default()));
        }
    }

    #[test]
    fn deserial_token_amount_too_long() {
        let bytes = vec![0b1000_0000; 38];
        assert_eq!(read_amount(&bytes), Err(ParseError::default()));
    }

    #[test]
    fn transfer_params_layout() {
        let params = TransferParams {
            nft_contract_address: ParamContractAddress {
                index:    1,
                subindex: 0,
            },
            token_id:             "01".parse().expect("valid hex"),
            to:                   AccountAddress([1; 32]),
            owner:                AccountAddress([2; 32]),
            quantity:             TokenAmount::from(2u64),
        };
        let mut expected = Vec::new();
        expected.extend_from_slice(&1u64.to_le_bytes());
        expected.extend_from_slice(&0u64.to_le_bytes());
        expected.extend_from_slice(&[1, 0x01]);
        expected.extend_from_slice(&[1; 32]);
        expected.extend_from_slice(&[2; 32]);
        expected.push(2);
        assert_eq!(to_bytes(&params), expected);
    }

    #[test]
    fn decode_empty_token_list() {
        assert_eq!(decode_token_list(&[0, 0]), Ok(Vec::new()));
    }

    #[test]
    fn decode_token_list_rejects_trailing_bytes() {
        assert_eq!(decode_token_list(&[0, 0, 7]), Err(ParseError::default()));
    }

    #[test]
    fn decode_token_list_rejects_truncated_input() {
        assert_eq!(decode_token_list(&[1, 0, 1]), Err(ParseError::default()));
    }
}

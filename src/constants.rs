//! Various constants.

use concordium_rust_sdk::types::Energy;

/// Name of the marketplace contract as given in its `init` function.
pub const MARKETPLACE_CONTRACT_NAME: &str = "Market-NFT";

/// Entrypoint returning the list of buyable tokens.
pub const LIST_ENTRYPOINT_NAME: &str = "list";

/// Entrypoint adding a token to the list of buyable tokens, or updating its
/// listing.
pub const ADD_ENTRYPOINT_NAME: &str = "add";

/// Entrypoint paying for and transferring a listed token.
pub const TRANSFER_ENTRYPOINT_NAME: &str = "transfer";

/// Execution energy used for `add` when the caller does not supply any.
pub const DEFAULT_ADD_ENERGY: Energy = Energy {
    energy: 9999,
};

/// Execution energy used for `transfer` when the caller does not supply any.
pub const DEFAULT_TRANSFER_ENERGY: Energy = Energy {
    energy: 6000,
};

/// Seconds from now until a submitted transaction expires.
pub(crate) const TRANSACTION_EXPIRY_SECONDS: i64 = 300;

/// CIS-2 token amounts range from 0 to 2^256 - 1.
pub(crate) const MAX_TOKEN_AMOUNT_BITS: u64 = 256;

/// Default V2 API endpoint used by the command line client.
pub const DEFAULT_NODE_ENDPOINT: &str = "http://node.testnet.concordium.com:20000";

use concordium_rust_sdk::{smart_contracts::common::ExceedsParameterSize, types::hashes::TransactionHash};
use num_bigint::BigUint;
use thiserror::Error;

/// Errors which can be returned by the
/// [`MarketplaceClient`](crate::MarketplaceClient).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The wallet or the node behind it failed. Passed through untouched.
    #[error(transparent)]
    Wallet(#[from] anyhow::Error),
    /// The contract rejected a read-only invocation.
    #[error("invoking `{method}` failed: {reason}")]
    InvokeFailed { method: String, reason: String },
    /// The invocation succeeded but did not produce a return value.
    #[error("invoking `{method}` produced no return value")]
    MissingReturnValue { method: String },
    /// The return value could not be parsed.
    #[error("could not parse the return value of `{method}`")]
    ParseResult { method: String },
    /// The finalized transaction was rejected by the contract.
    #[error("transaction {hash} was rejected: {reason}")]
    Rejected { hash: TransactionHash, reason: String },
    /// The serialized parameter is larger than a contract call accepts.
    #[error("parameter is too large: {0}")]
    ParameterSize(#[from] ExceedsParameterSize),
    /// The contract name and entrypoint do not form a valid receive name.
    #[error("invalid receive name: {0}")]
    InvalidReceiveName(String),
    /// `price * quantity` does not fit in a chain amount.
    #[error("amount of {0} micro CCD cannot be sent in a transaction")]
    AmountOutOfRange(BigUint),
}

pub type ClientResult<A> = Result<A, ClientError>;

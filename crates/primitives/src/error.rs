//! Input validation errors.

use crate::constants::MAX_CHAIN_ID;
use thiserror::Error;

/// Malformed or out-of-range provisioning input.
///
/// Validation failures are deterministic and unrecoverable; they propagate
/// to the caller without retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The sealer account identifier is not a 20-byte hex address.
    #[error("invalid sealer address: {0:?}")]
    InvalidAddress(String),
    /// The requested chain id does not fit the provisionable range.
    #[error("chain id {0} out of range (1..={MAX_CHAIN_ID})")]
    ChainIdOutOfRange(u64),
}

//! Genesis specification primitives for single-sealer Clique networks.
//!
//! This crate contains the value types describing block 0 of a
//! proof-of-authority chain and the canonical [`GenesisBuilder`] that
//! constructs them from a sealer address, an optional chain id and an
//! optional block period.

mod builder;
pub mod constants;
mod error;
mod genesis;
pub mod serde_helper;

pub use builder::GenesisBuilder;
pub use error::ValidationError;
pub use genesis::{clique_extra_data, ChainConfig, CliqueConfig, Genesis, GenesisAccount};

pub use alloy_primitives::{Address, Bytes, U256};

/// Parses a sealer account identifier from its hex representation.
///
/// Accepts a 20-byte hex string with or without the `0x` prefix. This is
/// the boundary validation for operator-supplied addresses; the builder
/// itself assumes a well-formed [`Address`].
pub fn parse_sealer_address(s: &str) -> Result<Address, ValidationError> {
    s.parse().map_err(|_| ValidationError::InvalidAddress(s.to_owned()))
}

//! Fixed parameters of the provisioned genesis specification.

use alloy_primitives::U256;

/// Number of blocks between Clique validator-set checkpoint resets.
pub const CLIQUE_EPOCH: u64 = 30_000;

/// Target seconds between blocks when no period is requested.
pub const DEFAULT_BLOCK_PERIOD: u64 = 15;

/// Gas limit of the genesis block.
pub const GENESIS_GAS_LIMIT: u64 = 4_700_000;

/// Difficulty of the genesis header.
///
/// Clique ignores proof-of-work difficulty; the field stays at `1` for
/// legacy header compatibility.
pub const GENESIS_DIFFICULTY: U256 = U256::from_limbs([1, 0, 0, 0]);

/// Largest provisionable chain id.
pub const MAX_CHAIN_ID: u64 = 65_535;

/// Number of vanity bytes leading the Clique extra-data field.
pub const EXTRA_DATA_VANITY: usize = 32;

/// Number of signature placeholder bytes trailing the Clique extra-data
/// field.
pub const EXTRA_DATA_SEAL: usize = 65;

/// Opening balance of the sealer account: `2^256 / 128` wei.
///
/// Leaves headroom for many pre-fund transfers without overflowing the
/// 256-bit balance field.
pub const SEALER_BALANCE: U256 = U256::from_limbs([0, 0, 0, 1 << 57]);

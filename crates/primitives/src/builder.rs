//! The canonical Clique genesis builder.

use crate::{
    clique_extra_data,
    constants::{
        CLIQUE_EPOCH, DEFAULT_BLOCK_PERIOD, GENESIS_DIFFICULTY, GENESIS_GAS_LIMIT, MAX_CHAIN_ID,
        SEALER_BALANCE,
    },
    ChainConfig, CliqueConfig, Genesis, GenesisAccount, ValidationError,
};
use alloy_primitives::Address;
use rand::Rng;
use std::{
    collections::BTreeMap,
    time::{SystemTime, UNIX_EPOCH},
};

/// Builds the [`Genesis`] specification of a single-sealer Clique network.
///
/// The sealer is the sole authority allowed to produce blocks and the sole
/// prefunded account. Given an explicit chain id and period, two builds
/// yield identical specifications apart from their timestamps. With the
/// chain id left unset, a fresh one is drawn from the entropy source on
/// every build: convenient for throwaway networks, deliberately not
/// reproducible.
///
/// # Example
/// ```
/// # use poagen_primitives::{Address, GenesisBuilder};
/// let sealer = Address::repeat_byte(0xaa);
/// let genesis = GenesisBuilder::new(sealer).chain_id(1337).period(5).build()?;
///
/// assert_eq!(genesis.config.chain_id, 1337);
/// assert_eq!(genesis.config.clique.period, 5);
/// # Ok::<(), poagen_primitives::ValidationError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GenesisBuilder {
    sealer: Address,
    chain_id: Option<u64>,
    period: Option<u64>,
}

impl GenesisBuilder {
    /// Starts a builder for the given sealer account.
    pub const fn new(sealer: Address) -> Self {
        Self { sealer, chain_id: None, period: None }
    }

    /// Sets the network chain id. Must lie within `1..=65535`.
    ///
    /// Zero normalizes to "unset": operators pass `0` to mean "draw a
    /// random id", and that convention is resolved here rather than
    /// carrying a zero sentinel through the rest of the crate.
    pub fn chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = (chain_id != 0).then_some(chain_id);
        self
    }

    /// Sets the target seconds between blocks.
    ///
    /// Zero normalizes to "unset", which resolves to
    /// [`DEFAULT_BLOCK_PERIOD`].
    pub fn period(mut self, period: u64) -> Self {
        self.period = (period != 0).then_some(period);
        self
    }

    /// Builds the specification, using thread-local entropy for an unset
    /// chain id.
    pub fn build(self) -> Result<Genesis, ValidationError> {
        self.build_with_rng(&mut rand::thread_rng())
    }

    /// Builds the specification, drawing an unset chain id uniformly from
    /// `0..=65535` out of `rng`.
    pub fn build_with_rng<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Genesis, ValidationError> {
        if let Some(chain_id) = self.chain_id {
            if chain_id > MAX_CHAIN_ID {
                return Err(ValidationError::ChainIdOutOfRange(chain_id));
            }
        }
        let chain_id = self.chain_id.unwrap_or_else(|| rng.gen_range(0..=MAX_CHAIN_ID));
        let period = self.period.unwrap_or(DEFAULT_BLOCK_PERIOD);

        Ok(Genesis {
            config: ChainConfig {
                chain_id,
                homestead_block: 0,
                eip150_block: 0,
                eip155_block: 0,
                eip158_block: 0,
                byzantium_block: 0,
                constantinople_block: 0,
                petersburg_block: 0,
                istanbul_block: 0,
                clique: CliqueConfig { period, epoch: CLIQUE_EPOCH },
            },
            timestamp: unix_now(),
            gas_limit: GENESIS_GAS_LIMIT,
            difficulty: GENESIS_DIFFICULTY,
            extra_data: clique_extra_data(self.sealer),
            alloc: BTreeMap::from([(self.sealer, GenesisAccount { balance: SEALER_BALANCE })]),
        })
    }
}

fn unix_now() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs()
}

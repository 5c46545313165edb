//! Types describing the genesis block of a Clique network.

use crate::constants::{EXTRA_DATA_SEAL, EXTRA_DATA_VANITY};
use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The genesis block specification of a single-sealer Clique network.
///
/// Fully determined by the sealer address, chain id and block period (plus
/// the creation timestamp); constructed once by
/// [`GenesisBuilder`](crate::GenesisBuilder) and never mutated. Struct field
/// order is the serialization order; consumers diff genesis files across
/// runs, so it must stay stable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genesis {
    /// Consensus and fork-activation configuration.
    pub config: ChainConfig,
    /// Creation time in unix seconds. Informational only.
    #[serde(with = "crate::serde_helper::u64_hex")]
    pub timestamp: u64,
    /// Gas limit of the genesis block.
    #[serde(with = "crate::serde_helper::u64_hex")]
    pub gas_limit: u64,
    /// Genesis header difficulty.
    pub difficulty: U256,
    /// Clique vanity/sealer/seal bytes, see [`clique_extra_data`].
    pub extra_data: Bytes,
    /// Opening account balances.
    pub alloc: BTreeMap<Address, GenesisAccount>,
}

/// The subset of the chain configuration this tool emits: the chain id, the
/// pre-merge protocol upgrades (all active from genesis) and the Clique
/// engine parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    /// Network identifier, prevents cross-network transaction replay.
    pub chain_id: u64,
    /// Homestead activation block.
    pub homestead_block: u64,
    /// EIP-150 activation block.
    pub eip150_block: u64,
    /// EIP-155 activation block.
    pub eip155_block: u64,
    /// EIP-158 activation block.
    pub eip158_block: u64,
    /// Byzantium activation block.
    pub byzantium_block: u64,
    /// Constantinople activation block.
    pub constantinople_block: u64,
    /// Petersburg activation block.
    pub petersburg_block: u64,
    /// Istanbul activation block.
    pub istanbul_block: u64,
    /// Clique engine parameters.
    pub clique: CliqueConfig,
}

/// Clique (proof-of-authority) engine parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliqueConfig {
    /// Target seconds between blocks.
    pub period: u64,
    /// Blocks between validator-set checkpoint resets.
    pub epoch: u64,
}

/// An account record in the genesis `alloc`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisAccount {
    /// Opening balance in wei.
    pub balance: U256,
}

/// Assembles the Clique extra-data field for the initial sealer.
///
/// The layout is mandated by [EIP-225](https://eips.ethereum.org/EIPS/eip-225):
/// 32 zero vanity bytes, the 20-byte sealer address, then 65 zero bytes
/// standing in for the proposer signature (block 0 has no proposer).
pub fn clique_extra_data(sealer: Address) -> Bytes {
    [&[0u8; EXTRA_DATA_VANITY][..], sealer.as_slice(), &[0u8; EXTRA_DATA_SEAL][..]]
        .concat()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        CLIQUE_EPOCH, GENESIS_DIFFICULTY, GENESIS_GAS_LIMIT, SEALER_BALANCE,
    };

    fn sealer() -> Address {
        Address::repeat_byte(0xaa)
    }

    #[test]
    fn extra_data_layout() {
        let extra = clique_extra_data(sealer());
        assert_eq!(extra.len(), EXTRA_DATA_VANITY + 20 + EXTRA_DATA_SEAL);
        assert!(extra[..32].iter().all(|b| *b == 0));
        assert_eq!(&extra[32..52], sealer().as_slice());
        assert!(extra[52..].iter().all(|b| *b == 0));
    }

    #[test]
    fn stable_serialization() {
        let genesis = Genesis {
            config: ChainConfig {
                chain_id: 1337,
                homestead_block: 0,
                eip150_block: 0,
                eip155_block: 0,
                eip158_block: 0,
                byzantium_block: 0,
                constantinople_block: 0,
                petersburg_block: 0,
                istanbul_block: 0,
                clique: CliqueConfig { period: 5, epoch: CLIQUE_EPOCH },
            },
            timestamp: 42,
            gas_limit: GENESIS_GAS_LIMIT,
            difficulty: GENESIS_DIFFICULTY,
            extra_data: clique_extra_data(sealer()),
            alloc: BTreeMap::from([(sealer(), GenesisAccount { balance: SEALER_BALANCE })]),
        };

        let expected = format!(
            r#"{{
  "config": {{
    "chainId": 1337,
    "homesteadBlock": 0,
    "eip150Block": 0,
    "eip155Block": 0,
    "eip158Block": 0,
    "byzantiumBlock": 0,
    "constantinopleBlock": 0,
    "petersburgBlock": 0,
    "istanbulBlock": 0,
    "clique": {{
      "period": 5,
      "epoch": 30000
    }}
  }},
  "timestamp": "0x2a",
  "gasLimit": "0x47b760",
  "difficulty": "0x1",
  "extraData": "0x{vanity}{sealer}{seal}",
  "alloc": {{
    "0x{sealer}": {{
      "balance": "0x2{zeros}"
    }}
  }}
}}"#,
            vanity = "00".repeat(32),
            sealer = "aa".repeat(20),
            seal = "00".repeat(65),
            zeros = "0".repeat(62),
        );
        assert_eq!(serde_json::to_string_pretty(&genesis).unwrap(), expected);

        // and it reads back to the same value
        let decoded: Genesis = serde_json::from_str(&expected).unwrap();
        assert_eq!(decoded, genesis);
    }
}

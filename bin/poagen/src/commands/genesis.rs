//! Command that writes a Clique genesis spec for an existing sealer.

use crate::utils::write_genesis_file;
use clap::Parser;
use poagen_primitives::{parse_sealer_address, Address, GenesisBuilder};
use std::path::PathBuf;
use tracing::info;

/// Creates a Clique consensus genesis spec prefunding the given sealer.
#[derive(Debug, Parser)]
pub struct GenesisCommand {
    /// Directory to write `genesis.json` into.
    #[arg(long, short = 'o', value_name = "DIRECTORY", default_value = "config")]
    output: PathBuf,

    /// Account that seals blocks and receives the opening balance.
    #[arg(long, value_name = "ADDRESS", value_parser = parse_sealer_address)]
    address: Address,

    /// Chain id for the network.
    ///
    /// Drawn at random from 0..=65535 when omitted or zero; pass an
    /// explicit id for reproducible output.
    #[arg(long, value_name = "CHAIN_ID", verbatim_doc_comment)]
    chain_id: Option<u64>,

    /// Seconds of block time.
    #[arg(long, value_name = "SECONDS", default_value_t = poagen_primitives::constants::DEFAULT_BLOCK_PERIOD)]
    period: u64,
}

impl GenesisCommand {
    /// Execute the `genesis` command
    pub fn execute(self) -> eyre::Result<()> {
        let mut builder = GenesisBuilder::new(self.address).period(self.period);
        if let Some(chain_id) = self.chain_id {
            builder = builder.chain_id(chain_id);
        }
        let genesis = builder.build()?;

        let path = write_genesis_file(&self.output, &genesis)?;
        info!(
            target: "poagen::cli",
            chain_id = genesis.config.chain_id,
            path = %path.display(),
            "Genesis spec written"
        );
        Ok(())
    }
}

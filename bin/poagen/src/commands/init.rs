//! Command that provisions a complete single-sealer network configuration.

use crate::{commands::KEYSTORE_DIR_NAME, utils::write_genesis_file};
use clap::Parser;
use poagen_keystore::create_keystore;
use poagen_primitives::GenesisBuilder;
use std::path::PathBuf;
use tracing::info;

/// Creates a sealer keystore and a genesis spec prefunding that sealer.
#[derive(Debug, Parser)]
pub struct InitCommand {
    /// Directory to store the generated configuration in.
    #[arg(long, short = 'o', value_name = "DIRECTORY", default_value = "config")]
    output: PathBuf,

    /// Password locking the sealer key.
    ///
    /// Supplied per invocation and never persisted; keep it in a secret
    /// store, the key file is unrecoverable without it.
    #[arg(long, value_name = "PASSWORD", verbatim_doc_comment)]
    password: String,

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

impl InitCommand {
    /// Execute the `init` command
    pub fn execute(self) -> eyre::Result<()> {
        let record = create_keystore(self.output.join(KEYSTORE_DIR_NAME), &self.password)?;
        info!(target: "poagen::cli", address = %record.address, "New sealer key generated");

        let mut builder = GenesisBuilder::new(record.address).period(self.period);
        if let Some(chain_id) = self.chain_id {
            builder = builder.chain_id(chain_id);
        }
        let genesis = builder.build()?;
        let genesis_path = write_genesis_file(&self.output, &genesis)?;

        info!(
            target: "poagen::cli",
            chain_id = genesis.config.chain_id,
            key_file = %record.path.display(),
            genesis_file = %genesis_path.display(),
            "Network configuration ready"
        );
        Ok(())
    }
}

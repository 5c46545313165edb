//! Command that creates a new sealer account in an encrypted keystore.

use crate::commands::KEYSTORE_DIR_NAME;
use clap::Parser;
use poagen_keystore::create_keystore;
use std::path::PathBuf;
use tracing::info;

/// Creates a new sealer account and saves it in an encrypted keystore.
#[derive(Debug, Parser)]
pub struct KeystoreCommand {
    /// Directory to store the configuration in; the key file lands in a
    /// `keystore/` subdirectory.
    #[arg(long, short = 'o', value_name = "DIRECTORY", default_value = "config")]
    output: PathBuf,

    /// Password locking the new account.
    ///
    /// Supplied per invocation and never persisted; keep it in a secret
    /// store, the key file is unrecoverable without it.
    #[arg(long, value_name = "PASSWORD", verbatim_doc_comment)]
    password: String,
}

impl KeystoreCommand {
    /// Execute the `keystore` command
    pub fn execute(self) -> eyre::Result<()> {
        let record = create_keystore(self.output.join(KEYSTORE_DIR_NAME), &self.password)?;

        info!(
            target: "poagen::cli",
            address = %record.address,
            path = %record.path.display(),
            "New sealer key generated"
        );
        Ok(())
    }
}

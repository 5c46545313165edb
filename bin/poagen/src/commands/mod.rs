//! Subcommand implementations.

pub mod genesis;
pub mod init;
pub mod keystore;

/// Subdirectory of the output directory holding encrypted key files.
pub(crate) const KEYSTORE_DIR_NAME: &str = "keystore";

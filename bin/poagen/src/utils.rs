//! Artifact persistence helpers.

use poagen_primitives::Genesis;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// File name of the genesis spec inside the output directory.
pub(crate) const GENESIS_FILE_NAME: &str = "genesis.json";

/// Serializes `genesis` as 2-space-indented JSON into `dir/genesis.json`,
/// creating the directory if needed. Returns the written path.
pub(crate) fn write_genesis_file(dir: &Path, genesis: &Genesis) -> eyre::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(GENESIS_FILE_NAME);
    let mut contents = serde_json::to_string_pretty(genesis)?;
    contents.push('\n');
    fs::write(&path, contents)?;
    Ok(path)
}

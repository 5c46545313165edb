//! Keystore provisioning errors.

use thiserror::Error;

/// Failure while creating or unlocking an encrypted sealer keystore.
///
/// None of these represent transient conditions; a broken entropy source or
/// an unwritable directory fails the same way on retry, so callers propagate
/// them immediately.
#[derive(Debug, Error)]
pub enum KeystoreError {
    /// The supplied password is empty.
    #[error("keystore password must not be empty")]
    EmptyPassword,
    /// The destination directory or key file could not be written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The password does not match the key file.
    #[error("password does not match the keystore")]
    InvalidPassword,
    /// Key generation or recovery failed.
    #[error(transparent)]
    Key(#[from] secp256k1::Error),
    /// Key encryption or decryption failed.
    #[error("keystore cryptography failed: {0}")]
    Crypto(eth_keystore::KeystoreError),
}

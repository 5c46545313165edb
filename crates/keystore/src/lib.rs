//! Encrypted keystore provisioning for the initial sealer account.
//!
//! Generates a fresh secp256k1 signing key, derives its account address and
//! persists the key as a password-protected Web3 Secret Storage (v3) file
//! that standard Ethereum wallet tooling can unlock. The private key only
//! ever exists in process memory during the call; at rest it is scrypt +
//! AES encrypted.

mod error;
pub use error::KeystoreError;

use alloy_primitives::{hex, keccak256, Address};
use rand::{CryptoRng, Rng};
use secp256k1::{PublicKey, SecretKey, SECP256K1};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Handle to a freshly provisioned sealer key.
///
/// Carries the public address and the location of the encrypted key file.
/// The record never contains the private key; rotation means provisioning a
/// new record, not updating this one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeystoreRecord {
    /// Account address derived from the generated key.
    pub address: Address,
    /// Location of the encrypted key file.
    pub path: PathBuf,
}

/// Creates a new password-protected sealer key under `dir`.
///
/// Operating-system entropy variant of [`create_keystore_with_rng`].
pub fn create_keystore(
    dir: impl AsRef<Path>,
    password: &str,
) -> Result<KeystoreRecord, KeystoreError> {
    create_keystore_with_rng(dir, password, &mut rand::thread_rng())
}

/// Creates a new password-protected sealer key under `dir`, drawing all
/// randomness from `rng`.
///
/// The directory is created if absent. The key file is named
/// `0x<address>.json`, so the path is deterministic for the generated
/// address. Nothing is written until the key material is already
/// encrypted; a failure on any path leaves no plaintext key behind.
pub fn create_keystore_with_rng<R>(
    dir: impl AsRef<Path>,
    password: &str,
    rng: &mut R,
) -> Result<KeystoreRecord, KeystoreError>
where
    R: Rng + CryptoRng,
{
    if password.is_empty() {
        return Err(KeystoreError::EmptyPassword);
    }
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let secret = SecretKey::new(rng);
    let address = public_key_to_address(PublicKey::from_secret_key(SECP256K1, &secret));

    let file_name = keystore_file_name(address);
    eth_keystore::encrypt_key(dir, rng, secret.secret_bytes(), password, Some(&file_name))
        .map_err(map_keystore_err)?;

    Ok(KeystoreRecord { address, path: dir.join(file_name) })
}

/// Unlocks the key file at `path` and returns the address of the recovered
/// key.
///
/// A wrong password surfaces as [`KeystoreError::InvalidPassword`]; the
/// decrypted key is dropped before this returns.
pub fn decrypt_keystore(
    path: impl AsRef<Path>,
    password: &str,
) -> Result<Address, KeystoreError> {
    let secret = eth_keystore::decrypt_key(path, password).map_err(map_keystore_err)?;
    let secret = SecretKey::from_slice(&secret)?;
    Ok(public_key_to_address(PublicKey::from_secret_key(SECP256K1, &secret)))
}

/// Converts a secp256k1 public key into an account address: keccak256 of
/// the 64-byte uncompressed key (tag byte stripped), low 20 bytes.
pub fn public_key_to_address(public: PublicKey) -> Address {
    let hash = keccak256(&public.serialize_uncompressed()[1..]);
    Address::from_slice(&hash[12..])
}

fn keystore_file_name(address: Address) -> String {
    format!("0x{}.json", hex::encode(address))
}

fn map_keystore_err(err: eth_keystore::KeystoreError) -> KeystoreError {
    match err {
        eth_keystore::KeystoreError::MacMismatch => KeystoreError::InvalidPassword,
        other => KeystoreError::Crypto(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn known_key_derives_known_address() {
        // private key 0x...01, a standard test vector
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        let secret = SecretKey::from_slice(&bytes).unwrap();
        let address = public_key_to_address(PublicKey::from_secret_key(SECP256K1, &secret));
        assert_eq!(
            address,
            "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf".parse::<Address>().unwrap()
        );
    }

    #[test]
    fn roundtrip_with_correct_password() {
        let dir = tempfile::tempdir().unwrap();
        let record = create_keystore(dir.path(), "correct-horse").unwrap();

        let recovered = decrypt_keystore(&record.path, "correct-horse").unwrap();
        assert_eq!(recovered, record.address);
    }

    #[test]
    fn wrong_password_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let record = create_keystore(dir.path(), "correct-horse").unwrap();

        let err = decrypt_keystore(&record.path, "wrong-password").unwrap_err();
        assert!(matches!(err, KeystoreError::InvalidPassword));
    }

    #[test]
    fn file_lands_at_deterministic_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let record = create_keystore_with_rng(dir.path(), "hunter22", &mut rng).unwrap();

        assert_eq!(
            record.path,
            dir.path().join(format!("0x{}.json", hex::encode(record.address)))
        );
        assert!(record.path.is_file());
    }

    #[test]
    fn envelope_is_v3_json() {
        let dir = tempfile::tempdir().unwrap();
        let record = create_keystore(dir.path(), "hunter22").unwrap();

        let envelope: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&record.path).unwrap()).unwrap();
        assert_eq!(envelope["version"], 3);
        assert_eq!(envelope["crypto"]["cipher"], "aes-128-ctr");
        assert!(envelope["crypto"]["kdfparams"].is_object());
    }

    #[test]
    fn empty_password_is_rejected_before_io() {
        let parent = tempfile::tempdir().unwrap();
        let dir = parent.path().join("keystore");

        let err = create_keystore(&dir, "").unwrap_err();
        assert!(matches!(err, KeystoreError::EmptyPassword));
        assert!(!dir.exists());
    }

    #[test]
    fn creates_missing_directories() {
        let parent = tempfile::tempdir().unwrap();
        let dir = parent.path().join("nested").join("keystore");

        let record = create_keystore(&dir, "hunter22").unwrap();
        assert!(record.path.starts_with(&dir));
        assert!(record.path.is_file());
    }
}

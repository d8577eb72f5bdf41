//! On-disk key custody: create, persist, and reload account identities.
//!
//! Each account stores two plain-text artifacts under the keystore
//! directory, `<account>.pub` and `<account>.priv`, each a bare hex blob.
//! The private artifact may be passed through a reversible obfuscation
//! transform keyed by a passphrase before encoding. A loaded keypair is
//! self-tested (sign + verify a fixed digest) before it is handed out.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::error;

use crate::crypto::keys::{Keypair, PrivateKey, PublicKey};
use crate::crypto::sign::{Signer, Verifier};

/// Extension of the public-key artifact
pub const PUBLIC_KEY_EXTENSION: &str = "pub";
/// Extension of the private-key artifact
pub const PRIVATE_KEY_EXTENSION: &str = "priv";

/// Reversible byte transform applied to private-key material before it is
/// hex-encoded to disk. Implementations must be self-inverse:
/// `apply(apply(b, p), p) == b` for every byte sequence and passphrase.
pub trait Obfuscator: Send + Sync {
    fn apply(&self, bytes: &[u8], passphrase: &str) -> Vec<u8>;
}

/// Repeating-key XOR. This is obfuscation, not encryption: there is no
/// authentication or key derivation, and known plaintext recovers the
/// passphrase. An empty passphrase degrades to the fixed single byte
/// 0x00, which leaves the input unchanged.
pub struct XorObfuscator;

impl Obfuscator for XorObfuscator {
    fn apply(&self, bytes: &[u8], passphrase: &str) -> Vec<u8> {
        let key = if passphrase.is_empty() {
            &[0u8][..]
        } else {
            passphrase.as_bytes()
        };
        bytes
            .iter()
            .enumerate()
            .map(|(i, b)| b ^ key[i % key.len()])
            .collect()
    }
}

/// Custodian for one account identity's key artifacts.
///
/// No internal locking: concurrent `create_keys`/`load_keys` against the
/// same account is the caller's responsibility.
pub struct KeysManager {
    account_name: String,
    dir: PathBuf,
    obfuscator: Box<dyn Obfuscator>,
}

impl KeysManager {
    /// Custodian with the default XOR obfuscator
    pub fn new(account_name: impl Into<String>, dir: impl AsRef<Path>) -> Self {
        Self::with_obfuscator(account_name, dir, Box::new(XorObfuscator))
    }

    /// Custodian with an interchangeable obfuscation strategy
    pub fn with_obfuscator(
        account_name: impl Into<String>,
        dir: impl AsRef<Path>,
        obfuscator: Box<dyn Obfuscator>,
    ) -> Self {
        Self {
            account_name: account_name.into(),
            dir: dir.as_ref().to_path_buf(),
            obfuscator,
        }
    }

    fn artifact_path(&self, extension: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", self.account_name, extension))
    }

    /// Generate a fresh keypair and write both artifacts, overwriting any
    /// previous ones wholesale. The private key is obfuscated first when a
    /// passphrase is supplied. Returns false if either file cannot be
    /// written.
    pub fn create_keys(&self, passphrase: Option<&str>) -> bool {
        let keypair = Keypair::generate();
        let pub_hex = hex::encode(&keypair.public().0);
        let priv_hex = match passphrase {
            Some(p) => hex::encode(self.obfuscator.apply(keypair.secret_bytes(), p)),
            None => hex::encode(keypair.secret_bytes()),
        };
        self.store(&pub_hex, &priv_hex)
    }

    /// Read both artifacts back into a keypair. Returns None if either
    /// file is missing or unreadable, if the hex is malformed, or if the
    /// reassembled keypair fails the self-test. Never returns an
    /// unvalidated keypair.
    pub fn load_keys(&self, passphrase: Option<&str>) -> Option<Keypair> {
        let pub_hex = self.load_file(&self.artifact_path(PUBLIC_KEY_EXTENSION))?;
        let priv_hex = self.load_file(&self.artifact_path(PRIVATE_KEY_EXTENSION))?;

        let public = match hex::decode(pub_hex.trim()) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(
                    "malformed public key artifact for account '{}': {}",
                    self.account_name, e
                );
                return None;
            }
        };
        let mut secret = match hex::decode(priv_hex.trim()) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(
                    "malformed private key artifact for account '{}': {}",
                    self.account_name, e
                );
                return None;
            }
        };
        if let Some(p) = passphrase {
            secret = self.obfuscator.apply(&secret, p);
        }

        let keypair = Keypair::from_parts(PublicKey(public), PrivateKey(secret));
        if self.validate(&keypair) {
            Some(keypair)
        } else {
            None
        }
    }

    /// Self-test: sign a fixed well-known digest and verify it with the
    /// keypair's stored public key. A pair whose halves don't match (e.g.
    /// a private key garbled by the wrong passphrase) fails here.
    pub fn validate(&self, keypair: &Keypair) -> bool {
        let digest = validation_digest();
        let sig = match keypair.sign(&digest) {
            Ok(sig) => sig,
            Err(e) => {
                error!(
                    "cannot validate keypair for account '{}': {}",
                    self.account_name, e
                );
                return false;
            }
        };
        if keypair.public().verify(&digest, &sig).is_err() {
            error!("key validation failed for account '{}'", self.account_name);
            return false;
        }
        true
    }

    fn store(&self, pub_hex: &str, priv_hex: &str) -> bool {
        let artifacts = [
            (self.artifact_path(PUBLIC_KEY_EXTENSION), pub_hex),
            (self.artifact_path(PRIVATE_KEY_EXTENSION), priv_hex),
        ];
        for (path, contents) in artifacts {
            if let Err(e) = fs::write(&path, contents) {
                error!("cannot write '{}': {}", path.display(), e);
                return false;
            }
        }
        true
    }

    fn load_file(&self, path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(contents) => Some(contents),
            Err(e) => {
                error!("cannot read '{}': {}", path.display(), e);
                None
            }
        }
    }
}

/// Digest signed during the self-test. Fixed so every node validates key
/// material against the same known value.
fn validation_digest() -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(b"12345");
    hasher.finalize().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_xor_round_trip() {
        let cases: [(&[u8], &str); 4] = [
            (b"some private key material", "secret"),
            (b"some private key material", ""),
            (b"", "secret"),
            (&[0x00, 0xff, 0x7f, 0x80], "a"),
        ];
        for (bytes, pass) in cases {
            let once = XorObfuscator.apply(bytes, pass);
            let twice = XorObfuscator.apply(&once, pass);
            assert_eq!(twice, bytes, "round trip failed for passphrase {:?}", pass);
        }
    }

    #[test]
    fn test_empty_passphrase_is_identity() {
        let bytes = b"anything at all";
        assert_eq!(XorObfuscator.apply(bytes, ""), bytes);
    }

    #[test]
    fn test_create_then_load_plain() {
        let dir = TempDir::new().unwrap();
        let manager = KeysManager::new("node0", dir.path());
        assert!(manager.create_keys(None));
        let keypair = manager.load_keys(None).expect("stored keys should load");
        assert!(manager.validate(&keypair));
    }

    #[test]
    fn test_create_then_load_with_passphrase() {
        let dir = TempDir::new().unwrap();
        let manager = KeysManager::new("node0", dir.path());
        assert!(manager.create_keys(Some("secret")));
        assert!(manager.load_keys(Some("secret")).is_some());
    }

    #[test]
    fn test_wrong_passphrase_fails_validation() {
        let dir = TempDir::new().unwrap();
        let manager = KeysManager::new("node0", dir.path());
        assert!(manager.create_keys(Some("secret")));
        assert!(manager.load_keys(Some("wrong")).is_none());
        // missing passphrase on obfuscated artifacts also fails
        assert!(manager.load_keys(None).is_none());
    }

    #[test]
    fn test_load_without_artifacts() {
        let dir = TempDir::new().unwrap();
        let manager = KeysManager::new("ghost", dir.path());
        assert!(manager.load_keys(None).is_none());
    }

    #[test]
    fn test_recreate_overwrites_artifacts() {
        let dir = TempDir::new().unwrap();
        let manager = KeysManager::new("node0", dir.path());
        assert!(manager.create_keys(None));
        let first = manager.load_keys(None).unwrap();
        assert!(manager.create_keys(None));
        let second = manager.load_keys(None).unwrap();
        assert_ne!(first.public(), second.public());
    }

    #[test]
    fn test_garbage_hex_artifact() {
        let dir = TempDir::new().unwrap();
        let manager = KeysManager::new("node0", dir.path());
        assert!(manager.create_keys(None));
        std::fs::write(dir.path().join("node0.priv"), "not hex at all").unwrap();
        assert!(manager.load_keys(None).is_none());
    }

    #[test]
    fn test_truncated_private_key_fails_validation() {
        let dir = TempDir::new().unwrap();
        let manager = KeysManager::new("node0", dir.path());
        assert!(manager.create_keys(None));
        // valid hex, wrong key length
        std::fs::write(dir.path().join("node0.priv"), "abcd").unwrap();
        assert!(manager.load_keys(None).is_none());
    }

    #[test]
    fn test_mismatched_pair_fails_validation() {
        let dir = TempDir::new().unwrap();
        let manager = KeysManager::new("node0", dir.path());
        let mismatched = Keypair::from_parts(
            Keypair::generate().public().clone(),
            PrivateKey(Keypair::generate().secret_bytes().to_vec()),
        );
        assert!(!manager.validate(&mismatched));
    }

    #[test]
    fn test_custom_obfuscator_strategy() {
        struct AddOne;
        impl Obfuscator for AddOne {
            fn apply(&self, bytes: &[u8], _passphrase: &str) -> Vec<u8> {
                bytes.iter().map(|b| b.wrapping_add(1)).collect()
            }
        }
        // not self-inverse, so a round trip through the keystore must fail
        let dir = TempDir::new().unwrap();
        let manager = KeysManager::with_obfuscator("node0", dir.path(), Box::new(AddOne));
        assert!(manager.create_keys(Some("pass")));
        assert!(manager.load_keys(Some("pass")).is_none());
    }
}

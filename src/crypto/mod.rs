//! Crypto module: key management, signing, verification, on-disk keystore.
//!
//! - Keys: generation, reconstruction from stored material
//! - Sign: Ed25519 signatures
//! - Keystore: per-account key artifacts with passphrase obfuscation

pub mod keys;
pub mod keystore;
pub mod sign;

pub use keys::{Keypair, PrivateKey, PublicKey};
pub use keystore::{KeysManager, Obfuscator, XorObfuscator};
pub use sign::{Signature, Signer, Verifier};

//! Vote authentication and key custody for a Byzantine-fault-tolerant
//! voting protocol.
//!
//! - `consensus`: canonical vote encoding, self-signed votes, verification
//!   of single votes and commit/reject bundles
//! - `crypto`: ed25519 keypairs and signatures, on-disk keystore with
//!   passphrase-based obfuscation of the private key
//! - `utils`: error types, logging setup
//!
//! Round progression, supermajority thresholds, and vote transport live in
//! the consensus state machine and network layers, which consume this
//! crate through [`consensus::VoteAuthenticator`] and
//! [`crypto::KeysManager`].

pub mod consensus;
pub mod crypto;
pub mod utils;

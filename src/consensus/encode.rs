//! Canonical vote encoding.
//!
//! Signing and verification must digest byte-identical encodings of a
//! vote's decision fields, so both paths funnel through [`vote_digest`].
//! The signature field never enters the encoding.

use sha2::{Digest, Sha256};

use crate::consensus::types::DecisionHash;

/// Length of a vote digest in bytes
pub const DIGEST_LEN: usize = 32;

/// Length-prefixed concatenation of the decision fields, big-endian u64
/// prefixes. The layout is fixed: changing it invalidates every
/// previously issued signature (pinned by `test_encoding_layout_is_pinned`).
pub fn encode_decision(hash: &DecisionHash) -> Vec<u8> {
    let mut out = Vec::with_capacity(16 + hash.proposal_hash.len() + hash.block_hash.len());
    out.extend_from_slice(&(hash.proposal_hash.len() as u64).to_be_bytes());
    out.extend_from_slice(&hash.proposal_hash);
    out.extend_from_slice(&(hash.block_hash.len() as u64).to_be_bytes());
    out.extend_from_slice(&hash.block_hash);
    out
}

/// SHA-256 digest of the canonical encoding; this is the payload that
/// gets signed and verified, never the raw decision fields.
pub fn vote_digest(hash: &DecisionHash) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(encode_decision(hash));
    hasher.finalize().to_vec()
}

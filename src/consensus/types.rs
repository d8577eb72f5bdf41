use anyhow::Result;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Decision value a validator endorses for one voting round: the hash of
/// the proposal under consideration and the hash of the block it carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecisionHash {
    pub proposal_hash: Vec<u8>,
    pub block_hash: Vec<u8>,
}

impl DecisionHash {
    pub fn new(proposal_hash: Vec<u8>, block_hash: Vec<u8>) -> Self {
        Self {
            proposal_hash,
            block_hash,
        }
    }

    /// Hash both components of a raw decision value
    pub fn from_decision(proposal: &[u8], block: &[u8]) -> Self {
        Self {
            proposal_hash: hash_bytes(proposal),
            block_hash: hash_bytes(block),
        }
    }
}

/// Signature attached to a vote: the signer's public key and the signed
/// digest bytes. Both fields empty is the explicit placeholder carried by
/// a vote before the real signature exists; a placeholder never verifies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteSignature {
    pub public_key: Vec<u8>,
    pub signed_data: Vec<u8>,
}

impl VoteSignature {
    pub fn placeholder() -> Self {
        Self {
            public_key: Vec::new(),
            signed_data: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.public_key.is_empty() && self.signed_data.is_empty()
    }
}

/// Vote cast by a validator for a decision value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteMessage {
    pub hash: DecisionHash,
    pub signature: VoteSignature,
}

/// Aggregated votes accepting a decision value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitMessage {
    pub votes: Vec<VoteMessage>,
}

/// Aggregated votes rejecting a decision value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RejectMessage {
    pub votes: Vec<VoteMessage>,
}

impl VoteMessage {
    /// Serialize for transport
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from transport bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// utility: hash bytes to a Vec<u8>
pub fn hash_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().to_vec()
}

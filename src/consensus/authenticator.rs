//! Vote authentication: producing the local node's signed votes and
//! verifying peers' votes and their aggregate commit/reject bundles.
//!
//! Verification is total: malformed key or signature bytes yield `false`,
//! never a panic or an error. The consensus state machine decides whether
//! a failed vote is fatal to the round or just discards one vote.

use tracing::error;

use crate::consensus::encode::vote_digest;
use crate::consensus::types::{CommitMessage, DecisionHash, RejectMessage, VoteMessage, VoteSignature};
use crate::crypto::{Keypair, PublicKey, Signature, Signer, Verifier};
use crate::utils::errors::{Result, VotingError};

/// Signs outgoing votes with the local identity and verifies incoming
/// ones. The keypair is immutable for the session; verification does not
/// use it, so a single authenticator can check votes from any signer.
pub struct VoteAuthenticator {
    keypair: Keypair,
}

impl VoteAuthenticator {
    pub fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }

    /// Public key of the local identity
    pub fn public_key(&self) -> &PublicKey {
        self.keypair.public()
    }

    /// Produce a self-signed vote for a decision value. The vote starts
    /// with a placeholder signature, which is replaced once the digest is
    /// signed. A signing failure aborts the operation; a vote carrying
    /// the placeholder is never returned.
    pub fn sign_vote(&self, hash: DecisionHash) -> Result<VoteMessage> {
        let mut vote = VoteMessage {
            hash,
            signature: VoteSignature::placeholder(),
        };
        let digest = vote_digest(&vote.hash);
        let signature = self.keypair.sign(&digest).map_err(|e| {
            error!("failed to sign vote: {}", e);
            VotingError::SignatureConstruction(e.to_string())
        })?;
        vote.signature = VoteSignature {
            public_key: self.keypair.public().0.clone(),
            signed_data: signature.0,
        };
        Ok(vote)
    }

    /// Check a single vote against its embedded public key. The digest is
    /// recomputed from the vote's own decision fields, excluding the
    /// signature, so signer and verifier hash identical bytes.
    pub fn verify_vote(&self, vote: &VoteMessage) -> bool {
        let digest = vote_digest(&vote.hash);
        let public = PublicKey(vote.signature.public_key.clone());
        let signature = Signature(vote.signature.signed_data.clone());
        public.verify(&digest, &signature).is_ok()
    }

    /// True iff every contained vote verifies; an empty bundle is
    /// vacuously true. Short-circuits on the first failing vote.
    pub fn verify_commit(&self, msg: &CommitMessage) -> bool {
        msg.votes.iter().all(|vote| self.verify_vote(vote))
    }

    /// True iff every contained vote verifies; an empty bundle is
    /// vacuously true. Short-circuits on the first failing vote.
    pub fn verify_reject(&self, msg: &RejectMessage) -> bool {
        msg.votes.iter().all(|vote| self.verify_vote(vote))
    }
}

//! Consensus voting crypto: canonical encoding, vote signing, and
//! verification of votes and their aggregate commit/reject bundles.

pub mod authenticator;
pub mod encode;
pub mod types;

pub use authenticator::VoteAuthenticator;
pub use encode::{encode_decision, vote_digest, DIGEST_LEN};
pub use types::{CommitMessage, DecisionHash, RejectMessage, VoteMessage, VoteSignature};

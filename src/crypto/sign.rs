use anyhow::{anyhow, Result};
use ed25519_dalek::{
    Signature as DalekSig, Signer as DalekSigner, SigningKey, Verifier as DalekVerifier,
    VerifyingKey,
};
use serde::{Deserialize, Serialize};

use crate::crypto::{Keypair, PublicKey};

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Signature(pub Vec<u8>);

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature({})", hex::encode(&self.0))
    }
}

/// Trait for signing. Fallible: malformed key material is an error, never
/// a silently degraded signature.
pub trait Signer {
    fn sign(&self, msg: &[u8]) -> Result<Signature>;
}

/// Trait for verifying
pub trait Verifier {
    fn verify(&self, msg: &[u8], sig: &Signature) -> Result<()>;
}

impl Signer for Keypair {
    fn sign(&self, msg: &[u8]) -> Result<Signature> {
        let seed: [u8; 32] = self.secret_bytes().try_into().map_err(|_| {
            anyhow!(
                "malformed private key: expected 32 bytes, got {}",
                self.secret_bytes().len()
            )
        })?;
        let sk = SigningKey::from_bytes(&seed);
        Ok(Signature(sk.sign(msg).to_bytes().to_vec()))
    }
}

impl Verifier for PublicKey {
    fn verify(&self, msg: &[u8], sig: &Signature) -> Result<()> {
        let raw: [u8; 32] = self
            .0
            .as_slice()
            .try_into()
            .map_err(|_| anyhow!("malformed public key: expected 32 bytes, got {}", self.0.len()))?;
        let pk = VerifyingKey::from_bytes(&raw)?;
        let ds = DalekSig::from_slice(&sig.0)?;
        pk.verify(msg, &ds)
            .map_err(|_| anyhow!("signature verification failed"))
    }
}

use anyhow::{anyhow, Result};
use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicKey(pub Vec<u8>);

#[derive(Clone, Serialize, Deserialize)]
pub struct PrivateKey(pub Vec<u8>);

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey({})", hex::encode(&self.0))
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

/// A participant identity. Holds raw key material: artifacts on disk are
/// untrusted, so parse errors surface at the point of use (signing or
/// verification) rather than at construction.
#[derive(Clone)]
pub struct Keypair {
    public: PublicKey,
    secret: PrivateKey,
}

impl Keypair {
    /// Generate a new random keypair
    pub fn generate() -> Self {
        let sk = SigningKey::generate(&mut OsRng);
        Self {
            public: PublicKey(sk.verifying_key().to_bytes().to_vec()),
            secret: PrivateKey(sk.to_bytes().to_vec()),
        }
    }

    /// Construct from a 32-byte secret seed, deriving the public half
    pub fn from_bytes(secret: &[u8]) -> Result<Self> {
        let seed: [u8; 32] = secret
            .try_into()
            .map_err(|_| anyhow!("private key must be 32 bytes, got {}", secret.len()))?;
        let sk = SigningKey::from_bytes(&seed);
        Ok(Self {
            public: PublicKey(sk.verifying_key().to_bytes().to_vec()),
            secret: PrivateKey(secret.to_vec()),
        })
    }

    /// Reassemble an identity from stored key material. The public half is
    /// kept as stored, not re-derived: a pair that doesn't match fails the
    /// keystore self-test instead of being silently repaired.
    pub fn from_parts(public: PublicKey, secret: PrivateKey) -> Self {
        Self { public, secret }
    }

    /// Get public key
    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    /// Export secret as bytes
    pub fn secret_bytes(&self) -> &[u8] {
        &self.secret.0
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("public", &self.public)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_rebuild_from_seed() {
        let kp = Keypair::generate();
        let rebuilt = Keypair::from_bytes(kp.secret_bytes()).unwrap();
        assert_eq!(kp.public(), rebuilt.public());
    }

    #[test]
    fn test_from_bytes_rejects_bad_length() {
        assert!(Keypair::from_bytes(&[1u8; 31]).is_err());
        assert!(Keypair::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let kp = Keypair::generate();
        let rendered = format!("{:?}", kp);
        assert!(!rendered.contains(&hex::encode(kp.secret_bytes())));
    }
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Default provider built on the RustCrypto crates.
//!
//! Supported schemes:
//! - RSA (tags 1, 3): PKCS#1 v1.5
//! - DSA (17)
//! - ECDSA (19) over P-256, P-384, P-521
//! - EdDSA (22) and Ed25519 (27) over Curve25519
//!
//! Digests: SHA-1, SHA-2 (224/256/384/512), SHA3-256, SHA3-512.

mod context;
mod hasher;
mod key;

pub use context::RustCryptoSignature;
pub use hasher::Hasher;
pub use key::{EcdsaKey, KeyMaterial, KeyMismatch, PublicKey};

use pgpverify_abstractions::{
    AlgorithmFamily, ContextError, DigestUnavailableError, HashAlgorithm, KeyError, PublicKeyAlgorithm,
    VerificationKey, VerifierProvider,
};

#[derive(Debug, Copy, Clone, Default)]
pub struct RustCryptoProvider;

impl RustCryptoProvider {
    pub fn new() -> Self {
        Self
    }
}

impl VerifierProvider for RustCryptoProvider {
    type Key = PublicKey;
    type Signature = RustCryptoSignature;
    type Digest = Hasher;

    fn name(&self) -> &'static str {
        "rust-crypto"
    }

    fn create_signature_context(
        &self,
        key_algorithm: PublicKeyAlgorithm,
        hash_algorithm: HashAlgorithm,
        key: &PublicKey,
    ) -> Result<RustCryptoSignature, ContextError> {
        let unsupported = ContextError::Unsupported {
            key_algorithm,
            hash_algorithm,
        };
        let mismatch = |expected: &'static str| {
            KeyError::new(
                key_algorithm,
                key.key_id(),
                KeyMismatch {
                    expected,
                    found: key.material().kind(),
                },
            )
        };

        // No Ed448 implementation in this backend.
        if key_algorithm == PublicKeyAlgorithm::Ed448 {
            return Err(unsupported);
        }
        let Some(family) = key_algorithm.family() else {
            return Err(unsupported);
        };

        match (family, key.material()) {
            (AlgorithmFamily::Rsa, KeyMaterial::Rsa(k)) => {
                Ok(RustCryptoSignature::rsa(k.clone(), Hasher::new(hash_algorithm)?))
            }
            (AlgorithmFamily::Rsa, _) => Err(mismatch("RSA").into()),

            (AlgorithmFamily::Dsa, KeyMaterial::Dsa(k)) if key_algorithm == PublicKeyAlgorithm::Dsa => {
                Ok(RustCryptoSignature::dsa(k.clone(), Hasher::new(hash_algorithm)?))
            }
            (AlgorithmFamily::Dsa, KeyMaterial::Ecdsa(k)) if key_algorithm == PublicKeyAlgorithm::Ecdsa => {
                // ECDSA cannot use a digest shorter than half the field size.
                if hash_algorithm.digest_len() * 2 < k.field_len() {
                    return Err(unsupported);
                }
                Ok(RustCryptoSignature::ecdsa(k.clone(), Hasher::new(hash_algorithm)?))
            }
            (AlgorithmFamily::Dsa, _) if key_algorithm == PublicKeyAlgorithm::Dsa => Err(mismatch("DSA").into()),
            (AlgorithmFamily::Dsa, _) => Err(mismatch("ECDSA").into()),

            (AlgorithmFamily::WholeMessage, KeyMaterial::Ed25519(k)) => Ok(RustCryptoSignature::ed25519(*k)),
            (AlgorithmFamily::WholeMessage, _) => Err(mismatch("Ed25519").into()),
        }
    }

    fn create_digest_context(&self, hash_algorithm: HashAlgorithm) -> Result<Hasher, DigestUnavailableError> {
        Hasher::new(hash_algorithm)
    }
}

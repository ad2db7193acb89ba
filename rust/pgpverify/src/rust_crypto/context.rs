// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Signature contexts over RustCrypto primitives.
//!
//! Signature value encodings:
//! - RSA: the big-endian integer, exactly modulus-length octets
//! - DSA / ECDSA: DER `SEQUENCE { r INTEGER, s INTEGER }`
//! - Ed25519: 64 octets `R || S`

use ed25519_dalek::Verifier as _;
use pgpverify_abstractions::{DigestContext, SignatureContext, VerificationComputationError};
use rsa::{Pkcs1v15Sign, RsaPublicKey};
use signature::hazmat::PrehashVerifier as _;

use super::hasher::Hasher;
use super::key::EcdsaKey;

/// Signature context produced by [`RustCryptoProvider`](super::RustCryptoProvider).
#[derive(Debug)]
pub struct RustCryptoSignature {
    inner: Inner,
}

#[derive(Debug)]
enum Inner {
    Rsa {
        key: RsaPublicKey,
        scheme: Pkcs1v15Sign,
        hasher: Hasher,
    },
    Dsa {
        key: dsa::VerifyingKey,
        hasher: Hasher,
    },
    Ecdsa {
        key: EcdsaKey,
        hasher: Hasher,
    },
    /// The primitive needs the complete message, so it is buffered.
    Ed25519 {
        key: ed25519_dalek::VerifyingKey,
        message: Vec<u8>,
    },
}

impl RustCryptoSignature {
    pub(crate) fn rsa(key: RsaPublicKey, hasher: Hasher) -> Self {
        let scheme = hasher.pkcs1v15_scheme();
        Self {
            inner: Inner::Rsa { key, scheme, hasher },
        }
    }

    pub(crate) fn dsa(key: dsa::VerifyingKey, hasher: Hasher) -> Self {
        Self {
            inner: Inner::Dsa { key, hasher },
        }
    }

    pub(crate) fn ecdsa(key: EcdsaKey, hasher: Hasher) -> Self {
        Self {
            inner: Inner::Ecdsa { key, hasher },
        }
    }

    pub(crate) fn ed25519(key: ed25519_dalek::VerifyingKey) -> Self {
        Self {
            inner: Inner::Ed25519 {
                key,
                message: Vec::new(),
            },
        }
    }
}

impl SignatureContext for RustCryptoSignature {
    fn update(&mut self, data: &[u8]) {
        match &mut self.inner {
            Inner::Rsa { hasher, .. } | Inner::Dsa { hasher, .. } | Inner::Ecdsa { hasher, .. } => hasher.update(data),
            Inner::Ed25519 { message, .. } => message.extend_from_slice(data),
        }
    }

    fn verify(self, signature: &[u8]) -> Result<bool, VerificationComputationError> {
        match self.inner {
            Inner::Rsa { key, scheme, hasher } => verify_rsa(&key, scheme, &hasher.finalize(), signature),
            Inner::Dsa { key, hasher } => {
                let sig = dsa::Signature::try_from(signature)
                    .map_err(|e| VerificationComputationError::with_source("malformed DSA signature", e))?;
                Ok(key.verify_prehash(&hasher.finalize(), &sig).is_ok())
            }
            Inner::Ecdsa { key, hasher } => verify_ecdsa(&key, &hasher.finalize(), signature),
            Inner::Ed25519 { key, message } => {
                let sig = ed25519_dalek::Signature::from_slice(signature).map_err(|e| {
                    VerificationComputationError::with_source(
                        format!("malformed Ed25519 signature: expected 64 bytes, got {}", signature.len()),
                        e,
                    )
                })?;
                Ok(key.verify(&message, &sig).is_ok())
            }
        }
    }
}

fn verify_rsa(
    key: &RsaPublicKey,
    scheme: Pkcs1v15Sign,
    hashed: &[u8],
    signature: &[u8],
) -> Result<bool, VerificationComputationError> {
    // `rsa` reports wrong-length, out-of-range and mismatching signatures
    // all as `Verification`: those are proofs of invalidity.
    match key.verify(scheme, hashed, signature) {
        Ok(()) => Ok(true),
        Err(rsa::Error::Verification) => Ok(false),
        Err(e) => Err(VerificationComputationError::with_source("RSA verification failed", e)),
    }
}

fn verify_ecdsa(key: &EcdsaKey, prehash: &[u8], signature: &[u8]) -> Result<bool, VerificationComputationError> {
    let malformed = |e: signature::Error| {
        VerificationComputationError::with_source(format!("malformed ECDSA signature for {}", key.curve_name()), e)
    };
    match key {
        EcdsaKey::P256(vk) => {
            let sig = p256::ecdsa::Signature::from_der(signature).map_err(malformed)?;
            Ok(vk.verify_prehash(prehash, &sig).is_ok())
        }
        EcdsaKey::P384(vk) => {
            let sig = p384::ecdsa::Signature::from_der(signature).map_err(malformed)?;
            Ok(vk.verify_prehash(prehash, &sig).is_ok())
        }
        EcdsaKey::P521(vk) => {
            let sig = p521::ecdsa::Signature::from_der(signature).map_err(malformed)?;
            Ok(vk.verify_prehash(prehash, &sig).is_ok())
        }
    }
}

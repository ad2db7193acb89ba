// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

use pgpverify_abstractions::{KeyId, VerificationKey};
use rsa::traits::PublicKeyParts as _;
use rsa::RsaPublicKey;

/// ECDSA verifying key over one of the NIST curves.
#[derive(Clone)]
pub enum EcdsaKey {
    P256(p256::ecdsa::VerifyingKey),
    P384(p384::ecdsa::VerifyingKey),
    P521(p521::ecdsa::VerifyingKey),
}

impl EcdsaKey {
    /// Field element size in bytes.
    pub fn field_len(&self) -> usize {
        match self {
            Self::P256(_) => 32,
            Self::P384(_) => 48,
            Self::P521(_) => 66,
        }
    }

    pub fn curve_name(&self) -> &'static str {
        match self {
            Self::P256(_) => "NIST P-256",
            Self::P384(_) => "NIST P-384",
            Self::P521(_) => "NIST P-521",
        }
    }
}

impl fmt::Debug for EcdsaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EcdsaKey").field(&self.curve_name()).finish()
    }
}

/// Decoded public key material.
#[derive(Debug, Clone)]
pub enum KeyMaterial {
    Rsa(RsaPublicKey),
    Dsa(dsa::VerifyingKey),
    Ecdsa(EcdsaKey),
    Ed25519(ed25519_dalek::VerifyingKey),
}

impl KeyMaterial {
    /// Human readable key kind, used in key mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rsa(_) => "RSA",
            Self::Dsa(_) => "DSA",
            Self::Ecdsa(k) => k.curve_name(),
            Self::Ed25519(_) => "Ed25519",
        }
    }
}

impl From<RsaPublicKey> for KeyMaterial {
    fn from(k: RsaPublicKey) -> Self {
        Self::Rsa(k)
    }
}

impl From<dsa::VerifyingKey> for KeyMaterial {
    fn from(k: dsa::VerifyingKey) -> Self {
        Self::Dsa(k)
    }
}

impl From<EcdsaKey> for KeyMaterial {
    fn from(k: EcdsaKey) -> Self {
        Self::Ecdsa(k)
    }
}

impl From<p256::ecdsa::VerifyingKey> for KeyMaterial {
    fn from(k: p256::ecdsa::VerifyingKey) -> Self {
        Self::Ecdsa(EcdsaKey::P256(k))
    }
}

impl From<p384::ecdsa::VerifyingKey> for KeyMaterial {
    fn from(k: p384::ecdsa::VerifyingKey) -> Self {
        Self::Ecdsa(EcdsaKey::P384(k))
    }
}

impl From<p521::ecdsa::VerifyingKey> for KeyMaterial {
    fn from(k: p521::ecdsa::VerifyingKey) -> Self {
        Self::Ecdsa(EcdsaKey::P521(k))
    }
}

impl From<ed25519_dalek::VerifyingKey> for KeyMaterial {
    fn from(k: ed25519_dalek::VerifyingKey) -> Self {
        Self::Ed25519(k)
    }
}

/// An OpenPGP public key already decoded into RustCrypto types.
///
/// Immutable and `Sync`: one key can back any number of concurrent verifiers.
#[derive(Debug, Clone)]
pub struct PublicKey {
    key_id: KeyId,
    material: KeyMaterial,
}

impl PublicKey {
    pub fn new(key_id: impl Into<KeyId>, material: impl Into<KeyMaterial>) -> Self {
        Self {
            key_id: key_id.into(),
            material: material.into(),
        }
    }

    pub fn material(&self) -> &KeyMaterial {
        &self.material
    }
}

impl VerificationKey for PublicKey {
    fn key_id(&self) -> KeyId {
        self.key_id
    }

    fn rsa_modulus_bits(&self) -> Option<usize> {
        match &self.material {
            KeyMaterial::Rsa(k) => Some(k.n().bits()),
            _ => None,
        }
    }
}

/// The key's type does not fit the declared algorithm.
#[derive(thiserror::Error, Debug)]
#[error("expected {expected} key material, found {found}")]
pub struct KeyMismatch {
    pub expected: &'static str,
    pub found: &'static str,
}

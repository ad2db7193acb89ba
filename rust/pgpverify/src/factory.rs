// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Verifier construction.
//!
//! The factory resolves which verification protocol an algorithm pair needs
//! and asks the provider for the primitives:
//! - a signature context in verify mode, always
//! - a prehash digest context, only for the whole-message family

use pgpverify_abstractions::{HashAlgorithm, PublicKeyAlgorithm, VerificationKey, VerifierProvider};

use crate::rust_crypto::RustCryptoProvider;
use crate::{ContentVerifier, Result};

/// Builds [`ContentVerifier`]s from a provider.
#[derive(Debug, Clone, Default)]
pub struct VerifierFactory<P = RustCryptoProvider> {
    provider: P,
}

impl VerifierFactory<RustCryptoProvider> {
    /// A factory backed by the RustCrypto provider.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: VerifierProvider> VerifierFactory<P> {
    /// Use a different cryptographic backend.
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Fix the algorithm pair; the builder then binds keys.
    pub fn builder(&self, key_algorithm: PublicKeyAlgorithm, hash_algorithm: HashAlgorithm) -> VerifierBuilder<'_, P> {
        VerifierBuilder {
            provider: &self.provider,
            key_algorithm,
            hash_algorithm,
        }
    }

    /// Build a verifier for `key` under the declared algorithm pair.
    pub fn get<'k>(
        &self,
        key_algorithm: PublicKeyAlgorithm,
        hash_algorithm: HashAlgorithm,
        key: &'k P::Key,
    ) -> Result<ContentVerifier<'k, P>> {
        self.builder(key_algorithm, hash_algorithm).build(key)
    }

    /// Like [`get`](Self::get), taking the raw tags from a signature packet.
    pub fn get_by_tags<'k>(
        &self,
        key_algorithm: u8,
        hash_algorithm: u8,
        key: &'k P::Key,
    ) -> Result<ContentVerifier<'k, P>> {
        let key_algorithm = PublicKeyAlgorithm::try_from(key_algorithm)?;
        let hash_algorithm = HashAlgorithm::try_from(hash_algorithm)?;
        self.get(key_algorithm, hash_algorithm, key)
    }
}

/// A provider bound to one algorithm pair.
#[derive(Debug)]
pub struct VerifierBuilder<'p, P> {
    provider: &'p P,
    key_algorithm: PublicKeyAlgorithm,
    hash_algorithm: HashAlgorithm,
}

impl<P> Clone for VerifierBuilder<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for VerifierBuilder<'_, P> {}

impl<'p, P: VerifierProvider> VerifierBuilder<'p, P> {
    pub fn key_algorithm(&self) -> PublicKeyAlgorithm {
        self.key_algorithm
    }

    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm
    }

    /// Bind `key` into a fresh verifier.
    ///
    /// Key errors take precedence over digest errors: the signature context
    /// is created first.
    pub fn build<'k>(&self, key: &'k P::Key) -> Result<ContentVerifier<'k, P>> {
        let signature = self
            .provider
            .create_signature_context(self.key_algorithm, self.hash_algorithm, key)?;

        let prehash = if self.key_algorithm.requires_prehash() {
            Some(self.provider.create_digest_context(self.hash_algorithm)?)
        } else {
            None
        };

        tracing::debug!(
            key_id = %key.key_id(),
            key_algorithm = %self.key_algorithm,
            hash_algorithm = %self.hash_algorithm,
            prehash = prehash.is_some(),
            provider = self.provider.name(),
            "built content verifier"
        );

        Ok(ContentVerifier::new(
            self.key_algorithm,
            self.hash_algorithm,
            key,
            signature,
            prehash,
        ))
    }
}

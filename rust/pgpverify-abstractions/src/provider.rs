// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Cryptographic backend interface.
//!
//! A provider turns an algorithm pair and a key into a signature context in
//! verify mode, and supplies digest contexts for the whole-message family.
//! The verifier never does any arithmetic itself.

use crate::{
    ContextError, DigestUnavailableError, HashAlgorithm, PublicKeyAlgorithm, VerificationComputationError,
    VerificationKey,
};

/// An incremental signature verification primitive bound to one key.
pub trait SignatureContext {
    /// Feed signed content.
    fn update(&mut self, data: &[u8]);

    /// Check `signature` against everything fed so far.
    ///
    /// Return value semantics:
    /// - `Ok(true)`: the signature is valid for the content.
    /// - `Ok(false)`: the signature is proven invalid.
    /// - `Err(...)`: the signature could not be evaluated.
    fn verify(self, signature: &[u8]) -> Result<bool, VerificationComputationError>;
}

/// An incremental message digest.
pub trait DigestContext {
    fn update(&mut self, data: &[u8]);

    /// Fixed-size digest output.
    fn finalize(self) -> Vec<u8>;
}

/// A backend that builds verification primitives.
pub trait VerifierProvider {
    type Key: VerificationKey + ?Sized;
    type Signature: SignatureContext;
    type Digest: DigestContext;

    fn name(&self) -> &'static str;

    /// Create a signature context in verify mode for `key`.
    ///
    /// Fails with `ContextError::Unsupported` when the provider has no scheme
    /// for the pair, and with `ContextError::Key` when the key does not fit
    /// the declared algorithm.
    fn create_signature_context(
        &self,
        key_algorithm: PublicKeyAlgorithm,
        hash_algorithm: HashAlgorithm,
        key: &Self::Key,
    ) -> Result<Self::Signature, ContextError>;

    fn create_digest_context(&self, hash_algorithm: HashAlgorithm) -> Result<Self::Digest, DigestUnavailableError>;
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Streaming OpenPGP signature verification.
//!
//! A [`VerifierFactory`] binds a public key and a declared
//! (key algorithm, hash algorithm) pair into a single-use [`ContentVerifier`].
//! The caller streams the signed content into the verifier and then checks one
//! candidate signature value:
//!
//! ```no_run
//! # use pgpverify::{HashAlgorithm, PublicKeyAlgorithm, VerifierFactory};
//! # fn check(key: &pgpverify::rust_crypto::PublicKey, content: &[u8], sig: &[u8]) -> pgpverify::Result<bool> {
//! let factory = VerifierFactory::new();
//! let mut verifier = factory.get(PublicKeyAlgorithm::RsaGeneral, HashAlgorithm::Sha256, key)?;
//! verifier.update(content)?;
//! verifier.finalize(sig)
//! # }
//! ```
//!
//! `finalize` returns `Ok(false)` for a signature that is proven invalid, and
//! an error only when nothing could be proven.
//!
//! The cryptography itself comes from a [`VerifierProvider`]. The default
//! provider is built on the RustCrypto crates; see [`rust_crypto`].

#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;
mod factory;
pub mod mpi;
pub mod rust_crypto;
mod verifier;

pub use error::{Error, Result};
pub use factory::{VerifierBuilder, VerifierFactory};
pub use verifier::ContentVerifier;

pub use pgpverify_abstractions::{
    AlgorithmFamily, AlgorithmKind, ContextError, DigestContext, DigestUnavailableError, HashAlgorithm, KeyError, KeyId,
    PublicKeyAlgorithm, SignatureContext, UnknownAlgorithmTag, VerificationComputationError, VerificationKey,
    VerifierProvider,
};

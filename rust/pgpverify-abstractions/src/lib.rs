// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared interfaces and datatypes for the OpenPGP content verifier.
//!
//! This crate sits between the verifier (`pgpverify`) and the cryptographic
//! backends it drives. It has no cryptographic dependencies of its own:
//! - the closed OpenPGP algorithm enumerations
//! - the key identity trait a backend's native keys implement
//! - the provider/context traits a backend implements
//! - the error types that cross the provider boundary

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod algorithms;
pub mod error;
pub mod key;
pub mod provider;

pub use algorithms::{AlgorithmFamily, HashAlgorithm, PublicKeyAlgorithm};
pub use error::{
    AlgorithmKind, ContextError, DigestUnavailableError, KeyError, UnknownAlgorithmTag,
    VerificationComputationError,
};
pub use key::{KeyId, VerificationKey};
pub use provider::{DigestContext, SignatureContext, VerifierProvider};

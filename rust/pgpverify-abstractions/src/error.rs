// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Errors that cross the provider boundary.
//!
//! A negative verification result is not an error: `SignatureContext::verify`
//! returns `Ok(false)` for it. Everything here means a verifier could not be
//! built or a signature could not be evaluated at all.

use std::fmt;

use crate::{HashAlgorithm, KeyId, PublicKeyAlgorithm};

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which enumeration rejected a tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AlgorithmKind {
    PublicKey,
    Hash,
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PublicKey => f.write_str("public key"),
            Self::Hash => f.write_str("hash"),
        }
    }
}

/// A wire tag outside the OpenPGP enumerations.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("unknown {kind} algorithm tag {tag}")]
pub struct UnknownAlgorithmTag {
    pub kind: AlgorithmKind,
    pub tag: u8,
}

/// The public key cannot be used with the declared algorithm.
///
/// Wrong key type or corrupted key material. Retrying with another provider
/// will not help.
#[derive(thiserror::Error, Debug)]
#[error("invalid key {key_id} for {key_algorithm}")]
pub struct KeyError {
    pub key_algorithm: PublicKeyAlgorithm,
    pub key_id: KeyId,
    #[source]
    pub cause: BoxError,
}

impl KeyError {
    pub fn new(key_algorithm: PublicKeyAlgorithm, key_id: KeyId, cause: impl Into<BoxError>) -> Self {
        Self {
            key_algorithm,
            key_id,
            cause: cause.into(),
        }
    }
}

/// The provider has no implementation of the requested digest.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("digest {hash_algorithm} is not available")]
pub struct DigestUnavailableError {
    pub hash_algorithm: HashAlgorithm,
}

/// The signature primitive could not evaluate a candidate signature.
///
/// Distinct from a `false` result: nothing was proven about the signature.
#[derive(thiserror::Error, Debug)]
#[error("unable to verify signature: {message}")]
pub struct VerificationComputationError {
    pub message: String,
    #[source]
    pub source: Option<BoxError>,
}

impl VerificationComputationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Failure to create a signature context.
#[derive(thiserror::Error, Debug)]
pub enum ContextError {
    /// The provider has no scheme for this algorithm pair.
    #[error("no signature scheme for {key_algorithm} with {hash_algorithm}")]
    Unsupported {
        key_algorithm: PublicKeyAlgorithm,
        hash_algorithm: HashAlgorithm,
    },

    #[error(transparent)]
    Key(#[from] KeyError),

    /// The scheme hashes incrementally and its digest is missing.
    #[error(transparent)]
    DigestUnavailable(#[from] DigestUnavailableError),
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use pgpverify_abstractions::{
    ContextError, DigestUnavailableError, HashAlgorithm, KeyError, PublicKeyAlgorithm, UnknownAlgorithmTag,
    VerificationComputationError,
};

/// Errors returned by the factory and the verifier.
///
/// A signature that fails to verify is `Ok(false)` from
/// [`ContentVerifier::finalize`](crate::ContentVerifier::finalize), never an
/// `Error`.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithmTag),

    #[error("no signature scheme for {key_algorithm} with {hash_algorithm}")]
    UnsupportedAlgorithm {
        key_algorithm: PublicKeyAlgorithm,
        hash_algorithm: HashAlgorithm,
    },

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    DigestUnavailable(#[from] DigestUnavailableError),

    #[error(transparent)]
    Computation(#[from] VerificationComputationError),

    #[error("verifier already finalized")]
    AlreadyFinalized,

    #[error("failed to read signed content: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when another provider might succeed where this one failed.
    ///
    /// Key errors are properties of the key and never retryable. Neither are
    /// algorithms that cannot sign at all, such as Elgamal or X25519.
    pub fn is_retryable_with_other_provider(&self) -> bool {
        match self {
            Self::DigestUnavailable(_) => true,
            Self::UnsupportedAlgorithm { key_algorithm, .. } => key_algorithm.family().is_some(),
            _ => false,
        }
    }
}

impl From<ContextError> for Error {
    fn from(e: ContextError) -> Self {
        match e {
            ContextError::Unsupported {
                key_algorithm,
                hash_algorithm,
            } => Self::UnsupportedAlgorithm {
                key_algorithm,
                hash_algorithm,
            },
            ContextError::Key(e) => Self::Key(e),
            ContextError::DigestUnavailable(e) => Self::DigestUnavailable(e),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

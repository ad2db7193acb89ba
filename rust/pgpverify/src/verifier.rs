// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The single-use content verifier.
//!
//! Lifecycle:
//! 1) Built by [`VerifierFactory`](crate::VerifierFactory), bound to one key and
//!    one algorithm pair.
//! 2) Signed content is streamed in with `update`, `io::Write` or
//!    `update_from_reader`, in order, any number of times (including none).
//! 3) `finalize` checks one candidate signature. After that the verifier only
//!    answers accessor calls.

use std::io::{self, Read};
use std::mem;

use pgpverify_abstractions::{
    DigestContext, HashAlgorithm, KeyId, PublicKeyAlgorithm, SignatureContext, VerificationKey, VerifierProvider,
};

use crate::{mpi, Error, Result};

const READ_CHUNK_LEN: usize = 64 * 1024;

enum State<S, D> {
    Accumulating {
        signature: S,
        /// Present only for the whole-message family.
        prehash: Option<D>,
    },
    Finalized,
}

/// Verifies one signature over streamed content.
///
/// Every mutating call takes `&mut self`. Independent verifiers may run on
/// different threads and share the same key.
pub struct ContentVerifier<'k, P: VerifierProvider + ?Sized> {
    key_algorithm: PublicKeyAlgorithm,
    hash_algorithm: HashAlgorithm,
    key: &'k P::Key,
    state: State<P::Signature, P::Digest>,
}

impl<'k, P: VerifierProvider + ?Sized> ContentVerifier<'k, P> {
    pub(crate) fn new(
        key_algorithm: PublicKeyAlgorithm,
        hash_algorithm: HashAlgorithm,
        key: &'k P::Key,
        signature: P::Signature,
        prehash: Option<P::Digest>,
    ) -> Self {
        Self {
            key_algorithm,
            hash_algorithm,
            key,
            state: State::Accumulating { signature, prehash },
        }
    }

    pub fn key_algorithm(&self) -> PublicKeyAlgorithm {
        self.key_algorithm
    }

    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash_algorithm
    }

    pub fn key_id(&self) -> KeyId {
        self.key.key_id()
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self.state, State::Finalized)
    }

    /// Append signed content.
    ///
    /// Content goes to the prehash digest for the whole-message family and
    /// straight into the signature context otherwise.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        match &mut self.state {
            State::Accumulating {
                prehash: Some(digest), ..
            } => digest.update(data),
            State::Accumulating { signature, prehash: None } => signature.update(data),
            State::Finalized => return Err(Error::AlreadyFinalized),
        }
        Ok(())
    }

    /// Stream `reader` to EOF into the verifier. Returns the number of bytes read.
    pub fn update_from_reader<R: Read + ?Sized>(&mut self, reader: &mut R) -> Result<u64> {
        if self.is_finalized() {
            return Err(Error::AlreadyFinalized);
        }

        let mut buf = vec![0u8; READ_CHUNK_LEN];
        let mut total = 0u64;
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            };
            self.update(&buf[..n])?;
            total += n as u64;
        }
        Ok(total)
    }

    /// Check `candidate` against the content written so far.
    ///
    /// Returns `Ok(false)` when the signature is proven invalid and
    /// `Err(Error::Computation(_))` when it could not be evaluated. A second
    /// call fails with `Error::AlreadyFinalized`.
    pub fn finalize(&mut self, candidate: &[u8]) -> Result<bool> {
        let State::Accumulating { mut signature, prehash } = mem::replace(&mut self.state, State::Finalized) else {
            return Err(Error::AlreadyFinalized);
        };

        if let Some(digest) = prehash {
            signature.update(&digest.finalize());
        }

        // RSA signatures are MPIs and lose leading zero octets on the wire.
        let valid = match self.key.rsa_modulus_bits() {
            Some(bits) => signature.verify(&mpi::left_pad(candidate, mpi::modulus_len(bits)))?,
            None => signature.verify(candidate)?,
        };

        tracing::trace!(
            key_id = %self.key.key_id(),
            key_algorithm = %self.key_algorithm,
            hash_algorithm = %self.hash_algorithm,
            valid,
            "signature checked"
        );
        Ok(valid)
    }
}

impl<P: VerifierProvider + ?Sized> io::Write for ContentVerifier<'_, P> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<P: VerifierProvider + ?Sized> std::fmt::Debug for ContentVerifier<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentVerifier")
            .field("key_id", &self.key.key_id())
            .field("key_algorithm", &self.key_algorithm)
            .field("hash_algorithm", &self.hash_algorithm)
            .field("finalized", &self.is_finalized())
            .finish()
    }
}

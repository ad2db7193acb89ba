// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

/// OpenPGP 64-bit key identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct KeyId(pub u64);

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016X}", self.0)
    }
}

impl fmt::UpperHex for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl From<u64> for KeyId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A public key in the representation a provider consumes.
///
/// The verifier only needs the key's identity and, for RSA, the size of the
/// modulus. Everything else stays opaque to it.
pub trait VerificationKey {
    fn key_id(&self) -> KeyId;

    /// Bit length of the modulus for RSA-family keys, `None` otherwise.
    fn rsa_modulus_bits(&self) -> Option<usize>;
}

impl<K: VerificationKey + ?Sized> VerificationKey for &K {
    fn key_id(&self) -> KeyId {
        (**self).key_id()
    }

    fn rsa_modulus_bits(&self) -> Option<usize> {
        (**self).rsa_modulus_bits()
    }
}

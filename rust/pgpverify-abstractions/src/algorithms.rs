// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! OpenPGP public key and hash algorithm identifiers (RFC 4880 §9, RFC 9580 §9).

use std::fmt;

use crate::error::{AlgorithmKind, UnknownAlgorithmTag};

/// OpenPGP public key algorithm tags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PublicKeyAlgorithm {
    /// RSA (Encrypt or Sign).
    RsaGeneral = 1,
    /// RSA Encrypt-Only (deprecated).
    RsaEncrypt = 2,
    /// RSA Sign-Only (deprecated).
    RsaSign = 3,
    /// Elgamal (Encrypt-Only).
    Elgamal = 16,
    /// DSA.
    Dsa = 17,
    /// ECDH.
    Ecdh = 18,
    /// ECDSA.
    Ecdsa = 19,
    /// Elgamal (Encrypt or Sign), reserved.
    ElgamalGeneral = 20,
    /// Diffie-Hellman (X9.42), reserved.
    DiffieHellman = 21,
    /// EdDSA with the legacy OID-based key format.
    EdDsaLegacy = 22,
    /// X25519.
    X25519 = 25,
    /// X448.
    X448 = 26,
    /// Ed25519.
    Ed25519 = 27,
    /// Ed448.
    Ed448 = 28,
}

/// How a signature algorithm consumes the signed content.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    /// RSA PKCS#1 v1.5: incremental hash, signature is a bare MPI.
    Rsa,
    /// DSA and ECDSA: incremental hash.
    Dsa,
    /// EdDSA: the primitive only accepts a complete message, so the content
    /// is digested first and the digest is signed.
    WholeMessage,
}

impl PublicKeyAlgorithm {
    /// The wire tag.
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// The signature family, or `None` for algorithms that cannot sign.
    pub const fn family(self) -> Option<AlgorithmFamily> {
        match self {
            Self::RsaGeneral | Self::RsaSign => Some(AlgorithmFamily::Rsa),
            Self::Dsa | Self::Ecdsa => Some(AlgorithmFamily::Dsa),
            Self::EdDsaLegacy | Self::Ed25519 | Self::Ed448 => Some(AlgorithmFamily::WholeMessage),
            Self::RsaEncrypt
            | Self::Elgamal
            | Self::Ecdh
            | Self::ElgamalGeneral
            | Self::DiffieHellman
            | Self::X25519
            | Self::X448 => None,
        }
    }

    /// True when content must be buffered into a prehash digest before it
    /// reaches the signature primitive.
    pub const fn requires_prehash(self) -> bool {
        matches!(self.family(), Some(AlgorithmFamily::WholeMessage))
    }
}

impl TryFrom<u8> for PublicKeyAlgorithm {
    type Error = UnknownAlgorithmTag;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(Self::RsaGeneral),
            2 => Ok(Self::RsaEncrypt),
            3 => Ok(Self::RsaSign),
            16 => Ok(Self::Elgamal),
            17 => Ok(Self::Dsa),
            18 => Ok(Self::Ecdh),
            19 => Ok(Self::Ecdsa),
            20 => Ok(Self::ElgamalGeneral),
            21 => Ok(Self::DiffieHellman),
            22 => Ok(Self::EdDsaLegacy),
            25 => Ok(Self::X25519),
            26 => Ok(Self::X448),
            27 => Ok(Self::Ed25519),
            28 => Ok(Self::Ed448),
            _ => Err(UnknownAlgorithmTag {
                kind: AlgorithmKind::PublicKey,
                tag,
            }),
        }
    }
}

impl fmt::Display for PublicKeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RsaGeneral => "RSA",
            Self::RsaEncrypt => "RSA (encrypt only)",
            Self::RsaSign => "RSA (sign only)",
            Self::Elgamal => "Elgamal",
            Self::Dsa => "DSA",
            Self::Ecdh => "ECDH",
            Self::Ecdsa => "ECDSA",
            Self::ElgamalGeneral => "Elgamal (encrypt or sign)",
            Self::DiffieHellman => "Diffie-Hellman",
            Self::EdDsaLegacy => "EdDSA",
            Self::X25519 => "X25519",
            Self::X448 => "X448",
            Self::Ed25519 => "Ed25519",
            Self::Ed448 => "Ed448",
        };
        f.write_str(name)
    }
}

/// OpenPGP hash algorithm tags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HashAlgorithm {
    Md5 = 1,
    Sha1 = 2,
    Ripemd160 = 3,
    Sha256 = 8,
    Sha384 = 9,
    Sha512 = 10,
    Sha224 = 11,
    Sha3_256 = 12,
    Sha3_512 = 14,
}

impl HashAlgorithm {
    /// The wire tag.
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Digest output size in bytes.
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 | Self::Ripemd160 => 20,
            Self::Sha224 => 28,
            Self::Sha256 | Self::Sha3_256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 | Self::Sha3_512 => 64,
        }
    }
}

impl TryFrom<u8> for HashAlgorithm {
    type Error = UnknownAlgorithmTag;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(Self::Md5),
            2 => Ok(Self::Sha1),
            3 => Ok(Self::Ripemd160),
            8 => Ok(Self::Sha256),
            9 => Ok(Self::Sha384),
            10 => Ok(Self::Sha512),
            11 => Ok(Self::Sha224),
            12 => Ok(Self::Sha3_256),
            14 => Ok(Self::Sha3_512),
            _ => Err(UnknownAlgorithmTag {
                kind: AlgorithmKind::Hash,
                tag,
            }),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Ripemd160 => "RIPEMD160",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
            Self::Sha224 => "SHA224",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_512 => "SHA3-512",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_key_tags_round_trip() {
        for tag in 0..=u8::MAX {
            if let Ok(alg) = PublicKeyAlgorithm::try_from(tag) {
                assert_eq!(alg.tag(), tag);
            }
        }
    }

    #[test]
    fn unknown_tags_name_their_enumeration() {
        let err = PublicKeyAlgorithm::try_from(99).unwrap_err();
        assert_eq!(err.kind, AlgorithmKind::PublicKey);
        assert_eq!(err.tag, 99);

        let err = HashAlgorithm::try_from(4).unwrap_err();
        assert_eq!(err.kind, AlgorithmKind::Hash);
        assert_eq!(err.to_string(), "unknown hash algorithm tag 4");
    }

    #[test]
    fn only_eddsa_variants_prehash() {
        assert!(PublicKeyAlgorithm::EdDsaLegacy.requires_prehash());
        assert!(PublicKeyAlgorithm::Ed25519.requires_prehash());
        assert!(PublicKeyAlgorithm::Ed448.requires_prehash());
        assert!(!PublicKeyAlgorithm::RsaGeneral.requires_prehash());
        assert!(!PublicKeyAlgorithm::Dsa.requires_prehash());
        assert!(!PublicKeyAlgorithm::Ecdsa.requires_prehash());
        assert!(!PublicKeyAlgorithm::Ecdh.requires_prehash());
    }

    #[test]
    fn encryption_only_algorithms_have_no_family() {
        assert_eq!(PublicKeyAlgorithm::RsaEncrypt.family(), None);
        assert_eq!(PublicKeyAlgorithm::Elgamal.family(), None);
        assert_eq!(PublicKeyAlgorithm::X25519.family(), None);
        assert_eq!(PublicKeyAlgorithm::RsaSign.family(), Some(AlgorithmFamily::Rsa));
    }

    #[test]
    fn digest_lengths() {
        assert_eq!(HashAlgorithm::Sha1.digest_len(), 20);
        assert_eq!(HashAlgorithm::Sha224.digest_len(), 28);
        assert_eq!(HashAlgorithm::Sha3_512.digest_len(), 64);
    }
}

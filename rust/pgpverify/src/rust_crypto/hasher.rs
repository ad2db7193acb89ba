// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use digest::Digest;
use pgpverify_abstractions::{DigestContext, DigestUnavailableError, HashAlgorithm};
use rsa::Pkcs1v15Sign;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use sha3::{Sha3_256, Sha3_512};

/// Runtime-selected RustCrypto digest.
///
/// MD5 and RIPEMD-160 are not offered.
#[derive(Clone)]
pub enum Hasher {
    Sha1(Sha1),
    Sha224(Sha224),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
    Sha3_256(Sha3_256),
    Sha3_512(Sha3_512),
}

impl Hasher {
    pub fn new(hash_algorithm: HashAlgorithm) -> Result<Self, DigestUnavailableError> {
        match hash_algorithm {
            HashAlgorithm::Sha1 => Ok(Self::Sha1(Sha1::new())),
            HashAlgorithm::Sha224 => Ok(Self::Sha224(Sha224::new())),
            HashAlgorithm::Sha256 => Ok(Self::Sha256(Sha256::new())),
            HashAlgorithm::Sha384 => Ok(Self::Sha384(Sha384::new())),
            HashAlgorithm::Sha512 => Ok(Self::Sha512(Sha512::new())),
            HashAlgorithm::Sha3_256 => Ok(Self::Sha3_256(Sha3_256::new())),
            HashAlgorithm::Sha3_512 => Ok(Self::Sha3_512(Sha3_512::new())),
            HashAlgorithm::Md5 | HashAlgorithm::Ripemd160 => Err(DigestUnavailableError { hash_algorithm }),
        }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        match self {
            Self::Sha1(_) => HashAlgorithm::Sha1,
            Self::Sha224(_) => HashAlgorithm::Sha224,
            Self::Sha256(_) => HashAlgorithm::Sha256,
            Self::Sha384(_) => HashAlgorithm::Sha384,
            Self::Sha512(_) => HashAlgorithm::Sha512,
            Self::Sha3_256(_) => HashAlgorithm::Sha3_256,
            Self::Sha3_512(_) => HashAlgorithm::Sha3_512,
        }
    }

    /// PKCS#1 v1.5 padding with this digest's DigestInfo prefix.
    pub(crate) fn pkcs1v15_scheme(&self) -> Pkcs1v15Sign {
        match self {
            Self::Sha1(_) => Pkcs1v15Sign::new::<Sha1>(),
            Self::Sha224(_) => Pkcs1v15Sign::new::<Sha224>(),
            Self::Sha256(_) => Pkcs1v15Sign::new::<Sha256>(),
            Self::Sha384(_) => Pkcs1v15Sign::new::<Sha384>(),
            Self::Sha512(_) => Pkcs1v15Sign::new::<Sha512>(),
            Self::Sha3_256(_) => Pkcs1v15Sign::new::<Sha3_256>(),
            Self::Sha3_512(_) => Pkcs1v15Sign::new::<Sha3_512>(),
        }
    }
}

impl DigestContext for Hasher {
    fn update(&mut self, data: &[u8]) {
        match self {
            Self::Sha1(h) => Digest::update(h, data),
            Self::Sha224(h) => Digest::update(h, data),
            Self::Sha256(h) => Digest::update(h, data),
            Self::Sha384(h) => Digest::update(h, data),
            Self::Sha512(h) => Digest::update(h, data),
            Self::Sha3_256(h) => Digest::update(h, data),
            Self::Sha3_512(h) => Digest::update(h, data),
        }
    }

    fn finalize(self) -> Vec<u8> {
        match self {
            Self::Sha1(h) => h.finalize().to_vec(),
            Self::Sha224(h) => h.finalize().to_vec(),
            Self::Sha256(h) => h.finalize().to_vec(),
            Self::Sha384(h) => h.finalize().to_vec(),
            Self::Sha512(h) => h.finalize().to_vec(),
            Self::Sha3_256(h) => h.finalize().to_vec(),
            Self::Sha3_512(h) => h.finalize().to_vec(),
        }
    }
}

impl std::fmt::Debug for Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Hasher").field(&self.algorithm()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [HashAlgorithm; 7] = [
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_512,
    ];

    #[test]
    fn output_length_matches_declared_digest_len() {
        for alg in ALL {
            let h = Hasher::new(alg).unwrap();
            assert_eq!(h.algorithm(), alg);
            assert_eq!(h.finalize().len(), alg.digest_len(), "{alg}");
        }
    }

    #[test]
    fn sha256_known_answer() {
        let mut h = Hasher::new(HashAlgorithm::Sha256).unwrap();
        h.update(b"ab");
        h.update(b"c");
        assert_eq!(h.finalize(), Sha256::digest(b"abc").to_vec());
    }

    #[test]
    fn md5_and_ripemd_are_unavailable() {
        for alg in [HashAlgorithm::Md5, HashAlgorithm::Ripemd160] {
            let err = Hasher::new(alg).unwrap_err();
            assert_eq!(err.hash_algorithm, alg);
        }
    }
}

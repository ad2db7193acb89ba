// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared helpers for `pgpverify` integration tests.
//!
//! Key generation for RSA and DSA is slow in debug builds, so those keys are
//! generated once per test binary and cached.

#![allow(dead_code)]

use once_cell::sync::Lazy;
use pgpverify::rust_crypto::PublicKey;
use pgpverify::{HashAlgorithm, KeyId, PublicKeyAlgorithm, VerifierFactory};
use rand::rngs::OsRng;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha2::{Digest as _, Sha256};
use signature::{DigestSigner as _, SignatureEncoding as _, Signer as _};

pub(crate) const MESSAGE: &[u8] = b"hello";

/// Every hash the RustCrypto provider supplies.
pub(crate) const PROVIDER_HASHES: [HashAlgorithm; 7] = [
    HashAlgorithm::Sha1,
    HashAlgorithm::Sha224,
    HashAlgorithm::Sha256,
    HashAlgorithm::Sha384,
    HashAlgorithm::Sha512,
    HashAlgorithm::Sha3_256,
    HashAlgorithm::Sha3_512,
];

pub(crate) static RSA_2048: Lazy<RsaPrivateKey> =
    Lazy::new(|| RsaPrivateKey::new(&mut OsRng, 2048).expect("rsa keygen"));

pub(crate) static RSA_1024: Lazy<RsaPrivateKey> =
    Lazy::new(|| RsaPrivateKey::new(&mut OsRng, 1024).expect("rsa keygen"));

#[allow(deprecated)]
pub(crate) static DSA_1024: Lazy<dsa::SigningKey> = Lazy::new(|| {
    let components = dsa::Components::generate(&mut OsRng, dsa::KeySize::DSA_1024_160);
    dsa::SigningKey::generate(&mut OsRng, components)
});

pub(crate) fn rsa_public(sk: &RsaPrivateKey, key_id: u64) -> PublicKey {
    PublicKey::new(key_id, sk.to_public_key())
}

/// Digest `msg` with the OpenPGP hash algorithm `hash`.
pub(crate) fn digest(hash: HashAlgorithm, msg: &[u8]) -> Vec<u8> {
    match hash {
        HashAlgorithm::Sha1 => sha1::Sha1::digest(msg).to_vec(),
        HashAlgorithm::Sha224 => sha2::Sha224::digest(msg).to_vec(),
        HashAlgorithm::Sha256 => Sha256::digest(msg).to_vec(),
        HashAlgorithm::Sha384 => sha2::Sha384::digest(msg).to_vec(),
        HashAlgorithm::Sha512 => sha2::Sha512::digest(msg).to_vec(),
        HashAlgorithm::Sha3_256 => sha3::Sha3_256::digest(msg).to_vec(),
        HashAlgorithm::Sha3_512 => sha3::Sha3_512::digest(msg).to_vec(),
        other => panic!("no test digest for {other}"),
    }
}

fn pkcs1v15(hash: HashAlgorithm) -> Pkcs1v15Sign {
    match hash {
        HashAlgorithm::Sha1 => Pkcs1v15Sign::new::<sha1::Sha1>(),
        HashAlgorithm::Sha224 => Pkcs1v15Sign::new::<sha2::Sha224>(),
        HashAlgorithm::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
        HashAlgorithm::Sha384 => Pkcs1v15Sign::new::<sha2::Sha384>(),
        HashAlgorithm::Sha512 => Pkcs1v15Sign::new::<sha2::Sha512>(),
        HashAlgorithm::Sha3_256 => Pkcs1v15Sign::new::<sha3::Sha3_256>(),
        HashAlgorithm::Sha3_512 => Pkcs1v15Sign::new::<sha3::Sha3_512>(),
        other => panic!("no test scheme for {other}"),
    }
}

/// Full modulus-width PKCS#1 v1.5 signature.
pub(crate) fn rsa_sign(sk: &RsaPrivateKey, hash: HashAlgorithm, msg: &[u8]) -> Vec<u8> {
    sk.sign(pkcs1v15(hash), &digest(hash, msg)).expect("rsa sign")
}

/// The MPI form: leading zero octets removed.
pub(crate) fn strip_leading_zeros(v: &[u8]) -> Vec<u8> {
    let offset = v.iter().take_while(|&&b| b == 0).count();
    v[offset..].to_vec()
}

pub(crate) fn dsa_public(key_id: u64) -> PublicKey {
    PublicKey::new(key_id, DSA_1024.verifying_key().clone())
}

/// DER-encoded DSA signature over SHA-256(msg).
pub(crate) fn dsa_sign(msg: &[u8]) -> Vec<u8> {
    let sig: dsa::Signature = DSA_1024.sign_digest(Sha256::new_with_prefix(msg));
    sig.to_vec()
}

pub(crate) fn p256_key() -> p256::ecdsa::SigningKey {
    p256::ecdsa::SigningKey::random(&mut OsRng)
}

/// DER-encoded ECDSA P-256 signature over SHA-256(msg).
pub(crate) fn p256_sign(sk: &p256::ecdsa::SigningKey, msg: &[u8]) -> Vec<u8> {
    let sig: p256::ecdsa::Signature = sk.sign(msg);
    sig.to_der().as_bytes().to_vec()
}

pub(crate) fn ed25519_key() -> ed25519_dalek::SigningKey {
    ed25519_dalek::SigningKey::generate(&mut OsRng)
}

/// OpenPGP EdDSA signature: Ed25519 over the digest of the content.
pub(crate) fn ed25519_sign(sk: &ed25519_dalek::SigningKey, hash: HashAlgorithm, msg: &[u8]) -> Vec<u8> {
    let sig: ed25519_dalek::Signature = sk.sign(&digest(hash, msg));
    sig.to_bytes().to_vec()
}

pub(crate) fn flip_bit(v: &[u8], index: usize, bit: u8) -> Vec<u8> {
    let mut out = v.to_vec();
    out[index] ^= 1 << bit;
    out
}

/// Build a verifier, stream `chunks`, and check `sig`.
pub(crate) fn verify_chunks(
    key_algorithm: PublicKeyAlgorithm,
    hash: HashAlgorithm,
    key: &PublicKey,
    chunks: &[&[u8]],
    sig: &[u8],
) -> pgpverify::Result<bool> {
    let factory = VerifierFactory::new();
    let mut verifier = factory.get(key_algorithm, hash, key)?;
    for chunk in chunks {
        verifier.update(chunk)?;
    }
    verifier.finalize(sig)
}

pub(crate) fn verify(
    key_algorithm: PublicKeyAlgorithm,
    hash: HashAlgorithm,
    key: &PublicKey,
    msg: &[u8],
    sig: &[u8],
) -> pgpverify::Result<bool> {
    verify_chunks(key_algorithm, hash, key, &[msg], sig)
}

pub(crate) const TEST_KEY_ID: KeyId = KeyId(0x0123_4567_89AB_CDEF);

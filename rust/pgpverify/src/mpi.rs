// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Fixed-width reconstruction of MPI-encoded signature values.
//!
//! OpenPGP stores RSA signatures as MPIs, big-endian with leading zero octets
//! stripped. The RSA primitive wants exactly as many octets as the modulus,
//! so a value whose top octet happened to be zero arrives one or more octets
//! short and has to be restored before verification.

use std::borrow::Cow;

/// Octet length of a modulus with `bits` significant bits.
pub fn modulus_len(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Left-pad `value` with zero octets to `len`.
///
/// Values already `len` octets or longer are returned untouched.
pub fn left_pad(value: &[u8], len: usize) -> Cow<'_, [u8]> {
    if value.len() >= len {
        return Cow::Borrowed(value);
    }
    let mut out = vec![0u8; len];
    out[len - value.len()..].copy_from_slice(value);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulus_len_rounds_up() {
        assert_eq!(modulus_len(2048), 256);
        assert_eq!(modulus_len(2047), 256);
        assert_eq!(modulus_len(2049), 257);
        assert_eq!(modulus_len(1), 1);
        assert_eq!(modulus_len(0), 0);
    }

    #[test]
    fn short_values_are_right_aligned() {
        let padded = left_pad(&[0xAB, 0xCD], 4);
        assert!(matches!(padded, Cow::Owned(_)));
        assert_eq!(padded.as_ref(), &[0, 0, 0xAB, 0xCD]);
    }

    #[test]
    fn full_width_values_are_borrowed() {
        let value = [1u8, 2, 3];
        assert!(matches!(left_pad(&value, 3), Cow::Borrowed(_)));
    }

    #[test]
    fn long_values_are_not_truncated() {
        let value = [1u8, 2, 3, 4, 5];
        assert_eq!(left_pad(&value, 3).as_ref(), &value);
    }

    #[test]
    fn empty_value_pads_to_zeros() {
        assert_eq!(left_pad(&[], 3).as_ref(), &[0, 0, 0]);
    }
}

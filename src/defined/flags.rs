// (c) Copyright 2022 Christian Saide
// SPDX-License-Identifier: GPL-3.0-or-later

// Super usings
use super::error::{Error, Result};
use super::primitive::Primitive;
use super::repr::Value;

/// Determines whether `candidate` is one of `constants`, or when `flags` is set, whether it
/// is a valid bitwise combination of them.
///
/// Flag checks require every signed value involved to be non-negative: a negative candidate
/// is an [Error::OutOfRange], a negative constant is an [Error::InvalidConfiguration] of the
/// type itself, reported even when the candidate is `0`.
///
/// # Example
/// ```
/// use libenumcheck::defined::is_defined;
///
/// const PERMS: &[u32] = &[0, 1, 2, 4];
/// assert!(is_defined(1u32 | 4, PERMS, true).unwrap());
/// assert!(!is_defined(8u32, PERMS, true).unwrap());
/// assert!(!is_defined(5u32, PERMS, false).unwrap());
/// ```
pub fn is_defined<T>(candidate: T, constants: &[T], flags: bool) -> Result<bool>
where
    T: Primitive,
{
    decide(
        candidate.widen(),
        constants.iter().map(|constant| constant.widen()),
        flags,
    )
}

/// Returns an [Error::InvalidValue] naming `type_name` when [is_defined] is false for the
/// supplied arguments. Errors raised by [is_defined] itself are returned unchanged.
///
/// # Example
/// ```
/// use libenumcheck::defined::{ensure_defined, Error};
///
/// let err = ensure_defined(i32::MAX, &[0, 1, 2, 3], false, "IntEnum").unwrap_err();
/// assert!(matches!(err, Error::InvalidValue { .. }));
/// ```
pub fn ensure_defined<T>(candidate: T, constants: &[T], flags: bool, type_name: &str) -> Result<()>
where
    T: Primitive,
{
    if is_defined(candidate, constants, flags)? {
        Ok(())
    } else {
        Err(Error::InvalidValue {
            type_name: type_name.to_owned(),
            value: candidate.to_string(),
        })
    }
}

/// Shared decision over already widened values. Every value passed in must come from the same
/// representation.
pub(crate) fn decide<I>(candidate: Value, constants: I, flags: bool) -> Result<bool>
where
    I: IntoIterator<Item = Value>,
    I::IntoIter: Clone,
{
    let mut constants = constants.into_iter();
    if !flags {
        return Ok(constants.any(|constant| constant == candidate));
    }

    let bits = match candidate.flag_bits() {
        Some(bits) => bits,
        None => {
            return Err(Error::OutOfRange {
                value: candidate.as_signed(),
            })
        }
    };

    if let Some(constant) = constants.clone().find(Value::is_negative) {
        return Err(Error::InvalidConfiguration {
            constant: constant.as_signed(),
        });
    }

    Ok(combines(bits, constants.filter_map(|constant| constant.flag_bits())))
}

/// Whether `bits` is exactly the union of the declared flags that are subsets of it. Zero has
/// no bits to cover, so it is only valid when declared outright.
fn combines<I>(bits: u64, flags: I) -> bool
where
    I: Iterator<Item = u64>,
{
    let mut covered = 0u64;
    let mut zero_declared = false;
    for flag in flags {
        zero_declared |= flag == 0;
        if flag & !bits == 0 {
            covered |= flag;
        }
    }

    if bits == 0 {
        zero_declared
    } else {
        covered == bits
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use rstest::rstest;

    use super::*;

    const INT_FLAGS: &[i32] = &[0, 1, 2, 4];
    const INT_ENUM: &[i32] = &[0, 1, 2, 3];
    const INVALID_INT_FLAGS: &[i32] = &[0, -1, -2, -4];
    const UINT_FLAGS: &[u32] = &[0, 1, 2, 4];
    const UINT_ENUM: &[u32] = &[0, 1, 2, 3];

    #[rstest]
    #[case::zero(0, true)]
    #[case::one(1, true)]
    #[case::two(2, true)]
    #[case::three(3, true)]
    #[case::four(4, true)]
    #[case::five(5, true)]
    #[case::six(6, true)]
    #[case::seven(7, true)]
    #[case::eight(8, false)]
    #[case::stray_high_bit(1 << 20 | 1, false)]
    fn test_int_flags(#[case] candidate: i32, #[case] expected: bool) {
        assert_eq!(is_defined(candidate, INT_FLAGS, true), Ok(expected));
    }

    #[rstest]
    #[case::zero(0, true)]
    #[case::five(5, true)]
    #[case::seven(7, true)]
    #[case::eight(8, false)]
    #[case::max(u32::MAX, false)]
    fn test_uint_flags(#[case] candidate: u32, #[case] expected: bool) {
        assert_eq!(is_defined(candidate, UINT_FLAGS, true), Ok(expected));
    }

    #[rstest]
    #[case::zero(0, true)]
    #[case::three(3, true)]
    #[case::four(4, false)]
    #[case::max(i32::MAX, false)]
    #[case::negative(-1, false)]
    fn test_int_enum(#[case] candidate: i32, #[case] expected: bool) {
        assert_eq!(is_defined(candidate, INT_ENUM, false), Ok(expected));
    }

    #[rstest]
    #[case::zero(0, true)]
    #[case::three(3, true)]
    #[case::four(4, false)]
    fn test_uint_enum(#[case] candidate: u32, #[case] expected: bool) {
        assert_eq!(is_defined(candidate, UINT_ENUM, false), Ok(expected));
    }

    #[test]
    fn test_declared_combinations() {
        assert_eq!(is_defined(1 | 2, INT_FLAGS, true), Ok(true));
        assert_eq!(is_defined(1 | 2 | 4, INT_FLAGS, true), Ok(true));
        assert_eq!(is_defined(1 | 2, UINT_FLAGS, true), Ok(true));
        assert_eq!(is_defined(1 | 2 | 4, UINT_FLAGS, true), Ok(true));
    }

    #[rstest]
    #[case::min(i32::MIN)]
    #[case::minus_one(-1)]
    fn test_negative_candidate(#[case] candidate: i32) {
        assert_eq!(
            is_defined(candidate, INT_FLAGS, true),
            Err(Error::OutOfRange {
                value: candidate as i64
            })
        );
    }

    #[rstest]
    #[case::zero(0)]
    #[case::one(1)]
    #[case::seven(7)]
    fn test_negative_constant(#[case] candidate: i32) {
        assert_eq!(
            is_defined(candidate, INVALID_INT_FLAGS, true),
            Err(Error::InvalidConfiguration { constant: -1 })
        );
    }

    #[test]
    fn test_negative_candidate_reported_before_constants() {
        assert_eq!(
            is_defined(-8, INVALID_INT_FLAGS, true),
            Err(Error::OutOfRange { value: -8 })
        );
    }

    #[test]
    fn test_negative_constants_allowed_without_flags() {
        assert_eq!(is_defined(-2, INVALID_INT_FLAGS, false), Ok(true));
        assert_eq!(is_defined(-3, INVALID_INT_FLAGS, false), Ok(false));
    }

    #[test]
    fn test_zero_requires_declaration() {
        assert_eq!(is_defined(0u8, &[1, 2, 4], true), Ok(false));
        assert_eq!(is_defined(0u8, &[], true), Ok(false));
        assert_eq!(is_defined(0u8, &[], false), Ok(false));
    }

    #[rstest]
    #[case::ascending(&[1, 3])]
    #[case::descending(&[3, 1])]
    fn test_order_independent(#[case] constants: &[u16]) {
        assert_eq!(is_defined(3u16, constants, true), Ok(true));
        assert_eq!(is_defined(1u16, constants, true), Ok(true));
        assert_eq!(is_defined(2u16, constants, true), Ok(false));
    }

    #[test]
    fn test_wide_masks() {
        const WIDE: &[u64] = &[1, 1 << 63, 0xF0];
        assert_eq!(is_defined(1 << 63 | 1, WIDE, true), Ok(true));
        assert_eq!(is_defined(0xF1, WIDE, true), Ok(true));
        assert_eq!(is_defined(0x10, WIDE, true), Ok(false));
    }

    #[test]
    fn test_bool_and_char() {
        assert_eq!(is_defined(true, &[false, true], false), Ok(true));
        assert_eq!(is_defined('c', &['a', 'b'], false), Ok(false));
        assert_eq!(is_defined('c', &['a', 'b'], true), Ok(true));
    }

    #[test]
    fn test_ensure_defined() {
        assert_eq!(ensure_defined(5u32, UINT_FLAGS, true, "UIntEnumFlags"), Ok(()));
        assert_eq!(
            ensure_defined(i32::MAX, INT_ENUM, false, "IntEnum"),
            Err(Error::InvalidValue {
                type_name: String::from("IntEnum"),
                value: String::from("2147483647"),
            })
        );
        assert_eq!(
            ensure_defined(0, INVALID_INT_FLAGS, true, "InvalidIntEnumFlags"),
            Err(Error::InvalidConfiguration { constant: -1 })
        );
    }

    #[test]
    fn test_ensure_matches_is_defined() {
        for candidate in 0u32..=16 {
            let defined = is_defined(candidate, UINT_FLAGS, true).unwrap();
            let ensured = ensure_defined(candidate, UINT_FLAGS, true, "UIntEnumFlags");
            assert_eq!(defined, ensured.is_ok());
        }
    }

    #[test]
    fn test_idempotent() {
        for candidate in -4i32..=16 {
            let first = is_defined(candidate, INT_FLAGS, true);
            let second = is_defined(candidate, INT_FLAGS, true);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_concurrent() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    (0u32..64)
                        .map(|candidate| is_defined(candidate, UINT_FLAGS, true).unwrap())
                        .filter(|defined| *defined)
                        .count()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 8);
        }
    }
}

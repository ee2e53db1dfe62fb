use core::ops::Neg;

/// Per-width IEEE geometry and fast-path hooks for the parsing pipeline.
#[doc(hidden)]
pub trait Float:
    crate::private::Sealed + Sized + Copy + Default + PartialEq + Neg<Output = Self>
{
    /// Explicit mantissa bits in the IEEE representation.
    const MANTISSA_EXPLICIT_BITS: usize;
    /// Bit index of the sign.
    const SIGN_INDEX: usize;
    /// Biased exponent of infinities and NaNs.
    const INFINITE_POWER: i32;
    /// Minimum unbiased binary exponent (the negated exponent bias).
    const MINIMUM_EXPONENT: i32;
    /// Decimal exponents whose powers of five are exact in the 128-bit
    /// table; inside this window the builder can detect exact halfway
    /// products and break the tie toward even.
    const MIN_EXPONENT_ROUND_TO_EVEN: i32;
    const MAX_EXPONENT_ROUND_TO_EVEN: i32;
    /// Decimal exponents outside this window always under- or overflow.
    const SMALLEST_POWER_OF_TEN: i32;
    const LARGEST_POWER_OF_TEN: i32;
    /// Significant decimal digits accumulated before the scanner truncates.
    const MAX_DIGITS: usize;
    /// `10^MAX_DIGITS`, the first mantissa value the scanner cannot hold.
    const MANTISSA_LIMIT: u64;
    /// Canonical quiet NaN bit pattern (positive).
    const QUIET_NAN_BITS: u64;
    /// Positive infinity bit pattern.
    const INFINITY_BITS: u64;

    fn from_u64_bits(v: u64) -> Self;

    /// Correctly rounded conversion of an untruncated `mant * 10^exp10`
    /// through IEEE arithmetic on exact powers of ten, where possible.
    /// Returns the positive result; the caller applies the sign.
    fn fast_path(mant: u64, exp10: i64) -> Option<Self>;
}

/// Integers up to `10^15` are exact in binary64, so multiplying or dividing
/// an exact mantissa by one of these rounds exactly once.
const POW10_EXACT: [f64; 16] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15,
];

/// Double powers of ten covering the whole binary32 range. The entries for
/// `|e| > 15` are not exact, but they carry well over 20 correct bits past
/// the f32 significand for any mantissa below `10^10`, so the final
/// narrowing still rounds correctly.
#[rustfmt::skip]
const POW10_F32_WINDOW: [f64; 77] = [
    1e-38, 1e-37, 1e-36, 1e-35, 1e-34, 1e-33, 1e-32, 1e-31, 1e-30, 1e-29,
    1e-28, 1e-27, 1e-26, 1e-25, 1e-24, 1e-23, 1e-22, 1e-21, 1e-20, 1e-19,
    1e-18, 1e-17, 1e-16, 1e-15, 1e-14, 1e-13, 1e-12, 1e-11, 1e-10, 1e-9,
    1e-8,  1e-7,  1e-6,  1e-5,  1e-4,  1e-3,  1e-2,  1e-1,  1e0,   1e1,
    1e2,   1e3,   1e4,   1e5,   1e6,   1e7,   1e8,   1e9,   1e10,  1e11,
    1e12,  1e13,  1e14,  1e15,  1e16,  1e17,  1e18,  1e19,  1e20,  1e21,
    1e22,  1e23,  1e24,  1e25,  1e26,  1e27,  1e28,  1e29,  1e30,  1e31,
    1e32,  1e33,  1e34,  1e35,  1e36,  1e37,  1e38,
];

/// Largest integer exactly representable in binary64, `2^53 - 1`.
const MAX_EXACT_INT_F64: u64 = (1 << 53) - 1;

impl Float for f64 {
    const MANTISSA_EXPLICIT_BITS: usize = 52;
    const SIGN_INDEX: usize = 63;
    const INFINITE_POWER: i32 = 0x7FF;
    const MINIMUM_EXPONENT: i32 = -1023;
    const MIN_EXPONENT_ROUND_TO_EVEN: i32 = -4;
    const MAX_EXPONENT_ROUND_TO_EVEN: i32 = 23;
    const SMALLEST_POWER_OF_TEN: i32 = -342;
    const LARGEST_POWER_OF_TEN: i32 = 308;
    const MAX_DIGITS: usize = 19;
    const MANTISSA_LIMIT: u64 = 10_000_000_000_000_000_000;
    const QUIET_NAN_BITS: u64 = 0x7FF8_0000_0000_0000;
    const INFINITY_BITS: u64 = 0x7FF0_0000_0000_0000;

    #[inline]
    fn from_u64_bits(v: u64) -> Self {
        f64::from_bits(v)
    }

    #[inline]
    fn fast_path(mant: u64, exp10: i64) -> Option<Self> {
        if mant > MAX_EXACT_INT_F64 {
            return None;
        }
        if (-15..=15).contains(&exp10) {
            let mut value = mant as f64;
            if exp10 < 0 {
                value /= POW10_EXACT[(-exp10) as usize];
            } else {
                value *= POW10_EXACT[exp10 as usize];
            }
            return Some(value);
        }
        None
    }
}

impl Float for f32 {
    const MANTISSA_EXPLICIT_BITS: usize = 23;
    const SIGN_INDEX: usize = 31;
    const INFINITE_POWER: i32 = 0xFF;
    const MINIMUM_EXPONENT: i32 = -127;
    const MIN_EXPONENT_ROUND_TO_EVEN: i32 = -17;
    const MAX_EXPONENT_ROUND_TO_EVEN: i32 = 10;
    const SMALLEST_POWER_OF_TEN: i32 = -64;
    const LARGEST_POWER_OF_TEN: i32 = 38;
    const MAX_DIGITS: usize = 10;
    const MANTISSA_LIMIT: u64 = 10_000_000_000;
    const QUIET_NAN_BITS: u64 = 0x7FC0_0000;
    const INFINITY_BITS: u64 = 0x7F80_0000;

    #[inline]
    fn from_u64_bits(v: u64) -> Self {
        f32::from_bits(v as u32)
    }

    #[inline]
    fn fast_path(mant: u64, exp10: i64) -> Option<Self> {
        // The ten-digit scanner cap keeps `mant` exact in the f64
        // intermediate, so the narrowing below rounds exactly once.
        match exp10 {
            0 => Some(mant as f32),
            -1 => Some((mant as f64 / 10.0) as f32),
            -2 => Some((mant as f64 / 100.0) as f32),
            -38..=38 => Some((mant as f64 * POW10_F32_WINDOW[(exp10 + 38) as usize]) as f32),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_path_f64() {
        assert_eq!(f64::fast_path(12345, -2), Some(123.45));
        assert_eq!(f64::fast_path(12345, -1), Some(1234.5));
        assert_eq!(f64::fast_path(7, -1), Some(0.7));
        assert_eq!(f64::fast_path(189, -2), Some(1.89));
        assert_eq!(f64::fast_path(1, 15), Some(1e15));
        assert_eq!(f64::fast_path(1, -15), Some(1e-15));
        assert_eq!(f64::fast_path(0, 0), Some(0.0));
        assert_eq!(f64::fast_path(1, 16), None);
        assert_eq!(f64::fast_path(1, -16), None);
        assert_eq!(f64::fast_path(1 << 53, 0), None);
        assert_eq!(f64::fast_path((1 << 53) - 1, 0), Some(9007199254740991.0));
    }

    #[test]
    fn test_fast_path_f32() {
        assert_eq!(f32::fast_path(12345, -2), Some(123.45_f32));
        assert_eq!(f32::fast_path(3, 0), Some(3.0_f32));
        assert_eq!(f32::fast_path(1, 38), Some(1e38_f32));
        assert_eq!(f32::fast_path(1, -38), Some(1e-38_f32));
        assert_eq!(f32::fast_path(1, 39), None);
        assert_eq!(f32::fast_path(1, -39), None);
    }
}

use crate::common::{skip_digits, ByteSlice};
use crate::float::Float;

/// Bounded decimal fragments produced by the scanner: the leading
/// significant digits packed into an integer, the decimal scale that makes
/// `mant * 10^exp10` equal the input (up to the truncated tail), and
/// whether every digit made it into `mant`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub(crate) struct Decimal {
    pub mant: u64,
    pub exp10: i64,
    pub negative: bool,
    pub exact: bool,
}

/// Scans `digits [ '.' digits ] [ ('e'|'E') sign? digits ]`, accumulating at
/// most `F::MAX_DIGITS` significant digits into `mant`. Digits beyond the
/// cap are folded into the result by rounding the tail half-to-even.
///
/// The sign must already be consumed by the caller. Returns `None` unless at
/// least one digit appears before the exponent part; the exponent marker is
/// not consumed unless at least one digit follows it.
#[inline]
pub(crate) fn parse_decimal<F: Float>(mut s: &[u8], negative: bool) -> Option<(Decimal, &[u8])> {
    let mut mant = 0_u64;
    let mut exp10 = 0_i64;
    let mut sig = 0_usize;
    let mut any = false;

    let mut dropped = false;
    let mut dropped_first = 0_u8;
    let mut dropped_tail = false;

    // Integer digits. Leading zeros are consumed without using up one of
    // the significant-digit slots.
    while s.check_first(b'0') {
        any = true;
        s = s.advance(1);
    }
    while let Some(d) = s.first_digit() {
        any = true;
        if sig < F::MAX_DIGITS {
            mant = 10 * mant + d as u64;
            sig += 1;
            s = s.advance(1);
        } else {
            // Every further integer digit scales the result by ten.
            dropped = true;
            dropped_first = d;
            s = s.advance(1);
            let (n, nonzero) = skip_digits(&mut s);
            exp10 += 1 + n;
            dropped_tail |= nonzero;
            break;
        }
    }

    // Fractional digits.
    if s.check_first(b'.') {
        s = s.advance(1);
        if sig == 0 {
            // Nothing significant yet: leading fractional zeros only move
            // the decimal point.
            while s.check_first(b'0') {
                any = true;
                exp10 -= 1;
                s = s.advance(1);
            }
        }
        while let Some(d) = s.first_digit() {
            any = true;
            if sig < F::MAX_DIGITS {
                mant = 10 * mant + d as u64;
                sig += 1;
                exp10 -= 1;
                s = s.advance(1);
            } else {
                // Dropped fractional digits cannot rescale the mantissa;
                // they only feed the rounding decision below.
                if dropped {
                    dropped_tail |= d != 0;
                } else {
                    dropped = true;
                    dropped_first = d;
                }
                s = s.advance(1);
                let (_, nonzero) = skip_digits(&mut s);
                dropped_tail |= nonzero;
                break;
            }
        }
    }

    if !any {
        return None;
    }

    // Exponent part, consumed only when at least one digit follows the
    // marker; otherwise the cursor rewinds to the 'e'.
    if s.check_first2(b'e', b'E') {
        let start = s;
        s = s.advance(1);
        let mut neg_exp = false;
        if s.check_first2(b'-', b'+') {
            neg_exp = s.get_first() == b'-';
            s = s.advance(1);
        }
        match s.first_digit() {
            None => s = start,
            Some(d) => {
                s = s.advance(1);
                let mut exp = d as i64;
                while let Some(d) = s.first_digit() {
                    // Saturate: anything at 10^4 or beyond is far outside
                    // every supported exponent window.
                    if exp < 10_000 {
                        exp = 10 * exp + d as i64;
                    }
                    s = s.advance(1);
                }
                exp10 += if neg_exp { -exp } else { exp };
            }
        }
    }

    // Round the truncated tail half-to-even into the capped mantissa.
    if dropped && (dropped_first > 5 || (dropped_first == 5 && (dropped_tail || mant & 1 == 1))) {
        mant += 1;
        if mant == F::MANTISSA_LIMIT {
            mant /= 10;
            exp10 += 1;
        }
    }

    let decimal = Decimal {
        mant,
        exp10,
        negative,
        exact: !dropped,
    };
    Some((decimal, s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan64(s: &str) -> Option<(Decimal, usize)> {
        parse_decimal::<f64>(s.as_bytes(), false).map(|(d, rest)| (d, s.len() - rest.len()))
    }

    fn scan32(s: &str) -> Option<(Decimal, usize)> {
        parse_decimal::<f32>(s.as_bytes(), false).map(|(d, rest)| (d, s.len() - rest.len()))
    }

    fn dec(mant: u64, exp10: i64, exact: bool) -> Decimal {
        Decimal {
            mant,
            exp10,
            negative: false,
            exact,
        }
    }

    #[test]
    fn test_simple() {
        assert_eq!(scan64("0"), Some((dec(0, 0, true), 1)));
        assert_eq!(scan64("345"), Some((dec(345, 0, true), 3)));
        assert_eq!(scan64("1.23e4"), Some((dec(123, 2, true), 6)));
        assert_eq!(scan64("1.23E-4"), Some((dec(123, -6, true), 7)));
        assert_eq!(scan64("12.5x"), Some((dec(125, -1, true), 4)));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(scan64(""), None);
        assert_eq!(scan64("."), None);
        assert_eq!(scan64(".e1"), None);
        assert_eq!(scan64("e12"), None);
        assert_eq!(scan64("x"), None);
    }

    #[test]
    fn test_trailing_dot_and_double_dot() {
        assert_eq!(scan64("1."), Some((dec(1, 0, true), 2)));
        assert_eq!(scan64("1..0"), Some((dec(1, 0, true), 2)));
        assert_eq!(scan64(".5"), Some((dec(5, -1, true), 2)));
    }

    #[test]
    fn test_exponent_rewind() {
        // The marker and a bare sign are not consumed without digits.
        assert_eq!(scan64("2e"), Some((dec(2, 0, true), 1)));
        assert_eq!(scan64("2e+"), Some((dec(2, 0, true), 1)));
        assert_eq!(scan64("2ea"), Some((dec(2, 0, true), 1)));
        assert_eq!(scan64("2e-a"), Some((dec(2, 0, true), 1)));
        assert_eq!(scan64("2e2."), Some((dec(2, 2, true), 3)));
    }

    #[test]
    fn test_exponent_saturation() {
        let (d, n) = scan64("1e99999999999999999999").unwrap();
        assert_eq!(n, 22);
        assert!(d.exp10 >= 10_000);
        let (d, _) = scan64("1e-99999999999999999999").unwrap();
        assert!(d.exp10 <= -10_000);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(scan64("00123"), Some((dec(123, 0, true), 5)));
        assert_eq!(scan64("0.000001"), Some((dec(1, -6, true), 8)));
        // Zeros ahead of the first significant digit must not use up any
        // of the nineteen significant-digit slots.
        let (d, _) = scan64("0.00000000000000000000123456789012345678901").unwrap();
        assert_eq!(d.mant, 1234567890123456789);
        assert_eq!(d.exp10, -39);
        assert!(!d.exact);
    }

    #[test]
    fn test_truncation_rounding() {
        // 20 digits; the dropped '4' rounds down.
        assert_eq!(
            scan64("12345678901234567894"),
            Some((dec(1234567890123456789, 1, false), 20))
        );
        // Dropped '6' rounds up.
        assert_eq!(
            scan64("12345678901234567896"),
            Some((dec(1234567890123456790, 1, false), 20))
        );
        // Dropped '5' with odd kept mantissa rounds up (ties-to-even).
        assert_eq!(
            scan64("12345678901234567895"),
            Some((dec(1234567890123456790, 1, false), 20))
        );
        // Dropped '5' with even kept mantissa and no sticky tail stays.
        assert_eq!(
            scan64("12345678901234567885"),
            Some((dec(1234567890123456788, 1, false), 20))
        );
        // ... but a nonzero sticky tail forces the round up.
        assert_eq!(
            scan64("1234567890123456788500000000001"),
            Some((dec(1234567890123456789, 12, false), 31))
        );
    }

    #[test]
    fn test_truncated_fraction_keeps_scale() {
        // Dropped fractional digits must not rescale the mantissa.
        assert_eq!(
            scan64("1.2345678901234567891"),
            Some((dec(1234567890123456789, -18, false), 21))
        );
        assert_eq!(scan32("1.23456789012"), Some((dec(1234567890, -9, false), 13)));
    }

    #[test]
    fn test_mantissa_carry_promotion() {
        // Rounding up all-nines promotes the mantissa by one digit.
        assert_eq!(
            scan64("99999999999999999999"),
            Some((dec(1000000000000000000, 2, false), 20))
        );
        assert_eq!(scan32("99999999995"), Some((dec(1000000000, 2, false), 11)));
    }

    #[test]
    fn test_float_cap_is_ten_digits() {
        assert_eq!(scan32("1234567890"), Some((dec(1234567890, 0, true), 10)));
        assert_eq!(scan32("12345678901"), Some((dec(1234567890, 1, false), 11)));
    }
}

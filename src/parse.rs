use crate::binary::compute_float;
use crate::common::ByteSlice;
use crate::decimal::parse_decimal;
use crate::float::Float;
use crate::{FromCharsResult, Status};

/// Full floating-point pipeline: sign, special tokens, bounded decimal
/// scan, fast path, range guards, then the power-of-five product.
#[inline]
pub(crate) fn parse_float<F: Float>(s: &[u8]) -> FromCharsResult<F> {
    let mut p = s;
    let mut negative = false;
    if p.check_first2(b'+', b'-') {
        negative = p.get_first() == b'-';
        p = p.advance(1);
    }

    if let Some((value, rest)) = parse_special::<F>(p, negative) {
        return ok(value, s.len() - rest.len());
    }

    let (d, rest) = match parse_decimal::<F>(p, negative) {
        Some(r) => r,
        None => return FromCharsResult::invalid(),
    };
    let consumed = s.len() - rest.len();

    if d.exact {
        if let Some(value) = F::fast_path(d.mant, d.exp10) {
            return ok(if d.negative { -value } else { value }, consumed);
        }
    }

    let sign_word = (d.negative as u64) << F::SIGN_INDEX;

    if d.mant == 0 {
        return ok(F::from_u64_bits(sign_word), consumed);
    }
    if d.exp10 < F::SMALLEST_POWER_OF_TEN as i64 {
        // Underflows even the subnormal range.
        return FromCharsResult {
            value: F::from_u64_bits(sign_word),
            consumed,
            status: Status::OutOfRange,
        };
    }
    if d.exp10 > F::LARGEST_POWER_OF_TEN as i64 {
        return FromCharsResult {
            value: F::from_u64_bits(F::INFINITY_BITS | sign_word),
            consumed,
            status: Status::OutOfRange,
        };
    }

    let am = compute_float::<F>(d.exp10 as i32, d.mant);
    let word = am.mantissa | ((am.power2 as u64) << F::MANTISSA_EXPLICIT_BITS) | sign_word;
    ok(F::from_u64_bits(word), consumed)
}

/// Case-insensitive `nan`, `inf` and `infinity` after an already-consumed
/// sign. The eight-byte token wins whenever it fits; unrelated trailing
/// bytes stay unconsumed. Partial tokens fall through to the caller.
#[inline]
fn parse_special<F: Float>(s: &[u8], negative: bool) -> Option<(F, &[u8])> {
    if s.len() < 3 {
        return None;
    }
    let sign_word = (negative as u64) << F::SIGN_INDEX;
    if s.eq_ignore_case(b"nan") {
        return Some((F::from_u64_bits(F::QUIET_NAN_BITS | sign_word), s.advance(3)));
    }
    if s.eq_ignore_case(b"inf") {
        let rest = if s.len() >= 8 && s.eq_ignore_case(b"infinity") {
            s.advance(8)
        } else {
            s.advance(3)
        };
        return Some((F::from_u64_bits(F::INFINITY_BITS | sign_word), rest));
    }
    None
}

#[inline]
fn ok<F>(value: F, consumed: usize) -> FromCharsResult<F> {
    FromCharsResult {
        value,
        consumed,
        status: Status::Ok,
    }
}

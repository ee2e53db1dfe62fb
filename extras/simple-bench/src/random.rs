use std::fmt::{self, Display};
use std::str::FromStr;

use anyhow::{bail, Error, Result};
use fastrand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RandomGen {
    Uniform,
    OneOverRand32,
    SimpleUniform32,
    SimpleInt32,
    SimpleInt64,
    IntEInt,
    BigIntDotInt,
    BigInts,
    Mixed,
    ShortNoExp,
    LongFrac,
}

impl Display for RandomGen {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Uniform => "uniform",
            Self::OneOverRand32 => "one_over_rand32",
            Self::SimpleUniform32 => "simple_uniform32",
            Self::SimpleInt32 => "simple_int32",
            Self::SimpleInt64 => "simple_int64",
            Self::IntEInt => "int_e_int",
            Self::BigIntDotInt => "bigint_int_dot_int",
            Self::BigInts => "big_ints",
            Self::Mixed => "mixed",
            Self::ShortNoExp => "short_no_exp",
            Self::LongFrac => "long_frac",
        })
    }
}

impl FromStr for RandomGen {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "uniform" => Self::Uniform,
            "one_over_rand32" => Self::OneOverRand32,
            "simple_uniform32" => Self::SimpleUniform32,
            "simple_int32" => Self::SimpleInt32,
            "simple_int64" => Self::SimpleInt64,
            "int_e_int" => Self::IntEInt,
            "bigint_int_dot_int" => Self::BigIntDotInt,
            "big_ints" => Self::BigInts,
            "mixed" => Self::Mixed,
            "short_no_exp" => Self::ShortNoExp,
            "long_frac" => Self::LongFrac,
            _ => bail!("Invalid random generator: {:?}", s),
        })
    }
}

impl RandomGen {
    pub fn variants() -> &'static [&'static str] {
        &[
            "uniform",
            "one_over_rand32",
            "simple_uniform32",
            "simple_int32",
            "simple_int64",
            "int_e_int",
            "bigint_int_dot_int",
            "big_ints",
            "mixed",
            "short_no_exp",
            "long_frac",
        ]
    }

    pub fn gen(&self, rng: &mut Rng) -> String {
        match self {
            Self::Uniform
            | Self::OneOverRand32
            | Self::SimpleUniform32
            | Self::SimpleInt32
            | Self::SimpleInt64 => {
                let value = match self {
                    Self::Uniform => rng.f64(),
                    Self::OneOverRand32 => 1. / rng.u32(1..) as f64,
                    Self::SimpleUniform32 => rng.u32(..) as f64 / u32::MAX as f64,
                    Self::SimpleInt32 => rng.u32(..) as f64,
                    Self::SimpleInt64 => rng.u64(..) as f64,
                    _ => unreachable!(),
                };
                ryu::Buffer::new().format_finite(value).to_owned()
            }
            Self::IntEInt => format!("{}e{}", rng.u32(..), rng.u32(..99)),
            Self::BigInts => format!("{}{}{}", rng.u64(..), rng.u64(..), rng.u64(..)),
            Self::BigIntDotInt => format!("{}.{}", rng.u32(..), rng.u32(..)),
            Self::Mixed => digit_string(rng, 1..=8, 0..=8, Some(-30..=30)),
            Self::ShortNoExp => digit_string(rng, 1..=6, 0..=2, None),
            Self::LongFrac => digit_string(rng, 1..=16, 0..=16, Some(-30..=30)),
        }
    }
}

/// A random signed decimal with the given digit-count and exponent ranges.
fn digit_string(
    rng: &mut Rng,
    int_digits: std::ops::RangeInclusive<usize>,
    frac_digits: std::ops::RangeInclusive<usize>,
    exp: Option<std::ops::RangeInclusive<i32>>,
) -> String {
    let mut s = String::new();
    if rng.bool() {
        s.push('-');
    }
    for _ in 0..rng.usize(int_digits) {
        s.push(rng.digit(10));
    }
    let n_frac = rng.usize(frac_digits);
    if n_frac > 0 {
        s.push('.');
        for _ in 0..n_frac {
            s.push(rng.digit(10));
        }
    }
    if let Some(range) = exp {
        s.push('e');
        s.push_str(&rng.i32(range).to_string());
    }
    s
}

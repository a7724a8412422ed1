// File: crates/qae-utils/src/bits.rs
// Summary: Fixed-width, most-significant-bit-first conversions between integers and bit lists.

use std::fmt;

use crate::error::{Result, UtilsError};

/// Most significant bits a vector may carry; values are `u64`.
pub const MAX_WIDTH: u32 = u64::BITS;

/// Ordered bits, most significant first. Every element is 0 or 1. Any width
/// is allowed but at most [`MAX_WIDTH`] bits follow the leading zeros.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitVector {
    bits: Vec<u8>,
}

impl BitVector {
    /// Validate a caller-supplied bit list.
    pub fn from_bits(bits: impl IntoIterator<Item = u8>) -> Result<Self> {
        let bits: Vec<u8> = bits.into_iter().collect();
        if let Some((index, &value)) = bits.iter().enumerate().find(|(_, &b)| b > 1) {
            return Err(UtilsError::InvalidBit { index, value });
        }
        let significant = bits.iter().skip_while(|&&b| b == 0).count();
        if significant > MAX_WIDTH as usize {
            return Err(UtilsError::TooManyBits { significant, max: MAX_WIDTH });
        }
        Ok(Self { bits })
    }

    pub fn width(&self) -> usize {
        self.bits.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter().copied()
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.bits {
            write!(f, "{b}")?;
        }
        Ok(())
    }
}

/// Zero-padded binary representation of `value` in exactly `width` bits.
/// Widths above 64 are padded with leading zeros.
pub fn int_to_bits(value: u64, width: u32) -> Result<BitVector> {
    if width < MAX_WIDTH && value >> width != 0 {
        return Err(UtilsError::InvalidWidth { value, width });
    }
    let bits = (0..width)
        .rev()
        .map(|shift| value.checked_shr(shift).map_or(0, |v| (v & 1) as u8))
        .collect();
    Ok(BitVector { bits })
}

/// Read a bit vector back as an unsigned binary numeral.
pub fn bits_to_int(bits: &BitVector) -> u64 {
    bits.iter().fold(0u64, |acc, b| (acc << 1) | u64::from(b))
}

/// Minimum width labelling `n` distinct outcomes: `max(1, ceil(log2 n))`.
pub fn min_bit_width(n: usize) -> u32 {
    if n <= 1 {
        return 1;
    }
    (usize::BITS - (n - 1).leading_zeros()).max(1)
}

/// Binary labels `0..n` at [`min_bit_width`] (`n = 5` gives `"000"` through `"100"`).
pub fn binary_labels(n: usize) -> Vec<String> {
    let width = min_bit_width(n) as usize;
    (0..n).map(|i| format!("{i:0width$b}")).collect()
}

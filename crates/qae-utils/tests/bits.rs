// File: crates/qae-utils/tests/bits.rs
// Purpose: Fixed-width integer/bit conversions and default outcome labels.

use qae_utils::bits::MAX_WIDTH;
use qae_utils::{binary_labels, bits_to_int, int_to_bits, min_bit_width, BitVector, UtilsError};

#[test]
fn int_to_bits_is_msb_first_and_zero_padded() {
    let bits = int_to_bits(5, 4).expect("fits");
    assert_eq!(bits.as_slice(), &[0, 1, 0, 1]);
    assert_eq!(bits.to_string(), "0101");
    assert_eq!(int_to_bits(0, 3).expect("fits").as_slice(), &[0, 0, 0]);
}

#[test]
fn round_trips_every_value_below_two_to_the_width() {
    for width in 1..=10u32 {
        for n in 0..(1u64 << width) {
            let bits = int_to_bits(n, width).expect("fits");
            assert_eq!(bits.width(), width as usize);
            assert_eq!(bits_to_int(&bits), n, "width {width}");
        }
    }
    let max = int_to_bits(u64::MAX, MAX_WIDTH).expect("full width");
    assert_eq!(bits_to_int(&max), u64::MAX);
}

#[test]
fn value_wider_than_width_is_rejected() {
    match int_to_bits(8, 3) {
        Err(UtilsError::InvalidWidth { value: 8, width: 3 }) => {}
        other => panic!("expected InvalidWidth, got {other:?}"),
    }
    assert!(int_to_bits(1, 0).is_err());
    assert!(int_to_bits(0, 0).expect("empty").as_slice().is_empty());
}

#[test]
fn widths_beyond_64_are_zero_padded() {
    let bits = int_to_bits(1, 70).expect("fits");
    assert_eq!(bits.width(), 70);
    assert!(bits.as_slice()[..69].iter().all(|&b| b == 0));
    assert_eq!(bits.as_slice()[69], 1);
    assert_eq!(bits_to_int(&bits), 1);

    let full = int_to_bits(u64::MAX, MAX_WIDTH + 1).expect("fits");
    assert_eq!(full.as_slice()[0], 0);
    assert_eq!(bits_to_int(&full), u64::MAX);
}

#[test]
fn bit_vector_limits_significant_bits_only() {
    let padded = BitVector::from_bits(std::iter::repeat(0).take(100).chain([1, 0, 1])).expect("leading zeros");
    assert_eq!(bits_to_int(&padded), 5);

    match BitVector::from_bits(std::iter::repeat(1).take(65)) {
        Err(UtilsError::TooManyBits { significant: 65, max: 64 }) => {}
        other => panic!("expected TooManyBits, got {other:?}"),
    }
}

#[test]
fn bit_vector_rejects_non_binary_digits() {
    match BitVector::from_bits([1, 0, 2]) {
        Err(UtilsError::InvalidBit { index: 2, value: 2 }) => {}
        other => panic!("expected InvalidBit, got {other:?}"),
    }
    let ok = BitVector::from_bits([1, 1, 0]).expect("binary");
    assert_eq!(bits_to_int(&ok), 6);
    assert_eq!(bits_to_int(&BitVector::default()), 0);
}

#[test]
fn minimum_width_is_ceil_log2_with_floor_of_one() {
    assert_eq!(min_bit_width(0), 1);
    assert_eq!(min_bit_width(1), 1);
    assert_eq!(min_bit_width(2), 1);
    assert_eq!(min_bit_width(3), 2);
    assert_eq!(min_bit_width(4), 2);
    assert_eq!(min_bit_width(5), 3);
    assert_eq!(min_bit_width(8), 3);
    assert_eq!(min_bit_width(9), 4);
}

#[test]
fn binary_labels_for_five_outcomes() {
    assert_eq!(binary_labels(5), vec!["000", "001", "010", "011", "100"]);
    assert_eq!(binary_labels(1), vec!["0"]);
    assert!(binary_labels(0).is_empty());
}

//! Tests for byte order handling
//!
//! These tests verify:
//! - Word reversal and its involution property
//! - The per-run conversion decision
//! - Endianness argument parsing
//! - Each word's own bytes are reversed (not some other value's)

use log_converter::record::{
    needs_conversion, reverse_bytes, reverse_word, Endianness, LogRecord,
};
use log_converter::ConvertError;

// =============================================================================
// Reversal Tests
// =============================================================================

#[test]
fn test_reverse_bytes_reflects_array() {
    assert_eq!(reverse_bytes([1, 2, 3, 4]), [4, 3, 2, 1]);
    assert_eq!(reverse_bytes([0xAA, 0xAA, 0xBB, 0xBB]), [0xBB, 0xBB, 0xAA, 0xAA]);
}

#[test]
fn test_reverse_word_known_values() {
    assert_eq!(reverse_word(0x1122_3344), 0x4433_2211);
    assert_eq!(reverse_word(0x0000_00FF), 0xFF00_0000);
    assert_eq!(reverse_word(0), 0);
    assert_eq!(reverse_word(u32::MAX), u32::MAX);
}

#[test]
fn test_reverse_word_matches_swap_bytes() {
    let mut word: u32 = 0x9E37_79B9;
    for _ in 0..1_000 {
        assert_eq!(reverse_word(word), word.swap_bytes());
        word = word.wrapping_mul(0x0101_0101).wrapping_add(0x7F4A_7C15);
    }
}

#[test]
fn test_reversal_is_involution() {
    let mut word: u32 = 1;
    for _ in 0..10_000 {
        assert_eq!(reverse_word(reverse_word(word)), word);
        word = word.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    }
    for word in [0, 1, 0x80, 0x8000_0000, 0x7FFF_FFFF, u32::MAX] {
        assert_eq!(reverse_word(reverse_word(word)), word);
    }
}

// =============================================================================
// Conversion Decision Tests
// =============================================================================

#[test]
fn test_no_request_means_no_conversion() {
    assert!(!needs_conversion(None));
}

#[test]
fn test_native_request_means_no_conversion() {
    assert!(!needs_conversion(Some(Endianness::native())));
}

#[test]
fn test_foreign_request_means_conversion() {
    let foreign = match Endianness::native() {
        Endianness::Little => Endianness::Big,
        Endianness::Big => Endianness::Little,
    };
    assert!(needs_conversion(Some(foreign)));
}

#[test]
fn test_native_matches_target() {
    if cfg!(target_endian = "little") {
        assert_eq!(Endianness::native(), Endianness::Little);
    } else {
        assert_eq!(Endianness::native(), Endianness::Big);
    }
}

// =============================================================================
// Argument Parsing Tests
// =============================================================================

#[test]
fn test_parse_valid_arguments() {
    assert_eq!(Endianness::from_arg("l").unwrap(), Endianness::Little);
    assert_eq!(Endianness::from_arg("b").unwrap(), Endianness::Big);
    assert_eq!("b".parse::<Endianness>().unwrap(), Endianness::Big);
}

#[test]
fn test_parse_rejects_everything_else() {
    for arg in ["x", "L", "B", "", "lb", "little", "big", " l", "l "] {
        match Endianness::from_arg(arg) {
            Err(ConvertError::InvalidEndianness(got)) => assert_eq!(got, arg),
            other => panic!("Expected InvalidEndianness for {:?}, got {:?}", arg, other),
        }
    }
}

#[test]
fn test_invalid_endianness_message() {
    let err = Endianness::from_arg("x").unwrap_err();
    assert_eq!(err.to_string(), "Endianness must be l for little or b for big.");
}

// =============================================================================
// Record Normalization Tests
// =============================================================================

#[test]
fn test_normalized_without_conversion_is_identity() {
    let record = LogRecord::new(0x0102_0304, 0x0506_0708, 0x090A_0B0C);
    assert_eq!(record.normalized(false), record);
}

#[test]
fn test_each_word_reverses_its_own_bytes() {
    // Reversing anything other than the word itself (such as an address
    // derived from its value) would leave these words unchanged.
    let record = LogRecord::new(0x0102_0304, 0x0506_0708, 0x090A_0B0C);
    let swapped = record.normalized(true);

    assert_eq!(swapped, LogRecord::new(0x0403_0201, 0x0807_0605, 0x0C0B_0A09));
    assert_eq!(swapped.normalized(true), record);
}

#[test]
fn test_big_endian_capture_decodes_on_any_host() {
    let mut bytes = [0u8; 12];
    bytes[0..4].copy_from_slice(&100u32.to_be_bytes());
    bytes[4..8].copy_from_slice(&3u32.to_be_bytes());
    bytes[8..12].copy_from_slice(&0xFFu32.to_be_bytes());

    let convert = needs_conversion(Some(Endianness::Big));
    let record = LogRecord::from_bytes(&bytes).normalized(convert);

    assert_eq!(record, LogRecord::new(100, 3, 0xFF));
}

#[test]
fn test_little_endian_capture_decodes_on_any_host() {
    let mut bytes = [0u8; 12];
    bytes[0..4].copy_from_slice(&123_456u32.to_le_bytes());
    bytes[4..8].copy_from_slice(&9u32.to_le_bytes());
    bytes[8..12].copy_from_slice(&0x1234_5678u32.to_le_bytes());

    let convert = needs_conversion(Some(Endianness::Little));
    let record = LogRecord::from_bytes(&bytes).normalized(convert);

    assert_eq!(record, LogRecord::new(123_456, 9, 0x1234_5678));
}

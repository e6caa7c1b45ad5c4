use std::{string::String, vec::Vec};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{
    ByteCursor, IterCursor, ScalarValue, chars_lossy, code_points, decode, decode_next, encode,
    find_code_point, find_code_point_by_decode, validate,
};

/// Every scalar value survives an encode followed by a decode, and both
/// directions agree on the width.
#[test]
fn round_trips_every_scalar_value() {
    let mut buf = [0u8; 4];
    for code in 0..=0x10_FFFFu32 {
        let Some(scalar) = ScalarValue::from_u32(code) else {
            continue;
        };
        let written = encode(scalar, &mut buf).unwrap();
        assert_eq!(written, scalar.len_utf8());
        let (next, decoded) = decode(&buf[..written], 0);
        assert_eq!(decoded, Ok(scalar), "U+{code:04X}");
        assert_eq!(next, written);
    }
}

/// Property: scanning the bytes of any `String` visits exactly its `char`s,
/// advancing by each one's UTF-8 width.
#[test]
fn scan_of_valid_text_matches_chars_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: String) -> bool {
        let bytes = text.as_bytes();
        let mut at = 0;
        for expected in text.chars() {
            let (next, result) = decode(bytes, at);
            if result != Ok(ScalarValue::from_char(expected)) {
                return false;
            }
            if next != at + expected.len_utf8() {
                return false;
            }
            at = next;
        }
        at == bytes.len()
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new().tests(tests).quickcheck(prop as fn(String) -> bool);
}

/// Property: the first fault offset on arbitrary bytes matches the standard
/// library's `valid_up_to`.
#[test]
fn first_fault_position_matches_std_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(data: Vec<u8>) -> bool {
        match (validate(&data), std::str::from_utf8(&data)) {
            (Ok(()), Ok(_)) => true,
            (Err(mine), Err(theirs)) => mine.valid_up_to() == theirs.valid_up_to(),
            _ => false,
        }
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new().tests(tests).quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: every scan step claims a positive span and the spans tile the
/// input exactly.
#[test]
fn scan_spans_tile_the_input_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(data: Vec<u8>) -> bool {
        let mut total = 0usize;
        for step in code_points(&data) {
            let span = match step {
                Ok(scalar) => scalar.len_utf8(),
                Err(fault) => usize::from(fault.consumed),
            };
            if span == 0 {
                return false;
            }
            total += span;
        }
        total == data.len()
    }

    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;

    QuickCheck::new().tests(tests).quickcheck(prop as fn(Vec<u8>) -> bool);
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn byte_search_agrees_with_decode_scan(data: Vec<u8>, needle: char) -> bool {
    let scalar = ScalarValue::from_char(needle);
    find_code_point(&data, scalar) == find_code_point_by_decode(&data, scalar)
}

#[quickcheck]
fn encoding_matches_char(c: char) -> bool {
    let mut mine = [0u8; 4];
    let mut theirs = [0u8; 4];
    let written = encode(ScalarValue::from_char(c), &mut mine).unwrap();
    c.encode_utf8(&mut theirs);
    mine[..written] == theirs[..c.len_utf8()]
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn iter_cursor_agrees_with_slice_cursor(data: Vec<u8>) -> bool {
    let mut cursor = IterCursor::new(data.iter().copied());
    let mut from_iter = Vec::new();
    while let Some(step) = decode_next(&mut cursor) {
        from_iter.push(step);
    }
    from_iter == code_points(&data).collect::<Vec<_>>() && cursor.position() == data.len()
}

#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn lossy_substitutes_one_replacement_per_fault(data: Vec<u8>) -> bool {
    let faults = code_points(&data).filter(Result::is_err).count();
    let genuine = code_points(&data)
        .filter(|step| *step == Ok(ScalarValue::REPLACEMENT))
        .count();
    let replacements = chars_lossy(&data)
        .filter(|&c| c == char::REPLACEMENT_CHARACTER)
        .count();
    replacements == faults + genuine
}

#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8cursor::{
    ByteCursor, IterCursor, ScalarValue, SliceCursor, decode_next, encode, find_code_point,
    find_code_point_by_decode, validate,
};

#[derive(Debug, Arbitrary)]
struct Input {
    haystack: Vec<u8>,
    needle: char,
}

fn scan(input: &Input) {
    let bytes = input.haystack.as_slice();

    // Walk the whole input over both cursor kinds in lockstep, checking
    // progress and re-encoding every decoded code point.
    let mut cursor = SliceCursor::new(bytes);
    let mut twin = IterCursor::new(bytes.iter().copied());
    let mut first_fault = None;
    while let Some(step) = decode_next(&mut cursor) {
        assert_eq!(decode_next(&mut twin), Some(step));
        assert_eq!(twin.position(), cursor.position());

        match step {
            Ok(scalar) => {
                let mut buf = [0u8; 4];
                let written = encode(scalar, &mut buf).unwrap();
                let start = cursor.position() - written;
                assert_eq!(&buf[..written], &bytes[start..cursor.position()]);
            }
            Err(fault) => {
                assert!(fault.consumed >= 1);
                if first_fault.is_none() {
                    first_fault = Some(cursor.position() - usize::from(fault.consumed));
                }
            }
        }
    }
    assert_eq!(cursor.position(), bytes.len());
    assert!(decode_next(&mut twin).is_none());

    // The first fault offset agrees with the standard library.
    match (first_fault, core::str::from_utf8(bytes)) {
        (None, Ok(_)) => {}
        (Some(at), Err(e)) => assert_eq!(at, e.valid_up_to()),
        (mine, theirs) => panic!("disagree with std: {mine:?} vs {theirs:?}"),
    }

    // validate() reports that same offset.
    match (first_fault, validate(bytes)) {
        (None, Ok(())) => {}
        (Some(at), Err(e)) => assert_eq!(at, e.valid_up_to()),
        (mine, theirs) => panic!("scan and validate disagree: {mine:?} vs {theirs:?}"),
    }

    // The byte search and the decoding scan agree for any needle.
    let needle = ScalarValue::from_char(input.needle);
    assert_eq!(
        find_code_point(bytes, needle),
        find_code_point_by_decode(bytes, needle)
    );
}

fuzz_target!(|input: Input| scan(&input));

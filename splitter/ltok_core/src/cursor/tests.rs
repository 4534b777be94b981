use crate::LineBuffer;
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = LineBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = LineBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_through_entire_line() {
    let buf = LineBuffer::new("hi");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current(), b'h');
    cursor.advance();
    assert_eq!(cursor.current(), b'i');
    cursor.advance();
    assert!(cursor.is_eol());
}

// === End-of-Line Detection ===

#[test]
fn is_eol_at_sentinel() {
    let buf = LineBuffer::new("x");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_eol());
    cursor.advance(); // past 'x', at sentinel
    assert!(cursor.is_eol());
}

#[test]
fn is_eol_on_empty_line() {
    let buf = LineBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eol());
}

#[test]
fn interior_null_is_not_eol() {
    let buf = LineBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance(); // at '\0' (interior null)
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eol()); // pos=1 < line_len=3
    cursor.advance(); // at 'b'
    assert_eq!(cursor.current(), b'b');
}

// === Slice ===

#[test]
fn slice_extracts_substring() {
    let buf = LineBuffer::new("hello world");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 5), "hello");
    assert_eq!(cursor.slice(6, 11), "world");
}

#[test]
fn slice_from_extracts_to_current() {
    let buf = LineBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance();
    cursor.advance();
    cursor.advance(); // pos = 3
    assert_eq!(cursor.slice_from(0), "abc");
    assert_eq!(cursor.slice_from(1), "bc");
}

#[test]
fn slice_empty_range() {
    let buf = LineBuffer::new("hello");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(2, 2), "");
}

#[test]
fn slice_utf8_multibyte() {
    let line = "hi \u{1F600} bye"; // emoji is 4 bytes
    let buf = LineBuffer::new(line);
    let cursor = buf.cursor();
    // "hi " = 3 bytes, emoji = 4 bytes, " bye" = 4 bytes
    assert_eq!(cursor.slice(0, 3), "hi ");
    assert_eq!(cursor.slice(7, 11), " bye");
}

// === eat_while ===

#[test]
fn eat_while_consumes_matching_bytes() {
    let buf = LineBuffer::new("aaabbb");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), b'b');
}

#[test]
fn eat_while_stops_at_sentinel() {
    let buf = LineBuffer::new("aaa");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eol());
}

#[test]
fn eat_while_no_match_stays_put() {
    let buf = LineBuffer::new("xyz");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 0);
}

// === skip_to_any3 ===

#[test]
fn skip_to_any3_finds_earliest_needle() {
    let buf = LineBuffer::new("abc def\tghi");
    let mut cursor = buf.cursor();
    let found = cursor.skip_to_any3(b' ', b'\t', b'\n');
    assert_eq!(found, b' ');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_any3_finds_tab() {
    let buf = LineBuffer::new("abc\tdef");
    let mut cursor = buf.cursor();
    let found = cursor.skip_to_any3(b' ', b'\t', b'\n');
    assert_eq!(found, b'\t');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_any3_no_match_lands_at_eol() {
    let buf = LineBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    let found = cursor.skip_to_any3(b' ', b'\t', b'\n');
    assert_eq!(found, 0);
    assert!(cursor.is_eol());
    assert_eq!(cursor.pos(), 6);
}

#[test]
fn skip_to_any3_repeated_needles() {
    // Fewer than three distinct needles: callers repeat one of them.
    let buf = LineBuffer::new("ab,cd");
    let mut cursor = buf.cursor();
    let found = cursor.skip_to_any3(b',', b',', b',');
    assert_eq!(found, b',');
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn skip_to_any3_skips_interior_null() {
    // Interior NUL is content, not a needle and not end of line.
    let buf = LineBuffer::new("a\0b c");
    let mut cursor = buf.cursor();
    let found = cursor.skip_to_any3(b' ', b'\t', b'\n');
    assert_eq!(found, b' ');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_any3_from_mid_position() {
    let buf = LineBuffer::new("ab cd ef");
    let mut cursor = buf.cursor();
    cursor.skip_to_any3(b' ', b'\t', b'\n'); // at first space
    cursor.advance();
    let found = cursor.skip_to_any3(b' ', b'\t', b'\n');
    assert_eq!(found, b' ');
    assert_eq!(cursor.pos(), 5);
}

// === Properties ===

mod properties {
    use super::*;
    use proptest::prelude::*;

    /// Reference implementation: scalar scan for the earliest needle.
    fn scalar_skip(bytes: &[u8], a: u8, b: u8, c: u8) -> usize {
        bytes
            .iter()
            .position(|&x| x == a || x == b || x == c)
            .unwrap_or(bytes.len())
    }

    proptest! {
        #[test]
        fn skip_to_any3_matches_scalar(
            line in "[a-z \t\n]{0,128}",
        ) {
            let buf = LineBuffer::new(&line);
            let mut cursor = buf.cursor();
            cursor.skip_to_any3(b' ', b'\t', b'\n');
            let expected = scalar_skip(line.as_bytes(), b' ', b'\t', b'\n');
            prop_assert_eq!(cursor.pos() as usize, expected);
        }

        #[test]
        fn eat_while_then_slice_round_trips(
            line in "[a-z]{0,64}",
        ) {
            let buf = LineBuffer::new(&line);
            let mut cursor = buf.cursor();
            cursor.eat_while(|b| b.is_ascii_lowercase());
            prop_assert_eq!(cursor.slice_from(0), line.as_str());
            prop_assert!(cursor.is_eol());
        }
    }
}

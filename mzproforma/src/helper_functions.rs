use std::{
    num::{IntErrorKind, ParseIntError},
    ops::Range,
};

/// Get the index of the next copy of the given char (looking at the byte value, does not guarantee full character)
pub(crate) fn next_char(chars: &[u8], start: usize, char: u8) -> Option<usize> {
    for (i, ch) in chars.get(start..)?.iter().enumerate() {
        if *ch == char {
            return Some(start + i);
        }
    }
    None
}

/// Find the enclosed text by the given symbols, assumes a single open is already read just before the start, guarantees to only pick full characters
pub(crate) fn end_of_enclosure(text: &str, start: usize, open: u8, close: u8) -> Option<usize> {
    let mut state = 1;
    for (i, ch) in text.as_bytes().get(start..)?.iter().enumerate() {
        // Check if this byte is a full character (is_char_boundary also works on index==len)
        if text.is_char_boundary(start + i) && text.is_char_boundary(start + i + 1) {
            if *ch == open {
                state += 1;
            } else if *ch == close {
                state -= 1;
                if state == 0 {
                    return Some(start + i);
                }
            }
        }
    }
    None
}

/// Find the enclosed text by the given symbols, assumes a single open is already read just before the start.
/// This also takes brackets '[]' into account and these take precedence over the enclosure searched for.
pub(crate) fn end_of_enclosure_with_brackets(
    text: &str,
    start: usize,
    open: u8,
    close: u8,
) -> Option<usize> {
    let mut state = 1;
    let mut index = start;
    while index < text.len() {
        if !text.is_char_boundary(index) {
            index += 1;
            continue;
        }
        if index + 1 < text.len() && !text.is_char_boundary(index + 1) {
            index += 1;
            continue;
        }
        let ch = text.as_bytes()[index];
        if ch == b'[' {
            index = end_of_enclosure(text, index + 1, b'[', b']')?;
        } else if ch == open {
            state += 1;
        } else if ch == close {
            state -= 1;
            if state == 0 {
                return Some(index);
            }
        }
        index += 1;
    }
    None
}

/// Find the end of a run of directly adjacent `[...]` blocks starting at `start`. Returns the
/// index just past the last closing bracket and the ranges of the bracket contents (without the
/// brackets). Returns `Err(index)` with the index of the opening bracket if a block is never closed.
pub(crate) fn bracket_run(
    text: &str,
    start: usize,
    end: usize,
) -> Result<(usize, Vec<Range<usize>>), usize> {
    let mut index = start;
    let mut blocks = Vec::new();
    while index < end && text.as_bytes()[index] == b'[' {
        let close = end_of_enclosure(&text[..end], index + 1, b'[', b']').ok_or(index)?;
        blocks.push(index + 1..close);
        index = close + 1;
    }
    Ok((index, blocks))
}

/// Split the given range of the text on the separator, only when the separator is found outside
/// of any enclosure. Inside square brackets and curly braces only those two are tracked, outside
/// of those parentheses are tracked as well. Angle brackets are only tracked at the top level,
/// so names can contain a `<`. The `accept` function gets the
/// index of a candidate separator and can reject it.
pub(crate) fn split_outside_enclosures(
    text: &str,
    range: Range<usize>,
    separator: &str,
    accept: impl Fn(usize) -> bool,
) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut stack: Vec<u8> = Vec::new();
    let mut pieces = Vec::new();
    let mut piece_start = range.start;
    let mut index = range.start;
    while index < range.end {
        let inside_name = matches!(stack.last(), Some(b'[' | b'{'));
        match bytes[index] {
            open @ (b'[' | b'{') => stack.push(open),
            b'(' if !inside_name => stack.push(b'('),
            b'<' if stack.is_empty() => stack.push(b'<'),
            b']' if stack.last() == Some(&b'[') => {
                stack.pop();
            }
            b'}' if stack.last() == Some(&b'{') => {
                stack.pop();
            }
            b')' if stack.last() == Some(&b'(') => {
                stack.pop();
            }
            b'>' if stack.last() == Some(&b'<') => {
                stack.pop();
            }
            _ if stack.is_empty()
                && bytes[index..range.end].starts_with(separator.as_bytes())
                && accept(index) =>
            {
                pieces.push(piece_start..index);
                index += separator.len();
                piece_start = index;
                continue;
            }
            _ => (),
        }
        index += 1;
    }
    pieces.push(piece_start..range.end);
    pieces
}

/// Find the first occurrence of the separator outside of any enclosure, see [`split_outside_enclosures`]
pub(crate) fn first_outside_enclosures(
    text: &str,
    range: Range<usize>,
    separator: &str,
) -> Option<usize> {
    let pieces = split_outside_enclosures(text, range, separator, |_| true);
    (pieces.len() > 1).then(|| pieces[0].end)
}

/// Get the length in bytes of the run of ASCII digits starting at `start`
pub(crate) fn digits(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map_or(0, |b| b.iter().take_while(|c| c.is_ascii_digit()).count())
}

/// Explain why a number could not be parsed
pub(crate) const fn explain_number_error(error: &ParseIntError) -> &'static str {
    match error.kind() {
        IntErrorKind::Empty => "is empty",
        IntErrorKind::InvalidDigit => "contains an invalid character",
        IntErrorKind::NegOverflow => "is too small to fit in the internal representation",
        IntErrorKind::PosOverflow => "is too big to fit in the internal representation",
        IntErrorKind::Zero => "is zero, which is not allowed here",
        _ => "is not a valid number",
    }
}

/// Check if 'a' starts with 'b' with or without ignoring casing
pub(crate) fn str_starts_with<const IGNORE_CASING: bool>(a: &str, b: &str) -> bool {
    if a.len() >= b.len() {
        for (a, b) in a.chars().zip(b.chars()) {
            if IGNORE_CASING && !a.eq_ignore_ascii_case(&b) || !IGNORE_CASING && a != b {
                return false;
            }
        }
        true
    } else {
        false
    }
}

#[allow(clippy::missing_panics_doc)]
#[test]
fn starts_with() {
    assert!(str_starts_with::<false>("Glycan:Hex", "Glycan:"));
    assert!(!str_starts_with::<false>("glycan:Hex", "Glycan:"));
    assert!(str_starts_with::<true>("glycan:Hex", "Glycan:"));
    assert!(str_starts_with::<true>("N-TERM:Q", "n-term"));
    assert!(!str_starts_with::<true>("Gly", "Glycan:"));
}

#[allow(clippy::missing_panics_doc)]
#[test]
fn enclosures() {
    assert_eq!(end_of_enclosure("[a[b]c]d", 1, b'[', b']'), Some(6));
    assert_eq!(end_of_enclosure("[a[b]c", 1, b'[', b']'), None);
    assert_eq!(end_of_enclosure("{a}", 3, b'{', b'}'), None);
    assert_eq!(
        end_of_enclosure_with_brackets("<[Gln->pyro-Glu]@N-term:Q>Q", 1, b'<', b'>'),
        Some(25)
    );
    assert_eq!(next_char(b"ab@c", 0, b'@'), Some(2));
    assert_eq!(next_char(b"ab@c", 3, b'@'), None);
}

#[allow(clippy::missing_panics_doc)]
#[test]
fn bracket_runs() {
    assert_eq!(bracket_run("[a][b]-C", 0, 8), Ok((6, vec![1..2, 4..5])));
    assert_eq!(bracket_run("PEP", 0, 3), Ok((0, Vec::new())));
    assert_eq!(bracket_run("[a][b", 0, 5), Err(3));
}

#[allow(clippy::missing_panics_doc)]
#[test]
fn split_on_separators() {
    let text = "A[x//y]//B(>n//m)//C";
    let parts = split_outside_enclosures(text, 0..text.len(), "//", |_| true);
    assert_eq!(
        parts.into_iter().map(|r| &text[r]).collect::<Vec<_>>(),
        vec!["A[x//y]", "B(>n//m)", "C"]
    );
    let text = "<[a+b]@K>PEP/+2+AK[+1]/2";
    let parts = split_outside_enclosures(text, 0..text.len(), "+", |i| {
        i == 0 || text.as_bytes()[i - 1] != b'/'
    });
    assert_eq!(
        parts.into_iter().map(|r| &text[r]).collect::<Vec<_>>(),
        vec!["<[a+b]@K>PEP/+2", "AK[+1]/2"]
    );
    let text = "(>a<b)PEP+PEP";
    let parts = split_outside_enclosures(text, 0..text.len(), "+", |_| true);
    assert_eq!(
        parts.into_iter().map(|r| &text[r]).collect::<Vec<_>>(),
        vec!["(>a<b)PEP", "PEP"]
    );
    let text = "<[Gln->pyro-Glu]@N-term:Q>Q//K";
    let parts = split_outside_enclosures(text, 0..text.len(), "//", |_| true);
    assert_eq!(parts.len(), 2);
    assert_eq!(
        first_outside_enclosures("PE[a/b]P/2[+Na+]", 0..16, "/"),
        Some(8)
    );
    assert_eq!(first_outside_enclosures("PE[a/b]P", 0..8, "/"), None);
}

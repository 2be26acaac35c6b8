use std::sync::LazyLock;

use regex::Regex;

use super::formula;
use crate::helper_functions::{digits, end_of_enclosure};

/// The monosaccharides that can be named in a glycan composition, longest first so a greedy
/// match never cuts a longer name short.
const MONOSACCHARIDES: &[&str] = &[
    "HexNAcS", "HexNAc", "NeuAc", "NeuGc", "dHex", "HexS", "HexP", "Hex", "Pen", "Fuc",
];

static CHARGE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":z[+-]\d+$").unwrap());

/// Check if the text is a structurally valid glycan composition.
///
/// # The rules
/// Spaces are ignored. A composition is a sequence of monosaccharides each followed by a count,
/// written `2` or `(2)`, that is at least one. The count may only be left out on the last
/// monosaccharide. Next to the named monosaccharides a custom one can be defined as a molecular
/// formula within curly braces, which may carry a charge `{C8H13N1O5:z+1}`.
///
/// ```
/// # use mzproforma::validate::glycan;
/// assert!(glycan("HexNAc2Hex3"));
/// assert!(glycan("Hex(3)HexNAc2"));
/// assert!(glycan("HexNAc"));
/// assert!(glycan("{C8H13N1O5}1Hex2"));
/// assert!(!glycan("HexNAcHex"));
/// assert!(!glycan("HexNAc0"));
/// ```
pub fn glycan(text: &str) -> bool {
    let text: String = text.chars().filter(|c| *c != ' ').collect();
    if text.is_empty() {
        return false;
    }
    let bytes = text.as_bytes();
    let mut index = 0;
    while index < text.len() {
        if bytes[index] == b'{' {
            let Some(close) = end_of_enclosure(&text, index + 1, b'{', b'}') else {
                return false;
            };
            let inner = &text[index + 1..close];
            let inner = CHARGE_SUFFIX
                .find(inner)
                .map_or(inner, |m| &inner[..m.start()]);
            if !formula(inner) {
                return false;
            }
            index = close + 1;
        } else if let Some(name) = MONOSACCHARIDES
            .iter()
            .find(|name| text[index..].starts_with(**name))
        {
            index += name.len();
        } else {
            return false;
        }
        match count_length(bytes, index) {
            Some(0) if index < text.len() => return false,
            Some(length) => index += length,
            None => return false,
        }
    }
    true
}

/// The length of the count at this location, `Some(0)` if there is no count, and `None` if the
/// count is invalid.
fn count_length(bytes: &[u8], start: usize) -> Option<usize> {
    let parenthesised = bytes.get(start) == Some(&b'(');
    let number = start + usize::from(parenthesised);
    let length = digits(bytes, number);
    if length == 0 {
        return (!parenthesised).then_some(0);
    }
    if bytes[number] == b'0' {
        return None;
    }
    if parenthesised {
        (bytes.get(number + length) == Some(&b')')).then_some(length + 2)
    } else {
        Some(length)
    }
}

use super::{count_length, element_length};
use crate::helper_functions::{digits, next_char};

/// Check if the text is a structurally valid ProForma molecular formula. This does not check if
/// the elements actually exist.
///
/// # The rules
/// Spaces are ignored. A formula is a sequence of elements, each an uppercase letter with an
/// optional lowercase letter, optionally followed by a count. Isotopes are written in square
/// brackets with the nucleon number in front of the element, the count can be placed inside or
/// after the brackets. Counts can be negative.
///
/// ```
/// # use mzproforma::validate::formula;
/// assert!(formula("C2H3O1"));
/// assert!(formula("[13C2]C-2H2"));
/// assert!(formula("[2H]3 O"));
/// assert!(!formula("2H"));
/// assert!(!formula("C2H3["));
/// ```
pub fn formula(text: &str) -> bool {
    let text: Vec<u8> = text.bytes().filter(|c| *c != b' ').collect();
    if text.iter().all(u8::is_ascii_whitespace)
        || text.iter().filter(|c| **c == b'[').count()
            != text.iter().filter(|c| **c == b']').count()
    {
        return false;
    }
    let mut index = 0;
    while index < text.len() {
        if text[index] == b'[' {
            let Some(close) = next_char(&text, index + 1, b']') else {
                return false;
            };
            let isotope = digits(&text, index + 1);
            let element = element_length(&text, index + 1 + isotope);
            if isotope == 0 || element == 0 {
                return false;
            }
            let inner = index + 1 + isotope + element;
            if inner + count_length(&text, inner) != close {
                return false;
            }
            index = close + 1;
            index += count_length(&text, index);
        } else {
            let element = element_length(&text, index);
            if element == 0 {
                return false;
            }
            index += element;
            index += count_length(&text, index);
        }
    }
    true
}

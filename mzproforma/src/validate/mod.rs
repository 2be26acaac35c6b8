//! Structural checks for the chemical notations that can be used inside modifications. These
//! never fail, they only tell if the text follows the grammar, so that unexpected chemical text
//! can still be carried through the model and written out again unchanged.

mod formula;
mod glycan;

pub use formula::formula;
pub use glycan::glycan;

/// Get the length of an optional count following an element or isotope, `-?\d+`.
fn count_length(bytes: &[u8], start: usize) -> usize {
    let sign = usize::from(bytes.get(start) == Some(&b'-'));
    let digits = crate::helper_functions::digits(bytes, start + sign);
    if digits == 0 { 0 } else { sign + digits }
}

/// Get the length of an element symbol, an uppercase letter followed by an optional lowercase letter.
fn element_length(bytes: &[u8], start: usize) -> usize {
    match (bytes.get(start), bytes.get(start + 1)) {
        (Some(u), Some(l)) if u.is_ascii_uppercase() && l.is_ascii_lowercase() => 2,
        (Some(u), _) if u.is_ascii_uppercase() => 1,
        _ => 0,
    }
}

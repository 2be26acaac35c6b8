mod compound_peptidoform_ion;
mod parse;
mod parse_modification;
mod peptidoform;
mod peptidoform_ion;
#[cfg(test)]
mod tests;

pub use compound_peptidoform_ion::CompoundPeptidoformIon;
pub use peptidoform::{EntityNames, Peptidoform, SequenceAmbiguity};
pub use peptidoform_ion::PeptidoformIon;

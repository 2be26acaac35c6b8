#![doc = include_str!("../README.md")]

mod helper_functions;

pub mod error;
/// Contains all things related to sequences, amongst others residues, modifications, and peptidoforms.
pub mod sequence;
pub mod validate;

/// A subset of the types that are envisioned to be used the most, importing this is a good starting point for working with the crate
pub mod prelude {
    pub use crate::error::ProFormaErrorKind;
    pub use crate::sequence::{
        CompoundPeptidoformIon, GlobalModification, GlobalModificationKind, GlobalTarget,
        Modification, ModificationKind, ModificationRef, ModificationValue, PipeValue,
        PipeValueType, Peptidoform, PeptidoformIon, Residue, SequencePosition,
    };
}

/// The result of a parser, either the parsed structure or the error that stopped the parsing.
pub type ParserResult<'a, T> =
    Result<T, context_error::BoxedError<'a, error::ProFormaErrorKind>>;

mod global_modification;
mod modification;
mod modification_value;
mod peptidoform;
pub(crate) mod pipe_value;
mod residue;
mod sequence_position;

pub use global_modification::{GlobalModification, GlobalModificationKind, GlobalTarget};
pub use modification::{
    Modification, ModificationContext, ModificationKind, ModificationRef, PlacementControls,
};
pub use modification_value::ModificationValue;
pub use peptidoform::{
    CompoundPeptidoformIon, EntityNames, Peptidoform, PeptidoformIon, SequenceAmbiguity,
};
pub use pipe_value::{KNOWN_SOURCES, PipeValue, PipeValueType};
pub use residue::{Residue, residue_mass};
pub use sequence_position::SequencePosition;

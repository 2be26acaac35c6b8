use std::fmt::{Display, Write};

use serde::{Deserialize, Serialize};

use crate::sequence::{Peptidoform, PeptidoformIon};

/// A single full ProForma entry. This entry can contain multiple chimeric peptidoform ions
/// separated by `+`, and every [`PeptidoformIon`] can contain multiple chains. A ProForma entry
/// with two chimeric peptides is saved as one [`CompoundPeptidoformIon`] with two
/// [`PeptidoformIon`]s that each contain one of the [`Peptidoform`]s.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct CompoundPeptidoformIon(pub(super) Vec<PeptidoformIon>);

impl CompoundPeptidoformIon {
    /// Create a new [`CompoundPeptidoformIon`] from the given peptidoform ions
    pub fn new(iter: impl IntoIterator<Item = PeptidoformIon>) -> Self {
        Self(iter.into_iter().collect())
    }

    /// Assume there is exactly one peptidoform ion in this compound peptidoform ion.
    pub fn singular(mut self) -> Option<PeptidoformIon> {
        (self.0.len() == 1).then(|| self.0.pop()).flatten()
    }

    /// Assume there is exactly one peptidoform ion in this compound peptidoform ion.
    pub fn singular_ref(&self) -> Option<&PeptidoformIon> {
        (self.0.len() == 1).then(|| &self.0[0])
    }

    /// Assume there is exactly one chain in this compound peptidoform ion.
    pub fn singular_peptidoform(self) -> Option<Peptidoform> {
        self.singular().and_then(PeptidoformIon::singular)
    }

    /// Assume there is exactly one chain in this compound peptidoform ion.
    pub fn singular_peptidoform_ref(&self) -> Option<&Peptidoform> {
        self.singular_ref().and_then(PeptidoformIon::singular_ref)
    }

    /// Get all peptidoform ions making up this compound peptidoform ion.
    pub fn peptidoform_ions(&self) -> &[PeptidoformIon] {
        &self.0
    }

    /// Get all peptidoform ions making up this compound peptidoform ion.
    pub fn into_peptidoform_ions(self) -> Vec<PeptidoformIon> {
        self.0
    }

    /// Get all chains of all peptidoform ions.
    pub fn peptidoforms(&self) -> impl Iterator<Item = &Peptidoform> {
        self.0.iter().flat_map(PeptidoformIon::peptidoforms)
    }

    /// The compound peptidoform ion name `(>>>name)`, as set on the first chain
    pub fn name(&self) -> Option<&str> {
        self.peptidoforms()
            .next()
            .and_then(Peptidoform::compound_ion_name)
    }

    /// Write this compound peptidoform ion in ProForma notation
    /// # Errors
    /// If the underlying writer errors.
    pub fn display(&self, f: &mut impl Write) -> std::fmt::Result {
        let mut first = true;
        for ion in &self.0 {
            if !first {
                write!(f, "+")?;
            }
            ion.display(f)?;
            first = false;
        }
        Ok(())
    }
}

impl Display for CompoundPeptidoformIon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.display(f)
    }
}

impl From<Peptidoform> for CompoundPeptidoformIon {
    fn from(value: Peptidoform) -> Self {
        Self(vec![PeptidoformIon::from(value)])
    }
}

impl From<PeptidoformIon> for CompoundPeptidoformIon {
    fn from(value: PeptidoformIon) -> Self {
        Self(vec![value])
    }
}

impl FromIterator<PeptidoformIon> for CompoundPeptidoformIon {
    fn from_iter<T: IntoIterator<Item = PeptidoformIon>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

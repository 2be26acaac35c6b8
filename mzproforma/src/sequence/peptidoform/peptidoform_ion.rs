use std::fmt::{Display, Write};

use serde::{Deserialize, Serialize};

use crate::sequence::Peptidoform;

/// A single peptidoform ion, can contain multiple chains separated by `//` in ProForma, for
/// example two crosslinked peptides.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PeptidoformIon(pub(super) Vec<Peptidoform>);

impl PeptidoformIon {
    /// Create a new [`PeptidoformIon`] from the given chains
    pub fn new(iter: impl IntoIterator<Item = Peptidoform>) -> Self {
        Self(iter.into_iter().collect())
    }

    /// Assume there is exactly one chain in this peptidoform ion.
    pub fn singular(mut self) -> Option<Peptidoform> {
        (self.0.len() == 1).then(|| self.0.pop()).flatten()
    }

    /// Assume there is exactly one chain in this peptidoform ion.
    pub fn singular_ref(&self) -> Option<&Peptidoform> {
        (self.0.len() == 1).then(|| &self.0[0])
    }

    /// Get all chains making up this peptidoform ion
    pub fn peptidoforms(&self) -> &[Peptidoform] {
        &self.0
    }

    /// Get all chains making up this peptidoform ion
    pub fn peptidoforms_mut(&mut self) -> &mut [Peptidoform] {
        &mut self.0
    }

    /// The peptidoform ion name `(>>name)`, as set on the first chain
    pub fn name(&self) -> Option<&str> {
        self.0.first().and_then(Peptidoform::peptidoform_ion_name)
    }

    /// Write this peptidoform ion in ProForma notation
    /// # Errors
    /// If the underlying writer errors.
    pub fn display(&self, f: &mut impl Write) -> std::fmt::Result {
        let mut first = true;
        for peptidoform in &self.0 {
            if !first {
                write!(f, "//")?;
            }
            peptidoform.display(f)?;
            first = false;
        }
        Ok(())
    }
}

impl Display for PeptidoformIon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.display(f)
    }
}

impl From<Peptidoform> for PeptidoformIon {
    fn from(value: Peptidoform) -> Self {
        Self(vec![value])
    }
}

impl FromIterator<Peptidoform> for PeptidoformIon {
    fn from_iter<T: IntoIterator<Item = Peptidoform>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

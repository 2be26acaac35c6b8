use std::{
    collections::BTreeMap,
    fmt::{Display, Write},
};

use context_error::BoxedError;
use serde::{Deserialize, Serialize};

use crate::{
    error::ProFormaErrorKind,
    sequence::{
        GlobalModification, Modification, ModificationKind, ModificationRef, Residue,
        SequencePosition,
    },
};

/// A stretch of sequence with an unknown residue order `(?DQ)`
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SequenceAmbiguity {
    /// The residues as written
    pub value: String,
    /// The location, always the start of the sequence
    pub position: usize,
}

/// The names given to the entities in a ProForma definition `(>>>compound)(>>ion)(>peptidoform)`
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EntityNames {
    /// The name of the compound peptidoform ion `(>>>name)`
    pub compound_ion: Option<String>,
    /// The name of the peptidoform ion `(>>name)`
    pub peptidoform_ion: Option<String>,
    /// The name of the peptidoform `(>name)`
    pub peptidoform: Option<String>,
}

/// A single chain with all its modifications, as defined by [ProForma](https://github.com/HUPO-PSI/ProForma).
///
/// Modifications on residues are stored on the [`Residue`]s, all other modifications are stored
/// on their virtual [`SequencePosition`]: N terminal, C terminal, labile, or unknown position.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Peptidoform {
    pub(super) residues: Vec<Residue>,
    /// Only ever holds virtual positions
    pub(super) modifications: BTreeMap<SequencePosition, Vec<Modification>>,
    pub(super) global: Vec<GlobalModification>,
    pub(super) ambiguities: Vec<SequenceAmbiguity>,
    pub(super) charge: Option<isize>,
    pub(super) ionic_species: Option<String>,
    pub(super) names: EntityNames,
}

impl Peptidoform {
    /// The residues
    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    /// The number of residues
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Check if there are no residues
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// The sequence without any modifications
    pub fn stripped_sequence(&self) -> String {
        self.residues.iter().map(Residue::symbol).collect()
    }

    /// Add a residue at the end, the mass is looked up unless one is given.
    /// # Errors
    /// If the residue symbol is unknown and no mass is given.
    pub fn add_residue(
        &mut self,
        symbol: char,
        mass: Option<f64>,
    ) -> Result<(), BoxedError<'static, ProFormaErrorKind>> {
        self.residues
            .push(Residue::new(symbol, self.residues.len(), mass)?);
        Ok(())
    }

    /// The modifications at the given position. This is empty for residue indices outside of the sequence.
    pub fn modifications_at(&self, position: SequencePosition) -> &[Modification] {
        match position {
            SequencePosition::Index(index) => self
                .residues
                .get(index)
                .map(Residue::modifications)
                .unwrap_or_default(),
            virtual_position => self
                .modifications
                .get(&virtual_position)
                .map(Vec::as_slice)
                .unwrap_or_default(),
        }
    }

    /// The N terminal modifications
    pub fn n_term(&self) -> &[Modification] {
        self.modifications_at(SequencePosition::NTerm)
    }

    /// The C terminal modifications
    pub fn c_term(&self) -> &[Modification] {
        self.modifications_at(SequencePosition::CTerm)
    }

    /// The labile modifications
    pub fn labile(&self) -> &[Modification] {
        self.modifications_at(SequencePosition::Labile)
    }

    /// The modifications of unknown position, with one entry per copy
    pub fn unknown_position(&self) -> &[Modification] {
        self.modifications_at(SequencePosition::UnknownPosition)
    }

    /// All modifications with their position, first the virtual positions then all residues
    pub fn all_modifications(&self) -> impl Iterator<Item = (SequencePosition, &Modification)> {
        self.modifications
            .iter()
            .flat_map(|(position, mods)| mods.iter().map(|m| (*position, m)))
            .chain(self.residues.iter().enumerate().flat_map(|(index, residue)| {
                residue
                    .modifications()
                    .iter()
                    .map(move |m| (SequencePosition::Index(index), m))
            }))
    }

    /// Add a modification at the given position, returns false if the residue index is outside of the sequence
    pub fn add_modification(
        &mut self,
        position: SequencePosition,
        modification: Modification,
    ) -> bool {
        match position {
            SequencePosition::Index(index) => {
                if let Some(residue) = self.residues.get_mut(index) {
                    residue.add_modification(modification);
                    true
                } else {
                    false
                }
            }
            virtual_position => {
                self.modifications
                    .entry(virtual_position)
                    .or_default()
                    .push(modification);
                true
            }
        }
    }

    /// Remove the first matching modification at the given position, returns if anything was removed
    pub fn remove_modification<'a>(
        &mut self,
        position: SequencePosition,
        modification: impl Into<ModificationRef<'a>>,
    ) -> bool {
        let reference = modification.into();
        match position {
            SequencePosition::Index(index) => self
                .residues
                .get_mut(index)
                .is_some_and(|residue| residue.remove_modification(reference)),
            virtual_position => {
                let Some(mods) = self.modifications.get_mut(&virtual_position) else {
                    return false;
                };
                let Some(index) = mods.iter().position(|m| reference.matches(m)) else {
                    return false;
                };
                mods.remove(index);
                if mods.is_empty() {
                    self.modifications.remove(&virtual_position);
                }
                true
            }
        }
    }

    /// Check if there is a matching modification at the given position
    pub fn has_modification<'a>(
        &self,
        position: SequencePosition,
        modification: impl Into<ModificationRef<'a>>,
    ) -> bool {
        let reference = modification.into();
        self.modifications_at(position)
            .iter()
            .any(|m| reference.matches(m))
    }

    /// The global modifications
    pub fn global_modifications(&self) -> &[GlobalModification] {
        &self.global
    }

    /// Add a global modification
    pub fn add_global_modification(&mut self, modification: GlobalModification) {
        self.global.push(modification);
    }

    /// The sequence ambiguities `(?DQ)`
    pub fn sequence_ambiguities(&self) -> &[SequenceAmbiguity] {
        &self.ambiguities
    }

    /// The charge
    pub const fn charge(&self) -> Option<isize> {
        self.charge
    }

    /// Set the charge
    pub const fn set_charge(&mut self, charge: Option<isize>) {
        self.charge = charge;
    }

    /// The ionic species `+Na+` in `PEPTIDE/2[+Na+]`
    pub fn ionic_species(&self) -> Option<&str> {
        self.ionic_species.as_deref()
    }

    /// Set the ionic species
    pub fn set_ionic_species(&mut self, species: Option<String>) {
        self.ionic_species = species;
    }

    /// All names
    pub const fn names(&self) -> &EntityNames {
        &self.names
    }

    /// Set the names
    pub fn set_names(&mut self, names: EntityNames) {
        self.names = names;
    }

    /// The peptidoform name `(>name)`
    pub fn peptidoform_name(&self) -> Option<&str> {
        self.names.peptidoform.as_deref()
    }

    /// The peptidoform ion name `(>>name)`
    pub fn peptidoform_ion_name(&self) -> Option<&str> {
        self.names.peptidoform_ion.as_deref()
    }

    /// The compound peptidoform ion name `(>>>name)`
    pub fn compound_ion_name(&self) -> Option<&str> {
        self.names.compound_ion.as_deref()
    }

    /// Write this peptidoform in ProForma notation
    /// # Errors
    /// If the underlying writer errors.
    pub fn display(&self, f: &mut impl Write) -> std::fmt::Result {
        if let Some(name) = &self.names.compound_ion {
            write!(f, "(>>>{name})")?;
        }
        if let Some(name) = &self.names.peptidoform_ion {
            write!(f, "(>>{name})")?;
        }
        if let Some(name) = &self.names.peptidoform {
            write!(f, "(>{name})")?;
        }
        for global in &self.global {
            write!(f, "{global}")?;
        }
        // Modifications of unknown position, runs of identical text are written once with a count
        let mut groups: Vec<(String, usize)> = Vec::new();
        for modification in self.unknown_position() {
            let text = modification.to_string();
            match groups.last_mut() {
                Some((last, count)) if *last == text => *count += 1,
                _ => groups.push((text, 1)),
            }
        }
        for (text, count) in &groups {
            write!(f, "[{text}]")?;
            if *count > 1 {
                write!(f, "^{count}")?;
            }
        }
        if !groups.is_empty() {
            write!(f, "?")?;
        }
        for modification in self.labile() {
            write!(f, "{{{modification}}}")?;
        }
        if !self.n_term().is_empty() {
            for modification in self.n_term() {
                write!(f, "[{modification}]")?;
            }
            write!(f, "-")?;
        }
        for ambiguity in &self.ambiguities {
            write!(f, "(?{})", ambiguity.value)?;
        }
        let mut index = 0;
        while index < self.residues.len() {
            let opened = self.residues[index]
                .modifications()
                .iter()
                .find_map(|m| m.range().filter(|(start, _)| *start == index));
            if let Some((start, end)) = opened {
                let end = end.clamp(start, self.residues.len() - 1);
                write!(f, "(")?;
                for residue in &self.residues[start..=end] {
                    display_residue(f, residue, Some((start, end)))?;
                }
                write!(f, ")")?;
                for modification in self.residues[start].modifications() {
                    if modification.range() == Some((start, end)) {
                        write!(f, "[{modification}]")?;
                    }
                }
                index = end + 1;
            } else {
                display_residue(f, &self.residues[index], None)?;
                index += 1;
            }
        }
        if !self.c_term().is_empty() {
            write!(f, "-")?;
            for modification in self.c_term() {
                write!(f, "[{modification}]")?;
            }
        }
        if let Some(charge) = self.charge {
            write!(f, "/{charge}")?;
            if let Some(species) = &self.ionic_species {
                write!(f, "[{species}]")?;
            }
        }
        Ok(())
    }
}

/// Write a residue with all its modifications, except the modifications that belong to the
/// range that is currently being written.
fn display_residue(
    f: &mut impl Write,
    residue: &Residue,
    open_range: Option<(usize, usize)>,
) -> std::fmt::Result {
    write!(f, "{}", residue.symbol())?;
    for modification in residue.modifications() {
        if open_range.is_some() && modification.range() == open_range {
            continue;
        }
        if modification.kind() == ModificationKind::Ambiguous
            && modification.ambiguity_group().is_none()
            && modification.range().is_none()
        {
            write!(f, "{{{modification}}}")?;
        } else {
            write!(f, "[{modification}]")?;
        }
    }
    Ok(())
}

impl Display for Peptidoform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.display(f)
    }
}

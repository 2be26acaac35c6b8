use context_error::{BoxedError, Context, CreateError};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use thin_vec::ThinVec;

use crate::{
    error::ProFormaErrorKind,
    sequence::{Modification, ModificationRef},
};

/// Get the monoisotopic residue mass for a one letter amino acid symbol. `X` has no mass of its
/// own, as it is used to denote a gap with a given mass.
pub const fn residue_mass(symbol: char) -> Option<f64> {
    Some(match symbol {
        'A' => 71.037114,
        'R' => 156.101111,
        'N' => 114.042927,
        'D' => 115.026943,
        'C' => 103.009185,
        'E' => 129.042593,
        'Q' => 128.058578,
        'G' => 57.021464,
        'H' => 137.058912,
        'I' | 'L' => 113.084064,
        'K' => 128.094963,
        'M' => 131.040485,
        'F' => 147.068414,
        'P' => 97.052764,
        'S' => 87.032028,
        'T' => 101.047679,
        'W' => 186.079313,
        'Y' => 163.06332,
        'V' => 99.068414,
        'X' => 0.0,
        'O' => 150.03794,
        'U' => 255.15829,
        _ => return None,
    })
}

/// One residue in a peptidoform with its modifications
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Residue {
    symbol: char,
    position: usize,
    mass: OrderedFloat<f64>,
    modifications: ThinVec<Modification>,
}

impl Residue {
    /// Create a new residue, the mass is looked up for the symbol unless a mass is given.
    /// # Errors
    /// If the symbol is not a known amino acid and no mass is given.
    pub fn new(
        symbol: char,
        position: usize,
        mass: Option<f64>,
    ) -> Result<Self, BoxedError<'static, ProFormaErrorKind>> {
        let mass = mass.or_else(|| residue_mass(symbol)).ok_or_else(|| {
            BoxedError::new(
                ProFormaErrorKind::UnknownResidueSymbol,
                "Unknown residue",
                format!("The residue '{symbol}' is not a known amino acid, and no mass was given"),
                Context::show(symbol.to_string()),
            )
        })?;
        Ok(Self {
            symbol,
            position,
            mass: OrderedFloat(mass),
            modifications: ThinVec::new(),
        })
    }

    /// The one letter symbol
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// The zero based index in the sequence
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The mass of the residue itself, without modifications
    pub const fn mass(&self) -> f64 {
        self.mass.0
    }

    /// All modifications, in order of addition
    pub fn modifications(&self) -> &[Modification] {
        &self.modifications
    }

    /// Add a modification at the end of the list
    pub fn add_modification(&mut self, modification: Modification) {
        self.modifications.push(modification);
    }

    /// Remove the first matching modification, returns if anything was removed
    pub fn remove_modification<'a>(
        &mut self,
        modification: impl Into<ModificationRef<'a>>,
    ) -> bool {
        let reference = modification.into();
        if let Some(index) = self
            .modifications
            .iter()
            .position(|m| reference.matches(m))
        {
            self.modifications.remove(index);
            true
        } else {
            false
        }
    }

    /// Check if a matching modification is present
    pub fn has_modification<'a>(&self, modification: impl Into<ModificationRef<'a>>) -> bool {
        let reference = modification.into();
        self.modifications.iter().any(|m| reference.matches(m))
    }

    /// The mass of the residue plus the masses of all modifications with a known mass
    pub fn total_mass(&self) -> f64 {
        self.mass.0
            + self
                .modifications
                .iter()
                .filter_map(Modification::mass)
                .sum::<f64>()
    }
}

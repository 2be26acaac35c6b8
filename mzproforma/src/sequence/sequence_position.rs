use serde::{Deserialize, Serialize};

/// A position on a sequence, either a residue or one of the virtual positions for modifications
/// that are not placed on a residue.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub enum SequencePosition {
    /// N-terminal
    NTerm,
    /// A residue at the given index
    Index(usize),
    /// C-terminal
    CTerm,
    /// Labile, modifications that are assumed to be lost before detection
    Labile,
    /// Modifications of unknown position
    UnknownPosition,
}

impl Default for SequencePosition {
    fn default() -> Self {
        Self::Index(0)
    }
}

impl std::fmt::Display for SequencePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NTerm => write!(f, "N-terminal"),
            Self::Index(index) => write!(f, "{index}"),
            Self::CTerm => write!(f, "C-terminal"),
            Self::Labile => write!(f, "labile"),
            Self::UnknownPosition => write!(f, "unknown position"),
        }
    }
}

impl SequencePosition {
    /// Check if this is a virtual position, so any position that is not a residue
    pub const fn is_virtual(self) -> bool {
        !matches!(self, Self::Index(_))
    }

    /// Get the numeric representation, the index for residues and negative sentinels for the
    /// virtual positions:
    /// * `-1` is N term
    /// * `-2` is C term
    /// * `-3` is labile
    /// * `-4` is unknown position
    ///
    /// Indices that do not fit in an `isize` saturate.
    pub fn sentinel(self) -> isize {
        match self {
            Self::NTerm => -1,
            Self::CTerm => -2,
            Self::Labile => -3,
            Self::UnknownPosition => -4,
            Self::Index(i) => isize::try_from(i).unwrap_or(isize::MAX),
        }
    }

    /// Convert the numeric representation (see [`Self::sentinel`]) back into a position.
    /// Returns `None` for negative numbers that do not name a virtual position.
    pub fn from_sentinel(value: isize) -> Option<Self> {
        match value {
            -1 => Some(Self::NTerm),
            -2 => Some(Self::CTerm),
            -3 => Some(Self::Labile),
            -4 => Some(Self::UnknownPosition),
            i => usize::try_from(i).ok().map(Self::Index),
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::SequencePosition;

    #[test]
    fn sentinels() {
        for position in [
            SequencePosition::NTerm,
            SequencePosition::CTerm,
            SequencePosition::Labile,
            SequencePosition::UnknownPosition,
            SequencePosition::Index(0),
            SequencePosition::Index(12),
        ] {
            assert_eq!(
                SequencePosition::from_sentinel(position.sentinel()),
                Some(position)
            );
        }
        assert_eq!(SequencePosition::Labile.sentinel(), -3);
        assert_eq!(SequencePosition::from_sentinel(-5), None);
        assert!(SequencePosition::UnknownPosition.is_virtual());
        assert!(!SequencePosition::Index(3).is_virtual());
    }
}

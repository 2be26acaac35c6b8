use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use context_error::{BoxedError, Context, CreateError};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    error::ProFormaErrorKind,
    helper_functions::str_starts_with,
    sequence::{Modification, ModificationKind, PipeValueType},
};

/// The kind of global modification
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum GlobalModificationKind {
    /// A modification placed on all matching targets `<[Carbamidomethyl]@C>`
    #[default]
    Fixed,
    /// An isotope label for the whole peptidoform `<15N>`
    Isotope,
}

impl Display for GlobalModificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::Isotope => write!(f, "isotope"),
        }
    }
}

impl FromStr for GlobalModificationKind {
    type Err = BoxedError<'static, ProFormaErrorKind>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("fixed") {
            Ok(Self::Fixed)
        } else if s.eq_ignore_ascii_case("isotope") {
            Ok(Self::Isotope)
        } else {
            Err(BoxedError::new(
                ProFormaErrorKind::InvalidModificationKind,
                "Invalid global modification kind",
                "A global modification is either 'fixed' or 'isotope'",
                Context::show(s.to_string()),
            ))
        }
    }
}

/// A location a global modification applies to
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum GlobalTarget {
    /// All residues with this symbol `K`
    Residue(char),
    /// The N terminus, optionally only if the first residue has this symbol `N-term:Q`
    NTerm(Option<char>),
    /// The C terminus, optionally only if the last residue has this symbol `C-term:G`
    CTerm(Option<char>),
}

impl GlobalTarget {
    /// Read a single target, the terminal keywords are case insensitive and residues are
    /// normalised to uppercase. Returns `None` if this is not a valid target.
    ///
    /// ```
    /// # use mzproforma::sequence::GlobalTarget;
    /// assert_eq!(GlobalTarget::parse("k"), Some(GlobalTarget::Residue('K')));
    /// assert_eq!(GlobalTarget::parse("n-term:q"), Some(GlobalTarget::NTerm(Some('Q'))));
    /// assert_eq!(GlobalTarget::parse("C-term"), Some(GlobalTarget::CTerm(None)));
    /// assert_eq!(GlobalTarget::parse("KR"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if str_starts_with::<true>(text, "N-term") {
            Self::terminal_residue(&text[6..]).map(Self::NTerm)
        } else if str_starts_with::<true>(text, "C-term") {
            Self::terminal_residue(&text[6..]).map(Self::CTerm)
        } else {
            Self::single_residue(text).map(Self::Residue)
        }
    }

    /// The tail after a terminal keyword, either nothing or `:X`
    fn terminal_residue(tail: &str) -> Option<Option<char>> {
        if tail.is_empty() {
            Some(None)
        } else {
            tail.strip_prefix(':')
                .and_then(Self::single_residue)
                .map(Some)
        }
    }

    fn single_residue(text: &str) -> Option<char> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
            _ => None,
        }
    }
}

impl Display for GlobalTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Residue(c) => write!(f, "{c}"),
            Self::NTerm(None) => write!(f, "N-term"),
            Self::NTerm(Some(c)) => write!(f, "N-term:{c}"),
            Self::CTerm(None) => write!(f, "C-term"),
            Self::CTerm(Some(c)) => write!(f, "C-term:{c}"),
        }
    }
}

/// A global modification, a fixed modification on all given targets or an isotope label
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GlobalModification {
    modification: Modification,
    targets: Vec<GlobalTarget>,
    kind: GlobalModificationKind,
}

impl GlobalModification {
    /// Create a fixed modification on the given targets
    pub fn fixed(modification: Modification, targets: Vec<GlobalTarget>) -> Self {
        Self {
            modification: modification.into_kind(ModificationKind::Global),
            targets,
            kind: GlobalModificationKind::Fixed,
        }
    }

    /// Create an isotope label, `15N` for example
    pub fn isotope(modification: Modification) -> Self {
        Self {
            modification: modification.into_kind(ModificationKind::Global),
            targets: Vec::new(),
            kind: GlobalModificationKind::Isotope,
        }
    }

    /// The modification
    pub const fn modification(&self) -> &Modification {
        &self.modification
    }

    /// The targets, empty for isotope labels
    pub fn targets(&self) -> &[GlobalTarget] {
        &self.targets
    }

    /// The kind of global modification
    pub const fn kind(&self) -> GlobalModificationKind {
        self.kind
    }

    /// Write this global modification in ProForma notation
    /// # Errors
    /// If the underlying writer errors.
    pub fn display(&self, f: &mut impl Write) -> std::fmt::Result {
        match self.kind {
            GlobalModificationKind::Isotope => write!(f, "<{}>", self.modification),
            GlobalModificationKind::Fixed => {
                let pipe_values = self.modification.modification_value().pipe_values();
                let bare_mass = self.modification.placement().is_empty()
                    && pipe_values.len() == 1
                    && pipe_values[0].kind() == PipeValueType::Mass
                    && pipe_values[0].source().is_none();
                if bare_mass {
                    write!(f, "<{}", self.modification)?;
                } else {
                    write!(f, "<[{}]", self.modification)?;
                }
                write!(f, "@{}>", self.targets.iter().join(","))
            }
        }
    }
}

impl Display for GlobalModification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.display(f)
    }
}

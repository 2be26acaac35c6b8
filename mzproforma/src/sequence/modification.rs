use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use context_error::{BoxedError, Context, CreateError};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    error::ProFormaErrorKind,
    sequence::{ModificationValue, PipeValue, PipeValueType, pipe_value::is_mass},
};

/// The Unimod accessions for the a, b, c, x, y, and z ion type modifications
const ION_TYPE_ACCESSIONS: &[&str] = &["140", "2132", "4", "24", "2133", "23"];

/// The structural role of a modification in the sequence
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum ModificationKind {
    /// Placed on a single residue
    #[default]
    Static,
    /// A variable modification
    Variable,
    /// Placed on a terminus
    Terminal,
    /// One of multiple possible locations, or placed on a range
    Ambiguous,
    /// Lost before detection
    Labile,
    /// The mass of a stretch of unknown sequence
    Gap,
    /// Somewhere on the sequence, but the location is unknown
    UnknownPosition,
    /// A crosslink or a reference to one
    Crosslink,
    /// A branch or a reference to one
    Branch,
    /// Applied to all matching locations
    Global,
}

impl ModificationKind {
    const ALL: &[Self] = &[
        Self::Static,
        Self::Variable,
        Self::Terminal,
        Self::Ambiguous,
        Self::Labile,
        Self::Gap,
        Self::UnknownPosition,
        Self::Crosslink,
        Self::Branch,
        Self::Global,
    ];

    const fn name(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Variable => "variable",
            Self::Terminal => "terminal",
            Self::Ambiguous => "ambiguous",
            Self::Labile => "labile",
            Self::Gap => "gap",
            Self::UnknownPosition => "unknown_position",
            Self::Crosslink => "crosslink",
            Self::Branch => "branch",
            Self::Global => "global",
        }
    }
}

impl Display for ModificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ModificationKind {
    type Err = BoxedError<'static, ProFormaErrorKind>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| {
                BoxedError::new(
                    ProFormaErrorKind::InvalidModificationKind,
                    "Invalid modification kind",
                    format!(
                        "The modification kind has to be one of: {}",
                        Self::ALL.iter().join(", ")
                    ),
                    Context::show(s.to_string()),
                )
            })
    }
}

/// Where a modification was found, this determines the kind of modification that is built
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ModificationContext {
    /// On a residue `S[Phospho]`
    Static,
    /// On a terminus `[Acetyl]-`
    Terminal,
    /// A labile modification `{Glycan:Hex}`
    Labile,
    /// An ambiguous modification on a residue `S{Phospho}`
    Ambiguous,
    /// The mass of a gap `X[+367.05]`
    Gap,
    /// A modification of unknown position `[Phospho]?`
    UnknownPosition,
    /// A modification on a range of residues, with the inclusive residue indices
    Range {
        /// First residue index
        start: usize,
        /// Last residue index
        end: usize,
    },
    /// A reference to a crosslink `[#XL1]`
    CrosslinkReference,
    /// A reference to a branch `[#BRANCH]`
    BranchReference,
    /// A crosslink definition `[XL:DSS#XL1]`
    Crosslink,
    /// A branch definition `[Name#BRANCH]`
    Branch,
    /// A global modification `<[Carbamidomethyl]@C>`
    Global,
}

impl ModificationContext {
    const fn kind(self) -> ModificationKind {
        match self {
            Self::Static => ModificationKind::Static,
            Self::Terminal => ModificationKind::Terminal,
            Self::Labile => ModificationKind::Labile,
            Self::Ambiguous | Self::Range { .. } => ModificationKind::Ambiguous,
            Self::Gap => ModificationKind::Gap,
            Self::UnknownPosition => ModificationKind::UnknownPosition,
            Self::CrosslinkReference | Self::Crosslink => ModificationKind::Crosslink,
            Self::BranchReference | Self::Branch => ModificationKind::Branch,
            Self::Global => ModificationKind::Global,
        }
    }
}

/// The placement controls for a global modification, these limit where the modification can be
/// placed.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PlacementControls {
    /// The allowed positions `Position:S,T`
    pub position: Vec<String>,
    /// The maximal number of copies on a single position `Limit:2`
    pub limit: Option<usize>,
    /// Allow colocalisation with modifications of known position `CoMKP`
    pub colocalise_known: bool,
    /// Allow colocalisation with modifications of unknown position `CoMUP`
    pub colocalise_unknown: bool,
}

impl PlacementControls {
    /// Check if no control is set
    pub const fn is_empty(&self) -> bool {
        self.position.is_empty()
            && self.limit.is_none()
            && !self.colocalise_known
            && !self.colocalise_unknown
    }

    /// Try to read a pipe segment as a placement control, returns false if the segment is
    /// something else. The limit is returned as the error if it is not a valid number.
    pub(crate) fn read_segment(&mut self, segment: &str) -> Result<bool, std::num::ParseIntError> {
        if let Some((tag, tail)) = segment.split_once(':') {
            if tag.eq_ignore_ascii_case("Position") {
                self.position
                    .extend(tail.split(',').map(|p| p.trim().to_string()));
                return Ok(true);
            } else if tag.eq_ignore_ascii_case("Limit") {
                self.limit = Some(tail.parse::<usize>()?);
                return Ok(true);
            }
        } else if segment.eq_ignore_ascii_case("CoMKP")
            || segment.eq_ignore_ascii_case("ColocaliseModificationsOfKnownPosition")
        {
            self.colocalise_known = true;
            return Ok(true);
        } else if segment.eq_ignore_ascii_case("CoMUP")
            || segment.eq_ignore_ascii_case("ColocaliseModificationsOfUnknownPosition")
        {
            self.colocalise_unknown = true;
            return Ok(true);
        }
        Ok(false)
    }
}

impl Display for PlacementControls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags = Vec::new();
        if !self.position.is_empty() {
            tags.push(format!("Position:{}", self.position.join(",")));
        }
        if let Some(limit) = self.limit {
            tags.push(format!("Limit:{limit}"));
        }
        if self.colocalise_known {
            tags.push("CoMKP".to_string());
        }
        if self.colocalise_unknown {
            tags.push("CoMUP".to_string());
        }
        write!(f, "{}", tags.join("|"))
    }
}

/// A modification with its structural role
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Modification {
    value: ModificationValue,
    kind: ModificationKind,
    range: Option<(usize, usize)>,
    placement: PlacementControls,
    ion_type: bool,
}

/// A way of finding a modification, either by its text or by an equal modification
#[derive(Clone, Copy, Debug)]
pub enum ModificationRef<'a> {
    /// Matches a modification with this primary value or written text
    ByText(&'a str),
    /// Matches a modification that is equal to this one
    ByReference(&'a Modification),
}

impl<'a> From<&'a str> for ModificationRef<'a> {
    fn from(value: &'a str) -> Self {
        Self::ByText(value)
    }
}

impl<'a> From<&'a Modification> for ModificationRef<'a> {
    fn from(value: &'a Modification) -> Self {
        Self::ByReference(value)
    }
}

impl ModificationRef<'_> {
    /// Check if the modification is the one referenced
    pub fn matches(&self, modification: &Modification) -> bool {
        match self {
            Self::ByText(text) => {
                modification.value() == *text || modification.to_string() == *text
            }
            Self::ByReference(other) => *other == modification,
        }
    }
}

impl Modification {
    /// Build a modification from the text found in brackets or braces and the place where it was found.
    ///
    /// ```
    /// # use mzproforma::sequence::{Modification, ModificationContext, ModificationKind};
    /// let modification = Modification::build("+79.966", ModificationContext::Static);
    /// assert_eq!(modification.value(), "Mass:+79.966");
    /// assert_eq!(modification.mass(), Some(79.966));
    /// let modification = Modification::build("XL:DSS#XL1", ModificationContext::Static);
    /// assert_eq!(modification.kind(), ModificationKind::Crosslink);
    /// assert_eq!(modification.crosslink_id(), Some("XL1"));
    /// ```
    pub fn build(text: &str, context: ModificationContext) -> Self {
        let ion_type = is_ion_type(text);
        let mut kind = context.kind();
        let mut range = None;
        let value = match context {
            ModificationContext::Gap if is_mass(text) => {
                ModificationValue::from_pipe_values(vec![PipeValue::gap(text)])
            }
            ModificationContext::Range { start, end } => {
                range = Some((start, end));
                ModificationValue::parse(text)
            }
            _ => {
                let mut value = ModificationValue::parse(text);
                if context == ModificationContext::Static
                    && let [only] = value.pipe_values()
                    && only.kind() == PipeValueType::Mass
                    && only.source().is_none()
                {
                    let primary = format!("Mass:{}", value.primary());
                    value = value.with_primary(primary);
                }
                if context != ModificationContext::Gap && value.ambiguity_group().is_some() {
                    kind = ModificationKind::Ambiguous;
                }
                value
            }
        };
        if range.is_none() {
            if value.crosslink_id().is_some() {
                kind = ModificationKind::Crosslink;
            } else if value.is_branch() || value.is_branch_reference() {
                kind = ModificationKind::Branch;
            }
        }
        Self {
            value,
            kind,
            range,
            placement: PlacementControls::default(),
            ion_type,
        }
    }

    /// Create a modification from a value with the given kind
    pub fn new(value: ModificationValue, kind: ModificationKind) -> Self {
        let ion_type = is_ion_type(value.primary());
        Self {
            value,
            kind,
            range: None,
            placement: PlacementControls::default(),
            ion_type,
        }
    }

    #[must_use]
    pub(crate) fn into_kind(mut self, kind: ModificationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the placement controls
    #[must_use]
    pub fn with_placement(mut self, placement: PlacementControls) -> Self {
        self.placement = placement;
        self
    }

    /// The primary value
    pub fn value(&self) -> &str {
        self.value.primary()
    }

    /// The full value with all pipe values
    pub const fn modification_value(&self) -> &ModificationValue {
        &self.value
    }

    /// The kind of modification
    pub const fn kind(&self) -> ModificationKind {
        self.kind
    }

    /// The inclusive residue range for a ranged modification
    pub const fn range(&self) -> Option<(usize, usize)> {
        self.range
    }

    /// The usable mass
    pub fn mass(&self) -> Option<f64> {
        self.value.mass()
    }

    /// The source of the primary value
    pub fn source(&self) -> Option<&str> {
        self.value.source()
    }

    /// The placement controls, only set for global modifications
    pub const fn placement(&self) -> &PlacementControls {
        &self.placement
    }

    /// If this is an ion type, `a-type-ion` or `UNIMOD:140`
    pub const fn is_ion_type(&self) -> bool {
        self.ion_type
    }

    /// The crosslink identifier
    pub fn crosslink_id(&self) -> Option<&str> {
        self.value.crosslink_id()
    }

    /// If this only references a crosslink
    pub fn is_crosslink_reference(&self) -> bool {
        self.value.is_crosslink_reference()
    }

    /// If this is a branch definition
    pub fn is_branch(&self) -> bool {
        self.value.is_branch()
    }

    /// If this only references a branch
    pub fn is_branch_reference(&self) -> bool {
        self.value.is_branch_reference()
    }

    /// The ambiguity group identifier
    pub fn ambiguity_group(&self) -> Option<&str> {
        self.value.ambiguity_group()
    }

    /// The localisation score in the ambiguity group
    pub fn localisation_score(&self) -> Option<f64> {
        self.value.localisation_score()
    }

    /// Write the modification content, without surrounding brackets
    /// # Errors
    /// If the underlying writer errors.
    pub fn display(&self, f: &mut impl Write) -> std::fmt::Result {
        let value = self.value.to_string();
        write!(f, "{value}")?;
        if !self.placement.is_empty() {
            if !value.is_empty() {
                write!(f, "|")?;
            }
            write!(f, "{}", self.placement)?;
        }
        Ok(())
    }
}

impl Display for Modification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.display(f)
    }
}

fn is_ion_type(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    lower.ends_with("-type-ion")
        || ["unimod:", "u:"].iter().any(|prefix| {
            lower
                .strip_prefix(prefix)
                .is_some_and(|id| ION_TYPE_ACCESSIONS.contains(&id))
        })
}

use std::{
    fmt::{Display, Write},
    sync::LazyLock,
};

use ordered_float::OrderedFloat;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{helper_functions::str_starts_with, validate};

/// All source tags that can be used to qualify a modification value, `Source:value`.
pub const KNOWN_SOURCES: &[&str] = &[
    "Unimod", "U", "PSI-MOD", "M", "RESID", "R", "XL-MOD", "X", "XLMOD", "GNO", "G", "MOD", "Obs",
    "OBS", "Formula", "FORMULA", "Glycan", "GLYCAN", "Info", "INFO", "XL",
];

static MASS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]\d+(?:\.\d+)?$").unwrap());
static BRANCH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([^#]*)#BRANCH$").unwrap());
static CROSSLINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^#]*)#(XL[A-Za-z0-9]+)$").unwrap());
static AMBIGUITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^#]*)#([A-Za-z0-9]+)(?:\((\d+(?:\.\d+)?)\))?$").unwrap()
});
static FORMULA_CHARGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":z([+-]\d+)$").unwrap());

/// Check if the text is a bare signed mass, `+15.995` or `-18`
pub(crate) fn is_mass(text: &str) -> bool {
    MASS.is_match(text)
}

/// The kind of information one pipe separated value carries
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum PipeValueType {
    /// A name, optionally qualified with a source, `Phospho` or `U:Phospho`
    #[default]
    Synonym,
    /// A free text tag, `Info:text`
    InfoTag,
    /// A mass shift, `+15.995`
    Mass,
    /// An observed mass, `Obs:+15.995`
    ObservedMass,
    /// A crosslink, `XL:DSS#XL1` or `#XL1`
    Crosslink,
    /// A branch, `Name#BRANCH` or `#BRANCH`
    Branch,
    /// A member of an ambiguity group, `Phospho#g1(0.5)` or `#g1`
    Ambiguity,
    /// A glycan composition, `Glycan:HexNAc2`
    Glycan,
    /// A mass for an unknown stretch of sequence
    Gap,
    /// A molecular formula, `Formula:C2H3O`
    Formula,
}

impl Display for PipeValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Synonym => "synonym",
                Self::InfoTag => "info tag",
                Self::Mass => "mass",
                Self::ObservedMass => "observed mass",
                Self::Crosslink => "crosslink",
                Self::Branch => "branch",
                Self::Ambiguity => "ambiguity",
                Self::Glycan => "glycan",
                Self::Gap => "gap",
                Self::Formula => "formula",
            }
        )
    }
}

/// One `|` separated value from a modification
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PipeValue {
    /// The value text, without the source and without any `#` or charge suffix
    value: String,
    kind: PipeValueType,
    assigned_types: Vec<PipeValueType>,
    source: Option<String>,
    crosslink_id: Option<String>,
    crosslink_reference: bool,
    branch: bool,
    branch_reference: bool,
    ambiguity_group: Option<String>,
    ambiguity_reference: bool,
    localisation_score: Option<OrderedFloat<f64>>,
    mass: Option<OrderedFloat<f64>>,
    observed_mass: Option<OrderedFloat<f64>>,
    valid_glycan: bool,
    valid_formula: bool,
    charge: Option<isize>,
}

impl PipeValue {
    /// Classify a single pipe separated segment of modification text. The `#` suffixes are
    /// split off first, the remainder is classified based on its source. The primary segment,
    /// the first one of a modification, is also checked for being a glycan or formula when it
    /// is a plain name.
    pub fn classify(segment: &str, is_primary: bool) -> Self {
        let mut result = Self::default();
        let mut body = segment;
        if let Some(captures) = BRANCH.captures(segment) {
            body = captures.get(1).map_or("", |m| m.as_str());
            result.branch = !body.is_empty();
            result.branch_reference = body.is_empty();
            result.assign(PipeValueType::Branch);
        } else if let Some(captures) = CROSSLINK.captures(segment) {
            body = captures.get(1).map_or("", |m| m.as_str());
            result.crosslink_id = Some(captures[2].to_string());
            result.crosslink_reference = body.is_empty();
            result.assign(PipeValueType::Crosslink);
        } else if let Some(captures) = AMBIGUITY.captures(segment)
            && !captures[2].starts_with("XL")
        {
            body = captures.get(1).map_or("", |m| m.as_str());
            result.ambiguity_group = Some(captures[2].to_string());
            result.ambiguity_reference = body.is_empty();
            result.localisation_score = captures
                .get(3)
                .and_then(|score| score.as_str().parse::<f64>().ok())
                .map(OrderedFloat);
            result.assign(PipeValueType::Ambiguity);
        }
        result.value = body.to_string();
        if !body.is_empty() {
            result.classify_body(body, is_primary);
        }
        result.kind = result.assigned_types.first().copied().unwrap_or_default();
        result
    }

    fn classify_body(&mut self, body: &str, is_primary: bool) {
        if str_starts_with::<true>(body, "Mass:") && is_mass(&body[5..]) {
            self.value = body[5..].to_string();
            self.mass = body[5..].parse::<f64>().ok().map(OrderedFloat);
            self.assign(PipeValueType::Mass);
        } else if let Some((source, rest)) = body.split_once(':')
            && KNOWN_SOURCES.contains(&source)
        {
            self.source = Some(source.to_string());
            self.value = rest.to_string();
            match source {
                "Formula" | "FORMULA" => {
                    let mut formula = rest;
                    if let Some(captures) = FORMULA_CHARGE.captures(rest)
                        && let Ok(charge) = captures[1].parse::<isize>()
                    {
                        self.charge = Some(charge);
                        formula = &rest[..captures.get(0).map_or(rest.len(), |m| m.start())];
                    }
                    self.value = formula.to_string();
                    self.valid_formula = validate::formula(formula);
                    self.assign(PipeValueType::Formula);
                }
                "Glycan" | "GLYCAN" => {
                    self.valid_glycan = validate::glycan(rest);
                    self.assign(PipeValueType::Glycan);
                }
                "GNO" | "G" => {
                    self.valid_glycan = true;
                    self.assign(PipeValueType::Glycan);
                }
                "Info" | "INFO" => self.assign(PipeValueType::InfoTag),
                "Obs" | "OBS" => {
                    self.observed_mass = rest.parse::<f64>().ok().map(OrderedFloat);
                    self.assign(PipeValueType::ObservedMass);
                }
                "XL" | "XL-MOD" | "XLMOD" | "X" => self.assign(PipeValueType::Crosslink),
                _ if is_mass(rest) => {
                    self.mass = rest.parse::<f64>().ok().map(OrderedFloat);
                    self.assign(PipeValueType::Mass);
                }
                _ => self.assign(PipeValueType::Synonym),
            }
        } else if is_mass(body) {
            self.mass = body.parse::<f64>().ok().map(OrderedFloat);
            self.assign(PipeValueType::Mass);
        } else {
            self.assign(PipeValueType::Synonym);
            if is_primary {
                if validate::glycan(body) {
                    self.valid_glycan = true;
                    self.assign(PipeValueType::Glycan);
                }
                if validate::formula(body) {
                    self.valid_formula = true;
                    self.assign(PipeValueType::Formula);
                }
            }
        }
    }

    /// Create a pipe value describing the mass of a gap of unknown sequence
    pub(crate) fn gap(text: &str) -> Self {
        let mut result = Self::classify(text, false);
        if result.mass.is_some() {
            result.assigned_types.insert(0, PipeValueType::Gap);
            result.kind = PipeValueType::Gap;
        }
        result
    }

    /// Create a pipe value for a plain mass shift
    pub fn mass_shift(mass: f64) -> Self {
        Self {
            value: format!("{mass:+}"),
            kind: PipeValueType::Mass,
            assigned_types: vec![PipeValueType::Mass],
            mass: Some(OrderedFloat(mass)),
            ..Self::default()
        }
    }

    fn assign(&mut self, kind: PipeValueType) {
        if !self.assigned_types.contains(&kind) {
            self.assigned_types.push(kind);
        }
    }

    /// The value text, without source and without any suffixes
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The main type of this value
    pub const fn kind(&self) -> PipeValueType {
        self.kind
    }

    /// All types this value satisfies, the main type first
    pub fn assigned_types(&self) -> &[PipeValueType] {
        &self.assigned_types
    }

    /// Check if this value satisfies the given type
    pub fn has_type(&self, kind: PipeValueType) -> bool {
        self.assigned_types.contains(&kind)
    }

    /// The source, if this value was source qualified
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The crosslink identifier, `XL1` for `#XL1`
    pub fn crosslink_id(&self) -> Option<&str> {
        self.crosslink_id.as_deref()
    }

    /// If this is a bare crosslink reference `#XL1`
    pub const fn is_crosslink_reference(&self) -> bool {
        self.crosslink_reference
    }

    /// If this defines a branch `Name#BRANCH`
    pub const fn is_branch(&self) -> bool {
        self.branch
    }

    /// If this is a bare branch reference `#BRANCH`
    pub const fn is_branch_reference(&self) -> bool {
        self.branch_reference
    }

    /// The ambiguity group identifier
    pub fn ambiguity_group(&self) -> Option<&str> {
        self.ambiguity_group.as_deref()
    }

    /// If this is a bare ambiguity group reference `#g1`
    pub const fn is_ambiguity_reference(&self) -> bool {
        self.ambiguity_reference
    }

    /// The localisation score for the ambiguity group
    pub fn localisation_score(&self) -> Option<f64> {
        self.localisation_score.map(|s| s.0)
    }

    /// The mass shift
    pub fn mass(&self) -> Option<f64> {
        self.mass.map(|m| m.0)
    }

    /// The observed mass
    pub fn observed_mass(&self) -> Option<f64> {
        self.observed_mass.map(|m| m.0)
    }

    /// If the text is a valid glycan composition
    pub const fn is_valid_glycan(&self) -> bool {
        self.valid_glycan
    }

    /// If the text is a valid molecular formula
    pub const fn is_valid_formula(&self) -> bool {
        self.valid_formula
    }

    /// The charge of a formula
    pub const fn charge(&self) -> Option<isize> {
        self.charge
    }

    /// The charge of a formula in ProForma notation, `z+2`
    pub fn charge_notation(&self) -> Option<String> {
        self.charge.map(|c| format!("z{c:+}"))
    }

    /// Write the value with its source and suffixes, this is also the [`Display`] implementation.
    /// # Errors
    /// If the underlying writer errors.
    pub fn display(&self, f: &mut impl Write) -> std::fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "{source}:")?;
        }
        write!(f, "{}", self.value)?;
        if let Some(charge) = self.charge {
            write!(f, ":z{charge:+}")?;
        }
        if let Some(id) = &self.crosslink_id {
            write!(f, "#{id}")?;
        } else if self.branch || self.branch_reference {
            write!(f, "#BRANCH")?;
        } else if let Some(group) = &self.ambiguity_group {
            write!(f, "#{group}")?;
            if let Some(score) = self.localisation_score {
                write!(f, "({})", score.0)?;
            }
        }
        Ok(())
    }
}

impl Display for PipeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.display(f)
    }
}

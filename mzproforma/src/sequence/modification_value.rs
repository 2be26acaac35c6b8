use std::fmt::{Display, Write};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::sequence::{PipeValue, PipeValueType};

/// The full content of a modification, all `|` separated values with the main name, source, and
/// mass pulled out for easy access.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ModificationValue {
    primary: String,
    source: Option<String>,
    mass: Option<OrderedFloat<f64>>,
    pipe_values: Vec<PipeValue>,
}

impl ModificationValue {
    /// Parse the text of a modification, the content of the brackets or braces.
    ///
    /// ```
    /// # use mzproforma::sequence::ModificationValue;
    /// let value = ModificationValue::parse("U:Phospho|+79.966|Info:confirmed");
    /// assert_eq!(value.primary(), "Phospho");
    /// assert_eq!(value.source(), Some("U"));
    /// assert_eq!(value.mass(), Some(79.966));
    /// assert_eq!(value.info_tags().collect::<Vec<_>>(), vec!["confirmed"]);
    /// ```
    pub fn parse(text: &str) -> Self {
        Self::from_pipe_values(
            text.split('|')
                .enumerate()
                .map(|(index, segment)| PipeValue::classify(segment, index == 0))
                .collect(),
        )
    }

    /// Build a value from already classified pipe values, the first one is the primary value.
    pub fn from_pipe_values(pipe_values: Vec<PipeValue>) -> Self {
        let (primary, source, first_mass) = pipe_values.first().map_or_else(
            || (String::new(), None, None),
            |first| {
                (
                    first.value().to_string(),
                    first.source().map(ToString::to_string),
                    first.mass(),
                )
            },
        );
        let mass = first_mass
            .or_else(|| pipe_values.iter().find_map(PipeValue::mass))
            .map(OrderedFloat);
        Self {
            primary,
            source,
            mass,
            pipe_values,
        }
    }

    /// Replace the primary value, the pipe values are left as is
    #[must_use]
    pub(crate) fn with_primary(mut self, primary: impl Into<String>) -> Self {
        self.primary = primary.into();
        self
    }

    /// The main value, the first segment without source and without suffixes
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// The source of the first segment, if it was source qualified
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The usable mass, from the first segment or otherwise the first segment that has a mass
    pub fn mass(&self) -> Option<f64> {
        self.mass.map(|m| m.0)
    }

    /// All pipe values in order of definition
    pub fn pipe_values(&self) -> &[PipeValue] {
        &self.pipe_values
    }

    /// All names given to this modification
    pub fn synonyms(&self) -> impl Iterator<Item = &str> {
        self.values_of(PipeValueType::Synonym)
    }

    /// All info tags
    pub fn info_tags(&self) -> impl Iterator<Item = &str> {
        self.values_of(PipeValueType::InfoTag)
    }

    fn values_of(&self, kind: PipeValueType) -> impl Iterator<Item = &str> {
        self.pipe_values
            .iter()
            .filter(move |v| v.kind() == kind && !v.value().is_empty())
            .map(PipeValue::value)
    }

    /// The first observed mass
    pub fn observed_mass(&self) -> Option<f64> {
        self.pipe_values.iter().find_map(PipeValue::observed_mass)
    }

    /// The crosslink identifier
    pub fn crosslink_id(&self) -> Option<&str> {
        self.pipe_values.iter().find_map(PipeValue::crosslink_id)
    }

    /// If this modification only references a crosslink defined elsewhere
    pub fn is_crosslink_reference(&self) -> bool {
        self.pipe_values.iter().any(PipeValue::is_crosslink_reference)
    }

    /// If this modification defines a branch
    pub fn is_branch(&self) -> bool {
        self.pipe_values.iter().any(PipeValue::is_branch)
    }

    /// If this modification only references a branch
    pub fn is_branch_reference(&self) -> bool {
        self.pipe_values.iter().any(PipeValue::is_branch_reference)
    }

    /// The ambiguity group identifier
    pub fn ambiguity_group(&self) -> Option<&str> {
        self.pipe_values.iter().find_map(PipeValue::ambiguity_group)
    }

    /// If this modification only references an ambiguity group
    pub fn is_ambiguity_reference(&self) -> bool {
        self.pipe_values.iter().any(PipeValue::is_ambiguity_reference)
    }

    /// The localisation score within the ambiguity group
    pub fn localisation_score(&self) -> Option<f64> {
        self.pipe_values.iter().find_map(PipeValue::localisation_score)
    }

    /// Write out all pipe values, skipping empty and duplicated values
    /// # Errors
    /// If the underlying writer errors.
    pub fn display(&self, f: &mut impl Write) -> std::fmt::Result {
        let mut seen: Vec<String> = Vec::with_capacity(self.pipe_values.len());
        for value in &self.pipe_values {
            let text = value.to_string();
            if text.is_empty() || seen.contains(&text) {
                continue;
            }
            if !seen.is_empty() {
                write!(f, "|")?;
            }
            write!(f, "{text}")?;
            seen.push(text);
        }
        Ok(())
    }
}

impl Display for ModificationValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.display(f)
    }
}

use std::{ops::Range, sync::LazyLock};

use context_error::{BoxedError, Context, CreateError, Highlight};
use regex::Regex;

use crate::{
    ParserResult,
    error::ProFormaErrorKind,
    helper_functions::{end_of_enclosure, explain_number_error, next_char},
    sequence::{
        GlobalModification, GlobalTarget, Modification, ModificationContext, PlacementControls,
    },
};

static CROSSLINK_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#XL[A-Za-z0-9]+$").unwrap());
static CROSSLINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^#]+#XL[A-Za-z0-9]+$").unwrap());
static BRANCH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^#]+#BRANCH$").unwrap());

/// Determine the context for a bracketed modification on a residue based on the first pipe
/// segment of its content.
pub(super) fn bracket_context(content: &str) -> ModificationContext {
    let first = content.split('|').next().unwrap_or_default();
    if CROSSLINK_REFERENCE.is_match(first) {
        ModificationContext::CrosslinkReference
    } else if first == "#BRANCH" {
        ModificationContext::BranchReference
    } else if CROSSLINK.is_match(first) {
        ModificationContext::Crosslink
    } else if BRANCH.is_match(first) {
        ModificationContext::Branch
    } else {
        ModificationContext::Static
    }
}

/// Parse the content of a global modification block `<...>`, the range excludes the angle brackets.
///
/// A fixed modification is written `[modification]@targets` or `+mass@targets`, an isotope
/// label is written without `@`. The placement controls `Position:`, `Limit:`, `CoMKP`, and
/// `CoMUP` (and their long forms) are moved out of the modification value.
/// # Errors
/// If the brackets are not closed, a bracketed modification is not followed by `@`, the
/// targets are invalid, or the limit is not a number.
pub(super) fn global_modification<'a>(
    base_context: &Context<'a>,
    line: &'a str,
    range: Range<usize>,
) -> ParserResult<'a, GlobalModification> {
    let body = &line[range.clone()];
    if body.is_empty() {
        return Err(BoxedError::new(
            ProFormaErrorKind::MalformedGlobalModification,
            "Invalid global modification",
            "A global modification cannot be empty",
            base_context
                .clone()
                .add_highlight(Highlight::from((0, range.start.saturating_sub(1), 2))),
        ));
    }
    let (content, targets) = if body.starts_with('[') {
        let close = end_of_enclosure(body, 1, b'[', b']').ok_or_else(|| {
            BoxedError::new(
                ProFormaErrorKind::UnterminatedBlock,
                "Invalid global modification",
                "No closing bracket found for the modification",
                base_context.clone().add_highlight(Highlight::from((0, range.start, 1))),
            )
        })?;
        if body.as_bytes().get(close + 1) != Some(&b'@') {
            return Err(BoxedError::new(
                ProFormaErrorKind::MalformedGlobalModification,
                "Invalid global modification",
                "A bracketed global modification has to be followed by '@' and the targets, like: <[Carbamidomethyl]@C>",
                base_context
                    .clone()
                    .add_highlight(Highlight::from((0, range.start + close + 1, 1))),
            ));
        }
        (
            range.start + 1..range.start + close,
            range.start + close + 2..range.end,
        )
    } else if let Some(at) = next_char(body.as_bytes(), 0, b'@') {
        (range.start..range.start + at, range.start + at + 1..range.end)
    } else {
        return Ok(GlobalModification::isotope(Modification::build(
            body,
            ModificationContext::Global,
        )));
    };

    let mut placement = PlacementControls::default();
    let mut kept = Vec::new();
    let mut offset = content.start;
    for segment in line[content].split('|') {
        match placement.read_segment(segment) {
            Ok(true) => (),
            Ok(false) => kept.push(segment),
            Err(error) => {
                return Err(BoxedError::new(
                    ProFormaErrorKind::InvalidNumber,
                    "Invalid global modification",
                    format!("The placement limit {}", explain_number_error(&error)),
                    base_context
                        .clone()
                        .add_highlight(Highlight::from((0, offset, segment.len()))),
                ));
            }
        }
        offset += segment.len() + 1;
    }

    let mut parsed_targets = Vec::new();
    let mut offset = targets.start;
    for target in line[targets].split(',') {
        parsed_targets.push(GlobalTarget::parse(target).ok_or_else(|| {
            BoxedError::new(
                ProFormaErrorKind::MalformedGlobalModification,
                "Invalid global modification",
                "A target has to be a single residue, 'N-term', or 'C-term', optionally followed by a residue like 'N-term:Q'",
                base_context
                    .clone()
                    .add_highlight(Highlight::from((0, offset, target.len().max(1)))),
            )
        })?);
        offset += target.len() + 1;
    }

    Ok(GlobalModification::fixed(
        Modification::build(&kept.join("|"), ModificationContext::Global)
            .with_placement(placement),
        parsed_targets,
    ))
}

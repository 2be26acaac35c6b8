use std::{num::NonZeroUsize, ops::Range};

use context_error::{BoxedError, Context, CreateError, Highlight};

use crate::{
    ParserResult,
    error::ProFormaErrorKind,
    helper_functions::{
        bracket_run, digits, end_of_enclosure, end_of_enclosure_with_brackets,
        explain_number_error, first_outside_enclosures, next_char, split_outside_enclosures,
        str_starts_with,
    },
    sequence::{
        CompoundPeptidoformIon, Modification, ModificationContext, Peptidoform, PeptidoformIon,
        SequencePosition,
    },
};

use super::{
    SequenceAmbiguity,
    parse_modification::{bracket_context, global_modification},
};

impl Peptidoform {
    /// Parse a single peptidoform in [ProForma](https://github.com/HUPO-PSI/ProForma) notation.
    /// To handle all possible ProForma definitions look at [`CompoundPeptidoformIon::pro_forma`].
    /// Labile modifications are accepted regardless of their content.
    /// # Errors
    /// If the text is not valid ProForma, or if it contains multiple chains (`//`) or chimeric peptidoforms (`+`).
    pub fn pro_forma<'a>(value: &'a str) -> ParserResult<'a, Self> {
        Self::pro_forma_inner(&Context::none().lines(0, value), value, 0..value.len())
    }

    /// This parses a substring of the given string as a single peptidoform. The base context is
    /// assumed to contain the full line at line index 0.
    /// # Errors
    /// If the text is not valid ProForma, or if it contains multiple chains or chimeric peptidoforms.
    pub fn pro_forma_inner<'a>(
        base_context: &Context<'a>,
        line: &'a str,
        range: Range<usize>,
    ) -> ParserResult<'a, Self> {
        Self::pro_forma_single::<false>(base_context, line, range)
    }

    /// Parse a single peptidoform, labile modifications have to be glycans `{Glycan:Hex}`.
    /// # Errors
    /// If the text is not valid ProForma, if a labile modification is not a glycan, or if it
    /// contains multiple chains or chimeric peptidoforms.
    pub fn pro_forma_strict<'a>(value: &'a str) -> ParserResult<'a, Self> {
        Self::pro_forma_inner_strict(&Context::none().lines(0, value), value, 0..value.len())
    }

    /// See [`Self::pro_forma_strict`] and [`Self::pro_forma_inner`].
    /// # Errors
    /// If the text is not valid ProForma, if a labile modification is not a glycan, or if it
    /// contains multiple chains or chimeric peptidoforms.
    pub fn pro_forma_inner_strict<'a>(
        base_context: &Context<'a>,
        line: &'a str,
        range: Range<usize>,
    ) -> ParserResult<'a, Self> {
        Self::pro_forma_single::<true>(base_context, line, range)
    }

    fn pro_forma_single<'a, const STRICT: bool>(
        base_context: &Context<'a>,
        line: &'a str,
        range: Range<usize>,
    ) -> ParserResult<'a, Self> {
        CompoundPeptidoformIon::pro_forma_main::<STRICT>(base_context, line, range.clone())?
            .singular_peptidoform()
            .ok_or_else(|| {
                BoxedError::new(
                    ProFormaErrorKind::UnexpectedComposition,
                    "Peptidoform ion found",
                    "A single peptidoform was expected but multiple chains or chimeric peptidoforms were found",
                    base_context.clone().add_highlight((0, range)),
                )
            })
    }

    /// Parse a single chain, the range cannot contain any `//` or chimeric `+` separators.
    pub(super) fn parse_chain<'a, const STRICT: bool>(
        base_context: &Context<'a>,
        line: &'a str,
        range: Range<usize>,
    ) -> ParserResult<'a, Self> {
        if line[range.clone()].trim().is_empty() {
            return Err(BoxedError::new(
                ProFormaErrorKind::EmptySequence,
                "Empty peptidoform",
                "A peptidoform has to contain at least some definition, for example a sequence",
                base_context
                    .clone()
                    .add_highlight(Highlight::from((0, range.start.saturating_sub(1), 1))),
            ));
        }
        let bytes = line.as_bytes();
        let end = range.end;
        let mut index = range.start;
        let mut peptidoform = Self::default();

        // Names (>>>compound ion)(>>peptidoform ion)(>peptidoform)
        while bytes[index..end].starts_with(b"(>") {
            let depth = bytes[index + 1..end]
                .iter()
                .take_while(|c| **c == b'>')
                .count()
                .min(3);
            let close = end_of_enclosure(&line[..end], index + 1, b'(', b')').ok_or_else(|| {
                BoxedError::new(
                    ProFormaErrorKind::UnterminatedBlock,
                    "Invalid name",
                    "No closing parenthesis found for this name",
                    base_context.clone().add_highlight(Highlight::from((0, index, 1))),
                )
            })?;
            let name = Some(line[index + 1 + depth..close].to_string());
            match depth {
                1 => peptidoform.names.peptidoform = name,
                2 => peptidoform.names.peptidoform_ion = name,
                _ => peptidoform.names.compound_ion = name,
            }
            index = close + 1;
        }

        // Global modifications
        while index < end && bytes[index] == b'<' {
            let close = end_of_enclosure_with_brackets(&line[..end], index + 1, b'<', b'>')
                .ok_or_else(|| {
                    BoxedError::new(
                        ProFormaErrorKind::UnterminatedBlock,
                        "Invalid global modification",
                        "No closing angle bracket found for this global modification",
                        base_context.clone().add_highlight(Highlight::from((0, index, 1))),
                    )
                })?;
            peptidoform.global.push(global_modification(
                base_context,
                line,
                index + 1..close,
            )?);
            index = close + 1;
        }

        // Modifications of unknown position
        if let Some((tail, modifications)) =
            unknown_position_modifications(base_context, line, index..end)?
        {
            for modification in modifications {
                peptidoform.add_modification(SequencePosition::UnknownPosition, modification);
            }
            index = tail;
        }

        // Labile modifications
        while index < end && bytes[index] == b'{' {
            let close = end_of_enclosure(&line[..end], index + 1, b'{', b'}').ok_or_else(|| {
                BoxedError::new(
                    ProFormaErrorKind::UnterminatedBlock,
                    "Invalid labile modification",
                    "No closing brace found for this labile modification",
                    base_context.clone().add_highlight(Highlight::from((0, index, 1))),
                )
            })?;
            let content = &line[index + 1..close];
            if STRICT && !str_starts_with::<true>(content, "Glycan:") {
                return Err(BoxedError::new(
                    ProFormaErrorKind::InvalidLabileModification,
                    "Invalid labile modification",
                    "A labile modification has to be a glycan, like: {Glycan:Hex}",
                    base_context
                        .clone()
                        .add_highlight(Highlight::from((0, index, close + 1 - index))),
                ));
            }
            peptidoform.add_modification(
                SequencePosition::Labile,
                Modification::build(content, ModificationContext::Labile),
            );
            index = close + 1;
        }

        // N terminal modifications
        let (tail, blocks) = bracket_run(line, index, end)
            .map_err(|open| unterminated_bracket(base_context, open))?;
        if !blocks.is_empty() && tail < end && bytes[tail] == b'-' {
            for block in blocks {
                peptidoform.add_modification(
                    SequencePosition::NTerm,
                    Modification::build(&line[block], ModificationContext::Terminal),
                );
            }
            index = tail + 1;
        }

        // Charge state and ionic species
        let mut body_end = end;
        if let Some(slash) = first_outside_enclosures(line, index..end, "/") {
            body_end = slash;
            let mut position = slash + 1;
            if position < end && matches!(bytes[position], b'+' | b'-') {
                position += 1;
            }
            let length = digits(&bytes[..end], position);
            if length == 0 {
                return Err(BoxedError::new(
                    ProFormaErrorKind::InvalidNumber,
                    "Invalid charge",
                    "A charge state has to be a number, like: /2 or /-1",
                    base_context.clone().add_highlight(Highlight::from((0, slash, 1))),
                ));
            }
            position += length;
            peptidoform.charge =
                Some(line[slash + 1..position].parse::<isize>().map_err(|error| {
                    BoxedError::new(
                        ProFormaErrorKind::InvalidNumber,
                        "Invalid charge",
                        format!("The charge state {}", explain_number_error(&error)),
                        base_context
                            .clone()
                            .add_highlight(Highlight::from((0, slash + 1, position - slash - 1))),
                    )
                })?);
            if position < end && bytes[position] == b'[' {
                let close = end_of_enclosure(&line[..end], position + 1, b'[', b']')
                    .ok_or_else(|| unterminated_bracket(base_context, position))?;
                peptidoform.ionic_species = Some(line[position + 1..close].to_string());
                position = close + 1;
            }
            if position < end {
                return Err(BoxedError::new(
                    ProFormaErrorKind::MisplacedModification,
                    "Text after the charge",
                    "The charge state has to be the last element of a peptidoform",
                    base_context
                        .clone()
                        .add_highlight(Highlight::from((0, position, end - position))),
                ));
            }
        }

        // C terminal modifications, scanned from the right
        let mut depth = 0_usize;
        let mut cursor = body_end;
        while cursor > index {
            cursor -= 1;
            match bytes[cursor] {
                b']' | b'}' | b')' => depth += 1,
                b'[' | b'{' | b'(' => depth = depth.saturating_sub(1),
                b'-' if depth == 0 => {
                    let (tail, blocks) = bracket_run(line, cursor + 1, body_end)
                        .map_err(|open| unterminated_bracket(base_context, open))?;
                    if tail == body_end && !blocks.is_empty() {
                        for block in blocks {
                            peptidoform.add_modification(
                                SequencePosition::CTerm,
                                Modification::build(&line[block], ModificationContext::Terminal),
                            );
                        }
                        body_end = cursor;
                    }
                    break;
                }
                _ => (),
            }
        }

        // The sequence itself
        let mut range_start: Option<(usize, usize)> = None;
        let mut gap = false;
        while index < body_end {
            match bytes[index] {
                b'(' if index + 1 < body_end && bytes[index + 1] == b'?' => {
                    let close = next_char(&bytes[..body_end], index + 2, b')').ok_or_else(|| {
                        BoxedError::new(
                            ProFormaErrorKind::UnterminatedBlock,
                            "Invalid sequence ambiguity",
                            "No closing parenthesis found for this sequence ambiguity",
                            base_context.clone().add_highlight(Highlight::from((0, index, 2))),
                        )
                    })?;
                    peptidoform.ambiguities.push(SequenceAmbiguity {
                        value: line[index + 2..close].to_string(),
                        position: 0,
                    });
                    index = close + 1;
                }
                b'(' => {
                    if let Some((_, open)) = range_start {
                        return Err(BoxedError::new(
                            ProFormaErrorKind::UnbalancedRange,
                            "Invalid ranged ambiguous modification",
                            "Ranged ambiguous modifications cannot be nested",
                            base_context
                                .clone()
                                .add_highlight(Highlight::from((0, open, index + 1 - open))),
                        ));
                    }
                    range_start = Some((peptidoform.residues.len(), index));
                    index += 1;
                }
                b')' => {
                    let (start, _) = range_start.take().ok_or_else(|| {
                        BoxedError::new(
                            ProFormaErrorKind::UnbalancedRange,
                            "Invalid ranged ambiguous modification",
                            "A closing parenthesis was found without a matching opening parenthesis",
                            base_context.clone().add_highlight(Highlight::from((0, index, 1))),
                        )
                    })?;
                    let (tail, blocks) = bracket_run(line, index + 1, body_end)
                        .map_err(|open| unterminated_bracket(base_context, open))?;
                    let length = peptidoform.residues.len();
                    if !blocks.is_empty() && start == length {
                        return Err(BoxedError::new(
                            ProFormaErrorKind::MisplacedModification,
                            "Invalid ranged ambiguous modification",
                            "An empty range cannot contain any modifications",
                            base_context.clone().add_highlight(Highlight::from((0, index, 1))),
                        ));
                    }
                    for block in blocks {
                        let modification = Modification::build(
                            &line[block],
                            ModificationContext::Range {
                                start,
                                end: length - 1,
                            },
                        );
                        for residue in &mut peptidoform.residues[start..] {
                            residue.add_modification(modification.clone());
                        }
                    }
                    gap = false;
                    index = tail;
                }
                b'[' => {
                    let close = end_of_enclosure(&line[..body_end], index + 1, b'[', b']')
                        .ok_or_else(|| unterminated_bracket(base_context, index))?;
                    let content = &line[index + 1..close];
                    let context = if gap {
                        ModificationContext::Gap
                    } else {
                        bracket_context(content)
                    };
                    gap = false;
                    peptidoform
                        .residues
                        .last_mut()
                        .ok_or_else(|| no_residue(base_context, index, close))?
                        .add_modification(Modification::build(content, context));
                    index = close + 1;
                }
                b'{' => {
                    let close = end_of_enclosure(&line[..body_end], index + 1, b'{', b'}')
                        .ok_or_else(|| {
                            BoxedError::new(
                                ProFormaErrorKind::UnterminatedBlock,
                                "Invalid ambiguous modification",
                                "No closing brace found for this modification",
                                base_context.clone().add_highlight(Highlight::from((0, index, 1))),
                            )
                        })?;
                    gap = false;
                    peptidoform
                        .residues
                        .last_mut()
                        .ok_or_else(|| no_residue(base_context, index, close))?
                        .add_modification(Modification::build(
                            &line[index + 1..close],
                            ModificationContext::Ambiguous,
                        ));
                    index = close + 1;
                }
                b']' | b'}' => {
                    return Err(BoxedError::new(
                        ProFormaErrorKind::UnterminatedBlock,
                        "Invalid modification",
                        "A closing bracket was found without a matching opening bracket",
                        base_context.clone().add_highlight(Highlight::from((0, index, 1))),
                    ));
                }
                _ => {
                    let Some(symbol) = line[index..body_end].chars().next() else {
                        break;
                    };
                    peptidoform.add_residue(symbol, None).map_err(|_| {
                        BoxedError::new(
                            ProFormaErrorKind::UnknownResidueSymbol,
                            "Unknown residue",
                            format!("The residue '{symbol}' is not a known amino acid"),
                            base_context
                                .clone()
                                .add_highlight(Highlight::from((0, index, symbol.len_utf8()))),
                        )
                    })?;
                    index += symbol.len_utf8();
                    gap = symbol == 'X' && index < body_end && bytes[index] == b'[';
                }
            }
        }
        if let Some((_, open)) = range_start {
            return Err(BoxedError::new(
                ProFormaErrorKind::UnbalancedRange,
                "Invalid ranged ambiguous modification",
                "An opening parenthesis was found without a matching closing parenthesis",
                base_context.clone().add_highlight(Highlight::from((0, open, 1))),
            ));
        }

        Ok(peptidoform)
    }
}

/// The maximal `^count` for a modification of unknown position
const MAX_UNKNOWN_POSITION_COPIES: usize = 1000;

/// Parse the run of `[mod]^count` blocks followed by `?` at the start of the range. Returns
/// `None` if there is no such run, otherwise the index after the `?` and all modifications with
/// one copy for every count.
fn unknown_position_modifications<'a>(
    base_context: &Context<'a>,
    line: &'a str,
    range: Range<usize>,
) -> ParserResult<'a, Option<(usize, Vec<Modification>)>> {
    let bytes = line.as_bytes();
    let mut index = range.start;
    let mut modifications = Vec::new();
    while index < range.end && bytes[index] == b'[' {
        let close = end_of_enclosure(&line[..range.end], index + 1, b'[', b']')
            .ok_or_else(|| unterminated_bracket(base_context, index))?;
        let modification = Modification::build(
            &line[index + 1..close],
            ModificationContext::UnknownPosition,
        );
        index = close + 1;
        let mut count = 1;
        if index < range.end && bytes[index] == b'^' {
            let length = digits(&bytes[..range.end], index + 1);
            count = line[index + 1..index + 1 + length]
                .parse::<NonZeroUsize>()
                .map_err(|error| {
                    BoxedError::new(
                        ProFormaErrorKind::InvalidNumber,
                        "Invalid unknown position modification",
                        format!("The number of copies {}", explain_number_error(&error)),
                        base_context.clone().add_highlight(Highlight::from((0, index, length + 1))),
                    )
                })?
                .get();
            if count > MAX_UNKNOWN_POSITION_COPIES {
                return Err(BoxedError::new(
                    ProFormaErrorKind::InvalidNumber,
                    "Invalid unknown position modification",
                    format!(
                        "The number of copies cannot be more than {MAX_UNKNOWN_POSITION_COPIES}"
                    ),
                    base_context.clone().add_highlight(Highlight::from((0, index, length + 1))),
                ));
            }
            index += 1 + length;
        }
        modifications.extend(std::iter::repeat_n(modification, count));
    }
    Ok(
        (!modifications.is_empty() && index < range.end && bytes[index] == b'?')
            .then_some((index + 1, modifications)),
    )
}

fn unterminated_bracket<'a>(
    base_context: &Context<'a>,
    open: usize,
) -> BoxedError<'a, ProFormaErrorKind> {
    BoxedError::new(
        ProFormaErrorKind::UnterminatedBlock,
        "Invalid modification",
        "No closing bracket found for this modification",
        base_context.clone().add_highlight(Highlight::from((0, open, 1))),
    )
}

fn no_residue<'a>(
    base_context: &Context<'a>,
    open: usize,
    close: usize,
) -> BoxedError<'a, ProFormaErrorKind> {
    BoxedError::new(
        ProFormaErrorKind::MisplacedModification,
        "Misplaced modification",
        "A modification has to follow a residue, for terminal modifications use '[mod]-' or '-[mod]'",
        base_context
            .clone()
            .add_highlight(Highlight::from((0, open, close + 1 - open))),
    )
}

impl PeptidoformIon {
    /// Parse a peptidoform ion in [ProForma](https://github.com/HUPO-PSI/ProForma) notation,
    /// this can contain multiple chains separated by `//`.
    /// # Errors
    /// If the text is not valid ProForma, or if it contains chimeric peptidoforms (`+`).
    pub fn pro_forma<'a>(value: &'a str) -> ParserResult<'a, Self> {
        Self::pro_forma_inner(&Context::none().lines(0, value), value, 0..value.len())
    }

    /// This parses a substring of the given string as a peptidoform ion. The base context is
    /// assumed to contain the full line at line index 0.
    /// # Errors
    /// If the text is not valid ProForma, or if it contains chimeric peptidoforms.
    pub fn pro_forma_inner<'a>(
        base_context: &Context<'a>,
        line: &'a str,
        range: Range<usize>,
    ) -> ParserResult<'a, Self> {
        CompoundPeptidoformIon::pro_forma_main::<false>(base_context, line, range.clone())?
            .singular()
            .ok_or_else(|| {
                BoxedError::new(
                    ProFormaErrorKind::UnexpectedComposition,
                    "Compound peptidoform ion found",
                    "A peptidoform ion was expected but chimeric peptidoforms were found",
                    base_context.clone().add_highlight((0, range)),
                )
            })
    }

    /// Parse all chains of a single ion.
    fn pro_forma_main<'a, const STRICT: bool>(
        base_context: &Context<'a>,
        line: &'a str,
        range: Range<usize>,
    ) -> ParserResult<'a, Self> {
        split_outside_enclosures(line, range, "//", |_| true)
            .into_iter()
            .map(|chain| Peptidoform::parse_chain::<STRICT>(base_context, line, chain))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl CompoundPeptidoformIon {
    /// Parse a compound peptidoform ion in [ProForma](https://github.com/HUPO-PSI/ProForma)
    /// notation. This handles all levels: chimeric peptidoform ions separated by `+`, which
    /// contain chains separated by `//`. Labile modifications are accepted regardless of their content.
    ///
    /// ```
    /// # use mzproforma::sequence::CompoundPeptidoformIon;
    /// let compound = CompoundPeptidoformIon::pro_forma("EMEVTK[XL:DSS#XL1]SESPEK//EMEVTK[#XL1]SESPEK+PEPTIDE/2").unwrap();
    /// assert_eq!(compound.peptidoform_ions().len(), 2);
    /// assert_eq!(compound.peptidoforms().count(), 3);
    /// ```
    /// # Errors
    /// If the text is not valid ProForma.
    pub fn pro_forma<'a>(value: &'a str) -> ParserResult<'a, Self> {
        Self::pro_forma_inner(&Context::none().lines(0, value), value, 0..value.len())
    }

    /// This parses a substring of the given string as a compound peptidoform ion. The base
    /// context is assumed to contain the full line at line index 0.
    /// # Errors
    /// If the text is not valid ProForma.
    pub fn pro_forma_inner<'a>(
        base_context: &Context<'a>,
        line: &'a str,
        range: Range<usize>,
    ) -> ParserResult<'a, Self> {
        Self::pro_forma_main::<false>(base_context, line, range)
    }

    /// Parse a compound peptidoform ion, labile modifications have to be glycans `{Glycan:Hex}`.
    /// # Errors
    /// If the text is not valid ProForma, or if a labile modification is not a glycan.
    pub fn pro_forma_strict<'a>(value: &'a str) -> ParserResult<'a, Self> {
        Self::pro_forma_inner_strict(&Context::none().lines(0, value), value, 0..value.len())
    }

    /// See [`Self::pro_forma_strict`] and [`Self::pro_forma_inner`].
    /// # Errors
    /// If the text is not valid ProForma, or if a labile modification is not a glycan.
    pub fn pro_forma_inner_strict<'a>(
        base_context: &Context<'a>,
        line: &'a str,
        range: Range<usize>,
    ) -> ParserResult<'a, Self> {
        Self::pro_forma_main::<true>(base_context, line, range)
    }

    /// A `+` directly after a `/` is the sign of a charge, not a chimeric separator.
    pub(super) fn pro_forma_main<'a, const STRICT: bool>(
        base_context: &Context<'a>,
        line: &'a str,
        range: Range<usize>,
    ) -> ParserResult<'a, Self> {
        let bytes = line.as_bytes();
        split_outside_enclosures(line, range, "+", |index| {
            index == 0 || bytes[index - 1] != b'/'
        })
        .into_iter()
        .map(|ion| PeptidoformIon::pro_forma_main::<STRICT>(base_context, line, ion))
        .collect::<Result<Vec<_>, _>>()
        .map(Self)
    }
}

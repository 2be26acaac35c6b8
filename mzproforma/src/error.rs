//! The [`ProFormaErrorKind`] which makes it easy for users of the parser to match on the exact failure.

use context_error::ErrorKind;
use serde::{Deserialize, Serialize};

/// All reasons a ProForma definition can be rejected
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ProFormaErrorKind {
    /// A bracket, brace, parenthesis, or angle bracket was opened but never closed
    #[default]
    UnterminatedBlock,
    /// A ranged modification `(...)` with a stray closing or a missing closing parenthesis
    UnbalancedRange,
    /// A global modification without `@` or with an invalid target
    MalformedGlobalModification,
    /// A labile modification that is not a glycan, only raised in strict mode
    InvalidLabileModification,
    /// A residue that is not present in the residue mass table
    UnknownResidueSymbol,
    /// A count, charge, or limit that is not a valid number
    InvalidNumber,
    /// A modification that has nothing to attach to, or text where nothing is allowed
    MisplacedModification,
    /// An empty peptidoform, for example between two `//` separators
    EmptySequence,
    /// A name that does not describe any known modification kind
    InvalidModificationKind,
    /// Multiple chains or chimeric peptidoforms where only a single one was expected
    UnexpectedComposition,
}

impl ErrorKind for ProFormaErrorKind {
    type Settings = ();
    fn descriptor(&self) -> &'static str {
        "error"
    }
    fn ignored(&self, _settings: Self::Settings) -> bool {
        false
    }
    fn is_error(&self, _settings: Self::Settings) -> bool {
        true
    }
}

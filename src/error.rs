use thiserror::Error;

/// A malformed token found while translating a single line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    #[error("invalid address `{0}` (expected 0..=32767)")]
    InvalidAddress(String),
    #[error("invalid destination `{0}`")]
    InvalidDestination(String),
    #[error("invalid computation `{0}`")]
    InvalidComputation(String),
    #[error("invalid jump `{0}`")]
    InvalidJump(String),
    #[error("empty label `()`")]
    EmptyLabel,
    #[error("symbol redefined: `{0}`")]
    DuplicateSymbol(String),
    #[error("unrecognized line `{0}`")]
    UnrecognizedLine(String),
}

/// First failure of a translation run, tagged with its 1-based source line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct LineError {
    pub line: usize,
    pub kind: AsmError,
}

impl LineError {
    pub fn new(line: usize, kind: AsmError) -> Self {
        Self { line, kind }
    }
}

pub type Result<T, E = AsmError> = std::result::Result<T, E>;

//! Error types for dnalign core operations

use thiserror::Error;

/// Result type for alignment operations
pub type AlignResult<T> = Result<T, AlignError>;

/// Errors that can occur while parsing input or aligning a partial sequence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    #[error("Malformed line: {reason}")]
    MalformedLine { reason: String },

    #[error("Sequence too short: '{sequence}' has {len} symbols, need at least 2")]
    SequenceTooShort { sequence: String, len: usize },

    #[error("Invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error(
        "Infeasible alignment: partial has {interior_symbols} interior symbols \
         but reference only has {interior_slots} interior slots"
    )]
    InfeasibleAlignment {
        interior_symbols: usize,
        interior_slots: usize,
    },

    #[error("Resource exhausted: {candidates} candidates exceed the limit of {limit}")]
    ResourceExhausted { candidates: u64, limit: u64 },

    #[error("Combination count for n={n}, k={k} does not fit in 64 bits")]
    CombinationOverflow { n: usize, k: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Length mismatch: reference has {reference} symbols, candidate has {candidate}")]
    LengthMismatch { reference: usize, candidate: usize },

    #[error("Line {line}: {source}")]
    LineFailed {
        line: usize,
        #[source]
        source: Box<AlignError>,
    },
}

impl AlignError {
    pub fn malformed<S: Into<String>>(reason: S) -> Self {
        Self::MalformedLine {
            reason: reason.into(),
        }
    }

    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Attach a 1-based line number to an error
    pub fn at_line(self, line: usize) -> Self {
        Self::LineFailed {
            line,
            source: Box::new(self),
        }
    }

    /// The underlying error, with any line wrapper removed
    pub fn root(&self) -> &AlignError {
        match self {
            Self::LineFailed { source, .. } => source.root(),
            other => other,
        }
    }
}

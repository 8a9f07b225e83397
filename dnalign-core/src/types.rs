use crate::error::{AlignError, AlignResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder for an unfilled position in a candidate
pub const GAP: char = '-';

/// A choice of interior slots, strictly increasing
pub type IndexCombination = Vec<usize>;

/// An immutable sequence of at least two symbols.
///
/// The first and last symbols are the anchors; everything in between is the
/// interior. Whitespace is rejected at construction. A gap symbol is allowed
/// (it never matches a candidate symbol) but a sequence holding one cannot be
/// placed as a partial, see [`Sequence::gap_position`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sequence {
    symbols: Vec<char>,
}

impl Sequence {
    pub fn new(text: &str) -> AlignResult<Self> {
        let symbols: Vec<char> = text.chars().collect();

        if let Some((position, &symbol)) = symbols
            .iter()
            .enumerate()
            .find(|(_, c)| c.is_whitespace())
        {
            return Err(AlignError::InvalidSymbol { symbol, position });
        }

        if symbols.len() < 2 {
            return Err(AlignError::SequenceTooShort {
                sequence: text.to_string(),
                len: symbols.len(),
            });
        }

        Ok(Self { symbols })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    // A valid sequence always holds both anchors
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn first(&self) -> char {
        self.symbols[0]
    }

    pub fn last(&self) -> char {
        self.symbols[self.symbols.len() - 1]
    }

    /// Symbols between the two anchors
    pub fn interior(&self) -> &[char] {
        &self.symbols[1..self.symbols.len() - 1]
    }

    pub fn interior_len(&self) -> usize {
        self.symbols.len() - 2
    }

    pub fn as_slice(&self) -> &[char] {
        &self.symbols
    }

    /// Position of the first gap symbol, if any
    pub fn gap_position(&self) -> Option<usize> {
        self.symbols.iter().position(|&c| c == GAP)
    }
}

impl FromStr for Sequence {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Sequence {
    type Error = AlignError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Sequence> for String {
    fn from(seq: Sequence) -> Self {
        seq.to_string()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// A full-length placement of a partial sequence against a reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    symbols: Vec<char>,
}

impl Candidate {
    pub(crate) fn from_symbols(symbols: Vec<char>) -> Self {
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.symbols
    }

    /// Number of gap positions
    pub fn gap_count(&self) -> usize {
        self.symbols.iter().filter(|&&c| c == GAP).count()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl Serialize for Candidate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Best placement found for one reference/partial pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alignment {
    pub candidate: Candidate,
    pub score: i32,
    pub candidates_evaluated: u64,
}

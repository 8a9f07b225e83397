//! Affine gap scoring of candidates against a reference.

use crate::error::{AlignError, AlignResult};
use crate::types::{Candidate, Sequence, GAP};
use serde::{Deserialize, Serialize};

/// Score contributions for each kind of position.
///
/// Opening a gap run costs `indel_start`; each further gap in the same run
/// costs `indel_extend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringScheme {
    pub match_score: i32,
    pub mismatch: i32,
    pub indel_start: i32,
    pub indel_extend: i32,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_score: 3,
            mismatch: -3,
            indel_start: -8,
            indel_extend: -1,
        }
    }
}

/// Scores candidates with a fixed scheme
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    scheme: ScoringScheme,
}

impl Scorer {
    pub fn new(scheme: ScoringScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> &ScoringScheme {
        &self.scheme
    }

    /// Score a candidate built for `reference`.
    ///
    /// Candidates produced by [`crate::candidate::build_candidate`] always have
    /// the reference's length.
    pub fn score(&self, reference: &Sequence, candidate: &Candidate) -> i32 {
        debug_assert_eq!(reference.len(), candidate.len());
        self.score_pairs(reference.as_slice(), candidate.as_slice())
    }

    /// Score raw symbol slices, checking that their lengths agree
    pub fn score_symbols(&self, reference: &[char], candidate: &[char]) -> AlignResult<i32> {
        if reference.len() != candidate.len() {
            return Err(AlignError::LengthMismatch {
                reference: reference.len(),
                candidate: candidate.len(),
            });
        }
        Ok(self.score_pairs(reference, candidate))
    }

    fn score_pairs(&self, reference: &[char], candidate: &[char]) -> i32 {
        let mut total = 0;
        let mut in_gap = false;

        for (&expected, &symbol) in reference.iter().zip(candidate) {
            if symbol == GAP {
                total += if in_gap {
                    self.scheme.indel_extend
                } else {
                    self.scheme.indel_start
                };
                in_gap = true;
            } else {
                in_gap = false;
                total += if symbol == expected {
                    self.scheme.match_score
                } else {
                    self.scheme.mismatch
                };
            }
        }

        total
    }
}

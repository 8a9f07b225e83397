//! Exhaustive anchored aligner.
//!
//! Enumerates every placement of a partial sequence's interior into the
//! reference's interior, scores each placement and keeps the best one.

use crate::candidate::build_candidate;
use crate::combinations::CombinationIter;
use crate::combinatorics::binomial;
use crate::error::{AlignError, AlignResult};
use crate::scoring::{Scorer, ScoringScheme};
use crate::types::{Alignment, IndexCombination, Sequence};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Score, enumeration index and combination of one candidate
type Scored = (i32, usize, IndexCombination);

/// Default upper bound on candidates evaluated for a single pair
pub const DEFAULT_MAX_CANDIDATES: u64 = 5_000_000;

/// Parameters for the aligner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignerConfig {
    /// Scoring scheme applied to every candidate
    pub scheme: ScoringScheme,
    /// Refuse pairs with more candidates than this; `None` disables the guard
    pub max_candidates: Option<u64>,
    /// Score candidates on the rayon pool
    pub parallel: bool,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            scheme: ScoringScheme::default(),
            max_candidates: Some(DEFAULT_MAX_CANDIDATES),
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Aligner {
    config: AlignerConfig,
    scorer: Scorer,
}

impl Aligner {
    pub fn new(config: AlignerConfig) -> Self {
        let scorer = Scorer::new(config.scheme);
        Self { config, scorer }
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    /// Number of candidates a pair would produce, after feasibility and
    /// resource checks. A partial holding a gap symbol is rejected since its
    /// candidates would carry extra gaps.
    pub fn candidate_count(&self, reference: &Sequence, partial: &Sequence) -> AlignResult<u64> {
        let n = reference.interior_len();
        let k = partial.interior_len();

        if let Some(position) = partial.gap_position() {
            return Err(AlignError::InvalidSymbol {
                symbol: crate::types::GAP,
                position,
            });
        }

        if k > n {
            return Err(AlignError::InfeasibleAlignment {
                interior_symbols: k,
                interior_slots: n,
            });
        }

        let count = binomial(n as u64, k as u64).ok_or(AlignError::CombinationOverflow { n, k })?;
        if let Some(limit) = self.config.max_candidates {
            if count > limit {
                return Err(AlignError::ResourceExhausted {
                    candidates: count,
                    limit,
                });
            }
        }

        Ok(count)
    }

    /// Best-scoring candidate for `partial` placed into `reference`.
    ///
    /// Ties go to the lexicographically first combination, so serial and
    /// parallel runs report the same candidate.
    pub fn best_alignment(&self, reference: &Sequence, partial: &Sequence) -> AlignResult<Alignment> {
        let count = self.candidate_count(reference, partial)?;
        // Combinations are produced lazily so memory stays flat however
        // large the search is
        let combos = CombinationIter::new(reference.interior_len(), partial.interior_len())?;
        log::debug!(
            "Scoring {} candidates for {} | {}",
            count,
            reference,
            partial
        );

        let reference_len = reference.len();
        let score_at = |(i, combo): (usize, IndexCombination)| {
            let candidate = build_candidate(reference_len, partial, &combo);
            (self.scorer.score(reference, &candidate), i, combo)
        };
        // Lower index wins among equal scores
        let pick = |a: &Scored, b: &Scored| a.0.cmp(&b.0).then(b.1.cmp(&a.1));

        let best = if self.config.parallel {
            combos.enumerate().par_bridge().map(score_at).max_by(pick)
        } else {
            combos.enumerate().map(score_at).max_by(pick)
        };

        let (score, _, combo) =
            best.ok_or_else(|| AlignError::invalid_argument("no candidates generated"))?;
        let candidate = build_candidate(reference_len, partial, &combo);
        log::trace!("Best candidate {} scored {}", candidate, score);

        Ok(Alignment {
            candidate,
            score,
            candidates_evaluated: count,
        })
    }

    /// Best score for `partial` placed into `reference`
    pub fn best_score(&self, reference: &Sequence, partial: &Sequence) -> AlignResult<i32> {
        self.best_alignment(reference, partial).map(|a| a.score)
    }
}

/// Best score using the default configuration
pub fn best_score(reference: &Sequence, partial: &Sequence) -> AlignResult<i32> {
    Aligner::default().best_score(reference, partial)
}

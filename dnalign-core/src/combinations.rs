//! Index combination generation.
//!
//! [`index_combinations`] enumerates every way of choosing `k` slots out of
//! `n` without reordering. Output is in lexicographic order and every
//! combination is strictly increasing with values in `[0, n)`; both properties
//! are part of the contract, not an accident of the recursion.

use crate::combinatorics::{binomial, binomial_with_replacement};
use crate::error::{AlignError, AlignResult};
use crate::types::IndexCombination;

/// All C(n, k) strictly increasing k-length index sequences over `0..n`.
///
/// # Errors
///
/// `InvalidArgument` when `k > n`, `CombinationOverflow` when C(n, k) does
/// not fit in 64 bits.
pub fn index_combinations(n: usize, k: usize) -> AlignResult<Vec<IndexCombination>> {
    if k > n {
        return Err(AlignError::invalid_argument(format!(
            "cannot choose {} indices from {}",
            k, n
        )));
    }
    let count = binomial(n as u64, k as u64).ok_or(AlignError::CombinationOverflow { n, k })?;
    let capacity = usize::try_from(count).map_err(|_| AlignError::CombinationOverflow { n, k })?;

    Ok(build_combinations(n, k, capacity))
}

fn build_combinations(n: usize, k: usize, capacity: usize) -> Vec<IndexCombination> {
    match k {
        0 => vec![Vec::new()],
        1 => (0..n).map(|i| vec![i]).collect(),
        _ => {
            // The first k-1 slots can never hold the greatest index
            let prefixes = build_combinations(n - 1, k - 1, 0);
            let mut combos = Vec::with_capacity(capacity);
            for prefix in prefixes {
                let start = prefix[prefix.len() - 1] + 1;
                for last in start..n {
                    let mut combo = Vec::with_capacity(k);
                    combo.extend_from_slice(&prefix);
                    combo.push(last);
                    combos.push(combo);
                }
            }
            combos
        }
    }
}

/// Lazy lexicographic enumeration of the same combinations as
/// [`index_combinations`], holding one combination at a time.
#[derive(Debug, Clone)]
pub struct CombinationIter {
    n: usize,
    next: Option<IndexCombination>,
}

impl CombinationIter {
    /// # Errors
    ///
    /// `InvalidArgument` when `k > n`.
    pub fn new(n: usize, k: usize) -> AlignResult<Self> {
        if k > n {
            return Err(AlignError::invalid_argument(format!(
                "cannot choose {} indices from {}",
                k, n
            )));
        }
        Ok(Self {
            n,
            next: Some((0..k).collect()),
        })
    }
}

impl Iterator for CombinationIter {
    type Item = IndexCombination;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let k = current.len();

        // Rightmost slot that can still move up
        if let Some(i) = (0..k).rev().find(|&i| current[i] < self.n - k + i) {
            let mut successor = current.clone();
            successor[i] += 1;
            for j in i + 1..k {
                successor[j] = successor[j - 1] + 1;
            }
            self.next = Some(successor);
        }

        Some(current)
    }
}

/// All non-decreasing k-length index sequences over `0..n`.
///
/// Count is C(n + k - 1, k). `k = 0` yields one empty combination; `n = 0`
/// with `k > 0` yields nothing.
pub fn index_combinations_with_replacement(
    n: usize,
    k: usize,
) -> AlignResult<Vec<IndexCombination>> {
    let count = binomial_with_replacement(n as u64, k as u64)
        .ok_or(AlignError::CombinationOverflow { n, k })?;
    let capacity = usize::try_from(count).map_err(|_| AlignError::CombinationOverflow { n, k })?;

    Ok(build_combinations_with_replacement(n, k, capacity))
}

fn build_combinations_with_replacement(
    n: usize,
    k: usize,
    capacity: usize,
) -> Vec<IndexCombination> {
    match k {
        0 => vec![Vec::new()],
        1 => (0..n).map(|i| vec![i]).collect(),
        _ => {
            let prefixes = build_combinations_with_replacement(n, k - 1, 0);
            let mut combos = Vec::with_capacity(capacity);
            for prefix in prefixes {
                // Repeats allowed, so the next value may equal the previous one
                let start = prefix[prefix.len() - 1];
                for last in start..n {
                    let mut combo = Vec::with_capacity(k);
                    combo.extend_from_slice(&prefix);
                    combo.push(last);
                    combos.push(combo);
                }
            }
            combos
        }
    }
}

/// Concatenate a sequence of sequences into one sequence.
pub fn flatten<T, I>(nested: I) -> Vec<T>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    nested.into_iter().flatten().collect()
}

/// Every index of every combination written out as decimal text, in order.
pub fn digits(combinations: &[IndexCombination]) -> String {
    flatten(combinations.iter().cloned())
        .iter()
        .map(|i| i.to_string())
        .collect()
}

/// Check the generator's postcondition for a given output.
///
/// True when every combination has length `k`, is strictly increasing with
/// values in `[0, n)`, and the list is strictly lexicographically increasing
/// (which also makes the combinations distinct).
pub fn is_canonical(combinations: &[IndexCombination], n: usize, k: usize) -> bool {
    let each_valid = combinations.iter().all(|combo| {
        combo.len() == k
            && combo.iter().all(|&i| i < n)
            && combo.windows(2).all(|w| w[0] < w[1])
    });
    let ordered = combinations.windows(2).all(|w| w[0] < w[1]);
    each_valid && ordered
}

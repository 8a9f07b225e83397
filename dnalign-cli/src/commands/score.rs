//! Score command implementation - score one explicit candidate

use anyhow::Result;
use dnalign_core::{Scorer, Sequence};

use crate::error::CliError;

pub fn execute(reference: &str, candidate: &str) -> Result<()> {
    let score = score_candidate(reference, candidate)?;
    println!("{}", score);
    Ok(())
}

/// Score `candidate` (which may contain gaps) against `reference`
pub fn score_candidate(reference: &str, candidate: &str) -> Result<i32> {
    let reference = Sequence::new(reference).map_err(CliError::from)?;
    let symbols: Vec<char> = candidate.chars().collect();
    let score = Scorer::default()
        .score_symbols(reference.as_slice(), &symbols)
        .map_err(CliError::from)?;
    log::debug!("{} vs {} scored {}", reference, candidate, score);
    Ok(score)
}

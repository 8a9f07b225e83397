//! Combos command implementation - list index combinations

use anyhow::{Context, Result};
use dnalign_core::combinations::{index_combinations, index_combinations_with_replacement};
use dnalign_core::IndexCombination;

use crate::error::CliError;

pub fn execute(n: usize, k: usize, with_replacement: bool) -> Result<()> {
    let combos = generate(n, k, with_replacement)?;
    log::info!(
        "{} combinations of {} from {}{}",
        combos.len(),
        k,
        n,
        if with_replacement { " with replacement" } else { "" }
    );

    let output = render(&combos);
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

pub fn generate(n: usize, k: usize, with_replacement: bool) -> Result<Vec<IndexCombination>> {
    let combos = if with_replacement {
        index_combinations_with_replacement(n, k)
    } else {
        index_combinations(n, k)
    };
    combos
        .map_err(CliError::from)
        .with_context(|| format!("Failed to generate combinations for n={}, k={}", n, k))
}

/// One combination per line, indices separated by spaces
pub fn render(combos: &[IndexCombination]) -> String {
    combos
        .iter()
        .map(|combo| {
            combo
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

use crate::types::{Candidate, Sequence, GAP};

/// Place `partial` into a gap-filled row of `reference_len` symbols.
///
/// The anchors go to the first and last positions and interior symbol `i`
/// goes to `combination[i] + 1`, since combinations index interior slots only.
///
/// # Panics
///
/// If `combination` does not hold exactly one slot per interior symbol of
/// `partial`, or a slot falls outside the reference interior. Both mean the
/// combination was generated for a different pair.
pub fn build_candidate(reference_len: usize, partial: &Sequence, combination: &[usize]) -> Candidate {
    assert!(reference_len >= 2, "reference must hold both anchors");
    assert_eq!(
        combination.len(),
        partial.interior_len(),
        "combination length must match the partial's interior length"
    );

    let mut symbols = vec![GAP; reference_len];
    symbols[0] = partial.first();
    symbols[reference_len - 1] = partial.last();

    for (&slot, &symbol) in combination.iter().zip(partial.interior()) {
        assert!(
            slot < reference_len - 2,
            "slot {} outside reference interior of {}",
            slot,
            reference_len - 2
        );
        symbols[slot + 1] = symbol;
    }

    Candidate::from_symbols(symbols)
}

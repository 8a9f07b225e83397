use dnalign_core::*;

fn seq(s: &str) -> Sequence {
    Sequence::new(s).expect("valid sequence")
}

#[test]
fn end_to_end_batch() {
    let output = align_text("GAAAAAAT | GAAT\nGCATGCT | GATTACA").expect("align");
    assert_eq!(output, "1\n-3");
}

#[test]
fn end_to_end_is_reproducible() {
    let input = "GAAAAAAT | GAAT\nGCATGCT | GATTACA\nACGTTGCAAC | ATGC\nTTTTTTTTT | TAAT";
    let first = align_text(input).expect("align");
    for _ in 0..5 {
        assert_eq!(align_text(input).expect("align"), first);
    }
}

#[test]
fn literal_scores() {
    let scorer = Scorer::default();
    let reference: Vec<char> = "GAAAAAAT".chars().collect();
    let scattered: Vec<char> = "G--A-A-T".chars().collect();
    let grouped: Vec<char> = "GAA----T".chars().collect();
    assert_eq!(scorer.score_symbols(&reference, &scattered), Ok(-13));
    assert_eq!(scorer.score_symbols(&reference, &grouped), Ok(1));
}

#[test]
fn equal_lengths_place_interior_directly() {
    let reference = seq("GCATGCT");
    let partial = seq("GATTACA");
    let combos = index_combinations(reference.interior_len(), partial.interior_len()).unwrap();
    assert_eq!(combos, vec![vec![0, 1, 2, 3, 4]]);

    let alignment = Aligner::default().best_alignment(&reference, &partial).unwrap();
    assert_eq!(alignment.candidates_evaluated, 1);
    assert_eq!(alignment.candidate.gap_count(), 0);
    assert_eq!(alignment.candidate.to_string(), "GATTACA");
}

#[test]
fn anchors_only_partial_gaps_whole_interior() {
    let reference = seq("GCATGCT");
    let partial = seq("GT");
    let combos = index_combinations(reference.interior_len(), partial.interior_len()).unwrap();
    assert_eq!(combos.len(), 1);
    assert!(combos[0].is_empty());

    let alignment = Aligner::default().best_alignment(&reference, &partial).unwrap();
    assert_eq!(alignment.candidate.to_string(), "G-----T");
    assert_eq!(alignment.score, 3 - 8 - 4 + 3);
}

#[test]
fn two_symbol_pair() {
    assert_eq!(best_score(&seq("GT"), &seq("GT")), Ok(6));
    assert_eq!(best_score(&seq("GT"), &seq("AT")), Ok(0));
}

#[test]
fn infeasible_alignment_is_signalled() {
    let err = best_score(&seq("GAT"), &seq("GATTACA")).unwrap_err();
    assert_eq!(
        err,
        AlignError::InfeasibleAlignment {
            interior_symbols: 5,
            interior_slots: 1,
        }
    );

    let err = align_text("GAT | GATTACA").unwrap_err();
    assert!(matches!(err, AlignError::LineFailed { line: 1, .. }));
    assert!(matches!(err.root(), AlignError::InfeasibleAlignment { .. }));
}

#[test]
fn oversized_search_fails_fast() {
    let reference = seq(&format!("G{}T", "A".repeat(60)));
    let partial = seq(&format!("G{}T", "A".repeat(30)));
    let err = best_score(&reference, &partial).unwrap_err();
    assert!(matches!(
        err,
        AlignError::ResourceExhausted { limit: DEFAULT_MAX_CANDIDATES, .. }
    ));
}

#[test]
fn skip_policy_isolates_failures() {
    let runner = BatchRunner::new(Aligner::default(), ErrorPolicy::Skip);
    let report = runner
        .run("no separator here\nGAAAAAAT | GAAT\nGAAT | G-T\nGCATGCT | GATTACA\n")
        .expect("skip never fails");
    assert_eq!(report.render(), "1\n-3");
    let failed: Vec<usize> = report.failures.iter().map(|f| f.line).collect();
    assert_eq!(failed, vec![1, 3]);
    assert!(report.failures[1].error.contains("gap symbol"));
}

#[test]
fn gapped_reference_is_aligned() {
    // The reference gap is just another symbol the candidate can fail to match
    let output = align_text("GA-T | GAT\nGA--AT | GAAT").unwrap();
    assert_eq!(output, "1\n3");
}

#[test]
fn report_serializes_to_json() {
    let report = BatchRunner::default().run("GAAAAAAT | GAAT").unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["outcomes"][0]["alignment"]["score"], 1);
    assert_eq!(json["outcomes"][0]["alignment"]["candidate"], "GAA----T");
    assert_eq!(json["outcomes"][0]["reference"], "GAAAAAAT");
    assert_eq!(json["failures"].as_array().unwrap().len(), 0);
}

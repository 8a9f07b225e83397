//! Line-oriented batch driver.
//!
//! Input is newline-separated `REFERENCE | PARTIAL` pairs. Each line is parsed
//! and aligned on its own; a failure on one line never affects another.

use crate::aligner::Aligner;
use crate::error::{AlignError, AlignResult};
use crate::types::{Alignment, Sequence, GAP};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between the reference and the partial on each line
pub const SEPARATOR: &str = " | ";

/// What to do with a line that fails to parse or align
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first failing line and return its error
    #[default]
    Halt,
    /// Log the failure, leave the line out of the output and continue
    Skip,
}

impl FromStr for ErrorPolicy {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "halt" => Ok(Self::Halt),
            "skip" => Ok(Self::Skip),
            other => Err(AlignError::invalid_argument(format!(
                "unknown error policy '{}', expected 'halt' or 'skip'",
                other
            ))),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Halt => write!(f, "halt"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

/// Split a `REFERENCE | PARTIAL` line into its two sequences
pub fn parse_line(line: &str) -> AlignResult<(Sequence, Sequence)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut parts = line.split(SEPARATOR);

    let (reference, partial) = match (parts.next(), parts.next(), parts.next()) {
        (Some(reference), Some(partial), None) => (reference, partial),
        (_, None, _) => {
            return Err(AlignError::malformed(format!(
                "expected 'REFERENCE{}PARTIAL', got '{}'",
                SEPARATOR, line
            )))
        }
        _ => {
            return Err(AlignError::malformed(format!(
                "more than one '{}' separator in '{}'",
                SEPARATOR.trim(),
                line
            )))
        }
    };

    let reference = Sequence::new(reference)
        .map_err(|e| AlignError::malformed(format!("reference: {}", e)))?;
    let partial =
        Sequence::new(partial).map_err(|e| AlignError::malformed(format!("partial: {}", e)))?;
    if let Some(position) = partial.gap_position() {
        return Err(AlignError::malformed(format!(
            "partial: gap symbol '{}' at position {}",
            GAP, position
        )));
    }

    Ok((reference, partial))
}

/// A successfully aligned line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineOutcome {
    /// 1-based line number in the input
    pub line: usize,
    pub reference: Sequence,
    pub partial: Sequence,
    pub alignment: Alignment,
}

/// A line that was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineFailure {
    pub line: usize,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<LineOutcome>,
    pub failures: Vec<LineFailure>,
}

impl BatchReport {
    pub fn scores(&self) -> Vec<i32> {
        self.outcomes.iter().map(|o| o.alignment.score).collect()
    }

    /// One best score per line, joined by newlines
    pub fn render(&self) -> String {
        self.outcomes
            .iter()
            .map(|o| o.alignment.score.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Score followed by the winning candidate, one line per input line
    pub fn render_alignments(&self) -> String {
        self.outcomes
            .iter()
            .map(|o| format!("{}\t{}", o.alignment.score, o.alignment.candidate))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Runs an [`Aligner`] over every line of an input block
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    aligner: Aligner,
    policy: ErrorPolicy,
}

impl BatchRunner {
    pub fn new(aligner: Aligner, policy: ErrorPolicy) -> Self {
        Self { aligner, policy }
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    pub fn run(&self, input: &str) -> AlignResult<BatchReport> {
        let trimmed = input.trim_end_matches('\n');
        if trimmed.is_empty() {
            log::debug!("Empty input, nothing to align");
            return Ok(BatchReport::default());
        }

        let lines: Vec<(usize, &str)> = trimmed
            .split('\n')
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .collect();
        log::debug!("Aligning {} lines", lines.len());

        let align_line = |&(number, line): &(usize, &str)| -> AlignResult<LineOutcome> {
            let (reference, partial) = parse_line(line)?;
            let alignment = self.aligner.best_alignment(&reference, &partial)?;
            Ok(LineOutcome {
                line: number,
                reference,
                partial,
                alignment,
            })
        };

        let results: Vec<AlignResult<LineOutcome>> = if self.aligner.config().parallel {
            lines.par_iter().map(align_line).collect()
        } else {
            lines.iter().map(align_line).collect()
        };

        let mut report = BatchReport::default();
        for ((number, _), result) in lines.iter().zip(results) {
            match result {
                Ok(outcome) => report.outcomes.push(outcome),
                Err(e) => match self.policy {
                    ErrorPolicy::Halt => return Err(e.at_line(*number)),
                    ErrorPolicy::Skip => {
                        log::warn!("Skipping line {}: {}", number, e);
                        report.failures.push(LineFailure {
                            line: *number,
                            error: e.to_string(),
                        });
                    }
                },
            }
        }

        Ok(report)
    }
}

/// Align every line of `input` with the default aligner, halting on errors
pub fn align_text(input: &str) -> AlignResult<String> {
    BatchRunner::default().run(input).map(|report| report.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aligner::AlignerConfig;

    #[test]
    fn test_parse_line() {
        let (reference, partial) = parse_line("GAAAAAAT | GAAT").unwrap();
        assert_eq!(reference.to_string(), "GAAAAAAT");
        assert_eq!(partial.to_string(), "GAAT");
    }

    #[test]
    fn test_parse_line_strips_carriage_return() {
        let (_, partial) = parse_line("GAAAAAAT | GAAT\r").unwrap();
        assert_eq!(partial.to_string(), "GAAT");
    }

    #[test]
    fn test_parse_line_allows_gapped_reference() {
        let (reference, _) = parse_line("GA-T | GAT").unwrap();
        assert_eq!(reference.gap_position(), Some(2));
        assert_eq!(align_text("GA-T | GAT").unwrap(), "1");
    }

    #[test]
    fn test_parse_line_errors() {
        for line in [
            "GAAAAAAT GAAT",
            "GAAAAAAT|GAAT",
            "",
            "GAT | GT | GT",
            "G | GT",
            "GAT | T",
            "GAAT | G-T",
        ] {
            assert!(
                matches!(parse_line(line), Err(AlignError::MalformedLine { .. })),
                "{:?}",
                line
            );
        }
    }

    #[test]
    fn test_align_text() {
        let output = align_text("GAAAAAAT | GAAT\nGCATGCT | GATTACA").unwrap();
        assert_eq!(output, "1\n-3");
    }

    #[test]
    fn test_trailing_newlines() {
        let output = align_text("GAAAAAAT | GAAT\n\n").unwrap();
        assert_eq!(output, "1");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(align_text("").unwrap(), "");
        assert_eq!(align_text("\n").unwrap(), "");
    }

    #[test]
    fn test_halt_reports_line_number() {
        let err = align_text("GAAAAAAT | GAAT\nbroken\nGCATGCT | GATTACA").unwrap_err();
        assert!(matches!(err, AlignError::LineFailed { line: 2, .. }));
        assert!(matches!(err.root(), AlignError::MalformedLine { .. }));
    }

    #[test]
    fn test_skip_keeps_other_lines() {
        let runner = BatchRunner::new(Aligner::default(), ErrorPolicy::Skip);
        let report = runner
            .run("GAAAAAAT | GAAT\nGAT | GAAAT\nGCATGCT | GATTACA")
            .unwrap();
        assert_eq!(report.scores(), vec![1, -3]);
        assert_eq!(report.outcomes[1].line, 3);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].line, 2);
        assert!(report.failures[0].error.contains("Infeasible"));
    }

    #[test]
    fn test_serial_runner_preserves_order() {
        let aligner = Aligner::new(AlignerConfig {
            parallel: false,
            ..Default::default()
        });
        let report = BatchRunner::new(aligner, ErrorPolicy::Halt)
            .run("GCATGCT | GATTACA\nGAAAAAAT | GAAT")
            .unwrap();
        assert_eq!(report.render(), "-3\n1");
        assert_eq!(report.render_alignments(), "-3\tGATTACA\n1\tGAA----T");
    }

    #[test]
    fn test_error_policy_parse() {
        assert_eq!("halt".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Halt);
        assert_eq!("SKIP".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Skip);
        assert!("retry".parse::<ErrorPolicy>().is_err());
        assert_eq!(ErrorPolicy::Skip.to_string(), "skip");
    }
}

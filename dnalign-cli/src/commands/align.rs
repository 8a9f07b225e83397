//! Align command implementation - best anchored score for every input line

use anyhow::{Context, Result};
use dnalign_core::{Aligner, BatchReport, BatchRunner, ErrorPolicy};
use std::io::Read;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::CliError;
use crate::{OnError, OutputFormat};

/// Where the input block comes from
#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Text(String),
}

impl InputSource {
    pub fn from_args(input: Option<PathBuf>, text: Option<String>) -> Self {
        match (text, input) {
            (Some(text), _) => Self::Text(text),
            (None, Some(path)) if path.as_os_str() != "-" => Self::File(path),
            _ => Self::Stdin,
        }
    }

    pub fn read(self) -> Result<String> {
        match self {
            Self::Text(text) => Ok(text),
            Self::File(path) => {
                if !path.exists() {
                    return Err(CliError::file_not_found(path).into());
                }
                let text = std::fs::read_to_string(&path).map_err(|e| {
                    CliError::io(format!("Failed to read input file {}: {}", path.display(), e))
                })?;
                Ok(text)
            }
            Self::Stdin => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|e| CliError::io(format!("Failed to read stdin: {}", e)))?;
                Ok(buffer)
            }
        }
    }
}

pub fn execute(
    config: &Config,
    source: InputSource,
    on_error: Option<OnError>,
    max_candidates: Option<u64>,
    serial: bool,
    show_alignment: bool,
    format: OutputFormat,
) -> Result<()> {
    let runner = build_runner(config, on_error, max_candidates, serial);
    log::debug!("Reading input from {:?}", source);
    let input = source.read()?;

    let report = runner.run(&input).map_err(CliError::from)?;
    log::info!(
        "Aligned {} lines ({} skipped)",
        report.outcomes.len(),
        report.failures.len()
    );

    let output = render(&report, show_alignment, format)?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

/// Merge config file values with command-line overrides
pub fn build_runner(
    config: &Config,
    on_error: Option<OnError>,
    max_candidates: Option<u64>,
    serial: bool,
) -> BatchRunner {
    let mut align = config.align.clone();
    if let Some(limit) = max_candidates {
        align.max_candidates = limit;
    }
    if serial {
        align.parallel = false;
    }
    let policy = on_error.map(ErrorPolicy::from).unwrap_or(align.on_error);

    log::debug!(
        "Aligner settings: max_candidates={}, parallel={}, on_error={}",
        align.max_candidates,
        align.parallel,
        policy
    );
    BatchRunner::new(Aligner::new(align.aligner_config()), policy)
}

pub fn render(report: &BatchReport, show_alignment: bool, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text if show_alignment => Ok(report.render_alignments()),
        OutputFormat::Text => Ok(report.render()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PAIRS: &str = "GAAAAAAT | GAAT\nGCATGCT | GATTACA\n";

    #[test]
    fn test_input_source_selection() {
        assert!(matches!(InputSource::from_args(None, None), InputSource::Stdin));
        assert!(matches!(
            InputSource::from_args(Some(PathBuf::from("-")), None),
            InputSource::Stdin
        ));
        assert!(matches!(
            InputSource::from_args(Some(PathBuf::from("pairs.txt")), None),
            InputSource::File(_)
        ));
        assert!(matches!(
            InputSource::from_args(Some(PathBuf::from("pairs.txt")), Some("GT | GT".into())),
            InputSource::Text(_)
        ));
    }

    #[test]
    fn test_read_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, "{}", PAIRS)?;
        let input = InputSource::File(file.path().to_path_buf()).read()?;
        assert_eq!(input, PAIRS);
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let err = InputSource::File(PathBuf::from("/nonexistent/pairs.txt"))
            .read()
            .unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().expect("cli error");
        assert!(matches!(cli_err, CliError::FileNotFound { .. }));
    }

    #[test]
    fn test_unreadable_file_is_io_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let err = InputSource::File(dir.path().to_path_buf()).read().unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().expect("cli error");
        assert!(matches!(cli_err, CliError::Io { .. }));
        assert!(cli_err.to_string().contains("Failed to read input file"));
        Ok(())
    }

    #[test]
    fn test_text_output() -> Result<()> {
        let runner = build_runner(&Config::default(), None, None, false);
        let report = runner.run(PAIRS)?;
        assert_eq!(render(&report, false, OutputFormat::Text)?, "1\n-3");
        assert_eq!(
            render(&report, true, OutputFormat::Text)?,
            "1\tGAA----T\n-3\tGATTACA"
        );
        Ok(())
    }

    #[test]
    fn test_json_output() -> Result<()> {
        let runner = build_runner(&Config::default(), None, None, true);
        let report = runner.run(PAIRS)?;
        let json: serde_json::Value = serde_json::from_str(&render(&report, false, OutputFormat::Json)?)?;
        assert_eq!(json["outcomes"][1]["alignment"]["score"], -3);
        Ok(())
    }

    #[test]
    fn test_overrides() -> Result<()> {
        let runner = build_runner(&Config::default(), Some(OnError::Skip), Some(5), true);
        assert_eq!(runner.policy(), ErrorPolicy::Skip);

        // C(6, 2) = 15 candidates exceeds the limit of 5 and is skipped
        let report = runner.run(PAIRS)?;
        assert_eq!(report.render(), "-3");
        assert_eq!(report.failures.len(), 1);
        Ok(())
    }
}

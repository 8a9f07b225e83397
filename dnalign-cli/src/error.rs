//! Error handling for the dnalign CLI

use dnalign_core::AlignError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dnalign CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Alignment error: {0}")]
    Alignment(#[source] AlignError),

    #[error("Resource error: {message}")]
    Resource { message: String },
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io { message: message.into() }
    }

    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    pub fn resource<S: Into<String>>(message: S) -> Self {
        Self::Resource { message: message.into() }
    }
}

impl From<AlignError> for CliError {
    fn from(err: AlignError) -> Self {
        let is_resource = matches!(
            err.root(),
            AlignError::ResourceExhausted { .. } | AlignError::CombinationOverflow { .. }
        );
        let is_input = matches!(
            err.root(),
            AlignError::MalformedLine { .. }
                | AlignError::SequenceTooShort { .. }
                | AlignError::InvalidSymbol { .. }
        );

        if is_resource {
            Self::resource(err.to_string())
        } else if is_input {
            Self::invalid_input(err.to_string())
        } else {
            Self::Alignment(err)
        }
    }
}

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    match error {
        CliError::FileNotFound { path } => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Check that the file path is correct: {}\n\
                 • Ensure you have read permissions for the file\n\
                 • Use '-' or omit the path to read from stdin",
                path.display()
            ));
        }

        CliError::InvalidInput { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Each line must look like 'REFERENCE | PARTIAL'\n\
                 • Both sequences need at least two symbols and no spaces\n\
                 • Only the reference may contain the gap symbol '-'\n\
                 • Use --on-error skip to continue past bad lines",
            );
        }

        CliError::Alignment(_) => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • The partial sequence must not be longer than the reference\n\
                 • Use --on-error skip to continue past infeasible lines",
            );
        }

        CliError::Config { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check your dnalign.toml configuration file\n\
                 • Use 'dnalign config --example' to generate a sample configuration\n\
                 • Verify that all configuration values are valid",
            );
        }

        CliError::Resource { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • The number of candidate placements grows combinatorially\n\
                 • Raise --max-candidates (0 disables the limit) if you can afford it\n\
                 • Shorten the sequences on the offending line",
            );
        }

        _ => {}
    }

    message
}

/// Print error with helpful suggestions and exit
pub fn print_error_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {}", format_error_with_suggestions(error));
    std::process::exit(1);
}

//! dnalign Core Library
//!
//! Anchored brute-force alignment: index combination generation, candidate
//! construction, affine gap scoring and a line-oriented batch driver.

pub mod types;
pub mod error;
pub mod combinatorics;
pub mod combinations;
pub mod candidate;
pub mod scoring;
pub mod aligner;
pub mod batch;

// Re-export commonly used types and functions
pub use types::{Alignment, Candidate, IndexCombination, Sequence, GAP};
pub use error::{AlignError, AlignResult};
pub use combinations::{index_combinations, index_combinations_with_replacement, flatten, CombinationIter};
pub use candidate::build_candidate;
pub use scoring::{Scorer, ScoringScheme};
pub use aligner::{best_score, Aligner, AlignerConfig, DEFAULT_MAX_CANDIDATES};
pub use batch::{align_text, parse_line, BatchReport, BatchRunner, ErrorPolicy};

/// Version information for the dnalign core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Command implementations for the dnalign CLI

pub mod align;
pub mod combos;
pub mod score;

//! Shape canonicalization, pattern counting and ranking

/// Occurrence counting for distinct shapes
pub mod patterns;
/// Translation-invariant shape descriptors
pub mod shape;
/// Frequency ranking and run summaries
pub mod statistics;

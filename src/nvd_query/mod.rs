//! Domain layer for NVD queries
//!
//! Pure logic between the user's question and the NVD REST API:
//! date evidence detection, date-range validation, argument sanitizing,
//! URL assembly, and shaping oversized result sets into a bounded sample.
pub mod domain;
pub mod policies;
pub mod services;

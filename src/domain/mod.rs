//! Domain layer for Naming Guardian
//!
//! CDD Principle: Domain Model - Pure business logic for filename convention enforcement
//! - Contains the conventions, classification outcomes, violations and run results
//! - Independent of infrastructure concerns like file systems or CI host APIs
//! - Expresses the ubiquitous language of naming conventions and violations

pub mod violations;

// Re-export main domain types for convenience
pub use violations::*;

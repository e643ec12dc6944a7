//! Representations of a run for the caller to persist or display.
//!
//! The pipeline itself performs no I/O; everything here is opt-in.

pub mod artifact;
pub mod csv;
pub mod table;
pub mod template;

pub use artifact::RunArtifact;

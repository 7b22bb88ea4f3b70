//! Roadmap document loading and initialisation systems.
//!
//! Resolves the JSON document into the curriculum resource, tracks progress
//! for the state transition, and attaches architecture diagrams once their
//! images arrive.

/// Deferred architecture diagram attachment for sprint detail groups.
pub mod diagram_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;

/// Roadmap document loading and conversion into the curriculum.
///
/// Degrades to an empty curriculum when the document is missing or invalid.
pub mod roadmap_loader;

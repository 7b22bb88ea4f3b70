//! Roadmap scene construction.
//!
//! Builds the sprint markers, their hidden detail groups and the
//! inter-sprint connectors once from the curriculum, plus the static
//! ambience: star field and lights.

/// Marker components for the built scene.
pub mod components;

/// Line mesh builders adapted for connectors, lesson trees and frames.
pub mod connectors;

/// Detail group geometry: category spacing, lesson tree and diagram placement.
pub mod layout;

pub mod lighting;

/// One-shot sprint marker and detail group construction.
pub mod sprint_builder;

/// Seeded random star field rendered as a point list.
pub mod star_field;

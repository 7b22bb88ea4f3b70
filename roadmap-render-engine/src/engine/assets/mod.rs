//! Roadmap data: the raw JSON document asset and the validated curriculum.
//!
//! The document mirrors the file on disk. The curriculum is what the rest of
//! the engine reads: parsed colours, world positions and lesson state.

/// Validated sprint/category/lesson model and document conversion errors.
pub mod curriculum;

/// JSON roadmap document registered as a Bevy asset.
pub mod roadmap_document;

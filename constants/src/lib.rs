//! Shared configuration for the roadmap render engine.
//!
//! Everything here is compile-time: scene layout spacing, camera framings,
//! animation timings, the scene palette and asset paths.

pub mod animation;
pub mod camera_framing;
pub mod layout;
pub mod palette;
pub mod path;

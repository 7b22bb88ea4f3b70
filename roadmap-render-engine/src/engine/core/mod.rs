//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! runtime settings and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with asset loading, scene building, navigation,
/// HUD and host RPC systems.
pub mod app_setup;

/// Application state machine and loading transitions.
///
/// Moves from loading to either the running view or the no-data state.
pub mod app_state;

/// Runtime settings and the seeded generator behind placeholder progress values.
pub mod settings;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;

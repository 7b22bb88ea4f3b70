//! Runtime systems driven by the view state and the frame clock.
//!
//! Applies view changes to the scene and camera, runs the cosmetic ambient
//! motion, and forwards state to the host page.

/// Star field and ring rotation and the active sprint pulse, with an
/// explicit start/stop clock.
pub mod ambient_motion;

/// View state and loading notifications for the host page.
pub mod host_notifications;

/// Scene visibility, sprint heights and camera shots from view changes.
pub mod view_sync;

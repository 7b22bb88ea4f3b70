//! Camera rig for the roadmap scene.
//!
//! Scripted camera shots from navigation are tweened with quadratic easing;
//! between shots the user can orbit, zoom and pan with damping.

/// Camera rig resource and the controller system driving the scene camera.
pub mod camera_rig;

/// Eased property animation.
pub mod tween;

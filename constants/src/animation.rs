/// Camera move duration for sprint and category framings (seconds)
pub const CAMERA_MOVE_SECS: f32 = 1.5;

/// Camera move duration for the overview framing (seconds)
pub const OVERVIEW_MOVE_SECS: f32 = 2.0;

/// Sprint raise/lower duration when entering or leaving the categories view (seconds)
pub const SPRINT_HEIGHT_SECS: f32 = 1.0;

/// Star field rotation about Y (radians per second)
pub const STAR_FIELD_SPIN: f32 = 0.003;

/// Sprint ring rotation (radians per second)
pub const RING_SPIN: f32 = 0.12;

/// Active sprint pulse: scale = 1 + sin(t * frequency) * amplitude
pub const PULSE_FREQUENCY: f32 = 2.0;
pub const PULSE_AMPLITUDE: f32 = 0.03;

/// Minimum time the loading overlay stays up once data is ready (seconds)
pub const LOADING_OVERLAY_MIN_SECS: f32 = 1.5;

use bevy::math::Vec3;

/// Wide framing used by the sprints view
pub const WIDE_EYE: Vec3 = Vec3::new(0.0, 15.0, 50.0);
pub const WIDE_TARGET: Vec3 = Vec3::ZERO;

/// Far framing used by the overview
pub const OVERVIEW_EYE: Vec3 = Vec3::new(0.0, 50.0, 80.0);
pub const OVERVIEW_TARGET: Vec3 = Vec3::ZERO;

/// Sprint close-up, relative to the sprint position (x and z follow the sprint, y is absolute)
pub const SPRINT_EYE_HEIGHT: f32 = 15.0;
pub const SPRINT_EYE_DISTANCE: f32 = 30.0;
pub const SPRINT_TARGET_HEIGHT: f32 = 0.0;

/// Sprint detail framing used when entering the categories view
pub const DETAIL_EYE_HEIGHT: f32 = 10.0;
pub const DETAIL_EYE_DISTANCE: f32 = 35.0;
pub const DETAIL_TARGET_HEIGHT: f32 = -5.0;

/// Category framing inside the categories view
pub const CATEGORY_EYE_HEIGHT: f32 = 5.0;
pub const CATEGORY_EYE_DISTANCE: f32 = 25.0;
pub const CATEGORY_TARGET_HEIGHT: f32 = -8.0;

/// Perspective projection
pub const FIELD_OF_VIEW_DEGREES: f32 = 60.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// Orbit distance limits for user-driven camera movement
pub const ORBIT_MIN_DISTANCE: f32 = 10.0;
pub const ORBIT_MAX_DISTANCE: f32 = 120.0;

/// Fraction of the remaining distance the rendered camera closes per frame at 60 fps
pub const ORBIT_DAMPING: f32 = 0.05;

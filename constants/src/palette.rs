use bevy::color::Color;
use bevy::math::Vec3;

/// Scene clear colour, also used as the fog colour
pub const BACKGROUND: Color = Color::srgb(0.039, 0.039, 0.059);

/// Exponential fog density
pub const FOG_DENSITY: f32 = 0.012;

pub const AMBIENT_BRIGHTNESS: f32 = 250.0;

pub struct PointLightInfo {
    pub colour: Color,
    pub intensity: f32,
    pub range: f32,
    pub position: Vec3,
}

pub const POINT_LIGHTS: &[PointLightInfo] = &[
    PointLightInfo {
        colour: Color::srgb(0.0, 0.831, 1.0),
        intensity: 4_000_000.0,
        range: 200.0,
        position: Vec3::new(50.0, 50.0, 50.0),
    },
    PointLightInfo {
        colour: Color::srgb(0.482, 0.184, 1.0),
        intensity: 4_000_000.0,
        range: 200.0,
        position: Vec3::new(-50.0, -30.0, 50.0),
    },
    PointLightInfo {
        colour: Color::srgb(1.0, 0.176, 0.573),
        intensity: 3_000_000.0,
        range: 150.0,
        position: Vec3::new(0.0, 60.0, -50.0),
    },
];

/// Star colours and the cumulative probability of picking each
pub const STAR_COLOURS: &[(f32, [f32; 3])] = &[
    (0.3, [0.0, 0.83, 1.0]),
    (0.6, [0.48, 0.18, 1.0]),
    (1.0, [1.0, 1.0, 1.0]),
];

/// Material opacities
pub const SPRINT_SPHERE_OPACITY: f32 = 0.9;
pub const SPRINT_RING_OPACITY: f32 = 0.4;
pub const CATEGORY_SPHERE_OPACITY: f32 = 0.9;
pub const LESSON_NODE_OPACITY: f32 = 0.8;
pub const LESSON_LINE_OPACITY: f32 = 0.4;
pub const SPRINT_CONNECTOR_OPACITY: f32 = 0.5;
pub const CATEGORY_CONNECTOR_OPACITY: f32 = 0.4;
pub const DIAGRAM_OPACITY: f32 = 0.95;
pub const DIAGRAM_FRAME_OPACITY: f32 = 0.6;
pub const STAR_OPACITY: f32 = 0.7;

/// HUD colours
pub const HUD_PANEL: Color = Color::srgba(0.06, 0.06, 0.10, 0.85);
pub const HUD_BUTTON: Color = Color::srgb(0.14, 0.16, 0.22);
pub const HUD_BUTTON_HOVER: Color = Color::srgb(0.22, 0.24, 0.30);
pub const HUD_TEXT: Color = Color::srgb(0.92, 0.92, 0.96);
pub const HUD_TEXT_DIM: Color = Color::srgb(0.62, 0.64, 0.70);
pub const PROGRESS_TRACK: Color = Color::srgba(1.0, 1.0, 1.0, 0.1);
pub const COMPLETED_LESSON: Color = Color::srgb(0.45, 0.95, 0.55);

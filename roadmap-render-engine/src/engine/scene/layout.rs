//! Detail group geometry, in the detail group's local space.

use bevy::prelude::*;
use constants::layout::{
    CATEGORY_CONNECTOR_INSET, CATEGORY_SPACING, DIAGRAM_PANEL_HEIGHT, DIAGRAM_PANEL_OFFSET_Y,
    LESSON_TRUNK_OVERHANG, LESSON_VERTICAL_SPACING,
};

/// X of the first category sphere, so that `count` spheres are centred on 0.
pub fn category_start_x(count: usize) -> f32 {
    -(count.saturating_sub(1) as f32 * CATEGORY_SPACING) / 2.0
}

pub fn category_offset_x(count: usize, index: usize) -> f32 {
    category_start_x(count) + index as f32 * CATEGORY_SPACING
}

/// Y of lesson `index`'s node relative to the lesson tree root.
pub fn lesson_node_y(index: usize) -> f32 {
    -((index + 1) as f32) * LESSON_VERTICAL_SPACING
}

/// Bottom of the lesson tree trunk relative to the lesson tree root.
pub fn lesson_trunk_end_y(lesson_count: usize) -> f32 {
    -(lesson_count as f32 * LESSON_VERTICAL_SPACING) - LESSON_TRUNK_OVERHANG
}

/// X extent of the connector between category `index` and `index + 1`.
pub fn category_connector_span(count: usize, index: usize) -> (f32, f32) {
    let start = category_start_x(count);
    (
        start + index as f32 * CATEGORY_SPACING + CATEGORY_CONNECTOR_INSET,
        start + (index + 1) as f32 * CATEGORY_SPACING - CATEGORY_CONNECTOR_INSET,
    )
}

/// Placement of an architecture diagram panel to the right of the categories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramPlacement {
    pub centre: Vec3,
    pub size: Vec2,
}

impl DiagramPlacement {
    /// Label anchor above the panel, relative to the panel centre.
    pub fn label_offset(&self) -> Vec3 {
        Vec3::new(0.0, self.size.y / 2.0 + 1.0, 0.0)
    }
}

/// Panel height is fixed, width follows the image aspect ratio. `None` for a
/// degenerate image.
pub fn diagram_placement(category_count: usize, image_size: UVec2) -> Option<DiagramPlacement> {
    if image_size.x == 0 || image_size.y == 0 {
        return None;
    }
    let aspect = image_size.x as f32 / image_size.y as f32;
    let width = DIAGRAM_PANEL_HEIGHT * aspect;
    let x = -category_start_x(category_count) + CATEGORY_SPACING + width / 2.0;

    Some(DiagramPlacement {
        centre: Vec3::new(x, DIAGRAM_PANEL_OFFSET_Y, 0.0),
        size: Vec2::new(width, DIAGRAM_PANEL_HEIGHT),
    })
}

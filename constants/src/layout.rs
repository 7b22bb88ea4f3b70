/// Horizontal distance between neighbouring category spheres inside a sprint
pub const CATEGORY_SPACING: f32 = 12.0;

/// Vertical distance between lesson nodes in a lesson tree
pub const LESSON_VERTICAL_SPACING: f32 = 1.8;

/// Lesson tree root offset below its category sphere
pub const LESSON_TREE_OFFSET_Y: f32 = -3.0;

/// Extra length of the lesson tree trunk past the last lesson node
pub const LESSON_TRUNK_OVERHANG: f32 = 1.0;

/// Length of the horizontal branch from the trunk to a lesson
pub const LESSON_BRANCH_LENGTH: f32 = 0.8;

/// Lesson label offset from the trunk
pub const LESSON_LABEL_OFFSET_X: f32 = 1.2;

/// Gap left between a category connector and the category sphere centre
pub const CATEGORY_CONNECTOR_INSET: f32 = 2.5;

pub const SPRINT_SPHERE_RADIUS: f32 = 4.0;
pub const SPRINT_RING_INNER_RADIUS: f32 = 5.0;
pub const SPRINT_RING_OUTER_RADIUS: f32 = 5.5;
pub const CATEGORY_SPHERE_RADIUS: f32 = 2.0;
pub const LESSON_NODE_RADIUS: f32 = 0.2;

/// Label anchor heights above their owning object
pub const SPRINT_LABEL_OFFSET_Y: f32 = 6.0;
pub const CATEGORY_LABEL_OFFSET_Y: f32 = 3.5;

/// Height a focused sprint is raised to while its categories are shown
pub const FOCUSED_SPRINT_HEIGHT: f32 = 15.0;

/// Architecture diagram panels are scaled to this height, width follows the image aspect
pub const DIAGRAM_PANEL_HEIGHT: f32 = 10.0;

/// Vertical placement of the diagram panel centre within the detail group
pub const DIAGRAM_PANEL_OFFSET_Y: f32 = -5.0;

/// Star field particle count and cube edge length
pub const STAR_COUNT: usize = 4000;
pub const STAR_FIELD_EXTENT: f32 = 400.0;

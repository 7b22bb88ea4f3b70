//! Floating 2D labels pinned to 3D anchors.
//!
//! Labels are UI nodes under a full-screen overlay root. Every frame their
//! anchors are projected through the scene camera and the nodes moved to the
//! resulting viewport position. Visibility stays with the label's owner: a
//! sprint marker or a detail group toggles its own label entities.

/// Label content builders for sprints, categories, lessons and diagrams.
pub mod content;

/// Per-frame anchor projection.
pub mod projection;

use bevy::prelude::*;

/// Horizontal placement of a label relative to its projected anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAlign {
    Centre,
    Start,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct FloatingLabel {
    pub anchor: Entity,
    /// World-space offset from the anchor's translation.
    pub offset: Vec3,
    pub align: LabelAlign,
}

/// Overlay node every floating label is parented to.
#[derive(Resource, Debug, Clone, Copy)]
pub struct LabelRoot(pub Entity);

pub fn spawn_label_root(mut commands: Commands) {
    let root = commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            GlobalZIndex(-1),
            Name::new("Floating labels"),
        ))
        .id();
    commands.insert_resource(LabelRoot(root));
}

/// Spawn a hidden label node under `root` with the given inner layout. The
/// caller fills it with content and its owner decides when it is shown.
pub fn spawn_floating_label<'a>(
    commands: &'a mut Commands,
    root: Entity,
    label: FloatingLabel,
    layout: Node,
) -> EntityCommands<'a> {
    let mut entity = commands.spawn((
        label,
        Node {
            position_type: PositionType::Absolute,
            display: Display::None,
            ..layout
        },
        Visibility::Hidden,
    ));
    entity.insert(ChildOf(root));
    entity
}

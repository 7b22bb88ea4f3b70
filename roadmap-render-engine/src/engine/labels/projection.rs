use super::{FloatingLabel, LabelAlign};
use bevy::prelude::*;

/// Move every shown label to its anchor's viewport position. Labels whose
/// anchor is behind the camera or gone are taken out of layout.
pub fn project_floating_labels(
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    anchors: Query<&GlobalTransform>,
    mut labels: Query<(&FloatingLabel, &mut Node, &ComputedNode, &InheritedVisibility)>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    for (label, mut node, computed, visibility) in &mut labels {
        if !visibility.get() {
            continue;
        }

        let viewport_position = anchors
            .get(label.anchor)
            .ok()
            .map(|anchor| anchor.translation() + label.offset)
            .and_then(|world| camera.world_to_viewport(camera_transform, world).ok());

        let Some(position) = viewport_position else {
            node.display = Display::None;
            continue;
        };

        let size = computed.size() * computed.inverse_scale_factor();
        let (left, top) = label_origin(position, size, label.align);
        node.display = Display::Flex;
        node.left = Val::Px(left);
        node.top = Val::Px(top);
    }
}

/// Top-left corner of a label of `size` placed at `position`.
pub fn label_origin(position: Vec2, size: Vec2, align: LabelAlign) -> (f32, f32) {
    match align {
        LabelAlign::Centre => (position.x - size.x / 2.0, position.y - size.y / 2.0),
        LabelAlign::Start => (position.x, position.y - size.y / 2.0),
    }
}

//! Line meshes for the lesson trees, connectors and diagram frames.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

/// Unlit, blended material shared by line meshes of one colour.
pub fn line_material(colour: Color, opacity: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: colour.with_alpha(opacity),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    }
}

/// One mesh holding every `(start, end)` segment.
pub fn line_segments_mesh(segments: &[(Vec3, Vec3)]) -> Mesh {
    let mut vertices = Vec::with_capacity(segments.len() * 2);
    let mut indices = Vec::with_capacity(segments.len() * 2);

    for (start, end) in segments {
        let i = vertices.len() as u32;
        vertices.push(start.to_array());
        vertices.push(end.to_array());
        indices.extend_from_slice(&[i, i + 1]);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// Single segment whose colour blends from `start_colour` to `end_colour`.
/// The material's base colour multiplies the vertex colours.
pub fn gradient_line_mesh(start: Vec3, end: Vec3, start_colour: Color, end_colour: Color) -> Mesh {
    let colours = [start_colour, end_colour].map(|c| LinearRgba::from(c).to_f32_array());

    let mut mesh = line_segments_mesh(&[(start, end)]);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colours.to_vec());
    mesh
}

/// Closed outline of an axis-aligned rectangle in the XY plane.
pub fn rectangle_outline_mesh(size: Vec2) -> Mesh {
    let h = size / 2.0;
    let corners = [
        Vec3::new(-h.x, -h.y, 0.0),
        Vec3::new(h.x, -h.y, 0.0),
        Vec3::new(h.x, h.y, 0.0),
        Vec3::new(-h.x, h.y, 0.0),
    ];
    let segments: Vec<_> = (0..4).map(|i| (corners[i], corners[(i + 1) % 4])).collect();
    line_segments_mesh(&segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    fn positions(mesh: &Mesh) -> Vec<[f32; 3]> {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(values)) => values.clone(),
            _ => panic!("missing positions"),
        }
    }

    #[test]
    fn segments_become_line_list_pairs() {
        let mesh = line_segments_mesh(&[
            (Vec3::ZERO, Vec3::X),
            (Vec3::Y, Vec3::new(0.8, 1.0, 0.0)),
        ]);
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::LineList);
        assert_eq!(positions(&mesh).len(), 4);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(4));
    }

    #[test]
    fn outline_closes_the_rectangle() {
        let mesh = rectangle_outline_mesh(Vec2::new(20.0, 10.0));
        let points = positions(&mesh);
        assert_eq!(points.len(), 8);
        assert_eq!(points[0], [-10.0, -5.0, 0.0]);
        assert_eq!(points[7], [-10.0, -5.0, 0.0]);
    }

    #[test]
    fn gradient_carries_both_colours() {
        let mesh = gradient_line_mesh(Vec3::ZERO, Vec3::X, Color::WHITE, Color::BLACK);
        match mesh.attribute(Mesh::ATTRIBUTE_COLOR) {
            Some(VertexAttributeValues::Float32x4(values)) => {
                assert_eq!(values[0], [1.0, 1.0, 1.0, 1.0]);
                assert_eq!(values[1], [0.0, 0.0, 0.0, 1.0]);
            }
            _ => panic!("missing colours"),
        }
    }
}

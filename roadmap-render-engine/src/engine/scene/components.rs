use bevy::prelude::*;

/// Root of a sprint's persistent marker (sphere, ring and title label).
#[derive(Component, Debug)]
pub struct SprintMarker {
    pub index: usize,
    /// Height from the document; the marker returns here when unfocused.
    pub base_height: f32,
    pub label: Entity,
}

/// The sprint sphere, scaled by the active-sprint pulse.
#[derive(Component, Debug)]
pub struct SprintSphere {
    pub sprint_index: usize,
}

#[derive(Component, Debug)]
pub struct SprintRing;

/// Root of a sprint's detail view: categories, lesson trees, connectors and
/// the optional diagram panel. Owns the labels anchored inside it.
#[derive(Component, Debug)]
pub struct DetailGroup {
    pub sprint_index: usize,
    pub labels: Vec<Entity>,
}

/// Line between two consecutive sprint markers.
#[derive(Component, Debug)]
pub struct SprintConnector;

#[derive(Component, Debug)]
pub struct StarField;

#[derive(Component, Debug)]
pub struct DiagramPanel;

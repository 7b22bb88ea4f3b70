use bevy::prelude::*;

#[derive(Resource, Debug, Default)]
pub struct LoadingProgress {
    /// The document either loaded into a curriculum or failed into an empty one.
    pub document_resolved: bool,
    pub scene_built: bool,
}

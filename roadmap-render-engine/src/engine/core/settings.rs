use bevy::prelude::*;
use constants::path::ROADMAP_DOCUMENT_PATH;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Runtime settings, defaulting to the shared constants.
#[derive(Resource, Debug, Clone)]
pub struct RoadmapSettings {
    /// Roadmap document path relative to the asset root.
    pub document_path: String,
    /// Seed for the placeholder generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for RoadmapSettings {
    fn default() -> Self {
        Self {
            document_path: ROADMAP_DOCUMENT_PATH.to_string(),
            seed: None,
        }
    }
}

/// Random source for the values that stand in for real progress data:
/// lesson completion flags, category progress and the star field.
#[derive(Resource)]
pub struct PlaceholderRng(pub StdRng);

impl PlaceholderRng {
    pub fn from_settings(settings: &RoadmapSettings) -> Self {
        match settings.seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

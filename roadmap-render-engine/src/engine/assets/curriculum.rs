use crate::engine::assets::roadmap_document::{CategoryData, RoadmapDocument, SprintData};
use bevy::prelude::*;
use rand::Rng;
use thiserror::Error;

/// Chance that a lesson is shown as completed. Completion is simulated, not tracked.
const SIMULATED_COMPLETION_CHANCE: f64 = 0.4;

#[derive(Debug, Error)]
pub enum RoadmapError {
    #[error("roadmap document '{path}' failed to load: {reason}")]
    Load { path: String, reason: String },

    #[error("sprint {sprint} has an invalid colour '{value}'")]
    SprintColour { sprint: usize, value: String },

    #[error("sprint {sprint}, category {category} has an invalid colour '{value}'")]
    CategoryColour {
        sprint: usize,
        category: usize,
        value: String,
    },

    #[error("sprint {sprint} has a non-finite position")]
    Position { sprint: usize },
}

#[derive(Debug, Clone)]
pub struct Lesson {
    pub label: String,
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub colour: Color,
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone)]
pub struct Sprint {
    pub index: usize,
    pub position: Vec3,
    pub colour: Color,
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub diagram: Option<String>,
    pub categories: Vec<Category>,
}

impl Sprint {
    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Sum of lesson-list lengths across every category of this sprint.
    pub fn total_lessons(&self) -> usize {
        self.categories.iter().map(|c| c.lessons.len()).sum()
    }
}

/// Validated, immutable curriculum built once from the loaded document.
///
/// An empty curriculum is a valid value: it is what a failed load degrades to,
/// and every consumer checks `is_empty` before indexing.
#[derive(Resource, Debug, Clone, Default)]
pub struct Curriculum {
    sprints: Vec<Sprint>,
}

impl Curriculum {
    pub fn new(sprints: Vec<Sprint>) -> Self {
        Self { sprints }
    }

    /// Convert the raw document, parsing colours and assigning the simulated
    /// lesson completion flags from `rng`.
    pub fn from_document(
        document: &RoadmapDocument,
        rng: &mut impl Rng,
    ) -> Result<Self, RoadmapError> {
        let sprints = document
            .sprints
            .iter()
            .enumerate()
            .map(|(index, sprint)| convert_sprint(index, sprint, rng))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { sprints })
    }

    pub fn sprints(&self) -> &[Sprint] {
        &self.sprints
    }

    pub fn sprint(&self, index: usize) -> Option<&Sprint> {
        self.sprints.get(index)
    }

    pub fn len(&self) -> usize {
        self.sprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprints.is_empty()
    }
}

fn convert_sprint(
    index: usize,
    data: &SprintData,
    rng: &mut impl Rng,
) -> Result<Sprint, RoadmapError> {
    let position = data.position.to_vec3();
    if !position.is_finite() {
        return Err(RoadmapError::Position { sprint: index });
    }

    let colour = parse_colour(&data.color).ok_or_else(|| RoadmapError::SprintColour {
        sprint: index,
        value: data.color.clone(),
    })?;

    let categories = data
        .categories
        .iter()
        .enumerate()
        .map(|(category_index, category)| {
            convert_category(index, category_index, category, rng)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Sprint {
        index,
        position,
        colour,
        icon: data.icon.clone(),
        title: data.title.clone(),
        subtitle: data.subtitle.clone(),
        diagram: data
            .architecture_image
            .as_ref()
            .filter(|path| !path.trim().is_empty())
            .cloned(),
        categories,
    })
}

fn convert_category(
    sprint: usize,
    category: usize,
    data: &CategoryData,
    rng: &mut impl Rng,
) -> Result<Category, RoadmapError> {
    let colour = parse_colour(&data.color).ok_or_else(|| RoadmapError::CategoryColour {
        sprint,
        category,
        value: data.color.clone(),
    })?;

    let lessons = data
        .lessons
        .iter()
        .map(|label| Lesson {
            label: label.clone(),
            completed: rng.gen_bool(SIMULATED_COMPLETION_CHANCE),
        })
        .collect();

    Ok(Category {
        colour,
        icon: data.icon.clone(),
        title: data.title.clone(),
        subtitle: data.subtitle.clone(),
        lessons,
    })
}

/// Parse a CSS hex colour (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`).
pub fn parse_colour(value: &str) -> Option<Color> {
    Srgba::hex(value.trim()).ok().map(Color::from)
}

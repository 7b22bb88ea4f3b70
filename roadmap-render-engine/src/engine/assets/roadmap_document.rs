use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// World-space position of a sprint as stored in the document.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PositionData {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PositionData {
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// A category entry with its lesson labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryData {
    pub color: String,
    #[serde(default)]
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub lessons: Vec<String>,
}

/// A sprint entry. Field names follow the JSON document exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintData {
    pub position: PositionData,
    pub color: String,
    #[serde(default)]
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture_image: Option<String>,
    #[serde(default)]
    pub categories: Vec<CategoryData>,
}

/// Complete roadmap document as a Bevy asset. Mirrors the JSON structure.
#[derive(Asset, Debug, Clone, Default, Serialize, Deserialize, TypePath)]
pub struct RoadmapDocument {
    #[serde(default)]
    pub sprints: Vec<SprintData>,
}

impl RoadmapDocument {
    /// Total number of lessons across every sprint, used for load logging.
    pub fn lesson_count(&self) -> usize {
        self.sprints
            .iter()
            .flat_map(|sprint| &sprint.categories)
            .map(|category| category.lessons.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_document_with_optional_fields() {
        let json = r##"{
            "sprints": [
                {
                    "position": { "x": -20, "y": 0, "z": 0 },
                    "color": "#00d4ff",
                    "icon": "S",
                    "title": "Foundations",
                    "subtitle": "Week 1",
                    "architectureImage": "images/foundations.png",
                    "categories": [
                        { "color": "#ff2d92", "icon": "C", "title": "Compute", "subtitle": "EC2", "lessons": ["a", "b"] }
                    ]
                },
                {
                    "position": { "x": 20, "y": 2.5, "z": -4 },
                    "color": "#7b2fff",
                    "title": "Networking"
                }
            ]
        }"##;

        let document: RoadmapDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.sprints.len(), 2);

        let first = &document.sprints[0];
        assert_eq!(
            first.architecture_image.as_deref(),
            Some("images/foundations.png")
        );
        assert_eq!(first.position.to_vec3(), Vec3::new(-20.0, 0.0, 0.0));

        let second = &document.sprints[1];
        assert!(second.architecture_image.is_none());
        assert!(second.categories.is_empty());
        assert_eq!(second.subtitle, "");
        assert_eq!(document.lesson_count(), 2);
    }

    #[test]
    fn missing_sprints_array_is_empty() {
        let document: RoadmapDocument = serde_json::from_str("{}").unwrap();
        assert!(document.sprints.is_empty());
    }

    #[test]
    fn malformed_document_is_rejected() {
        let result = serde_json::from_str::<RoadmapDocument>(r#"{"sprints": [{"title": 3}]}"#);
        assert!(result.is_err());
    }
}

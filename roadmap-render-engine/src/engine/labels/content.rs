use super::{FloatingLabel, LabelAlign, spawn_floating_label};
use crate::engine::assets::curriculum::{Category, Lesson, Sprint};
use bevy::prelude::*;
use constants::layout::{CATEGORY_LABEL_OFFSET_Y, LESSON_LABEL_OFFSET_X, SPRINT_LABEL_OFFSET_Y};
use constants::palette::{COMPLETED_LESSON, HUD_TEXT};

const TITLE_SIZE: f32 = 18.0;
const SUBTITLE_SIZE: f32 = 12.0;
const LESSON_SIZE: f32 = 12.0;

fn text(value: impl Into<String>, size: f32, colour: Color) -> impl Bundle {
    (
        Text::new(value),
        TextFont::from_font_size(size),
        TextColor(colour),
    )
}

fn column() -> Node {
    Node {
        flex_direction: FlexDirection::Column,
        align_items: AlignItems::Center,
        ..default()
    }
}

/// Icon, title and subtitle in the sprint colour, above the marker.
pub fn spawn_sprint_label(commands: &mut Commands, root: Entity, anchor: Entity, sprint: &Sprint) -> Entity {
    let label = FloatingLabel {
        anchor,
        offset: Vec3::Y * SPRINT_LABEL_OFFSET_Y,
        align: LabelAlign::Centre,
    };
    let colour = sprint.colour;
    let mut entity = spawn_floating_label(commands, root, label, column());
    entity.with_children(|parent| {
        parent.spawn(text(format!("{} {}", sprint.icon, sprint.title), TITLE_SIZE, colour));
        parent.spawn(text(sprint.subtitle.clone(), SUBTITLE_SIZE, colour.with_alpha(0.7)));
    });
    entity.id()
}

pub fn spawn_category_label(
    commands: &mut Commands,
    root: Entity,
    anchor: Entity,
    category: &Category,
) -> Entity {
    let label = FloatingLabel {
        anchor,
        offset: Vec3::Y * CATEGORY_LABEL_OFFSET_Y,
        align: LabelAlign::Centre,
    };
    let colour = category.colour;
    let mut entity = spawn_floating_label(commands, root, label, column());
    entity.with_children(|parent| {
        parent.spawn(text(format!("{} {}", category.icon, category.title), SUBTITLE_SIZE + 2.0, colour));
        if !category.subtitle.is_empty() {
            parent.spawn(text(category.subtitle.clone(), SUBTITLE_SIZE - 2.0, colour.with_alpha(0.7)));
        }
    });
    entity.id()
}

/// Numbered badge in the category colour followed by the lesson label.
/// Completed lessons get a check mark and their own text colour.
pub fn spawn_lesson_label(
    commands: &mut Commands,
    root: Entity,
    anchor: Entity,
    number: usize,
    lesson: &Lesson,
    badge_colour: Color,
) -> Entity {
    let label = FloatingLabel {
        anchor,
        offset: Vec3::X * LESSON_LABEL_OFFSET_X,
        align: LabelAlign::Start,
    };
    let (caption, colour) = if lesson.completed {
        (format!("✓ {}", lesson.label), COMPLETED_LESSON)
    } else {
        (lesson.label.clone(), HUD_TEXT)
    };

    let layout = Node {
        column_gap: Val::Px(6.0),
        align_items: AlignItems::Center,
        ..default()
    };
    let mut entity = spawn_floating_label(commands, root, label, layout);
    entity.with_children(|parent| {
            parent
                .spawn((
                    Node {
                        min_width: Val::Px(18.0),
                        height: Val::Px(18.0),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BackgroundColor(badge_colour),
                    BorderRadius::MAX,
                ))
                .with_child(text(number.to_string(), LESSON_SIZE - 2.0, Color::BLACK));
            parent.spawn(text(caption, LESSON_SIZE, colour));
        });
    entity.id()
}

pub fn spawn_diagram_label(
    commands: &mut Commands,
    root: Entity,
    anchor: Entity,
    offset: Vec3,
    sprint: &Sprint,
) -> Entity {
    let label = FloatingLabel {
        anchor,
        offset,
        align: LabelAlign::Centre,
    };
    let mut entity = spawn_floating_label(commands, root, label, Node::default());
    entity.insert(text(
        format!("🏗️ Architecture: {}", sprint.title),
        SUBTITLE_SIZE + 2.0,
        sprint.colour,
    ));
    entity.id()
}

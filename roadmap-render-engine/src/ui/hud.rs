use crate::engine::assets::curriculum::Curriculum;
use crate::engine::core::settings::PlaceholderRng;
use crate::navigation::actions::NavigationAction;
use crate::navigation::controller::ViewChanged;
use crate::navigation::info_panel::InfoPanelContent;
use crate::navigation::nav_dots::{NavDotSpec, nav_dots};
use crate::navigation::view_state::ViewMode;
use bevy::prelude::*;
use constants::palette::{HUD_BUTTON, HUD_BUTTON_HOVER, HUD_PANEL, HUD_TEXT, HUD_TEXT_DIM, PROGRESS_TRACK};

#[derive(Component)]
pub struct HudRoot;

/// Text nodes the HUD rewrites on view changes.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudText {
    Icon,
    Title,
    Subtitle,
    OverviewCaption,
}

#[derive(Component)]
pub struct InfoIconBadge;

#[derive(Component)]
pub struct ProgressFill;

#[derive(Component)]
pub struct NavDotStrip;

/// A navigation dot selecting the sprint or category at this index.
#[derive(Component, Debug, Clone, Copy)]
pub struct NavDot(pub usize);

/// On-screen control mirroring a keyboard action.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    Previous,
    Overview,
    Focus,
    Back,
    Next,
}

impl ControlButton {
    pub fn action(self) -> NavigationAction {
        match self {
            Self::Previous => NavigationAction::Previous,
            Self::Overview => NavigationAction::ToggleOverview,
            Self::Focus => NavigationAction::Focus,
            Self::Back => NavigationAction::Back,
            Self::Next => NavigationAction::Next,
        }
    }

    fn caption(self) -> &'static str {
        match self {
            Self::Previous => "◀ Prev",
            Self::Overview => overview_caption(ViewMode::Sprints),
            Self::Focus => "Focus",
            Self::Back => "← Back",
            Self::Next => "Next ▶",
        }
    }
}

pub fn overview_caption(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Overview => "🎯 Return",
        _ => "🌌 Overview",
    }
}

/// The back button only exists for the categories view.
pub fn back_button_display(mode: ViewMode) -> Display {
    match mode {
        ViewMode::Categories { .. } => Display::Flex,
        _ => Display::None,
    }
}

fn hud_text(value: &str, size: f32, colour: Color) -> (Text, TextFont, TextColor) {
    (
        Text::new(value),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(colour),
    )
}

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            HudRoot,
            Name::new("HUD"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::all(Val::Px(16.0)),
                ..default()
            },
        ))
        .with_children(|root| {
            spawn_info_panel(root);

            root.spawn((
                Name::new("Bottom bar"),
                Node {
                    width: Val::Percent(100.0),
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(12.0),
                    ..default()
                },
            ))
            .with_children(|bottom| {
                bottom.spawn((
                    NavDotStrip,
                    Name::new("Navigation dots"),
                    Node {
                        column_gap: Val::Px(10.0),
                        align_items: AlignItems::Center,
                        ..default()
                    },
                ));

                bottom
                    .spawn((
                        Name::new("Controls"),
                        BackgroundColor(HUD_PANEL),
                        BorderRadius::all(Val::Px(8.0)),
                        Node {
                            padding: UiRect::all(Val::Px(8.0)),
                            column_gap: Val::Px(8.0),
                            ..default()
                        },
                    ))
                    .with_children(|bar| {
                        for button in [
                            ControlButton::Previous,
                            ControlButton::Overview,
                            ControlButton::Focus,
                            ControlButton::Back,
                            ControlButton::Next,
                        ] {
                            spawn_control_button(bar, button);
                        }
                    });
            });
        });
}

fn spawn_info_panel(root: &mut ChildSpawnerCommands) {
    root.spawn((
        Name::new("Info panel"),
        BackgroundColor(HUD_PANEL),
        BorderRadius::all(Val::Px(10.0)),
        Node {
            width: Val::Px(340.0),
            padding: UiRect::all(Val::Px(14.0)),
            column_gap: Val::Px(12.0),
            align_items: AlignItems::Center,
            ..default()
        },
    ))
    .with_children(|panel| {
        panel
            .spawn((
                InfoIconBadge,
                BackgroundColor(HUD_BUTTON),
                BorderRadius::all(Val::Px(8.0)),
                Node {
                    width: Val::Px(48.0),
                    height: Val::Px(48.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
            ))
            .with_child((HudText::Icon, hud_text("", 24.0, HUD_TEXT)));

        panel
            .spawn(Node {
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            })
            .with_children(|column| {
                column.spawn((HudText::Title, hud_text("", 20.0, HUD_TEXT)));
                column.spawn((HudText::Subtitle, hud_text("", 12.0, HUD_TEXT_DIM)));
                column
                    .spawn((
                        BackgroundColor(PROGRESS_TRACK),
                        BorderRadius::all(Val::Px(3.0)),
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Px(6.0),
                            margin: UiRect::top(Val::Px(6.0)),
                            ..default()
                        },
                    ))
                    .with_child((
                        ProgressFill,
                        BackgroundColor(HUD_TEXT),
                        BorderRadius::all(Val::Px(3.0)),
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                    ));
            });
    });
}

fn spawn_control_button(bar: &mut ChildSpawnerCommands, button: ControlButton) {
    let display = match button {
        ControlButton::Back => back_button_display(ViewMode::Sprints),
        _ => Display::Flex,
    };
    let mut entity = bar.spawn((
        button,
        Button,
        Name::new(format!("{button:?} button")),
        BackgroundColor(HUD_BUTTON),
        BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
        BorderRadius::all(Val::Px(6.0)),
        Node {
            display,
            height: Val::Px(36.0),
            padding: UiRect::axes(Val::Px(14.0), Val::Px(0.0)),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
    ));
    if button == ControlButton::Overview {
        entity.with_child((HudText::OverviewCaption, hud_text(button.caption(), 14.0, HUD_TEXT)));
    } else {
        entity.with_child(hud_text(button.caption(), 14.0, HUD_TEXT));
    }
}

/// Rewrite the info panel, captions, back button and navigation dots for
/// the latest view change of the frame.
pub fn refresh_hud_on_view_change(
    mut commands: Commands,
    mut changes: EventReader<ViewChanged>,
    curriculum: Res<Curriculum>,
    mut rng: ResMut<PlaceholderRng>,
    mut texts: Query<(&HudText, &mut Text, &mut TextColor)>,
    mut badges: Query<&mut BackgroundColor, (With<InfoIconBadge>, Without<ProgressFill>)>,
    mut fills: Query<(&mut Node, &mut BackgroundColor), (With<ProgressFill>, Without<InfoIconBadge>)>,
    mut buttons: Query<(&ControlButton, &mut Node), Without<ProgressFill>>,
    strips: Query<Entity, With<NavDotStrip>>,
    dots: Query<Entity, With<NavDot>>,
) {
    let Some(change) = changes.read().last() else {
        return;
    };
    let state = change.state;
    let mode = state.mode();

    if let Some(panel) = InfoPanelContent::for_state(&state, &curriculum, &mut rng.0) {
        for (kind, mut text, mut colour) in &mut texts {
            match kind {
                HudText::Icon => text.0 = panel.icon.clone(),
                HudText::Title => {
                    text.0 = panel.title.clone();
                    colour.0 = panel.accent;
                }
                HudText::Subtitle => text.0 = panel.subtitle.clone(),
                HudText::OverviewCaption => {}
            }
        }
        for mut badge in &mut badges {
            badge.0 = panel.accent.with_alpha(0.3);
        }
        for (mut node, mut background) in &mut fills {
            node.width = Val::Percent(panel.progress_percent as f32);
            background.0 = panel.accent;
        }
    }

    for (kind, mut text, _) in &mut texts {
        if *kind == HudText::OverviewCaption {
            text.0 = overview_caption(mode).to_string();
        }
    }
    for (button, mut node) in &mut buttons {
        if *button == ControlButton::Back {
            node.display = back_button_display(mode);
        }
    }

    for old in &dots {
        commands.entity(old).despawn();
    }
    if let Ok(strip) = strips.single() {
        for dot in nav_dots(&state, &curriculum) {
            spawn_nav_dot(&mut commands, strip, &dot);
        }
    }
}

fn spawn_nav_dot(commands: &mut Commands, strip: Entity, dot: &NavDotSpec) {
    let size = if dot.active { 14.0 } else { 10.0 };
    let fill = if dot.active {
        dot.colour
    } else {
        Color::NONE
    };
    commands.spawn((
        NavDot(dot.index),
        Button,
        Name::new(dot.label.clone()),
        BackgroundColor(fill),
        BorderColor(dot.colour),
        BorderRadius::MAX,
        Node {
            width: Val::Px(size),
            height: Val::Px(size),
            border: UiRect::all(Val::Px(2.0)),
            ..default()
        },
        ChildOf(strip),
    ));
}

pub fn control_button_hover(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<ControlButton>)>,
) {
    for (interaction, mut bg) in &mut q {
        *bg = match *interaction {
            Interaction::Pressed | Interaction::Hovered => BackgroundColor(HUD_BUTTON_HOVER),
            Interaction::None => BackgroundColor(HUD_BUTTON),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::curriculum::fixtures;
    use crate::engine::core::settings::RoadmapSettings;
    use crate::navigation::controller::NavigationController;

    fn hud_app() -> App {
        let settings = RoadmapSettings {
            seed: Some(1),
            ..default()
        };
        let mut app = App::new();
        app.insert_resource(fixtures::two_sprints())
            .insert_resource(PlaceholderRng::from_settings(&settings))
            .add_event::<ViewChanged>()
            .add_systems(Startup, spawn_hud)
            .add_systems(Update, refresh_hud_on_view_change);
        app.update();
        app
    }

    fn text_of(app: &mut App, kind: HudText) -> String {
        let world = app.world_mut();
        world
            .query::<(&HudText, &Text)>()
            .iter(world)
            .find(|(k, _)| **k == kind)
            .map(|(_, t)| t.0.clone())
            .unwrap_or_default()
    }

    fn dot_count(app: &mut App) -> usize {
        let world = app.world_mut();
        world.query::<&NavDot>().iter(world).count()
    }

    fn back_display(app: &mut App) -> Display {
        let world = app.world_mut();
        world
            .query::<(&ControlButton, &Node)>()
            .iter(world)
            .find(|(b, _)| **b == ControlButton::Back)
            .map(|(_, n)| n.display)
            .unwrap()
    }

    #[test]
    fn view_changes_rewrite_the_hud() {
        let curriculum = fixtures::two_sprints();
        let mut app = hud_app();
        let mut controller = NavigationController::default();

        app.world_mut().send_event(controller.reset());
        app.update();
        assert_eq!(text_of(&mut app, HudText::Title), "A");
        assert_eq!(text_of(&mut app, HudText::Subtitle), "A subtitle • 2 categories • 5 lessons");
        assert_eq!(dot_count(&mut app), 2);
        assert_eq!(back_display(&mut app), Display::None);

        let change = controller.apply(NavigationAction::Focus, &curriculum).unwrap();
        app.world_mut().send_event(change);
        app.update();
        assert_eq!(text_of(&mut app, HudText::Title), "A1");
        assert_eq!(dot_count(&mut app), 2);
        assert_eq!(back_display(&mut app), Display::Flex);

        let change = controller.apply(NavigationAction::ToggleOverview, &curriculum).unwrap();
        app.world_mut().send_event(change);
        app.update();
        assert_eq!(text_of(&mut app, HudText::OverviewCaption), "🎯 Return");
        assert_eq!(back_display(&mut app), Display::None);
    }

    #[test]
    fn captions_follow_the_mode() {
        assert_eq!(overview_caption(ViewMode::Sprints), "🌌 Overview");
        assert_eq!(overview_caption(ViewMode::Categories { sprint: 0 }), "🌌 Overview");
        assert_eq!(overview_caption(ViewMode::Overview), "🎯 Return");
        assert_eq!(ControlButton::Overview.action(), NavigationAction::ToggleOverview);
    }
}

use crate::app_states::AppState;
use crate::prelude::constants::{GAME_OVER_FONT, GAME_OVER_OVERLAY_ALPHA, RESTART_FONT, SCORE_FONT, TEXT_COLOUR};
use crate::session::GameSession;
use bevy::ecs::children;
use bevy::log::*;
use bevy::prelude::{
  AlignItems, Alpha, Color, Commands, Component, DetectChanges, Entity, FlexDirection, GlobalZIndex, IntoScheduleConfigs,
  JustifyContent, Name, Node, OnEnter, OnExit, Plugin, Query, Res, Single, SpawnRelated, Text, TextColor, TextFont, Update, With,
  default, px, resource_exists,
};
use bevy::ui::{BackgroundColor, PositionType, percent};

/// The distance from the top of the window to the centre of the score label.
const SCORE_LABEL_TOP: f32 = 30.;

/// A plugin that manages the in-game user interface: the score label and the game over screen.
pub struct InGameUiPlugin;

impl Plugin for InGameUiPlugin {
  fn build(&self, app: &mut bevy::prelude::App) {
    app
      .add_systems(OnExit(AppState::Loading), spawn_score_label_system)
      .add_systems(Update, update_score_label_system.run_if(resource_exists::<GameSession>))
      .add_systems(OnEnter(AppState::GameOver), spawn_game_over_ui_system)
      .add_systems(OnExit(AppState::GameOver), despawn_game_over_ui_system);
  }
}

/// Marker component for the score text.
#[derive(Component)]
struct ScoreLabel;

/// Marker component for the root of the game over UI. Used for despawning. All other game over UI components must be
/// children of this.
#[derive(Component)]
struct GameOverUiRoot;

fn score_text(score: usize) -> String {
  format!("Score: {}", score)
}

fn spawn_score_label_system(mut commands: Commands) {
  commands.spawn((
    Name::new("Score UI"),
    Node {
      width: percent(100),
      position_type: PositionType::Absolute,
      top: px(SCORE_LABEL_TOP - SCORE_FONT / 2.),
      justify_content: JustifyContent::Center,
      ..default()
    },
    children![(
      ScoreLabel,
      Text::new(score_text(0)),
      TextFont {
        font_size: SCORE_FONT,
        ..default()
      },
      TextColor(TEXT_COLOUR),
    )],
  ));
}

fn update_score_label_system(session: Res<GameSession>, mut label: Single<&mut Text, With<ScoreLabel>>) {
  if !session.is_changed() {
    return;
  }
  let text = score_text(session.score());
  if label.0 != text {
    label.0 = text;
  }
}

/// Darkens the arena and tells the player how to start a new round.
fn spawn_game_over_ui_system(mut commands: Commands, session: Res<GameSession>) {
  debug!("Showing game over screen with a final score of [{}]", session.score());
  commands.spawn((
    GameOverUiRoot,
    Name::new("Game Over UI"),
    Node {
      width: percent(100),
      height: percent(100),
      position_type: PositionType::Absolute,
      flex_direction: FlexDirection::Column,
      justify_content: JustifyContent::Center,
      align_items: AlignItems::Center,
      row_gap: px(20),
      ..default()
    },
    BackgroundColor(Color::BLACK.with_alpha(GAME_OVER_OVERLAY_ALPHA)),
    GlobalZIndex(1),
    children![
      (
        Text::new("YOU LOST!"),
        TextFont {
          font_size: GAME_OVER_FONT,
          ..default()
        },
        TextColor(TEXT_COLOUR),
      ),
      (
        Text::new("Press [R] to restart"),
        TextFont {
          font_size: RESTART_FONT,
          ..default()
        },
        TextColor(TEXT_COLOUR),
      )
    ],
  ));
}

/// Despawns the entire game over UI. Call when exiting the game over state.
fn despawn_game_over_ui_system(mut commands: Commands, game_over_ui_root_query: Query<Entity, With<GameOverUiRoot>>) {
  for entity in &game_over_ui_root_query {
    commands.entity(entity).despawn();
  }
}

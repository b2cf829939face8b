use crate::app_states::AppState;
use crate::camera::screen_to_world;
use crate::prelude::{BodySegment, Food, SnakeHead};
use crate::session::GameSession;
use crate::sprite_sheet::{SpriteAssets, SpriteKind};
use bevy::prelude::*;
use std::collections::HashSet;

const FOOD_Z: f32 = 0.;
const BODY_Z: f32 = 1.;
const HEAD_Z: f32 = 2.;

/// A plugin that spawns the snake and food sprites and keeps them in sync with the [`GameSession`].
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(OnExit(AppState::Loading), spawn_snake_and_food_system).add_systems(
      Update,
      (sync_head_system, sync_food_system, sync_body_segments_system)
        .run_if(resource_exists::<SpriteAssets>)
        .run_if(resource_exists::<GameSession>),
    );
  }
}

fn spawn_snake_and_food_system(mut commands: Commands, sprite_assets: Res<SpriteAssets>, session: Res<GameSession>) {
  commands.spawn((
    Name::new("Snake Head"),
    SnakeHead,
    sprite_assets.sprite(SpriteKind::Head),
    head_transform(&session),
  ));
  commands.spawn((
    Name::new("Food"),
    Food,
    sprite_assets.sprite(SpriteKind::Food),
    Transform::from_translation(screen_to_world(session.food().center()).extend(FOOD_Z)),
  ));
  debug!(
    "Spawned snake head and food using {} sprites",
    if sprite_assets.is_fallback() { "fallback" } else { "sprite sheet" }
  );
}

fn head_transform(session: &GameSession) -> Transform {
  let head = session.head();
  Transform::from_translation(screen_to_world(head.center()).extend(HEAD_Z))
    .with_rotation(Quat::from_rotation_z(head.angle().to_radians()))
}

fn sync_head_system(session: Res<GameSession>, mut head: Single<&mut Transform, With<SnakeHead>>) {
  **head = head_transform(&session);
}

fn sync_food_system(session: Res<GameSession>, mut food: Single<&mut Transform, With<Food>>) {
  food.translation = screen_to_world(session.food().center()).extend(FOOD_Z);
}

/// Moves each [`BodySegment`] sprite onto its segment position, spawning sprites for new segments and despawning
/// sprites whose segment no longer exists.
fn sync_body_segments_system(
  mut commands: Commands,
  session: Res<GameSession>,
  sprite_assets: Res<SpriteAssets>,
  mut segments_query: Query<(Entity, &BodySegment, &mut Transform)>,
) {
  let positions = session.segment_positions();
  let mut existing = HashSet::new();

  for (entity, segment, mut transform) in &mut segments_query {
    match positions.get(segment.0) {
      Some(position) => {
        transform.translation = screen_to_world(*position).extend(BODY_Z);
        existing.insert(segment.0);
      }
      None => commands.entity(entity).despawn(),
    }
  }

  for (index, position) in positions.iter().enumerate() {
    if existing.contains(&index) {
      continue;
    }
    commands.spawn((
      Name::new(format!("Body Segment {}", index)),
      BodySegment(index),
      sprite_assets.sprite(SpriteKind::Body),
      Transform::from_translation(screen_to_world(*position).extend(BODY_Z)),
    ));
  }
}

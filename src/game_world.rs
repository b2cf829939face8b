use crate::prelude::constants::{ARENA_COLOUR, SCREEN_HEIGHT, SCREEN_WIDTH};
use bevy::prelude::*;

/// Plugin that creates the game world. Only has a visual effect.
pub struct GameWorldPlugin;

impl Plugin for GameWorldPlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(Startup, create_world_system);
  }
}

/// Fills the arena with a solid backdrop, so that its edges remain visible when the window is larger than the arena.
fn create_world_system(mut commands: Commands) {
  commands.spawn((
    Name::new("Arena"),
    Sprite::from_color(ARENA_COLOUR, Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
    Transform::from_xyz(0., 0., -999.),
  ));
  debug!("✅  Game world creation completed");
}

use crate::prelude::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use bevy::app::{App, Plugin, Startup, Update};
use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_systems(Startup, setup_camera_system)
      .add_systems(Update, fit_arena_system);
  }
}

#[derive(Component)]
struct InGameCamera;

fn setup_camera_system(mut commands: Commands) {
  commands.spawn((Name::new("Camera"), Camera2d, Msaa::Off, InGameCamera));
}

/// Scales the camera projection so that the whole arena is visible, whatever the window size.
fn fit_arena_system(
  window: Single<&Window, Changed<Window>>,
  mut projection: Single<&mut Projection, With<InGameCamera>>,
) {
  let Projection::Orthographic(projection) = &mut **projection else {
    return;
  };
  let scale = projection_scale(Vec2::new(window.width(), window.height()));
  if projection.scale != scale {
    projection.scale = scale;
    debug!("Set camera scale to [{}]", scale);
  }
}

/// The orthographic scale at which the arena fits a window of the given size.
fn projection_scale(window_size: Vec2) -> f32 {
  let h_scale = window_size.x / SCREEN_WIDTH;
  let v_scale = window_size.y / SCREEN_HEIGHT;
  let scale = h_scale.min(v_scale);
  if scale > 0. { 1. / scale } else { 1. }
}

/// Converts a point in arena screen space (origin top left, y down) to world space (origin centre, y up).
pub fn screen_to_world(position: Vec2) -> Vec2 {
  Vec2::new(position.x - SCREEN_WIDTH / 2., SCREEN_HEIGHT / 2. - position.y)
}

mod app_states;
mod camera;
mod controls;
mod debug;
mod game_loop;
mod game_world;
mod loading;
mod player;
mod session;
mod shared;
mod sprite_sheet;
mod ui;

mod prelude {
  pub use crate::shared::*;
}

#[cfg(feature = "dev")]
use crate::debug::DebugPlugin;

use crate::app_states::AppStatePlugin;
use crate::camera::CameraPlugin;
use crate::controls::ControlsPlugin;
use crate::game_loop::GameLoopPlugin;
use crate::game_world::GameWorldPlugin;
use crate::loading::LoadingPlugin;
use crate::player::PlayerPlugin;
use crate::prelude::constants::{CLEAR_COLOUR, FPS, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use crate::prelude::*;
use crate::ui::UiPlugin;
use bevy::prelude::*;

fn main() {
  let mut app = App::new();
  app
    .add_plugins(
      DefaultPlugins
        .set(WindowPlugin {
          primary_window: Some(primary_window()),
          ..default()
        })
        .set(ImagePlugin::default_nearest()),
    )
    .insert_resource(Time::<Fixed>::from_hz(FPS))
    .insert_resource(ClearColor(CLEAR_COLOUR))
    .add_plugins((
      CameraPlugin,
      AppStatePlugin,
      GameWorldPlugin,
      SharedResourcesPlugin,
      SharedMessagesPlugin,
      LoadingPlugin,
      PlayerPlugin,
      GameLoopPlugin,
      UiPlugin,
      ControlsPlugin,
    ));

  #[cfg(feature = "dev")]
  app.add_plugins(DebugPlugin);

  app.run();
}

/// The primary window, sized to show the arena at its native resolution.
fn primary_window() -> Window {
  Window {
    title: WINDOW_TITLE.to_string(),
    resolution: (SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32).into(),
    ..default()
  }
}

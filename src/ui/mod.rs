use bevy::prelude::{App, Plugin};
use in_game_ui::InGameUiPlugin;

pub mod in_game_ui;

pub struct UiPlugin;

impl Plugin for UiPlugin {
  fn build(&self, app: &mut App) {
    app.add_plugins(InGameUiPlugin);
  }
}

use crate::app_states::AppState;
use crate::prelude::{Direction, InputMessage, Settings};
use bevy::app::{App, AppExit, Plugin, Update};
use bevy::input::ButtonInput;
use bevy::log::*;
use bevy::prelude::{
  IntoScheduleConfigs, KeyCode, MessageWriter, MonitorSelection, Res, ResMut, Single, Window, in_state,
};
use bevy::window::WindowMode;

/// A plugin that manages all player controls and input handling.
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_systems(Update, (settings_controls_system, quit_on_escape_system))
      .add_systems(Update, turn_input_system.run_if(in_state(AppState::Playing)))
      .add_systems(Update, restart_input_system.run_if(in_state(AppState::GameOver)));
  }
}

/// The keys that request a turn, both arrow keys and WASD.
const TURN_KEYS: [(KeyCode, Direction); 8] = [
  (KeyCode::ArrowUp, Direction::Up),
  (KeyCode::KeyW, Direction::Up),
  (KeyCode::ArrowDown, Direction::Down),
  (KeyCode::KeyS, Direction::Down),
  (KeyCode::ArrowLeft, Direction::Left),
  (KeyCode::KeyA, Direction::Left),
  (KeyCode::ArrowRight, Direction::Right),
  (KeyCode::KeyD, Direction::Right),
];

/// Sends an [`InputMessage::Turn`] for every turn key pressed this frame. Whether the turn is valid is decided by
/// the game session.
fn turn_input_system(keyboard_input: Res<ButtonInput<KeyCode>>, mut input_message: MessageWriter<InputMessage>) {
  for (key_code, direction) in TURN_KEYS {
    if keyboard_input.just_pressed(key_code) {
      input_message.write(InputMessage::Turn(direction));
    }
  }
}

fn restart_input_system(keyboard_input: Res<ButtonInput<KeyCode>>, mut input_message: MessageWriter<InputMessage>) {
  if keyboard_input.just_pressed(KeyCode::KeyR) {
    input_message.write(InputMessage::Restart);
  }
}

fn quit_on_escape_system(keyboard_input: Res<ButtonInput<KeyCode>>, mut app_exit: MessageWriter<AppExit>) {
  if keyboard_input.just_pressed(KeyCode::Escape) {
    info!("[Escape] Quitting");
    app_exit.write(AppExit::Success);
  }
}

/// A system that handles various settings-related controls, such as toggling fullscreen mode.
fn settings_controls_system(
  keyboard_input: Res<ButtonInput<KeyCode>>,
  mut settings: ResMut<Settings>,
  mut window: Single<&mut Window>,
) {
  if keyboard_input.just_pressed(KeyCode::F11) {
    window.mode = match window.mode {
      WindowMode::Windowed => WindowMode::BorderlessFullscreen(MonitorSelection::Current),
      _ => WindowMode::Windowed,
    };
    info!("[F11] Set window mode to [{:?}]", window.mode);
  }
  if keyboard_input.just_pressed(KeyCode::F10) {
    settings.general.display_collision_gizmos = !settings.general.display_collision_gizmos;
    info!(
      "[F10] Set collision gizmos to [{:?}]",
      settings.general.display_collision_gizmos
    );
  }
}

use bevy::app::{App, Plugin, Update};
use bevy::log::*;
use bevy::prelude::{AppExtStates, MessageReader, State, StateTransitionEvent, States};
use bevy::reflect::Reflect;
use std::fmt::Display;

/// A plugin that introduces and manages the main application states.
pub struct AppStatePlugin;

impl Plugin for AppStatePlugin {
  fn build(&self, app: &mut App) {
    app
      .init_state::<AppState>()
      .register_type::<State<AppState>>()
      .add_systems(Update, log_app_state_transitions_system);
  }
}

fn name_from<T: ToString>(state: Option<T>) -> String {
  match state {
    Some(state_name) => state_name.to_string(),
    None => "None".to_string(),
  }
}

/// The main application states. Drives the overall flow of the game.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States, Reflect)]
pub enum AppState {
  /// Loads the sprite sheet. Runs once at application start.
  #[default]
  Loading,
  /// A round is running and the fixed tick advances the game session.
  Playing,
  /// The snake crashed. Time is paused until the player restarts.
  GameOver,
}

impl AppState {
  pub fn name() -> &'static str {
    "AppState"
  }
}

impl Display for AppState {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:?}", self)
  }
}

fn log_app_state_transitions_system(mut app_state_messages: MessageReader<StateTransitionEvent<AppState>>) {
  for message in app_state_messages.read() {
    info!(
      "Transitioning [{}] from [{}] to [{}]",
      AppState::name(),
      name_from(message.exited),
      name_from(message.entered)
    );
  }
}

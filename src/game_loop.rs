use crate::app_states::AppState;
use crate::prelude::InputMessage;
use crate::session::{GameSession, SessionState, TurnResolution};
use bevy::app::{App, FixedUpdate, Plugin};
use bevy::prelude::*;

/// A plugin that manages the main game loop. Owns the [`GameSession`] and advances it on every fixed tick.
pub struct GameLoopPlugin;

impl Plugin for GameLoopPlugin {
  fn build(&self, app: &mut App) {
    app
      .insert_resource(GameSession::new(&mut rand::rng()))
      .add_systems(Update, turn_request_system.run_if(in_state(AppState::Playing)))
      .add_systems(FixedUpdate, tick_session_system.run_if(in_state(AppState::Playing)))
      .add_systems(
        Update,
        transition_to_game_over_system.run_if(in_state(AppState::Playing)),
      )
      .add_systems(OnEnter(AppState::GameOver), pause_game_system)
      .add_systems(Update, restart_system.run_if(in_state(AppState::GameOver)))
      .add_systems(OnExit(AppState::GameOver), unpause_game_system);
  }
}

/// Forwards turn requests to the session, where they wait for the next tick.
fn turn_request_system(mut input_messages: MessageReader<InputMessage>, mut session: ResMut<GameSession>) {
  for message in input_messages.read() {
    if let InputMessage::Turn(direction) = message {
      if !session.request_turn(*direction) {
        trace!("Ignored turn [{}] while moving [{}]", direction, session.head().direction());
      }
    }
  }
}

/// Advances the session by one tick.
fn tick_session_system(mut session: ResMut<GameSession>) {
  let Some(report) = session.tick(&mut rand::rng()) else {
    return;
  };

  match report.turn {
    TurnResolution::Applied { from, to } => debug!("Turned from [{}] to [{}]", from, to),
    TurnResolution::Blocked { requested, distance } => {
      debug!("Blocked reversal to [{}] after only [{}] px", requested, distance)
    }
    TurnResolution::Idle => {}
  }
  if report.ate_food {
    debug!("Ate food, score is now [{}]", session.score());
  }
  if let Some(collision) = report.fatal {
    info!("Game over: The snake {} with a score of [{}]", collision, session.score());
  }
}

fn transition_to_game_over_system(session: Res<GameSession>, mut next: ResMut<NextState<AppState>>) {
  if session.state() == SessionState::GameOver {
    next.set(AppState::GameOver);
  }
}

/// Pauses the game time when called. Intended to be called when entering the game over state.
fn pause_game_system(mut time: ResMut<Time<Virtual>>) {
  time.pause();
}

/// Unpauses the game time when called. Intended to be called when exiting the game over state.
fn unpause_game_system(mut time: ResMut<Time<Virtual>>) {
  time.unpause();
}

/// Starts a new round when the player asks for it.
fn restart_system(
  mut input_messages: MessageReader<InputMessage>,
  mut session: ResMut<GameSession>,
  mut next_app_state: ResMut<NextState<AppState>>,
) {
  debug_once!("Waiting for restart...");
  if !input_messages.read().any(|message| *message == InputMessage::Restart) {
    return;
  }
  session.reset(&mut rand::rng());
  next_app_state.set(AppState::Playing);
}

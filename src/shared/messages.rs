use crate::prelude::Direction;
use bevy::app::{App, Plugin};
use bevy::prelude::Message;

/// A plugin that registers all shared messages used across multiple plugins and systems.
pub struct SharedMessagesPlugin;

impl Plugin for SharedMessagesPlugin {
  fn build(&self, app: &mut App) {
    app.add_message::<InputMessage>();
  }
}

/// A [`Message`] written for every relevant key press by the player.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMessage {
  /// The player asked the snake to turn towards the given direction.
  Turn(Direction),
  /// The player asked for a new round.
  Restart,
}

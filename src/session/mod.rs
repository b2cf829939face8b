mod collision;
mod food;
mod motion;
mod trail;
mod turning;

pub use collision::*;
pub use food::*;
pub use motion::*;
pub use trail::*;
pub use turning::*;

use crate::prelude::Direction;
use bevy::log::*;
use bevy::math::Vec2;
use bevy::prelude::Resource;
use bevy::reflect::Reflect;
use rand::Rng;
use std::fmt::Display;

/// Whether the current round is still being played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum SessionState {
  #[default]
  Playing,
  GameOver,
}

impl Display for SessionState {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:?}", self)
  }
}

/// What happened during a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
  pub turn: TurnResolution,
  pub ate_food: bool,
  pub fatal: Option<FatalCollision>,
}

/// A resource that owns the complete state of a round: the head, turn bookkeeping, position history, food and score.
/// All game rules are applied here, once per tick, independently of any rendering.
#[derive(Resource, Debug, Clone)]
pub struct GameSession {
  state: SessionState,
  score: usize,
  head: HeadState,
  turns: TurnController,
  trail: HistoryTrail,
  food: FoodSpawner,
}

impl GameSession {
  pub fn new(rng: &mut impl Rng) -> Self {
    let head = HeadState::initial();
    Self {
      state: SessionState::Playing,
      score: 0,
      head,
      turns: TurnController::new(head.direction(), head.center()),
      trail: HistoryTrail::default(),
      food: FoodSpawner::new(rng),
    }
  }

  /// Buffers a turn for the next tick. Ignored unless the round is being played and `direction` is a 90° turn away
  /// from the current direction. Returns whether the turn was buffered.
  pub fn request_turn(&mut self, direction: Direction) -> bool {
    if self.state != SessionState::Playing {
      return false;
    }
    self.turns.request_turn(self.head.direction(), direction)
  }

  /// Advances the round by one tick: resolves the pending turn, moves the head, records its position and evaluates
  /// food, wall and self collisions, in that order. Returns `None` without changing anything once the round is over.
  pub fn tick(&mut self, rng: &mut impl Rng) -> Option<TickReport> {
    if self.state == SessionState::GameOver {
      return None;
    }

    let turn = self.turns.resolve(&mut self.head);
    self.head.step();
    self.trail.record(self.head.center(), self.score);

    let head_rect = self.head.rect();
    let ate_food = hits_food(head_rect, self.food.rect());
    if ate_food {
      self.score += 1;
      self.food.respawn(rng);
    }

    let fatal = if hits_wall(head_rect) {
      Some(FatalCollision::Wall)
    } else {
      hits_own_body(head_rect, &self.segment_positions()).map(|segment| FatalCollision::OwnBody { segment })
    };
    if fatal.is_some() {
      self.state = SessionState::GameOver;
    }

    Some(TickReport { turn, ate_food, fatal })
  }

  /// Starts a new round in place. Repeated calls leave the session in the same initial state, apart from the food
  /// position.
  pub fn reset(&mut self, rng: &mut impl Rng) {
    *self = Self::new(rng);
    debug!("Session reset, food placed at {:?}", self.food.center());
  }

  /// The centres of the body segments currently trailing the head, nearest to the head first.
  pub fn segment_positions(&self) -> Vec<Vec2> {
    self.trail.segment_positions(self.score)
  }

  pub fn state(&self) -> SessionState {
    self.state
  }

  #[cfg(test)]
  pub fn is_game_over(&self) -> bool {
    self.state == SessionState::GameOver
  }

  pub fn score(&self) -> usize {
    self.score
  }

  pub fn head(&self) -> &HeadState {
    &self.head
  }

  pub fn food(&self) -> &FoodSpawner {
    &self.food
  }

  #[cfg(test)]
  pub fn trail(&self) -> &HistoryTrail {
    &self.trail
  }

  #[cfg(test)]
  pub fn pending_turn(&self) -> Option<Direction> {
    self.turns.pending()
  }

  #[cfg(test)]
  pub fn turn_memory(&self) -> TurnMemory {
    self.turns.memory()
  }

  #[cfg(test)]
  pub(crate) fn with_head(head: HeadState, rng: &mut impl Rng) -> Self {
    let mut session = Self::new(rng);
    session.head = head;
    session.turns = TurnController::new(head.direction(), head.center());
    session
  }

  #[cfg(test)]
  pub(crate) fn place_food_at(&mut self, center: Vec2) {
    self.food.place_at(center);
  }
}

use crate::prelude::Direction;
use crate::prelude::constants::TURN_COOLDOWN_DISTANCE;
use crate::session::HeadState;
use bevy::math::Vec2;

/// A snapshot taken whenever a turn is applied. Used to decide whether the next turn is a reversal that has to wait
/// for the cooldown distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnMemory {
  /// The direction the head was travelling in before the last applied turn.
  pub last_direction: Direction,
  /// The head centre at the moment the last turn was applied.
  pub last_turn_position: Vec2,
}

/// The outcome of resolving the pending turn at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurnResolution {
  /// There was no pending turn.
  Idle,
  Applied { from: Direction, to: Direction },
  /// The pending turn reversed the direction before the last turn too early and was discarded.
  Blocked { requested: Direction, distance: f32 },
}

/// Buffers at most one requested turn and applies it once per tick, subject to the reversal cooldown.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnController {
  pending: Option<Direction>,
  memory: TurnMemory,
}

impl TurnController {
  pub fn new(initial_direction: Direction, initial_position: Vec2) -> Self {
    Self {
      pending: None,
      memory: TurnMemory {
        last_direction: initial_direction,
        last_turn_position: initial_position,
      },
    }
  }

  /// Buffers `requested` if it is a 90° turn away from `current`. A later accepted request overwrites an earlier one
  /// that has not been resolved yet. Returns whether the request was accepted.
  pub fn request_turn(&mut self, current: Direction, requested: Direction) -> bool {
    if !requested.is_perpendicular_to(current) {
      return false;
    }
    self.pending = Some(requested);
    true
  }

  /// Applies or discards the pending turn. Reversals of the direction held before the last applied turn are only
  /// applied once the head has travelled more than [`TURN_COOLDOWN_DISTANCE`] since that turn. The pending slot is
  /// always empty afterwards.
  pub fn resolve(&mut self, head: &mut HeadState) -> TurnResolution {
    let Some(requested) = self.pending.take() else {
      return TurnResolution::Idle;
    };

    let current_position = head.center();
    if requested.is_reversal_of(self.memory.last_direction) {
      let distance = current_position.distance(self.memory.last_turn_position);
      if distance <= TURN_COOLDOWN_DISTANCE {
        return TurnResolution::Blocked { requested, distance };
      }
    }

    let from = head.direction();
    self.memory = TurnMemory {
      last_direction: from,
      last_turn_position: current_position,
    };
    head.set_direction(requested);

    TurnResolution::Applied { from, to: requested }
  }

  #[cfg(test)]
  pub fn pending(&self) -> Option<Direction> {
    self.pending
  }

  #[cfg(test)]
  pub fn memory(&self) -> TurnMemory {
    self.memory
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::prelude::constants::SNAKE_SPEED;

  fn setup(direction: Direction) -> (TurnController, HeadState) {
    let start = Vec2::new(400., 300.);
    (TurnController::new(direction, start), HeadState::new(start, direction))
  }

  #[test]
  fn request_turn_accepts_only_perpendicular_directions() {
    let (mut turns, head) = setup(Direction::Right);

    assert!(!turns.request_turn(head.direction(), Direction::Right));
    assert!(!turns.request_turn(head.direction(), Direction::Left));
    assert_eq!(turns.pending(), None);

    assert!(turns.request_turn(head.direction(), Direction::Up));
    assert_eq!(turns.pending(), Some(Direction::Up));
  }

  #[test]
  fn latest_request_overwrites_pending_turn() {
    let (mut turns, mut head) = setup(Direction::Right);

    turns.request_turn(head.direction(), Direction::Up);
    turns.request_turn(head.direction(), Direction::Down);
    let resolution = turns.resolve(&mut head);

    assert_eq!(
      resolution,
      TurnResolution::Applied {
        from: Direction::Right,
        to: Direction::Down
      }
    );
    assert_eq!(head.direction(), Direction::Down);
  }

  #[test]
  fn resolve_without_pending_turn_is_a_no_op() {
    let (mut turns, mut head) = setup(Direction::Right);
    let memory = turns.memory();

    assert_eq!(turns.resolve(&mut head), TurnResolution::Idle);
    assert_eq!(head.direction(), Direction::Right);
    assert_eq!(turns.memory(), memory);
  }

  #[test]
  fn perpendicular_turn_is_applied_on_next_resolve() {
    let (mut turns, mut head) = setup(Direction::Right);
    head.step();

    turns.request_turn(head.direction(), Direction::Up);
    turns.resolve(&mut head);

    assert_eq!(head.direction(), Direction::Up);
    assert_eq!(head.angle(), 0.);
    assert_eq!(turns.pending(), None);
    assert_eq!(
      turns.memory(),
      TurnMemory {
        last_direction: Direction::Right,
        last_turn_position: head.center(),
      }
    );
  }

  #[test]
  fn reversal_within_cooldown_is_dropped() {
    let (mut turns, mut head) = setup(Direction::Right);
    turns.request_turn(head.direction(), Direction::Up);
    turns.resolve(&mut head);
    head.step();

    // Left reverses the direction held before the last turn, only one step later
    assert!(turns.request_turn(head.direction(), Direction::Left));
    let resolution = turns.resolve(&mut head);

    assert_eq!(
      resolution,
      TurnResolution::Blocked {
        requested: Direction::Left,
        distance: SNAKE_SPEED
      }
    );
    assert_eq!(head.direction(), Direction::Up);
    assert_eq!(turns.pending(), None, "Blocked turns must not be retried");
  }

  #[test]
  fn reversal_after_cooldown_is_applied() {
    let (mut turns, mut head) = setup(Direction::Right);
    turns.request_turn(head.direction(), Direction::Up);
    turns.resolve(&mut head);
    let turn_position = head.center();

    // 4 steps of 8 = 32 exceeds the cooldown distance of 26.25
    for _ in 0..4 {
      head.step();
    }
    turns.request_turn(head.direction(), Direction::Left);
    let resolution = turns.resolve(&mut head);

    assert_eq!(
      resolution,
      TurnResolution::Applied {
        from: Direction::Up,
        to: Direction::Left
      }
    );
    assert_eq!(head.direction(), Direction::Left);
    assert_eq!(turns.memory().last_direction, Direction::Up);
    assert_eq!(turns.memory().last_turn_position, turn_position + Vec2::new(0., -4. * SNAKE_SPEED));
  }

  #[test]
  fn reversal_exactly_at_cooldown_boundary_is_still_blocked() {
    let (mut turns, mut head) = setup(Direction::Right);
    turns.request_turn(head.direction(), Direction::Up);
    turns.resolve(&mut head);

    // 3 steps of 8 = 24 does not exceed the cooldown distance
    for _ in 0..3 {
      head.step();
    }
    turns.request_turn(head.direction(), Direction::Left);

    assert!(matches!(turns.resolve(&mut head), TurnResolution::Blocked { .. }));
    assert_eq!(head.direction(), Direction::Up);
  }

  #[test]
  fn non_reversal_turn_ignores_cooldown() {
    let (mut turns, mut head) = setup(Direction::Right);
    turns.request_turn(head.direction(), Direction::Up);
    turns.resolve(&mut head);
    head.step();

    // Right is not a reversal of the direction before the last turn (Right)
    turns.request_turn(head.direction(), Direction::Right);

    assert!(matches!(turns.resolve(&mut head), TurnResolution::Applied { .. }));
    assert_eq!(head.direction(), Direction::Right);
  }
}

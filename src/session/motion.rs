use crate::prelude::Direction;
use crate::prelude::constants::{HEAD_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
use bevy::math::{Rect, Vec2};

/// The position and heading of the snake head, in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadState {
  center: Vec2,
  direction: Direction,
}

impl HeadState {
  pub fn new(center: Vec2, direction: Direction) -> Self {
    Self { center, direction }
  }

  /// The head state at the start of a round: centred in the arena and travelling right.
  pub fn initial() -> Self {
    Self::new(Self::initial_center(), Direction::Right)
  }

  pub fn initial_center() -> Vec2 {
    Vec2::new((SCREEN_WIDTH / 2.).floor(), (SCREEN_HEIGHT / 2.).floor())
  }

  /// Moves the head by one fixed step along its current direction.
  pub fn step(&mut self) {
    self.center += self.direction.velocity();
  }

  /// The bounding box of the head. Rotating the sprite never changes the size of the box.
  pub fn rect(&self) -> Rect {
    Rect::from_center_size(self.center, HEAD_SIZE)
  }

  pub fn center(&self) -> Vec2 {
    self.center
  }

  pub fn direction(&self) -> Direction {
    self.direction
  }

  pub fn angle(&self) -> f32 {
    self.direction.angle()
  }

  pub(super) fn set_direction(&mut self, direction: Direction) {
    self.direction = direction;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::prelude::constants::SNAKE_SPEED;

  #[test]
  fn initial_head_is_centred_and_moving_right() {
    let head = HeadState::initial();

    assert_eq!(head.center(), Vec2::new(459., 306.));
    assert_eq!(head.direction(), Direction::Right);
    assert_eq!(head.angle(), 270.);
  }

  #[test]
  fn step_translates_by_one_velocity() {
    let mut head = HeadState::new(Vec2::new(100., 100.), Direction::Down);

    head.step();
    head.step();

    assert_eq!(head.center(), Vec2::new(100., 100. + 2. * SNAKE_SPEED));
  }

  #[test]
  fn rect_stays_centred_with_constant_size_across_turns() {
    let mut head = HeadState::new(Vec2::new(100., 100.), Direction::Right);
    head.step();
    let before = head.rect();

    head.set_direction(Direction::Up);
    head.step();
    let after = head.rect();

    assert_eq!(before.size(), HEAD_SIZE);
    assert_eq!(after.size(), HEAD_SIZE);
    assert_eq!(after.center(), head.center());
    assert_eq!(after.center(), before.center() + Vec2::new(0., -SNAKE_SPEED));
  }
}

use crate::prelude::constants::SNAKE_SPEED;
use bevy::math::Vec2;
use bevy::reflect::Reflect;
use std::fmt::Display;

/// One of the four cardinal directions the snake head can travel in. The velocity of every direction is axis-aligned
/// and has a magnitude of exactly [`SNAKE_SPEED`], in screen space (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Direction {
  Up,
  Down,
  Left,
  Right,
}

impl Direction {
  /// The displacement applied to the head per tick when travelling in this direction.
  pub fn velocity(self) -> Vec2 {
    match self {
      Direction::Up => Vec2::new(0., -SNAKE_SPEED),
      Direction::Down => Vec2::new(0., SNAKE_SPEED),
      Direction::Left => Vec2::new(-SNAKE_SPEED, 0.),
      Direction::Right => Vec2::new(SNAKE_SPEED, 0.),
    }
  }

  /// The counter-clockwise sprite rotation in degrees, assuming the base sprite faces up.
  pub fn angle(self) -> f32 {
    match self {
      Direction::Up => 0.,
      Direction::Left => 90.,
      Direction::Down => 180.,
      Direction::Right => 270.,
    }
  }

  pub fn opposite(self) -> Self {
    match self {
      Direction::Up => Direction::Down,
      Direction::Down => Direction::Up,
      Direction::Left => Direction::Right,
      Direction::Right => Direction::Left,
    }
  }

  pub fn is_horizontal(self) -> bool {
    matches!(self, Direction::Left | Direction::Right)
  }

  /// Returns true if this direction lies on the other axis than `other`, i.e. is a 90° turn away from it.
  pub fn is_perpendicular_to(self, other: Direction) -> bool {
    self.is_horizontal() != other.is_horizontal()
  }

  /// Returns true if this direction is the component-wise negation of `other`.
  pub fn is_reversal_of(self, other: Direction) -> bool {
    self == other.opposite()
  }
}

impl Display for Direction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:?}", self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

  #[test]
  fn velocity_has_exactly_one_non_zero_axis_with_snake_speed() {
    for direction in ALL {
      let velocity = direction.velocity();
      assert!((velocity.x == 0.) != (velocity.y == 0.), "{direction} is not axis-aligned");
      assert_eq!(velocity.length(), SNAKE_SPEED);
    }
  }

  #[test]
  fn up_moves_towards_the_top_of_the_screen() {
    assert!(Direction::Up.velocity().y < 0.);
    assert!(Direction::Down.velocity().y > 0.);
  }

  #[test]
  fn angle_matches_direction() {
    assert_eq!(Direction::Up.angle(), 0.);
    assert_eq!(Direction::Left.angle(), 90.);
    assert_eq!(Direction::Down.angle(), 180.);
    assert_eq!(Direction::Right.angle(), 270.);
  }

  #[test]
  fn opposite_negates_velocity() {
    for direction in ALL {
      assert_eq!(direction.opposite().velocity(), -direction.velocity());
      assert!(direction.opposite().is_reversal_of(direction));
      assert!(!direction.is_reversal_of(direction));
    }
  }

  #[test]
  fn perpendicular_only_across_axes() {
    assert!(Direction::Up.is_perpendicular_to(Direction::Left));
    assert!(Direction::Right.is_perpendicular_to(Direction::Down));
    assert!(!Direction::Up.is_perpendicular_to(Direction::Down));
    assert!(!Direction::Left.is_perpendicular_to(Direction::Left));
  }
}

use crate::prelude::constants::{FOOD_EDGE_MARGIN, FOOD_SIZE, FOOD_TOP_MARGIN, SCREEN_HEIGHT, SCREEN_WIDTH};
use bevy::log::*;
use bevy::math::{Rect, Vec2};
use rand::Rng;

/// Holds the position of the single food item and moves it elsewhere once eaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodSpawner {
  center: Vec2,
}

impl FoodSpawner {
  pub fn new(rng: &mut impl Rng) -> Self {
    Self {
      center: random_food_position(rng),
    }
  }

  /// Moves the food to a new random position within [`FoodSpawner::spawn_area`]. The snake body is not taken into
  /// account, so the food may appear underneath it.
  pub fn respawn(&mut self, rng: &mut impl Rng) {
    let previous = self.center;
    let mut next = random_food_position(rng);
    while next == previous {
      next = random_food_position(rng);
    }
    self.center = next;
    trace!("Respawned food at ({}, {})", next.x, next.y);
  }

  /// The area the food centre is sampled from, keeping clear of the arena edges and the score label.
  pub fn spawn_area() -> Rect {
    Rect::new(
      FOOD_EDGE_MARGIN,
      FOOD_TOP_MARGIN,
      SCREEN_WIDTH - FOOD_EDGE_MARGIN,
      SCREEN_HEIGHT - FOOD_EDGE_MARGIN,
    )
  }

  pub fn center(&self) -> Vec2 {
    self.center
  }

  pub fn rect(&self) -> Rect {
    Rect::from_center_size(self.center, FOOD_SIZE)
  }

  #[cfg(test)]
  pub(crate) fn place_at(&mut self, center: Vec2) {
    self.center = center;
  }
}

/// Samples a whole-pixel position uniformly from [`FoodSpawner::spawn_area`], bounds inclusive.
fn random_food_position(rng: &mut impl Rng) -> Vec2 {
  let area = FoodSpawner::spawn_area();
  let x = rng.random_range(area.min.x as i32..=area.max.x as i32);
  let y = rng.random_range(area.min.y as i32..=area.max.y as i32);

  Vec2::new(x as f32, y as f32)
}

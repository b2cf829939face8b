use crate::prelude::constants::{BODY_SIZE, IGNORE_SEGMENTS, SCREEN_HEIGHT, SCREEN_WIDTH};
use bevy::math::{Rect, Vec2};
use std::fmt::Display;

/// A collision that ends the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatalCollision {
  Wall,
  /// The head overlapped its own body. Holds the index of the segment hit, counted from the head.
  OwnBody { segment: usize },
}

impl Display for FatalCollision {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      FatalCollision::Wall => write!(f, "hit the wall"),
      FatalCollision::OwnBody { segment } => write!(f, "hit its own body (segment {})", segment),
    }
  }
}

/// Returns true if the two rectangles share a non-empty area. Rectangles that merely touch do not overlap.
pub fn overlaps(a: Rect, b: Rect) -> bool {
  !a.intersect(b).is_empty()
}

/// The rectangle the head must stay within.
pub fn arena() -> Rect {
  Rect::new(0., 0., SCREEN_WIDTH, SCREEN_HEIGHT)
}

pub fn hits_food(head: Rect, food: Rect) -> bool {
  overlaps(head, food)
}

/// Returns true if any edge of the head extends beyond the arena.
pub fn hits_wall(head: Rect) -> bool {
  let arena = arena();
  head.min.x < arena.min.x || head.max.x > arena.max.x || head.min.y < arena.min.y || head.max.y > arena.max.y
}

/// Tests the head against the body segment centres, nearest to the head first. The first [`IGNORE_SEGMENTS`]
/// segments are skipped since they overlap the head right after every turn. Returns the index of the first segment
/// hit.
pub fn hits_own_body(head: Rect, segments: &[Vec2]) -> Option<usize> {
  segments
    .iter()
    .enumerate()
    .skip(IGNORE_SEGMENTS)
    .find(|(_, center)| overlaps(head, body_rect(**center)))
    .map(|(index, _)| index)
}

/// The bounding box of a body segment centred on `center`.
pub fn body_rect(center: Vec2) -> Rect {
  Rect::from_center_size(center, BODY_SIZE)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::prelude::constants::{FOOD_SIZE, HEAD_SIZE};

  fn head_at(x: f32, y: f32) -> Rect {
    Rect::from_center_size(Vec2::new(x, y), HEAD_SIZE)
  }

  #[test]
  fn ignore_segments_is_derived_from_cooldown_distance() {
    // floor(35 * 0.75 / 8) + 1
    assert_eq!(IGNORE_SEGMENTS, 4);
  }

  #[test]
  fn hits_food_when_rects_overlap() {
    let food = Rect::from_center_size(Vec2::new(120., 100.), FOOD_SIZE);

    assert!(hits_food(head_at(100., 100.), food));
    assert!(!hits_food(head_at(50., 100.), food));
  }

  #[test]
  fn touching_edges_do_not_overlap() {
    let a = Rect::new(0., 0., 10., 10.);
    let b = Rect::new(10., 0., 20., 10.);

    assert!(!overlaps(a, b));
    assert!(overlaps(a, Rect::new(9., 0., 20., 10.)));
  }

  #[test]
  fn hits_wall_on_every_edge() {
    let half = HEAD_SIZE.x / 2.;

    assert!(!hits_wall(head_at(half, half)));
    assert!(!hits_wall(head_at(SCREEN_WIDTH - half, SCREEN_HEIGHT - half)));
    assert!(hits_wall(head_at(half - 1., 300.)));
    assert!(hits_wall(head_at(SCREEN_WIDTH - half + 1., 300.)));
    assert!(hits_wall(head_at(400., half - 1.)));
    assert!(hits_wall(head_at(400., SCREEN_HEIGHT - half + 1.)));
  }

  #[test]
  fn hits_own_body_never_reports_ignored_segments() {
    let head = head_at(200., 200.);
    let segments = vec![Vec2::new(200., 200.); IGNORE_SEGMENTS];

    assert_eq!(hits_own_body(head, &segments), None);
  }

  #[test]
  fn hits_own_body_reports_first_overlapping_segment_after_ignored_ones() {
    let head = head_at(200., 200.);
    let mut segments = vec![Vec2::new(200., 200.); IGNORE_SEGMENTS];
    segments.push(Vec2::new(500., 500.));
    segments.push(Vec2::new(210., 205.));
    segments.push(Vec2::new(200., 200.));

    assert_eq!(hits_own_body(head, &segments), Some(IGNORE_SEGMENTS + 1));
  }

  #[test]
  fn fatal_collision_display() {
    assert_eq!(FatalCollision::Wall.to_string(), "hit the wall");
    assert_eq!(
      FatalCollision::OwnBody { segment: 5 }.to_string(),
      "hit its own body (segment 5)"
    );
  }
}

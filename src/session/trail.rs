use crate::prelude::constants::BODY_SPACING;
use bevy::math::Vec2;
use std::collections::VecDeque;

/// The recent positions of the head centre, most recent first. Body segments are placed on every
/// [`BODY_SPACING`]th entry, so the trail only needs to be as deep as the body is long.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryTrail {
  positions: VecDeque<Vec2>,
}

impl HistoryTrail {
  /// The maximum number of positions retained for the given score.
  pub fn capacity_for(score: usize) -> usize {
    (score + 2) * BODY_SPACING
  }

  /// Records `position` as the most recent head position and drops the oldest entries beyond the capacity for
  /// `score`.
  pub fn record(&mut self, position: Vec2, score: usize) {
    self.positions.push_front(position);
    self.positions.truncate(Self::capacity_for(score));
  }

  /// The centres of up to `score` body segments, nearest to the head first. A segment whose history index does not
  /// exist yet is omitted.
  pub fn segment_positions(&self, score: usize) -> Vec<Vec2> {
    (0..score)
      .filter_map(|i| self.positions.get((i + 1) * BODY_SPACING).copied())
      .collect()
  }

  #[cfg(test)]
  pub fn get(&self, index: usize) -> Option<Vec2> {
    self.positions.get(index).copied()
  }

  #[cfg(test)]
  pub fn len(&self) -> usize {
    self.positions.len()
  }

  #[cfg(test)]
  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }
}

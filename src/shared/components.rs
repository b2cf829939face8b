use bevy::prelude::Component;

/// A marker component for the snake head sprite.
#[derive(Component)]
pub struct SnakeHead;

/// A body segment sprite. Holds the index of the segment, counted from the head.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodySegment(pub usize);

/// A marker component for the food sprite.
#[derive(Component)]
pub struct Food;

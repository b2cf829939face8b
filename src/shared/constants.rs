use bevy::color::Color;
use bevy::math::Vec2;

// General and rendering
// --------------------------------//

/// The title of the primary window.
pub(crate) const WINDOW_TITLE: &str = "Drift Snake";

/// The width of the playable arena, in screen pixels.
pub(crate) const SCREEN_WIDTH: f32 = 918.;

/// The height of the playable arena, in screen pixels.
pub(crate) const SCREEN_HEIGHT: f32 = 612.;

/// The number of game ticks per second. Drives the fixed timestep of the game loop.
pub(crate) const FPS: f64 = 30.;

/// The path of the sprite sheet image, relative to the assets folder.
pub(crate) const SPRITE_SHEET_IMAGE: &str = "snake_sprites.png";

/// The path of the sprite sheet frame metadata, relative to the assets folder.
pub(crate) const SPRITE_SHEET_METADATA: &str = "snake_sprites.json";

pub(crate) const CLEAR_COLOUR: Color = Color::srgb(0.04, 0.04, 0.04);
pub(crate) const ARENA_COLOUR: Color = Color::BLACK;
pub(crate) const TEXT_COLOUR: Color = Color::WHITE;
pub(crate) const HEAD_FALLBACK_COLOUR: Color = Color::srgb(0., 200. / 255., 0.);
pub(crate) const BODY_FALLBACK_COLOUR: Color = Color::srgb(0., 150. / 255., 0.);
pub(crate) const FOOD_FALLBACK_COLOUR: Color = Color::srgb(200. / 255., 0., 0.);

/// The alpha of the overlay shown on top of the arena once the round is over.
pub(crate) const GAME_OVER_OVERLAY_ALPHA: f32 = 150. / 255.;

pub(crate) const SCORE_FONT: f32 = 50.;
pub(crate) const GAME_OVER_FONT: f32 = 75.;
pub(crate) const RESTART_FONT: f32 = 40.;

// Controls and movement
// --------------------------------//

/// The distance the snake head travels per tick along its current direction.
pub(crate) const SNAKE_SPEED: f32 = 8.;

/// The fraction of the head edge length the head has to travel after a turn before it may reverse the direction it
/// had before that turn.
pub(crate) const HEAD_TURN_FACTOR: f32 = 0.75;

/// The minimum distance from the last turn position before a reversal turn is accepted.
pub(crate) const TURN_COOLDOWN_DISTANCE: f32 = HEAD_SIZE.x * HEAD_TURN_FACTOR;

// Snake and gameplay constants
// --------------------------------//

/// The size of the snake head sprite and its collider.
pub(crate) const HEAD_SIZE: Vec2 = Vec2::new(35., 35.);

/// The size of each body segment sprite and its collider.
pub(crate) const BODY_SIZE: Vec2 = Vec2::new(27., 22.);

/// The size of the food sprite and its collider.
pub(crate) const FOOD_SIZE: Vec2 = Vec2::new(18., 19.);

/// The number of recorded head positions (i.e. ticks) between two body segments.
pub(crate) const BODY_SPACING: usize = 5;

/// Number of body segments closest to the head that are *not* tested for self-collision. Right after a turn, these
/// segments still overlap the head by construction.
pub(crate) const IGNORE_SEGMENTS: usize = (TURN_COOLDOWN_DISTANCE / SNAKE_SPEED) as usize + 1;

/// The minimum distance between the food centre and the left, right and bottom arena edges.
pub(crate) const FOOD_EDGE_MARGIN: f32 = 30.;

/// The minimum distance between the food centre and the top arena edge. Larger than [`FOOD_EDGE_MARGIN`] to keep the
/// food clear of the score label.
pub(crate) const FOOD_TOP_MARGIN: f32 = 60.;

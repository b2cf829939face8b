use crate::camera::screen_to_world;
use crate::prelude::Settings;
use crate::prelude::constants::IGNORE_SEGMENTS;
use crate::session::{GameSession, arena, body_rect};
use bevy::app::{App, Plugin, Update};
use bevy::color::Color;
use bevy::color::palettes::tailwind;
use bevy::math::{Isometry2d, Rect, Vec2};
use bevy::prelude::{Gizmos, IntoScheduleConfigs, Res, resource_exists};

/// A plugin that outlines every bounding box used for collision detection.
pub struct GizmosPlugin;

impl Plugin for GizmosPlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(Update, render_gizmos_system.run_if(resource_exists::<GameSession>));
  }
}

/// A rectangle outline in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Outline {
  center: Vec2,
  size: Vec2,
  colour: Color,
}

impl Outline {
  fn from_screen_rect(rect: Rect, colour: Color) -> Self {
    Self {
      center: screen_to_world(rect.center()),
      size: rect.size(),
      colour,
    }
  }
}

/// The arena, head, food and body segment boxes of the session. Segments that are never tested for self collision
/// are drawn in a muted colour.
fn collision_outlines(session: &GameSession) -> Vec<Outline> {
  let mut outlines = vec![
    Outline::from_screen_rect(arena(), Color::from(tailwind::SLATE_500)),
    Outline::from_screen_rect(session.food().rect(), Color::from(tailwind::RED_400)),
  ];
  for (index, center) in session.segment_positions().into_iter().enumerate() {
    let colour = if index < IGNORE_SEGMENTS {
      tailwind::NEUTRAL_500
    } else {
      tailwind::AMBER_400
    };
    outlines.push(Outline::from_screen_rect(body_rect(center), Color::from(colour)));
  }
  outlines.push(Outline::from_screen_rect(
    session.head().rect(),
    Color::from(tailwind::CYAN_300),
  ));

  outlines
}

fn render_gizmos_system(mut gizmos: Gizmos, settings: Res<Settings>, session: Res<GameSession>) {
  if !settings.general.display_collision_gizmos {
    return;
  }

  for outline in collision_outlines(&session) {
    gizmos.rect_2d(Isometry2d::from_translation(outline.center), outline.size, outline.colour);
  }
}

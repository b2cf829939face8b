use crate::prelude::constants::{
  BODY_FALLBACK_COLOUR, BODY_SIZE, FOOD_FALLBACK_COLOUR, FOOD_SIZE, HEAD_FALLBACK_COLOUR, HEAD_SIZE,
};
use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::image::{TextureAtlas, TextureAtlasLayout};
use bevy::math::{URect, UVec2};
use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Everything that can go wrong while turning the sprite sheet into usable sprites. None of these are fatal: the
/// loading plugin logs them and falls back to solid colour sprites.
#[derive(Debug, Error)]
pub enum SpriteSheetError {
  #[error("failed to read sprite sheet metadata: {0}")]
  Io(#[from] std::io::Error),
  #[error("invalid sprite sheet metadata: {0}")]
  InvalidMetadata(#[from] serde_json::Error),
  #[error("sprite [{0}] is missing from the sprite sheet metadata")]
  MissingSprite(String),
  #[error("sprite [{0}] has an empty frame")]
  EmptyFrame(String),
  #[error("frame of sprite [{name}] at {frame:?} lies outside the {image_size} sprite sheet image")]
  FrameOutOfBounds {
    name: String,
    frame: URect,
    image_size: UVec2,
  },
  #[error("sprite sheet image unavailable: {0}")]
  ImageUnavailable(String),
  #[error("sprite sheet metadata unavailable: {0}")]
  MetadataUnavailable(String),
}

/// Frame metadata for a sprite sheet in the TexturePacker "hash" layout. Only the frame rectangles are used, any
/// other keys are ignored.
#[derive(Asset, TypePath, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpriteSheetMeta {
  frames: HashMap<String, FrameEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
struct FrameEntry {
  frame: FrameRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
struct FrameRect {
  x: u32,
  y: u32,
  w: u32,
  h: u32,
}

impl SpriteSheetMeta {
  pub fn from_slice(bytes: &[u8]) -> Result<Self, SpriteSheetError> {
    Ok(serde_json::from_slice(bytes)?)
  }

  /// The pixel rectangle of the named sprite within the sprite sheet image.
  pub fn frame(&self, name: &str) -> Result<URect, SpriteSheetError> {
    let entry = self
      .frames
      .get(name)
      .ok_or_else(|| SpriteSheetError::MissingSprite(name.to_string()))?;
    let FrameRect { x, y, w, h } = entry.frame;
    if w == 0 || h == 0 {
      return Err(SpriteSheetError::EmptyFrame(name.to_string()));
    }

    Ok(URect::new(x, y, x.saturating_add(w), y.saturating_add(h)))
  }
}

/// Loads [`SpriteSheetMeta`] from `.json` files.
#[derive(Default)]
pub struct SpriteSheetMetaLoader;

impl AssetLoader for SpriteSheetMetaLoader {
  type Asset = SpriteSheetMeta;
  type Settings = ();
  type Error = SpriteSheetError;

  async fn load(
    &self,
    reader: &mut dyn Reader,
    _settings: &(),
    _load_context: &mut LoadContext<'_>,
  ) -> Result<Self::Asset, Self::Error> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    SpriteSheetMeta::from_slice(&bytes)
  }

  fn extensions(&self) -> &[&str] {
    &["json"]
  }
}

/// The three sprites the game draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
  Head,
  Body,
  Food,
}

impl SpriteKind {
  #[cfg(test)]
  pub const ALL: [SpriteKind; 3] = [SpriteKind::Head, SpriteKind::Body, SpriteKind::Food];

  /// The key of this sprite in the sprite sheet metadata.
  pub fn name(&self) -> &'static str {
    match self {
      SpriteKind::Head => "head",
      SpriteKind::Body => "body",
      SpriteKind::Food => "food",
    }
  }

  /// The size the sprite is drawn at, regardless of its size in the sprite sheet.
  pub fn size(&self) -> Vec2 {
    match self {
      SpriteKind::Head => HEAD_SIZE,
      SpriteKind::Body => BODY_SIZE,
      SpriteKind::Food => FOOD_SIZE,
    }
  }

  pub fn fallback_colour(&self) -> Color {
    match self {
      SpriteKind::Head => HEAD_FALLBACK_COLOUR,
      SpriteKind::Body => BODY_FALLBACK_COLOUR,
      SpriteKind::Food => FOOD_FALLBACK_COLOUR,
    }
  }
}

/// Texture atlas indices of the three sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteIndices {
  pub head: usize,
  pub body: usize,
  pub food: usize,
}

impl SpriteIndices {
  pub fn get(&self, kind: SpriteKind) -> usize {
    match kind {
      SpriteKind::Head => self.head,
      SpriteKind::Body => self.body,
      SpriteKind::Food => self.food,
    }
  }
}

/// Builds a texture atlas layout holding the frames of all [`SpriteKind`]s. Fails if any frame is missing, empty or
/// does not fit inside an image of `image_size`.
pub fn build_atlas(
  meta: &SpriteSheetMeta,
  image_size: UVec2,
) -> Result<(TextureAtlasLayout, SpriteIndices), SpriteSheetError> {
  let mut layout = TextureAtlasLayout::new_empty(image_size);
  let mut add = |kind: SpriteKind| -> Result<usize, SpriteSheetError> {
    let frame = meta.frame(kind.name())?;
    if frame.max.x > image_size.x || frame.max.y > image_size.y {
      return Err(SpriteSheetError::FrameOutOfBounds {
        name: kind.name().to_string(),
        frame,
        image_size,
      });
    }
    Ok(layout.add_texture(frame))
  };
  let indices = SpriteIndices {
    head: add(SpriteKind::Head)?,
    body: add(SpriteKind::Body)?,
    food: add(SpriteKind::Food)?,
  };

  Ok((layout, indices))
}

/// A resource that knows how to draw each [`SpriteKind`]. Inserted once loading has finished.
#[derive(Resource, Debug, Clone)]
pub enum SpriteAssets {
  Atlas {
    image: Handle<Image>,
    layout: Handle<TextureAtlasLayout>,
    indices: SpriteIndices,
  },
  /// Solid colour rectangles of the same size, used when the sprite sheet could not be loaded.
  Fallback,
}

impl SpriteAssets {
  pub fn sprite(&self, kind: SpriteKind) -> Sprite {
    match self {
      SpriteAssets::Atlas { image, layout, indices } => Sprite {
        image: image.clone(),
        texture_atlas: Some(TextureAtlas {
          layout: layout.clone(),
          index: indices.get(kind),
        }),
        custom_size: Some(kind.size()),
        ..default()
      },
      SpriteAssets::Fallback => Sprite::from_color(kind.fallback_colour(), kind.size()),
    }
  }

  pub fn is_fallback(&self) -> bool {
    matches!(self, SpriteAssets::Fallback)
  }
}

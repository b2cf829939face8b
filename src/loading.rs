use crate::app_states::AppState;
use crate::prelude::constants::{SPRITE_SHEET_IMAGE, SPRITE_SHEET_METADATA};
use crate::sprite_sheet::{SpriteAssets, SpriteSheetError, SpriteSheetMeta, SpriteSheetMetaLoader, build_atlas};
use bevy::asset::LoadState;
use bevy::image::TextureAtlasLayout;
use bevy::prelude::*;

/// A plugin responsible for loading the sprite sheet and transitioning to the next app state once it is ready. This
/// plugin is intended to be run once at the start of the application.
pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
  fn build(&self, app: &mut App) {
    app
      .init_asset::<SpriteSheetMeta>()
      .init_asset_loader::<SpriteSheetMetaLoader>()
      .add_systems(OnEnter(AppState::Loading), start_loading_system)
      .add_systems(Update, finish_loading_system.run_if(in_state(AppState::Loading)));
  }
}

#[derive(Resource)]
struct SpriteSheetHandles {
  image: Handle<Image>,
  meta: Handle<SpriteSheetMeta>,
}

fn start_loading_system(mut commands: Commands, asset_server: Res<AssetServer>) {
  commands.insert_resource(SpriteSheetHandles {
    image: asset_server.load(SPRITE_SHEET_IMAGE),
    meta: asset_server.load(SPRITE_SHEET_METADATA),
  });
  debug!("Loading sprite sheet [{}] with [{}]", SPRITE_SHEET_IMAGE, SPRITE_SHEET_METADATA);
}

/// Waits until both sprite sheet files have either loaded or failed, then inserts [`SpriteAssets`] and starts the
/// first round. Any failure results in solid colour sprites.
fn finish_loading_system(
  mut commands: Commands,
  asset_server: Res<AssetServer>,
  handles: Res<SpriteSheetHandles>,
  images: Res<Assets<Image>>,
  metas: Res<Assets<SpriteSheetMeta>>,
  mut layouts: ResMut<Assets<TextureAtlasLayout>>,
  mut next_state: ResMut<NextState<AppState>>,
) {
  debug_once!("Waiting for sprite sheet to load...");
  let Some(readiness) = check_load_states(
    asset_server.load_state(&handles.image),
    asset_server.load_state(&handles.meta),
  ) else {
    return;
  };

  let sprite_assets = match readiness.and_then(|_| atlas_from_loaded(&handles, &images, &metas, &mut layouts)) {
    Ok(sprite_assets) => {
      info!("✅  Sprite sheet loaded");
      sprite_assets
    }
    Err(error) => {
      warn!("Using solid colour sprites: {}", error);
      SpriteAssets::Fallback
    }
  };

  commands.insert_resource(sprite_assets);
  commands.remove_resource::<SpriteSheetHandles>();
  next_state.set(AppState::Playing);
}

/// Returns `None` while either file is still loading, otherwise whether both loaded successfully.
fn check_load_states(image: LoadState, meta: LoadState) -> Option<Result<(), SpriteSheetError>> {
  match (image, meta) {
    (LoadState::Failed(error), _) => Some(Err(SpriteSheetError::ImageUnavailable(error.to_string()))),
    (_, LoadState::Failed(error)) => Some(Err(SpriteSheetError::MetadataUnavailable(error.to_string()))),
    (LoadState::Loaded, LoadState::Loaded) => Some(Ok(())),
    _ => None,
  }
}

fn atlas_from_loaded(
  handles: &SpriteSheetHandles,
  images: &Assets<Image>,
  metas: &Assets<SpriteSheetMeta>,
  layouts: &mut Assets<TextureAtlasLayout>,
) -> Result<SpriteAssets, SpriteSheetError> {
  let image = images
    .get(&handles.image)
    .ok_or_else(|| SpriteSheetError::ImageUnavailable("image missing from asset storage".to_string()))?;
  let meta = metas
    .get(&handles.meta)
    .ok_or_else(|| SpriteSheetError::MetadataUnavailable("metadata missing from asset storage".to_string()))?;
  let (layout, indices) = build_atlas(meta, image.size())?;

  Ok(SpriteAssets::Atlas {
    image: handles.image.clone(),
    layout: layouts.add(layout),
    indices,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use bevy::asset::AssetLoadError;
  use bevy::asset::io::AssetReaderError;
  use std::path::PathBuf;
  use std::sync::Arc;

  fn failed(path: &str) -> LoadState {
    LoadState::Failed(Arc::new(AssetLoadError::AssetReaderError(AssetReaderError::NotFound(
      PathBuf::from(path),
    ))))
  }

  #[test]
  fn check_load_states_waits_for_both_files() {
    assert!(check_load_states(LoadState::Loading, LoadState::Loaded).is_none());
    assert!(check_load_states(LoadState::Loaded, LoadState::NotLoaded).is_none());
    assert!(matches!(
      check_load_states(LoadState::Loaded, LoadState::Loaded),
      Some(Ok(()))
    ));
  }

  #[test]
  fn check_load_states_reports_failed_image() {
    let result = check_load_states(failed(SPRITE_SHEET_IMAGE), LoadState::Loaded);

    let Some(Err(SpriteSheetError::ImageUnavailable(reason))) = &result else {
      panic!("Expected the image to be reported as unavailable, got {:?}", result);
    };
    assert!(reason.contains(SPRITE_SHEET_IMAGE));
  }

  #[test]
  fn check_load_states_reports_failed_metadata() {
    let result = check_load_states(LoadState::Loaded, failed(SPRITE_SHEET_METADATA));
    assert!(matches!(result, Some(Err(SpriteSheetError::MetadataUnavailable(_)))));

    // A failed file ends loading even while the other one is still in flight
    let result = check_load_states(LoadState::Loading, failed(SPRITE_SHEET_METADATA));
    assert!(matches!(result, Some(Err(SpriteSheetError::MetadataUnavailable(_)))));
  }

  #[test]
  fn atlas_from_loaded_reports_missing_image() {
    let handles = SpriteSheetHandles {
      image: Handle::default(),
      meta: Handle::default(),
    };
    let images = Assets::<Image>::default();
    let metas = Assets::<SpriteSheetMeta>::default();
    let mut layouts = Assets::<TextureAtlasLayout>::default();

    let result = atlas_from_loaded(&handles, &images, &metas, &mut layouts);

    assert!(matches!(result, Err(SpriteSheetError::ImageUnavailable(_))));
  }

  #[test]
  fn atlas_from_loaded_builds_atlas_from_stored_assets() {
    let mut images = Assets::<Image>::default();
    let mut metas = Assets::<SpriteSheetMeta>::default();
    let mut layouts = Assets::<TextureAtlasLayout>::default();
    let meta = SpriteSheetMeta::from_slice(
      br#"{ "frames": {
        "head": { "frame": { "x": 0, "y": 0, "w": 8, "h": 8 } },
        "body": { "frame": { "x": 8, "y": 0, "w": 8, "h": 8 } },
        "food": { "frame": { "x": 16, "y": 0, "w": 8, "h": 8 } }
      } }"#,
    )
    .expect("Failed to parse metadata");
    let handles = SpriteSheetHandles {
      image: images.add(Image::new_fill(
        bevy::render::render_resource::Extent3d {
          width: 24,
          height: 8,
          depth_or_array_layers: 1,
        },
        bevy::render::render_resource::TextureDimension::D2,
        &[0, 0, 0, 255],
        bevy::render::render_resource::TextureFormat::Rgba8UnormSrgb,
        bevy::asset::RenderAssetUsages::default(),
      )),
      meta: metas.add(meta),
    };

    let result = atlas_from_loaded(&handles, &images, &metas, &mut layouts).expect("Failed to build atlas");

    let SpriteAssets::Atlas { layout, indices, .. } = result else {
      panic!("Expected an atlas");
    };
    let layout = layouts.get(&layout).expect("Layout missing");
    assert_eq!(layout.len(), 3);
    assert_eq!(indices.food, 2);
  }
}

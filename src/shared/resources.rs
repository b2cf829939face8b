use bevy::app::{App, Plugin};
use bevy::prelude::{Reflect, ReflectResource, Resource};

/// A plugin that registers and initialises shared resources used across the entire application such as [`Settings`].
pub struct SharedResourcesPlugin;

impl Plugin for SharedResourcesPlugin {
  fn build(&self, app: &mut App) {
    app
      .init_resource::<Settings>()
      .register_type::<Settings>()
      .register_type::<GeneralSettings>();
  }
}

/// A resource that holds various settings that can be configured for the game. Intended for developer use only.
#[derive(Resource, Reflect, Clone, Copy, Default)]
#[reflect(Resource)]
pub struct Settings {
  pub general: GeneralSettings,
}

/// General settings, a child of the [`Settings`] resource. Intended for developer use only.
#[derive(Reflect, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct GeneralSettings {
  /// Whether to outline the bounding boxes used for collision detection.
  pub display_collision_gizmos: bool,
}

#[cfg(test)]
mod tests {
  use super::*;
  use bevy::MinimalPlugins;

  #[test]
  fn shared_resources_plugin_registers_settings() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, SharedResourcesPlugin));

    let settings = app
      .world()
      .get_resource::<Settings>()
      .expect("Failed to retrieve Settings");
    assert!(!settings.general.display_collision_gizmos);
  }
}

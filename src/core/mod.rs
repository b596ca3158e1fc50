//! Core domain: camera and app-wide setup.

mod systems;

use bevy::prelude::*;

use crate::core::systems::setup_camera;

/// Screen pixels per world unit.
pub const PIXELS_PER_UNIT: f32 = 32.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

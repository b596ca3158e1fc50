//! Movement domain: input and binding resources.

use bevy::prelude::*;

use crate::content::GameplayDefaults;

/// Per-frame input signals, already edge-detected.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MovementInput {
    pub horizontal: f32,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub jump_held: bool,
}

/// Keys feeding [`MovementInput`]. Any key in a list triggers the action.
#[derive(Resource, Debug, Clone)]
pub struct ControllerBindings {
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub jump: Vec<KeyCode>,
}

impl Default for ControllerBindings {
    fn default() -> Self {
        Self {
            left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            jump: vec![KeyCode::Space, KeyCode::KeyK],
        }
    }
}

/// Where players come back after falling out of the level.
#[derive(Resource, Debug, Clone, Copy)]
pub struct RespawnRules {
    pub spawn_point: Vec2,
    pub kill_plane_y: f32,
}

impl From<&GameplayDefaults> for RespawnRules {
    fn from(defaults: &GameplayDefaults) -> Self {
        Self {
            spawn_point: Vec2::new(defaults.spawn_point.0, defaults.spawn_point.1),
            kill_plane_y: defaults.kill_plane_y,
        }
    }
}

impl Default for RespawnRules {
    fn default() -> Self {
        Self::from(&GameplayDefaults::default())
    }
}

//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The ContentRegistry provides lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::ControllerConfig;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Controller profiles (controller_profiles.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct ControllerProfileDef {
    pub id: String,
    pub name: String,
    pub tuning: ControllerTuningDef,
}

/// Serialized form of [`ControllerConfig`]. Times are in milliseconds,
/// speeds in world units per second.
#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct ControllerTuningDef {
    pub max_horizontal_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub max_air_jump_count: u32,
    pub jump_force: (f32, f32),
    pub normal_gravity_scale: f32,
    pub jump_early_end_gravity_scale: f32,
    pub max_fall_speed_abs: f32,
    pub apex_bonus_time_ms: f32,
    #[serde(default)]
    pub hold_button_auto_jump: bool,
    pub coyote_time_ms: f32,
    pub cool_down_after_jump_ms: f32,
}

impl From<&ControllerTuningDef> for ControllerConfig {
    fn from(def: &ControllerTuningDef) -> Self {
        Self {
            max_horizontal_speed: def.max_horizontal_speed,
            acceleration: def.acceleration,
            deceleration: def.deceleration,
            max_air_jump_count: def.max_air_jump_count,
            jump_force: Vec2::new(def.jump_force.0, def.jump_force.1),
            normal_gravity_scale: def.normal_gravity_scale,
            jump_early_end_gravity_scale: def.jump_early_end_gravity_scale,
            max_fall_speed_abs: def.max_fall_speed_abs,
            apex_bonus_time_ms: def.apex_bonus_time_ms,
            hold_button_auto_jump: def.hold_button_auto_jump,
            coyote_time_ms: def.coyote_time_ms,
            cool_down_after_jump_ms: def.cool_down_after_jump_ms,
        }
    }
}

// ============================================================================
// Gameplay Defaults (gameplay_defaults.ron) - Single struct, not a list
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect, Resource)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    /// Profile from controller_profiles.ron used for the player.
    pub player_profile_id: String,
    pub spawn_point: (f32, f32),
    /// Players below this height are respawned.
    pub kill_plane_y: f32,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            schema_version: 1,
            player_profile_id: "profile_default".to_string(),
            spawn_point: (0.0, 2.0),
            kill_plane_y: -20.0,
        }
    }
}

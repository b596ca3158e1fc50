//! Movement domain: platformer motion controller and the systems driving it.

mod bootstrap;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod resources;
mod systems;

pub use components::{CharacterMotor, Facing, GameLayer, GroundContact, GroundSensor, Player};
pub use controller::{
    ConfigError, ControllerConfig, ControllerState, MotionController, MoveInput, MoveResult,
    VerticalOutcome,
};
pub use events::JumpEvent;
pub use resources::{ControllerBindings, MovementInput, RespawnRules};

use bevy::prelude::*;

use crate::content::ContentLoadSet;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    detect_ground, init_motors, log_jump_events, read_input, respawn_fallen_players,
    step_motors, update_facing,
};

/// Ordered stages of the per-frame character update.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementSet {
    Input,
    Sense,
    Control,
    Feedback,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .init_resource::<ControllerBindings>()
            .init_resource::<RespawnRules>()
            .add_message::<JumpEvent>()
            .configure_sets(
                Update,
                (
                    MovementSet::Input,
                    MovementSet::Sense,
                    MovementSet::Control,
                    MovementSet::Feedback,
                )
                    .chain(),
            )
            .add_systems(Startup, spawn_player.after(ContentLoadSet))
            .add_systems(Update, read_input.in_set(MovementSet::Input))
            .add_systems(Update, detect_ground.in_set(MovementSet::Sense))
            .add_systems(
                Update,
                (init_motors, step_motors, respawn_fallen_players)
                    .chain()
                    .in_set(MovementSet::Control),
            )
            .add_systems(
                Update,
                (update_facing, log_jump_events).in_set(MovementSet::Feedback),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            Update,
            dev::draw_ground_sensors.after(MovementSet::Sense),
        );
    }
}

//! Movement domain: player bootstrap from data-driven controller profiles.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{ContentRegistry, GameplayDefaults};
use crate::movement::{
    CharacterMotor, Facing, GameLayer, GroundContact, GroundSensor, MotionController, Player,
    RespawnRules,
};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(0.75, 1.5);

/// Spawn the player using the profile named in the gameplay defaults.
pub(crate) fn spawn_player(
    mut commands: Commands,
    registry: Option<Res<ContentRegistry>>,
    defaults: Option<Res<GameplayDefaults>>,
    mut respawn_rules: ResMut<RespawnRules>,
) {
    let defaults = defaults.map(|d| d.clone()).unwrap_or_else(|| {
        warn!("GameplayDefaults not available, using built-in defaults");
        GameplayDefaults::default()
    });

    let controller = resolve_controller(registry.as_deref(), &defaults.player_profile_id);
    *respawn_rules = RespawnRules::from(&defaults);
    let spawn_point = respawn_rules.spawn_point;

    let gravity_scale = controller.config().normal_gravity_scale;
    info!(
        "Spawning player: profile={}, spawn={}, air_jumps={}",
        defaults.player_profile_id,
        spawn_point,
        controller.config().max_air_jump_count
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            CharacterMotor::new(controller),
            GroundSensor::below(PLAYER_SIZE.x, PLAYER_SIZE.y),
            GroundContact::default(),
            Facing::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(spawn_point.extend(1.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(gravity_scale),
            // Unit mass so jump_force maps directly to a velocity change
            Mass(1.0),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}

/// Build a controller from a registry profile, falling back to the built-in tuning.
pub(crate) fn resolve_controller(
    registry: Option<&ContentRegistry>,
    profile_id: &str,
) -> MotionController {
    let Some(registry) = registry else {
        warn!("ContentRegistry not available, using default controller tuning");
        return MotionController::default();
    };

    match registry.controller(profile_id) {
        Some(Ok(controller)) => controller,
        Some(Err(err)) => {
            warn!("Profile '{}' rejected: {}", profile_id, err);
            MotionController::default()
        }
        None => {
            warn!(
                "Profile '{}' not found in registry, using default controller tuning",
                profile_id
            );
            MotionController::default()
        }
    }
}

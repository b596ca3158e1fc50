//! Movement domain: drives each character's controller and applies its output.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{
    CharacterMotor, Facing, GroundContact, JumpEvent, MoveInput, MoveResult, MovementInput,
    Player, RespawnRules,
};

/// Reset controllers that just appeared so they start from the body's velocity.
pub(crate) fn init_motors(
    mut query: Query<
        (&mut CharacterMotor, &LinearVelocity, &mut GravityScale),
        Added<CharacterMotor>,
    >,
) {
    for (mut motor, velocity, mut gravity) in &mut query {
        let result = motor.controller.init(&MoveInput {
            velocity: velocity.0,
            gravity_scale: gravity.0,
            ..default()
        });
        gravity.0 = result.gravity_scale;
    }
}

pub(crate) fn step_motors(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut query: Query<
        (
            Entity,
            &mut CharacterMotor,
            &GroundContact,
            &ComputedMass,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
    mut jump_events: MessageWriter<JumpEvent>,
) {
    let dt = time.delta_secs();
    // First frame has no elapsed time to integrate
    if dt <= 0.0 {
        return;
    }

    for (entity, mut motor, contact, mass, mut velocity, mut gravity) in &mut query {
        let move_input = MoveInput {
            horizontal: input.horizontal,
            jump_pressed: input.jump_just_pressed,
            jump_released: input.jump_just_released,
            jump_held: input.jump_held,
            grounded: contact.0,
            velocity: velocity.0,
            gravity_scale: gravity.0,
            delta_time: dt,
        };

        let result = motor.controller.step(&move_input);
        let jump_force = motor.controller.config().jump_force;
        apply_result(&result, jump_force, mass, &mut velocity, &mut gravity);

        if result.jumped {
            debug!(
                "{entity}: jump (air={}), air_jumps_remaining={}",
                result.air_jumped,
                motor.controller.state().air_jumps_remaining
            );
            jump_events.write(JumpEvent {
                entity,
                air_jump: result.air_jumped,
            });
        }
    }
}

/// Write a controller result back onto the body. A jump adds `jump_force` as an impulse.
pub(crate) fn apply_result(
    result: &MoveResult,
    jump_force: Vec2,
    mass: &ComputedMass,
    velocity: &mut LinearVelocity,
    gravity: &mut GravityScale,
) {
    velocity.0 = result.velocity;
    gravity.0 = result.gravity_scale;

    if result.jumped {
        let mass = mass.value();
        if mass > 0.0 && mass.is_finite() {
            velocity.0 += jump_force / mass;
        } else {
            warn!("Skipping jump impulse on body with mass {mass}");
        }
    }
}

/// Hook for jump feedback (sound, particles). Only logs for now.
pub(crate) fn log_jump_events(mut events: MessageReader<JumpEvent>) {
    for event in events.read() {
        if event.air_jump {
            debug!("{}: air jump effects", event.entity);
        } else {
            debug!("{}: jump effects", event.entity);
        }
    }
}

pub(crate) fn update_facing(
    input: Res<MovementInput>,
    mut query: Query<(&mut Facing, Option<&mut Sprite>), With<CharacterMotor>>,
) {
    let facing = if input.horizontal > 0.0 {
        Facing::Right
    } else if input.horizontal < 0.0 {
        Facing::Left
    } else {
        return;
    };

    for (mut current, sprite) in &mut query {
        *current = facing;
        if let Some(mut sprite) = sprite {
            sprite.flip_x = facing == Facing::Left;
        }
    }
}

/// Send players that fell out of the level back to the spawn point with fresh controller state.
pub(crate) fn respawn_fallen_players(
    rules: Res<RespawnRules>,
    mut query: Query<
        (
            Entity,
            &mut Transform,
            &mut CharacterMotor,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    for (entity, mut transform, mut motor, mut velocity, mut gravity) in &mut query {
        if transform.translation.y >= rules.kill_plane_y {
            continue;
        }

        transform.translation = rules.spawn_point.extend(transform.translation.z);
        velocity.0 = Vec2::ZERO;

        let result = motor.controller.init(&MoveInput {
            velocity: Vec2::ZERO,
            gravity_scale: gravity.0,
            ..default()
        });
        gravity.0 = result.gravity_scale;

        info!(
            "{entity}: fell below y={}, respawned at {}",
            rules.kill_plane_y, rules.spawn_point
        );
    }
}

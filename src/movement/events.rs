//! Movement domain: messages emitted by character controllers.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired on the tick a character's controller starts a jump.
#[derive(Debug, Clone, Copy)]
pub struct JumpEvent {
    pub entity: Entity,
    /// Spent from the air-jump budget rather than the ground or coyote window.
    pub air_jump: bool,
}

impl Message for JumpEvent {}

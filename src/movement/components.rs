//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::MotionController;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Owns the motion controller driving this character's body.
#[derive(Component, Debug)]
pub struct CharacterMotor {
    pub controller: MotionController,
}

impl CharacterMotor {
    pub fn new(controller: MotionController) -> Self {
        Self { controller }
    }
}

/// Box overlap used to decide whether the character stands on something.
/// Offset is relative to the entity translation.
#[derive(Component, Debug, Clone)]
pub struct GroundSensor {
    pub size: Vec2,
    pub offset: Vec2,
}

impl GroundSensor {
    /// A thin box hugging the bottom edge of a `width` x `height` body.
    pub fn below(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width * 0.9, 0.1),
            offset: Vec2::new(0.0, -height * 0.5),
        }
    }
}

/// Latest ground sensor reading.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GroundContact(pub bool);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}


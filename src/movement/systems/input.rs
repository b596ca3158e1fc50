//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{ControllerBindings, MovementInput};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<ControllerBindings>,
    mut input: ResMut<MovementInput>,
) {
    *input = sample_input(&keyboard, &bindings);
}

/// Collapse the bound keys into one set of signals.
pub(crate) fn sample_input(
    keyboard: &ButtonInput<KeyCode>,
    bindings: &ControllerBindings,
) -> MovementInput {
    let mut horizontal = 0.0;
    if keyboard.any_pressed(bindings.left.iter().copied()) {
        horizontal -= 1.0;
    }
    if keyboard.any_pressed(bindings.right.iter().copied()) {
        horizontal += 1.0;
    }

    MovementInput {
        horizontal,
        jump_just_pressed: keyboard.any_just_pressed(bindings.jump.iter().copied()),
        jump_just_released: keyboard.any_just_released(bindings.jump.iter().copied()),
        jump_held: keyboard.any_pressed(bindings.jump.iter().copied()),
    }
}

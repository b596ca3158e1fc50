//! Core domain: startup systems.

use bevy::prelude::*;

use crate::core::PIXELS_PER_UNIT;

/// World is laid out in physics units; zoom the camera so one unit spans several pixels.
pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

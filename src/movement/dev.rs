//! Movement domain: debug-only visualisation of ground sensors.

use bevy::prelude::*;

use crate::movement::systems::collisions::sensor_origin;
use crate::movement::{GroundContact, GroundSensor};

pub(crate) fn draw_ground_sensors(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &GroundSensor, &GroundContact)>,
) {
    for (transform, sensor, contact) in &query {
        let color = if contact.0 {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.2, 0.2)
        };
        gizmos.rect_2d(
            Isometry2d::from_translation(sensor_origin(transform, sensor)),
            sensor.size,
            color,
        );
    }
}

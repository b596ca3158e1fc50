//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundContact, GroundSensor};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(Entity, &Transform, &GroundSensor, &mut GroundContact)>,
) {
    // Only floors and platforms count, never walls or other characters
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (entity, transform, sensor, mut contact) in &mut query {
        let was_grounded = contact.0;

        let shape = Collider::rectangle(sensor.size.x, sensor.size.y);
        let origin = sensor_origin(transform, sensor);
        let filter = ground_filter.clone().with_excluded_entities([entity]);
        let grounded = !spatial_query
            .shape_intersections(&shape, origin, 0.0, &filter)
            .is_empty();

        if grounded != was_grounded {
            contact.0 = grounded;
            if grounded {
                debug!("{entity}: landed");
            } else {
                debug!("{entity}: left ground");
            }
        }
    }
}

/// World-space center of the sensor box.
pub(crate) fn sensor_origin(transform: &Transform, sensor: &GroundSensor) -> Vec2 {
    transform.translation.truncate() + sensor.offset
}

//! Rooms domain: the static test level the player moves around in.

mod spawn;

use bevy::prelude::*;

use crate::rooms::spawn::spawn_test_room;

pub struct RoomsPlugin;

impl Plugin for RoomsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_test_room);
    }
}

//! ContentRegistry resource providing HashMap lookups for loaded content.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;
use crate::movement::{ConfigError, ControllerConfig, MotionController};

/// Central registry for all loaded game content.
#[derive(Resource, Default)]
pub struct ContentRegistry {
    pub profiles: HashMap<String, ControllerProfileDef>,
}

impl ContentRegistry {
    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        let mut ids: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        ids.sort_unstable();
        format!(
            "ContentRegistry loaded:\n - Controller Profiles: {} [{}]",
            self.profiles.len(),
            ids.join(", ")
        )
    }

    /// Controller built from a profile's tuning, `None` if the id is unknown.
    pub fn controller(
        &self,
        profile_id: &str,
    ) -> Option<Result<MotionController, ConfigError>> {
        self.profiles
            .get(profile_id)
            .map(|profile| MotionController::new(ControllerConfig::from(&profile.tuning)))
    }
}

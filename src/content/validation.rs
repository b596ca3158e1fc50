//! Validation for loaded content: tuning ranges and cross-references.

use super::data::*;
use super::registry::ContentRegistry;
use crate::movement::ControllerConfig;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' field '{}': {}",
            self.source_type, self.source_id, self.field, self.message
        )
    }
}

/// Validate every profile's tuning and the references in the gameplay defaults.
/// Returns a list of validation errors, empty if all content is usable.
pub fn validate_content(
    registry: &ContentRegistry,
    defaults: &GameplayDefaults,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (id, profile) in &registry.profiles {
        for err in ControllerConfig::from(&profile.tuning).validate() {
            errors.push(ValidationError {
                source_type: "ControllerProfile",
                source_id: id.clone(),
                field: err.field,
                message: err.to_string(),
            });
        }
    }

    if !registry.profiles.contains_key(&defaults.player_profile_id) {
        errors.push(ValidationError {
            source_type: "GameplayDefaults",
            source_id: "gameplay_defaults".to_string(),
            field: "player_profile_id",
            message: format!(
                "references missing ControllerProfile '{}'",
                defaults.player_profile_id
            ),
        });
    }

    let (x, y) = defaults.spawn_point;
    if !x.is_finite() || !y.is_finite() {
        errors.push(ValidationError {
            source_type: "GameplayDefaults",
            source_id: "gameplay_defaults".to_string(),
            field: "spawn_point",
            message: format!("must be finite, got ({}, {})", x, y),
        });
    } else if y <= defaults.kill_plane_y {
        errors.push(ValidationError {
            source_type: "GameplayDefaults",
            source_id: "gameplay_defaults".to_string(),
            field: "kill_plane_y",
            message: format!(
                "spawn point y={} is at or below the kill plane y={}",
                y, defaults.kill_plane_y
            ),
        });
    }

    errors
}

//! Content domain: RON-backed controller profiles and gameplay defaults.

mod data;
mod loader;
mod registry;
mod validation;

pub use data::{ControllerProfileDef, ControllerTuningDef, GameplayDefaults};
pub use loader::load_all_content;
pub use registry::ContentRegistry;
pub use validation::validate_content;

use bevy::prelude::*;
use std::path::Path;

/// Directory holding the content files, relative to the working directory.
pub const CONTENT_DIR: &str = "assets/data";

/// Systems that populate [`ContentRegistry`] and [`GameplayDefaults`].
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentLoadSet;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ControllerProfileDef>()
            .register_type::<ControllerTuningDef>()
            .register_type::<GameplayDefaults>()
            .add_systems(Startup, load_content.in_set(ContentLoadSet));
    }
}

fn load_content(mut commands: Commands) {
    match load_all_content(Path::new(CONTENT_DIR)) {
        Ok((registry, defaults)) => {
            info!("{}", registry.summary());
            let errors = validate_content(&registry, &defaults);
            for err in &errors {
                warn!("Content validation: {}", err);
            }
            commands.insert_resource(registry);
            commands.insert_resource(defaults);
        }
        Err(errors) => {
            for err in &errors {
                error!("{}", err);
            }
            warn!("Falling back to built-in controller tuning and gameplay defaults");
            commands.insert_resource(ContentRegistry::default());
            commands.insert_resource(GameplayDefaults::default());
        }
    }
}

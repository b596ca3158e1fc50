//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::ContentRegistry;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse the contents of a RON file containing a DataFile<T> wrapper.
pub(crate) fn parse_data_file<T>(file: &str, contents: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = parse_single::<DataFile<T>>(file, contents)?;
    Ok(data.items)
}

/// Parse a single RON struct (not wrapped in DataFile).
pub(crate) fn parse_single<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Index profiles by id, reporting duplicates instead of silently overwriting.
pub(crate) fn register_profiles(
    registry: &mut ContentRegistry,
    file: &str,
    profiles: Vec<ControllerProfileDef>,
) -> Vec<ContentLoadError> {
    let mut errors = Vec::new();
    for profile in profiles {
        if registry.profiles.contains_key(&profile.id) {
            errors.push(ContentLoadError {
                file: file.to_string(),
                message: format!("duplicate profile id '{}'", profile.id),
            });
            continue;
        }
        registry.profiles.insert(profile.id.clone(), profile);
    }
    errors
}

/// Load all content from assets/data/*.ron into a ContentRegistry.
/// Returns errors for any files that fail to load.
pub fn load_all_content(
    base_path: &Path,
) -> Result<(ContentRegistry, GameplayDefaults), Vec<ContentLoadError>> {
    let mut registry = ContentRegistry::default();
    let mut errors = Vec::new();

    let profiles_path = base_path.join("controller_profiles.ron");
    let profiles_file = profiles_path.display().to_string();
    match read_file(&profiles_path)
        .and_then(|contents| parse_data_file::<ControllerProfileDef>(&profiles_file, &contents))
    {
        Ok(items) => errors.extend(register_profiles(&mut registry, &profiles_file, items)),
        Err(e) => errors.push(e),
    }

    let defaults_path = base_path.join("gameplay_defaults.ron");
    let defaults_file = defaults_path.display().to_string();
    let gameplay_defaults = match read_file(&defaults_path)
        .and_then(|contents| parse_single::<GameplayDefaults>(&defaults_file, &contents))
    {
        Ok(defaults) => defaults,
        Err(e) => {
            errors.push(e);
            // gameplay_defaults is required
            return Err(errors);
        }
    };

    if errors.is_empty() {
        Ok((registry, gameplay_defaults))
    } else {
        Err(errors)
    }
}

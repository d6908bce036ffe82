use std::{fs, io::Write, path::Path};

use log::{debug, error, trace};
use tempfile::NamedTempFile;

use crate::{GardenError, Plant, Result};

/// Helper method to load the whole plant collection from file
pub fn load_plants_from_file(path: &Path) -> Result<Vec<Plant>> {
    debug!("Loading plants from file: {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| {
        error!("Failed to open plant file {}: {}", path.display(), e);
        GardenError::store_unavailable(path, e)
    })?;

    let plants: Vec<Plant> = serde_json::from_str(&content).map_err(|e| {
        error!("Failed to parse plant file {}: {}", path.display(), e);
        GardenError::store_unavailable(path, e)
    })?;

    trace!("Successfully loaded {} plants", plants.len());
    Ok(plants)
}

/// Replaces the plant file with `plants` using a temp file and rename, so
/// readers never observe a half-written document
pub fn write_plants_atomically(path: &Path, plants: &[Plant]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !dir.exists() {
        debug!("Creating parent directory: {}", dir.display());
        fs::create_dir_all(dir).map_err(|e| {
            error!("Failed to create directory {}: {}", dir.display(), e);
            GardenError::store_unavailable(path, e)
        })?;
    }

    trace!("Serializing {} plants to JSON", plants.len());
    let json = serde_json::to_string_pretty(plants).map_err(|e| {
        error!("Failed to serialize plants: {}", e);
        GardenError::store_unavailable(path, e)
    })?;

    let mut temp_file = NamedTempFile::new_in(dir).map_err(|e| {
        error!("Failed to create temporary file: {}", e);
        GardenError::store_unavailable(path, e)
    })?;

    temp_file.write_all(json.as_bytes()).map_err(|e| {
        error!("Failed to write to temporary file: {}", e);
        GardenError::store_unavailable(path, e)
    })?;

    temp_file.flush().map_err(|e| {
        error!("Failed to flush temporary file: {}", e);
        GardenError::store_unavailable(path, e)
    })?;

    debug!("Performing atomic move of temporary file to {}", path.display());
    temp_file.persist(path).map_err(|e| {
        error!("Failed to persist file {}: {}", path.display(), e.error);
        GardenError::store_unavailable(path, e.error)
    })?;

    Ok(())
}

/// Next free id: one past the highest id in use, or 1 for an empty collection
pub fn next_plant_id(plants: &[Plant]) -> Result<u64> {
    match plants.iter().map(|plant| plant.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or_else(|| {
            error!("Plant id space exhausted, highest id is {}", max);
            GardenError::invalid_input("no plant ids left to assign")
        }),
    }
}

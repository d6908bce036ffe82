use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use log::{debug, info};

use crate::{load_plants_from_file, seed_plants, write_plants_atomically, GardenError, Plant, Result};

/// Durable home of the plant collection.
///
/// Implementations always read and write the collection as a whole; there
/// are no partial updates.
pub trait PlantStore: Send {
    /// Creates the document with the seed catalog if it does not exist yet.
    ///
    /// Returns `true` when the document was created, `false` when an
    /// existing one was left untouched.
    fn initialize(&self) -> Result<bool>;

    /// Reads the entire collection.
    fn load(&self) -> Result<Vec<Plant>>;

    /// Replaces the entire collection.
    fn save(&self, plants: &[Plant]) -> Result<()>;
}

/// Stores the collection as one pretty-printed JSON array on disk.
#[derive(Debug, Clone)]
pub struct FilePlantStore {
    path: PathBuf,
}

impl FilePlantStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlantStore for FilePlantStore {
    fn initialize(&self) -> Result<bool> {
        if self.path.exists() {
            debug!(
                "Plant document already exists, leaving it untouched: {}",
                self.path.display()
            );
            return Ok(false);
        }

        let plants = seed_plants();
        write_plants_atomically(&self.path, &plants)?;
        info!(
            "Seeded {} plants into {}",
            plants.len(),
            self.path.display()
        );
        Ok(true)
    }

    fn load(&self) -> Result<Vec<Plant>> {
        load_plants_from_file(&self.path)
    }

    fn save(&self, plants: &[Plant]) -> Result<()> {
        debug!("Saving {} plants to {}", plants.len(), self.path.display());
        write_plants_atomically(&self.path, plants)
    }
}

/// Keeps the collection in memory. Used to exercise the catalog and the HTTP
/// layer without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryPlantStore {
    plants: Mutex<Option<Vec<Plant>>>,
}

impl MemoryPlantStore {
    /// A store with no document at all, as if the file were missing.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose document already holds `plants`.
    pub fn with_plants(plants: Vec<Plant>) -> Self {
        Self {
            plants: Mutex::new(Some(plants)),
        }
    }

    fn unavailable(message: impl ToString) -> GardenError {
        GardenError::store_unavailable("<memory>", message)
    }
}

impl PlantStore for MemoryPlantStore {
    fn initialize(&self) -> Result<bool> {
        let mut plants = self
            .plants
            .lock()
            .map_err(|_| Self::unavailable("memory store lock poisoned"))?;
        if plants.is_some() {
            return Ok(false);
        }
        *plants = Some(seed_plants());
        Ok(true)
    }

    fn load(&self) -> Result<Vec<Plant>> {
        let plants = self
            .plants
            .lock()
            .map_err(|_| Self::unavailable("memory store lock poisoned"))?;
        plants
            .clone()
            .ok_or_else(|| Self::unavailable("document has not been initialized"))
    }

    fn save(&self, new_plants: &[Plant]) -> Result<()> {
        let mut plants = self
            .plants
            .lock()
            .map_err(|_| Self::unavailable("memory store lock poisoned"))?;
        *plants = Some(new_plants.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::{NewPlant, WateringStatus};

    fn temp_store() -> (TempDir, FilePlantStore) {
        let dir = TempDir::new().expect("tempdir");
        let store = FilePlantStore::new(dir.path().join("plants.json"));
        (dir, store)
    }

    #[test]
    fn initialize_seeds_fresh_document() {
        let (_dir, store) = temp_store();

        assert!(store.initialize().expect("initialize"));

        let plants = store.load().expect("load");
        assert_eq!(plants.len(), 20);
        let ids: Vec<u64> = plants.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<u64>>());
        assert!(plants.iter().all(|p| !p.saved
            && p.last_watered.is_none()
            && p.watering_status == WateringStatus::default()));
    }

    #[test]
    fn initialize_never_overwrites_existing_document() {
        let (_dir, store) = temp_store();
        let fern = Plant::from_input(1, NewPlant::named("Fern")).expect("plant");
        store.save(&[fern.clone()]).expect("save");

        assert!(!store.initialize().expect("initialize"));
        assert_eq!(store.load().expect("load"), vec![fern]);
    }

    #[test]
    fn initialize_creates_missing_parent_directories() {
        let dir = TempDir::new().expect("tempdir");
        let store = FilePlantStore::new(dir.path().join("data").join("plants.json"));

        store.initialize().expect("initialize");

        assert!(store.path().exists());
    }

    #[test]
    fn load_missing_document_is_unavailable() {
        let (_dir, store) = temp_store();

        let err = store.load().unwrap_err();
        assert!(matches!(err, GardenError::StoreUnavailable { .. }));
    }

    #[test]
    fn load_corrupt_document_is_unavailable() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{ not json").expect("write");

        let err = store.load().unwrap_err();
        assert!(matches!(err, GardenError::StoreUnavailable { .. }));
    }

    #[test]
    fn load_accepts_timestamps_without_offset() {
        let (_dir, store) = temp_store();
        fs::write(
            store.path(),
            r#"[{"id": 1, "name": "Aloe", "saved": true,
                "last_watered": "2025-06-01T07:30:00.123456",
                "watering_status": {"morning": true, "evening": false}}]"#,
        )
        .expect("write");

        let plants = store.load().expect("load");

        let watered = plants[0].last_watered.expect("watered");
        assert_eq!(watered.to_rfc3339(), "2025-06-01T07:30:00.123456+00:00");
        assert!(plants[0].watering_status.morning);

        store.save(&plants).expect("save");
        let reloaded = store.load().expect("reload");
        assert_eq!(reloaded, plants);
    }

    #[test]
    fn save_of_load_is_content_stable() {
        let (_dir, store) = temp_store();
        store.initialize().expect("initialize");
        let before = fs::read_to_string(store.path()).expect("read");

        let plants = store.load().expect("load");
        store.save(&plants).expect("save");

        let after = fs::read_to_string(store.path()).expect("read");
        assert_eq!(before, after);
    }

    #[test]
    fn document_is_indented_json_array() {
        let (_dir, store) = temp_store();
        store.initialize().expect("initialize");

        let content = fs::read_to_string(store.path()).expect("read");
        assert!(content.starts_with("[\n  {"));
        assert!(content.contains("\"last_watered\": null"));
    }

    #[test]
    fn memory_store_behaves_like_missing_file_until_initialized() {
        let store = MemoryPlantStore::new();
        assert!(matches!(
            store.load(),
            Err(GardenError::StoreUnavailable { .. })
        ));

        assert!(store.initialize().expect("initialize"));
        assert!(!store.initialize().expect("initialize"));
        assert_eq!(store.load().expect("load").len(), 20);
    }
}

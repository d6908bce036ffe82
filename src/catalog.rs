//! Plant catalog service
//!
//! Business rules for listing, adding, gardening and watering plants. Every
//! operation loads the full collection from the store, mutates it in memory
//! and writes the full collection back, all while holding a single lock so
//! that concurrent requests cannot interleave their cycles. The cycle runs on
//! tokio's blocking pool since the store does synchronous file I/O.
use std::sync::{Arc, Mutex};

use log::{debug, error, info, warn};

use crate::{next_plant_id, Clock, GardenError, NewPlant, Plant, PlantStore, Result, TimeOfDay};

pub struct PlantCatalog {
    /// The backing store; the lock spans each load-mutate-save cycle
    store: Arc<Mutex<Box<dyn PlantStore>>>,

    /// Time source for watering events
    clock: Box<dyn Clock>,
}

impl PlantCatalog {
    pub fn new(store: Box<dyn PlantStore>, clock: Box<dyn Clock>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            clock,
        }
    }

    /// Returns every plant in persisted order.
    pub async fn list_all(&self) -> Result<Vec<Plant>> {
        let plants = self.with_store(|store| store.load()).await?;
        debug!("Listing {} plants", plants.len());
        Ok(plants)
    }

    /// Adds a plant built from `input` and returns the stored record.
    pub async fn add(&self, input: NewPlant) -> Result<Plant> {
        let plant = self
            .with_store(move |store| {
                let mut plants = store.load()?;

                let plant = Plant::from_input(next_plant_id(&plants)?, input)?;
                plants.push(plant.clone());
                store.save(&plants)?;
                Ok(plant)
            })
            .await?;

        info!("Added plant {} ({})", plant.id, plant.name);
        Ok(plant)
    }

    /// Puts a plant into the garden.
    pub async fn save_to_garden(&self, id: u64) -> Result<Plant> {
        let plant = self.update_plant(id, |plant| plant.saved = true).await?;
        info!("Plant {} saved to garden", id);
        Ok(plant)
    }

    /// Takes a plant out of the garden and clears its watering status.
    pub async fn remove_from_garden(&self, id: u64) -> Result<Plant> {
        let plant = self.update_plant(id, Plant::unsave).await?;
        info!("Plant {} removed from garden", id);
        Ok(plant)
    }

    /// Marks the given slot as watered and stamps `last_watered`.
    pub async fn record_watering(&self, id: u64, time_of_day: TimeOfDay) -> Result<Plant> {
        let now = self.clock.now();
        let plant = self
            .update_plant(id, move |plant| plant.water(time_of_day, now))
            .await?;
        info!("Recorded {} watering for plant {}", time_of_day, id);
        Ok(plant)
    }

    /// Clears both watering flags on every plant, saved or not.
    ///
    /// Returns the number of plants reset.
    pub async fn reset_all_watering_status(&self) -> Result<usize> {
        let count = self
            .with_store(|store| {
                let mut plants = store.load()?;

                for plant in plants.iter_mut() {
                    plant.watering_status.reset();
                }
                store.save(&plants)?;
                Ok(plants.len())
            })
            .await?;

        info!("Reset watering status for {} plants", count);
        Ok(count)
    }

    async fn update_plant<F>(&self, id: u64, mutate: F) -> Result<Plant>
    where
        F: FnOnce(&mut Plant) + Send + 'static,
    {
        self.with_store(move |store| {
            let mut plants = store.load()?;

            let plant = match plants.iter_mut().find(|plant| plant.id == id) {
                Some(plant) => plant,
                None => {
                    warn!("Plant {} not found", id);
                    return Err(GardenError::PlantNotFound { id });
                }
            };
            mutate(plant);
            let updated = plant.clone();

            store.save(&plants)?;
            Ok(updated)
        })
        .await
    }

    /// Runs `work` against the locked store on the blocking pool.
    async fn with_store<T, F>(&self, work: F) -> Result<T>
    where
        F: FnOnce(&dyn PlantStore) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let task = tokio::task::spawn_blocking(move || {
            let store = store.lock().map_err(|_| GardenError::LockAcquisitionFailed {
                message: "Failed to acquire lock on plant store".to_string(),
            })?;
            work(&**store)
        });

        task.await.map_err(|e| {
            error!("Plant store task failed: {}", e);
            GardenError::ApplicationError {
                message: format!("plant store task failed: {}", e),
            }
        })?
    }
}

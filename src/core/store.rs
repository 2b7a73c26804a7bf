use log::{debug, warn};

use crate::{
    core::clock::{Clock, SystemClock, days_since},
    error::PlantResult,
    models::{Filter, NewPlant, Plant, PlantEdit, PlantId},
};

/// In-memory list of plants plus the active filter.
///
/// Operations on an unknown id are no-ops; they report whether anything
/// matched instead of failing.
#[derive(Debug)]
pub struct PlantStore<C: Clock = SystemClock> {
    plants: Vec<Plant>,
    next_id: u64,
    filter: Filter,
    clock: C,
}

impl PlantStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for PlantStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PlantStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            plants: Vec::new(),
            next_id: 1,
            filter: Filter::default(),
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Drop every plant and go back to the `all` filter.
    /// The id counter keeps running so ids are never handed out twice.
    pub fn reset(&mut self) {
        debug!("resetting store ({} plants dropped)", self.plants.len());
        self.plants.clear();
        self.filter = Filter::default();
    }

    /// Add a plant from raw form input.
    ///
    /// On a parse error the store is left untouched and no id is consumed.
    pub fn add_plant(
        &mut self,
        name: &str,
        interval: &str,
        last_watered: Option<&str>,
    ) -> PlantResult<&Plant> {
        let new_plant = NewPlant::parse(name, interval, last_watered, self.clock.now())
            .inspect_err(|e| warn!("rejected plant {:?}: {}", name, e))?;
        Ok(self.add(new_plant))
    }

    pub fn add(&mut self, new_plant: NewPlant) -> &Plant {
        let id = PlantId(self.next_id);
        self.next_id += 1;

        let last_watered_days = days_since(new_plant.last_watered, self.clock.now());
        let thirsty = last_watered_days >= new_plant.watering_interval.get();
        debug!(
            "added plant {} {:?}: every {} days, last watered {} days ago, thirsty={}",
            id, new_plant.name, new_plant.watering_interval, last_watered_days, thirsty
        );

        let index = self.plants.len();
        self.plants.push(Plant {
            id,
            text: new_plant.name,
            recommended_watering: new_plant.watering_interval,
            last_watered_days,
            thirsty,
            _guard: (),
        });
        &self.plants[index]
    }

    /// Apply one field edit. `thirsty` is left as it was.
    pub fn update_plant_field(&mut self, id: PlantId, edit: PlantEdit) -> bool {
        let now = self.clock.now();
        let Some(plant) = self.find_mut(id) else {
            debug!("edit ignored: no plant {}", id);
            return false;
        };
        match edit {
            PlantEdit::Text(text) => plant.text = text,
            PlantEdit::RecommendedWatering(days) => plant.recommended_watering = days,
            PlantEdit::LastWatered(date) => plant.last_watered_days = days_since(date, now),
        }
        debug!("edited plant {}", id);
        true
    }

    /// Mark a plant as watered today. Never makes a plant thirsty.
    pub fn toggle_plant(&mut self, id: PlantId) -> bool {
        let Some(plant) = self.find_mut(id) else {
            debug!("water ignored: no plant {}", id);
            return false;
        };
        plant.thirsty = false;
        plant.last_watered_days = 0;
        debug!("watered plant {}", id);
        true
    }

    pub fn set_filter(&mut self, filter: Filter) {
        debug!("filter set to {}", filter);
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Clear `thirsty` on every plant; elapsed days are left as they were.
    pub fn mark_all_watered(&mut self) {
        for plant in &mut self.plants {
            plant.thirsty = false;
        }
        debug!("marked {} plants watered", self.plants.len());
    }

    pub fn delete_plant(&mut self, id: PlantId) -> bool {
        let before = self.plants.len();
        self.plants.retain(|plant| plant.id != id);
        let removed = self.plants.len() != before;
        if removed {
            debug!("deleted plant {}", id);
        }
        removed
    }

    /// Remove every thirsty plant, returning how many went.
    pub fn delete_thirsty(&mut self) -> usize {
        let before = self.plants.len();
        self.plants.retain(|plant| !plant.thirsty);
        let removed = before - self.plants.len();
        debug!("deleted {} thirsty plants", removed);
        removed
    }

    /// Plants passing the active filter, in insertion order.
    pub fn plants(&self) -> Vec<&Plant> {
        self.plants
            .iter()
            .filter(|plant| self.filter.matches(plant))
            .collect()
    }

    /// Every plant regardless of filter.
    pub fn all_plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn thirsty_count(&self) -> usize {
        self.plants.iter().filter(|plant| plant.thirsty).count()
    }

    pub fn get(&self, id: PlantId) -> Option<&Plant> {
        self.plants.iter().find(|plant| plant.id == id)
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    fn find_mut(&mut self, id: PlantId) -> Option<&mut Plant> {
        self.plants.iter_mut().find(|plant| plant.id == id)
    }
}

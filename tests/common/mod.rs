mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from plant_tracker for tests
pub use plant_tracker::{
    Filter, FixedClock, NewPlant, Plant, PlantEdit, PlantError, PlantId, PlantStore, Session,
    SessionOptions,
};

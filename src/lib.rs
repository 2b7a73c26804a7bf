pub mod core;
pub mod error;
pub mod models;
pub mod session;

pub use crate::core::{
    Clock, FixedClock, PlantStore, SystemClock, days_since, parse_date, parse_interval,
};
pub use error::{PlantError, PlantResult};
pub use models::{Filter, NewPlant, Plant, PlantEdit, PlantId};
pub use session::{Command, CommandError, RunSummary, Session, SessionOptions, thirsty_label};

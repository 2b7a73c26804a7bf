mod clock;
mod parse;
mod store;

pub use clock::{Clock, FixedClock, SystemClock, days_since};
pub use parse::{parse_date, parse_interval};
pub use store::PlantStore;

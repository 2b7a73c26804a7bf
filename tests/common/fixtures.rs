use plant_tracker::{FixedClock, PlantId, PlantStore};
use time::{Date, Duration, macros::date};

/// The day every test store believes it is.
pub const TODAY: Date = date!(2026 - 10 - 19);

/// Creates an empty store whose clock is pinned to midnight UTC on [`TODAY`].
pub fn create_test_store() -> PlantStore<FixedClock> {
    PlantStore::with_clock(FixedClock::on(TODAY))
}

/// `YYYY-MM-DD` for the day `days` before [`TODAY`].
pub fn days_ago(days: i64) -> String {
    (TODAY - Duration::days(days)).to_string()
}

/// Adds a plant watered `last_watered` days ago and returns its id.
pub fn add_test_plant(
    store: &mut PlantStore<FixedClock>,
    name: &str,
    interval: u32,
    last_watered: i64,
) -> PlantId {
    store
        .add_plant(name, &interval.to_string(), Some(&days_ago(last_watered)))
        .expect("Failed to add test plant")
        .id
}

/// A store holding two thirsty plants (Fern, Basil) and one watered plant (Cactus).
pub fn create_mixed_store() -> (PlantStore<FixedClock>, [PlantId; 3]) {
    let mut store = create_test_store();
    let fern = add_test_plant(&mut store, "Fern", 7, 10);
    let cactus = add_test_plant(&mut store, "Cactus", 21, 3);
    let basil = add_test_plant(&mut store, "Basil", 2, 2);
    (store, [fern, cactus, basil])
}

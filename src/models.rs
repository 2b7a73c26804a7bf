use std::{fmt, num::NonZeroU32};

use serde::Serialize;
use time::OffsetDateTime;

/// Identifier handed out by the store. Ids only ever grow within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PlantId(pub u64);

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked plant.
///
/// `thirsty` is cached: it is computed once when the plant is added and
/// afterwards only cleared by watering. Edits and the passage of time do not
/// touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: PlantId,
    pub text: String,
    pub recommended_watering: NonZeroU32,
    pub last_watered_days: u32,
    pub thirsty: bool,
    #[serde(skip)]
    pub(crate) _guard: (),
}

/// Input for [`crate::PlantStore::add`].
#[derive(Debug, Clone)]
pub struct NewPlant {
    pub name: String,
    pub watering_interval: NonZeroU32,
    pub last_watered: OffsetDateTime,
}

/// A single-field edit applied by [`crate::PlantStore::update_plant_field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlantEdit {
    Text(String),
    RecommendedWatering(NonZeroU32),
    /// Absolute date of the last watering; converted to elapsed days when applied.
    LastWatered(OffsetDateTime),
}

/// Which plants a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Thirsty,
    Watered,
}

impl Filter {
    pub fn matches(self, plant: &Plant) -> bool {
        match self {
            Filter::All => true,
            Filter::Thirsty => plant.thirsty,
            Filter::Watered => !plant.thirsty,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Thirsty => "thirsty",
            Filter::Watered => "watered",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

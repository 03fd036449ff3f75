use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::{Booking, Turf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("store I/O failure: {0}")]
    Write(#[from] io::Error),
}

/// The full persisted document: two flat collections, read wholesale at
/// startup and rewritten wholesale after every mutation.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RecordSet {
    pub turfs: Vec<Turf>,
    pub bookings: Vec<Booking>,
}

pub struct RecordStore {
    path: PathBuf,
    pub records: RecordSet,
}

impl RecordStore {
    /// Loads the record document at `path`, seeding a default turf (and
    /// persisting it) when no facilities exist yet. A missing file means
    /// empty collections; an unreadable one is a corruption error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => RecordSet::default(),
            Err(e) => return Err(StoreError::Write(e)),
        };

        let mut store = Self { path, records };
        if store.records.turfs.is_empty() {
            tracing::info!("no turfs on record, seeding default turf");
            store.records.turfs.push(default_turf());
            store.persist()?;
        }
        Ok(store)
    }

    /// Rewrites the durable document from the in-memory mirror. Writes to
    /// a sibling temp file and renames over the target so a crash mid-write
    /// cannot leave a torn document behind.
    pub fn persist(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&self.records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn default_turf() -> Turf {
    Turf {
        id: "turf_001".to_string(),
        name: "Green Valley Sports Arena".to_string(),
        location: "Downtown, Sector 21, Main Street".to_string(),
        description: "Premium artificial turf with floodlights, perfect for \
                      football, cricket, and other sports"
            .to_string(),
        amenities: vec![
            "Floodlights".to_string(),
            "Changing Rooms".to_string(),
            "Parking".to_string(),
            "Water Facility".to_string(),
            "First Aid".to_string(),
        ],
        size: "100x60 feet".to_string(),
        surface_type: "Artificial Grass".to_string(),
        price_per_hour: 1500.0,
        available_hours: (6..=22).map(|h| format!("{h:02}:00")).collect(),
        images: vec!["turf1.jpg".to_string(), "turf2.jpg".to_string()],
        rating: 4.5,
        total_reviews: 128,
    }
}

//! Personal bests across all logged days

use serde::{Deserialize, Serialize};

use crate::models::Entry;

/// Single-day bests
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalRecords {
    pub most_steps_day: u32,
    pub longest_session_minutes: u32,
    pub longest_distance_km: f64,
}

impl PersonalRecords {
    /// Rebuild records from a full history
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Self {
        let mut records = Self::default();
        for entry in entries {
            records.update(entry);
        }
        records
    }

    /// Fold one entry in; returns whether any record moved
    ///
    /// Records only ever grow, so editing an entry down keeps the old best.
    pub fn update(&mut self, entry: &Entry) -> bool {
        let mut changed = false;

        if entry.steps > self.most_steps_day {
            self.most_steps_day = entry.steps;
            changed = true;
        }
        if entry.time_minutes > self.longest_session_minutes {
            self.longest_session_minutes = entry.time_minutes;
            changed = true;
        }
        if entry.distance_km > self.longest_distance_km {
            self.longest_distance_km = entry.distance_km;
            changed = true;
        }

        changed
    }
}

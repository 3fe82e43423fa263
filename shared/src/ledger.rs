//! In-memory unlock bookkeeping
//!
//! [`UnlockLedger`] is the standard [`UnlockSink`]: it keeps one record per
//! award id and tracks which unlocks happened since the user last looked.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::awards::UnlockSink;
use crate::models::UnlockRecord;

/// Unlock records plus the ids unlocked since the last acknowledgement
#[derive(Debug, Clone, Default)]
pub struct UnlockLedger {
    records: Vec<UnlockRecord>,
    known: HashSet<String>,
    new_awards: Vec<String>,
}

impl UnlockLedger {
    /// Start from previously stored records
    ///
    /// Duplicate ids keep their first record.
    pub fn from_records(records: impl IntoIterator<Item = UnlockRecord>) -> Self {
        let mut ledger = Self::default();
        for record in records {
            if ledger.known.insert(record.award_id.clone()) {
                ledger.records.push(record);
            }
        }
        ledger
    }

    pub fn is_unlocked(&self, award_id: &str) -> bool {
        self.known.contains(award_id)
    }

    /// Records in unlock order
    pub fn records(&self) -> &[UnlockRecord] {
        &self.records
    }

    /// Ids unlocked since the last [`clear_new_awards`](Self::clear_new_awards)
    pub fn new_awards(&self) -> &[String] {
        &self.new_awards
    }

    pub fn clear_new_awards(&mut self) {
        self.new_awards.clear();
    }

    /// Flag every record as seen; returns how many changed
    pub fn mark_all_viewed(&mut self) -> usize {
        let mut changed = 0;
        for record in self.records.iter_mut().filter(|r| !r.viewed) {
            record.viewed = true;
            changed += 1;
        }
        changed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<UnlockRecord> {
        self.records
    }
}

impl UnlockSink for UnlockLedger {
    fn unlock(&mut self, award_id: &str, date: NaiveDate) -> bool {
        if !self.known.insert(award_id.to_string()) {
            return false;
        }
        self.records.push(UnlockRecord::new(award_id, date));
        self.new_awards.push(award_id.to_string());
        debug!(award_id, %date, total = self.records.len(), "unlock recorded");
        true
    }
}

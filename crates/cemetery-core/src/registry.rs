//! In-memory gravestone registry with write-through persistence.
//!
//! Every mutation re-serializes the whole map under one storage key; there is
//! no incremental write and no merge with what is already stored. The id
//! counter is kept under a sibling key so ids of deleted stones stay retired
//! across reloads.

use crate::inscription::Inscription;
use crate::record::{id_suffix, GravestoneRecord, Placement};
use crate::store::{PersistError, SnapshotStore};
use fnv::FnvHashMap;

pub struct Registry<S: SnapshotStore> {
    key: String,
    prefix: String,
    records: FnvHashMap<String, GravestoneRecord>,
    next_id: u64,
    store: S,
}

impl<S: SnapshotStore> Registry<S> {
    pub fn new(key: impl Into<String>, prefix: impl Into<String>, store: S) -> Self {
        Self {
            key: key.into(),
            prefix: prefix.into(),
            records: FnvHashMap::default(),
            next_id: 0,
            store,
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&GravestoneRecord> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Counter the next created id will use.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Records ordered by id counter, oldest first.
    pub fn iter_sorted(&self) -> Vec<(&str, &GravestoneRecord)> {
        let mut all: Vec<_> = self.records.iter().map(|(k, v)| (k.as_str(), v)).collect();
        all.sort_by_key(|(id, _)| (id_suffix(id).unwrap_or(u64::MAX), id.to_string()));
        all
    }

    /// Insert an uninscribed record and return its fresh id.
    pub fn create(&mut self, placement: Placement) -> String {
        let id = format!("{}_{}", self.prefix, self.next_id);
        match self.next_id.checked_add(1) {
            Some(n) => self.next_id = n,
            None => log::warn!("[registry] id counter exhausted at {}", id),
        }
        self.records.insert(id.clone(), GravestoneRecord::new(placement));
        log::info!("[registry] created {}", id);
        self.persist_or_warn();
        id
    }

    /// Replace the inscription of `id`. Unknown ids are ignored.
    pub fn inscribe(&mut self, id: &str, inscription: Inscription) -> bool {
        let Some(record) = self.records.get_mut(id) else {
            log::debug!("[registry] inscribe ignored, no record {}", id);
            return false;
        };
        record.inscription = Some(inscription);
        self.persist_or_warn();
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<GravestoneRecord> {
        let removed = self.records.remove(id)?;
        log::info!("[registry] removed {}", id);
        self.persist_or_warn();
        Some(removed)
    }

    /// Key the id counter is stored under.
    pub fn counter_key(&self) -> String {
        format!("{}_next_id", self.key)
    }

    /// Write the full map under the storage key, replacing what was there.
    pub fn persist(&mut self) -> Result<(), PersistError> {
        let raw = serde_json::to_string(&self.records)?;
        self.store.save(&self.key, &raw)?;
        let counter_key = self.counter_key();
        self.store.save(&counter_key, &self.next_id.to_string())
    }

    fn restore_counter(&mut self) {
        let stored = self
            .store
            .load(&self.counter_key())
            .and_then(|raw| raw.trim().parse::<u64>().ok());
        if let Some(n) = stored {
            self.next_id = self.next_id.max(n);
        }
    }

    fn persist_or_warn(&mut self) {
        if let Err(e) = self.persist() {
            log::warn!("[registry] persist failed: {}", e);
        }
    }

    /// Merge stored records into the map and return their ids, oldest first.
    ///
    /// Absent or unreadable storage leaves the registry as it was. Individual
    /// records that fail to decode are skipped. The id counter moves past the
    /// highest restored suffix and past the stored counter.
    pub fn restore(&mut self) -> Vec<String> {
        self.restore_counter();
        let Some(raw) = self.store.load(&self.key) else {
            return Vec::new();
        };
        let entries: FnvHashMap<String, serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(m) => m,
            Err(e) => {
                log::warn!("[registry] ignoring unreadable {}: {}", self.key, e);
                return Vec::new();
            }
        };

        let mut restored = Vec::with_capacity(entries.len());
        for (id, value) in entries {
            match serde_json::from_value::<GravestoneRecord>(value) {
                Ok(record) => {
                    if let Some(n) = id_suffix(&id) {
                        let Some(next) = n.checked_add(1) else {
                            log::warn!("[registry] skipping {}: id past the counter range", id);
                            continue;
                        };
                        self.next_id = self.next_id.max(next);
                    }
                    self.records.insert(id.clone(), record);
                    restored.push(id);
                }
                Err(e) => log::warn!("[registry] skipping {}: {}", id, e),
            }
        }
        restored.sort_by_key(|id| (id_suffix(id).unwrap_or(u64::MAX), id.clone()));
        log::info!("[registry] restored {} records, next id {}", restored.len(), self.next_id);
        restored
    }
}

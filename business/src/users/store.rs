//! The in-memory record store.
//!
//! The store is the only place user records live. Views and editors hold
//! copies or ids, never references, so every mutation goes through here.

use log::{debug, warn};
use roster_states::State;
use thiserror::Error;

use super::editor::DraftRecord;
use super::record::{UserId, UserRecord, seed_users};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("User #{id} no longer exists")]
    NotFound { id: UserId },
    #[error("No user ids are left to assign")]
    IdsExhausted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<UserRecord>,
    // bumped on every successful mutation
    revision: u64,
}

impl RecordStore {
    /// Keeps the first record for each id; later duplicates are dropped.
    pub fn new(records: Vec<UserRecord>) -> Self {
        let mut unique: Vec<UserRecord> = Vec::with_capacity(records.len());
        for record in records {
            if unique.iter().any(|kept| kept.id == record.id) {
                warn!("RecordStore: dropping duplicate user #{}", record.id);
                continue;
            }
            unique.push(record);
        }

        Self {
            records: unique,
            revision: 0,
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    /// Records in store (insertion) order.
    pub fn list(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn get(&self, id: UserId) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// `max(id) + 1`, starting at 1 for an empty store. `None` once the
    /// largest id is `UserId::MAX`.
    pub fn next_id(&self) -> Option<UserId> {
        match self.records.iter().map(|r| r.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    pub fn create(&mut self, draft: &DraftRecord) -> Result<UserRecord, StoreError> {
        let id = self.next_id().ok_or(StoreError::IdsExhausted)?;
        let record = UserRecord {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            role: draft.role,
            status: draft.status,
        };
        debug!("RecordStore: created user #{}", record.id);
        self.records.push(record.clone());
        self.revision += 1;
        Ok(record)
    }

    /// Overwrites every field but `id`.
    pub fn update(&mut self, id: UserId, draft: &DraftRecord) -> Result<UserRecord, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound { id })?;

        record.name.clone_from(&draft.name);
        record.email.clone_from(&draft.email);
        record.role = draft.role;
        record.status = draft.status;
        let updated = record.clone();

        debug!("RecordStore: updated user #{id}");
        self.revision += 1;
        Ok(updated)
    }

    pub fn delete(&mut self, id: UserId) -> Result<UserRecord, StoreError> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound { id })?;

        let removed = self.records.remove(pos);
        debug!("RecordStore: deleted user #{id}");
        self.revision += 1;
        Ok(removed)
    }
}

impl State for RecordStore {}

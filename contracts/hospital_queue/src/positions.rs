//! Queue position model.
//!
//! Within one queue, entries carry ticket positions assigned as
//! `max(existing positions) + 1`. Positions are never renumbered: removing an
//! entry leaves a gap, and the survivors keep the numbers they were called by.
//! With no removals a queue of `n` entries holds exactly positions `1..=n`.

use common::{clock, counter};
use soroban_sdk::{log, Env, Map, String, Vec};

use crate::{
    config, events,
    join::{self, PatientLookup},
    store::{self, Collection},
    types::{EntryStatus, PositionSummary, Priority, Queue, QueueEntry, QueueEntryView},
    validation, ContractError,
};

pub const PRIORITY_KEY: &str = "priority";
pub const WAITING_SINCE_KEY: &str = "waitingSince";

pub struct QueueBook {
    env: Env,
    queues: Collection<Queue>,
    entries: Collection<QueueEntry>,
}

impl QueueBook {
    pub fn new(env: &Env, queues: Collection<Queue>, entries: Collection<QueueEntry>) -> Self {
        Self {
            env: env.clone(),
            queues,
            entries,
        }
    }

    /// Entries of `queue_id`, ascending by position.
    pub fn entries_of(&self, queue_id: u64) -> Vec<QueueEntry> {
        sorted_by_position(&self.env, &self.entries.load(), queue_id)
    }

    /// Entries of `queue_id` joined with their patients, ascending by position.
    pub fn list_by_queue(
        &self,
        queue_id: u64,
        patients: &impl PatientLookup,
    ) -> Vec<QueueEntryView> {
        join::attach_patients(&self.env, &self.entries_of(queue_id), patients)
    }

    pub fn get(&self, entry_id: u64) -> Result<QueueEntry, ContractError> {
        self.entries
            .find(entry_id)
            .ok_or(ContractError::EntryNotFound)
    }

    /// Append a waiting entry at the tail of an existing queue.
    ///
    /// The patient id is not checked against the directory.
    pub fn add_entry(
        &self,
        queue_id: u64,
        patient_id: u64,
        priority: Priority,
        notes: String,
    ) -> Result<QueueEntry, ContractError> {
        validation::validate_text(&notes)?;
        if !self.queues.contains(queue_id) {
            log!(&self.env, "add_entry: unknown queue", queue_id);
            return Err(ContractError::QueueNotFound);
        }

        let mut entries = self.entries.load();
        let priority = String::from_str(&self.env, priority.label());
        let entry = self.new_entry(&entries, queue_id, patient_id, priority, notes);
        entries.push_back(entry.clone());
        self.entries.save(&entries);

        log!(&self.env, "entry added", entry.id, entry.queue_id, entry.position);
        events::publish_entry_added(&self.env, &entry);

        Ok(entry)
    }

    pub fn set_status(&self, entry_id: u64, status: EntryStatus) -> Result<QueueEntry, ContractError> {
        self.transition(entry_id, status, None)
    }

    /// Like [`QueueBook::set_status`], but only when the stored revision still
    /// equals `expected_revision`.
    pub fn set_status_checked(
        &self,
        entry_id: u64,
        status: EntryStatus,
        expected_revision: u32,
    ) -> Result<QueueEntry, ContractError> {
        self.transition(entry_id, status, Some(expected_revision))
    }

    fn transition(
        &self,
        entry_id: u64,
        status: EntryStatus,
        expected_revision: Option<u32>,
    ) -> Result<QueueEntry, ContractError> {
        let mut entries = self.entries.load();
        let index = store::index_of(&entries, entry_id).ok_or(ContractError::EntryNotFound)?;
        let mut entry = entries.get(index).ok_or(ContractError::EntryNotFound)?;

        if let Some(expected) = expected_revision {
            if expected != entry.revision {
                return Err(ContractError::StaleRevision);
            }
        }
        if !entry.status.can_transition_to(status) {
            return Err(ContractError::InvalidTransition);
        }

        let from = entry.status;
        entry.status = status;
        self.touch(&mut entry);
        entries.set(index, entry.clone());
        self.entries.save(&entries);

        events::publish_entry_status(&self.env, &entry, from);

        Ok(entry)
    }

    pub fn set_notes(&self, entry_id: u64, notes: String) -> Result<QueueEntry, ContractError> {
        validation::validate_text(&notes)?;

        let mut entry = self.get(entry_id)?;
        entry.notes = notes;
        self.touch(&mut entry);
        self.entries.replace(&entry);

        events::publish_entry_notes(&self.env, &entry);

        Ok(entry)
    }

    /// Delete an entry in any status. Other positions are left untouched.
    pub fn remove_entry(&self, entry_id: u64) -> bool {
        match self.entries.remove(entry_id) {
            Some(entry) => {
                log!(&self.env, "entry removed", entry.id, entry.position);
                events::publish_entry_removed(&self.env, &entry);
                true
            }
            None => false,
        }
    }

    /// Delete the entry and recreate it at the tail of `target_queue_id`.
    ///
    /// The new entry gets a fresh id, position and `waitingSince`, starts as
    /// `Waiting`, and keeps the patient, priority and notes.
    pub fn move_entry(&self, entry_id: u64, target_queue_id: u64) -> Result<QueueEntry, ContractError> {
        if !self.queues.contains(target_queue_id) {
            return Err(ContractError::QueueNotFound);
        }

        let mut entries = self.entries.load();
        let index = store::index_of(&entries, entry_id).ok_or(ContractError::EntryNotFound)?;
        let old = entries.get(index).ok_or(ContractError::EntryNotFound)?;
        entries.remove(index);

        let priority = old
            .metadata
            .get(String::from_str(&self.env, PRIORITY_KEY))
            .unwrap_or_else(|| String::from_str(&self.env, Priority::Normal.label()));
        let moved = self.new_entry(
            &entries,
            target_queue_id,
            old.patient_id,
            priority,
            old.notes.clone(),
        );
        entries.push_back(moved.clone());
        self.entries.save(&entries);

        events::publish_entry_moved(&self.env, &old, &moved);

        Ok(moved)
    }

    /// Start service for the lowest-position waiting entry.
    pub fn call_next(&self, queue_id: u64) -> Result<QueueEntry, ContractError> {
        if !self.queues.contains(queue_id) {
            return Err(ContractError::QueueNotFound);
        }

        let next = self
            .entries_of(queue_id)
            .iter()
            .find(|entry| entry.status == EntryStatus::Waiting)
            .ok_or(ContractError::QueueEmpty)?;

        self.set_status(next.id, EntryStatus::InProgress)
    }

    pub fn position_summary(&self, queue_id: u64) -> PositionSummary {
        summarize(&self.entries.load(), queue_id)
    }

    fn new_entry(
        &self,
        entries: &Vec<QueueEntry>,
        queue_id: u64,
        patient_id: u64,
        priority: String,
        notes: String,
    ) -> QueueEntry {
        let now = self.env.ledger().timestamp();
        let utc_offset = config::settings(&self.env).utc_offset_minutes;

        let mut metadata = Map::new(&self.env);
        metadata.set(String::from_str(&self.env, PRIORITY_KEY), priority);
        metadata.set(
            String::from_str(&self.env, WAITING_SINCE_KEY),
            clock::wall_clock(&self.env, now, utc_offset),
        );

        QueueEntry {
            id: counter::next_id(&self.env, &store::ENTRY_CTR),
            queue_id,
            patient_id,
            position: next_position(entries, queue_id),
            status: EntryStatus::Waiting,
            notes,
            metadata,
            created_at: now,
            updated_at: now,
            revision: 1,
        }
    }

    fn touch(&self, entry: &mut QueueEntry) {
        entry.updated_at = self.env.ledger().timestamp();
        entry.revision = entry.revision.saturating_add(1);
    }
}

/// Next ticket number for `queue_id`: last position + 1, or 1 for an empty queue.
pub fn next_position(entries: &Vec<QueueEntry>, queue_id: u64) -> u32 {
    entries
        .iter()
        .filter(|entry| entry.queue_id == queue_id)
        .map(|entry| entry.position)
        .max()
        .unwrap_or(0)
        .saturating_add(1)
}

/// Entries of `queue_id` ordered by position, whatever their storage order.
pub fn sorted_by_position(env: &Env, entries: &Vec<QueueEntry>, queue_id: u64) -> Vec<QueueEntry> {
    let mut sorted: Vec<QueueEntry> = Vec::new(env);
    for entry in entries.iter().filter(|entry| entry.queue_id == queue_id) {
        let at = sorted
            .iter()
            .position(|placed| placed.position > entry.position)
            .map(|index| index as u32)
            .unwrap_or(sorted.len());
        sorted.insert(at, entry);
    }
    sorted
}

pub fn summarize(entries: &Vec<QueueEntry>, queue_id: u64) -> PositionSummary {
    let mut summary = PositionSummary::default();
    for entry in entries.iter().filter(|entry| entry.queue_id == queue_id) {
        summary.total += 1;
        match entry.status {
            EntryStatus::Waiting => summary.waiting += 1,
            EntryStatus::InProgress => summary.in_progress += 1,
            EntryStatus::Completed => summary.completed += 1,
            EntryStatus::Canceled => summary.canceled += 1,
        }
    }
    summary
}

pub fn book(env: &Env) -> QueueBook {
    QueueBook::new(env, store::queues(env), store::queue_items(env))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(env: &Env, id: u64, queue_id: u64, position: u32, status: EntryStatus) -> QueueEntry {
        QueueEntry {
            id,
            queue_id,
            patient_id: id,
            position,
            status,
            notes: String::from_str(env, ""),
            metadata: Map::new(env),
            created_at: 0,
            updated_at: 0,
            revision: 1,
        }
    }

    #[test]
    fn next_position_starts_at_one() {
        let env = Env::default();
        let entries: Vec<QueueEntry> = Vec::new(&env);
        assert_eq!(next_position(&entries, 1), 1);
    }

    #[test]
    fn next_position_follows_highest_ticket_of_its_queue() {
        let env = Env::default();
        let mut entries = Vec::new(&env);
        entries.push_back(entry(&env, 1, 1, 2, EntryStatus::Waiting));
        entries.push_back(entry(&env, 2, 1, 5, EntryStatus::Completed));
        entries.push_back(entry(&env, 3, 2, 9, EntryStatus::Waiting));

        // Gaps are not filled
        assert_eq!(next_position(&entries, 1), 6);
        assert_eq!(next_position(&entries, 2), 10);
        assert_eq!(next_position(&entries, 3), 1);
    }

    #[test]
    fn sorted_by_position_ignores_storage_order() {
        let env = Env::default();
        let mut entries = Vec::new(&env);
        entries.push_back(entry(&env, 1, 1, 3, EntryStatus::Waiting));
        entries.push_back(entry(&env, 2, 2, 1, EntryStatus::Waiting));
        entries.push_back(entry(&env, 3, 1, 1, EntryStatus::Waiting));
        entries.push_back(entry(&env, 4, 1, 2, EntryStatus::Waiting));

        let sorted = sorted_by_position(&env, &entries, 1);
        assert_eq!(sorted.len(), 3);
        assert_eq!(sorted.get(0).unwrap().id, 3);
        assert_eq!(sorted.get(1).unwrap().id, 4);
        assert_eq!(sorted.get(2).unwrap().id, 1);
    }

    #[test]
    fn summarize_counts_each_status() {
        let env = Env::default();
        let mut entries = Vec::new(&env);
        entries.push_back(entry(&env, 1, 1, 1, EntryStatus::Waiting));
        entries.push_back(entry(&env, 2, 1, 2, EntryStatus::Waiting));
        entries.push_back(entry(&env, 3, 1, 3, EntryStatus::InProgress));
        entries.push_back(entry(&env, 4, 1, 4, EntryStatus::Completed));
        entries.push_back(entry(&env, 5, 1, 5, EntryStatus::Canceled));
        entries.push_back(entry(&env, 6, 2, 1, EntryStatus::Waiting));

        assert_eq!(
            summarize(&entries, 1),
            PositionSummary {
                total: 5,
                waiting: 2,
                in_progress: 1,
                completed: 1,
                canceled: 1,
            }
        );
        assert_eq!(summarize(&entries, 3), PositionSummary::default());
    }

    #[test]
    fn lifecycle_transitions() {
        use EntryStatus::*;

        assert!(Waiting.can_transition_to(InProgress));
        assert!(Waiting.can_transition_to(Canceled));
        assert!(InProgress.can_transition_to(Completed));
        assert!(InProgress.can_transition_to(Canceled));

        assert!(!Waiting.can_transition_to(Waiting));
        assert!(!Waiting.can_transition_to(Completed));
        assert!(!InProgress.can_transition_to(Waiting));
        for terminal in [Completed, Canceled] {
            for next in [Waiting, InProgress, Completed, Canceled] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }
}

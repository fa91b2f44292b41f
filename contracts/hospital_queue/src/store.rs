use core::marker::PhantomData;

use common::ttl;
use soroban_sdk::{symbol_short, Env, IntoVal, Symbol, TryFromVal, Val, Vec};

use crate::types::{Consultation, Department, Patient, Queue, QueueEntry, StaffMember, Triage};

// ── Collection keys (persistent storage) ──────────────────────
pub const PATIENTS: Symbol = symbol_short!("PATIENTS");
pub const DEPARTMENTS: Symbol = symbol_short!("DEPTS");
pub const QUEUES: Symbol = symbol_short!("QUEUES");
pub const QUEUE_ITEMS: Symbol = symbol_short!("Q_ITEMS");
pub const TRIAGES: Symbol = symbol_short!("TRIAGES");
pub const CONSULTATIONS: Symbol = symbol_short!("CONSULTS");
pub const STAFF: Symbol = symbol_short!("STAFF");

// ── Id counters (instance storage) ────────────────────────────
pub const PATIENT_CTR: Symbol = symbol_short!("PAT_CTR");
pub const DEPARTMENT_CTR: Symbol = symbol_short!("DEPT_CTR");
pub const QUEUE_CTR: Symbol = symbol_short!("QUEUE_CTR");
pub const ENTRY_CTR: Symbol = symbol_short!("ENTRY_CTR");
pub const TRIAGE_CTR: Symbol = symbol_short!("TRI_CTR");
pub const CONSULTATION_CTR: Symbol = symbol_short!("CONS_CTR");
pub const STAFF_CTR: Symbol = symbol_short!("STF_CTR");

/// A record that can live in a [`Collection`].
pub trait Record: IntoVal<Env, Val> + TryFromVal<Env, Val> + Clone {
    fn id(&self) -> u64;
}

/// One record type persisted as a single array under one storage key.
///
/// Every mutation reads the whole array, changes it in memory and writes the
/// whole array back. A contract invocation has exclusive access to storage,
/// so each read-modify-write is atomic and rolled back if the call fails.
pub struct Collection<T> {
    env: Env,
    key: Symbol,
    _record: PhantomData<T>,
}

impl<T: Record> Collection<T> {
    pub fn new(env: &Env, key: Symbol) -> Self {
        Self {
            env: env.clone(),
            key,
            _record: PhantomData,
        }
    }

    /// Every stored record, in storage order. A missing key reads as empty.
    pub fn load(&self) -> Vec<T> {
        self.env
            .storage()
            .persistent()
            .get(&self.key)
            .unwrap_or(Vec::new(&self.env))
    }

    pub fn save(&self, records: &Vec<T>) {
        self.env.storage().persistent().set(&self.key, records);
        ttl::extend_persistent(&self.env, &self.key);
    }

    pub fn find(&self, id: u64) -> Option<T> {
        self.load().iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.find(id).is_some()
    }

    pub fn insert(&self, record: T) {
        let mut records = self.load();
        records.push_back(record);
        self.save(&records);
    }

    /// Overwrite the stored record with the same id. Returns `false` when absent.
    pub fn replace(&self, record: &T) -> bool {
        let mut records = self.load();
        match index_of(&records, record.id()) {
            Some(index) => {
                records.set(index, record.clone());
                self.save(&records);
                true
            }
            None => false,
        }
    }

    /// Delete the record with `id`, returning it when it existed.
    pub fn remove(&self, id: u64) -> Option<T> {
        let mut records = self.load();
        let index = index_of(&records, id)?;
        let removed = records.get(index);
        records.remove(index);
        self.save(&records);
        removed
    }

    /// Keep only the records matching `keep`; returns how many were dropped.
    pub fn retain<F>(&self, keep: F) -> u32
    where
        F: Fn(&T) -> bool,
    {
        let records = self.load();
        let mut kept = Vec::new(&self.env);
        for record in records.iter() {
            if keep(&record) {
                kept.push_back(record);
            }
        }

        let dropped = records.len() - kept.len();
        if dropped > 0 {
            self.save(&kept);
        }
        dropped
    }
}

/// Index of the record with `id` inside an already loaded array.
pub fn index_of<T: Record>(records: &Vec<T>, id: u64) -> Option<u32> {
    records
        .iter()
        .position(|record| record.id() == id)
        .map(|index| index as u32)
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> u64 {
                    self.id
                }
            }
        )*
    };
}

impl_record!(
    Patient,
    Department,
    Queue,
    QueueEntry,
    Triage,
    Consultation,
    StaffMember,
);

pub fn patients(env: &Env) -> Collection<Patient> {
    Collection::new(env, PATIENTS)
}

pub fn departments(env: &Env) -> Collection<Department> {
    Collection::new(env, DEPARTMENTS)
}

pub fn queues(env: &Env) -> Collection<Queue> {
    Collection::new(env, QUEUES)
}

pub fn queue_items(env: &Env) -> Collection<QueueEntry> {
    Collection::new(env, QUEUE_ITEMS)
}

pub fn triages(env: &Env) -> Collection<Triage> {
    Collection::new(env, TRIAGES)
}

pub fn consultations(env: &Env) -> Collection<Consultation> {
    Collection::new(env, CONSULTATIONS)
}

pub fn staff(env: &Env) -> Collection<StaffMember> {
    Collection::new(env, STAFF)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HospitalQueueContract;
    use soroban_sdk::String;

    fn department(env: &Env, id: u64, name: &str) -> Department {
        Department {
            id,
            name: String::from_str(env, name),
            description: String::from_str(env, ""),
            is_active: true,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn missing_collection_reads_empty() {
        let env = Env::default();
        let contract_id = env.register(HospitalQueueContract, ());

        env.as_contract(&contract_id, || {
            assert_eq!(departments(&env).load().len(), 0);
            assert!(departments(&env).find(1).is_none());
        });
    }

    #[test]
    fn insert_replace_remove() {
        let env = Env::default();
        let contract_id = env.register(HospitalQueueContract, ());

        env.as_contract(&contract_id, || {
            let store = departments(&env);
            store.insert(department(&env, 1, "Pronto-Socorro"));
            store.insert(department(&env, 2, "Pediatria"));
            assert_eq!(store.load().len(), 2);

            let renamed = department(&env, 2, "Pediatria Geral");
            assert!(store.replace(&renamed));
            assert_eq!(store.find(2), Some(renamed));
            assert!(!store.replace(&department(&env, 9, "Nope")));

            let removed = store.remove(1).unwrap();
            assert_eq!(removed.id, 1);
            assert!(store.remove(1).is_none());
            assert_eq!(store.load().len(), 1);
        });
    }

    #[test]
    fn retain_reports_dropped_count() {
        let env = Env::default();
        let contract_id = env.register(HospitalQueueContract, ());

        env.as_contract(&contract_id, || {
            let store = departments(&env);
            for id in 1..=5 {
                store.insert(department(&env, id, "Dept"));
            }

            assert_eq!(store.retain(|d| d.id % 2 == 1), 2);
            assert_eq!(store.retain(|_| true), 0);
            assert!(store.contains(3));
            assert!(!store.contains(4));
        });
    }
}

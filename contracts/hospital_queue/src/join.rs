//! Read-time joins.
//!
//! Referenced records are attached best-effort: a dangling `patient_id` or
//! `department_id` yields a `Missing` reference, never an error. Nothing joined here is ever
//! written back to storage.

use soroban_sdk::{Env, Vec};

use crate::types::{Department, Patient, Queue, QueueEntry, QueueEntryView, QueueView};

pub trait PatientLookup {
    fn lookup_patient(&self, patient_id: u64) -> Option<Patient>;
}

pub trait DepartmentLookup {
    fn lookup_department(&self, department_id: u64) -> Option<Department>;
}

/// A loaded patient collection answers lookups without touching storage again.
impl PatientLookup for Vec<Patient> {
    fn lookup_patient(&self, patient_id: u64) -> Option<Patient> {
        self.iter().find(|patient| patient.id == patient_id)
    }
}

impl DepartmentLookup for Vec<Department> {
    fn lookup_department(&self, department_id: u64) -> Option<Department> {
        self.iter().find(|department| department.id == department_id)
    }
}

pub fn attach_patient(entry: QueueEntry, patients: &impl PatientLookup) -> QueueEntryView {
    let patient = patients.lookup_patient(entry.patient_id).into();
    QueueEntryView { entry, patient }
}

/// Join every entry with its patient, preserving order.
pub fn attach_patients(
    env: &Env,
    entries: &Vec<QueueEntry>,
    patients: &impl PatientLookup,
) -> Vec<QueueEntryView> {
    let mut views = Vec::new(env);
    for entry in entries.iter() {
        views.push_back(attach_patient(entry, patients));
    }
    views
}

pub fn attach_department(queue: Queue, departments: &impl DepartmentLookup) -> QueueView {
    let department = departments.lookup_department(queue.department_id).into();
    QueueView { queue, department }
}

pub fn attach_departments(
    env: &Env,
    queues: &Vec<Queue>,
    departments: &impl DepartmentLookup,
) -> Vec<QueueView> {
    let mut views = Vec::new(env);
    for queue in queues.iter() {
        views.push_back(attach_department(queue, departments));
    }
    views
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EntryStatus, PatientProfile, PatientStatus};
    use soroban_sdk::{Map, String};

    fn profile(env: &Env, first: &str, last: &str) -> PatientProfile {
        let empty = String::from_str(env, "");
        PatientProfile {
            first_name: String::from_str(env, first),
            last_name: String::from_str(env, last),
            document_number: empty.clone(),
            phone: empty.clone(),
            email: empty.clone(),
            birth_date: empty.clone(),
            address: empty.clone(),
            city: empty.clone(),
            state: empty.clone(),
            zip_code: empty.clone(),
            emergency_contact: empty.clone(),
            medical_history: empty.clone(),
            allergies: empty.clone(),
            medications: empty,
        }
    }

    fn entry(env: &Env, id: u64, patient_id: u64) -> QueueEntry {
        QueueEntry {
            id,
            queue_id: 1,
            patient_id,
            position: id as u32,
            status: EntryStatus::Waiting,
            notes: String::from_str(env, ""),
            metadata: Map::new(env),
            created_at: 0,
            updated_at: 0,
            revision: 1,
        }
    }

    #[test]
    fn dangling_patient_is_absent_not_error() {
        let env = Env::default();
        let mut patients = Vec::new(&env);
        patients.push_back(Patient {
            id: 7,
            profile: profile(&env, "Carlos", "Oliveira"),
            status: PatientStatus::WaitingConsultation,
            created_at: 0,
            updated_at: 0,
        });

        let mut entries = Vec::new(&env);
        entries.push_back(entry(&env, 1, 7));
        entries.push_back(entry(&env, 2, 99));

        let views = attach_patients(&env, &entries, &patients);
        assert_eq!(views.len(), 2);

        let first = views.get(0).unwrap();
        assert_eq!(first.entry.id, 1);
        assert_eq!(first.patient.found().unwrap().id, 7);

        let second = views.get(1).unwrap();
        assert_eq!(second.entry.id, 2);
        assert!(second.patient.is_missing());
    }

    #[test]
    fn queue_joins_department_when_present() {
        let env = Env::default();
        let mut departments = Vec::new(&env);
        departments.push_back(Department {
            id: 3,
            name: String::from_str(&env, "Pediatria"),
            description: String::from_str(&env, ""),
            is_active: true,
            created_at: 0,
            updated_at: 0,
        });

        let queue = Queue {
            id: 4,
            name: String::from_str(&env, "Consultas Pediatria"),
            description: String::from_str(&env, ""),
            department_id: 3,
            is_active: true,
            created_at: 0,
            updated_at: 0,
        };

        let view = attach_department(queue.clone(), &departments);
        assert_eq!(view.department.found().unwrap().id, 3);

        let orphan = Queue {
            department_id: 8,
            ..queue
        };
        assert!(attach_department(orphan, &departments).department.is_missing());
    }
}

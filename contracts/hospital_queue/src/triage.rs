use common::counter;
use soroban_sdk::{log, Env, String, Vec};

use crate::{
    directory::PatientDirectory,
    events,
    positions::QueueBook,
    store::{self, Collection},
    types::{PatientStatus, Priority, Triage, TriageOutcome, Vitals},
    validation, ContractError,
};

/// Captures vital signs and forwards the patient to a destination queue.
pub struct TriageDesk {
    env: Env,
    triages: Collection<Triage>,
    patients: PatientDirectory,
    book: QueueBook,
}

impl TriageDesk {
    pub fn new(
        env: &Env,
        triages: Collection<Triage>,
        patients: PatientDirectory,
        book: QueueBook,
    ) -> Self {
        Self {
            env: env.clone(),
            triages,
            patients,
            book,
        }
    }

    pub fn record(
        &self,
        patient_id: u64,
        vitals: Vitals,
        chief_complaint: String,
        notes: String,
        destination_queue_id: u64,
        priority: Priority,
    ) -> Result<TriageOutcome, ContractError> {
        self.patients.get(patient_id)?;
        validation::validate_vitals(&vitals)?;
        validation::validate_required_text(&chief_complaint)?;
        validation::validate_text(&notes)?;

        let entry = self
            .book
            .add_entry(destination_queue_id, patient_id, priority, chief_complaint.clone())?;

        let now = self.env.ledger().timestamp();
        let triage = Triage {
            id: counter::next_id(&self.env, &store::TRIAGE_CTR),
            patient_id,
            vitals,
            chief_complaint,
            notes,
            created_at: now,
            updated_at: now,
        };
        self.triages.insert(triage.clone());
        self.patients
            .set_status(patient_id, PatientStatus::WaitingConsultation)?;

        log!(&self.env, "triage recorded", triage.id, entry.id);
        events::publish_triage_recorded(&self.env, triage.id, patient_id, entry.id);

        Ok(TriageOutcome { triage, entry })
    }

    pub fn get(&self, triage_id: u64) -> Result<Triage, ContractError> {
        self.triages
            .find(triage_id)
            .ok_or(ContractError::TriageNotFound)
    }

    /// Triage history of one patient, oldest first.
    pub fn for_patient(&self, patient_id: u64) -> Vec<Triage> {
        let mut triages = Vec::new(&self.env);
        for triage in self.triages.load().iter() {
            if triage.patient_id == patient_id {
                triages.push_back(triage);
            }
        }
        triages
    }
}

pub fn desk(env: &Env) -> TriageDesk {
    TriageDesk::new(
        env,
        store::triages(env),
        crate::directory::directory(env),
        crate::positions::book(env),
    )
}

use common::counter;
use soroban_sdk::{Env, String, Vec};

use crate::{
    events,
    store::{self, Collection},
    types::{Consultation, ConsultationStatus, Patient},
    validation, ContractError,
};

pub struct ConsultationBook {
    env: Env,
    consultations: Collection<Consultation>,
    patients: Collection<Patient>,
}

impl ConsultationBook {
    pub fn new(
        env: &Env,
        consultations: Collection<Consultation>,
        patients: Collection<Patient>,
    ) -> Self {
        Self {
            env: env.clone(),
            consultations,
            patients,
        }
    }

    pub fn schedule(
        &self,
        patient_id: u64,
        doctor: String,
        scheduled_for: u64,
        symptoms: String,
    ) -> Result<Consultation, ContractError> {
        if !self.patients.contains(patient_id) {
            return Err(ContractError::PatientNotFound);
        }
        validation::validate_name(&doctor)?;
        validation::validate_text(&symptoms)?;

        let now = self.env.ledger().timestamp();
        let empty = String::from_str(&self.env, "");
        let consultation = Consultation {
            id: counter::next_id(&self.env, &store::CONSULTATION_CTR),
            patient_id,
            doctor,
            scheduled_for,
            symptoms,
            diagnosis: empty.clone(),
            treatment: empty.clone(),
            notes: empty,
            follow_up_date: None,
            status: ConsultationStatus::Scheduled,
            completed_at: None,
            created_at: now,
            updated_at: now,
        };
        self.consultations.insert(consultation.clone());

        events::publish_consultation_scheduled(&self.env, consultation.id, patient_id, scheduled_for);

        Ok(consultation)
    }

    pub fn get(&self, consultation_id: u64) -> Result<Consultation, ContractError> {
        self.consultations
            .find(consultation_id)
            .ok_or(ContractError::ConsultationNotFound)
    }

    pub fn list(&self) -> Vec<Consultation> {
        self.consultations.load()
    }

    pub fn for_patient(&self, patient_id: u64) -> Vec<Consultation> {
        let mut matching = Vec::new(&self.env);
        for consultation in self.consultations.load().iter() {
            if consultation.patient_id == patient_id {
                matching.push_back(consultation);
            }
        }
        matching
    }

    /// Consultations scheduled within `[from, to)`, earliest first.
    pub fn scheduled_between(&self, from: u64, to: u64) -> Result<Vec<Consultation>, ContractError> {
        validation::validate_period(from, to)?;

        let mut agenda: Vec<Consultation> = Vec::new(&self.env);
        for consultation in self.consultations.load().iter() {
            if consultation.scheduled_for < from || consultation.scheduled_for >= to {
                continue;
            }
            let at = agenda
                .iter()
                .position(|placed| placed.scheduled_for > consultation.scheduled_for)
                .map(|index| index as u32)
                .unwrap_or(agenda.len());
            agenda.insert(at, consultation);
        }
        Ok(agenda)
    }

    /// Record the clinical outcome. Closed consultations are read-only.
    pub fn record_outcome(
        &self,
        consultation_id: u64,
        diagnosis: String,
        treatment: String,
        notes: String,
        follow_up_date: Option<u64>,
    ) -> Result<Consultation, ContractError> {
        validation::validate_text(&diagnosis)?;
        validation::validate_text(&treatment)?;
        validation::validate_text(&notes)?;

        let mut consultation = self.get(consultation_id)?;
        if matches!(
            consultation.status,
            ConsultationStatus::Completed | ConsultationStatus::Cancelled
        ) {
            return Err(ContractError::InvalidTransition);
        }

        consultation.diagnosis = diagnosis;
        consultation.treatment = treatment;
        consultation.notes = notes;
        consultation.follow_up_date = follow_up_date;
        consultation.updated_at = self.env.ledger().timestamp();
        self.consultations.replace(&consultation);

        events::publish_consultation_outcome(
            &self.env,
            consultation_id,
            consultation.patient_id,
            follow_up_date,
        );

        Ok(consultation)
    }

    pub fn set_status(
        &self,
        consultation_id: u64,
        status: ConsultationStatus,
    ) -> Result<Consultation, ContractError> {
        let mut consultation = self.get(consultation_id)?;
        if !consultation.status.can_transition_to(status) {
            return Err(ContractError::InvalidTransition);
        }

        let from = consultation.status;
        let now = self.env.ledger().timestamp();
        consultation.status = status;
        consultation.updated_at = now;
        if status == ConsultationStatus::Completed {
            consultation.completed_at = Some(now);
        }
        self.consultations.replace(&consultation);

        events::publish_consultation_status(&self.env, consultation_id, from, status);

        Ok(consultation)
    }

    pub fn delete(&self, consultation_id: u64) -> bool {
        match self.consultations.remove(consultation_id) {
            Some(_) => {
                events::publish_consultation_deleted(&self.env, consultation_id);
                true
            }
            None => false,
        }
    }
}

pub fn book(env: &Env) -> ConsultationBook {
    ConsultationBook::new(env, store::consultations(env), store::patients(env))
}

use common::counter;
use soroban_sdk::{log, Env, Vec};

use crate::{
    events,
    store::{self, Collection},
    types::{Patient, PatientProfile, PatientStatus},
    validation, ContractError,
};

/// Patient records, keyed by a sequential id.
pub struct PatientDirectory {
    env: Env,
    patients: Collection<Patient>,
}

impl PatientDirectory {
    pub fn new(env: &Env, patients: Collection<Patient>) -> Self {
        Self {
            env: env.clone(),
            patients,
        }
    }

    pub fn register(&self, profile: PatientProfile) -> Result<Patient, ContractError> {
        validate_profile(&profile)?;

        let now = self.env.ledger().timestamp();
        let patient = Patient {
            id: counter::next_id(&self.env, &store::PATIENT_CTR),
            profile,
            status: PatientStatus::Registered,
            created_at: now,
            updated_at: now,
        };
        self.patients.insert(patient.clone());

        log!(&self.env, "patient registered", patient.id);
        events::publish_patient_registered(
            &self.env,
            patient.id,
            patient.profile.first_name.clone(),
            patient.profile.last_name.clone(),
        );

        Ok(patient)
    }

    pub fn get(&self, patient_id: u64) -> Result<Patient, ContractError> {
        self.patients
            .find(patient_id)
            .ok_or(ContractError::PatientNotFound)
    }

    pub fn list(&self) -> Vec<Patient> {
        self.patients.load()
    }

    pub fn update(&self, patient_id: u64, profile: PatientProfile) -> Result<Patient, ContractError> {
        validate_profile(&profile)?;

        let mut patient = self.get(patient_id)?;
        patient.profile = profile;
        patient.updated_at = self.env.ledger().timestamp();
        self.patients.replace(&patient);

        events::publish_patient_updated(&self.env, patient_id);

        Ok(patient)
    }

    /// Patient status moves freely; the care pathway is not enforced.
    pub fn set_status(
        &self,
        patient_id: u64,
        status: PatientStatus,
    ) -> Result<Patient, ContractError> {
        let mut patient = self.get(patient_id)?;
        patient.status = status;
        patient.updated_at = self.env.ledger().timestamp();
        self.patients.replace(&patient);

        events::publish_patient_status(&self.env, patient_id, status);

        Ok(patient)
    }

    /// Queue entries, triages and consultations of the patient are kept.
    pub fn delete(&self, patient_id: u64) -> bool {
        match self.patients.remove(patient_id) {
            Some(_) => {
                events::publish_patient_deleted(&self.env, patient_id);
                true
            }
            None => false,
        }
    }
}

fn validate_profile(profile: &PatientProfile) -> Result<(), ContractError> {
    validation::validate_name(&profile.first_name)?;
    validation::validate_name(&profile.last_name)?;

    for field in [
        &profile.document_number,
        &profile.phone,
        &profile.email,
        &profile.birth_date,
        &profile.address,
        &profile.city,
        &profile.state,
        &profile.zip_code,
        &profile.emergency_contact,
        &profile.medical_history,
        &profile.allergies,
        &profile.medications,
    ] {
        validation::validate_text(field)?;
    }

    Ok(())
}

pub fn directory(env: &Env) -> PatientDirectory {
    PatientDirectory::new(env, store::patients(env))
}

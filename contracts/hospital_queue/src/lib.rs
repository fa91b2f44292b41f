#![no_std]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod consultations;
pub mod departments;
pub mod directory;
pub mod events;
pub mod join;
pub mod positions;
pub mod queues;
pub mod reports;
pub mod staff;
pub mod store;
pub mod triage;
pub mod types;
pub mod validation;


use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use types::*;

/// Contract errors
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidInput = 4,
    PatientNotFound = 5,
    DepartmentNotFound = 6,
    QueueNotFound = 7,
    EntryNotFound = 8,
    InvalidTransition = 9,
    StaleRevision = 10,
    QueueEmpty = 11,
    TriageNotFound = 12,
    ConsultationNotFound = 13,
    StaffNotFound = 14,
}

#[contract]
pub struct HospitalQueueContract;

#[contractimpl]
impl HospitalQueueContract {
    // ── Configuration ─────────────────────────────────────────

    /// Initialize the contract with an admin address and default settings
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        config::initialize(&env, admin)
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        config::admin(&env)
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        config::is_initialized(&env)
    }

    pub fn get_settings(env: Env) -> Settings {
        config::settings(&env)
    }

    /// Replace the settings. Only the admin may call this.
    pub fn update_settings(
        env: Env,
        caller: Address,
        settings: Settings,
    ) -> Result<(), ContractError> {
        config::update_settings(&env, caller, settings)
    }

    // ── Patients ──────────────────────────────────────────────

    pub fn register_patient(env: Env, profile: PatientProfile) -> Result<Patient, ContractError> {
        directory::directory(&env).register(profile)
    }

    pub fn get_patient(env: Env, patient_id: u64) -> Result<Patient, ContractError> {
        directory::directory(&env).get(patient_id)
    }

    pub fn list_patients(env: Env) -> Vec<Patient> {
        directory::directory(&env).list()
    }

    pub fn update_patient(
        env: Env,
        patient_id: u64,
        profile: PatientProfile,
    ) -> Result<Patient, ContractError> {
        directory::directory(&env).update(patient_id, profile)
    }

    pub fn set_patient_status(
        env: Env,
        patient_id: u64,
        status: PatientStatus,
    ) -> Result<Patient, ContractError> {
        directory::directory(&env).set_status(patient_id, status)
    }

    pub fn delete_patient(env: Env, patient_id: u64) -> bool {
        directory::directory(&env).delete(patient_id)
    }

    // ── Staff ─────────────────────────────────────────────────

    pub fn create_staff(
        env: Env,
        name: String,
        email: String,
        role: StaffRole,
    ) -> Result<StaffMember, ContractError> {
        staff::registry(&env).create(name, email, role)
    }

    pub fn get_staff(env: Env, staff_id: u64) -> Result<StaffMember, ContractError> {
        staff::registry(&env).get(staff_id)
    }

    pub fn list_staff(env: Env) -> Vec<StaffMember> {
        staff::registry(&env).list()
    }

    /// Active staff members holding `role`
    pub fn list_staff_by_role(env: Env, role: StaffRole) -> Vec<StaffMember> {
        staff::registry(&env).list_by_role(role)
    }

    pub fn update_staff(
        env: Env,
        staff_id: u64,
        name: String,
        email: String,
        role: StaffRole,
        is_active: bool,
    ) -> Result<StaffMember, ContractError> {
        staff::registry(&env).update(staff_id, name, email, role, is_active)
    }

    pub fn delete_staff(env: Env, staff_id: u64) -> bool {
        staff::registry(&env).delete(staff_id)
    }

    // ── Departments ───────────────────────────────────────────

    pub fn create_department(
        env: Env,
        name: String,
        description: String,
    ) -> Result<Department, ContractError> {
        departments::registry(&env).create(name, description)
    }

    pub fn get_department(env: Env, department_id: u64) -> Result<Department, ContractError> {
        departments::registry(&env).get(department_id)
    }

    pub fn list_departments(env: Env) -> Vec<Department> {
        departments::registry(&env).list()
    }

    pub fn update_department(
        env: Env,
        department_id: u64,
        name: String,
        description: String,
        is_active: bool,
    ) -> Result<Department, ContractError> {
        departments::registry(&env).update(department_id, name, description, is_active)
    }

    pub fn delete_department(env: Env, department_id: u64) -> bool {
        departments::registry(&env).delete(department_id)
    }

    // ── Queues ────────────────────────────────────────────────

    pub fn create_queue(
        env: Env,
        name: String,
        description: String,
        department_id: u64,
    ) -> Result<QueueView, ContractError> {
        queues::registry(&env).create(name, description, department_id)
    }

    pub fn get_queue(env: Env, queue_id: u64) -> Result<QueueView, ContractError> {
        queues::registry(&env).get(queue_id)
    }

    pub fn list_queues(env: Env) -> Vec<QueueView> {
        queues::registry(&env).list()
    }

    pub fn update_queue(
        env: Env,
        queue_id: u64,
        name: String,
        description: String,
        department_id: u64,
        is_active: bool,
    ) -> Result<QueueView, ContractError> {
        queues::registry(&env).update(queue_id, name, description, department_id, is_active)
    }

    /// Delete a queue and every entry in it
    pub fn delete_queue(env: Env, queue_id: u64) -> bool {
        queues::registry(&env).delete(queue_id)
    }

    // ── Queue entries ─────────────────────────────────────────

    /// Entries of a queue joined with their patients, ascending by position
    pub fn list_by_queue(env: Env, queue_id: u64) -> Vec<QueueEntryView> {
        let patients = directory::directory(&env);
        positions::book(&env).list_by_queue(queue_id, &patients.list())
    }

    /// Add a patient at the tail of a queue. Priority defaults to normal, notes to empty.
    pub fn add_entry(
        env: Env,
        queue_id: u64,
        patient_id: u64,
        priority: Option<Priority>,
        notes: Option<String>,
    ) -> Result<QueueEntry, ContractError> {
        positions::book(&env).add_entry(
            queue_id,
            patient_id,
            priority.unwrap_or(Priority::Normal),
            notes.unwrap_or_else(|| String::from_str(&env, "")),
        )
    }

    pub fn get_entry(env: Env, entry_id: u64) -> Result<QueueEntry, ContractError> {
        positions::book(&env).get(entry_id)
    }

    pub fn set_status(
        env: Env,
        entry_id: u64,
        status: EntryStatus,
    ) -> Result<QueueEntry, ContractError> {
        positions::book(&env).set_status(entry_id, status)
    }

    /// Compare-and-swap status change against the revision the caller last read
    pub fn set_status_checked(
        env: Env,
        entry_id: u64,
        status: EntryStatus,
        expected_revision: u32,
    ) -> Result<QueueEntry, ContractError> {
        positions::book(&env).set_status_checked(entry_id, status, expected_revision)
    }

    pub fn set_entry_notes(
        env: Env,
        entry_id: u64,
        notes: String,
    ) -> Result<QueueEntry, ContractError> {
        positions::book(&env).set_notes(entry_id, notes)
    }

    pub fn remove_entry(env: Env, entry_id: u64) -> bool {
        positions::book(&env).remove_entry(entry_id)
    }

    pub fn move_entry(
        env: Env,
        entry_id: u64,
        target_queue_id: u64,
    ) -> Result<QueueEntry, ContractError> {
        positions::book(&env).move_entry(entry_id, target_queue_id)
    }

    /// Start service for the next waiting patient of a queue
    pub fn call_next(env: Env, queue_id: u64) -> Result<QueueEntry, ContractError> {
        positions::book(&env).call_next(queue_id)
    }

    pub fn position_summary(env: Env, queue_id: u64) -> PositionSummary {
        positions::book(&env).position_summary(queue_id)
    }

    // ── Triage ────────────────────────────────────────────────

    /// Store vital signs and forward the patient to `destination_queue_id`
    pub fn record_triage(
        env: Env,
        patient_id: u64,
        vitals: Vitals,
        chief_complaint: String,
        notes: String,
        destination_queue_id: u64,
        priority: Priority,
    ) -> Result<TriageOutcome, ContractError> {
        triage::desk(&env).record(
            patient_id,
            vitals,
            chief_complaint,
            notes,
            destination_queue_id,
            priority,
        )
    }

    pub fn get_triage(env: Env, triage_id: u64) -> Result<Triage, ContractError> {
        triage::desk(&env).get(triage_id)
    }

    pub fn list_patient_triages(env: Env, patient_id: u64) -> Vec<Triage> {
        triage::desk(&env).for_patient(patient_id)
    }

    // ── Consultations ─────────────────────────────────────────

    pub fn schedule_consultation(
        env: Env,
        patient_id: u64,
        doctor: String,
        scheduled_for: u64,
        symptoms: String,
    ) -> Result<Consultation, ContractError> {
        consultations::book(&env).schedule(patient_id, doctor, scheduled_for, symptoms)
    }

    pub fn get_consultation(env: Env, consultation_id: u64) -> Result<Consultation, ContractError> {
        consultations::book(&env).get(consultation_id)
    }

    pub fn list_consultations(env: Env) -> Vec<Consultation> {
        consultations::book(&env).list()
    }

    /// Consultations scheduled within `[from, to)`, earliest first
    pub fn list_consultations_between(
        env: Env,
        from: u64,
        to: u64,
    ) -> Result<Vec<Consultation>, ContractError> {
        consultations::book(&env).scheduled_between(from, to)
    }

    pub fn list_patient_consultations(env: Env, patient_id: u64) -> Vec<Consultation> {
        consultations::book(&env).for_patient(patient_id)
    }

    pub fn record_consultation_outcome(
        env: Env,
        consultation_id: u64,
        diagnosis: String,
        treatment: String,
        notes: String,
        follow_up_date: Option<u64>,
    ) -> Result<Consultation, ContractError> {
        consultations::book(&env).record_outcome(
            consultation_id,
            diagnosis,
            treatment,
            notes,
            follow_up_date,
        )
    }

    pub fn set_consultation_status(
        env: Env,
        consultation_id: u64,
        status: ConsultationStatus,
    ) -> Result<Consultation, ContractError> {
        consultations::book(&env).set_status(consultation_id, status)
    }

    pub fn delete_consultation(env: Env, consultation_id: u64) -> bool {
        consultations::book(&env).delete(consultation_id)
    }

    // ── Reports ───────────────────────────────────────────────

    pub fn dashboard_overview(env: Env) -> DashboardOverview {
        reports::dashboard_overview(&env)
    }

    pub fn consultation_report(
        env: Env,
        from: u64,
        to: u64,
    ) -> Result<ConsultationReport, ContractError> {
        reports::consultation_report(&env, from, to)
    }

    pub fn period_report(env: Env, from: u64, to: u64) -> Result<PeriodReport, ContractError> {
        reports::period_report(&env, from, to)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}

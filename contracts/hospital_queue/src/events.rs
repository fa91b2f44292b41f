use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

use crate::types::{
    ConsultationStatus, Department, EntryStatus, PatientStatus, Queue, QueueEntry, StaffMember,
    StaffRole,
};

// ── Payloads ──────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettingsUpdatedEvent {
    pub admin: Address,
    pub utc_offset_minutes: i32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRegisteredEvent {
    pub patient_id: u64,
    pub first_name: String,
    pub last_name: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientStatusEvent {
    pub patient_id: u64,
    pub status: PatientStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordEvent {
    pub id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepartmentCreatedEvent {
    pub department_id: u64,
    pub name: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepartmentUpdatedEvent {
    pub department_id: u64,
    pub name: String,
    pub is_active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueueCreatedEvent {
    pub queue_id: u64,
    pub department_id: u64,
    pub name: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueueUpdatedEvent {
    pub queue_id: u64,
    pub department_id: u64,
    pub is_active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueueDeletedEvent {
    pub queue_id: u64,
    pub entries_removed: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryAddedEvent {
    pub entry_id: u64,
    pub queue_id: u64,
    pub patient_id: u64,
    pub position: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryStatusEvent {
    pub entry_id: u64,
    pub from: EntryStatus,
    pub to: EntryStatus,
    pub revision: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryNotesEvent {
    pub entry_id: u64,
    pub revision: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryRemovedEvent {
    pub entry_id: u64,
    pub queue_id: u64,
    pub position: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryMovedEvent {
    pub old_entry_id: u64,
    pub new_entry_id: u64,
    pub from_queue: u64,
    pub to_queue: u64,
    pub position: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TriageRecordedEvent {
    pub triage_id: u64,
    pub patient_id: u64,
    pub entry_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsultationScheduledEvent {
    pub consultation_id: u64,
    pub patient_id: u64,
    pub scheduled_for: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsultationStatusEvent {
    pub consultation_id: u64,
    pub from: ConsultationStatus,
    pub to: ConsultationStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsultationOutcomeEvent {
    pub consultation_id: u64,
    pub patient_id: u64,
    pub follow_up_date: Option<u64>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StaffEvent {
    pub staff_id: u64,
    pub role: StaffRole,
    pub is_active: bool,
}

// ── Publishers ────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, admin: Address) {
    env.events()
        .publish((symbol_short!("INIT"),), InitializedEvent { admin });
}

pub fn publish_settings_updated(env: &Env, admin: Address, utc_offset_minutes: i32) {
    env.events().publish(
        (symbol_short!("SET_UPD"),),
        SettingsUpdatedEvent {
            admin,
            utc_offset_minutes,
        },
    );
}

pub fn publish_patient_registered(env: &Env, patient_id: u64, first_name: String, last_name: String) {
    env.events().publish(
        (symbol_short!("PAT_REG"), patient_id),
        PatientRegisteredEvent {
            patient_id,
            first_name,
            last_name,
        },
    );
}

pub fn publish_patient_updated(env: &Env, patient_id: u64) {
    env.events().publish(
        (symbol_short!("PAT_UPD"), patient_id),
        RecordEvent { id: patient_id },
    );
}

pub fn publish_patient_status(env: &Env, patient_id: u64, status: PatientStatus) {
    env.events().publish(
        (symbol_short!("PAT_STS"), patient_id),
        PatientStatusEvent { patient_id, status },
    );
}

pub fn publish_patient_deleted(env: &Env, patient_id: u64) {
    env.events().publish(
        (symbol_short!("PAT_DEL"), patient_id),
        RecordEvent { id: patient_id },
    );
}

pub fn publish_department_created(env: &Env, department_id: u64, name: String) {
    env.events().publish(
        (symbol_short!("DEPT_ADD"), department_id),
        DepartmentCreatedEvent {
            department_id,
            name,
        },
    );
}

pub fn publish_department_updated(env: &Env, department: &Department) {
    env.events().publish(
        (symbol_short!("DEPT_UPD"), department.id),
        DepartmentUpdatedEvent {
            department_id: department.id,
            name: department.name.clone(),
            is_active: department.is_active,
        },
    );
}

pub fn publish_department_deleted(env: &Env, department_id: u64) {
    env.events().publish(
        (symbol_short!("DEPT_DEL"), department_id),
        RecordEvent { id: department_id },
    );
}

pub fn publish_queue_created(env: &Env, queue_id: u64, department_id: u64, name: String) {
    env.events().publish(
        (symbol_short!("Q_ADD"), queue_id),
        QueueCreatedEvent {
            queue_id,
            department_id,
            name,
        },
    );
}

pub fn publish_queue_updated(env: &Env, queue: &Queue) {
    env.events().publish(
        (symbol_short!("Q_UPD"), queue.id),
        QueueUpdatedEvent {
            queue_id: queue.id,
            department_id: queue.department_id,
            is_active: queue.is_active,
        },
    );
}

pub fn publish_queue_deleted(env: &Env, queue_id: u64, entries_removed: u32) {
    env.events().publish(
        (symbol_short!("Q_DEL"), queue_id),
        QueueDeletedEvent {
            queue_id,
            entries_removed,
        },
    );
}

pub fn publish_entry_added(env: &Env, entry: &QueueEntry) {
    env.events().publish(
        (symbol_short!("ENT_ADD"), entry.queue_id),
        EntryAddedEvent {
            entry_id: entry.id,
            queue_id: entry.queue_id,
            patient_id: entry.patient_id,
            position: entry.position,
        },
    );
}

pub fn publish_entry_status(env: &Env, entry: &QueueEntry, from: EntryStatus) {
    env.events().publish(
        (symbol_short!("ENT_STS"), entry.queue_id),
        EntryStatusEvent {
            entry_id: entry.id,
            from,
            to: entry.status,
            revision: entry.revision,
        },
    );
}

pub fn publish_entry_notes(env: &Env, entry: &QueueEntry) {
    env.events().publish(
        (symbol_short!("ENT_NOTE"), entry.queue_id),
        EntryNotesEvent {
            entry_id: entry.id,
            revision: entry.revision,
        },
    );
}

pub fn publish_entry_removed(env: &Env, entry: &QueueEntry) {
    env.events().publish(
        (symbol_short!("ENT_DEL"), entry.queue_id),
        EntryRemovedEvent {
            entry_id: entry.id,
            queue_id: entry.queue_id,
            position: entry.position,
        },
    );
}

pub fn publish_entry_moved(env: &Env, old: &QueueEntry, new: &QueueEntry) {
    env.events().publish(
        (symbol_short!("ENT_MOV"), old.queue_id, new.queue_id),
        EntryMovedEvent {
            old_entry_id: old.id,
            new_entry_id: new.id,
            from_queue: old.queue_id,
            to_queue: new.queue_id,
            position: new.position,
        },
    );
}

pub fn publish_triage_recorded(env: &Env, triage_id: u64, patient_id: u64, entry_id: u64) {
    env.events().publish(
        (symbol_short!("TRI_ADD"), patient_id),
        TriageRecordedEvent {
            triage_id,
            patient_id,
            entry_id,
        },
    );
}

pub fn publish_consultation_scheduled(
    env: &Env,
    consultation_id: u64,
    patient_id: u64,
    scheduled_for: u64,
) {
    env.events().publish(
        (symbol_short!("CONS_ADD"), patient_id),
        ConsultationScheduledEvent {
            consultation_id,
            patient_id,
            scheduled_for,
        },
    );
}

pub fn publish_consultation_status(
    env: &Env,
    consultation_id: u64,
    from: ConsultationStatus,
    to: ConsultationStatus,
) {
    env.events().publish(
        (symbol_short!("CONS_STS"), consultation_id),
        ConsultationStatusEvent {
            consultation_id,
            from,
            to,
        },
    );
}

pub fn publish_consultation_outcome(
    env: &Env,
    consultation_id: u64,
    patient_id: u64,
    follow_up_date: Option<u64>,
) {
    env.events().publish(
        (symbol_short!("CONS_OUT"), consultation_id),
        ConsultationOutcomeEvent {
            consultation_id,
            patient_id,
            follow_up_date,
        },
    );
}

pub fn publish_consultation_deleted(env: &Env, consultation_id: u64) {
    env.events().publish(
        (symbol_short!("CONS_DEL"), consultation_id),
        RecordEvent {
            id: consultation_id,
        },
    );
}

fn staff_event(member: &StaffMember) -> StaffEvent {
    StaffEvent {
        staff_id: member.id,
        role: member.role,
        is_active: member.is_active,
    }
}

pub fn publish_staff_created(env: &Env, member: &StaffMember) {
    env.events()
        .publish((symbol_short!("STF_ADD"), member.id), staff_event(member));
}

pub fn publish_staff_updated(env: &Env, member: &StaffMember) {
    env.events()
        .publish((symbol_short!("STF_UPD"), member.id), staff_event(member));
}

pub fn publish_staff_deleted(env: &Env, staff_id: u64) {
    env.events()
        .publish((symbol_short!("STF_DEL"), staff_id), RecordEvent { id: staff_id });
}

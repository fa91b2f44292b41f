use soroban_sdk::{contracttype, Map, String, Vec};

// ── Patients ──────────────────────────────────────────────────

/// Where a patient currently is in the care pathway
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PatientStatus {
    Registered,
    WaitingTriage,
    InTriage,
    WaitingConsultation,
    InConsultation,
    Completed,
}

/// Demographic and clinical details supplied at registration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientProfile {
    pub first_name: String,
    pub last_name: String,
    pub document_number: String,
    pub phone: String,
    pub email: String,
    pub birth_date: String, // YYYY-MM-DD
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub emergency_contact: String,
    pub medical_history: String,
    pub allergies: String,
    pub medications: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patient {
    pub id: u64,
    pub profile: PatientProfile,
    pub status: PatientStatus,
    pub created_at: u64,
    pub updated_at: u64,
}

// ── Staff ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StaffRole {
    Admin,
    Doctor,
    Nurse,
    Receptionist,
}

/// A member of the hospital staff. Roles are descriptive; no call is gated on them.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StaffMember {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: StaffRole,
    pub is_active: bool,
    pub created_at: u64,
    pub updated_at: u64,
}

// ── Departments and queues ────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Department {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: u64,
    pub updated_at: u64,
}

/// A named waiting line. The owning department is resolved at read time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Queue {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub department_id: u64,
    pub is_active: bool,
    pub created_at: u64,
    pub updated_at: u64,
}

/// Result of resolving a queue's `department_id` at read time
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DepartmentRef {
    Missing,
    Found(Department),
}

impl DepartmentRef {
    pub fn found(self) -> Option<Department> {
        match self {
            DepartmentRef::Found(department) => Some(department),
            DepartmentRef::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, DepartmentRef::Missing)
    }
}

impl From<Option<Department>> for DepartmentRef {
    fn from(department: Option<Department>) -> Self {
        department.map_or(DepartmentRef::Missing, DepartmentRef::Found)
    }
}

/// A queue joined with its department, when the department still exists
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueueView {
    pub queue: Queue,
    pub department: DepartmentRef,
}

// ── Queue entries ─────────────────────────────────────────────

/// Lifecycle of one patient's place in a queue.
///
/// `Completed` and `Canceled` are terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryStatus {
    Waiting,
    InProgress,
    Completed,
    Canceled,
}

impl EntryStatus {
    /// Whether `self -> next` is an allowed lifecycle step.
    pub fn can_transition_to(self, next: EntryStatus) -> bool {
        matches!(
            (self, next),
            (EntryStatus::Waiting, EntryStatus::InProgress)
                | (EntryStatus::Waiting, EntryStatus::Canceled)
                | (EntryStatus::InProgress, EntryStatus::Completed)
                | (EntryStatus::InProgress, EntryStatus::Canceled)
        )
    }
}

/// Display priority. Never used for ordering; positions alone decide who is next.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Priority {
    High,
    Medium,
    Normal,
    Low,
}

impl Priority {
    /// Label stored under the `priority` metadata key
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "alta",
            Priority::Medium => "média",
            Priority::Normal => "normal",
            Priority::Low => "baixa",
        }
    }
}

/// One patient's occupancy of one queue
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueueEntry {
    pub id: u64,
    pub queue_id: u64,
    pub patient_id: u64,
    /// Ticket number within the queue; never renumbered after removals
    pub position: u32,
    pub status: EntryStatus,
    pub notes: String,
    /// `priority` and `waitingSince` (HH:MM at creation)
    pub metadata: Map<String, String>,
    pub created_at: u64,
    pub updated_at: u64,
    /// Bumped on every mutation, for compare-and-swap updates
    pub revision: u32,
}

/// Result of resolving an entry's `patient_id` at read time
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PatientRef {
    Missing,
    Found(Patient),
}

impl PatientRef {
    pub fn found(self) -> Option<Patient> {
        match self {
            PatientRef::Found(patient) => Some(patient),
            PatientRef::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, PatientRef::Missing)
    }
}

impl From<Option<Patient>> for PatientRef {
    fn from(patient: Option<Patient>) -> Self {
        patient.map_or(PatientRef::Missing, PatientRef::Found)
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueueEntryView {
    pub entry: QueueEntry,
    pub patient: PatientRef,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PositionSummary {
    pub total: u32,
    pub waiting: u32,
    pub in_progress: u32,
    pub completed: u32,
    pub canceled: u32,
}

// ── Triage ────────────────────────────────────────────────────

/// Vital signs in fixed integer units
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vitals {
    pub temperature_dc: u32, // tenths of a degree Celsius
    pub systolic_mmhg: u32,
    pub diastolic_mmhg: u32,
    pub heart_rate: u32,
    pub respiratory_rate: u32,
    pub oxygen_saturation: u32, // percent
    pub pain_level: u32,        // 0-10
    pub weight_g: u32,
    pub height_cm: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Triage {
    pub id: u64,
    pub patient_id: u64,
    pub vitals: Vitals,
    pub chief_complaint: String,
    pub notes: String,
    pub created_at: u64,
    pub updated_at: u64,
}

/// The stored triage plus the entry created in the destination queue
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TriageOutcome {
    pub triage: Triage,
    pub entry: QueueEntry,
}

// ── Consultations ─────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConsultationStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl ConsultationStatus {
    pub fn can_transition_to(self, next: ConsultationStatus) -> bool {
        matches!(
            (self, next),
            (ConsultationStatus::Scheduled, ConsultationStatus::InProgress)
                | (ConsultationStatus::Scheduled, ConsultationStatus::Cancelled)
                | (ConsultationStatus::InProgress, ConsultationStatus::Completed)
                | (ConsultationStatus::InProgress, ConsultationStatus::Cancelled)
        )
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Consultation {
    pub id: u64,
    pub patient_id: u64,
    pub doctor: String,
    pub scheduled_for: u64,
    pub symptoms: String,
    pub diagnosis: String,
    pub treatment: String,
    pub notes: String,
    pub follow_up_date: Option<u64>,
    pub status: ConsultationStatus,
    pub completed_at: Option<u64>,
    pub created_at: u64,
    pub updated_at: u64,
}

// ── Configuration and reports ─────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Settings {
    /// Local time offset used for `waitingSince` and "today" in reports
    pub utc_offset_minutes: i32,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TodayStats {
    pub registered: u32,
    pub triaged: u32,
    pub consulted: u32,
    pub completed: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepartmentStats {
    pub department_id: u64,
    pub name: String,
    pub active_patients: u32,
    pub waiting: u32,
}

/// Consultations per status
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConsultationReport {
    pub total: u32,
    pub scheduled: u32,
    pub in_progress: u32,
    pub completed: u32,
    pub cancelled: u32,
}

/// Activity within `[from, to)`: consultations by scheduled time, patients
/// and queues by creation time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PeriodReport {
    pub from: u64,
    pub to: u64,
    pub consultations: ConsultationReport,
    pub new_patients: u32,
    pub active_queues: u32,
    pub inactive_queues: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DashboardOverview {
    pub total_patients: u32,
    pub active_patients: u32,
    pub today: TodayStats,
    pub departments: Vec<DepartmentStats>,
}

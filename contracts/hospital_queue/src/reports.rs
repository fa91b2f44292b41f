use common::clock;
use soroban_sdk::{Env, Vec};

use crate::{
    config, store,
    types::{
        Consultation, ConsultationReport, ConsultationStatus, DashboardOverview, DepartmentStats,
        EntryStatus, PatientStatus, PeriodReport, TodayStats,
    },
    validation, ContractError,
};

/// Headline counts for the dashboard.
///
/// "Today" is the local calendar day of the current ledger time under the
/// configured UTC offset.
pub fn dashboard_overview(env: &Env) -> DashboardOverview {
    let utc_offset = config::settings(env).utc_offset_minutes;
    let today = clock::local_day(env.ledger().timestamp(), utc_offset);
    let is_today = |timestamp: u64| clock::local_day(timestamp, utc_offset) == today;

    let patients = store::patients(env).load();
    let mut active_patients = 0;
    let mut stats = TodayStats::default();
    for patient in patients.iter() {
        if patient.status != PatientStatus::Completed {
            active_patients += 1;
        }
        if is_today(patient.created_at) {
            stats.registered += 1;
        }
        if patient.status == PatientStatus::Completed && is_today(patient.updated_at) {
            stats.completed += 1;
        }
    }

    stats.triaged = store::triages(env)
        .load()
        .iter()
        .filter(|triage| is_today(triage.created_at))
        .count() as u32;

    stats.consulted = store::consultations(env)
        .load()
        .iter()
        .filter(|consultation| {
            consultation.status == ConsultationStatus::Completed
                && consultation.completed_at.is_some_and(is_today)
        })
        .count() as u32;

    DashboardOverview {
        total_patients: patients.len(),
        active_patients,
        today: stats,
        departments: department_stats(env),
    }
}

/// Waiting and in-service counts per department, summed over its queues.
pub fn department_stats(env: &Env) -> Vec<DepartmentStats> {
    let queues = store::queues(env).load();
    let entries = store::queue_items(env).load();

    let mut stats = Vec::new(env);
    for department in store::departments(env).load().iter() {
        let mut waiting = 0;
        let mut active_patients = 0;
        for queue in queues.iter().filter(|queue| queue.department_id == department.id) {
            for entry in entries.iter().filter(|entry| entry.queue_id == queue.id) {
                match entry.status {
                    EntryStatus::Waiting => {
                        waiting += 1;
                        active_patients += 1;
                    }
                    EntryStatus::InProgress => active_patients += 1,
                    EntryStatus::Completed | EntryStatus::Canceled => {}
                }
            }
        }

        stats.push_back(DepartmentStats {
            department_id: department.id,
            name: department.name,
            active_patients,
            waiting,
        });
    }
    stats
}

/// Per-status counts of the consultations scheduled within `[from, to)`.
pub fn consultation_report(env: &Env, from: u64, to: u64) -> Result<ConsultationReport, ContractError> {
    validation::validate_period(from, to)?;
    Ok(count_consultations(
        store::consultations(env)
            .load()
            .iter()
            .filter(|consultation| (from..to).contains(&consultation.scheduled_for)),
    ))
}

pub fn period_report(env: &Env, from: u64, to: u64) -> Result<PeriodReport, ContractError> {
    let consultations = consultation_report(env, from, to)?;
    let within = |timestamp: u64| (from..to).contains(&timestamp);

    let new_patients = store::patients(env)
        .load()
        .iter()
        .filter(|patient| within(patient.created_at))
        .count() as u32;

    let mut active_queues = 0;
    let mut inactive_queues = 0;
    for queue in store::queues(env).load().iter() {
        if !within(queue.created_at) {
            continue;
        }
        if queue.is_active {
            active_queues += 1;
        } else {
            inactive_queues += 1;
        }
    }

    Ok(PeriodReport {
        from,
        to,
        consultations,
        new_patients,
        active_queues,
        inactive_queues,
    })
}

fn count_consultations(consultations: impl Iterator<Item = Consultation>) -> ConsultationReport {
    let mut report = ConsultationReport::default();
    for consultation in consultations {
        report.total += 1;
        match consultation.status {
            ConsultationStatus::Scheduled => report.scheduled += 1,
            ConsultationStatus::InProgress => report.in_progress += 1,
            ConsultationStatus::Completed => report.completed += 1,
            ConsultationStatus::Cancelled => report.cancelled += 1,
        }
    }
    report
}

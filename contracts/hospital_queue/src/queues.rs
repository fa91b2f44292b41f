use common::counter;
use soroban_sdk::{log, Env, String, Vec};

use crate::{
    events, join,
    store::{self, Collection},
    types::{Department, DepartmentRef, Queue, QueueEntry, QueueView},
    validation, ContractError,
};

/// Named waiting lines and their department links.
pub struct QueueRegistry {
    env: Env,
    queues: Collection<Queue>,
    departments: Collection<Department>,
    entries: Collection<QueueEntry>,
}

impl QueueRegistry {
    pub fn new(
        env: &Env,
        queues: Collection<Queue>,
        departments: Collection<Department>,
        entries: Collection<QueueEntry>,
    ) -> Self {
        Self {
            env: env.clone(),
            queues,
            departments,
            entries,
        }
    }

    pub fn create(
        &self,
        name: String,
        description: String,
        department_id: u64,
    ) -> Result<QueueView, ContractError> {
        validation::validate_name(&name)?;
        validation::validate_text(&description)?;
        let department = self
            .departments
            .find(department_id)
            .ok_or(ContractError::DepartmentNotFound)?;

        let now = self.env.ledger().timestamp();
        let queue = Queue {
            id: counter::next_id(&self.env, &store::QUEUE_CTR),
            name,
            description,
            department_id,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.queues.insert(queue.clone());

        events::publish_queue_created(&self.env, queue.id, department_id, queue.name.clone());

        Ok(QueueView {
            queue,
            department: DepartmentRef::Found(department),
        })
    }

    pub fn get(&self, queue_id: u64) -> Result<QueueView, ContractError> {
        let queue = self
            .queues
            .find(queue_id)
            .ok_or(ContractError::QueueNotFound)?;
        Ok(join::attach_department(queue, &self.departments.load()))
    }

    pub fn list(&self) -> Vec<QueueView> {
        join::attach_departments(&self.env, &self.queues.load(), &self.departments.load())
    }

    pub fn update(
        &self,
        queue_id: u64,
        name: String,
        description: String,
        department_id: u64,
        is_active: bool,
    ) -> Result<QueueView, ContractError> {
        validation::validate_name(&name)?;
        validation::validate_text(&description)?;
        if !self.departments.contains(department_id) {
            return Err(ContractError::DepartmentNotFound);
        }

        let mut queue = self
            .queues
            .find(queue_id)
            .ok_or(ContractError::QueueNotFound)?;
        queue.name = name;
        queue.description = description;
        queue.department_id = department_id;
        queue.is_active = is_active;
        queue.updated_at = self.env.ledger().timestamp();
        self.queues.replace(&queue);

        events::publish_queue_updated(&self.env, &queue);

        Ok(join::attach_department(queue, &self.departments.load()))
    }

    /// Delete the queue together with every entry waiting in it.
    pub fn delete(&self, queue_id: u64) -> bool {
        if self.queues.remove(queue_id).is_none() {
            return false;
        }

        let entries_removed = self.entries.retain(|entry| entry.queue_id != queue_id);

        log!(&self.env, "queue deleted", queue_id, entries_removed);
        events::publish_queue_deleted(&self.env, queue_id, entries_removed);

        true
    }
}

pub fn registry(env: &Env) -> QueueRegistry {
    QueueRegistry::new(
        env,
        store::queues(env),
        store::departments(env),
        store::queue_items(env),
    )
}

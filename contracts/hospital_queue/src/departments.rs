use common::counter;
use soroban_sdk::{Env, String, Vec};

use crate::{
    events,
    store::{self, Collection},
    types::Department,
    validation, ContractError,
};

pub struct DepartmentRegistry {
    env: Env,
    departments: Collection<Department>,
}

impl DepartmentRegistry {
    pub fn new(env: &Env, departments: Collection<Department>) -> Self {
        Self {
            env: env.clone(),
            departments,
        }
    }

    pub fn create(&self, name: String, description: String) -> Result<Department, ContractError> {
        validation::validate_name(&name)?;
        validation::validate_text(&description)?;

        let now = self.env.ledger().timestamp();
        let department = Department {
            id: counter::next_id(&self.env, &store::DEPARTMENT_CTR),
            name,
            description,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.departments.insert(department.clone());

        events::publish_department_created(&self.env, department.id, department.name.clone());

        Ok(department)
    }

    pub fn get(&self, department_id: u64) -> Result<Department, ContractError> {
        self.departments
            .find(department_id)
            .ok_or(ContractError::DepartmentNotFound)
    }

    pub fn list(&self) -> Vec<Department> {
        self.departments.load()
    }

    pub fn update(
        &self,
        department_id: u64,
        name: String,
        description: String,
        is_active: bool,
    ) -> Result<Department, ContractError> {
        validation::validate_name(&name)?;
        validation::validate_text(&description)?;

        let mut department = self.get(department_id)?;
        department.name = name;
        department.description = description;
        department.is_active = is_active;
        department.updated_at = self.env.ledger().timestamp();
        self.departments.replace(&department);

        events::publish_department_updated(&self.env, &department);

        Ok(department)
    }

    /// Queues pointing at the department keep their reference; joins then attach nothing.
    pub fn delete(&self, department_id: u64) -> bool {
        match self.departments.remove(department_id) {
            Some(_) => {
                events::publish_department_deleted(&self.env, department_id);
                true
            }
            None => false,
        }
    }
}

pub fn registry(env: &Env) -> DepartmentRegistry {
    DepartmentRegistry::new(env, store::departments(env))
}

use common::counter;
use soroban_sdk::{Env, String, Vec};

use crate::{
    events,
    store::{self, Collection},
    types::{StaffMember, StaffRole},
    validation, ContractError,
};

/// Hospital staff records: doctors, nurses, receptionists and administrators.
pub struct StaffRegistry {
    env: Env,
    staff: Collection<StaffMember>,
}

impl StaffRegistry {
    pub fn new(env: &Env, staff: Collection<StaffMember>) -> Self {
        Self {
            env: env.clone(),
            staff,
        }
    }

    pub fn create(
        &self,
        name: String,
        email: String,
        role: StaffRole,
    ) -> Result<StaffMember, ContractError> {
        validation::validate_name(&name)?;
        validation::validate_required_text(&email)?;

        let now = self.env.ledger().timestamp();
        let member = StaffMember {
            id: counter::next_id(&self.env, &store::STAFF_CTR),
            name,
            email,
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.staff.insert(member.clone());

        events::publish_staff_created(&self.env, &member);

        Ok(member)
    }

    pub fn get(&self, staff_id: u64) -> Result<StaffMember, ContractError> {
        self.staff
            .find(staff_id)
            .ok_or(ContractError::StaffNotFound)
    }

    pub fn list(&self) -> Vec<StaffMember> {
        self.staff.load()
    }

    /// Active members holding `role`, e.g. the doctors available for scheduling.
    pub fn list_by_role(&self, role: StaffRole) -> Vec<StaffMember> {
        let mut members = Vec::new(&self.env);
        for member in self.staff.load().iter() {
            if member.role == role && member.is_active {
                members.push_back(member);
            }
        }
        members
    }

    pub fn update(
        &self,
        staff_id: u64,
        name: String,
        email: String,
        role: StaffRole,
        is_active: bool,
    ) -> Result<StaffMember, ContractError> {
        validation::validate_name(&name)?;
        validation::validate_required_text(&email)?;

        let mut member = self.get(staff_id)?;
        member.name = name;
        member.email = email;
        member.role = role;
        member.is_active = is_active;
        member.updated_at = self.env.ledger().timestamp();
        self.staff.replace(&member);

        events::publish_staff_updated(&self.env, &member);

        Ok(member)
    }

    pub fn delete(&self, staff_id: u64) -> bool {
        match self.staff.remove(staff_id) {
            Some(_) => {
                events::publish_staff_deleted(&self.env, staff_id);
                true
            }
            None => false,
        }
    }
}

pub fn registry(env: &Env) -> StaffRegistry {
    StaffRegistry::new(env, store::staff(env))
}

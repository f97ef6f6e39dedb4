//! Employee population synthesis.

use serde::{Deserialize, Serialize};

use crate::config::{GeneratorConfig, IdentityConfig};
use crate::sample_data::{self, FIRST_NAMES, JOB_TITLES, LAST_NAMES};
use crate::services::org_hierarchy::{OrgChain, OrgHierarchy};
use crate::stream::DeterministicStream;

/// Lower bound (inclusive) of synthesized six-digit ids.
pub const EMPLOYEE_ID_MIN: i64 = 100_000;
/// Upper bound (exclusive) of synthesized six-digit ids.
pub const EMPLOYEE_ID_MAX: i64 = 1_000_000;

/// A synthesized employee. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub emp_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// `"First Last"`.
    pub name: String,
    pub email: String,
    pub username: String,
    pub job_title: String,
    pub manager_name: String,
    pub manager_email: String,
    pub manager_emp_id: i64,
    pub org: OrgChain,
}

/// The employee population of a run.
#[derive(Debug, Clone, Default)]
pub struct EntityPool {
    employees: Vec<Employee>,
}

impl EntityPool {
    /// Generate `config.employee_count` employees sequentially from `stream`.
    ///
    /// Each employee consumes, in order: first name, last name, employee id,
    /// org chain, job title and manager id.
    pub fn generate(
        config: &GeneratorConfig,
        hierarchy: &OrgHierarchy,
        stream: &mut DeterministicStream,
    ) -> Self {
        let identity = &config.identity;
        let employees = (0..config.employee_count)
            .map(|_| synthesize_employee(identity, hierarchy, stream))
            .collect();
        Self { employees }
    }

    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    #[must_use]
    pub fn into_employees(self) -> Vec<Employee> {
        self.employees
    }
}

fn synthesize_employee(
    identity: &IdentityConfig,
    hierarchy: &OrgHierarchy,
    stream: &mut DeterministicStream,
) -> Employee {
    let first_name = sample_data::draw(stream, FIRST_NAMES);
    let last_name = sample_data::draw(stream, LAST_NAMES);
    let emp_id = stream.int_in(EMPLOYEE_ID_MIN, EMPLOYEE_ID_MAX);
    let org = hierarchy.random_chain(stream);
    let job_title = sample_data::draw(stream, JOB_TITLES);
    let manager_emp_id = stream.int_in(EMPLOYEE_ID_MIN, EMPLOYEE_ID_MAX);

    let name = format!("{first_name} {last_name}");
    let manager_name = org.manager().to_string();
    Employee {
        emp_id,
        email: identity.email_for(&name),
        username: IdentityConfig::username_for(first_name, last_name),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        name,
        job_title: job_title.to_string(),
        manager_email: identity.email_for(&manager_name),
        manager_name,
        manager_emp_id,
        org,
    }
}

use crate::models::{EmployeeStatus, EnrollmentStatus, MatchKey, PersonName, PlanType};
use crate::utils::date::MISSING_DATE;
use crate::utils::id::normalize_id_str;
use crate::utils::name::split_name;

/// One enrollment line of the ADP export.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollRecord {
    /// 0-based data row in the source table.
    pub row: usize,
    /// As exported: `"Last, First"`.
    pub full_name: String,
    /// `None` when `full_name` has no comma.
    pub name: Option<PersonName>,
    pub company_code: String,
    /// Normalized 9-digit SSN, empty when the export has none.
    pub ssn: String,
    pub date_of_birth: i64,
    pub hire_date: i64,
    pub termination_date: i64,
    pub plan_type: PlanType,
    pub enrollment_status: EnrollmentStatus,
    pub employee_status: EmployeeStatus,
    pub anomalies: Vec<String>,
}

impl PayrollRecord {
    pub fn new(
        row: usize,
        full_name: &str,
        plan_type: PlanType,
        enrollment_status: EnrollmentStatus,
    ) -> Self {
        let mut anomalies = Vec::new();
        let name = match split_name(full_name) {
            Ok((first, last)) => Some(PersonName::new(&first, &last)),
            Err(_) => {
                anomalies.push(format!("malformed name '{}'", full_name.trim()));
                None
            }
        };

        Self {
            row,
            full_name: full_name.trim().to_string(),
            name,
            company_code: String::new(),
            ssn: String::new(),
            date_of_birth: MISSING_DATE,
            hire_date: MISSING_DATE,
            termination_date: MISSING_DATE,
            plan_type,
            enrollment_status,
            employee_status: EmployeeStatus::Active,
            anomalies,
        }
    }

    pub fn with_dates(mut self, date_of_birth: i64, hire_date: i64, termination_date: i64) -> Self {
        self.date_of_birth = date_of_birth;
        self.hire_date = hire_date;
        self.termination_date = termination_date;
        self
    }

    pub fn with_ssn(mut self, raw: &str) -> Self {
        self.ssn = normalize_id_str(raw);
        self
    }

    pub fn identity_key(&self) -> Option<MatchKey> {
        self.name
            .as_ref()
            .map(|n| MatchKey::identity(n, self.date_of_birth))
    }

    pub fn ssn_key(&self) -> Option<MatchKey> {
        MatchKey::ssn(&self.ssn)
    }
}

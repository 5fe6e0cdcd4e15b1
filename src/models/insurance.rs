use crate::models::{MatchKey, PersonName};
use crate::utils::date::MISSING_DATE;
use crate::utils::name::split_name;

/// One enrollment line of a provider extract.
#[derive(Debug, Clone, PartialEq)]
pub struct InsuranceRecord {
    /// 0-based data row in the source table.
    pub row: usize,
    /// `None` when a combined name could not be split.
    pub name: Option<PersonName>,
    /// Name as shown in the report (`"Last, First"` where possible).
    pub display_name: String,
    /// Customer/member number, empty for formats without one.
    pub member_id: String,
    pub date_of_birth: i64,
    pub hire_date: i64,
    pub termination_date: i64,
    pub anomalies: Vec<String>,
}

impl InsuranceRecord {
    /// Record from separate first/last name columns.
    pub fn from_parts(row: usize, first: &str, last: &str) -> Self {
        let name = PersonName::new(first, last);
        let display_name = name.display();
        Self::with_name(row, Some(name), display_name, Vec::new())
    }

    /// Record from a combined `"Last, First"` column.
    pub fn from_full_name(row: usize, full_name: &str) -> Self {
        match split_name(full_name) {
            Ok((first, last)) => Self::from_parts(row, &first, &last),
            Err(_) => Self::with_name(
                row,
                None,
                full_name.trim().to_string(),
                vec![format!("malformed name '{}'", full_name.trim())],
            ),
        }
    }

    fn with_name(
        row: usize,
        name: Option<PersonName>,
        display_name: String,
        anomalies: Vec<String>,
    ) -> Self {
        Self {
            row,
            name,
            display_name,
            member_id: String::new(),
            date_of_birth: MISSING_DATE,
            hire_date: MISSING_DATE,
            termination_date: MISSING_DATE,
            anomalies,
        }
    }

    pub fn with_dates(mut self, date_of_birth: i64, hire_date: i64, termination_date: i64) -> Self {
        self.date_of_birth = date_of_birth;
        self.hire_date = hire_date;
        self.termination_date = termination_date;
        self
    }

    pub fn with_member_id(mut self, member_id: &str) -> Self {
        self.member_id = member_id.trim().to_string();
        self
    }

    pub fn identity_key(&self) -> Option<MatchKey> {
        self.name
            .as_ref()
            .map(|n| MatchKey::identity(n, self.date_of_birth))
    }
}

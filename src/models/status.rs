/// ADP `ENROLLMENT STATUS`. Anything other than the two known literals is kept
/// verbatim so that classification can flag it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentStatus {
    Active,
    Inactive,
    Other(String),
}

impl EnrollmentStatus {
    pub fn from_adp_str(s: &str) -> Self {
        match s.trim() {
            "Active" => EnrollmentStatus::Active,
            "Inactive" => EnrollmentStatus::Inactive,
            other => EnrollmentStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EnrollmentStatus::Active => "Active",
            EnrollmentStatus::Inactive => "Inactive",
            EnrollmentStatus::Other(s) => s,
        }
    }
}

/// ADP `EMPLOYEE STATUS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeStatus {
    Active,
    Terminated,
    Leave,
    Other(String),
}

impl EmployeeStatus {
    pub fn from_adp_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => EmployeeStatus::Active,
            "terminated" => EmployeeStatus::Terminated,
            "leave" => EmployeeStatus::Leave,
            _ => EmployeeStatus::Other(s.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Terminated => "Terminated",
            EmployeeStatus::Leave => "Leave",
            EmployeeStatus::Other(s) => s,
        }
    }
}

/// Relationship code on a billing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relationship {
    Employee,
    Spouse,
    Child,
    Other(String),
}

impl Relationship {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "EE" | "EMPLOYEE" => Relationship::Employee,
            "SP" | "SPOUSE" => Relationship::Spouse,
            "CH" | "CHILD" => Relationship::Child,
            _ => Relationship::Other(code.trim().to_string()),
        }
    }

    /// Comment prefix for family members; the employee line has none.
    pub fn comment_prefix(&self) -> Option<&'static str> {
        match self {
            Relationship::Spouse => Some("Spouse"),
            Relationship::Child => Some("Child"),
            Relationship::Employee | Relationship::Other(_) => None,
        }
    }
}

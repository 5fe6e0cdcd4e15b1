use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PlanType {
    Dental,
    EmployeeLife,
    Medical,
    Vision,
}

impl PlanType {
    pub const ALL: [PlanType; 4] = [
        PlanType::Dental,
        PlanType::EmployeeLife,
        PlanType::Medical,
        PlanType::Vision,
    ];

    /// Label as written in the ADP `PLAN TYPE` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Dental => "Dental",
            PlanType::EmployeeLife => "Employee Life",
            PlanType::Medical => "Medical",
            PlanType::Vision => "Vision",
        }
    }

    /// Tag used in report file names.
    pub fn file_tag(&self) -> &'static str {
        match self {
            PlanType::Dental => "Dental",
            PlanType::EmployeeLife => "EmployeeLife",
            PlanType::Medical => "Medical",
            PlanType::Vision => "Vision",
        }
    }

    /// Parse an ADP plan label (case-insensitive). Unknown plans give `None`.
    pub fn from_adp_str(s: &str) -> Option<Self> {
        let s = s.trim();
        PlanType::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use crate::models::{PlanType, Relationship};

/// One line of the SSN-keyed billing extract.
#[derive(Debug, Clone, PartialEq)]
pub struct BillingRecord {
    pub row: usize,
    /// Normalized customer number.
    pub customer_number: String,
    pub name: String,
    pub relationship: Relationship,
    pub dental: f64,
    pub medical: f64,
    pub vision: f64,
}

impl BillingRecord {
    pub fn new(row: usize, customer_number: &str, name: &str, relationship: Relationship) -> Self {
        Self {
            row,
            customer_number: customer_number.to_string(),
            name: name.trim().to_string(),
            relationship,
            dental: 0.0,
            medical: 0.0,
            vision: 0.0,
        }
    }

    pub fn with_amounts(mut self, dental: f64, medical: f64, vision: f64) -> Self {
        self.dental = dental;
        self.medical = medical;
        self.vision = vision;
        self
    }

    /// Billed amount for `plan`. Life coverage is never billed on this extract.
    pub fn amount_for(&self, plan: PlanType) -> f64 {
        match plan {
            PlanType::Dental => self.dental,
            PlanType::Medical => self.medical,
            PlanType::Vision => self.vision,
            PlanType::EmployeeLife => 0.0,
        }
    }
}

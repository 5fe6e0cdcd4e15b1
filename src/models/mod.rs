pub mod billing;
pub mod insurance;
pub mod match_key;
pub mod payroll;
pub mod plan_type;
pub mod provider;
pub mod status;
pub mod status_label;

pub use billing::BillingRecord;
pub use insurance::InsuranceRecord;
pub use match_key::{MatchKey, PersonName};
pub use payroll::PayrollRecord;
pub use plan_type::PlanType;
pub use provider::{Direction, ProviderFormat};
pub use status::{EmployeeStatus, EnrollmentStatus, Relationship};
pub use status_label::StatusLabel;

//! Fixed, format-specific sheet anchors and column names.

use crate::sheet::{SheetLayout, SheetSelector};

// ---------------------------
// ADP
// ---------------------------
pub const ADP_DEFAULT_SHEET: &str = "Employee Enrollments";
pub const ADP_NAME: &str = "NAME";
pub const ADP_COMPANY_CODE: &str = "COMPANY CODE";
pub const ADP_SSN: &str = "SSN";
pub const ADP_DATE_OF_BIRTH: &str = "DATE OF BIRTH";
pub const ADP_HIRE_DATE: &str = "HIRE DATE";
pub const ADP_TERMINATION_DATE: &str = "TERMINATION DATE";
pub const ADP_PLAN_TYPE: &str = "PLAN TYPE";
pub const ADP_ENROLLMENT_STATUS: &str = "ENROLLMENT STATUS";
pub const ADP_EMPLOYEE_STATUS: &str = "EMPLOYEE STATUS";

// ---------------------------
// Provider extracts
// ---------------------------
pub const FIRST_NAME: &str = "First Name";
pub const LAST_NAME: &str = "Last Name";
pub const DATE_OF_BIRTH: &str = "Date of Birth";
pub const DATE_OF_HIRE: &str = "Date of Hire";
pub const TERMINATION_DATE: &str = "Termination Date";

pub const CUSTOMER_NUMBER: &str = "Customer Number";
pub const CIGNA_FULL_NAME: &str = "full name";

pub const BILLING_NAME: &str = "Name";
pub const BILLING_RELATIONSHIP: &str = "Relationship";
pub const BILLING_DENTAL: &str = "Dental";
pub const BILLING_MEDICAL: &str = "Medical";
pub const BILLING_VISION: &str = "Vision";

pub const ID_FILE_SSN: &str = "SSN";

pub fn adp_layout(sheet_name: &str) -> SheetLayout {
    SheetLayout::new(SheetSelector::Name(sheet_name.to_string()), 0, ADP_NAME)
}

pub fn bfs_layout() -> SheetLayout {
    SheetLayout::new(SheetSelector::Index(0), 0, FIRST_NAME)
}

pub fn bss_layout() -> SheetLayout {
    SheetLayout::new(SheetSelector::Index(0), 0, LAST_NAME)
}

pub fn cigna_life_layout() -> SheetLayout {
    SheetLayout::new(SheetSelector::Index(0), 0, CUSTOMER_NUMBER)
}

pub fn cigna_billing_layout() -> SheetLayout {
    SheetLayout::new(SheetSelector::Index(0), 0, CUSTOMER_NUMBER)
}

pub fn cigna_id_layout() -> SheetLayout {
    SheetLayout::new(SheetSelector::Index(0), 0, CUSTOMER_NUMBER)
}

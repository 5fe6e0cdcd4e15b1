//! Turn loaded tables into typed records.
//!
//! Required columns are checked up front (a missing one aborts the report);
//! bad values inside a row never do: they become sentinels plus an anomaly note.

use crate::core::layouts::*;
use crate::errors::AppResult;
use crate::models::{
    BillingRecord, EmployeeStatus, EnrollmentStatus, InsuranceRecord, PayrollRecord, PlanType,
    Relationship,
};
use crate::sheet::{Cell, Table};
use crate::utils::date::serial_date_or_missing;
use crate::utils::id::normalize_id;
use std::collections::HashMap;

/// ADP rows for `plan`, in source order. Rows for other plans are skipped.
pub fn payroll_records(
    table: &Table,
    plan: PlanType,
    date_format: &str,
) -> AppResult<Vec<PayrollRecord>> {
    let name = table.column(ADP_NAME)?;
    let dob = table.column(ADP_DATE_OF_BIRTH)?;
    let hire = table.column(ADP_HIRE_DATE)?;
    let term = table.column(ADP_TERMINATION_DATE)?;
    let plan_col = table.column(ADP_PLAN_TYPE)?;
    let enrollment = table.column(ADP_ENROLLMENT_STATUS)?;
    let company = table.find_column(ADP_COMPANY_CODE);
    let employee = table.find_column(ADP_EMPLOYEE_STATUS);
    let ssn = table.find_column(ADP_SSN);

    let mut out = Vec::new();

    for row in 0..table.len() {
        if PlanType::from_adp_str(&table.cell(row, plan_col).as_text()) != Some(plan) {
            continue;
        }

        let status = EnrollmentStatus::from_adp_str(&table.cell(row, enrollment).as_text());
        let mut record = PayrollRecord::new(row, &table.cell(row, name).as_text(), plan, status);

        record.date_of_birth = serial_date_or_missing(
            table.cell(row, dob),
            date_format,
            ADP_DATE_OF_BIRTH,
            &mut record.anomalies,
        );
        record.hire_date = serial_date_or_missing(
            table.cell(row, hire),
            date_format,
            ADP_HIRE_DATE,
            &mut record.anomalies,
        );
        record.termination_date = serial_date_or_missing(
            table.cell(row, term),
            date_format,
            ADP_TERMINATION_DATE,
            &mut record.anomalies,
        );

        if let Some(c) = company {
            record.company_code = table.cell(row, c).as_text();
        }
        if let Some(c) = employee {
            record.employee_status = EmployeeStatus::from_adp_str(&table.cell(row, c).as_text());
        }
        if let Some(c) = ssn {
            record.ssn = normalize_id(table.cell(row, c));
        }

        out.push(record);
    }

    Ok(out)
}

/// Where a provider extract keeps its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameColumns {
    /// Separate first/last columns.
    Split,
    /// One `"Last, First"` column plus the customer number.
    Combined,
}

/// Provider enrollment rows, in source order.
pub fn insurance_records(
    table: &Table,
    names: NameColumns,
    date_format: &str,
) -> AppResult<Vec<InsuranceRecord>> {
    let dob = table.column(DATE_OF_BIRTH)?;
    let hire = table.column(DATE_OF_HIRE)?;
    let term = table.column(TERMINATION_DATE)?;

    let name_cols = match names {
        NameColumns::Split => (table.column(FIRST_NAME)?, table.column(LAST_NAME)?),
        NameColumns::Combined => (table.column(CIGNA_FULL_NAME)?, table.column(CUSTOMER_NUMBER)?),
    };

    let mut out = Vec::with_capacity(table.len());

    for row in 0..table.len() {
        let mut record = match names {
            NameColumns::Split => InsuranceRecord::from_parts(
                row,
                &table.cell(row, name_cols.0).as_text(),
                &table.cell(row, name_cols.1).as_text(),
            ),
            NameColumns::Combined => {
                InsuranceRecord::from_full_name(row, &table.cell(row, name_cols.0).as_text())
                    .with_member_id(&table.cell(row, name_cols.1).as_text())
            }
        };

        record.date_of_birth = serial_date_or_missing(
            table.cell(row, dob),
            date_format,
            DATE_OF_BIRTH,
            &mut record.anomalies,
        );
        record.hire_date = serial_date_or_missing(
            table.cell(row, hire),
            date_format,
            DATE_OF_HIRE,
            &mut record.anomalies,
        );
        record.termination_date = serial_date_or_missing(
            table.cell(row, term),
            date_format,
            TERMINATION_DATE,
            &mut record.anomalies,
        );

        out.push(record);
    }

    Ok(out)
}

/// Billing lines, in source order.
pub fn billing_records(table: &Table) -> AppResult<Vec<BillingRecord>> {
    let customer = table.column(CUSTOMER_NUMBER)?;
    let name = table.column(BILLING_NAME)?;
    let relationship = table.column(BILLING_RELATIONSHIP)?;
    let dental = table.column(BILLING_DENTAL)?;
    let medical = table.column(BILLING_MEDICAL)?;
    let vision = table.column(BILLING_VISION)?;

    Ok((0..table.len())
        .map(|row| {
            BillingRecord::new(
                row,
                &normalize_id(table.cell(row, customer)),
                &table.cell(row, name).as_text(),
                Relationship::from_code(&table.cell(row, relationship).as_text()),
            )
            .with_amounts(
                parse_amount(table.cell(row, dental)),
                parse_amount(table.cell(row, medical)),
                parse_amount(table.cell(row, vision)),
            )
        })
        .collect())
}

/// Customer number → SSN, both normalized. Later rows win on repeats.
pub fn id_map(table: &Table) -> AppResult<HashMap<String, String>> {
    let customer = table.column(CUSTOMER_NUMBER)?;
    let ssn = table.column(ID_FILE_SSN)?;

    Ok((0..table.len())
        .filter_map(|row| {
            let key = normalize_id(table.cell(row, customer));
            let value = normalize_id(table.cell(row, ssn));
            (!key.is_empty() && !value.is_empty()).then_some((key, value))
        })
        .collect())
}

/// Dollar amount from a number or a string such as `$1,234.50`.
/// Anything unreadable counts as zero.
pub fn parse_amount(cell: &Cell) -> f64 {
    match cell {
        Cell::Number(n) => *n,
        Cell::Empty => 0.0,
        Cell::Text(s) => {
            let cleaned: String = s
                .trim()
                .chars()
                .filter(|c| !matches!(c, '$' | ',' | ' '))
                .collect();
            cleaned.parse::<f64>().unwrap_or(0.0)
        }
    }
}

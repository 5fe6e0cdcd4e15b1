//! One matching strategy per provider format.
//!
//! Strategies differ in how their extract is laid out, which side drives the
//! reconciliation and which plan types they cover; the identity/date helpers
//! and the classification scan are shared.

use crate::core::billing::reconcile_billing;
use crate::core::extract::{NameColumns, billing_records, id_map, insurance_records};
use crate::core::layouts::{
    BILLING_DENTAL, BILLING_MEDICAL, BILLING_NAME, BILLING_RELATIONSHIP, BILLING_VISION,
    CIGNA_FULL_NAME, CUSTOMER_NUMBER, DATE_OF_BIRTH, DATE_OF_HIRE, FIRST_NAME, LAST_NAME,
    TERMINATION_DATE, bfs_layout, bss_layout, cigna_billing_layout, cigna_id_layout,
    cigna_life_layout,
};
use crate::core::reconcile::{InsuranceSheet, reconcile_insurance_driven, reconcile_payroll_driven};
use crate::errors::{AppError, AppResult};
use crate::export::ReportRow;
use crate::models::{Direction, PayrollRecord, PlanType, ProviderFormat};
use crate::sheet::{SheetLayout, load_table};
use crate::ui::messages::info;
use std::path::{Path, PathBuf};

/// Everything a strategy needs once the ADP side is loaded.
#[derive(Debug, Clone, Copy)]
pub struct StrategyInput<'a> {
    /// ADP records already restricted to `plan`.
    pub payroll: &'a [PayrollRecord],
    pub insurance_files: &'a [PathBuf],
    pub id_file: Option<&'a Path>,
    pub plan: PlanType,
    pub date_format: &'a str,
}

pub trait MatchingStrategy: Send + Sync {
    fn format(&self) -> ProviderFormat;

    fn direction(&self) -> Direction;

    fn supported_plans(&self) -> &'static [PlanType];

    fn supports(&self, plan: PlanType) -> bool {
        self.supported_plans().contains(&plan)
    }

    /// How many provider extracts one report may combine.
    fn max_insurance_files(&self) -> usize {
        1
    }

    /// Whether the ADP export must carry an `SSN` column.
    fn requires_payroll_ssn(&self) -> bool {
        false
    }

    /// Human description of the join key.
    fn match_key(&self) -> &'static str {
        "first name + last name + date of birth"
    }

    /// Columns the provider extract must have.
    fn required_columns(&self) -> &'static [&'static str];

    fn reconcile(&self, input: &StrategyInput<'_>) -> AppResult<Vec<ReportRow>>;
}

pub fn strategy_for(format: ProviderFormat) -> Box<dyn MatchingStrategy> {
    match format {
        ProviderFormat::Bfs => Box::new(BfsStrategy),
        ProviderFormat::Bss => Box::new(BssStrategy),
        ProviderFormat::CignaLife => Box::new(CignaLifeStrategy),
        ProviderFormat::Cigna => Box::new(CignaBillingStrategy),
    }
}

/// Fail with `UnsupportedCombination` unless `strategy` covers `plan`.
pub fn ensure_supported(strategy: &dyn MatchingStrategy, plan: PlanType) -> AppResult<()> {
    if strategy.supports(plan) {
        Ok(())
    } else {
        Err(AppError::UnsupportedCombination {
            provider: strategy.format().to_string(),
            plan: plan.to_string(),
        })
    }
}

const SPLIT_NAME_COLUMNS: &[&str] = &[
    FIRST_NAME,
    LAST_NAME,
    DATE_OF_BIRTH,
    DATE_OF_HIRE,
    TERMINATION_DATE,
];

fn load_sheet(
    path: &Path,
    layout: &SheetLayout,
    names: NameColumns,
    label: &str,
    date_format: &str,
) -> AppResult<InsuranceSheet> {
    let table = load_table(path, layout)?;
    let records = insurance_records(&table, names, date_format)?;
    info(format!(
        "{} provider rows loaded from {}",
        records.len(),
        path.display()
    ));
    Ok(InsuranceSheet::new(label, records))
}

fn single_file<'a>(input: &StrategyInput<'a>) -> AppResult<&'a Path> {
    input
        .insurance_files
        .first()
        .map(PathBuf::as_path)
        .ok_or_else(|| AppError::InvalidRequest(vec!["No insurance file selected.".to_string()]))
}

// ---------------------------
// BFS
// ---------------------------
pub struct BfsStrategy;

impl MatchingStrategy for BfsStrategy {
    fn format(&self) -> ProviderFormat {
        ProviderFormat::Bfs
    }

    fn direction(&self) -> Direction {
        Direction::PayrollDriven
    }

    fn supported_plans(&self) -> &'static [PlanType] {
        &[PlanType::Dental, PlanType::EmployeeLife, PlanType::Vision]
    }

    fn max_insurance_files(&self) -> usize {
        usize::MAX
    }

    fn required_columns(&self) -> &'static [&'static str] {
        SPLIT_NAME_COLUMNS
    }

    fn reconcile(&self, input: &StrategyInput<'_>) -> AppResult<Vec<ReportRow>> {
        let multi = input.insurance_files.len() > 1;
        let sheets = input
            .insurance_files
            .iter()
            .map(|path| {
                // several extracts are told apart by file name in the comments
                let label = if multi {
                    path.file_stem()
                        .map(|s| s.to_string_lossy().to_string())
                        .unwrap_or_else(|| self.format().to_string())
                } else {
                    self.format().to_string()
                };
                load_sheet(
                    path,
                    &bfs_layout(),
                    NameColumns::Split,
                    &label,
                    input.date_format,
                )
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(reconcile_payroll_driven(input.payroll, &sheets, input.plan))
    }
}

// ---------------------------
// BSS
// ---------------------------
pub struct BssStrategy;

impl MatchingStrategy for BssStrategy {
    fn format(&self) -> ProviderFormat {
        ProviderFormat::Bss
    }

    fn direction(&self) -> Direction {
        Direction::InsuranceDriven
    }

    fn supported_plans(&self) -> &'static [PlanType] {
        &[PlanType::EmployeeLife]
    }

    fn required_columns(&self) -> &'static [&'static str] {
        SPLIT_NAME_COLUMNS
    }

    fn reconcile(&self, input: &StrategyInput<'_>) -> AppResult<Vec<ReportRow>> {
        let sheet = load_sheet(
            single_file(input)?,
            &bss_layout(),
            NameColumns::Split,
            self.format().as_str(),
            input.date_format,
        )?;
        Ok(reconcile_insurance_driven(input.payroll, &sheet, input.plan))
    }
}

// ---------------------------
// Cigna life (name-keyed)
// ---------------------------
pub struct CignaLifeStrategy;

impl MatchingStrategy for CignaLifeStrategy {
    fn format(&self) -> ProviderFormat {
        ProviderFormat::CignaLife
    }

    fn direction(&self) -> Direction {
        Direction::InsuranceDriven
    }

    fn supported_plans(&self) -> &'static [PlanType] {
        &[PlanType::EmployeeLife]
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &[
            CUSTOMER_NUMBER,
            CIGNA_FULL_NAME,
            DATE_OF_BIRTH,
            DATE_OF_HIRE,
            TERMINATION_DATE,
        ]
    }

    fn reconcile(&self, input: &StrategyInput<'_>) -> AppResult<Vec<ReportRow>> {
        let sheet = load_sheet(
            single_file(input)?,
            &cigna_life_layout(),
            NameColumns::Combined,
            self.format().as_str(),
            input.date_format,
        )?;
        Ok(reconcile_insurance_driven(input.payroll, &sheet, input.plan))
    }
}

// ---------------------------
// Cigna billing (SSN-keyed)
// ---------------------------
pub struct CignaBillingStrategy;

impl MatchingStrategy for CignaBillingStrategy {
    fn format(&self) -> ProviderFormat {
        ProviderFormat::Cigna
    }

    fn direction(&self) -> Direction {
        Direction::InsuranceDriven
    }

    fn supported_plans(&self) -> &'static [PlanType] {
        &[PlanType::Dental, PlanType::Medical, PlanType::Vision]
    }

    fn requires_payroll_ssn(&self) -> bool {
        true
    }

    fn match_key(&self) -> &'static str {
        "SSN (customer number resolved through the ID file)"
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &[
            CUSTOMER_NUMBER,
            BILLING_NAME,
            BILLING_RELATIONSHIP,
            BILLING_DENTAL,
            BILLING_MEDICAL,
            BILLING_VISION,
        ]
    }

    fn reconcile(&self, input: &StrategyInput<'_>) -> AppResult<Vec<ReportRow>> {
        let billing_path = single_file(input)?;
        let id_path = input.id_file.ok_or_else(|| {
            AppError::InvalidRequest(vec![format!("ID file is required for {}.", self.format())])
        })?;

        let billing = billing_records(&load_table(billing_path, &cigna_billing_layout())?)?;
        info(format!(
            "{} billing rows loaded from {}",
            billing.len(),
            billing_path.display()
        ));

        let ids = id_map(&load_table(id_path, &cigna_id_layout())?)?;
        info(format!(
            "{} customer numbers loaded from {}",
            ids.len(),
            id_path.display()
        ));

        Ok(reconcile_billing(
            input.payroll,
            &billing,
            &ids,
            input.plan,
            self.format().as_str(),
        ))
    }
}

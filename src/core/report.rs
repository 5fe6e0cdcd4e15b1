//! Report generation: validate a request, load the ADP side, run the
//! provider strategy and write the workbook.

use crate::config::Config;
use crate::core::extract::payroll_records;
use crate::core::layouts::{ADP_SSN, adp_layout};
use crate::core::strategy::{MatchingStrategy, StrategyInput, ensure_supported, strategy_for};
use crate::errors::{AppError, AppResult};
use crate::export::{ReportRow, WriteOptions, write_report};
use crate::models::{PlanType, ProviderFormat};
use crate::sheet::load_table;
use crate::ui::messages::{header, info, warning};
use crate::utils::path::is_workbook;
use chrono::Local;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One report to produce. Unset options fall back to the configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportRequest {
    pub provider: ProviderFormat,
    pub plan: PlanType,
    pub adp: PathBuf,
    #[serde(default)]
    pub insurance: Vec<PathBuf>,
    #[serde(default)]
    pub id_file: Option<PathBuf>,
    #[serde(default, alias = "output")]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub overwrite: Option<bool>,
    #[serde(default)]
    pub csv: bool,
}

impl ReportRequest {
    pub fn new(provider: ProviderFormat, plan: PlanType, adp: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            plan,
            adp: adp.into(),
            insurance: Vec::new(),
            id_file: None,
            output_dir: None,
            overwrite: None,
            csv: false,
        }
    }

    pub fn with_insurance(mut self, path: impl Into<PathBuf>) -> Self {
        self.insurance.push(path.into());
        self
    }

    pub fn with_id_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.id_file = Some(path.into());
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    pub fn with_csv(mut self, csv: bool) -> Self {
        self.csv = csv;
        self
    }

    pub fn resolved_output_dir(&self, cfg: &Config) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| cfg.output_dir())
    }
}

fn check_workbook(problems: &mut Vec<String>, label: &str, path: &Path) {
    if !path.is_file() {
        problems.push(format!("{label} not found: {}", path.display()));
    } else if !is_workbook(path) {
        problems.push(format!(
            "{label} is not an .xlsx/.xls workbook: {}",
            path.display()
        ));
    }
}

/// Every problem with `request`, in a stable order. Empty means runnable.
pub fn validate_request(
    request: &ReportRequest,
    strategy: &dyn MatchingStrategy,
    output_dir: &Path,
) -> Vec<String> {
    let mut problems = Vec::new();

    check_workbook(&mut problems, "ADP file", &request.adp);

    if request.insurance.is_empty() {
        problems.push("No insurance file selected.".to_string());
    } else if request.insurance.len() > strategy.max_insurance_files() {
        problems.push(format!(
            "{} accepts only {} insurance file(s), got {}.",
            strategy.format(),
            strategy.max_insurance_files(),
            request.insurance.len()
        ));
    }
    for path in &request.insurance {
        check_workbook(&mut problems, "Insurance file", path);
    }

    if strategy.format().needs_id_file() {
        match &request.id_file {
            Some(path) => check_workbook(&mut problems, "ID file", path),
            None => problems.push(format!("ID file is required for {}.", strategy.format())),
        }
    }

    if output_dir.exists() && !output_dir.is_dir() {
        problems.push(format!(
            "Output path is not a directory: {}",
            output_dir.display()
        ));
    }

    problems
}

/// Load both sides and run the reconciliation. Nothing is written.
pub fn build_report_rows(request: &ReportRequest, cfg: &Config) -> AppResult<Vec<ReportRow>> {
    let strategy = strategy_for(request.provider);
    ensure_supported(strategy.as_ref(), request.plan)?;

    let adp_table = load_table(&request.adp, &adp_layout(&cfg.adp_sheet))?;
    if strategy.requires_payroll_ssn() {
        adp_table.column(ADP_SSN)?;
    }

    let payroll = payroll_records(&adp_table, request.plan, &cfg.date_format)?;
    info(format!(
        "{} ADP {} enrollments loaded from {}",
        payroll.len(),
        request.plan,
        request.adp.display()
    ));

    let input = StrategyInput {
        payroll: &payroll,
        insurance_files: &request.insurance,
        id_file: request.id_file.as_deref(),
        plan: request.plan,
        date_format: &cfg.date_format,
    };
    strategy.reconcile(&input)
}

/// Validate, reconcile and write one report. Returns the xlsx path.
pub fn generate_report(request: &ReportRequest, cfg: &Config) -> AppResult<PathBuf> {
    let strategy = strategy_for(request.provider);
    ensure_supported(strategy.as_ref(), request.plan)?;

    let output_dir = request.resolved_output_dir(cfg);
    let problems = validate_request(request, strategy.as_ref(), &output_dir);
    if !problems.is_empty() {
        return Err(AppError::InvalidRequest(problems));
    }

    header(format!(
        "{} / {} ({})",
        request.provider,
        request.plan,
        strategy.direction().as_str()
    ));

    let rows = build_report_rows(request, cfg)?;
    summarize(&rows);

    let opts = WriteOptions {
        output_dir,
        provider: request.provider,
        plan: request.plan,
        timestamp: Local::now().naive_local(),
        overwrite: request.overwrite.unwrap_or(cfg.overwrite),
        backup_existing: cfg.backup_existing,
        csv_mirror: cfg!(debug_assertions) || cfg.csv_mirror || request.csv,
    };
    write_report(&rows, &opts)
}

fn summarize(rows: &[ReportRow]) {
    let records = rows.iter().filter(|r| !r.is_separator()).count();
    let good = rows.iter().filter(|r| r.is_good()).count();

    info(format!("{records} report rows, {good} good matches"));
    if records > good {
        warning(format!("{} rows need review", records - good));
    }
}

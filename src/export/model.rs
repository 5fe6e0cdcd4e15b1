// src/export/model.rs

use crate::models::{InsuranceRecord, PayrollRecord, PlanType, StatusLabel};
use crate::utils::date::serial_to_iso;
use serde::Serialize;

/// Source tag for rows echoed from the ADP side.
pub const ADP_SOURCE: &str = "ADP";

/// One line of the status report.
///
/// A row with every field empty is the separator placed before leftover rows.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ReportRow {
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "DATE OF BIRTH")]
    pub date_of_birth: String,
    #[serde(rename = "HIRE DATE")]
    pub hire_date: String,
    #[serde(rename = "TERMINATION DATE")]
    pub termination_date: String,
    #[serde(rename = "PLAN TYPE")]
    pub plan_type: String,
    #[serde(rename = "SOURCE")]
    pub source: String,
    #[serde(rename = "Comments")]
    pub comment: String,
    /// Labels behind `comment`, one per extract consulted. Not written out.
    #[serde(skip)]
    pub labels: Vec<StatusLabel>,
}

impl ReportRow {
    pub fn separator() -> Self {
        Self::default()
    }

    pub fn is_separator(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_labels(mut self, labels: Vec<StatusLabel>) -> Self {
        self.labels = labels;
        self
    }

    /// Every label behind the row is a good match.
    pub fn is_good(&self) -> bool {
        !self.labels.is_empty() && self.labels.iter().all(StatusLabel::is_good)
    }

    /// Row echoing an ADP record.
    pub fn from_payroll(record: &PayrollRecord, comment: String) -> Self {
        Self {
            name: record.full_name.clone(),
            id: record.ssn.clone(),
            date_of_birth: iso_or_blank(record.date_of_birth),
            hire_date: iso_or_blank(record.hire_date),
            termination_date: iso_or_blank(record.termination_date),
            plan_type: record.plan_type.as_str().to_string(),
            source: ADP_SOURCE.to_string(),
            comment,
            labels: Vec::new(),
        }
    }

    /// Row echoing a provider record.
    pub fn from_insurance(
        record: &InsuranceRecord,
        plan: PlanType,
        source: &str,
        comment: String,
    ) -> Self {
        Self {
            name: record.display_name.clone(),
            id: record.member_id.clone(),
            date_of_birth: iso_or_blank(record.date_of_birth),
            hire_date: iso_or_blank(record.hire_date),
            termination_date: iso_or_blank(record.termination_date),
            plan_type: plan.as_str().to_string(),
            source: source.to_string(),
            comment,
            labels: Vec::new(),
        }
    }
}

fn iso_or_blank(serial: i64) -> String {
    serial_to_iso(serial).unwrap_or_default()
}

/// Render a label plus any per-record anomalies, e.g.
/// `Mismatching Start Date (invalid HIRE DATE '13/45/2020')`.
pub fn comment_with_anomalies(label: &StatusLabel, anomalies: &[String]) -> String {
    append_anomalies(label.to_string(), anomalies)
}

pub fn append_anomalies(comment: String, anomalies: &[String]) -> String {
    if anomalies.is_empty() {
        comment
    } else {
        format!("{comment} ({})", anomalies.join("; "))
    }
}

/// Column kinds, so the xlsx writer knows which cells are dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnKind {
    Text,
    Date,
}

/// Header per CSV / XLSX
pub(crate) fn get_headers() -> Vec<(&'static str, ColumnKind)> {
    vec![
        ("NAME", ColumnKind::Text),
        ("ID", ColumnKind::Text),
        ("DATE OF BIRTH", ColumnKind::Date),
        ("HIRE DATE", ColumnKind::Date),
        ("TERMINATION DATE", ColumnKind::Date),
        ("PLAN TYPE", ColumnKind::Text),
        ("SOURCE", ColumnKind::Text),
        ("Comments", ColumnKind::Text),
    ]
}

/// Row values in header order.
pub(crate) fn report_row_values(r: &ReportRow) -> Vec<&str> {
    vec![
        r.name.as_str(),
        r.id.as_str(),
        r.date_of_birth.as_str(),
        r.hire_date.as_str(),
        r.termination_date.as_str(),
        r.plan_type.as_str(),
        r.source.as_str(),
        r.comment.as_str(),
    ]
}

//! Name + date-of-birth reconciliation in both directions.
//!
//! The driving side is enumerated first; every counterpart that shares a key
//! with a driving record is marked, and whatever stays unmarked is appended
//! at the end so one pass reports both "only in ADP" and "only in provider".

use crate::core::classify::{classify_insurance, classify_payroll};
use crate::export::{ReportRow, append_anomalies, comment_with_anomalies};
use crate::models::{InsuranceRecord, MatchKey, PayrollRecord, PlanType, StatusLabel};
use std::collections::HashMap;

/// Provider records from one extract, with the label used in multi-extract comments.
#[derive(Debug, Clone)]
pub struct InsuranceSheet {
    pub label: String,
    pub records: Vec<InsuranceRecord>,
}

impl InsuranceSheet {
    pub fn new(label: impl Into<String>, records: Vec<InsuranceRecord>) -> Self {
        Self {
            label: label.into(),
            records,
        }
    }
}

/// Key → row positions, in input order (the tie-break authority).
pub(crate) fn index_by<T>(
    records: &[T],
    key: impl Fn(&T) -> Option<MatchKey>,
) -> HashMap<MatchKey, Vec<usize>> {
    let mut index: HashMap<MatchKey, Vec<usize>> = HashMap::new();
    for (pos, record) in records.iter().enumerate() {
        if let Some(k) = key(record) {
            index.entry(k).or_default().push(pos);
        }
    }
    index
}

/// ADP-driven pass over one or more provider extracts.
///
/// With a single extract the comment is the bare label. With several, it lists
/// `label: status` for each extract where the key was found, and
/// `ExistOnlyInPayroll` when it was found in none.
pub fn reconcile_payroll_driven(
    payroll: &[PayrollRecord],
    sheets: &[InsuranceSheet],
    plan: PlanType,
) -> Vec<ReportRow> {
    let multi = sheets.len() > 1;
    let indexes: Vec<_> = sheets
        .iter()
        .map(|s| index_by(&s.records, InsuranceRecord::identity_key))
        .collect();
    let mut matched: Vec<Vec<bool>> = sheets
        .iter()
        .map(|s| vec![false; s.records.len()])
        .collect();

    let mut rows = Vec::with_capacity(payroll.len());

    for record in payroll {
        let Some(key) = record.identity_key() else {
            let label = StatusLabel::NeedsAttention("cannot split ADP name".to_string());
            let comment = comment_with_anomalies(&label, &record.anomalies);
            rows.push(ReportRow::from_payroll(record, comment).with_labels(vec![label]));
            continue;
        };

        let mut parts: Vec<String> = Vec::new();
        let mut labels: Vec<StatusLabel> = Vec::new();

        for (i, sheet) in sheets.iter().enumerate() {
            let Some(positions) = indexes[i].get(&key) else {
                continue;
            };
            for &pos in positions {
                matched[i][pos] = true;
            }

            let candidates: Vec<&InsuranceRecord> =
                positions.iter().map(|&pos| &sheet.records[pos]).collect();
            let label = classify_payroll(record, &candidates);

            if multi {
                parts.push(format!("{}: {label}", sheet.label));
            } else {
                parts.push(label.to_string());
            }
            labels.push(label);
        }

        if labels.is_empty() {
            let label = StatusLabel::ExistOnlyInPayroll;
            parts.push(label.to_string());
            labels.push(label);
        }

        let comment = append_anomalies(parts.join("; "), &record.anomalies);
        rows.push(ReportRow::from_payroll(record, comment).with_labels(labels));
    }

    // provider rows nobody claimed
    for (i, sheet) in sheets.iter().enumerate() {
        for (pos, record) in sheet.records.iter().enumerate() {
            if matched[i][pos] {
                continue;
            }
            let label = StatusLabel::NeedToBeInPayroll;
            let comment = if multi {
                format!("{}: {label}", sheet.label)
            } else {
                label.to_string()
            };
            rows.push(
                ReportRow::from_insurance(
                    record,
                    plan,
                    &sheet.label,
                    append_anomalies(comment, &record.anomalies),
                )
                .with_labels(vec![label]),
            );
        }
    }

    rows
}

/// Provider-driven pass over a single extract.
///
/// ADP records never matched follow a blank separator row as `ExistOnlyInPayroll`.
pub fn reconcile_insurance_driven(
    payroll: &[PayrollRecord],
    sheet: &InsuranceSheet,
    plan: PlanType,
) -> Vec<ReportRow> {
    let index = index_by(payroll, PayrollRecord::identity_key);
    let mut matched = vec![false; payroll.len()];
    let mut rows = Vec::with_capacity(sheet.records.len());

    for record in &sheet.records {
        let label = match record.identity_key() {
            None => StatusLabel::NeedsAttention("cannot split provider name".to_string()),
            Some(key) => match index.get(&key) {
                None => StatusLabel::NeedToBeInPayroll,
                Some(positions) => {
                    for &pos in positions {
                        matched[pos] = true;
                    }
                    let candidates: Vec<&PayrollRecord> =
                        positions.iter().map(|&pos| &payroll[pos]).collect();
                    classify_insurance(record, &candidates)
                }
            },
        };

        let comment = comment_with_anomalies(&label, &record.anomalies);
        rows.push(
            ReportRow::from_insurance(record, plan, &sheet.label, comment).with_labels(vec![label]),
        );
    }

    let leftovers: Vec<&PayrollRecord> = payroll
        .iter()
        .zip(&matched)
        .filter(|(_, m)| !**m)
        .map(|(p, _)| p)
        .collect();

    if !leftovers.is_empty() {
        rows.push(ReportRow::separator());
        for record in leftovers {
            let label = StatusLabel::ExistOnlyInPayroll;
            let comment = comment_with_anomalies(&label, &record.anomalies);
            rows.push(ReportRow::from_payroll(record, comment).with_labels(vec![label]));
        }
    }

    rows
}

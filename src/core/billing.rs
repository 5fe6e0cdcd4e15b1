//! SSN-keyed reconciliation of a billing extract.
//!
//! Billing lines carry a customer number, resolved to an SSN through the ID
//! file. Each line is accepted when the plan was billed a positive amount for
//! an SSN ADP knows about; lines sharing an SSN (employee plus family) then
//! collapse into one report row with their comments joined.

use crate::core::reconcile::index_by;
use crate::export::{ReportRow, append_anomalies, comment_with_anomalies};
use crate::models::{BillingRecord, MatchKey, PayrollRecord, PlanType, Relationship, StatusLabel};
use std::collections::HashMap;

/// One collapsed output row under construction.
struct Group {
    row: ReportRow,
    from_payroll: bool,
    comments: Vec<String>,
    labels: Vec<StatusLabel>,
}

pub fn reconcile_billing(
    payroll: &[PayrollRecord],
    billing: &[BillingRecord],
    ids: &HashMap<String, String>,
    plan: PlanType,
    source: &str,
) -> Vec<ReportRow> {
    let index = index_by(payroll, PayrollRecord::ssn_key);
    let mut matched = vec![false; payroll.len()];

    let mut groups: Vec<Group> = Vec::new();
    let mut group_of: HashMap<String, usize> = HashMap::new();

    for line in billing {
        let ssn = ids.get(&line.customer_number);
        let positions = ssn
            .map(|s| MatchKey::Ssn(s.clone()))
            .and_then(|k| index.get(&k));

        if let Some(positions) = positions {
            for &pos in positions {
                matched[pos] = true;
            }
        }

        let label = match (ssn, positions, &line.relationship) {
            (None, _, _) => StatusLabel::NotExist,
            (Some(_), _, Relationship::Other(code)) => {
                StatusLabel::NeedsAttention(format!("unhandled relationship code '{code}'"))
            }
            (Some(_), None, _) => StatusLabel::NeedToBeInPayroll,
            (Some(_), Some(_), _) if line.amount_for(plan) > 0.0 => StatusLabel::GoodMatching,
            (Some(_), Some(_), _) => StatusLabel::ZeroBilledAmount,
        };

        let mut comment = match line.relationship.comment_prefix() {
            Some(prefix) => format!("{prefix}: {label}"),
            None => label.to_string(),
        };
        if ssn.is_none() {
            comment = append_anomalies(
                comment,
                &[format!("customer number '{}' not in ID file", line.customer_number)],
            );
        }

        // unresolved lines collapse per customer number instead of per SSN
        let group_key = match ssn {
            Some(s) => s.clone(),
            None => format!("#{}", line.customer_number),
        };

        let slot = *group_of.entry(group_key).or_insert_with(|| {
            let first_payroll = positions.and_then(|p| p.first()).map(|&pos| &payroll[pos]);
            let group = match first_payroll {
                Some(record) => Group {
                    row: ReportRow::from_payroll(record, String::new()),
                    from_payroll: true,
                    comments: Vec::new(),
                    labels: Vec::new(),
                },
                None => Group {
                    row: billing_row(line, ssn.map(String::as_str), plan, source),
                    from_payroll: false,
                    comments: Vec::new(),
                    labels: Vec::new(),
                },
            };
            groups.push(group);
            groups.len() - 1
        });

        let group = &mut groups[slot];
        // prefer the employee's own name when the row could not come from ADP
        if !group.from_payroll && line.relationship == Relationship::Employee {
            group.row.name = line.name.clone();
        }
        group.comments.push(comment);
        group.labels.push(label);
    }

    let mut rows: Vec<ReportRow> = groups
        .into_iter()
        .map(|g| ReportRow {
            comment: g.comments.join("; "),
            labels: g.labels,
            ..g.row
        })
        .collect();

    let leftovers: Vec<&PayrollRecord> = payroll
        .iter()
        .zip(&matched)
        .filter(|(_, m)| !**m)
        .map(|(p, _)| p)
        .collect();

    if !leftovers.is_empty() {
        rows.push(ReportRow::separator());
        for record in leftovers {
            let mut anomalies = record.anomalies.clone();
            if record.ssn.is_empty() {
                anomalies.push("missing SSN".to_string());
            }
            let label = StatusLabel::ExistOnlyInPayroll;
            let comment = comment_with_anomalies(&label, &anomalies);
            rows.push(ReportRow::from_payroll(record, comment).with_labels(vec![label]));
        }
    }

    rows
}

fn billing_row(line: &BillingRecord, ssn: Option<&str>, plan: PlanType, source: &str) -> ReportRow {
    ReportRow {
        name: line.name.clone(),
        id: ssn.unwrap_or(&line.customer_number).to_string(),
        plan_type: plan.as_str().to_string(),
        source: source.to_string(),
        ..ReportRow::default()
    }
}

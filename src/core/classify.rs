//! Date-agreement classification with the linear duplicate tie-break.

use crate::models::{EnrollmentStatus, InsuranceRecord, PayrollRecord, StatusLabel};

/// Classify the (ADP, provider) pairs that share a match key.
///
/// Each pair is gated by the ADP record's enrollment status: Active compares
/// hire dates, Inactive compares termination dates. Pairs are scanned in
/// input order; the first agreeing pair makes the result `GoodMatching`, a
/// second one escalates to `DuplicateFound` and ends the scan. Without any
/// agreement the mismatch label of the first pair wins.
///
/// A pair whose ADP status is unknown cannot agree or disagree. Unless
/// another pair produces a match, the result is `NeedsAttention` rather than
/// a guess. An empty input yields `NotExist`; callers decide the
/// direction-specific no-match label before getting here.
pub fn classify_pairs<'a, I>(pairs: I) -> StatusLabel
where
    I: IntoIterator<Item = (&'a PayrollRecord, &'a InsuranceRecord)>,
{
    let mut found = false;
    let mut mismatch: Option<StatusLabel> = None;
    let mut attention: Option<String> = None;

    for (payroll, insurance) in pairs {
        let (agrees, on_mismatch) = match &payroll.enrollment_status {
            EnrollmentStatus::Active => (
                payroll.hire_date == insurance.hire_date,
                StatusLabel::MismatchingStartDate,
            ),
            EnrollmentStatus::Inactive => (
                payroll.termination_date == insurance.termination_date,
                StatusLabel::MismatchingEndDate,
            ),
            EnrollmentStatus::Other(raw) => {
                attention.get_or_insert_with(|| format!("unknown enrollment status '{raw}'"));
                continue;
            }
        };

        mismatch.get_or_insert(on_mismatch);

        if agrees {
            if found {
                return StatusLabel::DuplicateFound;
            }
            found = true;
        }
    }

    match (found, attention) {
        (true, _) => StatusLabel::GoodMatching,
        (false, Some(reason)) => StatusLabel::NeedsAttention(reason),
        (false, None) => mismatch.unwrap_or(StatusLabel::NotExist),
    }
}

/// Classify one ADP record against its provider candidates.
pub fn classify_payroll(record: &PayrollRecord, candidates: &[&InsuranceRecord]) -> StatusLabel {
    classify_pairs(candidates.iter().map(|c| (record, *c)))
}

/// Classify one provider record against its ADP candidates.
pub fn classify_insurance(record: &InsuranceRecord, candidates: &[&PayrollRecord]) -> StatusLabel {
    classify_pairs(candidates.iter().map(|p| (*p, record)))
}

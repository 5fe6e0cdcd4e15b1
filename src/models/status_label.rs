use std::fmt;

/// Outcome of reconciling one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLabel {
    GoodMatching,
    DuplicateFound,
    MismatchingStartDate,
    MismatchingEndDate,
    ExistOnlyInPayroll,
    NeedToBeInPayroll,
    NotExist,
    /// Billed plan with a zero or missing amount.
    ZeroBilledAmount,
    /// The record could not be classified; the reason says why.
    NeedsAttention(String),
}

impl StatusLabel {
    pub fn is_good(&self) -> bool {
        matches!(self, StatusLabel::GoodMatching)
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLabel::GoodMatching => f.write_str("Good Matching"),
            StatusLabel::DuplicateFound => f.write_str("Duplicate Found"),
            StatusLabel::MismatchingStartDate => f.write_str("Mismatching Start Date"),
            StatusLabel::MismatchingEndDate => f.write_str("Mismatching End Date"),
            StatusLabel::ExistOnlyInPayroll => f.write_str("Exist Only In ADP"),
            StatusLabel::NeedToBeInPayroll => f.write_str("Need To Be In ADP"),
            StatusLabel::NotExist => f.write_str("Not Exist"),
            StatusLabel::ZeroBilledAmount => f.write_str("Should Have Positive Billed Amount"),
            StatusLabel::NeedsAttention(reason) => write!(f, "Needs Attention: {reason}"),
        }
    }
}

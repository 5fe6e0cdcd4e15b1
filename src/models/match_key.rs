use crate::utils::id::normalize_id_str;
use crate::utils::name::join_name;

/// A split person name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

impl PersonName {
    pub fn new(first: &str, last: &str) -> Self {
        Self {
            first: first.trim().to_string(),
            last: last.trim().to_string(),
        }
    }

    /// `"Last, First"`
    pub fn display(&self) -> String {
        join_name(&self.first, &self.last)
    }
}

/// Join identity between an ADP record and its provider counterpart.
/// Equality is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchKey {
    Identity {
        first_name: String,
        last_name: String,
        date_of_birth: i64,
    },
    Ssn(String),
}

impl MatchKey {
    pub fn identity(name: &PersonName, date_of_birth: i64) -> Self {
        MatchKey::Identity {
            first_name: name.first.clone(),
            last_name: name.last.clone(),
            date_of_birth,
        }
    }

    /// `None` when `raw` holds no digits.
    pub fn ssn(raw: &str) -> Option<Self> {
        let id = normalize_id_str(raw);
        (!id.is_empty()).then_some(MatchKey::Ssn(id))
    }
}

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Insurance extract formats with a matching strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderFormat {
    /// Separate first/last name columns, reconciled from the ADP side.
    Bfs,
    /// Separate last/first name columns, reconciled from the provider side.
    Bss,
    /// Combined name plus customer number, reconciled from the provider side.
    CignaLife,
    /// SSN-keyed billing extract with per-plan billed amounts.
    Cigna,
}

impl ProviderFormat {
    pub const ALL: [ProviderFormat; 4] = [
        ProviderFormat::Bfs,
        ProviderFormat::Bss,
        ProviderFormat::CignaLife,
        ProviderFormat::Cigna,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderFormat::Bfs => "BFS",
            ProviderFormat::Bss => "BSS",
            ProviderFormat::CignaLife => "Cigna Life",
            ProviderFormat::Cigna => "Cigna",
        }
    }

    pub fn file_tag(&self) -> &'static str {
        match self {
            ProviderFormat::Bfs => "BFS",
            ProviderFormat::Bss => "BSS",
            ProviderFormat::CignaLife => "CignaLife",
            ProviderFormat::Cigna => "Cigna",
        }
    }

    /// Only the billing extract needs the customer-number → SSN workbook.
    pub fn needs_id_file(&self) -> bool {
        matches!(self, ProviderFormat::Cigna)
    }
}

impl fmt::Display for ProviderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of a reconciliation is enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// ADP rows drive; provider-only rows are appended as-is.
    PayrollDriven,
    /// Provider rows drive; ADP-only rows follow a blank separator row.
    InsuranceDriven,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::PayrollDriven => "ADP-driven",
            Direction::InsuranceDriven => "provider-driven",
        }
    }
}

pub mod batch;
pub mod billing;
pub mod classify;
pub mod extract;
pub mod layouts;
pub mod reconcile;
pub mod report;
pub mod strategy;

pub use batch::{BatchFile, run_batch};
pub use report::{ReportRequest, build_report_rows, generate_report, validate_request};
pub use strategy::{MatchingStrategy, StrategyInput, strategy_for};

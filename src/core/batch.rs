//! Batch runs: several independent report requests from one YAML job file,
//! each on its own scoped thread.

use crate::config::Config;
use crate::core::report::{ReportRequest, generate_report};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

#[derive(Debug, Clone, Deserialize)]
pub struct BatchFile {
    pub jobs: Vec<ReportRequest>,
}

impl BatchFile {
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let batch: BatchFile = serde_yaml::from_str(content)?;
        if batch.jobs.is_empty() {
            return Err(AppError::InvalidRequest(vec![
                "Batch file contains no jobs.".to_string(),
            ]));
        }
        Ok(batch)
    }

    /// Jobs that would write the same file name into the same folder.
    pub fn conflicts(&self, cfg: &Config) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut problems = Vec::new();

        for (i, job) in self.jobs.iter().enumerate() {
            let key = (job.provider, job.plan, job.resolved_output_dir(cfg));
            if !seen.insert(key) {
                problems.push(format!(
                    "Job {}: another job already writes {} / {} into {}",
                    i + 1,
                    job.provider,
                    job.plan,
                    job.resolved_output_dir(cfg).display()
                ));
            }
        }
        problems
    }
}

/// Run every job concurrently. Results keep job order.
pub fn run_batch(batch: &BatchFile, cfg: &Config) -> Vec<AppResult<PathBuf>> {
    thread::scope(|s| {
        let handles: Vec<_> = batch
            .jobs
            .iter()
            .map(|job| s.spawn(move || generate_report(job, cfg)))
            .collect();

        handles
            .into_iter()
            .map(|h| {
                h.join()
                    .unwrap_or_else(|_| Err(AppError::Other("report worker panicked".into())))
            })
            .collect()
    })
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::batch::{BatchFile, run_batch};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error_lines, header, info, success};

/// Handle the `batch` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Batch { jobs } = cmd {
        let batch = BatchFile::load(jobs)?;

        let conflicts = batch.conflicts(cfg);
        if !conflicts.is_empty() {
            return Err(AppError::InvalidRequest(conflicts));
        }

        info(format!("Running {} report jobs…", batch.jobs.len()));
        let results = run_batch(&batch, cfg);

        header("Batch results");
        let mut failures = Vec::new();
        for (i, (job, result)) in batch.jobs.iter().zip(&results).enumerate() {
            match result {
                Ok(path) => success(format!(
                    "Job {} ({} / {}): {}",
                    i + 1,
                    job.provider,
                    job.plan,
                    path.display()
                )),
                Err(e) => failures.push(format!(
                    "Job {} ({} / {}): {}",
                    i + 1,
                    job.provider,
                    job.plan,
                    e
                )),
            }
        }

        if !failures.is_empty() {
            error_lines(&failures);
            return Err(AppError::Batch {
                failed: failures.len(),
                total: results.len(),
            });
        }
    }
    Ok(())
}

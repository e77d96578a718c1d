//! Plan execution.
//!
//! The executor takes a rendered [`GenerationPlan`] and writes it to disk.

use std::path::PathBuf;

use crate::error::Result;
use crate::output::write_atomic;

use super::generate::GenerationPlan;

/// Result of executing a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Whether this was a dry-run (nothing written).
    pub dry_run: bool,

    /// Where the artifact was (or would have been) written.
    pub output_path: PathBuf,

    /// Number of records in the artifact.
    pub records_written: usize,

    /// Size of the artifact in bytes.
    pub bytes_written: usize,
}

impl ExecutionResult {
    fn from_plan(plan: &GenerationPlan, dry_run: bool) -> Self {
        Self {
            dry_run,
            output_path: plan.output_path.clone(),
            records_written: plan.record_count(),
            bytes_written: plan.content.len(),
        }
    }
}

/// Writes generation plans.
///
/// # Examples
///
/// ```no_run
/// use mockfs::operations::{GenerateOptions, GeneratePlan, PlanExecutor};
/// use std::path::PathBuf;
///
/// let plan = GeneratePlan::new(GenerateOptions::new(PathBuf::from(".")))
///     .build_plan(&mut |_: usize, _: usize| {})
///     .unwrap();
///
/// let result = PlanExecutor::new().dry_run().execute(&plan).unwrap();
/// assert!(result.dry_run);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PlanExecutor {
    dry_run: bool,
}

impl PlanExecutor {
    /// Creates an executor that writes to disk.
    #[must_use]
    pub const fn new() -> Self {
        Self { dry_run: false }
    }

    /// Report what would be written without touching the filesystem.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// An existing file at the output path is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact cannot be written.
    pub fn execute(&self, plan: &GenerationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            return Ok(ExecutionResult::from_plan(plan, true));
        }

        write_atomic(&plan.output_path, &plan.content)?;
        log::debug!(
            "wrote {} records to {}",
            plan.record_count(),
            plan.output_path.display()
        );

        Ok(ExecutionResult::from_plan(plan, false))
    }
}

//! Console output for the bootstrap sequence
//!
//! All step-level diagnostics come from the underlying tool on inherited
//! stdio; envstrap adds styled step banners, per-step status lines, and a
//! final summary. In JSON report mode the whole surface goes quiet so the
//! report owns stdout.

use console::Style;

use crate::progress::StepProgress;
use crate::sequence::{PlannedStep, SequencePlan, SequenceReport};

/// Print the planned steps without executing anything (dry run)
pub fn show_plan(plan: &SequencePlan) {
    let total = plan.steps.len();
    println!("{}", Style::new().bold().apply_to("Planned steps:"));
    for (index, step) in plan.steps.iter().enumerate() {
        println!(
            "  {} {}",
            Style::new().bold().green().apply_to(format!("[{}/{}]", index + 1, total)),
            step.label.as_str()
        );
        println!("      {} {}", Style::new().dim().apply_to("$"), step.command);
    }
}

/// Warning line usable before a [`Ui`] exists
pub fn warn_line(message: &str) {
    eprintln!(
        "{} {}",
        Style::new().yellow().bold().apply_to("warning:"),
        message
    );
}

/// Console surface for a run
pub struct Ui {
    quiet: bool,
    verbose: bool,
    progress: Option<StepProgress>,
}

impl Ui {
    /// Create the surface; `quiet` silences everything (JSON mode)
    pub fn new(quiet: bool, verbose: bool, total_steps: u64) -> Self {
        let progress = (!quiet).then(|| StepProgress::new(total_steps));
        Self {
            quiet,
            verbose,
            progress,
        }
    }

    /// A surface that prints nothing and tracks no progress
    pub fn silent() -> Self {
        Self {
            quiet: true,
            verbose: false,
            progress: None,
        }
    }

    /// Banner printed before a step runs
    pub fn step_banner(&self, index: usize, total: usize, step: &PlannedStep) {
        if self.quiet {
            return;
        }
        if let Some(progress) = &self.progress {
            progress.begin_step(step.label.as_str());
        }
        self.with_suspended(|| {
            println!(
                "{} {}",
                Style::new().bold().green().apply_to(format!("[{}/{}]", index, total)),
                Style::new().bold().apply_to(step.label.as_str())
            );
            println!("  {} {}", Style::new().dim().apply_to("$"), step.command);
        });
    }

    /// Status line printed after a step exits
    pub fn step_result(&self, step: &PlannedStep, code: i32) {
        if let Some(progress) = &self.progress {
            progress.finish_step();
        }
        if self.quiet {
            return;
        }
        self.with_suspended(|| {
            if code == 0 {
                println!(
                    "  {} {}",
                    Style::new().green().apply_to("ok"),
                    Style::new().dim().apply_to(step.label.as_str())
                );
            } else {
                println!(
                    "  {} {} (exit code {})",
                    Style::new().red().bold().apply_to("failed"),
                    step.label.as_str(),
                    code
                );
            }
        });
    }

    /// Line printed for a step skipped by strict mode
    pub fn step_skipped(&self, step: &PlannedStep) {
        if self.quiet {
            return;
        }
        self.with_suspended(|| {
            println!(
                "  {} {}",
                Style::new().yellow().apply_to("skipped"),
                Style::new().dim().apply_to(step.label.as_str())
            );
        });
    }

    /// Warning line (e.g. a demoted pin conflict)
    pub fn warn(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.with_suspended(|| warn_line(message));
    }

    /// Verbose-only note (effective settings, full command lines)
    pub fn note(&self, message: &str) {
        if self.quiet || !self.verbose {
            return;
        }
        self.with_suspended(|| {
            println!("{} {}", Style::new().dim().apply_to("#"), message);
        });
    }

    /// Hide the gauge while the closure streams child output
    pub fn suspend<T>(&self, f: impl FnOnce() -> T) -> T {
        self.with_suspended(f)
    }

    /// Clear the gauge once the sequence is over
    pub fn finish_steps(&self) {
        if let Some(progress) = &self.progress {
            progress.finish();
        }
    }

    /// Final run summary
    pub fn summary(&self, report: &SequenceReport) {
        if self.quiet {
            return;
        }
        println!();
        let failed = report
            .steps
            .iter()
            .filter(|s| s.exit_code.is_some_and(|c| c != 0))
            .count();
        let skipped = report.steps.iter().filter(|s| s.skipped).count();

        if report.exit_code == 0 && failed == 0 {
            println!(
                "{} {} steps completed",
                Style::new().green().bold().apply_to("Done:"),
                report.steps.len()
            );
        } else {
            println!(
                "{} {} step(s) failed, {} skipped (exit code {})",
                Style::new().red().bold().apply_to("Failed:"),
                failed,
                skipped,
                report.exit_code
            );
        }
    }

    fn with_suspended<T>(&self, f: impl FnOnce() -> T) -> T {
        match &self.progress {
            Some(progress) => progress.suspend(f),
            None => f(),
        }
    }
}

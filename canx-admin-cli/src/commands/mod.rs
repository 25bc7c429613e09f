//! CLI command implementations

use console::style;

use crate::project::{ArtifactSink, WriteOutcome};
use crate::scaffold::GeneratedFile;

pub mod install;
pub mod make_admin;
pub mod make_dashboard;

pub use install::InstallCommand;
pub use make_admin::MakeAdminCommand;
pub use make_dashboard::MakeDashboardCommand;

/// Place one file and report the outcome
///
/// Failures are reported, not propagated, so one file's failure never blocks
/// the placement of the others.
fn report_placement(sink: &mut impl ArtifactSink, file: &GeneratedFile) {
    match sink.place(file) {
        Ok(WriteOutcome::Created) => println!(
            "   {} Created {}: {}",
            style("✓").green().bold(),
            file.description,
            style(file.path.display()).dim()
        ),
        Ok(WriteOutcome::Skipped) => println!(
            "   {} {} already exists: {}",
            style("⚠").yellow().bold(),
            file.description,
            style(file.path.display()).dim()
        ),
        Err(err) => eprintln!(
            "   {} Error creating {}: {err:#}",
            style("✗").red().bold(),
            file.description
        ),
    }
}

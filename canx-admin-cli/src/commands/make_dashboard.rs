//! Admin dashboard generation command

use anyhow::Result;
use console::style;

use crate::project::ProjectDir;
use crate::scaffold::dashboard_file;

/// Generate the static admin dashboard view
pub struct MakeDashboardCommand;

impl MakeDashboardCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn execute() -> Result<()> {
        println!("\n{} Generating admin dashboard...", style("🚀").bold());

        let mut project = ProjectDir::current()?;
        super::report_placement(&mut project, &dashboard_file());

        Ok(())
    }
}

//! Auth scaffolding install command

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::project::{ArtifactSink, ProjectDir, WriteOutcome};
use crate::scaffold::install_files;

/// Install the fixed auth and dashboard bundle into the current project
pub struct InstallCommand;

impl InstallCommand {
    /// Execute the command
    ///
    /// Each file is placed independently; existing files are skipped and
    /// counted, and a failure on one file does not block the rest.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined or the
    /// progress style is invalid.
    pub fn execute() -> Result<()> {
        println!(
            "\n{} Installing CanxJS admin scaffolding...\n",
            style("🚀").bold()
        );

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        let files = install_files();
        let mut project = ProjectDir::current()?;

        let mut outcomes = Vec::with_capacity(files.len());
        for file in &files {
            spinner.set_message(format!("Installing {}...", file.description));
            outcomes.push(project.place(file));
        }

        spinner.finish_and_clear();

        let mut created = 0_usize;
        let mut skipped = 0_usize;
        for (file, outcome) in files.iter().zip(&outcomes) {
            match outcome {
                Ok(WriteOutcome::Created) => {
                    created += 1;
                    println!(
                        "   {} Created {}",
                        style("✓").green().bold(),
                        file.description
                    );
                }
                Ok(WriteOutcome::Skipped) => {
                    skipped += 1;
                    println!(
                        "   {} {} already exists, skipping...",
                        style("⚠").yellow().bold(),
                        file.description
                    );
                }
                Err(err) => eprintln!(
                    "   {} Error creating {}: {err:#}",
                    style("✗").red().bold(),
                    file.description
                ),
            }
        }

        println!("\n{} Installation complete!", style("✨").bold());
        println!(
            "   {}",
            style(format!("Created: {created} files | Skipped: {skipped} files")).dim()
        );
        println!();
        println!("{}", style("Next steps:").cyan().bold());
        println!("   {}", style("1. Add routes to your routes.ts file").dim());
        println!("   {}", style("2. Run: bun run dev").dim());
        println!();

        Ok(())
    }
}

//! Admin CRUD generation command

use anyhow::Result;
use console::style;

use crate::project::ProjectDir;
use crate::scaffold::{parse_fields, AdminScaffold};

/// Generate an admin controller and list view for one model
pub struct MakeAdminCommand {
    model: String,
    fields: Vec<String>,
}

impl MakeAdminCommand {
    /// Create the command from CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the model name does not start with an uppercase
    /// letter.
    pub fn new(model: String, fields: Vec<String>) -> Result<Self> {
        if !model.chars().next().unwrap_or('0').is_uppercase() {
            anyhow::bail!(
                "Model name must be PascalCase (start with uppercase): '{}'",
                model
            );
        }

        Ok(Self { model, fields })
    }

    /// Execute the command
    ///
    /// The controller and view are rendered and placed independently; a
    /// failure on one is reported and does not block the other.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn execute(&self) -> Result<()> {
        let fields = parse_fields(&self.fields);

        println!(
            "\n{} Generating admin panel for: {}",
            style("🚀").bold(),
            style(&self.model).cyan().bold()
        );
        if !fields.is_empty() {
            let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
            println!(
                "   {}",
                style(format!("Detected fields: {}", names.join(", "))).dim()
            );
        }

        let scaffold = AdminScaffold::new(self.model.clone(), fields);
        let mut project = ProjectDir::current()?;

        match scaffold.controller_file() {
            Ok(file) => super::report_placement(&mut project, &file),
            Err(err) => eprintln!(
                "   {} Error rendering controller: {err:#}",
                style("✗").red().bold()
            ),
        }

        match scaffold.view_file() {
            Ok(file) => super::report_placement(&mut project, &file),
            Err(err) => eprintln!(
                "   {} Error rendering view: {err:#}",
                style("✗").red().bold()
            ),
        }

        println!(
            "\n{} Admin panel generation complete!",
            style("✨").bold()
        );
        println!(
            "   {}",
            style("Don't forget to register your routes in routes/web.ts!").dim()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_name_must_be_pascal_case() {
        assert!(MakeAdminCommand::new("post".to_string(), vec![]).is_err());
        assert!(MakeAdminCommand::new(String::new(), vec![]).is_err());
        assert!(MakeAdminCommand::new("Post".to_string(), vec![]).is_ok());
    }
}

//! Admin CRUD scaffold generation
//!
//! Maps a model name plus parsed field specs to the generated controller and
//! list-view sources. Rendering is pure: no I/O, no timestamps, identical
//! input gives byte-identical output. Placement on disk is the caller's
//! concern, via [`crate::project::ArtifactSink`].

use super::field::FieldSpec;
use super::view;
use crate::templates;
use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

/// A generated source file, ready for placement in the target project
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Relative path from the target project root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// Short description for user feedback
    pub description: String,
}

/// Admin CRUD scaffold for one model
pub struct AdminScaffold {
    model_name: String,
    fields: Vec<FieldSpec>,
}

impl AdminScaffold {
    /// Create a scaffold for a model and its declared fields
    ///
    /// Field order is preserved into the generated table; duplicate names
    /// produce duplicate columns.
    #[must_use]
    pub fn new(model_name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            model_name: model_name.into(),
            fields,
        }
    }

    /// Model name as given on the command line
    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// URL path segment shared by the controller's view/redirect paths and
    /// the view's action links
    ///
    /// Always the lowercased model name with a trailing "s"; `Category`
    /// becomes `categorys`.
    #[must_use]
    pub fn route_segment(&self) -> String {
        format!("{}s", self.model_name.to_lowercase())
    }

    /// Render the resource controller source
    ///
    /// Field-agnostic: only the model name and derived route segment vary.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_controller(&self) -> Result<String> {
        templates::render(
            "controller",
            templates::CONTROLLER_TEMPLATE,
            &json!({
                "model_name": self.model_name,
                "plural": self.route_segment(),
            }),
        )
    }

    /// Render the tabular list-view source
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_view(&self) -> Result<String> {
        let columns = view::columns(&self.fields);

        templates::render(
            "view",
            templates::VIEW_TEMPLATE,
            &json!({
                "model_name": self.model_name,
                "plural": self.route_segment(),
                "headers": view::header_block(&columns),
                "rows": view::body_block(&columns),
            }),
        )
    }

    /// Generate the controller file
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn controller_file(&self) -> Result<GeneratedFile> {
        Ok(GeneratedFile {
            path: PathBuf::from(format!(
                "src/app/controllers/Admin/{}Controller.ts",
                self.model_name
            )),
            content: self.render_controller()?,
            description: format!("Admin controller for {}", self.model_name),
        })
    }

    /// Generate the list-view file
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn view_file(&self) -> Result<GeneratedFile> {
        Ok(GeneratedFile {
            path: PathBuf::from(format!(
                "src/resources/views/admin/{}/index.tsx",
                self.route_segment()
            )),
            content: self.render_view()?,
            description: format!("Admin list view for {}", self.model_name),
        })
    }

    /// Generate both files for this model
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn files(&self) -> Result<Vec<GeneratedFile>> {
        Ok(vec![self.controller_file()?, self.view_file()?])
    }
}

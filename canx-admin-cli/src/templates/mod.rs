//! Template sources and rendering

use anyhow::{Context, Result};
use handlebars::Handlebars;

pub mod admin;
pub mod install;

pub use admin::{CONTROLLER_TEMPLATE, VIEW_TEMPLATE};
pub use install::{
    ADMIN_DASHBOARD, AUTH_CONTROLLER, DASHBOARD_CONTROLLER, DASHBOARD_VIEW, LOGIN_VIEW,
    REGISTER_VIEW,
};

/// Render a handlebars template with the given context
///
/// HTML escaping is disabled since the output is source code, not markup
/// served to a browser.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render(name: &str, template: &str, context: &serde_json::Value) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .render_template(template, context)
        .with_context(|| format!("Failed to render template: {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_substitutes_context() {
        let rendered = render("test", "class {{model_name}}Controller", &json!({"model_name": "Post"})).unwrap();
        assert_eq!(rendered, "class PostController");
    }

    #[test]
    fn test_render_does_not_escape_code() {
        let rendered = render("test", "{{snippet}}", &json!({"snippet": "<a href=\"/x\">&</a>"})).unwrap();
        assert_eq!(rendered, "<a href=\"/x\">&</a>");
    }

    #[test]
    fn test_controller_template_placeholders() {
        assert!(CONTROLLER_TEMPLATE.contains("{{model_name}}Controller"));
        assert!(CONTROLLER_TEMPLATE.contains("admin/{{plural}}/index"));
    }

    #[test]
    fn test_view_template_placeholders() {
        assert!(VIEW_TEMPLATE.contains("{{headers}}"));
        assert!(VIEW_TEMPLATE.contains("{{rows}}"));
        assert!(VIEW_TEMPLATE.contains("/admin/{{plural}}/create"));
    }
}

//! Fixed scaffolding bundles: the auth install set and the admin dashboard

use super::generator::GeneratedFile;
use crate::templates;
use std::path::PathBuf;

/// The five-file auth scaffolding bundle emitted by `install`
///
/// Fully static content; the same render-then-place contract as the CRUD
/// scaffold, with nothing to parameterize.
#[must_use]
pub fn install_files() -> Vec<GeneratedFile> {
    vec![
        GeneratedFile {
            path: PathBuf::from("src/views/auth/Login.tsx"),
            content: templates::LOGIN_VIEW.to_string(),
            description: "Login view".to_string(),
        },
        GeneratedFile {
            path: PathBuf::from("src/views/auth/Register.tsx"),
            content: templates::REGISTER_VIEW.to_string(),
            description: "Register view".to_string(),
        },
        GeneratedFile {
            path: PathBuf::from("src/views/Dashboard.tsx"),
            content: templates::DASHBOARD_VIEW.to_string(),
            description: "Dashboard view".to_string(),
        },
        GeneratedFile {
            path: PathBuf::from("src/controllers/AuthController.ts"),
            content: templates::AUTH_CONTROLLER.to_string(),
            description: "Auth controller".to_string(),
        },
        GeneratedFile {
            path: PathBuf::from("src/controllers/DashboardController.ts"),
            content: templates::DASHBOARD_CONTROLLER.to_string(),
            description: "Dashboard controller".to_string(),
        },
    ]
}

/// The static admin dashboard view emitted by `make:dashboard`
#[must_use]
pub fn dashboard_file() -> GeneratedFile {
    GeneratedFile {
        path: PathBuf::from("src/resources/views/admin/dashboard.tsx"),
        content: templates::ADMIN_DASHBOARD.to_string(),
        description: "Admin dashboard view".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_set_paths() {
        let files = install_files();
        let paths: Vec<_> = files
            .iter()
            .map(|f| f.path.to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            paths,
            [
                "src/views/auth/Login.tsx",
                "src/views/auth/Register.tsx",
                "src/views/Dashboard.tsx",
                "src/controllers/AuthController.ts",
                "src/controllers/DashboardController.ts",
            ]
        );
    }

    #[test]
    fn test_install_views_post_to_auth_routes() {
        let files = install_files();
        assert!(files[0].content.contains("method=\"POST\" action=\"/login\""));
        assert!(files[1].content.contains("method=\"POST\" action=\"/register\""));
    }

    #[test]
    fn test_install_controllers_are_decorator_routed() {
        let files = install_files();
        assert!(files[3].content.contains("@Controller('/')"));
        assert!(files[3].content.contains("export class AuthController extends BaseController"));
        assert!(files[4].content.contains("@Get('/dashboard')"));
    }

    #[test]
    fn test_dashboard_file_path_and_content() {
        let file = dashboard_file();
        assert_eq!(
            file.path,
            PathBuf::from("src/resources/views/admin/dashboard.tsx")
        );
        assert!(file.content.contains("export default function Dashboard()"));
    }
}

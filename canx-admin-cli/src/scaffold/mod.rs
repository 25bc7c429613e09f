//! Scaffold generation: field parsing and artifact rendering

pub mod field;
pub mod generator;
pub mod install;
pub mod view;

pub use field::{parse_fields, FieldKind, FieldSpec};
pub use generator::{AdminScaffold, GeneratedFile};
pub use install::{dashboard_file, install_files};

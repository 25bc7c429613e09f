//! Table model for the generated list view
//!
//! The per-field branching lives here, separate from the surrounding page
//! template: each declared field becomes a [`Column`] pairing a header with a
//! [`Cell`] rendering, and the column list serializes to the TSX blocks that
//! get spliced into the view template. The fixed `ID` and `Actions` columns
//! belong to the page template, not this model.

use super::field::{FieldKind, FieldSpec};

/// How a table body cell renders an item's field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Two-state Yes/No badge, with the negative state styled secondary
    YesNoBadge {
        /// Accessor on the rendered item
        field: String,
    },
    /// Locale-aware date formatting via the platform default
    LocalDate {
        /// Accessor on the rendered item
        field: String,
    },
    /// Raw value reference with no transformation
    Text {
        /// Accessor on the rendered item
        field: String,
    },
}

impl Cell {
    /// Pick the cell rendering for a field based on its kind
    #[must_use]
    pub fn for_field(field: &FieldSpec) -> Self {
        let name = field.name.clone();
        match field.kind {
            FieldKind::Boolean => Self::YesNoBadge { field: name },
            FieldKind::Date => Self::LocalDate { field: name },
            FieldKind::String => Self::Text { field: name },
        }
    }

    /// Serialize to a `<TableCell>` block, indented for the row body
    #[must_use]
    pub fn to_tsx(&self) -> String {
        match self {
            Self::YesNoBadge { field } => format!(
                "                    <TableCell>\n                      {{item.{field} ? <Badge>Yes</Badge> : <Badge variant=\"secondary\">No</Badge>}}\n                    </TableCell>"
            ),
            Self::LocalDate { field } => format!(
                "                    <TableCell>\n                      {{new Date(item.{field}).toLocaleDateString()}}\n                    </TableCell>"
            ),
            Self::Text { field } => format!(
                "                    <TableCell>\n                      {{item.{field}}}\n                    </TableCell>"
            ),
        }
    }
}

/// A data column derived from one declared field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header text, the field name verbatim
    pub header: String,
    /// Body cell rendering
    pub cell: Cell,
}

impl Column {
    fn header_tsx(&self) -> String {
        format!("                  <TableHead>{}</TableHead>", self.header)
    }
}

/// Derive the data columns for a field list, in input order
#[must_use]
pub fn columns(fields: &[FieldSpec]) -> Vec<Column> {
    fields
        .iter()
        .map(|field| Column {
            header: field.name.clone(),
            cell: Cell::for_field(field),
        })
        .collect()
}

/// Serialize the header cells, one `<TableHead>` line per column
#[must_use]
pub fn header_block(columns: &[Column]) -> String {
    columns
        .iter()
        .map(Column::header_tsx)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize the body cells, one `<TableCell>` block per column
#[must_use]
pub fn body_block(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|column| column.cell.to_tsx())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str, kind: FieldKind) -> FieldSpec {
        FieldSpec {
            name: name.to_string(),
            kind,
        }
    }

    #[test]
    fn test_cell_branch_per_kind() {
        assert_eq!(
            Cell::for_field(&spec("is_active", FieldKind::Boolean)),
            Cell::YesNoBadge {
                field: "is_active".to_string()
            }
        );
        assert_eq!(
            Cell::for_field(&spec("published_at", FieldKind::Date)),
            Cell::LocalDate {
                field: "published_at".to_string()
            }
        );
        assert_eq!(
            Cell::for_field(&spec("title", FieldKind::String)),
            Cell::Text {
                field: "title".to_string()
            }
        );
    }

    #[test]
    fn test_boolean_cell_tsx() {
        let tsx = Cell::YesNoBadge {
            field: "is_active".to_string(),
        }
        .to_tsx();

        assert!(tsx.contains("<Badge>Yes</Badge>"));
        assert!(tsx.contains("<Badge variant=\"secondary\">No</Badge>"));
        assert!(tsx.contains("item.is_active"));
    }

    #[test]
    fn test_date_cell_tsx() {
        let tsx = Cell::LocalDate {
            field: "published_at".to_string(),
        }
        .to_tsx();

        assert!(tsx.contains("new Date(item.published_at).toLocaleDateString()"));
    }

    #[test]
    fn test_text_cell_tsx_has_no_wrapper() {
        let tsx = Cell::Text {
            field: "title".to_string(),
        }
        .to_tsx();

        assert!(tsx.contains("{item.title}"));
        assert!(!tsx.contains("Badge"));
        assert!(!tsx.contains("new Date"));
    }

    #[test]
    fn test_columns_preserve_input_order() {
        let fields = vec![
            spec("title", FieldKind::String),
            spec("is_active", FieldKind::Boolean),
            spec("title", FieldKind::String),
        ];

        let cols = columns(&fields);
        let headers: Vec<_> = cols.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(headers, ["title", "is_active", "title"]);
    }

    #[test]
    fn test_header_block_one_line_per_column() {
        let cols = columns(&[
            spec("title", FieldKind::String),
            spec("is_active", FieldKind::Boolean),
        ]);

        let block = header_block(&cols);
        let lines: Vec<_> = block.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("<TableHead>title</TableHead>"));
        assert!(lines[1].contains("<TableHead>is_active</TableHead>"));
    }

    #[test]
    fn test_empty_fields_yield_empty_blocks() {
        let cols = columns(&[]);
        assert!(cols.is_empty());
        assert_eq!(header_block(&cols), "");
        assert_eq!(body_block(&cols), "");
    }
}

//! Field specifications parsed from `name:type` CLI tokens

/// Supported scaffolding field types
///
/// Anything outside the closed set falls back to `String`, which renders as a
/// plain text cell. Tags are matched case-sensitively (`Boolean` is not
/// `boolean`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    /// Plain text value, rendered as-is
    #[default]
    String,
    /// Two-state value, rendered as a Yes/No badge
    Boolean,
    /// Date value, rendered with locale-aware formatting
    Date,
}

impl FieldKind {
    /// Resolve a raw type tag to a field kind
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "boolean" => Self::Boolean,
            "date" => Self::Date,
            _ => Self::String,
        }
    }
}

/// A single field declared on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, used verbatim as the column header and value accessor
    pub name: String,
    /// Rendering kind resolved from the type tag
    pub kind: FieldKind,
}

/// Parse raw `name:type` tokens into field specs
///
/// Each token is split on the first `:`. A missing or unrecognized type tag
/// degrades to [`FieldKind::String`] rather than failing; a generator should
/// not block on a typo'd flag. Input order is preserved and duplicate names
/// are kept as given.
#[must_use]
pub fn parse_fields(tokens: &[String]) -> Vec<FieldSpec> {
    tokens
        .iter()
        .map(|token| match token.split_once(':') {
            Some((name, tag)) => FieldSpec {
                name: name.to_string(),
                kind: FieldKind::from_tag(tag),
            },
            None => FieldSpec {
                name: token.clone(),
                kind: FieldKind::String,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(specs: &[&str]) -> Vec<String> {
        specs.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_typed_fields() {
        let fields = parse_fields(&tokens(&[
            "title:string",
            "is_active:boolean",
            "published_at:date",
        ]));

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].name, "title");
        assert_eq!(fields[0].kind, FieldKind::String);
        assert_eq!(fields[1].name, "is_active");
        assert_eq!(fields[1].kind, FieldKind::Boolean);
        assert_eq!(fields[2].name, "published_at");
        assert_eq!(fields[2].kind, FieldKind::Date);
    }

    #[test]
    fn test_missing_type_defaults_to_string() {
        let fields = parse_fields(&tokens(&["title"]));
        assert_eq!(fields[0].name, "title");
        assert_eq!(fields[0].kind, FieldKind::String);
    }

    #[test]
    fn test_unrecognized_type_defaults_to_string() {
        let fields = parse_fields(&tokens(&["price:decimal", "meta:json"]));
        assert_eq!(fields[0].kind, FieldKind::String);
        assert_eq!(fields[1].kind, FieldKind::String);
    }

    #[test]
    fn test_type_tags_are_case_sensitive() {
        let fields = parse_fields(&tokens(&["flag:Boolean", "day:DATE"]));
        assert_eq!(fields[0].kind, FieldKind::String);
        assert_eq!(fields[1].kind, FieldKind::String);
    }

    #[test]
    fn test_splits_on_first_colon_only() {
        let fields = parse_fields(&tokens(&["status:enum:Draft"]));
        assert_eq!(fields[0].name, "status");
        assert_eq!(fields[0].kind, FieldKind::String);
    }

    #[test]
    fn test_empty_token_list() {
        assert!(parse_fields(&[]).is_empty());
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let fields = parse_fields(&tokens(&["b:date", "a:boolean", "b:date"]));
        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "b"]);
    }
}

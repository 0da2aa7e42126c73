use oxc_ast::ast::Statement;
use serde::{Deserialize, Serialize};

/// Result of exploding one module body.
///
/// The three sequences are independent; each keeps first-encounter order.
#[derive(Debug, Default)]
pub struct ExplodedModule<'a> {
    /// Canonical import records.
    pub imports: Vec<ModuleSpecifier>,
    /// Canonical export records.
    pub exports: Vec<ModuleSpecifier>,
    /// Statements left once import/export syntax is stripped.
    pub statements: Vec<ExplodedStatement<'a>>,
}

impl<'a> ExplodedModule<'a> {
    /// Returns `true` when the module produced nothing at all.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.exports.is_empty() && self.statements.is_empty()
    }

    /// Drops statement metadata, keeping only the nodes in order.
    pub fn into_statements(self) -> impl Iterator<Item = Statement<'a>> {
        self.statements.into_iter().map(|stmt| stmt.statement)
    }

    pub(crate) fn push_statement(&mut self, statement: Statement<'a>, metadata: NodeMetadata) {
        self.statements.push(ExplodedStatement {
            statement,
            metadata,
        });
    }
}

/// A statement together with the metadata copied from the source node(s).
#[derive(Debug)]
pub struct ExplodedStatement<'a> {
    pub statement: Statement<'a>,
    pub metadata: NodeMetadata,
}

/// One normalized import or export binding.
///
/// Optional fields are omitted when serialized, never written as `null`; an
/// empty string is still a present value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSpecifier {
    /// Binding kind; absent means unspecified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SpecifierKind>,
    /// Name of the binding inside this module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    /// Name seen by the other side of the import/export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<String>,
    /// Module request string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Where the introducing node sits in the source.
    pub location: Location,
}

impl ModuleSpecifier {
    /// Builds a specifier, keeping only the fields that were supplied.
    pub fn new(
        kind: Option<SpecifierKind>,
        local: Option<&str>,
        external: Option<&str>,
        source: Option<&str>,
        location: Location,
    ) -> Self {
        Self {
            kind,
            local: local.map(str::to_owned),
            external: external.map(str::to_owned),
            source: source.map(str::to_owned),
            location,
        }
    }

    /// A specifier that names nothing but its module (`import "m"`, `export * from "m"`).
    pub fn source_only(source: Option<&str>, location: Location) -> Self {
        Self::new(None, None, None, source, location)
    }
}

/// Value/type qualifier of an import binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecifierKind {
    Value,
    Type,
    Typeof,
}

impl SpecifierKind {
    pub fn is_value(self) -> bool {
        matches!(self, Self::Value)
    }
}

/// Line/column of a single point. Lines are 1-based, columns 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Start and end points of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

/// Metadata copied onto an output statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMetadata {
    #[serde(flatten)]
    pub position: NodePosition,
    #[serde(flatten)]
    pub comments: NodeComments,
}

/// Offsets and line/column range, present only for nodes that came from source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePosition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// Comments attached to a node, grouped by where they sit relative to it.
///
/// A group is `None` when no comment falls into it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeComments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leading_comments: Option<Vec<CommentText>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_comments: Option<Vec<CommentText>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_comments: Option<Vec<CommentText>>,
}

impl NodeComments {
    pub fn is_empty(&self) -> bool {
        self.leading_comments.is_none()
            && self.trailing_comments.is_none()
            && self.inner_comments.is_none()
    }
}

/// A comment with its delimiters stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentText {
    #[serde(rename = "type")]
    pub kind: CommentType,
    pub value: String,
    pub start: u32,
    pub end: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentType {
    CommentLine,
    CommentBlock,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> Location {
        Location {
            start: Position::new(1, 0),
            end: Position::new(1, 10),
        }
    }

    #[test]
    fn omits_absent_fields() {
        let specifier = ModuleSpecifier::source_only(Some("c"), location());
        let value = serde_json::to_value(&specifier).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert_eq!(object["source"], "c");
        assert!(!object.contains_key("local"));
        assert!(!object.contains_key("kind"));
    }

    #[test]
    fn keeps_empty_strings() {
        let specifier = ModuleSpecifier::source_only(Some(""), location());
        let value = serde_json::to_value(&specifier).unwrap();
        assert_eq!(value["source"], "");

        let back: ModuleSpecifier = serde_json::from_value(value).unwrap();
        assert_eq!(back.source.as_deref(), Some(""));
    }

    #[test]
    fn reads_typeof_kind() {
        let json = r#"{
            "kind": "typeof",
            "local": "a",
            "external": "a",
            "source": "b",
            "location": {"start": {"line": 1, "column": 0}, "end": {"line": 1, "column": 25}}
        }"#;
        let specifier: ModuleSpecifier = serde_json::from_str(json).unwrap();
        assert_eq!(specifier.kind, Some(SpecifierKind::Typeof));
        assert!(!SpecifierKind::Typeof.is_value());
    }

    #[test]
    fn flattens_metadata() {
        let metadata = NodeMetadata {
            position: NodePosition {
                start: Some(0),
                end: Some(6),
                loc: Some(location()),
            },
            comments: NodeComments {
                leading_comments: Some(vec![CommentText {
                    kind: CommentType::CommentLine,
                    value: " note".into(),
                    start: 0,
                    end: 7,
                }]),
                ..NodeComments::default()
            },
        };

        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["start"], 0);
        assert_eq!(value["leadingComments"][0]["type"], "CommentLine");
        assert!(value.get("trailingComments").is_none());
        assert!(value.get("innerComments").is_none());
    }
}

use serde::{Deserialize, Serialize};

/// Declaration kind of a marked type, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[serde(rename = "package")]
    PackagePrivate,
    Protected,
    Private,
}

/// Raw data member of an annotated type, before the introspector filters
/// out static and compiler-generated members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDescriptor {
    pub name: String,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub synthetic: bool,
}

impl MemberDescriptor {
    pub fn instance(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_static: false,
            synthetic: false,
        }
    }
}

/// One marked type declaration, supplied fresh by the host each round.
/// The core only reads it.
#[derive(Debug, Clone)]
pub struct AnnotatedType {
    pub name: String,
    pub package: String,
    pub kind: TypeKind,
    pub visibility: Visibility,
    pub members: Vec<MemberDescriptor>,
}

/// Instance field of an annotated type; `index` follows declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted,
    Rejected { reason: String },
}

/// Error-severity message surfaced through the host diagnostic channel.
/// Rendered as `<type name> <reason>`, matching the message shape the
/// generator has always produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub type_name: String,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.type_name, self.message)
    }
}

/// Format template plus the field-access expressions that feed it.
///
/// Invariant: the number of `%s` placeholders in `template` equals
/// `args.len()` equals the field count, and both sequences follow field
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatExpression {
    pub template: String,
    pub args: Vec<String>,
}

/// One generated companion source file, ready for the host's file writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub package: String,
    pub type_name: String,
    pub file_name: String,
    pub content: String,
}

/// Result of one pure processing pass over a round's candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Completed { units: Vec<GeneratedUnit> },
    Aborted { diagnostic: Diagnostic },
}

/// Summary of one driver round, including what actually hit the writer.
#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    /// Always true: the generator claims ownership of the marker whether or
    /// not the round aborted.
    pub handled: bool,
    pub aborted: bool,
    pub candidates: usize,
    pub generated: usize,
    pub written: Vec<String>,
    pub failed_writes: usize,
    pub diagnostics: Vec<String>,
}

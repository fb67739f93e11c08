pub mod driver;
pub mod emit;
pub mod format;
pub mod introspect;
pub mod validate;

pub use crate::domain::model::{
    AnnotatedType, Diagnostic, FieldDescriptor, FormatExpression, GeneratedUnit, RoundOutcome,
    RoundReport, ValidationResult,
};
pub use crate::domain::ports::{DiagnosticSink, SourceWriter};
pub use crate::utils::error::Result;

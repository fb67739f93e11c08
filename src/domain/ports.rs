use crate::domain::model::{Diagnostic, GeneratedUnit};
use crate::utils::error::Result;

/// Host file-writing facility. Returns an identifier for the written unit
/// (a path, for the filesystem adapter).
pub trait SourceWriter: Send + Sync {
    fn write_unit(&self, unit: &GeneratedUnit) -> Result<String>;
}

/// Host diagnostic channel. The core only ever emits error severity.
pub trait DiagnosticSink: Send + Sync {
    fn error(&self, diagnostic: &Diagnostic);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn error(&self, diagnostic: &Diagnostic) {
        (**self).error(diagnostic);
    }
}

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::diagnostics::{CollectingDiagnostics, TracingDiagnostics};
pub use adapters::fs_writer::DirectoryWriter;
pub use config::manifest::RoundManifest;
pub use config::CliConfig;
pub use core::driver::{process, Generator};
pub use core::emit::DEFAULT_LOG_FACILITY;
pub use domain::model::{
    AnnotatedType, Diagnostic, FieldDescriptor, FormatExpression, GeneratedUnit, MemberDescriptor,
    RoundOutcome, RoundReport, TypeKind, ValidationResult, Visibility,
};
pub use utils::error::{GenError, Result};

use crate::domain::model::Diagnostic;
use crate::domain::ports::DiagnosticSink;
use std::sync::Mutex;

/// Surfaces diagnostics on the process log, the way a build tool would show
/// them to the user.
#[derive(Debug, Clone, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn error(&self, diagnostic: &Diagnostic) {
        tracing::error!("{}", diagnostic);
    }
}

/// Test sink that records every diagnostic it receives.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    messages: Mutex<Vec<String>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("diagnostic lock").clone()
    }
}

impl DiagnosticSink for CollectingDiagnostics {
    fn error(&self, diagnostic: &Diagnostic) {
        self.messages
            .lock()
            .expect("diagnostic lock")
            .push(diagnostic.to_string());
    }
}
